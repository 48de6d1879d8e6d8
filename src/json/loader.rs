//! Snapshot loading
//!
//! Builds a [`WardrobeSnapshot`] from the JSON payload the store returns,
//! converting every record and checking that it belongs to the snapshot's
//! user.

use super::converter::DocumentConverter;
use super::document::SnapshotDocument;
use crate::core::{
    Garment, Outfit, RecordKind, Result, Usage, UserId, WardrobeError, WardrobeSnapshot,
};
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::{Level, event, info_span};

impl WardrobeSnapshot {
    /// Parse a snapshot from JSON text.
    ///
    /// # Example
    /// ```
    /// use wardrobe_analytics::WardrobeSnapshot;
    ///
    /// let snapshot = WardrobeSnapshot::from_json_str(r#"{
    ///     "garments": [
    ///         {"id": "g1", "userId": "u1", "category": "tops", "color": "red"}
    ///     ]
    /// }"#).unwrap();
    /// assert_eq!(snapshot.garments.len(), 1);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &JsonValue) -> Result<Self> {
        let document = SnapshotDocument::deserialize_from(value)?;
        Self::from_document(&document)
    }

    /// Read and parse a snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| WardrobeError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    pub fn from_document(document: &SnapshotDocument) -> Result<Self> {
        let span = info_span!(
            "snapshot.convert",
            garments = document.garments.len(),
            outfits = document.outfits.len(),
            usages = document.usages.len()
        );
        let _guard = span.enter();

        let user = document
            .user
            .as_ref()
            .filter(|value| !value.is_null())
            .map(DocumentConverter::user)
            .transpose()?;
        let owner = user.as_ref().map(|user| user.id.clone());

        let garments = document
            .garments
            .iter()
            .map(|value| -> Result<Garment> {
                let garment = DocumentConverter::garment(value)?;
                check_owner(RecordKind::Garment, garment.id.as_str(), &garment.user_id, owner.as_ref())?;
                Ok(garment)
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| event!(Level::DEBUG, error = %err, "garment rejected"))?;

        let outfits = document
            .outfits
            .iter()
            .map(|value| -> Result<Outfit> {
                let outfit = DocumentConverter::outfit(value)?;
                check_owner(RecordKind::Outfit, outfit.id.as_str(), &outfit.user_id, owner.as_ref())?;
                Ok(outfit)
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| event!(Level::DEBUG, error = %err, "outfit rejected"))?;

        let usages = document
            .usages
            .iter()
            .map(|value| -> Result<Usage> {
                let usage = DocumentConverter::usage(value)?;
                check_owner(RecordKind::Usage, usage.id.as_str(), &usage.user_id, owner.as_ref())?;
                Ok(usage)
            })
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| event!(Level::DEBUG, error = %err, "usage rejected"))?;

        event!(Level::DEBUG, "snapshot converted");

        Ok(Self {
            user,
            garments,
            outfits,
            usages,
        })
    }
}

impl SnapshotDocument {
    fn deserialize_from(value: &JsonValue) -> Result<Self> {
        if !value.is_object() {
            return Err(WardrobeError::Parse("snapshot must be a JSON object".to_string()));
        }
        Ok(serde::Deserialize::deserialize(value)?)
    }
}

fn check_owner(kind: RecordKind, id: &str, user_id: &UserId, owner: Option<&UserId>) -> Result<()> {
    match owner {
        Some(owner) if owner != user_id => Err(WardrobeError::invalid_record(
            kind,
            id,
            format!("belongs to user '{}', snapshot is for '{}'", user_id, owner),
        )),
        _ => Ok(()),
    }
}
