//! Document to record conversion
//!
//! Turns untyped JSON documents into typed records, reporting every problem
//! as `InvalidRecord` against the record's id.

use super::document::{GarmentDocument, OutfitDocument, UsageDocument, UserDocument};
use crate::core::{
    Garment, GarmentId, Outfit, Preferences, RecordKind, Result, Usage, User, UserId,
    WardrobeError,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value as JsonValue;

pub(crate) const MISSING_ID: &str = "<missing>";

/// Best-effort id of a raw document, used to label errors.
pub fn document_id(value: &JsonValue) -> String {
    match value.get("id").or_else(|| value.get("_id")) {
        Some(JsonValue::String(id)) => id.clone(),
        Some(JsonValue::Number(id)) => id.to_string(),
        _ => MISSING_ID.to_string(),
    }
}

/// Parse a document date into the calendar day it names.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the day as written, offset
/// ignored) and naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps.
pub fn parse_document_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Converts raw documents into typed records
pub struct DocumentConverter;

impl DocumentConverter {
    pub fn user(value: &JsonValue) -> Result<User> {
        let doc: UserDocument = decode(RecordKind::User, value)?;
        let id = required(RecordKind::User, MISSING_ID, "id", doc.id.or(doc.object_id))?;
        let preferences = doc.preferences.unwrap_or_default();

        Ok(User {
            id: UserId::from(id),
            preferences: Preferences {
                styles: preferences.styles,
                favorite_colors: preferences.favorite_colors,
            },
        })
    }

    pub fn garment(value: &JsonValue) -> Result<Garment> {
        let kind = RecordKind::Garment;
        let doc: GarmentDocument = decode(kind, value)?;
        let id = required(kind, MISSING_ID, "id", doc.id.or(doc.object_id))?;
        let user_id = required(kind, &id, "userId", doc.user_id)?;
        let category = required(kind, &id, "category", doc.category)?;
        let color = required(kind, &id, "color", doc.color)?;

        let cost = doc.cost.unwrap_or(0.0);
        if !cost.is_finite() || cost < 0.0 {
            return Err(WardrobeError::invalid_record(
                kind,
                id,
                format!("cost must be a non-negative number, got {}", cost),
            ));
        }

        Ok(Garment {
            id: id.into(),
            user_id: user_id.into(),
            category,
            color,
            season: doc.season,
            cost,
            wear_count: doc.wear_count.unwrap_or(0),
        })
    }

    pub fn outfit(value: &JsonValue) -> Result<Outfit> {
        let kind = RecordKind::Outfit;
        let doc: OutfitDocument = decode(kind, value)?;
        let id = required(kind, MISSING_ID, "id", doc.id.or(doc.object_id))?;
        let user_id = required(kind, &id, "userId", doc.user_id)?;
        let raw_date = required(kind, &id, "date", doc.date)?;
        let date = parse_date(kind, &id, "date", &raw_date)?;
        let garment_ids = doc.garment_ids.ok_or_else(|| {
            WardrobeError::invalid_record(kind, id.as_str(), "missing required field 'garmentIds'")
        })?;

        Ok(Outfit {
            id: id.into(),
            user_id: user_id.into(),
            date,
            garment_ids: garment_ids.into_iter().map(GarmentId::from).collect(),
            preview_image_ref: doc.preview_image_ref,
            occasion: doc.occasion,
        })
    }

    pub fn usage(value: &JsonValue) -> Result<Usage> {
        let kind = RecordKind::Usage;
        let doc: UsageDocument = decode(kind, value)?;
        let id = required(kind, MISSING_ID, "id", doc.id.or(doc.object_id))?;
        let user_id = required(kind, &id, "userId", doc.user_id)?;
        let garment_id = required(kind, &id, "garmentId", doc.garment_id)?;
        let raw_date = required(kind, &id, "wornDate", doc.worn_date)?;
        let worn_date = parse_date(kind, &id, "wornDate", &raw_date)?;

        Ok(Usage {
            id: id.into(),
            user_id: user_id.into(),
            garment_id: garment_id.into(),
            outfit_id: doc.outfit_id.map(Into::into),
            worn_date,
        })
    }
}

fn decode<'de, T: Deserialize<'de>>(kind: RecordKind, value: &'de JsonValue) -> Result<T> {
    if !value.is_object() {
        return Err(WardrobeError::invalid_record(
            kind,
            document_id(value),
            "expected a JSON object",
        ));
    }
    T::deserialize(value)
        .map_err(|e| WardrobeError::invalid_record(kind, document_id(value), e.to_string()))
}

fn required(kind: RecordKind, id: &str, field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(WardrobeError::invalid_record(
            kind,
            id,
            format!("field '{}' is empty", field),
        )),
        None => Err(WardrobeError::invalid_record(
            kind,
            id,
            format!("missing required field '{}'", field),
        )),
    }
}

fn parse_date(kind: RecordKind, id: &str, field: &str, raw: &str) -> Result<NaiveDate> {
    parse_document_date(raw).ok_or_else(|| {
        WardrobeError::invalid_record(kind, id, format!("unparseable {} '{}'", field, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_document_date_formats() {
        assert_eq!(parse_document_date("2025-03-01"), Some(ymd(2025, 3, 1)));
        assert_eq!(parse_document_date("2025-03-01T23:30:00Z"), Some(ymd(2025, 3, 1)));
        assert_eq!(parse_document_date("2025-03-01T23:30:00-08:00"), Some(ymd(2025, 3, 1)));
        assert_eq!(parse_document_date("2025-03-01T08:15:00.250"), Some(ymd(2025, 3, 1)));
        assert_eq!(parse_document_date(" 2025-03-01 "), Some(ymd(2025, 3, 1)));
        assert_eq!(parse_document_date("2025-02-30"), None);
        assert_eq!(parse_document_date("yesterday"), None);
    }

    #[test]
    fn test_garment_conversion() {
        let garment = DocumentConverter::garment(&json!({
            "_id": "g1",
            "userId": "u1",
            "category": "tops",
            "color": "navy",
            "season": ["summer"],
            "cost": 35.5,
            "wearCount": 4
        }))
        .unwrap();

        assert_eq!(garment.id, GarmentId::from("g1"));
        assert_eq!(garment.category, "tops");
        assert_eq!(garment.season, vec!["summer".to_string()]);
        assert_eq!(garment.cost, 35.5);
        assert_eq!(garment.wear_count, 4);
    }

    #[test]
    fn test_id_and_object_id_together() {
        let garment = DocumentConverter::garment(&json!({
            "_id": "g1", "id": "g1", "userId": "u1", "category": "tops", "color": "navy"
        }))
        .unwrap();
        assert_eq!(garment.id, GarmentId::from("g1"));

        let outfit = DocumentConverter::outfit(&json!({
            "_id": "65f0c0ffee", "id": "o1", "userId": "u1", "date": "2025-03-01", "garmentIds": []
        }))
        .unwrap();
        assert_eq!(outfit.id.as_str(), "o1");

        let usage = DocumentConverter::usage(&json!({
            "_id": "s1", "userId": "u1", "garmentId": "g1", "wornDate": "2025-03-01"
        }))
        .unwrap();
        assert_eq!(usage.id.as_str(), "s1");
    }

    #[test]
    fn test_garment_defaults() {
        let garment = DocumentConverter::garment(&json!({
            "id": "g1", "userId": "u1", "category": "tops", "color": "navy"
        }))
        .unwrap();
        assert_eq!(garment.cost, 0.0);
        assert_eq!(garment.wear_count, 0);
        assert!(garment.season.is_empty());
    }

    #[test]
    fn test_missing_field_names_the_record() {
        let err = DocumentConverter::garment(&json!({
            "id": "g7", "userId": "u1", "color": "navy"
        }))
        .unwrap_err();

        assert_eq!(
            err,
            WardrobeError::invalid_record(
                RecordKind::Garment,
                "g7",
                "missing required field 'category'"
            )
        );
    }

    #[test]
    fn test_bad_date_names_the_record() {
        let err = DocumentConverter::outfit(&json!({
            "id": "o9", "userId": "u1", "date": "03/01/2025", "garmentIds": []
        }))
        .unwrap_err();

        assert_eq!(err.record_id(), Some("o9"));
        assert!(matches!(err, WardrobeError::InvalidRecord { kind: RecordKind::Outfit, .. }));
    }

    #[test]
    fn test_wrong_field_type_names_the_record() {
        let err = DocumentConverter::garment(&json!({
            "id": "g2", "userId": "u1", "category": "tops", "color": "red", "cost": "cheap"
        }))
        .unwrap_err();
        assert_eq!(err.record_id(), Some("g2"));

        let err = DocumentConverter::usage(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.record_id(), Some(MISSING_ID));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let err = DocumentConverter::garment(&json!({
            "id": "g3", "userId": "u1", "category": "tops", "color": "red", "cost": -1.0
        }))
        .unwrap_err();
        assert_eq!(err.record_id(), Some("g3"));
    }

    #[test]
    fn test_usage_conversion() {
        let usage = DocumentConverter::usage(&json!({
            "id": "s1",
            "userId": "u1",
            "garmentId": "g1",
            "outfitId": "o1",
            "wornDate": "2025-06-12T19:00:00+02:00"
        }))
        .unwrap();

        assert_eq!(usage.worn_date, ymd(2025, 6, 12));
        assert_eq!(usage.outfit_id.unwrap().as_str(), "o1");
    }

    #[test]
    fn test_user_conversion() {
        let user = DocumentConverter::user(&json!({
            "id": "u1",
            "preferences": { "styles": ["minimal"], "favoriteColors": ["black"] }
        }))
        .unwrap();
        assert_eq!(user.preferences.favorite_colors, vec!["black".to_string()]);

        let bare = DocumentConverter::user(&json!({ "id": "u2" })).unwrap();
        assert!(bare.preferences.styles.is_empty());
    }
}
