//! Document shapes as the external store serves them.
//!
//! Every field is optional here so that a missing field can be reported
//! against the record's id instead of failing the whole payload. Mongo-style
//! `_id` is read separately from `id`; payloads may carry both.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDocument {
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub favorite_colors: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub object_id: Option<String>,
    #[serde(default)]
    pub preferences: Option<PreferencesDocument>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentDocument {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub object_id: Option<String>,
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub season: Vec<String>,
    pub cost: Option<f64>,
    pub wear_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitDocument {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub object_id: Option<String>,
    pub user_id: Option<String>,
    pub date: Option<String>,
    pub garment_ids: Option<Vec<String>>,
    pub preview_image_ref: Option<String>,
    pub occasion: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDocument {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub object_id: Option<String>,
    pub user_id: Option<String>,
    pub garment_id: Option<String>,
    pub outfit_id: Option<String>,
    pub worn_date: Option<String>,
}

/// Raw snapshot payload. Records stay untyped until conversion so each one
/// can fail on its own.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub user: Option<JsonValue>,
    #[serde(default)]
    pub garments: Vec<JsonValue>,
    #[serde(default)]
    pub outfits: Vec<JsonValue>,
    #[serde(default)]
    pub usages: Vec<JsonValue>,
}
