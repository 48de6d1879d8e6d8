use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

record_id!(
    /// Identifier of a user document
    UserId
);
record_id!(
    /// Identifier of a garment document
    GarmentId
);
record_id!(
    /// Identifier of an outfit document
    OutfitId
);
record_id!(
    /// Identifier of a usage document
    UsageId
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub styles: Vec<String>,
    pub favorite_colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub preferences: Preferences,
}

impl User {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            preferences: Preferences::default(),
        }
    }

    pub fn styles(mut self, styles: &[&str]) -> Self {
        self.preferences.styles = styles.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn favorite_colors(mut self, colors: &[&str]) -> Self {
        self.preferences.favorite_colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }
}

/// A single wardrobe item.
///
/// `wear_count` is denormalized: it is bumped when a usage referencing the
/// garment is created and is never recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Garment {
    pub id: GarmentId,
    pub user_id: UserId,
    pub category: String,
    pub color: String,
    pub season: Vec<String>,
    pub cost: f64,
    pub wear_count: u32,
}

impl Garment {
    pub fn new(
        id: impl Into<GarmentId>,
        user_id: impl Into<UserId>,
        category: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            category: category.into(),
            color: color.into(),
            season: Vec::new(),
            cost: 0.0,
            wear_count: 0,
        }
    }

    pub fn season(mut self, season: &[&str]) -> Self {
        self.season = season.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn wear_count(mut self, wear_count: u32) -> Self {
        self.wear_count = wear_count;
        self
    }
}

/// A dated composition of garments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: OutfitId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub garment_ids: Vec<GarmentId>,
    pub preview_image_ref: Option<String>,
    pub occasion: Option<String>,
}

impl Outfit {
    pub fn new(
        id: impl Into<OutfitId>,
        user_id: impl Into<UserId>,
        date: NaiveDate,
        garment_ids: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date,
            garment_ids: garment_ids.iter().map(|g| GarmentId::from(*g)).collect(),
            preview_image_ref: None,
            occasion: None,
        }
    }

    pub fn occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    pub fn preview_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.preview_image_ref = Some(image_ref.into());
        self
    }
}

/// "Garment worn on this date" join record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub id: UsageId,
    pub user_id: UserId,
    pub garment_id: GarmentId,
    pub outfit_id: Option<OutfitId>,
    pub worn_date: NaiveDate,
}

impl Usage {
    pub fn new(
        id: impl Into<UsageId>,
        user_id: impl Into<UserId>,
        garment_id: impl Into<GarmentId>,
        worn_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            garment_id: garment_id.into(),
            outfit_id: None,
            worn_date,
        }
    }

    pub fn outfit(mut self, outfit_id: impl Into<OutfitId>) -> Self {
        self.outfit_id = Some(outfit_id.into());
        self
    }
}

/// Read-only collections for one user, as fetched from the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WardrobeSnapshot {
    pub user: Option<User>,
    pub garments: Vec<Garment>,
    pub outfits: Vec<Outfit>,
    pub usages: Vec<Usage>,
}

impl WardrobeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty() && self.outfits.is_empty() && self.usages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_serialize_as_plain_strings() {
        let id = GarmentId::from("g-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"g-1\"");
        assert_eq!(id.to_string(), "g-1");
    }

    #[test]
    fn test_outfit_serializes_camel_case() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let outfit = Outfit::new("o1", "u1", date, &["a", "b"]).occasion("work");
        let json = serde_json::to_value(&outfit).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["date"], "2025-03-01");
        assert_eq!(json["garmentIds"][1], "b");
        assert_eq!(json["occasion"], "work");
        assert!(json["previewImageRef"].is_null());
    }
}
