pub mod error;
pub mod types;

pub use error::{RecordKind, Result, WardrobeError};
pub use types::{
    Garment, GarmentId, Outfit, OutfitId, Preferences, Usage, UsageId, User, UserId,
    WardrobeSnapshot,
};
