//! Analytics rollups over garment, outfit and usage snapshots.
//!
//! Every function here is pure: inputs are borrowed, never mutated, and
//! results own their data.

mod breakdown;
mod most_worn;
mod wear;

pub use breakdown::{
    BreakdownEntry, category_breakdown, colour_breakdown, favourite_colour_share,
    season_breakdown,
};
pub use most_worn::{MostWornGroup, most_worn_this_month, outfit_signature};
pub use wear::{
    WardrobeValue, WearCountMismatch, audit_wear_counts, cost_per_wear, least_worn_garments,
    recent_outfits, reconstruct_wear_counts, wardrobe_value,
};
