// ============================================================================
// Wardrobe Analytics Library
// ============================================================================

//! Calendar and analytics aggregation over a user's wardrobe.
//!
//! Records (users, garments, outfits, usages) are read from an external
//! document store as snapshots; everything derived from them (month grids,
//! wear streaks, the most-worn outfit, category and colour breakdowns) is
//! computed by pure functions that never mutate their inputs.

pub mod analytics;
pub mod calendar;
pub mod config;
pub mod core;
pub mod facade;
pub mod json;
pub mod storage;

// Re-export main types for convenience
pub use crate::core::{
    Garment, GarmentId, Outfit, OutfitId, Preferences, RecordKind, Result, Usage, UsageId, User,
    UserId, WardrobeError, WardrobeSnapshot,
};
pub use analytics::{
    BreakdownEntry, MostWornGroup, category_breakdown, colour_breakdown, most_worn_this_month,
};
pub use calendar::{
    CalendarDay, MonthGrid, OutfitIndex, build_outfit_index, current_streak, date_key,
    month_grid, week_of,
};
pub use config::AggregatorConfig;
pub use facade::{WardrobeAnalytics, WardrobeReport};
pub use storage::{DocumentStore, InMemoryStore, fetch_snapshot};
