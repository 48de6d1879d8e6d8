pub mod analytics;

pub use analytics::{WardrobeAnalytics, WardrobeReport};
