use crate::core::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECENT_LIMIT: usize = 6;
pub const DEFAULT_LEAST_WORN_LIMIT: usize = 6;
pub const DEFAULT_MAX_STREAK_LOOKBACK_DAYS: usize = 3650;

/// Aggregator configuration
///
/// Holds the per-request knobs the analytics screens used to pass as query
/// parameters (`limit=6`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatorConfig {
    /// Number of recent outfits in a report
    pub recent_limit: usize,

    /// Number of least-worn garments in a report
    pub least_worn_limit: usize,

    /// Upper bound on how many days a streak walk may look back
    pub max_streak_lookback_days: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            least_worn_limit: DEFAULT_LEAST_WORN_LIMIT,
            max_streak_lookback_days: DEFAULT_MAX_STREAK_LOOKBACK_DAYS,
        }
    }
}

impl AggregatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of recent outfits
    pub fn recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Set the number of least-worn garments
    pub fn least_worn_limit(mut self, limit: usize) -> Self {
        self.least_worn_limit = limit;
        self
    }

    /// Set the streak lookback bound
    pub fn max_streak_lookback_days(mut self, days: usize) -> Self {
        self.max_streak_lookback_days = days;
        self
    }

    /// Parse from a JSON settings object; missing keys keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wardrobe_analytics::AggregatorConfig;
    /// let config = AggregatorConfig::from_json_str(r#"{"recentLimit": 10}"#).unwrap();
    /// assert_eq!(config.recent_limit, 10);
    /// assert_eq!(config.least_worn_limit, 6);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
