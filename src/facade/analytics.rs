use crate::analytics::{
    self, BreakdownEntry, MostWornGroup, WardrobeValue, WearCountMismatch,
};
use crate::calendar::{
    self, CalendarDay, CalendarMonth, OutfitIndex, StreakSummary,
};
use crate::config::AggregatorConfig;
use crate::core::{Garment, Outfit, Result, UserId, WardrobeSnapshot};
use crate::storage::{DocumentStore, fetch_snapshot};
use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;
use tracing::{Level, event, info_span};

/// Everything the analytics screen shows, as plain data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeReport {
    pub today: NaiveDate,
    pub streak: StreakSummary,
    pub this_week: Vec<CalendarDay>,
    pub most_worn_this_month: Option<MostWornGroup>,
    pub categories: Vec<BreakdownEntry>,
    pub colours: Vec<BreakdownEntry>,
    pub seasons: Vec<BreakdownEntry>,
    pub favourite_colour_share: Option<u32>,
    pub value: WardrobeValue,
    pub recent_outfits: Vec<Outfit>,
    pub least_worn: Vec<Garment>,
    pub wear_count_mismatches: Vec<WearCountMismatch>,
}

/// Configured entry point over the calendar and analytics functions.
///
/// Holds no state besides its configuration; every call works on the
/// snapshot it is given.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wardrobe_analytics::{Outfit, WardrobeAnalytics, WardrobeSnapshot};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
/// let mut snapshot = WardrobeSnapshot::new();
/// snapshot.outfits.push(Outfit::new("o1", "u1", today, &["shirt", "jeans"]));
///
/// let report = WardrobeAnalytics::new().report(&snapshot, today);
/// assert_eq!(report.streak.current, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WardrobeAnalytics {
    config: AggregatorConfig,
}

impl WardrobeAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Current streak, bounded by `max_streak_lookback_days`.
    pub fn current_streak(&self, index: &OutfitIndex, today: NaiveDate) -> u32 {
        calendar::current_streak_within(index, today, self.config.max_streak_lookback_days)
    }

    /// Calendar screen data for one month.
    pub fn calendar(&self, snapshot: &WardrobeSnapshot, year: i32, month: Month) -> CalendarMonth {
        let index = calendar::build_outfit_index(&snapshot.outfits);
        calendar::calendar_month(&index, year, month)
    }

    /// Analytics screen data as of `today`.
    pub fn report(&self, snapshot: &WardrobeSnapshot, today: NaiveDate) -> WardrobeReport {
        let span = info_span!("wardrobe.report", today = %today);
        let _guard = span.enter();

        let index = calendar::build_outfit_index(&snapshot.outfits);
        let garments = &snapshot.garments;

        let report = WardrobeReport {
            today,
            streak: calendar::streak_summary(&index, today, self.config.max_streak_lookback_days),
            this_week: calendar::calendar_week(&index, today),
            most_worn_this_month: analytics::most_worn_this_month(
                &snapshot.outfits,
                today.year(),
                calendar::month_of(&today),
            ),
            categories: analytics::category_breakdown(garments),
            colours: analytics::colour_breakdown(garments),
            seasons: analytics::season_breakdown(garments),
            favourite_colour_share: snapshot
                .user
                .as_ref()
                .and_then(|user| analytics::favourite_colour_share(user, garments)),
            value: analytics::wardrobe_value(garments),
            recent_outfits: analytics::recent_outfits(&snapshot.outfits, self.config.recent_limit),
            least_worn: analytics::least_worn_garments(garments, self.config.least_worn_limit),
            wear_count_mismatches: analytics::audit_wear_counts(garments, &snapshot.usages),
        };

        if !report.wear_count_mismatches.is_empty() {
            event!(
                Level::WARN,
                mismatches = report.wear_count_mismatches.len(),
                "stored wear counts disagree with usage records"
            );
        }
        event!(Level::DEBUG, streak = report.streak.current, "report built");

        report
    }

    /// Fetch a user's snapshot from `store` and build the report.
    pub async fn report_for<S>(&self, store: &S, user_id: &UserId, today: NaiveDate) -> Result<WardrobeReport>
    where
        S: DocumentStore + ?Sized,
    {
        let snapshot = fetch_snapshot(store, user_id).await?;
        Ok(self.report(&snapshot, today))
    }
}
