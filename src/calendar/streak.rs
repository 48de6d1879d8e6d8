use super::index::OutfitIndex;
use chrono::NaiveDate;
use serde::Serialize;

/// Number of consecutive days, ending at and including `today`, with a
/// logged outfit.
///
/// Returns 0 when `today` has no outfit. The walk can never run longer than
/// the index has entries.
pub fn current_streak(index: &OutfitIndex, today: NaiveDate) -> u32 {
    current_streak_within(index, today, index.len())
}

/// Same as [`current_streak`] but stops after `max_days` days.
pub fn current_streak_within(index: &OutfitIndex, today: NaiveDate, max_days: usize) -> u32 {
    let bound = max_days.min(index.len());
    let mut streak: usize = 0;
    let mut day = today;

    while streak < bound && index.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    u32::try_from(streak).unwrap_or(u32::MAX)
}

/// Longest run of consecutive logged days anywhere in the index.
pub fn longest_streak(index: &OutfitIndex) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for date in index.dates() {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(expected) if expected == date => run.saturating_add(1),
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }

    longest
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
    pub logged_days: usize,
    pub last_logged: Option<NaiveDate>,
}

pub fn streak_summary(index: &OutfitIndex, today: NaiveDate, max_days: usize) -> StreakSummary {
    let dates = index.dates();
    StreakSummary {
        current: current_streak_within(index, today, max_days),
        longest: longest_streak(index),
        logged_days: dates.len(),
        last_logged: dates.last().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_outfit_index;
    use crate::core::Outfit;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn index_of(dates: &[NaiveDate]) -> OutfitIndex {
        let outfits: Vec<Outfit> = dates
            .iter()
            .enumerate()
            .map(|(i, date)| Outfit::new(format!("o{}", i), "u1", *date, &["g"]))
            .collect();
        build_outfit_index(&outfits)
    }

    #[test]
    fn test_streak_counts_back_from_today() {
        let mut index = index_of(&[ymd(2025, 6, 10), ymd(2025, 6, 11), ymd(2025, 6, 12)]);
        assert_eq!(current_streak(&index, ymd(2025, 6, 12)), 3);

        index.remove_date(&ymd(2025, 6, 11));
        assert_eq!(current_streak(&index, ymd(2025, 6, 12)), 1);
    }

    #[test]
    fn test_streak_is_zero_without_outfit_today() {
        let index = index_of(&[ymd(2025, 6, 10), ymd(2025, 6, 11)]);
        assert_eq!(current_streak(&index, ymd(2025, 6, 12)), 0);
        assert_eq!(current_streak(&OutfitIndex::new(), ymd(2025, 6, 12)), 0);
    }

    #[test]
    fn test_streak_respects_lookback_bound() {
        let dates: Vec<NaiveDate> = ymd(2025, 1, 1).iter_days().take(30).collect();
        let index = index_of(&dates);
        assert_eq!(current_streak(&index, ymd(2025, 1, 30)), 30);
        assert_eq!(current_streak_within(&index, ymd(2025, 1, 30), 7), 7);
    }

    #[test]
    fn test_streak_stops_at_earliest_representable_date() {
        let index = index_of(&[NaiveDate::MIN]);
        assert_eq!(current_streak(&index, NaiveDate::MIN), 1);
    }

    #[test]
    fn test_longest_streak() {
        let index = index_of(&[
            ymd(2025, 2, 27),
            ymd(2025, 2, 28),
            ymd(2025, 3, 1),
            ymd(2025, 3, 5),
            ymd(2025, 3, 6),
        ]);
        assert_eq!(longest_streak(&index), 3);
        assert_eq!(longest_streak(&OutfitIndex::new()), 0);
    }

    #[test]
    fn test_streak_summary() {
        let index = index_of(&[ymd(2025, 3, 5), ymd(2025, 3, 6), ymd(2025, 3, 1)]);
        let summary = streak_summary(&index, ymd(2025, 3, 6), usize::MAX);

        assert_eq!(summary.current, 2);
        assert_eq!(summary.longest, 2);
        assert_eq!(summary.logged_days, 3);
        assert_eq!(summary.last_logged, Some(ymd(2025, 3, 6)));
    }
}
