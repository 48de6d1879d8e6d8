//! Category, colour and season rollups over a user's garments.

use crate::core::{Garment, User};
use serde::Serialize;
use std::collections::HashMap;

/// One group of a breakdown and its share of the user's garments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub count: usize,
    pub percent: u32,
}

/// `round(100 * count / total)` with halves rounded up. `total` must be non-zero.
pub(crate) fn rounded_percent(count: usize, total: usize) -> u32 {
    let count = count as u128;
    let total = total as u128;
    u32::try_from((200 * count + total) / (2 * total)).unwrap_or(u32::MAX)
}

fn breakdown_by<'a, I>(total: usize, labels: I) -> Vec<BreakdownEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    if total == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut entries: Vec<BreakdownEntry> = counts
        .into_iter()
        .map(|(name, count)| BreakdownEntry {
            name: name.to_string(),
            count,
            percent: rounded_percent(count, total),
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Garments grouped by category, largest group first, ties by name.
pub fn category_breakdown(garments: &[Garment]) -> Vec<BreakdownEntry> {
    breakdown_by(
        garments.len(),
        garments.iter().map(|garment| garment.category.as_str()),
    )
}

/// Garments grouped by colour, largest group first, ties by name.
pub fn colour_breakdown(garments: &[Garment]) -> Vec<BreakdownEntry> {
    breakdown_by(
        garments.len(),
        garments.iter().map(|garment| garment.color.as_str()),
    )
}

/// Garments grouped by season tag.
///
/// A garment counts once per distinct tag and percentages are relative to
/// the total garment count, so they may add up to more than 100.
pub fn season_breakdown(garments: &[Garment]) -> Vec<BreakdownEntry> {
    let tags = garments.iter().flat_map(|garment| {
        let mut seasons: Vec<&str> = garment.season.iter().map(String::as_str).collect();
        seasons.sort_unstable();
        seasons.dedup();
        seasons
    });
    breakdown_by(garments.len(), tags)
}

/// Percentage of garments whose colour is one of the user's favourites.
///
/// Colours are compared case-insensitively. Returns `None` for an empty
/// wardrobe.
pub fn favourite_colour_share(user: &User, garments: &[Garment]) -> Option<u32> {
    if garments.is_empty() {
        return None;
    }

    let favourites: Vec<String> = user
        .preferences
        .favorite_colors
        .iter()
        .map(|colour| colour.to_lowercase())
        .collect();

    let matching = garments
        .iter()
        .filter(|garment| favourites.contains(&garment.color.to_lowercase()))
        .count();

    Some(rounded_percent(matching, garments.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garment(id: &str, category: &str, color: &str) -> Garment {
        Garment::new(id, "u1", category, color)
    }

    #[test]
    fn test_empty_breakdowns() {
        assert!(category_breakdown(&[]).is_empty());
        assert!(colour_breakdown(&[]).is_empty());
        assert!(season_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_category_breakdown_order_and_percent() {
        let garments = vec![
            garment("1", "tops", "red"),
            garment("2", "shoes", "black"),
            garment("3", "tops", "blue"),
            garment("4", "bottoms", "black"),
        ];

        let breakdown = category_breakdown(&garments);
        assert_eq!(
            breakdown,
            vec![
                BreakdownEntry { name: "tops".into(), count: 2, percent: 50 },
                BreakdownEntry { name: "bottoms".into(), count: 1, percent: 25 },
                BreakdownEntry { name: "shoes".into(), count: 1, percent: 25 },
            ]
        );
    }

    #[test]
    fn test_colour_breakdown_rounding() {
        let garments = vec![
            garment("1", "tops", "red"),
            garment("2", "tops", "green"),
            garment("3", "tops", "blue"),
        ];

        let breakdown = colour_breakdown(&garments);
        assert_eq!(breakdown.len(), 3);
        assert!(breakdown.iter().all(|entry| entry.percent == 33));
        assert_eq!(breakdown[0].name, "blue");
    }

    #[test]
    fn test_rounded_percent_rounds_half_up() {
        assert_eq!(rounded_percent(1, 8), 13);
        assert_eq!(rounded_percent(1, 200), 1);
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(5, 5), 100);
    }

    #[test]
    fn test_season_breakdown_counts_each_tag_once() {
        let garments = vec![
            garment("1", "tops", "red").season(&["summer", "spring", "summer"]),
            garment("2", "coats", "grey").season(&["winter"]),
        ];

        let breakdown = season_breakdown(&garments);
        assert_eq!(breakdown.len(), 3);
        assert!(breakdown.iter().all(|entry| entry.count == 1 && entry.percent == 50));
    }

    #[test]
    fn test_favourite_colour_share() {
        let user = User::new("u1").favorite_colors(&["Black", "navy"]);
        let garments = vec![
            garment("1", "tops", "black"),
            garment("2", "tops", "Navy"),
            garment("3", "tops", "red"),
            garment("4", "tops", "white"),
        ];

        assert_eq!(favourite_colour_share(&user, &garments), Some(50));
        assert_eq!(favourite_colour_share(&user, &[]), None);
    }
}
