//! Date-keyed outfit lookup and the calendar views built from it.

use super::grid::{date_key, month_grid, serialize_month, week_of};
use crate::core::{Outfit, OutfitId};
use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{Level, event};

/// Mapping from date key to the outfit logged on that day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutfitIndex {
    entries: BTreeMap<String, Outfit>,
}

impl OutfitIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an outfit under its date key, returning the outfit it replaced.
    pub fn insert(&mut self, outfit: Outfit) -> Option<Outfit> {
        self.entries.insert(date_key(&outfit.date), outfit)
    }

    pub fn get<D: Datelike>(&self, date: &D) -> Option<&Outfit> {
        self.entries.get(&date_key(date))
    }

    pub fn get_key(&self, key: &str) -> Option<&Outfit> {
        self.entries.get(key)
    }

    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        self.entries.contains_key(&date_key(date))
    }

    /// Remove the entry for `date`.
    pub fn remove_date<D: Datelike>(&mut self, date: &D) -> Option<Outfit> {
        self.entries.remove(&date_key(date))
    }

    /// Remove the cell holding outfit `id`, as happens when the user deletes it.
    pub fn remove_outfit(&mut self, id: &OutfitId) -> Option<Outfit> {
        let key = self
            .entries
            .iter()
            .find(|(_, outfit)| &outfit.id == id)
            .map(|(key, _)| key.clone())?;
        self.entries.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outfit)> {
        self.entries.iter().map(|(key, outfit)| (key.as_str(), outfit))
    }

    /// Logged dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.entries.values().map(|outfit| outfit.date).collect();
        dates.sort_unstable();
        dates
    }
}

/// Index outfits by the calendar day they were worn.
///
/// Only one outfit per day is expected. When two outfits share a date, the
/// one that comes last in `outfits` wins; nothing is merged.
pub fn build_outfit_index(outfits: &[Outfit]) -> OutfitIndex {
    let mut index = OutfitIndex::new();
    for outfit in outfits {
        if let Some(replaced) = index.insert(outfit.clone()) {
            event!(
                Level::DEBUG,
                date = %date_key(&outfit.date),
                replaced = %replaced.id,
                kept = %outfit.id,
                "duplicate outfit date, keeping the later outfit"
            );
        }
    }
    index
}

/// One calendar cell: a day and the outfit logged on it, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub key: String,
    pub date: NaiveDate,
    pub outfit: Option<Outfit>,
}

impl CalendarDay {
    fn lookup(index: &OutfitIndex, date: NaiveDate) -> Self {
        let key = date_key(&date);
        let outfit = index.get_key(&key).cloned();
        Self { key, date, outfit }
    }

    pub fn has_outfit(&self) -> bool {
        self.outfit.is_some()
    }
}

/// A month grid with each day joined to its outfit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    pub cells: Vec<Option<CalendarDay>>,
}

impl CalendarMonth {
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<CalendarDay>]> {
        self.cells.chunks(7)
    }

    /// Number of days in the month with a logged outfit.
    pub fn logged_days(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|day| day.has_outfit())
            .count()
    }
}

pub fn calendar_month(index: &OutfitIndex, year: i32, month: Month) -> CalendarMonth {
    let cells = month_grid(year, month)
        .cells()
        .iter()
        .map(|cell| cell.map(|date| CalendarDay::lookup(index, date)))
        .collect();

    CalendarMonth { year, month, cells }
}

/// The Sunday-first week strip around `date`.
pub fn calendar_week(index: &OutfitIndex, date: NaiveDate) -> Vec<CalendarDay> {
    week_of(date)
        .into_iter()
        .map(|day| CalendarDay::lookup(index, day))
        .collect()
}
