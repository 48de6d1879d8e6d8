//! Date keys, month grids and week strips.

use crate::core::{Result, WardrobeError};
use chrono::{Datelike, Days, Month, NaiveDate};
use serde::{Serialize, Serializer};

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Canonical `YYYY-MM-DD` key of the calendar day `date` falls on.
///
/// Only the year/month/day fields are read, so two timestamps on the same
/// day produce the same key whatever their time of day.
///
/// Keys are only `YYYY-MM-DD` for years 0 through 9999. Other years carry a
/// sign or a fifth digit (`-001-01-01`, `10000-01-01`) and do not sort
/// with the four-digit keys.
pub fn date_key<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Convert a zero-based month index (0 = January) into a [`Month`].
pub fn month_from_index(index: u32) -> Result<Month> {
    MONTHS
        .get(index as usize)
        .copied()
        .ok_or(WardrobeError::InvalidMonth(index))
}

/// The month `date` falls in.
pub fn month_of<D: Datelike>(date: &D) -> Month {
    MONTHS[date.month0() as usize % 12]
}

/// Zero-based index of `month` (0 = January).
pub fn month_index(month: Month) -> u32 {
    month.number_from_month() - 1
}

/// Number of days in `month` of `year`, or `None` when the month lies
/// outside the representable date range.
pub fn days_in_month(year: i32, month: Month) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
    let next = match month {
        Month::December => NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?,
        _ => NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)?,
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

pub(crate) fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

/// Sunday-first calendar grid for one month.
///
/// Cells are `None` for the leading and trailing blanks; the cell count is
/// always a multiple of 7.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    year: i32,
    #[serde(serialize_with = "serialize_month")]
    month: Month,
    cells: Vec<Option<NaiveDate>>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn cells(&self) -> &[Option<NaiveDate>] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of 7 cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<NaiveDate>]> {
        self.cells.chunks(7)
    }

    /// The non-blank cells in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of leading blanks (weekday of the 1st, 0 = Sunday).
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_none()).count()
    }

    pub fn trailing_blanks(&self) -> usize {
        self.cells.iter().rev().take_while(|cell| cell.is_none()).count()
    }
}

/// Build the calendar grid of `month` in `year`.
///
/// Months outside chrono's representable range yield an empty grid.
pub fn month_grid(year: i32, month: Month) -> MonthGrid {
    let mut cells = Vec::new();

    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1);
    if let (Some(first), Some(day_count)) = (first, days_in_month(year, month)) {
        let leading = first.weekday().num_days_from_sunday() as usize;
        cells.reserve(42);
        cells.extend(std::iter::repeat_n(None, leading));
        cells.extend(first.iter_days().take(day_count as usize).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
    }

    MonthGrid { year, month, cells }
}

/// The Sunday-to-Saturday week containing `date`, Sunday first.
///
/// Weeks that cross the ends of chrono's date range are clamped to
/// `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let sunday = date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);
    std::array::from_fn(|i| {
        sunday
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}
