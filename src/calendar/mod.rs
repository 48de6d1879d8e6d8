//! Calendar views over a user's outfit history.
//!
//! - `grid.rs` - date keys, month grids, week strips
//! - `index.rs` - date-keyed outfit index and the joined calendar views
//! - `streak.rs` - current and longest wear streaks
//!
//! Months are [`chrono::Month`] values. Callers holding zero-based month
//! indices (0 = January) convert with [`month_from_index`].

mod grid;
mod index;
mod streak;

pub use grid::{
    MonthGrid, date_key, days_in_month, month_from_index, month_grid, month_index, month_of,
    week_of,
};
pub use index::{
    CalendarDay, CalendarMonth, OutfitIndex, build_outfit_index, calendar_month, calendar_week,
};
pub use streak::{
    StreakSummary, current_streak, current_streak_within, longest_streak, streak_summary,
};
