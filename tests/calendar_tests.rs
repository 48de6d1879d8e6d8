use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Weekday};
use wardrobe_analytics::calendar::{
    calendar_month, days_in_month, longest_streak, month_from_index, month_grid,
};
use wardrobe_analytics::{Outfit, OutfitIndex, build_outfit_index, current_streak, date_key, week_of};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn index_of(dates: &[NaiveDate]) -> OutfitIndex {
    let outfits: Vec<Outfit> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| Outfit::new(format!("o{}", i), "u1", *date, &["g1"]))
        .collect();
    build_outfit_index(&outfits)
}

#[test]
fn test_date_key_same_day_iff_same_key() {
    let times = ["00:00:00", "06:30:00", "12:00:00", "23:59:59"];
    for day in ymd(2024, 2, 27).iter_days().take(5) {
        for time in times {
            let stamp = NaiveDateTime::parse_from_str(
                &format!("{} {}", day.format("%Y-%m-%d"), time),
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap();
            assert_eq!(date_key(&stamp), date_key(&day));
            assert_ne!(date_key(&stamp), date_key(&day.succ_opt().unwrap()));
        }
    }
}

#[test]
fn test_month_grid_always_multiple_of_seven() {
    for year in 1899..=2101 {
        for index in 0..12 {
            let month = month_from_index(index).unwrap();
            let grid = month_grid(year, month);
            let first = ymd(year, index + 1, 1);

            assert_eq!(grid.len() % 7, 0, "{}-{:?}", year, month);
            assert_eq!(grid.days().count() as u32, days_in_month(year, month).unwrap());
            assert_eq!(grid.leading_blanks() as u32, first.weekday().num_days_from_sunday());
            assert!(grid.trailing_blanks() < 7);
            assert!(grid.days().all(|day| day.month() == index + 1 && day.year() == year));
        }
    }
}

#[test]
fn test_month_grid_leap_february_scenario() {
    let grid = month_grid(2024, month_from_index(1).unwrap());
    assert_eq!(grid.days().count(), 29);
    assert_eq!(grid.len() % 7, 0);
    assert_eq!(grid.days().last(), Some(ymd(2024, 2, 29)));

    let grid = month_grid(2023, Month::February);
    assert_eq!(grid.days().count(), 28);
}

#[test]
fn test_week_of_starts_on_sunday_and_contains_date() {
    for date in ymd(2023, 12, 1).iter_days().take(120) {
        let week = week_of(date);
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert!(week[0] <= date);
        assert!(week.contains(&date));
        for pair in week.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }
}

#[test]
fn test_streak_scenario() {
    let mut index = index_of(&[ymd(2025, 6, 10), ymd(2025, 6, 11), ymd(2025, 6, 12)]);
    assert_eq!(current_streak(&index, ymd(2025, 6, 12)), 3);

    index.remove_date(&ymd(2025, 6, 11));
    assert_eq!(current_streak(&index, ymd(2025, 6, 12)), 1);
}

#[test]
fn test_streak_never_grows_when_days_are_removed() {
    let today = ymd(2025, 6, 30);
    let dates: Vec<NaiveDate> = ymd(2025, 6, 1).iter_days().take(30).collect();
    let mut index = index_of(&dates);
    let mut previous = current_streak(&index, today);
    assert_eq!(previous, 30);

    // remove from today backwards, then from the oldest day forwards
    for date in dates.iter().rev().take(3).chain(dates.iter().take(10)) {
        index.remove_date(date);
        let streak = current_streak(&index, today);
        assert!(streak <= previous);
        previous = streak;
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_streak_across_month_and_year_boundaries() {
    let index = index_of(&[ymd(2024, 12, 30), ymd(2024, 12, 31), ymd(2025, 1, 1)]);
    assert_eq!(current_streak(&index, ymd(2025, 1, 1)), 3);
    assert_eq!(longest_streak(&index), 3);
}

#[test]
fn test_deleted_outfit_leaves_calendar() {
    let outfits = vec![
        Outfit::new("o1", "u1", ymd(2025, 3, 3), &["a"]),
        Outfit::new("o2", "u1", ymd(2025, 3, 4), &["b"]),
    ];
    let mut index = build_outfit_index(&outfits);
    assert_eq!(calendar_month(&index, 2025, Month::March).logged_days(), 2);

    index.remove_outfit(&"o1".into());
    let month = calendar_month(&index, 2025, Month::March);
    assert_eq!(month.logged_days(), 1);

    let day = month
        .cells
        .iter()
        .flatten()
        .find(|day| day.key == "2025-03-03")
        .unwrap();
    assert!(day.outfit.is_none());
}
