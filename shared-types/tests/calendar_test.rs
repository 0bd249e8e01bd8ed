use pretty_assertions::assert_eq;
use rstest::rstest;
use shared_types::{CalendarDate, YearMonth};

#[test]
fn date_displays_as_iso_string() {
    let date = CalendarDate::from_ymd(2026, 8, 6).unwrap();
    assert_eq!(date.to_string(), "2026-08-06");
}

#[test]
fn date_parses_from_iso_string() {
    let date: CalendarDate = "2026-08-06".parse().unwrap();
    assert_eq!(date, CalendarDate::from_ymd(2026, 8, 6).unwrap());
}

#[rstest]
#[case("")]
#[case("not-a-date")]
#[case("2026-08")]
#[case("2026-13-01")]
#[case("2026-02-30")]
#[case("2026-00-10")]
#[case("06/08/2026")]
fn malformed_dates_are_rejected(#[case] input: &str) {
    let parsed = input.parse::<CalendarDate>();
    assert!(parsed.is_err(), "{input:?} should not parse");
}

#[test]
fn dates_order_chronologically() {
    let earlier = CalendarDate::from_ymd(2026, 8, 31).unwrap();
    let later = CalendarDate::from_ymd(2026, 9, 1).unwrap();
    let next_year = CalendarDate::from_ymd(2027, 1, 1).unwrap();

    assert!(earlier < later);
    assert!(later < next_year);
    assert!(earlier >= CalendarDate::from_ymd(2026, 8, 31).unwrap());
}

#[rstest]
#[case(2026, 1, 31)]
#[case(2026, 4, 30)]
#[case(2026, 2, 28)]
#[case(2028, 2, 29)]
#[case(2000, 2, 29)]
#[case(1900, 2, 28)]
fn month_lengths_account_for_leap_years(#[case] year: i32, #[case] month: u32, #[case] days: u32) {
    assert_eq!(YearMonth { year, month }.days_in_month(), days);
}

#[rstest]
#[case(2026, 8, 6)] // August 2026 starts on a Saturday
#[case(2026, 1, 4)] // January 2026 starts on a Thursday
#[case(2025, 6, 0)] // June 2025 starts on a Sunday
#[case(2000, 1, 6)] // January 2000 starts on a Saturday
fn first_weekday_matches_known_calendars(
    #[case] year: i32,
    #[case] month: u32,
    #[case] weekday: usize,
) {
    assert_eq!(YearMonth { year, month }.first_weekday(), weekday);
}

#[test]
fn day_cells_pad_the_leading_week_and_cover_the_month() {
    let month = YearMonth {
        year: 2026,
        month: 8,
    };
    let cells = month.day_cells();

    // 6 placeholders (Sun..Fri) before Saturday the 1st, then 31 days
    assert_eq!(cells.len(), 37);
    assert!(cells[..6].iter().all(|cell| cell.is_none()));
    assert_eq!(cells[6], Some(CalendarDate::from_ymd(2026, 8, 1).unwrap()));
    assert_eq!(
        cells.last().copied().flatten(),
        Some(CalendarDate::from_ymd(2026, 8, 31).unwrap())
    );
}

#[test]
fn month_navigation_wraps_at_year_boundaries() {
    let december = YearMonth {
        year: 2026,
        month: 12,
    };
    let january = YearMonth {
        year: 2027,
        month: 1,
    };

    assert_eq!(december.next(), january);
    assert_eq!(january.prev(), december);
}

#[test]
fn month_labels_read_naturally() {
    let month = YearMonth {
        year: 2026,
        month: 8,
    };
    assert_eq!(month.to_string(), "August 2026");
    assert_eq!(YearMonth::of(month.date(15)), month);
}
