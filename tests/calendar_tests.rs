mod common;
use chrono::Datelike;
use common::d;
use shiftcal::errors::AppError;
use shiftcal::utils::date::{
    day_name, fmt_date, month_dates, parse_date, week_start, weekday_index,
};

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        _ => 28,
    }
}

#[test]
fn test_month_dates_lengths_and_bounds() {
    for year in [1900, 2000, 2023, 2024, 2025, 2100] {
        for month in 1..=12 {
            let dates = month_dates(year, month).unwrap();
            let n = days_in_month(year, month);

            assert_eq!(dates.len() as u32, n, "{year}-{month}");
            assert_eq!(dates.first().copied(), Some(d(year, month, 1)));
            assert_eq!(dates.last().copied(), Some(d(year, month, n)));
            assert!(dates.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_december_rolls_into_next_year() {
    let dates = month_dates(2024, 12).unwrap();
    assert_eq!(dates.len(), 31);
    assert!(dates.iter().all(|x| x.year() == 2024 && x.month() == 12));
}

#[test]
fn test_month_dates_rejects_invalid_month() {
    assert!(matches!(
        month_dates(2025, 13),
        Err(AppError::InvalidMonth { month: 13, .. })
    ));
    assert!(month_dates(2025, 0).is_err());
}

#[test]
fn test_month_dates_is_restartable() {
    assert_eq!(month_dates(2025, 2).unwrap(), month_dates(2025, 2).unwrap());
}

#[test]
fn test_weekday_names() {
    // 2025-03-03 is a Monday
    let names: Vec<&str> = (3..=9)
        .map(|day| day_name(weekday_index(d(2025, 3, day))))
        .collect();
    assert_eq!(
        names,
        ["maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag", "zondag"]
    );
    assert_eq!(day_name(7), "");
}

#[test]
fn test_week_start_and_formats() {
    assert_eq!(week_start(d(2025, 3, 1)), d(2025, 2, 24));
    assert_eq!(week_start(d(2025, 3, 3)), d(2025, 3, 3));
    assert_eq!(fmt_date(d(2025, 3, 4)), "04-03-2025");
    assert_eq!(parse_date("2025-03-04").unwrap(), d(2025, 3, 4));
    assert_eq!(parse_date("04-03-2025").unwrap(), d(2025, 3, 4));
    assert!(matches!(parse_date("4 maart"), Err(AppError::InvalidDate(_))));
}
