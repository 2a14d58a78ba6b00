use chrono::{Datelike, NaiveDate};
use roadmap_core::{month_index, position_in_year, TimeSpan};

fn date(text: &str) -> NaiveDate {
    text.parse().expect("ngày hợp lệ")
}

#[test]
fn january_first_maps_to_zero_and_december_last_to_one() {
    assert_eq!(position_in_year(date("2023-01-01")), 0.0);
    assert_eq!(position_in_year(date("2023-12-31")), 1.0);
    assert_eq!(position_in_year(date("2024-01-01")), 0.0);
    assert_eq!(position_in_year(date("2024-12-31")), 1.0);
}

#[test]
fn leap_year_normalizes_over_366_days() {
    // Cùng thứ tự ngày thứ 100 trong năm, chỉ khác mẫu số 365/364.
    let leap = position_in_year(date("2024-04-09"));
    let common = position_in_year(date("2023-04-10"));

    assert_eq!(date("2024-04-09").ordinal(), 100);
    assert_eq!(date("2023-04-10").ordinal(), 100);
    assert_eq!(leap, 99.0 / 365.0);
    assert_eq!(common, 99.0 / 364.0);
    assert!(leap < common);
}

#[test]
fn positions_are_strictly_increasing_within_a_year() {
    let mut current = date("2025-01-01");
    let mut previous = position_in_year(current);

    while let Some(next) = current.succ_opt() {
        if next.year() != 2025 {
            break;
        }
        let position = position_in_year(next);
        assert!(position > previous, "ngày {next} không tăng");
        assert!((0.0..=1.0).contains(&position));
        previous = position;
        current = next;
    }

    assert_eq!(previous, 1.0);
}

#[test]
fn february_24_2025_lands_on_day_55_of_365() {
    let position = position_in_year(date("2025-02-24"));
    assert_eq!(position, 54.0 / 364.0);
    assert!((position - 0.1484).abs() < 1e-4);
}

#[test]
fn dates_outside_the_span_are_not_placeable() {
    let span = TimeSpan::default();

    assert_eq!(span.position(date("2022-12-31")), None);
    assert_eq!(span.position(date("2031-06-01")), None);
    assert_eq!(span.position(date("2023-01-01")), Some(0.0));
    assert_eq!(span.position(date("2027-12-31")), Some(1.0));
}

#[test]
fn month_index_is_zero_based_calendar_lookup() {
    assert_eq!(month_index(date("2025-01-15")), 0);
    assert_eq!(month_index(date("2025-06-30")), 5);
    assert_eq!(month_index(date("2025-12-01")), 11);
}
