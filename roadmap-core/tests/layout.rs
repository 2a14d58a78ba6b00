use chrono::NaiveDate;
use roadmap_core::{
    position_in_year, spaced_positions, Dimension, Event, Impact, TimeSpan,
    DEFAULT_MIN_SPACING, MAX_MARKER_POSITION,
};

fn milestone(id: &str, date: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Milestone {id}"),
        date: date.parse::<NaiveDate>().expect("ngày hợp lệ"),
        description: String::new(),
        dimension: Dimension::Platform,
        module: None,
        customer_quote: None,
        internal_reaction: None,
        feature_screenshot_url: None,
        reaction_screenshot_url: None,
        is_flagship: false,
        is_data_query: false,
        impact_score: Impact::Medium,
    }
}

fn refs(events: &[Event]) -> Vec<&Event> {
    events.iter().collect()
}

#[test]
fn three_same_day_events_keep_minimum_spacing() {
    let events = vec![
        milestone("a", "2025-06-15"),
        milestone("b", "2025-06-15"),
        milestone("c", "2025-06-15"),
    ];
    let positions = spaced_positions(&refs(&events), TimeSpan::default(), DEFAULT_MIN_SPACING);

    let natural = position_in_year("2025-06-15".parse().expect("ngày hợp lệ"));
    let a = positions["a"];
    let b = positions["b"];
    let c = positions["c"];

    assert_eq!(a, natural);
    assert!((b - (natural + 0.08)).abs() < 1e-9);
    assert!((c - (natural + 0.16)).abs() < 1e-9);
    assert!(b - a >= 0.08 - 1e-9);
    assert!(c - b >= 0.08 - 1e-9);
}

#[test]
fn push_cascades_across_near_simultaneous_events() {
    // "c" có vị trí tự nhiên gần cả hai marker đã đặt, bị đẩy qua từng
    // marker một nên trượt tới 0.16.
    let events = vec![
        milestone("a", "2025-01-01"),
        milestone("b", "2025-01-02"),
        milestone("c", "2025-01-30"),
    ];
    let positions = spaced_positions(&refs(&events), TimeSpan::default(), DEFAULT_MIN_SPACING);

    assert_eq!(positions["a"], 0.0);
    assert!((positions["b"] - 0.08).abs() < 1e-9);
    assert!((positions["c"] - 0.16).abs() < 1e-9);
}

#[test]
fn dense_year_end_converges_at_the_clamp() {
    let events = vec![
        milestone("a", "2025-12-31"),
        milestone("b", "2025-12-31"),
        milestone("c", "2025-12-31"),
    ];
    let positions = spaced_positions(&refs(&events), TimeSpan::default(), DEFAULT_MIN_SPACING);

    // Bão hoà tại mép chặn là hành vi chấp nhận được.
    assert_eq!(positions["a"], MAX_MARKER_POSITION);
    assert_eq!(positions["b"], MAX_MARKER_POSITION);
    assert_eq!(positions["c"], MAX_MARKER_POSITION);
}

#[test]
fn output_is_deterministic_and_input_order_insensitive() {
    let forward = vec![
        milestone("a", "2025-03-01"),
        milestone("b", "2025-03-02"),
        milestone("c", "2025-09-20"),
    ];
    let shuffled = vec![
        milestone("c", "2025-09-20"),
        milestone("a", "2025-03-01"),
        milestone("b", "2025-03-02"),
    ];

    let first = spaced_positions(&refs(&forward), TimeSpan::default(), DEFAULT_MIN_SPACING);
    let second = spaced_positions(&refs(&forward), TimeSpan::default(), DEFAULT_MIN_SPACING);
    let reordered = spaced_positions(&refs(&shuffled), TimeSpan::default(), DEFAULT_MIN_SPACING);

    assert_eq!(first, second);
    assert_eq!(first, reordered);
}

#[test]
fn same_day_ties_break_by_id() {
    let events = vec![milestone("b", "2025-05-05"), milestone("a", "2025-05-05")];
    let positions = spaced_positions(&refs(&events), TimeSpan::default(), DEFAULT_MIN_SPACING);

    assert!(positions["a"] < positions["b"]);
}

#[test]
fn out_of_span_events_are_excluded() {
    let events = vec![milestone("a", "2025-04-01"), milestone("x", "2031-04-01")];
    let positions = spaced_positions(&refs(&events), TimeSpan::default(), DEFAULT_MIN_SPACING);

    assert!(positions.contains_key("a"));
    assert!(!positions.contains_key("x"));
    assert_eq!(positions.len(), 1);
}
