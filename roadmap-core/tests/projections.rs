use chrono::NaiveDate;
use roadmap_core::{Dimension, Event, EventStore, Impact, Module, TimeSpan};

fn event(id: &str, date: &str, dimension: Dimension, module: Option<Module>) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {id}"),
        date: date.parse::<NaiveDate>().expect("ngày hợp lệ"),
        description: String::new(),
        dimension,
        module,
        customer_quote: None,
        internal_reaction: None,
        feature_screenshot_url: None,
        reaction_screenshot_url: None,
        is_flagship: false,
        is_data_query: false,
        impact_score: Impact::Medium,
    }
}

fn sample_store() -> EventStore {
    EventStore::new(vec![
        event("f-analytics", "2025-02-24", Dimension::Feature, Some(Module::Analytics)),
        event("f-hiring", "2024-06-05", Dimension::Feature, Some(Module::Hiring)),
        event("f-orphan", "2025-03-10", Dimension::Feature, None),
        event("p-launch", "2024-01-15", Dimension::Platform, None),
        event("i-models", "2023-03-01", Dimension::Industry, None),
    ])
}

#[test]
fn store_is_sorted_by_date_then_id() {
    let store = sample_store();
    let ids: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();

    assert_eq!(ids, ["i-models", "p-launch", "f-hiring", "f-analytics", "f-orphan"]);
}

#[test]
fn by_year_is_idempotent_by_value() {
    let store = sample_store();

    let first = store.by_year(2025);
    let second = store.by_year(2025);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn by_dimension_splits_the_rows() {
    let store = sample_store();

    assert_eq!(store.by_dimension(Dimension::Feature).len(), 3);
    assert_eq!(store.by_dimension(Dimension::Platform).len(), 1);
    assert_eq!(store.by_dimension(Dimension::Industry).len(), 1);
}

#[test]
fn ungrouped_features_never_appear_in_module_projections() {
    let store = sample_store();

    assert!(store.by_year(2025).iter().any(|e| e.id == "f-orphan"));
    assert!(store
        .by_dimension(Dimension::Feature)
        .iter()
        .any(|e| e.id == "f-orphan"));

    for module in Module::ALL {
        assert!(
            !store.by_module(module).iter().any(|e| e.id == "f-orphan"),
            "f-orphan lọt vào phân hệ {module:?}"
        );
    }
}

#[test]
fn active_modules_follow_the_static_display_order() {
    // Analytics được nạp trước Hiring nhưng bảng thứ tự cố định thắng.
    let store = sample_store();

    assert_eq!(store.active_modules(), vec![Module::Hiring, Module::Analytics]);
    assert_eq!(store.active_modules_in(2025), vec![Module::Analytics]);
    assert_eq!(store.active_modules_in(2023), vec![]);
}

#[test]
fn features_for_intersects_year_and_module() {
    let store = sample_store();

    let hits = store.features_for(2025, Module::Analytics);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "f-analytics");

    assert!(store.features_for(2024, Module::Analytics).is_empty());
}

#[test]
fn single_event_round_trip_matches_spec_scenario() {
    let analytics = event(
        "evt-1",
        "2025-02-24",
        Dimension::Feature,
        Some(Module::Analytics),
    );
    let store = EventStore::new(vec![analytics.clone()]);

    let by_year = store.by_year(2025);
    assert_eq!(by_year, vec![&analytics]);

    let by_module = store.by_module(Module::Analytics);
    assert_eq!(by_module, vec![&analytics]);

    let position = TimeSpan::default()
        .position(analytics.date)
        .expect("ngày nằm trong khoảng hiển thị");
    assert_eq!(position, 54.0 / 364.0);
}

#[test]
fn month_buckets_spread_a_year_across_twelve_cells() {
    let store = sample_store();
    let features = store.by_dimension(Dimension::Feature);
    let buckets = roadmap_core::month_buckets(&features, 2025);

    assert_eq!(buckets[1].len(), 1);
    assert_eq!(buckets[1][0].id, "f-analytics");
    assert_eq!(buckets[2].len(), 1);
    assert_eq!(buckets[2][0].id, "f-orphan");

    let occupied: usize = buckets.iter().map(Vec::len).sum();
    assert_eq!(occupied, 2, "sự kiện năm khác không được lọt vào");
}

#[test]
fn year_level_aggregates() {
    let mut flagship = event(
        "f-flag",
        "2025-07-01",
        Dimension::Feature,
        Some(Module::Core),
    );
    flagship.is_flagship = true;
    flagship.is_data_query = true;

    let mut events: Vec<Event> = sample_store().events().to_vec();
    events.push(flagship);
    let store = EventStore::new(events);

    assert!(store.has_flagship(2025));
    assert!(!store.has_flagship(2024));

    let stats = store.stats_for(2025);
    assert_eq!(stats.features, 3);
    assert_eq!(stats.modules, 2);
    assert_eq!(stats.flagship, 1);
    assert_eq!(stats.data_query, 1);

    let counts = store.counts_by_year(TimeSpan::default());
    assert_eq!(
        counts,
        vec![(2023, 1), (2024, 2), (2025, 3), (2026, 0), (2027, 0)]
    );
}
