//! Release-log JSON feed to `RoadmapSnapshot` converter with per-year analytics.

use chrono::Utc;
use roadmap_core::{
    spaced_positions, Dimension, Event, EventStore, ModuleLane, PlacedMarker, RoadmapConfig,
    RoadmapError, RoadmapSnapshot, TimeSpan, YearInfo, YearMarkers, YearSummary,
};
use serde_json::Value;

/// Parse the exported event feed from a JSON string.
pub fn parse_events_str(feed_json: &str) -> Result<Vec<Event>, RoadmapError> {
    let value: Value =
        serde_json::from_str(feed_json).map_err(|err| RoadmapError::Parse(err.to_string()))?;
    parse_events_value(&value)
}

/// Parse the exported event feed from a `serde_json::Value`.
///
/// Accepts either a bare array of event records or an object wrapping the
/// array under an `events` key; anything else is missing data. Records are
/// assumed pre-validated upstream, a record that fails to deserialize is a
/// parse error.
pub fn parse_events_value(feed: &Value) -> Result<Vec<Event>, RoadmapError> {
    let records = match feed {
        Value::Array(records) => records.as_slice(),
        Value::Object(map) => map
            .get("events")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or(RoadmapError::MissingData)?,
        _ => return Err(RoadmapError::MissingData),
    };

    records
        .iter()
        .map(|record| {
            serde_json::from_value(record.clone())
                .map_err(|err| RoadmapError::Parse(err.to_string()))
        })
        .collect()
}

/// Parse a feed string straight into a store.
pub fn load_store_str(feed_json: &str) -> Result<EventStore, RoadmapError> {
    Ok(EventStore::new(parse_events_str(feed_json)?))
}

/// One-call conversion used by the WASM bridge and the CLI demo.
pub fn build_snapshot_str(
    feed_json: &str,
    config: &RoadmapConfig,
) -> Result<RoadmapSnapshot, RoadmapError> {
    let store = load_store_str(feed_json)?;
    Ok(build_snapshot(&store, config))
}

/// Assemble the full presentation snapshot for a store: per-year summaries
/// with the static narrative, feature lanes at natural date positions, and
/// milestone rows through the collision-avoiding pass.
pub fn build_snapshot(store: &EventStore, config: &RoadmapConfig) -> RoadmapSnapshot {
    RoadmapSnapshot {
        generated_at: Utc::now(),
        span: config.span,
        years: build_year_summaries(store, config.span),
        lanes: build_feature_lanes(store, config.span),
        platform: build_marker_rows(store, Dimension::Platform, config),
        industry: build_marker_rows(store, Dimension::Industry, config),
    }
}

fn build_year_summaries(store: &EventStore, span: TimeSpan) -> Vec<YearSummary> {
    span.years()
        .map(|year| {
            let info = YearInfo::for_year(year);
            YearSummary {
                year,
                philosophy: info.map(|i| i.philosophy.to_string()).unwrap_or_default(),
                subtitle: info.map(|i| i.subtitle.to_string()).unwrap_or_default(),
                description: info.map(|i| i.description.to_string()).unwrap_or_default(),
                stats: store.stats_for(year),
                has_flagship: store.has_flagship(year),
            }
        })
        .collect()
}

fn build_feature_lanes(store: &EventStore, span: TimeSpan) -> Vec<ModuleLane> {
    store
        .active_modules()
        .into_iter()
        .map(|module| ModuleLane {
            module,
            years: span
                .years()
                .map(|year| natural_markers(store.features_for(year, module), span, year))
                .collect(),
        })
        .collect()
}

/// Feature dots keep their natural date position; lanes are wide and sparse
/// enough that no spacing pass is applied.
fn natural_markers(events: Vec<&Event>, span: TimeSpan, year: i32) -> YearMarkers {
    let markers = events
        .into_iter()
        .filter_map(|event| {
            span.position(event.date).map(|position| PlacedMarker {
                event: event.clone(),
                position,
            })
        })
        .collect();

    YearMarkers { year, markers }
}

fn build_marker_rows(
    store: &EventStore,
    dimension: Dimension,
    config: &RoadmapConfig,
) -> Vec<YearMarkers> {
    let events = store.by_dimension(dimension);

    config
        .span
        .years()
        .map(|year| {
            let year_events: Vec<&Event> = events
                .iter()
                .copied()
                .filter(|event| event.year() == year)
                .collect();
            let positions =
                spaced_positions(&year_events, config.span, config.min_marker_spacing);

            // Store order is (date, id), so markers come out in placement order.
            let markers = year_events
                .into_iter()
                .filter_map(|event| {
                    positions.get(&event.id).map(|&position| PlacedMarker {
                        event: event.clone(),
                        position,
                    })
                })
                .collect();

            YearMarkers { year, markers }
        })
        .collect()
}
