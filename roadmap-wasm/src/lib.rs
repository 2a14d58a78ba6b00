//! Bridge WASM <-> JavaScript trung lập framework.

use roadmap_core::{EventStore, RoadmapConfig, RoadmapError};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsRoadmapConfig {
    #[serde(default)]
    start_year: Option<i32>,
    #[serde(default)]
    end_year: Option<i32>,
    #[serde(default)]
    min_marker_spacing: Option<f64>,
}

impl From<JsRoadmapConfig> for RoadmapConfig {
    fn from(cfg: JsRoadmapConfig) -> Self {
        let mut base = RoadmapConfig::default();
        if let Some(year) = cfg.start_year {
            base.span.start_year = year;
        }
        if let Some(year) = cfg.end_year {
            base.span.end_year = year;
        }
        if let Some(spacing) = cfg.min_marker_spacing {
            base.min_marker_spacing = spacing;
        }
        base
    }
}

#[wasm_bindgen]
pub fn build_roadmap(input_events: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let feed_value = from_value::<serde_json::Value>(input_events)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON sự kiện: {err}")))?;

    let cfg = match config {
        Some(js_cfg) => {
            let cfg: JsRoadmapConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            RoadmapConfig::from(cfg)
        }
        None => RoadmapConfig::default(),
    };

    let events = roadmap_feed::parse_events_value(&feed_value)
        .map_err(|err| JsValue::from_str(&format_roadmap_error(err)))?;
    let store = EventStore::new(events);
    let snapshot = roadmap_feed::build_snapshot(&store, &cfg);

    to_value(&snapshot)
        .map_err(|err| JsValue::from_str(&format!("Không serialize snapshot: {err}")))
}

fn format_roadmap_error(err: RoadmapError) -> String {
    format!("Roadmap error: {err}")
}
