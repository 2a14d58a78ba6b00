#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-roadmap-ui]";

/// CSS mặc định của component cùng các design token dễ ghi đè.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --roadmap-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --roadmap-bg: #2d1b3d;
  --roadmap-bg-dark: #1a0f24;
  --roadmap-surface: #3d2a4d;
  --roadmap-border: rgba(255, 255, 255, 0.1);
  --roadmap-border-soft: rgba(255, 255, 255, 0.05);
  --roadmap-text: #f5f3ff;
  --roadmap-muted: rgba(255, 255, 255, 0.4);
  --roadmap-accent: #a78bfa;
  --roadmap-accent-soft: rgba(167, 139, 250, 0.35);
  --roadmap-flagship-from: #f472b6;
  --roadmap-flagship-to: #fb923c;
  --roadmap-platform: #8b5cf6;
  --roadmap-industry: #10a37f;
  --roadmap-radius: 12px;
  --roadmap-lane-label-width: 150px;
}

.roadmap-root {
  font-family: var(--roadmap-font-family);
  background: var(--roadmap-bg);
  color: var(--roadmap-text);
  border-radius: var(--roadmap-radius);
  padding: 16px;
  min-height: 480px;
  position: relative;
  overflow: hidden;
}

.overview {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.year-header-row {
  display: flex;
  border-bottom: 1px solid var(--roadmap-border);
}

.year-header-row .lane-label {
  width: var(--roadmap-lane-label-width);
  flex-shrink: 0;
}

.year-col {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 4px;
  padding: 12px 8px;
  background: none;
  border: none;
  border-right: 1px solid var(--roadmap-border-soft);
  color: inherit;
  cursor: pointer;
  transition: background 150ms ease;
}

.year-col:hover {
  background: rgba(255, 255, 255, 0.05);
}

.year-number {
  font-size: 1.4rem;
  font-weight: 700;
  letter-spacing: 0.02em;
}

.year-col.is-flagship .year-number,
.year-number.is-flagship {
  background: linear-gradient(90deg, var(--roadmap-flagship-from), var(--roadmap-flagship-to));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.year-philosophy {
  font-size: 0.68rem;
  font-weight: 500;
  text-align: center;
  color: var(--roadmap-accent-soft);
}

.section-label {
  font-size: 0.62rem;
  text-transform: uppercase;
  letter-spacing: 0.12em;
  color: var(--roadmap-muted);
  padding: 10px 0 4px var(--roadmap-lane-label-width);
}

.feature-lanes {
  display: flex;
  flex-direction: column;
}

.lane-row,
.milestone-row {
  display: flex;
  align-items: center;
  min-height: 30px;
  border-top: 1px solid var(--roadmap-border-soft);
}

.lane-label {
  width: var(--roadmap-lane-label-width);
  flex-shrink: 0;
  font-size: 0.72rem;
  color: var(--roadmap-muted);
  padding-right: 8px;
  text-align: right;
}

.year-cell {
  flex: 1;
  position: relative;
  height: 30px;
  border-right: 1px solid var(--roadmap-border-soft);
}

.feature-dot,
.milestone-marker {
  position: absolute;
  top: 50%;
  transform: translate(-50%, -50%);
  background: none;
  border: none;
  padding: 0;
  cursor: pointer;
}

.feature-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--roadmap-accent);
  transition: transform 150ms ease;
}

.feature-dot[data-impact="low"] {
  width: 7px;
  height: 7px;
  opacity: 0.7;
}

.feature-dot[data-impact="high"] {
  width: 13px;
  height: 13px;
}

.feature-dot.is-flagship {
  background: linear-gradient(135deg, var(--roadmap-flagship-from), var(--roadmap-flagship-to));
}

.feature-dot:hover,
.milestone-marker:hover,
.detail-dot:hover {
  transform: translate(-50%, -50%) scale(1.35);
}

.milestone-marker {
  font-size: 0.85rem;
  line-height: 1;
}

.milestone-platform .milestone-marker {
  color: var(--roadmap-platform);
}

.milestone-industry .milestone-marker {
  color: var(--roadmap-industry);
}

.year-detail {
  display: flex;
  flex-direction: column;
}

.detail-header {
  display: flex;
  align-items: center;
  gap: 14px;
  padding-bottom: 12px;
  border-bottom: 1px solid var(--roadmap-border);
}

.detail-heading {
  flex: 1;
}

.detail-heading h2 {
  margin: 0;
  font-size: 1.9rem;
}

.detail-philosophy {
  margin: 2px 0 0;
  font-size: 0.8rem;
  color: var(--roadmap-accent-soft);
}

.detail-description {
  margin: 4px 0 0;
  font-size: 0.72rem;
  color: var(--roadmap-muted);
  max-width: 560px;
}

.detail-stats {
  display: flex;
  gap: 18px;
}

.stat {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.stat-label {
  font-size: 0.62rem;
  color: var(--roadmap-muted);
}

.stat-value {
  font-size: 1.1rem;
  font-weight: 600;
}

.detail-nav {
  display: flex;
  gap: 6px;
}

.nav-button {
  background: none;
  border: 1px solid var(--roadmap-border);
  border-radius: 8px;
  color: inherit;
  font-size: 1rem;
  width: 32px;
  height: 32px;
  cursor: pointer;
}

.nav-button:disabled {
  opacity: 0.3;
  cursor: default;
}

.detail-row {
  display: flex;
  align-items: center;
  padding: 5px 0;
  border-bottom: 1px solid var(--roadmap-border-soft);
}

.detail-row-label {
  width: var(--roadmap-lane-label-width);
  flex-shrink: 0;
  font-size: 0.7rem;
  color: var(--roadmap-muted);
  text-align: right;
  padding-right: 8px;
}

.month-grid {
  display: grid;
  grid-template-columns: repeat(12, 1fr);
  flex: 1;
  gap: 2px;
}

.month-header .month-name {
  font-size: 0.6rem;
  color: var(--roadmap-muted);
  text-align: center;
}

.month-cell {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 3px;
  flex-wrap: wrap;
  min-height: 20px;
}

.detail-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  border: none;
  padding: 0;
  cursor: pointer;
  background: var(--roadmap-accent);
  transition: transform 150ms ease;
}

.detail-dot:hover {
  transform: scale(1.35);
}

.detail-dot[data-impact="high"] {
  width: 13px;
  height: 13px;
}

.detail-dot.is-flagship {
  background: linear-gradient(135deg, var(--roadmap-flagship-from), var(--roadmap-flagship-to));
}

.detail-dot.dim-platform {
  background: var(--roadmap-platform);
  border-radius: 2px;
}

.detail-dot.dim-industry {
  background: var(--roadmap-industry);
}

.hover-card {
  position: fixed;
  z-index: 30;
  display: flex;
  flex-direction: column;
  gap: 2px;
  background: var(--roadmap-bg-dark);
  border: 1px solid var(--roadmap-border);
  border-radius: 10px;
  padding: 10px 12px;
  max-width: 260px;
  pointer-events: none;
  box-shadow: 0 12px 28px rgba(0, 0, 0, 0.45);
}

.hover-title {
  font-size: 0.8rem;
  font-weight: 600;
}

.hover-date,
.hover-module {
  font-size: 0.68rem;
  color: var(--roadmap-muted);
}

.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(26, 15, 36, 0.8);
}

.modal {
  background: var(--roadmap-surface);
  border: 1px solid var(--roadmap-border);
  border-radius: var(--roadmap-radius);
  padding: 20px;
  width: min(520px, 90vw);
  max-height: 80vh;
  overflow-y: auto;
}

.modal-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  gap: 12px;
}

.modal-title {
  margin: 0;
  font-size: 1.1rem;
}

.modal-close {
  background: none;
  border: none;
  color: var(--roadmap-muted);
  font-size: 1.2rem;
  cursor: pointer;
}

.modal-date {
  margin: 4px 0 10px;
  font-size: 0.72rem;
  color: var(--roadmap-muted);
}

.modal-description {
  margin: 0;
  font-size: 0.84rem;
  line-height: 1.5;
}

.modal-quote {
  margin: 12px 0 0;
  padding: 8px 12px;
  border-left: 3px solid var(--roadmap-accent);
  font-size: 0.78rem;
  font-style: italic;
  color: rgba(255, 255, 255, 0.7);
}

.modal-screenshot {
  margin-top: 12px;
  width: 100%;
  border-radius: 8px;
  border: 1px solid var(--roadmap-border);
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-roadmap-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
