//! Thành phần giao diện timeline ra mắt sản phẩm cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::audio::{AudioSupport, Cue};
    use crate::styles;
    use chrono::NaiveDate;
    use roadmap_core::{
        month_buckets, spaced_positions, Dimension, Event, EventStore, Impact, Module,
        Navigator, RoadmapConfig, TimeSpan, ViewState, YearInfo,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, MouseEvent, Window};
    use yew::prelude::*;

    const MONTH_NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    #[derive(Properties, PartialEq)]
    pub struct RoadmapViewProps {
        pub store: EventStore,
        pub config: RoadmapConfig,
    }

    #[function_component(RoadmapView)]
    fn roadmap_view(props: &RoadmapViewProps) -> Html {
        let store = &props.store;
        let config = &props.config;
        let span = config.span;

        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let audio = use_memo((), |_| AudioSupport::probe());
        let navigator = use_state(move || Navigator::new(span));
        let selected_event = use_state(|| Option::<Event>::None);
        let hovered = use_state(|| Option::<(Event, i32, i32)>::None);

        let on_year_select = {
            let navigator = navigator.clone();
            let audio = audio.clone();
            Callback::from(move |year: i32| {
                let mut next = *navigator;
                if next.select_year(year) {
                    audio.play(Cue::Year);
                    navigator.set(next);
                }
            })
        };

        let on_back = {
            let navigator = navigator.clone();
            let audio = audio.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *navigator;
                if next.back() {
                    audio.play(Cue::Navigate);
                    navigator.set(next);
                }
            })
        };

        let on_prev = {
            let navigator = navigator.clone();
            let audio = audio.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *navigator;
                if next.prev_year() {
                    audio.play(Cue::Year);
                    navigator.set(next);
                }
            })
        };

        let on_next = {
            let navigator = navigator.clone();
            let audio = audio.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *navigator;
                if next.next_year() {
                    audio.play(Cue::Year);
                    navigator.set(next);
                }
            })
        };

        let on_event_click = {
            let selected_event = selected_event.clone();
            let hovered = hovered.clone();
            let audio = audio.clone();
            Callback::from(move |event: Event| {
                let cue = match event.dimension {
                    Dimension::Feature => Cue::Feature,
                    Dimension::Platform => Cue::Milestone,
                    Dimension::Industry => Cue::Industry,
                };
                audio.play(cue);
                hovered.set(None);
                selected_event.set(Some(event));
            })
        };

        let on_event_hover = {
            let hovered = hovered.clone();
            Callback::from(move |entry: Option<(Event, i32, i32)>| hovered.set(entry))
        };

        let on_modal_close = {
            let selected_event = selected_event.clone();
            Callback::from(move |_: MouseEvent| selected_event.set(None))
        };

        let view = match navigator.state() {
            ViewState::Overview => {
                render_overview(store, config, &on_year_select, &on_event_click, &on_event_hover)
            }
            ViewState::YearDetail { year } => render_year_detail(
                store,
                year,
                navigator.can_change_to(year - 1),
                navigator.can_change_to(year + 1),
                &on_back,
                &on_prev,
                &on_next,
                &on_event_click,
                &on_event_hover,
            ),
        };

        html! {
            <div class="roadmap-root">
                { view }
                {
                    if let Some(event) = (*selected_event).clone() {
                        render_modal(&event, on_modal_close)
                    } else {
                        Html::default()
                    }
                }
                {
                    match (*hovered).clone() {
                        Some((event, x, y)) if selected_event.is_none() => {
                            render_hover_card(&event, x, y)
                        }
                        _ => Html::default(),
                    }
                }
            </div>
        }
    }

    fn render_overview(
        store: &EventStore,
        config: &RoadmapConfig,
        on_year_select: &Callback<i32>,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> Html {
        let span = config.span;

        html! {
            <div class="overview">
                <div class="year-header-row">
                    <span class="lane-label" />
                    {
                        for span.years().map(|year| {
                            let on_year_select = on_year_select.clone();
                            let info = YearInfo::for_year(year);
                            let flagship = store.has_flagship(year);
                            let onclick =
                                Callback::from(move |_: MouseEvent| on_year_select.emit(year));
                            html! {
                                <button
                                    class={classes!("year-col", flagship.then_some("is-flagship"))}
                                    onclick={onclick}
                                >
                                    <span class="year-number">{ year }</span>
                                    <span class="year-philosophy">
                                        { info.map(|i| i.philosophy).unwrap_or_default() }
                                    </span>
                                </button>
                            }
                        })
                    }
                </div>
                <span class="section-label">{"Feature releases"}</span>
                <div class="feature-lanes">
                    {
                        for store.active_modules().into_iter().map(|module| {
                            render_feature_lane(store, span, module, on_event_click, on_event_hover)
                        })
                    }
                </div>
                <span class="section-label">{"Platform milestones"}</span>
                { render_milestone_row(store, config, Dimension::Platform, on_event_click, on_event_hover) }
                <span class="section-label">{"Industry milestones"}</span>
                { render_milestone_row(store, config, Dimension::Industry, on_event_click, on_event_hover) }
            </div>
        }
    }

    fn render_feature_lane(
        store: &EventStore,
        span: TimeSpan,
        module: Module,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> Html {
        html! {
            <div class="lane-row">
                <span class="lane-label" title={module.blurb()}>{ module.label() }</span>
                {
                    for span.years().map(|year| {
                        let features = store.features_for(year, module);
                        html! {
                            <div class="year-cell">
                                {
                                    for features.into_iter().filter_map(|event| {
                                        span.position(event.date).map(|position| {
                                            render_feature_dot(
                                                event.clone(),
                                                position,
                                                on_event_click,
                                                on_event_hover,
                                            )
                                        })
                                    })
                                }
                            </div>
                        }
                    })
                }
            </div>
        }
    }

    fn render_milestone_row(
        store: &EventStore,
        config: &RoadmapConfig,
        dimension: Dimension,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> Html {
        let events = store.by_dimension(dimension);

        html! {
            <div class={classes!("milestone-row", dimension_class(dimension))}>
                <span class="lane-label" />
                {
                    for config.span.years().map(|year| {
                        let year_events: Vec<&Event> = events
                            .iter()
                            .copied()
                            .filter(|event| event.year() == year)
                            .collect();
                        let positions = spaced_positions(
                            &year_events,
                            config.span,
                            config.min_marker_spacing,
                        );
                        html! {
                            <div class="year-cell">
                                {
                                    for year_events.into_iter().filter_map(|event| {
                                        positions.get(&event.id).copied().map(|position| {
                                            render_milestone_marker(
                                                event.clone(),
                                                position,
                                                dimension,
                                                on_event_click,
                                                on_event_hover,
                                            )
                                        })
                                    })
                                }
                            </div>
                        }
                    })
                }
            </div>
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_year_detail(
        store: &EventStore,
        year: i32,
        prev_enabled: bool,
        next_enabled: bool,
        on_back: &Callback<MouseEvent>,
        on_prev: &Callback<MouseEvent>,
        on_next: &Callback<MouseEvent>,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> Html {
        let info = YearInfo::for_year(year);
        let stats = store.stats_for(year);
        let flagship = store.has_flagship(year);

        let platform: Vec<&Event> = store
            .by_dimension(Dimension::Platform)
            .into_iter()
            .filter(|event| event.year() == year)
            .collect();
        let industry: Vec<&Event> = store
            .by_dimension(Dimension::Industry)
            .into_iter()
            .filter(|event| event.year() == year)
            .collect();

        html! {
            <div class="year-detail">
                <header class="detail-header">
                    <button class="nav-button" onclick={on_back.clone()}>{"\u{2190}"}</button>
                    <div class="detail-heading">
                        <h2 class={classes!("year-number", flagship.then_some("is-flagship"))}>
                            { year }
                        </h2>
                        <p class="detail-philosophy">
                            { info.map(|i| i.philosophy).unwrap_or_default() }
                        </p>
                        <p class="detail-description">
                            { info.map(|i| i.description).unwrap_or_default() }
                        </p>
                    </div>
                    <div class="detail-stats">
                        <span class="stat">
                            <span class="stat-label">{"Features"}</span>
                            <span class="stat-value">{ stats.features }</span>
                        </span>
                        <span class="stat">
                            <span class="stat-label">{"Modules"}</span>
                            <span class="stat-value">{ stats.modules }</span>
                        </span>
                        {
                            if stats.flagship > 0 {
                                html! {
                                    <span class="stat">
                                        <span class="stat-label">{"Flagship"}</span>
                                        <span class="stat-value">{ stats.flagship }</span>
                                    </span>
                                }
                            } else {
                                Html::default()
                            }
                        }
                    </div>
                    <div class="detail-nav">
                        <button
                            class="nav-button"
                            disabled={!prev_enabled}
                            onclick={on_prev.clone()}
                        >
                            {"\u{2039}"}
                        </button>
                        <button
                            class="nav-button"
                            disabled={!next_enabled}
                            onclick={on_next.clone()}
                        >
                            {"\u{203a}"}
                        </button>
                    </div>
                </header>
                <div class="detail-row month-header">
                    <span class="detail-row-label" />
                    <div class="month-grid">
                        {
                            for MONTH_NAMES.iter().map(|name| html! {
                                <span class="month-name">{ *name }</span>
                            })
                        }
                    </div>
                </div>
                {
                    for store.active_modules_in(year).into_iter().map(|module| {
                        let features = store.features_for(year, module);
                        render_detail_row(
                            module.label().to_string(),
                            &features,
                            year,
                            on_event_click,
                            on_event_hover,
                        )
                    })
                }
                {
                    if platform.is_empty() {
                        Html::default()
                    } else {
                        render_detail_row(
                            "Platform".to_string(),
                            &platform,
                            year,
                            on_event_click,
                            on_event_hover,
                        )
                    }
                }
                {
                    if industry.is_empty() {
                        Html::default()
                    } else {
                        render_detail_row(
                            "Industry".to_string(),
                            &industry,
                            year,
                            on_event_click,
                            on_event_hover,
                        )
                    }
                }
            </div>
        }
    }

    fn render_detail_row(
        label: String,
        events: &[&Event],
        year: i32,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> Html {
        let buckets = month_buckets(events, year);

        html! {
            <div class="detail-row">
                <span class="detail-row-label">{ label }</span>
                <div class="month-grid">
                    {
                        for buckets.iter().map(|bucket| html! {
                            <div class="month-cell">
                                {
                                    for bucket.iter().map(|event| {
                                        render_detail_dot(
                                            (*event).clone(),
                                            on_event_click,
                                            on_event_hover,
                                        )
                                    })
                                }
                            </div>
                        })
                    }
                </div>
            </div>
        }
    }

    fn render_feature_dot(
        event: Event,
        position: f64,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> Html {
        let style = format!("left: {:.4}%;", position * 100.0);
        let impact = impact_level(event.impact_score);
        let flagship = event.is_flagship;
        let (onclick, onmouseenter, onmouseleave) =
            marker_handlers(event, on_event_click, on_event_hover);

        html! {
            <button
                class={classes!("feature-dot", flagship.then_some("is-flagship"))}
                style={style}
                data-impact={impact}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            />
        }
    }

    fn render_milestone_marker(
        event: Event,
        position: f64,
        dimension: Dimension,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> Html {
        let style = format!("left: {:.4}%;", position * 100.0);
        let symbol = match dimension {
            Dimension::Platform => "\u{25c6}",
            Dimension::Industry | Dimension::Feature => "\u{25cf}",
        };
        let (onclick, onmouseenter, onmouseleave) =
            marker_handlers(event, on_event_click, on_event_hover);

        html! {
            <button
                class="milestone-marker"
                style={style}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                { symbol }
            </button>
        }
    }

    fn render_detail_dot(
        event: Event,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> Html {
        let impact = impact_level(event.impact_score);
        let flagship = event.is_flagship;
        let dimension = dimension_class(event.dimension);
        let (onclick, onmouseenter, onmouseleave) =
            marker_handlers(event, on_event_click, on_event_hover);

        html! {
            <button
                class={classes!("detail-dot", dimension, flagship.then_some("is-flagship"))}
                data-impact={impact}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            />
        }
    }

    fn marker_handlers(
        event: Event,
        on_event_click: &Callback<Event>,
        on_event_hover: &Callback<Option<(Event, i32, i32)>>,
    ) -> (
        Callback<MouseEvent>,
        Callback<MouseEvent>,
        Callback<MouseEvent>,
    ) {
        let onclick = {
            let on_event_click = on_event_click.clone();
            let event = event.clone();
            Callback::from(move |_: MouseEvent| on_event_click.emit(event.clone()))
        };
        let onmouseenter = {
            let on_event_hover = on_event_hover.clone();
            Callback::from(move |mouse: MouseEvent| {
                on_event_hover.emit(Some((event.clone(), mouse.client_x(), mouse.client_y())))
            })
        };
        let onmouseleave = {
            let on_event_hover = on_event_hover.clone();
            Callback::from(move |_: MouseEvent| on_event_hover.emit(None))
        };

        (onclick, onmouseenter, onmouseleave)
    }

    fn render_hover_card(event: &Event, x: i32, y: i32) -> Html {
        let style = format!("left: {}px; top: {}px;", x + 14, y + 14);

        html! {
            <div class="hover-card" style={style}>
                <span class="hover-title">{ event.title.clone() }</span>
                <span class="hover-date">{ format_date(event.date) }</span>
                {
                    event.module
                        .map(|module| html! { <span class="hover-module">{ module.label() }</span> })
                        .unwrap_or_default()
                }
            </div>
        }
    }

    fn render_modal(event: &Event, on_close: Callback<MouseEvent>) -> Html {
        let stop = Callback::from(|mouse: MouseEvent| mouse.stop_propagation());

        html! {
            <div class="modal-backdrop" onclick={on_close.clone()}>
                <div class="modal" onclick={stop}>
                    <header class="modal-header">
                        <h3 class="modal-title">{ event.title.clone() }</h3>
                        <button class="modal-close" onclick={on_close}>{"\u{00d7}"}</button>
                    </header>
                    <p class="modal-date">
                        { format_date(event.date) }
                        {
                            event.module
                                .map(|module| format!(" \u{00b7} {}", module.label()))
                                .unwrap_or_default()
                        }
                    </p>
                    <p class="modal-description">{ event.description.clone() }</p>
                    {
                        event.customer_quote
                            .as_ref()
                            .map(|quote| html! { <blockquote class="modal-quote">{ quote.clone() }</blockquote> })
                            .unwrap_or_default()
                    }
                    {
                        event.feature_screenshot_url
                            .as_ref()
                            .map(|url| html! { <img class="modal-screenshot" src={url.clone()} /> })
                            .unwrap_or_default()
                    }
                </div>
            </div>
        }
    }

    fn format_date(date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }

    fn impact_level(impact: Impact) -> &'static str {
        match impact {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }

    fn dimension_class(dimension: Dimension) -> &'static str {
        match dimension {
            Dimension::Feature => "dim-feature",
            Dimension::Platform => "dim-platform",
            Dimension::Industry => "dim-industry",
        }
    }

    #[wasm_bindgen]
    pub fn mount_roadmap_view(selector: &str, events: JsValue) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let events: Vec<Event> = from_value(events)?;
        let store = EventStore::new(events);
        let config = RoadmapConfig::default();

        yew::Renderer::<RoadmapView>::with_root_and_props(
            target,
            RoadmapViewProps { store, config },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_roadmap_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_roadmap_view(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "roadmap-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
