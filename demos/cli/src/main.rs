use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use roadmap_core::{month_buckets, spaced_positions, Dimension, EventStore, RoadmapConfig};
use roadmap_feed::build_snapshot;

#[derive(Parser, Debug)]
#[command(
    name = "roadmap-cli",
    about = "Dựng bản đồ ra mắt tính năng từ file JSON sự kiện."
)]
struct Args {
    /// Đường dẫn tới file JSON danh sách sự kiện.
    #[arg(short, long)]
    input: PathBuf,

    /// In chi tiết một năm thay vì tổng quan.
    #[arg(short, long)]
    year: Option<i32>,

    /// In snapshot dạng JSON thay vì dạng chữ.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;

    let config = RoadmapConfig::default();
    let events = roadmap_feed::parse_events_str(&data)?;
    let store = EventStore::new(events);

    if args.json {
        let snapshot = build_snapshot(&store, &config);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    match args.year {
        Some(year) => print_year_detail(&store, &config, year),
        None => print_overview(&store, &config),
    }

    Ok(())
}

fn print_overview(store: &EventStore, config: &RoadmapConfig) {
    let snapshot = build_snapshot(store, config);

    println!(
        "Span: {}-{} | {} events",
        snapshot.span.start_year,
        snapshot.span.end_year,
        store.len()
    );

    for summary in snapshot.year_summaries() {
        println!(
            "{}: {} features, {} flagship | {}",
            summary.year, summary.stats.features, summary.stats.flagship, summary.philosophy
        );
    }

    for lane in snapshot.feature_lanes() {
        let dots: usize = lane.years.iter().map(|y| y.markers.len()).sum();
        println!("Lane {:<20} {dots} features", lane.module.label());
    }

    let platform: usize = snapshot.platform.iter().map(|y| y.markers.len()).sum();
    let industry: usize = snapshot.industry.iter().map(|y| y.markers.len()).sum();
    println!("Platform milestones: {platform}");
    println!("Industry milestones: {industry}");
}

fn print_year_detail(store: &EventStore, config: &RoadmapConfig, year: i32) {
    if !config.span.contains(year) {
        println!("Năm {year} nằm ngoài khoảng hiển thị");
        return;
    }

    let stats = store.stats_for(year);
    println!(
        "{year}: {} features, {} modules, {} flagship, {} data-query",
        stats.features, stats.modules, stats.flagship, stats.data_query
    );

    for module in store.active_modules_in(year) {
        let features = store.features_for(year, module);
        let buckets = month_buckets(&features, year);
        let cells: Vec<String> = buckets
            .iter()
            .map(|bucket| {
                if bucket.is_empty() {
                    " .".to_string()
                } else {
                    format!("{:2}", bucket.len())
                }
            })
            .collect();
        println!("{:<20} |{}|", module.label(), cells.join(" "));
    }

    for dimension in [Dimension::Platform, Dimension::Industry] {
        let events: Vec<_> = store
            .by_dimension(dimension)
            .into_iter()
            .filter(|event| event.year() == year)
            .collect();
        if events.is_empty() {
            continue;
        }

        let positions = spaced_positions(&events, config.span, config.min_marker_spacing);
        println!("{dimension:?}:");
        for event in events {
            if let Some(position) = positions.get(&event.id) {
                println!("  {:>5.1}%  {} ({})", position * 100.0, event.title, event.date);
            }
        }
    }
}
