use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use pinfeed::{
    builder::FeedBuilder,
    config::FeedConfig,
    controller::LoadOutcome,
    item::Item,
    layout::{Column, Columns},
    source::MemoryPageSource,
};

use crate::{args::CliArgs, logging::init_logging};

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => FeedConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => FeedConfig::default(),
    };
    let items = load_fixture(&args.fixture)?;
    let source = MemoryPageSource::new(items).resend_cursor_item(args.resend_cursor_item);

    let mut builder = FeedBuilder::new()
        .source(source)
        .config(config)
        .filter(args.filter_key()?);
    if let Some(limit) = args.page_limit {
        builder = builder.page_limit(limit);
    }
    let mut feed = builder.build()?;

    for page in 0..args.pages {
        match feed.load_more().await? {
            LoadOutcome::Merged(stats) => log::info!(
                "page {}: {} new, {} duplicates",
                page + 1,
                stats.appended,
                stats.duplicates
            ),
            LoadOutcome::Stale => log::warn!("page {} was dropped as stale", page + 1),
            LoadOutcome::Skipped => {
                log::info!("feed exhausted after {page} pages");
                break;
            }
        }
    }

    let columns = feed.layout_for_container(args.width);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&columns)?);
    } else {
        print_columns(&columns, feed.is_exhausted());
    }
    Ok(())
}

fn load_fixture(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    let items = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse fixture {}", path.display()))?;
    Ok(items)
}

fn print_columns(columns: &Columns<'_>, exhausted: bool) {
    println!(
        "column width {:.1}, {} items{}",
        columns.column_width,
        columns.len(),
        if exhausted { " (end of feed)" } else { "" }
    );
    print_column("left", &columns.left);
    print_column("right", &columns.right);
}

fn print_column(name: &str, column: &Column<'_>) {
    println!("{name} ({:.1}px)", column.height);
    for placement in &column.placements {
        println!(
            "  #{:<3} {:<12} {:<10} top {:>7.1} height {:>6.1}",
            placement.index,
            placement.item.id,
            placement.item.kind.tag(),
            placement.top,
            placement.height
        );
    }
}
