use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use bref_scrape::cache::PageCache;
use bref_scrape::crawl;
use bref_scrape::fetch::{HttpSource, RetryPolicy};
use bref_scrape::params;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = Path::new(params::DATA_DIR);
    let standings =
        PageCache::open(data_dir.join(params::STANDINGS_SUBDIR)).context("standings cache")?;
    let scores = PageCache::open(data_dir.join(params::SCORES_SUBDIR)).context("scores cache")?;

    let mut source = HttpSource;
    let policy = RetryPolicy::default();

    // One URL at a time, seasons first, then every cached month page.
    for season in params::SEASONS {
        crawl::crawl_season(&mut source, &standings, season, policy)?;
    }

    for standings_file in standings.html_files()? {
        crawl::crawl_games(&mut source, &scores, &standings_file, policy)?;
    }

    tracing::info!("crawl complete");
    Ok(())
}
