use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use url::Url;

use crate::cache::{self, PageCache};
use crate::fetch::{self, PageSource, RetryPolicy};
use crate::html;
use crate::params;

/// What `ensure_cached` did for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    AlreadyCached,
    Fetched,
    Unavailable,
}

/// Idempotent fetch-into-cache. A URL whose key is already present is
/// never fetched again. An exhausted fetch writes nothing, leaving a
/// gap for a later run to fill.
pub fn ensure_cached<S: PageSource>(
    source: &mut S,
    cache: &PageCache,
    url: &Url,
    selector: &str,
    policy: RetryPolicy,
) -> Result<CacheOutcome> {
    let key = cache::cache_key(url);
    if cache.contains(&key) {
        tracing::debug!(%url, %key, "already cached");
        return Ok(CacheOutcome::AlreadyCached);
    }
    match fetch::fetch_fragment(source, url.as_str(), selector, policy) {
        Some(fragment) => {
            cache.store(&key, &fragment)?;
            tracing::info!(%url, %key, "cached");
            Ok(CacheOutcome::Fetched)
        }
        None => {
            tracing::warn!(%url, "no content returned, skipping");
            Ok(CacheOutcome::Unavailable)
        }
    }
}

/// One season: fetch the schedule index, then cache every monthly
/// schedule page it links to.
pub fn crawl_season<S: PageSource>(
    source: &mut S,
    standings: &PageCache,
    season: u16,
    policy: RetryPolicy,
) -> Result<()> {
    let index_url = params::season_index_url(season);
    tracing::info!(season, url = %index_url, "crawling season");

    let Some(fragment) =
        fetch::fetch_fragment(source, &index_url, params::SCHEDULE_FILTER_SELECTOR, policy)
    else {
        tracing::warn!(season, "schedule index unavailable, skipping season");
        return Ok(());
    };

    for href in html::anchor_hrefs(&fragment) {
        let Some(url) = resolve(params::STANDINGS_URL_BASE, &href) else {
            tracing::debug!(%href, "unresolvable link, skipping");
            continue;
        };
        ensure_cached(source, standings, &url, params::SCHEDULE_TABLE_SELECTOR, policy)?;
    }
    Ok(())
}

/// One cached monthly schedule: cache every box-score page it links to.
pub fn crawl_games<S: PageSource>(
    source: &mut S,
    scores: &PageCache,
    standings_file: &Path,
    policy: RetryPolicy,
) -> Result<()> {
    let fragment = fs::read_to_string(standings_file)
        .with_context(|| format!("reading {}", standings_file.display()))?;

    for href in html::anchor_hrefs(&fragment) {
        if !html::is_box_score_href(&href) {
            continue;
        }
        let Some(url) = resolve(params::SCORES_URL_BASE, &href) else {
            tracing::debug!(%href, "unresolvable link, skipping");
            continue;
        };
        ensure_cached(source, scores, &url, params::BOX_SCORE_SELECTOR, policy)?;
    }
    Ok(())
}

fn resolve(base: &str, href: &str) -> Option<Url> {
    let base = Url::parse(base).ok()?;
    base.join(href).ok()
}
