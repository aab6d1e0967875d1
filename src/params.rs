use std::ops::RangeInclusive;

// Fixed crawl parameters. There are no CLI flags, environment variables
// or config files: running the binary performs the full crawl.

pub const SEASONS: RangeInclusive<u16> = 2016..=2023;

pub const DATA_DIR: &str = "data";
pub const STANDINGS_SUBDIR: &str = "standings";
pub const SCORES_SUBDIR: &str = "scores";

pub const INDEX_URL_BASE: &str = "https://www.basketball-reference.com";
// Monthly schedule links resolve against the bare host, box scores
// against the www host. Mirrors the hosts the site itself links to.
pub const STANDINGS_URL_BASE: &str = "https://basketball-reference.com";
pub const SCORES_URL_BASE: &str = "https://www.basketball-reference.com";

// Page regions worth keeping: the month filter strip on the season
// index, the full schedule table on month pages, the main content
// region on box-score pages.
pub const SCHEDULE_FILTER_SELECTOR: &str = "#content .filter";
pub const SCHEDULE_TABLE_SELECTOR: &str = "#all_schedule";
pub const BOX_SCORE_SELECTOR: &str = "#content";

pub const FETCH_SLEEP_SECS: u64 = 5;
pub const FETCH_RETRIES: u32 = 3;

pub fn season_index_url(season: u16) -> String {
    format!("{INDEX_URL_BASE}/leagues/NBA_{season}_games.html")
}
