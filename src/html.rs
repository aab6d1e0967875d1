use scraper::{Html, Selector};

// Pure HTML extraction: bytes in, fragments and links out. No I/O here
// so every rule is testable against string fixtures.

pub const BOX_SCORE_MARKER: &str = "boxscore";
pub const HTML_SUFFIX: &str = ".html";

/// Inner HTML of the first element matching `css`, or `None` when the
/// selector is invalid or nothing matches.
pub fn select_fragment(document: &str, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    let doc = Html::parse_document(document);
    doc.select(&selector).next().map(|el| el.inner_html())
}

pub fn page_title(document: &str) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let doc = Html::parse_document(document);
    let title: String = doc.select(&selector).next()?.text().collect();
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Every anchor `href` in the fragment, in document order. Anchors
/// without an href are skipped; malformed markup yields an empty list
/// rather than an error.
pub fn anchor_hrefs(fragment: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse("a") else {
        return Vec::new();
    };
    let doc = Html::parse_fragment(fragment);
    doc.select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Game-link rule: a box-score path marker somewhere in the href and an
/// `.html` document suffix at the very end. `.shtml` does not qualify.
pub fn is_box_score_href(href: &str) -> bool {
    href.contains(BOX_SCORE_MARKER) && href.ends_with(HTML_SUFFIX)
}
