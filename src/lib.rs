pub mod cache;
pub mod crawl;
pub mod fetch;
pub mod html;
pub mod params;
