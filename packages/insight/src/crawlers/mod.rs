//! Crawl provider implementations.

pub mod http;

pub use http::HttpCrawler;
