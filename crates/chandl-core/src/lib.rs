pub mod config;
pub mod logging;

// Page accessors hand out scraper element handles; re-export for callers.
pub use scraper::ElementRef;

pub mod archive;
pub mod fetch;
pub mod page;
pub mod resolve;
pub mod url_model;
