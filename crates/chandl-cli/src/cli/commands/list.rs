//! `chandl list <url>` – print resolved full-size URLs without downloading.

use anyhow::{Context, Result};
use chandl_core::config::ChandlConfig;
use chandl_core::page::Page;
use chandl_core::{fetch, resolve};

use super::collect_images;

pub fn run_list(cfg: &ChandlConfig, url: &str, thread: Option<&str>) -> Result<()> {
    let ua = cfg.user_agent.as_deref();
    let html = fetch::fetch_page(url, ua).with_context(|| format!("fetch page {url}"))?;
    let page = Page::parse(url, &html)?;

    let (images, _) = collect_images(&page, thread)?;
    for img in &images {
        match resolve::full_size_url(*img, page.url()) {
            Some(resolved) => println!("{resolved}"),
            None => tracing::warn!("skipping image with no usable source"),
        }
    }
    Ok(())
}
