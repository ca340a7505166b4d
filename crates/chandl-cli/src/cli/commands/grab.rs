//! `chandl grab <url>` – archive a page's images into a zip file.

use anyhow::{Context, Result};
use chandl_core::config::ChandlConfig;
use chandl_core::page::Page;
use chandl_core::{archive, fetch};

use super::collect_images;

pub fn run_grab(
    cfg: &ChandlConfig,
    url: &str,
    output: Option<&str>,
    thread: Option<&str>,
) -> Result<()> {
    let ua = cfg.user_agent.as_deref();
    let html = fetch::fetch_page(url, ua).with_context(|| format!("fetch page {url}"))?;
    let page = Page::parse(url, &html)?;

    let (images, default_name) = collect_images(&page, thread)?;
    let name = output.unwrap_or(&default_name);
    tracing::info!("archiving {} images from {} as {}", images.len(), url, name);

    let (blob, report) = archive::archive_images(&page, &images, ua)?;

    let out_dir = match &cfg.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let path = out_dir.join(name);
    archive::save_archive(&blob, &path)?;

    println!(
        "{}: archived {} of {} images ({} failed)",
        path.display(),
        report.archived,
        report.attempted,
        report.failed.len()
    );
    Ok(())
}
