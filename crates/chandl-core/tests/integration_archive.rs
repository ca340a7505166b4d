//! Integration test: local HTTP server, full page-to-archive pass.
//!
//! Starts a minimal image server, parses a thread page referencing it, runs
//! the batch archiver, and asserts the per-item failure isolation and the
//! finished zip contents.

mod common;

use chandl_core::archive;
use chandl_core::page::Page;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use tempfile::tempdir;
use zip::ZipArchive;

fn routes(base: &[(&str, u16, &[u8])]) -> common::image_server::Routes {
    base.iter()
        .map(|(path, status, body)| (path.to_string(), (*status, body.to_vec())))
        .collect()
}

#[test]
fn batch_archives_successes_and_skips_failures() {
    let server = common::image_server::start(routes(&[
        ("/b/src/1_full.png", 200, b"png-bytes"),
        ("/b/src/2.gif", 200, b"gif-bytes"),
    ]));

    // Three post images: an explicit file-info link, a bare thumbnail whose
    // rewrite resolves, and a file-info link pointing at a missing file.
    let html = format!(
        r#"
        <div class="file">
            <p class="fileinfo"><a href="{server}b/src/1_full.png">1_full.png</a></p>
            <img class="post-image" src="{server}b/thumb/1.jpg">
        </div>
        <img class="post-image" src="{server}b/thumb/2.gif">
        <div class="file">
            <p class="fileinfo"><a href="{server}b/src/missing.jpg">missing.jpg</a></p>
            <img class="post-image" src="{server}b/thumb/3.jpg">
        </div>
        "#
    );
    let page = Page::parse(&format!("{server}b/res/9.html"), &html).unwrap();
    let images = page.post_images();
    assert_eq!(images.len(), 3);

    let (blob, report) = archive::archive_images(&page, &images, None).unwrap();
    assert_eq!(report.attempted, 3);
    assert_eq!(report.archived, 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(
        report.failed[0].url.as_deref(),
        Some(format!("{server}b/src/missing.jpg").as_str())
    );

    let mut zip = ZipArchive::new(Cursor::new(blob)).unwrap();
    assert_eq!(zip.len(), 2);
    let mut body = Vec::new();
    zip.by_name("1_full.png").unwrap().read_to_end(&mut body).unwrap();
    assert_eq!(body, b"png-bytes");
    body.clear();
    zip.by_name("2.gif").unwrap().read_to_end(&mut body).unwrap();
    assert_eq!(body, b"gif-bytes");
}

#[test]
fn all_failures_still_save_a_valid_empty_archive() {
    let server = common::image_server::start(routes(&[]));

    let html = format!(
        r#"
        <img class="post-image" src="{server}b/thumb/a.jpg">
        <img class="post-image" src="{server}b/thumb/b.jpg">
        "#
    );
    let page = Page::parse(&format!("{server}b/res/1.html"), &html).unwrap();
    let images = page.post_images();

    let (blob, report) = archive::archive_images(&page, &images, None).unwrap();
    assert_eq!(report.attempted, 2);
    assert_eq!(report.archived, 0);
    assert_eq!(report.failed.len(), 2);

    let dir = tempdir().unwrap();
    let out = dir.path().join("b_1.zip");
    archive::save_archive(&blob, &out).unwrap();

    let zip = ZipArchive::new(Cursor::new(std::fs::read(&out).unwrap())).unwrap();
    assert_eq!(zip.len(), 0);
}

#[test]
fn colliding_entry_names_keep_the_last_fetched_body() {
    let server = common::image_server::start(routes(&[
        ("/a/src/same.jpg", 200, b"first"),
        ("/b/src/same.jpg", 200, b"second"),
    ]));

    let html = format!(
        r#"
        <img class="post-image" src="{server}a/thumb/same.jpg">
        <img class="post-image" src="{server}b/thumb/same.jpg">
        "#
    );
    let page = Page::parse(&format!("{server}a/res/1.html"), &html).unwrap();
    let images = page.post_images();

    let (blob, report) = archive::archive_images(&page, &images, None).unwrap();
    assert_eq!(report.archived, 2);

    let mut zip = ZipArchive::new(Cursor::new(blob)).unwrap();
    assert_eq!(zip.len(), 1);
    let mut body = Vec::new();
    zip.by_name("same.jpg").unwrap().read_to_end(&mut body).unwrap();
    assert_eq!(body, b"second");
}
