//! Page model: parsed imageboard HTML plus the page URL.
//!
//! The host site renders three layouts (home feed, thread, board index), each
//! exposing image metadata differently. Layout is decided from the URL path
//! alone; the selectors below match the site's markup for each layout.

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Which of the three site layouts a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The site root: a feed of recently posted images.
    Home,
    /// A single thread (`/<board>/res/<id>.html`).
    Thread,
    /// A board index listing several threads.
    Board,
}

impl PageKind {
    /// Classifies a page URL by path shape.
    pub fn classify(url: &Url) -> PageKind {
        let path = url.path();
        if path == "/" {
            PageKind::Home
        } else if path.contains("/res/") {
            PageKind::Thread
        } else {
            PageKind::Board
        }
    }
}

/// A fetched page: parsed document plus the URL it came from. Image handles
/// borrowed from it live only for one archiving pass.
pub struct Page {
    url: Url,
    kind: PageKind,
    doc: Html,
}

/// One `.thread` block on a board index page.
pub struct ThreadBlock<'a> {
    root: ElementRef<'a>,
    /// Thread id taken from the element id (`thread_<id>`).
    pub id: Option<String>,
    /// Board short name from the `data-board` attribute.
    pub board: Option<String>,
}

impl<'a> ThreadBlock<'a> {
    /// Post images inside this thread block only.
    pub fn post_images(&self) -> Vec<ElementRef<'a>> {
        let sel = Selector::parse(".post-image").unwrap();
        self.root.select(&sel).collect()
    }
}

impl Page {
    pub fn parse(url: &str, html: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid page URL: {url}"))?;
        let kind = PageKind::classify(&url);
        Ok(Self {
            url,
            kind,
            doc: Html::parse_document(html),
        })
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// The page URL, used as the join base for relative link targets.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// All post images on the page, regardless of thread.
    pub fn post_images(&self) -> Vec<ElementRef<'_>> {
        let sel = Selector::parse(".post-image").unwrap();
        self.doc.select(&sel).collect()
    }

    /// Post images inside thread blocks (a board index's "all visible" set).
    pub fn visible_post_images(&self) -> Vec<ElementRef<'_>> {
        let sel = Selector::parse(".thread .post-image").unwrap();
        self.doc.select(&sel).collect()
    }

    /// Recent-feed images on the home page.
    pub fn recent_images(&self) -> Vec<ElementRef<'_>> {
        let sel = Selector::parse(".box.image img").unwrap();
        self.doc.select(&sel).collect()
    }

    /// Thread blocks on a board index page.
    pub fn threads(&self) -> Vec<ThreadBlock<'_>> {
        let sel = Selector::parse(".thread").unwrap();
        self.doc
            .select(&sel)
            .map(|root| {
                let id = root
                    .value()
                    .id()
                    .and_then(|raw| raw.split('_').nth(1))
                    .map(str::to_string);
                let board = root.value().attr("data-board").map(str::to_string);
                ThreadBlock { root, id, board }
            })
            .collect()
    }

    /// Board short name: the first URL path segment.
    pub fn board_name(&self) -> Option<String> {
        self.url
            .path_segments()?
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Thread id for a thread page URL (`/<board>/res/<id>.html`), with the
    /// extension stripped.
    pub fn thread_id(&self) -> Option<String> {
        let mut segments = self.url.path_segments()?;
        let id = segments.nth(2)?;
        Some(id.split('.').next().unwrap_or(id).to_string())
    }
}
