//! Full-resolution URL resolution.
//!
//! The host page exposes the full-size link in a different place depending on
//! layout: home-feed thumbnails are wrapped in an anchor to the resized view,
//! thread and board posts carry an explicit file-info link, and when neither
//! is present the thumbnail path itself is rewritten. The explicit link is
//! preferred over path rewriting whenever it exists; the case order below is
//! load-bearing.

use scraper::{ElementRef, Selector};
use url::Url;

/// Resolves the authoritative full-resolution URL for an image element.
///
/// Cases, in order:
/// 1. Direct parent is an anchor: its target with the first `/res/` rewritten
///    to `/src/` and any `#fragment` stripped.
/// 2. Nearest `.file` ancestor holding a `.fileinfo a` link: that target,
///    unchanged.
/// 3. The image's own `src` with the first `/thumb/` rewritten to `/src/`
///    (unchanged when no `/thumb/` is present).
///
/// Targets are joined against `base`, so relative hrefs resolve like a
/// browser would. Returns `None` only when the element offers no usable
/// source at all.
pub fn full_size_url(img: ElementRef<'_>, base: &Url) -> Option<String> {
    if let Some(parent) = parent_element(img) {
        if parent.value().name().eq_ignore_ascii_case("a") {
            if let Some(href) = parent.value().attr("href") {
                let target = join(base, href)?;
                return Some(strip_fragment(&target.replacen("/res/", "/src/", 1)).to_string());
            }
        }
    }

    let file_sel = Selector::parse(".file").unwrap();
    if let Some(file) = closest_ancestor(img, &file_sel) {
        let info_sel = Selector::parse(".fileinfo a").unwrap();
        if let Some(info) = file.select(&info_sel).next() {
            if let Some(href) = info.value().attr("href") {
                return join(base, href);
            }
        }
    }

    let src = img.value().attr("src")?;
    let joined = join(base, src)?;
    Some(joined.replacen("/thumb/", "/src/", 1))
}

fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

fn closest_ancestor<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| sel.matches(a))
}

fn join(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(String::from)
}

fn strip_fragment(url: &str) -> &str {
    match url.split_once('#') {
        Some((head, _)) => head,
        None => url,
    }
}
