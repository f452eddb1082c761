//! Listing-page parsing: pulls image references out of a directory index.
//!
//! Matching is by substring, not by suffix: every anchor whose href contains
//! one of [`IMAGE_MARKERS`] counts, so `frame.jpg?v=2` and `thumbs.png.html`
//! are both image references.

use scraper::{ElementRef, Html};
use serde::Serialize;

/// Substrings that mark an href as an image reference.
pub const IMAGE_MARKERS: [&str; 3] = [".gif", ".png", ".jpg"];

/// Number of trailing characters used as the frame suffix.
const SUFFIX_CHARS: usize = 4;

/// An href value taken from the listing page, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four characters of the reference (fewer if it is shorter).
    ///
    /// Used as an approximation of the file extension, e.g. `.jpg`.
    pub fn suffix(&self) -> &str {
        match self.0.char_indices().rev().nth(SUFFIX_CHARS - 1) {
            Some((idx, _)) => &self.0[idx..],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// True if `href` contains any of the image markers.
pub fn is_image_href(href: &str) -> bool {
    IMAGE_MARKERS.iter().any(|m| href.contains(m))
}

/// Collects image references from every `<a href>` in `html`, in document order.
///
/// Anchors without an `href` are skipped. Duplicates are kept.
pub fn extract_image_refs(html: &str) -> Vec<ImageRef> {
    let document = Html::parse_document(html);
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| is_image_href(href))
        .map(ImageRef::new)
        .collect()
}
