//! URL retrieval: "fetch this URL into that file".
//!
//! The fetcher only depends on the [`Retriever`] trait; [`CurlRetriever`] is
//! the production implementation. Tests substitute their own.

mod curl_get;
mod error;

pub use curl_get::{CurlOptions, CurlRetriever};
pub use error::RetrieveError;

use std::path::{Path, PathBuf};

/// Temporary file suffix used while a transfer is in flight.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.jpg` → `a.jpg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Something that can copy a remote resource to a local file.
///
/// Implementations must leave `dest` untouched on failure: either the whole
/// body lands at `dest` or nothing does.
pub trait Retriever {
    /// Retrieves `url` into `dest`, returning the number of bytes written.
    fn fetch_to_path(&self, url: &str, dest: &Path) -> Result<u64, RetrieveError>;
}

impl<R: Retriever + ?Sized> Retriever for &R {
    fn fetch_to_path(&self, url: &str, dest: &Path) -> Result<u64, RetrieveError> {
        (**self).fetch_to_path(url, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("frame.jpg"));
        assert_eq!(p.to_string_lossy(), "frame.jpg.part");
        let p2 = temp_path(Path::new("/tmp/anim/index.html"));
        assert_eq!(p2.to_string_lossy(), "/tmp/anim/index.html.part");
    }
}
