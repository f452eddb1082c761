//! URL modeling for listing pages and the image references found on them.
//!
//! Base URLs are treated as directory listings: they always end in `/` and
//! image references are appended verbatim, the same way a browser resolves a
//! relative href against a directory page.

mod path;

pub use path::{local_save_path, UnsafePath};

/// Appends a trailing `/` to `base_url` if it is missing.
pub fn normalize_base_url(base_url: &str) -> String {
    let mut out = base_url.to_string();
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Remote URL of a reference: normalized base URL followed by the raw href.
pub fn remote_url(normalized_base: &str, reference: &str) -> String {
    format!("{}{}", normalized_base, reference)
}

/// Checks that `base_url` parses as an absolute http(s) URL.
///
/// The fetcher itself accepts any string; this is for callers (CLI, config)
/// that want to reject typos before touching the network.
pub fn validate_base_url(base_url: &str) -> anyhow::Result<url::Url> {
    let parsed = url::Url::parse(base_url)
        .map_err(|e| anyhow::anyhow!("invalid base URL {:?}: {}", base_url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => anyhow::bail!("unsupported URL scheme {:?} in {}", other, base_url),
    }
}
