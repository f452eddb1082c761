//! Best-effort batch fetch of every image linked from a listing page.
//!
//! Sequence: normalize the base URL, create the destination, snapshot the
//! listing to `index.html`, parse it, then retrieve each reference in
//! discovery order. Nothing here returns an error: every per-file problem is
//! recorded in the [`FetchReport`] and logged, and a missing listing yields an
//! empty report.

mod report;

pub use report::{FetchEntry, FetchError, FetchReport, Outcome};

use crate::listing;
use crate::retrieve::Retriever;
use crate::url_model;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the listing snapshot inside the destination folder.
pub const SNAPSHOT_FILENAME: &str = "index.html";

/// Fetches the listing at `base_url` and every image it links to into `destination`.
pub fn fetch<R: Retriever + ?Sized>(
    retriever: &R,
    base_url: &str,
    destination: &Path,
) -> FetchReport {
    let base_url = url_model::normalize_base_url(base_url);
    let mut report = FetchReport::empty(&base_url, destination);

    if let Err(e) = fs::create_dir_all(destination) {
        tracing::warn!(
            "cannot create destination {}: {}",
            destination.display(),
            e
        );
        return report;
    }
    let destination = absolute_or_given(destination);
    report.destination = destination.clone();

    let snapshot = destination.join(SNAPSHOT_FILENAME);
    if let Err(e) = retriever.fetch_to_path(&base_url, &snapshot) {
        tracing::warn!("listing fetch failed for {}: {}", base_url, e);
        // A snapshot left over from an earlier run must not stand in for this one.
        if snapshot.exists() {
            if let Err(rm) = fs::remove_file(&snapshot) {
                tracing::warn!("cannot remove stale {}: {}", snapshot.display(), rm);
            }
        }
    }
    if !snapshot.exists() {
        return report;
    }
    report.listing_retrieved = true;

    let html = match fs::read(&snapshot) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!("cannot read listing snapshot {}: {}", snapshot.display(), e);
            return report;
        }
    };

    let refs = listing::extract_image_refs(&html);
    tracing::info!(
        base_url = %base_url,
        images = refs.len(),
        "parsed listing"
    );

    for reference in refs {
        let entry = fetch_one(retriever, &base_url, &destination, reference);
        if let Outcome::Failed(e) = &entry.outcome {
            tracing::warn!("skipping {}: {}", entry.url, e);
        }
        report.entries.push(entry);
    }

    tracing::info!(
        base_url = %base_url,
        downloaded = report.downloaded(),
        already_present = report.already_present(),
        failed = report.failed(),
        "fetch finished"
    );
    report
}

fn fetch_one<R: Retriever + ?Sized>(
    retriever: &R,
    base_url: &str,
    destination: &Path,
    reference: listing::ImageRef,
) -> FetchEntry {
    let url = url_model::remote_url(base_url, reference.as_str());
    let path = match url_model::local_save_path(destination, reference.as_str()) {
        Ok(p) => p,
        Err(e) => {
            return FetchEntry {
                reference,
                url,
                path: None,
                outcome: Outcome::Failed(FetchError::UnsafePath(e)),
            }
        }
    };

    let outcome = if path.exists() {
        tracing::debug!(path = %path.display(), "already present, not re-downloading");
        Outcome::AlreadyPresent
    } else {
        match retriever.fetch_to_path(&url, &path) {
            Ok(bytes) => Outcome::Downloaded { bytes },
            Err(e) => Outcome::Failed(FetchError::Retrieve(e)),
        }
    };

    FetchEntry {
        reference,
        url,
        path: Some(path),
        outcome,
    }
}

fn absolute_or_given(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
