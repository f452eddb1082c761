//! Per-run fetch results.

use crate::listing::ImageRef;
use crate::retrieve::RetrieveError;
use crate::url_model::UnsafePath;
use serde::ser::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Why a single reference was not saved.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    UnsafePath(#[from] UnsafePath),
    #[error(transparent)]
    Retrieve(#[from] RetrieveError),
}

/// What happened to one image reference.
#[derive(Debug)]
pub enum Outcome {
    /// Retrieved in this run.
    Downloaded { bytes: u64 },
    /// A file already existed at the local path; it was left untouched.
    AlreadyPresent,
    /// Retrieval was attempted (or refused) and failed.
    Failed(FetchError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed(_))
    }

    fn label(&self) -> &'static str {
        match self {
            Outcome::Downloaded { .. } => "downloaded",
            Outcome::AlreadyPresent => "already_present",
            Outcome::Failed(_) => "failed",
        }
    }
}

/// One discovered image reference and its result.
#[derive(Debug)]
pub struct FetchEntry {
    pub reference: ImageRef,
    /// Remote URL the reference resolved to.
    pub url: String,
    /// Local save path; `None` if the reference was rejected before retrieval.
    pub path: Option<PathBuf>,
    pub outcome: Outcome,
}

/// Result of one fetch session.
#[derive(Debug)]
pub struct FetchReport {
    /// Base URL after normalization (always ends in `/`).
    pub base_url: String,
    pub destination: PathBuf,
    /// True once a listing snapshot was on disk and parsed.
    pub listing_retrieved: bool,
    /// Every image reference from the listing, in discovery order.
    pub entries: Vec<FetchEntry>,
}

impl FetchReport {
    pub(crate) fn empty(base_url: &str, destination: &Path) -> Self {
        Self {
            base_url: base_url.to_string(),
            destination: destination.to_path_buf(),
            listing_retrieved: false,
            entries: Vec::new(),
        }
    }

    /// References processed without error: downloaded now or already on disk.
    pub fn count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_success()).count()
    }

    pub fn downloaded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Downloaded { .. }))
            .count()
    }

    pub fn already_present(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::AlreadyPresent))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Failed(_)))
            .count()
    }

    /// Suffix of the first discovered reference, or `""` if there were none.
    ///
    /// Taken from the first reference even if that one failed, and without
    /// checking that the other references share it.
    pub fn suffix(&self) -> &str {
        self.entries
            .first()
            .map(|e| e.reference.suffix())
            .unwrap_or("")
    }
}

#[derive(serde::Serialize)]
struct EntryView<'a> {
    reference: &'a ImageRef,
    url: &'a str,
    path: Option<&'a Path>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(serde::Serialize)]
struct ReportView<'a> {
    base_url: &'a str,
    destination: &'a Path,
    listing_retrieved: bool,
    count: usize,
    suffix: &'a str,
    downloaded: usize,
    already_present: usize,
    failed: usize,
    entries: Vec<EntryView<'a>>,
}

impl Serialize for FetchReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self
            .entries
            .iter()
            .map(|e| EntryView {
                reference: &e.reference,
                url: &e.url,
                path: e.path.as_deref(),
                status: e.outcome.label(),
                bytes: match e.outcome {
                    Outcome::Downloaded { bytes } => Some(bytes),
                    _ => None,
                },
                error: match &e.outcome {
                    Outcome::Failed(err) => Some(err.to_string()),
                    _ => None,
                },
            })
            .collect();
        ReportView {
            base_url: &self.base_url,
            destination: &self.destination,
            listing_retrieved: self.listing_retrieved,
            count: self.count(),
            suffix: self.suffix(),
            downloaded: self.downloaded(),
            already_present: self.already_present(),
            failed: self.failed(),
            entries,
        }
        .serialize(serializer)
    }
}
