//! `framegrab fetch` – download the images on a listing page.

use anyhow::Result;
use framegrab_core::config::FramegrabConfig;
use framegrab_core::fetcher::FetchReport;
use framegrab_core::url_model;
use std::path::PathBuf;

use super::session;

pub async fn run_fetch(
    cfg: &FramegrabConfig,
    base_url: String,
    destination: PathBuf,
    json: bool,
) -> Result<()> {
    url_model::validate_base_url(&base_url)?;
    let report = session::fetch(cfg, base_url, destination).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !report.listing_retrieved {
        tracing::warn!("listing unavailable at {}", report.base_url);
    }
    tracing::info!(
        destination = %report.destination.display(),
        downloaded = report.downloaded(),
        already_present = report.already_present(),
        failed = report.failed(),
        "fetch command finished"
    );
    println!("{}", count_suffix_line(&report));
    Ok(())
}

/// `<count> <suffix>`, the plain-text result of a fetch.
fn count_suffix_line(report: &FetchReport) -> String {
    format!("{} {}", report.count(), report.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use framegrab_core::fetcher::{FetchEntry, Outcome};
    use framegrab_core::listing::ImageRef;

    fn entry(name: &str, outcome: Outcome) -> FetchEntry {
        FetchEntry {
            reference: ImageRef::new(name),
            url: format!("http://listing.test/{}", name),
            path: Some(PathBuf::from("/frames").join(name)),
            outcome,
        }
    }

    #[test]
    fn prints_count_and_suffix() {
        let report = FetchReport {
            base_url: "http://listing.test/".into(),
            destination: PathBuf::from("/frames"),
            listing_retrieved: true,
            entries: vec![
                entry("a.jpg", Outcome::Downloaded { bytes: 3 }),
                entry("b.jpg", Outcome::AlreadyPresent),
                entry("c.png", Outcome::Downloaded { bytes: 1 }),
            ],
        };
        assert_eq!(count_suffix_line(&report), "3 .jpg");
    }

    #[test]
    fn empty_fetch_prints_zero_and_empty_suffix() {
        let report = FetchReport {
            base_url: "http://listing.test/".into(),
            destination: PathBuf::from("/frames"),
            listing_retrieved: false,
            entries: Vec::new(),
        };
        assert_eq!(count_suffix_line(&report), "0 ");
    }
}
