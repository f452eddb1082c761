//! Runs core operations on the blocking pool with backends built from config.

use anyhow::Result;
use framegrab_core::animator::{self, Animation, AnimationJob};
use framegrab_core::config::FramegrabConfig;
use framegrab_core::encoder::FfmpegEncoder;
use framegrab_core::fetcher::{self, FetchReport};
use framegrab_core::retrieve::CurlRetriever;
use std::path::PathBuf;

fn retriever(cfg: &FramegrabConfig) -> CurlRetriever {
    CurlRetriever::new(cfg.curl_options())
}

/// Runs a fetch without blocking the async runtime.
pub async fn fetch(
    cfg: &FramegrabConfig,
    base_url: String,
    destination: PathBuf,
) -> Result<FetchReport> {
    let retriever = retriever(cfg);
    let report = tokio::task::spawn_blocking(move || {
        fetcher::fetch(&retriever, &base_url, &destination)
    })
    .await?;
    Ok(report)
}

/// Runs fetch + encode for one job without blocking the async runtime.
pub async fn animate(cfg: &FramegrabConfig, job: AnimationJob) -> Result<Animation> {
    let retriever = retriever(cfg);
    let encoder = FfmpegEncoder::new(cfg.encoder.clone());
    let animation =
        tokio::task::spawn_blocking(move || animator::animate(&job, &retriever, &encoder))
            .await?;
    Ok(animation)
}

/// One-line human summary of an animation run.
pub fn describe(animation: &Animation) -> String {
    let r = &animation.report;
    let counts = format!(
        "{} image(s): {} new, {} already present, {} failed",
        r.count(),
        r.downloaded(),
        r.already_present(),
        r.failed()
    );
    match &animation.output {
        Some(path) => format!("{} -> {}", counts, path.display()),
        None if !r.listing_retrieved => format!("listing unavailable at {}", r.base_url),
        None => format!("{}; no animation produced", counts),
    }
}
