//! Fetch-then-encode: turns a listing of frames into one video.

use crate::encoder::{EncodeRequest, Encoder};
use crate::fetcher::{self, FetchReport};
use crate::retrieve::Retriever;
use std::path::{Path, PathBuf};

/// Frame rate used when none is given.
pub const DEFAULT_FRAMERATE: u32 = 30;

/// Everything needed for one animation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationJob {
    pub base_url: String,
    pub destination: PathBuf,
    /// File name of the animation inside `destination`.
    pub output_filename: String,
    pub framerate: u32,
    /// Seconds to hold the final frame; 0 disables the hold.
    pub hold_last_frame_secs: u32,
}

impl AnimationJob {
    pub fn new(
        base_url: impl Into<String>,
        destination: impl AsRef<Path>,
        output_filename: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            destination: destination.as_ref().to_path_buf(),
            output_filename: output_filename.into(),
            framerate: DEFAULT_FRAMERATE,
            hold_last_frame_secs: 0,
        }
    }

    pub fn with_framerate(mut self, framerate: u32) -> Self {
        self.framerate = framerate;
        self
    }

    pub fn with_hold_last_frame(mut self, secs: u32) -> Self {
        self.hold_last_frame_secs = secs;
        self
    }
}

/// Outcome of [`animate`]: the fetch report plus the animation path, if one was produced.
#[derive(Debug)]
pub struct Animation {
    pub report: FetchReport,
    pub output: Option<PathBuf>,
}

/// Builds the encode request for a finished fetch.
///
/// Frames are every file in the destination ending in the reported suffix.
pub fn encode_request(job: &AnimationJob, report: &FetchReport) -> EncodeRequest {
    let dir = &report.destination;
    EncodeRequest {
        frames_glob: dir.join(format!("*{}", report.suffix())),
        framerate: job.framerate,
        hold_last_frame_secs: job.hold_last_frame_secs,
        output: dir.join(&job.output_filename),
    }
}

/// Fetches the job's frames and, if more than one is available, encodes them.
///
/// Never fails: a missing listing, too few frames or an encoder failure all
/// yield `output: None`.
pub fn animate<R, E>(job: &AnimationJob, retriever: &R, encoder: &E) -> Animation
where
    R: Retriever + ?Sized,
    E: Encoder + ?Sized,
{
    let report = fetcher::fetch(retriever, &job.base_url, &job.destination);
    let count = report.count();
    if count <= 1 {
        tracing::info!(
            base_url = %report.base_url,
            count,
            "not enough frames for an animation"
        );
        return Animation {
            report,
            output: None,
        };
    }

    let request = encode_request(job, &report);
    let output = match encoder.encode(&request) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!("encoding {} failed: {}", request.output.display(), e);
            None
        }
    };
    Animation { report, output }
}
