//! Frame-sequence to video encoding.
//!
//! [`FfmpegEncoder`] shells out to an `ffmpeg` binary. The argument list is
//! built by [`FfmpegEncoder::args`] so it can be checked without running
//! anything. Tests and alternative backends implement [`Encoder`].

mod error;
mod ffmpeg;

pub use error::EncodeError;
pub use ffmpeg::FfmpegEncoder;

use std::path::PathBuf;

/// One encode: which frames, how fast, where to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRequest {
    /// Glob matching the input frames, e.g. `/data/anim/*.jpg`. Frames are
    /// read in lexicographic order.
    pub frames_glob: PathBuf,
    /// Input frame rate.
    pub framerate: u32,
    /// Seconds to hold the final frame; 0 disables the hold.
    pub hold_last_frame_secs: u32,
    /// Output file; overwritten if it exists.
    pub output: PathBuf,
}

impl EncodeRequest {
    /// Video filter that clones the last frame, if a hold was requested.
    pub fn hold_filter(&self) -> Option<String> {
        (self.hold_last_frame_secs > 0).then(|| {
            format!(
                "tpad=stop_mode=clone:stop_duration={}",
                self.hold_last_frame_secs
            )
        })
    }
}

/// Something that can turn a frame sequence into a video file.
pub trait Encoder {
    /// Encodes `request`, returning the output path on success.
    fn encode(&self, request: &EncodeRequest) -> Result<PathBuf, EncodeError>;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(&self, request: &EncodeRequest) -> Result<PathBuf, EncodeError> {
        (**self).encode(request)
    }
}
