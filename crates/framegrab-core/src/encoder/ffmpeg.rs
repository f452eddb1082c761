//! `ffmpeg` command-line backend.

use super::{EncodeError, EncodeRequest, Encoder};
use crate::config::EncoderConfig;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Runs the configured ffmpeg binary once per request.
#[derive(Debug, Clone, Default)]
pub struct FfmpegEncoder {
    config: EncoderConfig,
}

impl FfmpegEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Full argument list (without the program name) for `request`.
    pub fn args(&self, request: &EncodeRequest) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "-y".into(),
            "-hide_banner".into(),
            "-loglevel".into(),
            "error".into(),
            "-framerate".into(),
            request.framerate.to_string(),
            "-pattern_type".into(),
            "glob".into(),
            "-i".into(),
            request.frames_glob.to_string_lossy().into_owned(),
            "-c:v".into(),
            self.config.codec.clone(),
            "-pix_fmt".into(),
            self.config.pixel_format.clone(),
        ];
        if let Some(filter) = request.hold_filter() {
            args.push("-vf".into());
            args.push(filter);
        }
        args.push(request.output.to_string_lossy().into_owned());
        args
    }
}

impl Encoder for FfmpegEncoder {
    fn encode(&self, request: &EncodeRequest) -> Result<PathBuf, EncodeError> {
        let program = &self.config.program;
        let args = self.args(request);
        tracing::debug!("running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| EncodeError::Spawn {
                program: program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if output.status.success() {
            if !stderr.is_empty() {
                tracing::debug!("{} stderr: {}", program, stderr);
            }
            tracing::info!(output = %request.output.display(), "encoded animation");
            return Ok(request.output.clone());
        }

        tracing::warn!(
            "{} exited with {:?}: {}",
            program,
            output.status.code(),
            stderr
        );
        if self.config.check_exit_status {
            Err(EncodeError::Exit {
                program: program.clone(),
                code: output.status.code(),
            })
        } else {
            Ok(request.output.clone())
        }
    }
}
