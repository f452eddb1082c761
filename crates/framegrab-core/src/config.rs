use crate::animator::AnimationJob;
use crate::retrieve::CurlOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// External encoder settings (optional `[encoder]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Encoder binary; looked up on `PATH` unless it contains a `/`.
    pub program: String,
    /// Video codec passed as `-c:v`.
    pub codec: String,
    /// Pixel format passed as `-pix_fmt`.
    pub pixel_format: String,
    /// Treat a non-zero encoder exit as failure. Off by default: the
    /// expected output path is reported whenever the encoder could be started.
    pub check_exit_status: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            codec: "libx264".to_string(),
            pixel_format: "yuv420p".to_string(),
            check_exit_status: false,
        }
    }
}

fn default_output_filename() -> String {
    "animation.mp4".to_string()
}

fn default_framerate() -> u32 {
    30
}

/// A named animation source (`[[jobs]]` entry in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    /// Directory-listing URL to scrape.
    pub base_url: String,
    /// Where frames, the listing snapshot and the animation are written.
    /// Relative paths are resolved against the working directory.
    pub destination: PathBuf,
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
    #[serde(default = "default_framerate")]
    pub framerate: u32,
    /// Seconds to hold the last frame (0 = no hold).
    #[serde(default)]
    pub hold_last_frame_secs: u32,
}

impl JobConfig {
    pub fn to_job(&self) -> AnimationJob {
        AnimationJob::new(&self.base_url, &self.destination, &self.output_filename)
            .with_framerate(self.framerate)
            .with_hold_last_frame(self.hold_last_frame_secs)
    }
}

/// Global configuration loaded from `~/.config/framegrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramegrabConfig {
    /// Optional `User-Agent` for all HTTP requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Connect timeout in seconds for HTTP requests.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub encoder: EncoderConfig,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

fn default_connect_timeout_secs() -> u64 {
    30
}

impl Default for FramegrabConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            encoder: EncoderConfig::default(),
            jobs: default_jobs(),
        }
    }
}

/// NOAA SWPC animation feeds; a useful starting point for a fresh config.
fn default_jobs() -> Vec<JobConfig> {
    const SWPC: &str = "https://services.swpc.noaa.gov/images/animations";
    let job = |name: &str, path: &str, dest: &str, fps: u32, hold: u32| JobConfig {
        name: name.to_string(),
        base_url: format!("{}/{}/", SWPC, path),
        destination: PathBuf::from(dest),
        output_filename: default_output_filename(),
        framerate: fps,
        hold_last_frame_secs: hold,
    };
    vec![
        job("lasco-c3", "lasco-c3/lasco", "animation/lasco-c3", 30, 0),
        job("electrons", "ctipe/tec", "animation/electrons", 30, 3),
        job("sun-304", "suvi/secondary/304", "animation/sun", 30, 0),
        job("aurora-north", "ovation/north", "animation/aurora", 60, 3),
    ]
}

impl FramegrabConfig {
    /// Curl options derived from the HTTP settings.
    pub fn curl_options(&self) -> CurlOptions {
        CurlOptions {
            user_agent: self.user_agent.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    pub fn job(&self, name: &str) -> Option<&JobConfig> {
        self.jobs.iter().find(|j| j.name == name)
    }

    /// Resolves `names` to jobs, in the order given; all jobs if `names` is empty.
    pub fn select_jobs(&self, names: &[String]) -> Result<Vec<&JobConfig>> {
        if names.is_empty() {
            return Ok(self.jobs.iter().collect());
        }
        names
            .iter()
            .map(|n| {
                self.job(n)
                    .with_context(|| format!("no job named {:?} in config", n))
            })
            .collect()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("framegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FramegrabConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FramegrabConfig> {
    if !path.exists() {
        let default_cfg = FramegrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FramegrabConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FramegrabConfig::default();
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert!(cfg.user_agent.is_none());
        assert_eq!(cfg.encoder.program, "ffmpeg");
        assert_eq!(cfg.encoder.codec, "libx264");
        assert_eq!(cfg.encoder.pixel_format, "yuv420p");
        assert!(!cfg.encoder.check_exit_status);
        assert_eq!(cfg.jobs.len(), 4);
        let aurora = cfg.job("aurora-north").unwrap();
        assert_eq!(
            aurora.base_url,
            "https://services.swpc.noaa.gov/images/animations/ovation/north/"
        );
        assert_eq!(aurora.framerate, 60);
        assert_eq!(aurora.hold_last_frame_secs, 3);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FramegrabConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FramegrabConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.encoder, cfg.encoder);
        assert_eq!(parsed.jobs, cfg.jobs);
    }

    #[test]
    fn config_toml_minimal_job_gets_defaults() {
        let toml = r#"
            [[jobs]]
            name = "sun"
            base_url = "https://example.com/sun/"
            destination = "out/sun"
        "#;
        let cfg: FramegrabConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert_eq!(cfg.encoder, EncoderConfig::default());
        let job = &cfg.jobs[0];
        assert_eq!(job.output_filename, "animation.mp4");
        assert_eq!(job.framerate, 30);
        assert_eq!(job.hold_last_frame_secs, 0);
    }

    #[test]
    fn config_toml_encoder_section() {
        let toml = r#"
            user_agent = "framegrab/0.1"
            connect_timeout_secs = 5

            [encoder]
            program = "/opt/ffmpeg/bin/ffmpeg"
            check_exit_status = true
        "#;
        let cfg: FramegrabConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.user_agent.as_deref(), Some("framegrab/0.1"));
        assert_eq!(cfg.curl_options().connect_timeout, Duration::from_secs(5));
        assert_eq!(cfg.encoder.program, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(cfg.encoder.codec, "libx264");
        assert!(cfg.encoder.check_exit_status);
        assert!(cfg.jobs.is_empty());
    }

    #[test]
    fn select_jobs_by_name() {
        let cfg = FramegrabConfig::default();
        assert_eq!(cfg.select_jobs(&[]).unwrap().len(), 4);
        let picked = cfg
            .select_jobs(&["sun-304".to_string(), "lasco-c3".to_string()])
            .unwrap();
        assert_eq!(picked[0].name, "sun-304");
        assert_eq!(picked[1].name, "lasco-c3");
        assert!(cfg.select_jobs(&["nope".to_string()]).is_err());
    }

    #[test]
    fn job_config_to_job() {
        let cfg = FramegrabConfig::default();
        let job = cfg.job("electrons").unwrap().to_job();
        assert_eq!(job.framerate, 30);
        assert_eq!(job.hold_last_frame_secs, 3);
        assert_eq!(job.destination, PathBuf::from("animation/electrons"));
        assert_eq!(job.output_filename, "animation.mp4");
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let first = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        let second = load_or_init_at(&path).unwrap();
        assert_eq!(first.jobs, second.jobs);
    }

    #[test]
    fn load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "jobs = 3").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
