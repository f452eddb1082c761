//! `framegrab animate` – fetch images and encode them into a video.

use anyhow::Result;
use framegrab_core::animator::AnimationJob;
use framegrab_core::config::FramegrabConfig;
use framegrab_core::url_model;
use std::path::PathBuf;

use super::session;

/// Arguments of the `animate` subcommand.
#[derive(Debug, Clone)]
pub struct AnimateArgs {
    pub base_url: String,
    pub destination: PathBuf,
    pub output: String,
    pub framerate: u32,
    pub hold_last_frame: u32,
}

impl AnimateArgs {
    fn into_job(self) -> AnimationJob {
        AnimationJob::new(self.base_url, self.destination, self.output)
            .with_framerate(self.framerate)
            .with_hold_last_frame(self.hold_last_frame)
    }
}

pub async fn run_animate(cfg: &FramegrabConfig, args: AnimateArgs) -> Result<()> {
    url_model::validate_base_url(&args.base_url)?;
    let animation = session::animate(cfg, args.into_job()).await?;
    match &animation.output {
        Some(path) => println!("{}", path.display()),
        None => println!("No animation produced ({}).", session::describe(&animation)),
    }
    Ok(())
}
