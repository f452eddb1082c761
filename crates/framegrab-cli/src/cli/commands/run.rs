//! `framegrab run` – run jobs from the config file, one after another.

use anyhow::Result;
use framegrab_core::config::FramegrabConfig;
use framegrab_core::url_model;

use super::session;

pub async fn run_named_jobs(cfg: &FramegrabConfig, names: &[String]) -> Result<()> {
    let jobs = cfg.select_jobs(names)?;
    if jobs.is_empty() {
        println!("No jobs configured.");
        return Ok(());
    }
    for job in &jobs {
        url_model::validate_base_url(&job.base_url)?;
    }

    let mut produced = 0usize;
    for job in jobs {
        tracing::info!(job = %job.name, base_url = %job.base_url, "starting job");
        let animation = session::animate(cfg, job.to_job()).await?;
        if animation.output.is_some() {
            produced += 1;
        }
        println!("[{}] {}", job.name, session::describe(&animation));
    }
    tracing::info!("run produced {} animation(s)", produced);
    Ok(())
}
