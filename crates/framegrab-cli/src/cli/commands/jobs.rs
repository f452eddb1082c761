//! `framegrab jobs` – list configured jobs.

use framegrab_core::config::FramegrabConfig;

pub fn run_jobs(cfg: &FramegrabConfig) {
    if cfg.jobs.is_empty() {
        println!("No jobs configured.");
        return;
    }
    println!("{:<16} {:<5} {:<5} {:<24} {}", "NAME", "FPS", "HOLD", "DESTINATION", "URL");
    for j in &cfg.jobs {
        println!(
            "{:<16} {:<5} {:<5} {:<24} {}",
            j.name,
            j.framerate,
            j.hold_last_frame_secs,
            j.destination.join(&j.output_filename).display().to_string(),
            j.base_url
        );
    }
}
