//! `herofaces plan` – show pending face downloads.

use anyhow::Result;
use herofaces_core::config::HeroFacesConfig;
use herofaces_core::pipeline;

pub fn run_plan(cfg: &HeroFacesConfig) -> Result<()> {
    let (_, jobs) = pipeline::plan_faces(cfg)?;
    if jobs.is_empty() {
        println!("Nothing to download.");
        return Ok(());
    }
    println!("{:<24} {:<40} {}", "ID", "LOCAL", "WIKI");
    for j in &jobs {
        println!("{:<24} {:<40} {}", j.item_id, j.local_filename, j.wiki_filename);
    }
    println!("{} pending download(s) into {}", jobs.len(), cfg.faces_dir().display());
    Ok(())
}
