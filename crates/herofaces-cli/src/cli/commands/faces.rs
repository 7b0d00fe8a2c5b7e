//! `herofaces faces` – download missing unit faces.

use anyhow::Result;
use herofaces_core::config::HeroFacesConfig;
use herofaces_core::fetch::CurlFetcher;
use herofaces_core::pipeline;
use herofaces_core::resolver::ScriptResolver;

pub fn run_faces(cfg: &HeroFacesConfig) -> Result<()> {
    let resolver = ScriptResolver::from_config(&cfg.scripts);
    let fetcher = CurlFetcher::from_config(&cfg.http);
    let report = pipeline::run_faces(cfg, &resolver, &fetcher)?;

    if report.is_empty() {
        println!("{}: up to date.", report.category);
    } else {
        println!(
            "{}: {} saved, {} not found, {} failed",
            report.category,
            report.saved(),
            report.not_found(),
            report.failed()
        );
    }
    Ok(())
}
