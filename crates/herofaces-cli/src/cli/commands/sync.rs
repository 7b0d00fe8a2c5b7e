//! `herofaces sync` – refresh dataset and scripts from upstream.

use anyhow::Result;
use herofaces_core::config::HeroFacesConfig;
use herofaces_core::fetch::CurlFetcher;
use herofaces_core::upstream;

pub fn run_sync(cfg: &HeroFacesConfig) -> Result<()> {
    let fetcher = CurlFetcher::from_config(&cfg.http);
    let report = upstream::sync_upstream(cfg, &fetcher)?;

    println!(
        "Synced {} file(s) from {} into {}",
        report.written.len(),
        cfg.upstream.base_url,
        cfg.data_dir.display()
    );
    for (url, reason) in &report.failed {
        println!("  failed: {url}: {reason}");
    }
    Ok(())
}
