//! `herofaces renew` – run the upstream renew-data script.

use anyhow::Result;
use herofaces_core::config::HeroFacesConfig;
use herofaces_core::renew::{self, RenewOutcome};

pub fn run_renew(cfg: &HeroFacesConfig) -> Result<()> {
    match renew::run_renew_script(&cfg.scripts)? {
        RenewOutcome::ScriptMissing => {
            println!(
                "Renew script not found: {}",
                cfg.scripts.dir.join(&cfg.scripts.renew_script).display()
            );
        }
        RenewOutcome::Finished(status) => println!("Renew script finished: {status}"),
    }
    Ok(())
}
