//! `herofaces update` – sync, renew, then download faces.

use anyhow::Result;
use herofaces_core::config::HeroFacesConfig;

use super::{run_faces, run_renew, run_sync};

pub fn run_update(cfg: &HeroFacesConfig) -> Result<()> {
    run_sync(cfg)?;
    run_renew(cfg)?;
    run_faces(cfg)
}
