//! Mirror of the upstream dataset and helper scripts.
//!
//! Fetches each configured resource relative to the upstream base URL and
//! replaces the local copy under the scripts or data directory. A failed
//! resource is logged and left untouched; the remaining resources are still
//! fetched.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{HeroFacesConfig, UpstreamResource};
use crate::fetch::Fetcher;
use crate::storage;

/// Subdirectories of the data directory the loader reads from.
pub const DATA_SUBDIRS: [&str; 2] = ["content", "languages"];

#[derive(Debug, Default)]
pub struct SyncReport {
    pub written: Vec<PathBuf>,
    /// `(resource url, reason)` for every resource that was not updated.
    pub failed: Vec<(String, String)>,
}

/// Scripts dir, data dir and [`DATA_SUBDIRS`], in creation order.
pub fn folder_structure(cfg: &HeroFacesConfig) -> Vec<PathBuf> {
    let mut dirs = vec![cfg.scripts.dir.clone(), cfg.data_dir.clone()];
    dirs.extend(DATA_SUBDIRS.iter().map(|sub| cfg.data_dir.join(sub)));
    dirs
}

pub fn create_folder_structure(cfg: &HeroFacesConfig) -> Result<()> {
    for path in folder_structure(cfg) {
        tracing::info!("ensuring {} exists...", path.display());
        std::fs::create_dir_all(&path).with_context(|| format!("create dir: {}", path.display()))?;
    }
    Ok(())
}

/// Full URL of a resource. The base must end with `/` to act as a directory.
pub fn resource_url(base: &url::Url, resource: &UpstreamResource) -> Result<url::Url> {
    base.join(&resource.url)
        .with_context(|| format!("invalid resource url: {}", resource.url))
}

/// Local destination of a resource under the configured directories.
pub fn resource_path(cfg: &HeroFacesConfig, resource: &UpstreamResource) -> PathBuf {
    cfg.resource_dir(resource.root).join(&resource.path)
}

/// Syncs every resource in `cfg.upstream`. Errors only on an invalid base URL
/// or when the folder structure cannot be created.
pub fn sync_upstream<F: Fetcher + ?Sized>(cfg: &HeroFacesConfig, fetcher: &F) -> Result<SyncReport> {
    let base = url::Url::parse(&cfg.upstream.base_url)
        .with_context(|| format!("invalid upstream base url: {}", cfg.upstream.base_url))?;
    create_folder_structure(cfg)?;

    let mut report = SyncReport::default();
    for resource in &cfg.upstream.resources {
        let path = resource_path(cfg, resource);
        match sync_one(&base, resource, &path, fetcher) {
            Ok(()) => {
                tracing::info!("successfully wrote {}", path.display());
                report.written.push(path);
            }
            Err(e) => {
                tracing::error!("failed to create/update {}: {:#}", path.display(), e);
                report.failed.push((resource.url.clone(), format!("{e:#}")));
            }
        }
    }
    Ok(report)
}

fn sync_one<F: Fetcher + ?Sized>(
    base: &url::Url,
    resource: &UpstreamResource,
    path: &Path,
    fetcher: &F,
) -> Result<()> {
    let url = resource_url(base, resource)?;
    let body = fetcher
        .get(url.as_str())
        .with_context(|| format!("GET {url}"))?;
    tracing::info!("successfully downloaded {}", resource.url);

    storage::write_atomic(path, &body).with_context(|| format!("write {}", path.display()))
}
