//! Orchestration: load data, plan jobs, resolve in batches, download.
//!
//! Only the initial data load can abort a run. Below that, failures are
//! per job (see [`JobOutcome`]) or per batch (resolver failure), and the run
//! always continues to the end.

mod report;

pub use report::CategoryReport;

use anyhow::{Context, Result};

use crate::config::HeroFacesConfig;
use crate::dataset::{Dataset, Localization};
use crate::fetch::Fetcher;
use crate::names::display_name;
use crate::planner::{plan_face_jobs, DownloadJob};
use crate::resolver::{batches, resolve_batch, UrlResolver};
use crate::worker::{process_job, Category, JobOutcome};

/// Runs every job of `category` through resolve → download, in order.
///
/// `batch_size` is clamped to the resolver limit. A batch whose resolution
/// fails marks each of its jobs `Failed` and the next batch proceeds.
pub fn run_category<R, F>(
    category: &Category,
    jobs: Vec<DownloadJob>,
    resolver: &R,
    fetcher: &F,
    names: &Localization,
    batch_size: usize,
) -> CategoryReport
where
    R: UrlResolver + ?Sized,
    F: Fetcher + ?Sized,
{
    let mut report = CategoryReport::new(&category.name);
    if jobs.is_empty() {
        tracing::info!("{}: up to date.", category.name);
        return report;
    }

    tracing::info!("Downloading {} ({} items)...", category.name, jobs.len());

    for batch in batches(&jobs, batch_size) {
        let wiki_filenames: Vec<String> = batch.iter().map(|j| j.wiki_filename.clone()).collect();

        let urls = match resolve_batch(resolver, &wiki_filenames) {
            Ok(urls) => urls,
            Err(e) => {
                tracing::error!(
                    "{}: could not resolve batch of {} starting at '{}': {}",
                    category.name,
                    batch.len(),
                    wiki_filenames[0],
                    e
                );
                for job in batch {
                    report.push(
                        job.clone(),
                        JobOutcome::Failed {
                            reason: format!("resolve: {e}"),
                        },
                    );
                }
                continue;
            }
        };

        for (job, url) in batch.iter().zip(urls) {
            let name = display_name(&job.item_id, names);
            let outcome = process_job(category, fetcher, job, url.as_deref(), &name);
            report.push(job.clone(), outcome);
        }
    }

    tracing::info!(
        "{}: {} saved, {} not found, {} failed",
        category.name,
        report.saved(),
        report.not_found(),
        report.failed()
    );
    report
}

/// Loads the dataset under `cfg.data_dir` and plans the face jobs without downloading.
pub fn plan_faces(cfg: &HeroFacesConfig) -> Result<(Dataset, Vec<DownloadJob>)> {
    let dataset = Dataset::load(&cfg.data_dir, &cfg.language)
        .context("failed to load required JSON data files")?;
    if dataset.names.is_empty() {
        tracing::warn!("no {} names loaded; files will use raw unit ids", cfg.language);
    }
    let jobs = plan_face_jobs(&dataset.units, &dataset.names, &cfg.faces_dir());
    Ok((dataset, jobs))
}

/// Full face run: load, plan, resolve, download. Errors only on data load.
pub fn run_faces<R, F>(cfg: &HeroFacesConfig, resolver: &R, fetcher: &F) -> Result<CategoryReport>
where
    R: UrlResolver + ?Sized,
    F: Fetcher + ?Sized,
{
    tracing::info!("Initializing unit face downloader...");
    let (dataset, jobs) = plan_faces(cfg).map_err(|e| {
        tracing::error!("{:#}", e);
        e
    })?;

    let category = Category::faces(cfg.faces_dir());
    let report = run_category(
        &category,
        jobs,
        resolver,
        fetcher,
        &dataset.names,
        cfg.effective_batch_size(),
    );
    tracing::info!("Face download tasks completed.");
    Ok(report)
}
