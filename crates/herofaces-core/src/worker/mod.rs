//! Download/transcode worker: one resolved job in, one [`JobOutcome`] out.
//!
//! Nothing here returns an error or panics past the job boundary; every
//! failure becomes a `JobOutcome` so the batch keeps going and the caller can
//! inspect what happened.

mod outcome;

pub use outcome::JobOutcome;

use std::path::PathBuf;

use crate::fetch::Fetcher;
use crate::planner::DownloadJob;
use crate::transcode::{self, ImageTransform, SaveParams, FACE_SAVE_PARAMS};

/// An asset category: where its files go and how they are re-encoded.
pub struct Category {
    pub name: String,
    pub output_dir: PathBuf,
    pub transform: Option<Box<dyn ImageTransform>>,
    pub save_params: SaveParams,
}

impl Category {
    /// Unit faces: original resolution, lossless WebP.
    pub fn faces(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: "Unit Faces".to_string(),
            output_dir: output_dir.into(),
            transform: None,
            save_params: FACE_SAVE_PARAMS,
        }
    }

    pub fn with_transform(mut self, transform: impl ImageTransform + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }
}

impl std::fmt::Debug for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Category")
            .field("name", &self.name)
            .field("output_dir", &self.output_dir)
            .field("transform", &self.transform.is_some())
            .field("save_params", &self.save_params)
            .finish()
    }
}

/// A resolved URL is usable only if it is non-empty and starts with `http`.
pub fn usable_url(url: Option<&str>) -> Option<&str> {
    url.filter(|u| u.starts_with("http"))
}

/// Fetches, transcodes and saves one job. `display_name` is only used in logs.
pub fn process_job<F: Fetcher + ?Sized>(
    category: &Category,
    fetcher: &F,
    job: &DownloadJob,
    url: Option<&str>,
    display_name: &str,
) -> JobOutcome {
    let Some(url) = usable_url(url) else {
        tracing::warn!(
            "{}: could not find URL for '{}'",
            display_name,
            job.wiki_filename
        );
        return JobOutcome::NotFound;
    };

    match fetch_and_save(category, fetcher, job, url) {
        Ok(path) => {
            tracing::info!("{}: downloaded.", display_name);
            JobOutcome::Saved { path }
        }
        Err(reason) => {
            tracing::error!(
                item_id = %job.item_id,
                local = %job.local_filename,
                wiki = %job.wiki_filename,
                url = %url,
                "{}: failed to download: {}",
                display_name,
                reason
            );
            JobOutcome::Failed { reason }
        }
    }
}

fn fetch_and_save<F: Fetcher + ?Sized>(
    category: &Category,
    fetcher: &F,
    job: &DownloadJob,
    url: &str,
) -> Result<PathBuf, String> {
    let bytes = fetcher.get(url).map_err(|e| format!("fetch: {e}"))?;
    let webp = transcode::transcode(&bytes, category.transform.as_deref(), &category.save_params)
        .map_err(|e| e.to_string())?;
    transcode::save(&category.output_dir, &job.local_filename, &webp)
        .map_err(|e| e.to_string())
}
