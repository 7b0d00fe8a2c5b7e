//! Request planning: which face assets are missing locally.
//!
//! Produces one [`DownloadJob`] per (unit, variant) whose local file does not
//! exist yet. File existence is the only "already downloaded" marker, so a
//! second run over the same directory plans nothing new.

mod variant;

pub use variant::{FaceVariant, RESPLENDENT_FACE, STANDARD_FACE};

use std::path::Path;

use crate::dataset::{is_enemy_id, Localization, Unit};
use crate::names::{display_name, sanitize_local_name};

/// A pending download: consumed once by the pipeline, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub item_id: String,
    /// Filename under the category output directory.
    pub local_filename: String,
    /// Media filename on the wiki.
    pub wiki_filename: String,
}

/// Localization key whose presence marks a resplendent unit, e.g.
/// `PID_Marth` → `MPID_VOICE_MarthEX01`.
pub fn resplendent_key(unit_id: &str) -> String {
    format!("{}EX01", unit_id.replace("PID", "MPID_VOICE"))
}

/// True when the unit has a resplendent portrait upstream (non-empty voice entry).
pub fn is_resplendent(unit_id: &str, table: &Localization) -> bool {
    table
        .get(&resplendent_key(unit_id))
        .is_some_and(|s| !s.is_empty())
}

/// Variants a unit has art for, in emission order.
pub fn variants_for(unit_id: &str, table: &Localization) -> Vec<FaceVariant> {
    let mut variants = vec![STANDARD_FACE];
    if is_resplendent(unit_id, table) {
        variants.push(RESPLENDENT_FACE);
    }
    variants
}

/// Builds the face download jobs for every unit whose files are missing in `target_dir`.
///
/// Enemies are skipped unless flagged as bosses. Order follows `units`, then
/// variant order (standard before resplendent).
pub fn plan_face_jobs<'a, I>(units: I, table: &Localization, target_dir: &Path) -> Vec<DownloadJob>
where
    I: IntoIterator<Item = (&'a String, &'a Unit)>,
{
    let mut jobs = Vec::new();

    for (unit_id, unit) in units {
        if is_enemy_id(unit_id) && !unit.boss {
            continue;
        }

        let name = display_name(unit_id, table);
        let safe_name = sanitize_local_name(&name);

        for variant in variants_for(unit_id, table) {
            let local_filename = variant.local_filename(&safe_name);
            if target_dir.join(&local_filename).is_file() {
                continue;
            }
            jobs.push(DownloadJob {
                item_id: unit_id.clone(),
                local_filename,
                wiki_filename: variant.wiki_filename(&name),
            });
        }
    }

    tracing::debug!("planned {} face job(s) for {}", jobs.len(), target_dir.display());
    jobs
}
