//! Per-category summary of a run.

use crate::planner::DownloadJob;
use crate::worker::JobOutcome;

#[derive(Debug, Clone, Default)]
pub struct CategoryReport {
    pub category: String,
    /// Every planned job with its outcome, in processing order.
    pub outcomes: Vec<(DownloadJob, JobOutcome)>,
}

impl CategoryReport {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, job: DownloadJob, outcome: JobOutcome) {
        self.outcomes.push((job, outcome));
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn saved(&self) -> usize {
        self.count(|o| o.is_saved())
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, JobOutcome::NotFound))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, JobOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&JobOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}
