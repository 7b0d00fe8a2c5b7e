//! Resolver interface for turning wiki media filenames into direct URLs.
//!
//! The pipeline only depends on [`UrlResolver`] and does not know how the
//! lookup is performed. [`ScriptResolver`] delegates to the upstream helper
//! script; tests substitute in-memory stubs.

mod batch;
mod error;
mod script;

pub use batch::{batches, resolve_batch};
pub use error::ResolveError;
pub use script::ScriptResolver;

/// Upper bound on filenames per lookup call (wiki API limit).
pub const MAX_BATCH_SIZE: usize = 50;

/// Batch lookup of wiki filenames.
///
/// The returned vector has the same length and order as `wiki_filenames`;
/// `None` means the file could not be resolved.
pub trait UrlResolver {
    fn resolve(&self, wiki_filenames: &[String]) -> Result<Vec<Option<String>>, ResolveError>;
}

impl<R: UrlResolver + ?Sized> UrlResolver for &R {
    fn resolve(&self, wiki_filenames: &[String]) -> Result<Vec<Option<String>>, ResolveError> {
        (**self).resolve(wiki_filenames)
    }
}

impl<R: UrlResolver + ?Sized> UrlResolver for Box<R> {
    fn resolve(&self, wiki_filenames: &[String]) -> Result<Vec<Option<String>>, ResolveError> {
        (**self).resolve(wiki_filenames)
    }
}
