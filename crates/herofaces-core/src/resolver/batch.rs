//! Chunking of job lists into resolver-sized batches.

use super::{ResolveError, UrlResolver, MAX_BATCH_SIZE};

/// Consecutive chunks of at most `size` items (clamped to `1..=MAX_BATCH_SIZE`).
/// A list of length L yields `ceil(L / size)` chunks.
pub fn batches<T>(items: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(size.clamp(1, MAX_BATCH_SIZE))
}

/// Resolves one batch and checks the length contract.
pub fn resolve_batch<R: UrlResolver + ?Sized>(
    resolver: &R,
    wiki_filenames: &[String],
) -> Result<Vec<Option<String>>, ResolveError> {
    if wiki_filenames.len() > MAX_BATCH_SIZE {
        return Err(ResolveError::BatchTooLarge {
            size: wiki_filenames.len(),
            max: MAX_BATCH_SIZE,
        });
    }
    let urls = resolver.resolve(wiki_filenames)?;
    if urls.len() != wiki_filenames.len() {
        return Err(ResolveError::LengthMismatch {
            expected: wiki_filenames.len(),
            actual: urls.len(),
        });
    }
    Ok(urls)
}
