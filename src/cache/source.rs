/// Error enumeration for authoritative-source failures. These propagate to
/// the caller; cached state is never overwritten on a failed fetch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("list source unavailable: {0}")]
    Unavailable(String),
    #[error("list source returned a malformed payload: {0}")]
    Malformed(String),
}

/// Authoritative fetcher seam, one implementation per tracked list.
///
/// Implementations wrap whatever transport backs the list and block on it;
/// the cache itself stays synchronous and transport-agnostic.
pub trait ListSource<T>: Send + Sync {
    fn fetch(&self) -> Result<Vec<T>, SourceError>;
}

impl<T, S: ListSource<T> + ?Sized> ListSource<T> for std::sync::Arc<S> {
    fn fetch(&self) -> Result<Vec<T>, SourceError> {
        (**self).fetch()
    }
}
