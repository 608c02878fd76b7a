#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error("cache region {0:?} is not registered")]
    UnknownRegion(String),
    #[error("cache region {0:?} is already registered")]
    DuplicateRegion(String),
    #[error("cache store is unavailable for region {region:?}: {reason}")]
    Unavailable { region: String, reason: String },
}

impl CacheError {
    /// Returns the region the error refers to.
    pub fn region(&self) -> &str {
        match self {
            CacheError::UnknownRegion(region) | CacheError::DuplicateRegion(region) => region,
            CacheError::Unavailable { region, .. } => region,
        }
    }
}
