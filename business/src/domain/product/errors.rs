use super::value_objects::ProductField;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// The write body failed schema validation. `field` is the first
    /// offending key; it is kept for logs and never shown to callers.
    #[error("product.invalid_data")]
    InvalidData { field: ProductField },
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Maps a store miss to `NotFound`, keeping every other failure as a
    /// repository error.
    pub fn from_lookup(err: crate::domain::errors::RepositoryError) -> Self {
        match err {
            crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
