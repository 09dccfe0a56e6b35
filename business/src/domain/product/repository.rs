use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};
use super::query::{PageWindow, ProductFilter};
use super::stats::CategoryCount;
use super::value_objects::ProductId;

/// Store adapter port over the product collection.
///
/// Lookups by id report a missing document as `RepositoryError::NotFound`.
/// Implementations provide their own per-document atomicity; callers never
/// lock around them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(
        &self,
        filter: &ProductFilter,
        window: PageWindow,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Persists a new document and returns it with its assigned id.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    /// Replaces every writable field of an existing document.
    async fn replace(&self, id: &ProductId, draft: &ProductDraft)
    -> Result<Product, RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, RepositoryError>;
}
