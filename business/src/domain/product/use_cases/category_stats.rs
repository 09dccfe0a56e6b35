use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::stats::CategoryCounts;

#[async_trait]
pub trait CountByCategoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<CategoryCounts, ProductError>;
}
