use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::stats::{CategoryCounts, into_category_counts};
use crate::domain::product::use_cases::category_stats::CountByCategoryUseCase;

pub struct CountByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CountByCategoryUseCase for CountByCategoryUseCaseImpl {
    async fn execute(&self) -> Result<CategoryCounts, ProductError> {
        self.logger.info("Counting products by category");
        let groups = self.repository.count_by_category().await?;
        let counts = into_category_counts(groups);
        self.logger
            .info(&format!("Found {} categories", counts.len()));
        Ok(counts)
    }
}
