use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::ListProductsQuery;

/// One page of products plus the metadata echoed in the list envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub products: Vec<Product>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, query: ListProductsQuery) -> Result<ProductPage, ProductError>;
}
