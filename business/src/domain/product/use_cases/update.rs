use async_trait::async_trait;
use serde_json::Value;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductParams {
    pub id: ProductId,
    /// Full replacement body; validated before the store is touched.
    pub payload: Value,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
