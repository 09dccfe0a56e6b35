use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validator::validate;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        // Body is checked before the id, so a bad body on a missing id is a 400.
        let draft = validate(&params.payload).inspect_err(|e| {
            if let ProductError::InvalidData { field } = e {
                self.logger.warn(&format!(
                    "Rejected update for {}: invalid '{}'",
                    params.id, field
                ));
            }
        })?;

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let product = self
            .repository
            .replace(&params.id, &draft)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
