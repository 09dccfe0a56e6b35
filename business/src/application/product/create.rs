use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::validator::validate;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let draft = validate(&params.payload).inspect_err(|e| {
            if let ProductError::InvalidData { field } = e {
                self.logger
                    .warn(&format!("Rejected product body: invalid '{}'", field));
            }
        })?;

        self.logger
            .info(&format!("Creating product: {}", draft.name));

        let product = self.repository.insert(&draft).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
