use business::domain::errors::RepositoryError;
use business::domain::product::model::ProductDraft;
use business::domain::product::repository::ProductRepository;

use crate::product::repository::ProductRepositoryMongo;

/// Starter catalogue loaded by the `seed` binary and by in-memory runs.
pub fn sample_catalogue() -> Vec<ProductDraft> {
    vec![
        ProductDraft {
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        ProductDraft {
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        ProductDraft {
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}

/// Replaces the whole collection with the sample catalogue.
pub async fn seed(repository: &ProductRepositoryMongo) -> Result<usize, RepositoryError> {
    let removed = repository.clear().await?;
    tracing::info!(removed, "Cleared existing products");

    let catalogue = sample_catalogue();
    for draft in &catalogue {
        repository.insert(draft).await?;
    }
    tracing::info!(inserted = catalogue.len(), "Inserted sample products");
    Ok(catalogue.len())
}
