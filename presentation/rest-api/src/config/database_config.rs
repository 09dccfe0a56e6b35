use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, connect};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryMongo;
use persistence::seed::sample_catalogue;

const DEFAULT_URI: &str = "mongodb://localhost:27017/productsdb";
const MEMORY_SCHEME: &str = "memory://";

/// Which document store backs the product repository.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    Mongo { uri: String },
    /// In-process store preloaded with the sample catalogue.
    InMemory,
}

impl StoreConfig {
    /// Environment variables:
    /// - MONGODB_URI: MongoDB connection string
    ///   (default: "mongodb://localhost:27017/productsdb").
    ///   A value starting with "memory://" selects the in-process store.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let uri = lookup("MONGODB_URI").unwrap_or_else(|| DEFAULT_URI.to_string());
        if uri.starts_with(MEMORY_SCHEME) {
            StoreConfig::InMemory
        } else {
            StoreConfig::Mongo { uri }
        }
    }
}

/// Connects the configured store and hands it back behind the repository port.
///
/// # Errors
/// Returns error if the MongoDB URI is invalid or the server is unreachable
pub async fn init_repository(config: &StoreConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config {
        StoreConfig::Mongo { uri } => {
            let db = connect(&DatabaseConfig::new(uri.clone())).await?;
            Ok(Arc::new(ProductRepositoryMongo::new(&db)))
        }
        StoreConfig::InMemory => {
            tracing::warn!("Using in-memory product store; data is lost on exit");
            Ok(Arc::new(ProductRepositoryInMemory::with_products(
                sample_catalogue(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_mongodb() {
        let config = StoreConfig::from_lookup(|_| None);

        assert_eq!(
            config,
            StoreConfig::Mongo {
                uri: "mongodb://localhost:27017/productsdb".to_string()
            }
        );
    }

    #[test]
    fn should_select_in_memory_store_by_scheme() {
        let config = StoreConfig::from_lookup(|_| Some("memory://".to_string()));

        assert_eq!(config, StoreConfig::InMemory);
    }

    #[tokio::test]
    async fn should_build_seeded_in_memory_repository() {
        use business::domain::product::query::{PageWindow, ProductFilter};

        let repository = init_repository(&StoreConfig::InMemory).await.unwrap();

        let total = repository.count(&ProductFilter::default()).await.unwrap();
        let first = repository
            .find(&ProductFilter::default(), PageWindow { skip: 0, limit: 1 })
            .await
            .unwrap();

        assert_eq!(total, 3);
        assert_eq!(first[0].name, "Laptop");
    }
}
