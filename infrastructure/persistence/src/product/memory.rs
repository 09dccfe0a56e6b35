use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::query::{PageWindow, ProductFilter};
use business::domain::product::repository::ProductRepository;
use business::domain::product::stats::{CategoryCount, group_by_category};
use business::domain::product::value_objects::ProductId;

use super::document::parse_object_id;

/// In-process product store for tests and local runs without MongoDB.
///
/// Ids are ObjectIds like the real store, and the map is ordered by them, so
/// listing order and malformed-id handling match `ProductRepositoryMongo`.
#[derive(Clone, Default)]
pub struct ProductRepositoryInMemory {
    products: Arc<RwLock<BTreeMap<ObjectId, ProductDraft>>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `drafts`, inserted in order.
    pub fn with_products(drafts: impl IntoIterator<Item = ProductDraft>) -> Self {
        let products = drafts
            .into_iter()
            .map(|draft| (ObjectId::new(), draft))
            .collect();
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

fn to_product(id: &ObjectId, draft: &ProductDraft) -> Product {
    Product::from_repository(ProductId::new(id.to_hex()), draft.clone())
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn find(
        &self,
        filter: &ProductFilter,
        window: PageWindow,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        let skip = usize::try_from(window.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);

        Ok(products
            .iter()
            .map(|(id, draft)| to_product(id, draft))
            .filter(|p| filter.matches(p))
            .skip(skip)
            .take(limit)
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError> {
        let products = self.products.read().await;
        let matching = products
            .iter()
            .filter(|(id, draft)| filter.matches(&to_product(id, draft)))
            .count();
        Ok(matching as u64)
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let oid = parse_object_id(id)?;
        let products = self.products.read().await;
        products
            .get(&oid)
            .map(|draft| to_product(&oid, draft))
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let oid = ObjectId::new();
        self.products.write().await.insert(oid, draft.clone());
        tracing::info!(product_id = %oid, "Product inserted in memory");
        Ok(to_product(&oid, draft))
    }

    async fn replace(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, RepositoryError> {
        let oid = parse_object_id(id)?;
        let mut products = self.products.write().await;
        let slot = products.get_mut(&oid).ok_or(RepositoryError::NotFound)?;
        *slot = draft.clone();
        Ok(to_product(&oid, draft))
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let oid = parse_object_id(id)?;
        self.products
            .write()
            .await
            .remove(&oid)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, RepositoryError> {
        let products = self.products.read().await;
        Ok(group_by_category(
            products.values().map(|draft| draft.category.as_str()),
        ))
    }
}
