use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
    options::{FindOptions, ReturnDocument},
};
use tracing::instrument;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::query::{PageWindow, ProductFilter, TextMatch};
use business::domain::product::repository::ProductRepository;
use business::domain::product::stats::CategoryCount;
use business::domain::product::value_objects::ProductId;

use super::document::{ProductDocument, parse_object_id};

pub const COLLECTION: &str = "products";

pub struct ProductRepositoryMongo {
    collection: Collection<ProductDocument>,
}

impl ProductRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ProductDocument>(COLLECTION),
        }
    }

    /// Removes every product. Used by the seeder only.
    pub async fn clear(&self) -> Result<u64, RepositoryError> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(database_error)?;
        Ok(result.deleted_count)
    }

    /// Translates the structural filter into a MongoDB query document.
    /// Text predicates become case-insensitive `$regex` clauses; the pattern
    /// is already escaped and anchored by [`TextMatch::pattern`].
    pub(crate) fn build_filter(filter: &ProductFilter) -> Document {
        let mut query = doc! {};
        if let Some(ref category) = filter.category {
            query.insert("category", regex_clause(category));
        }
        if let Some(ref name) = filter.name {
            query.insert("name", regex_clause(name));
        }
        query
    }

    fn id_filter(id: &ProductId) -> Result<Document, RepositoryError> {
        Ok(doc! { "_id": parse_object_id(id)? })
    }
}

fn regex_clause(predicate: &TextMatch) -> Document {
    doc! { "$regex": predicate.pattern(), "$options": "i" }
}

fn database_error(err: mongodb::error::Error) -> RepositoryError {
    tracing::error!(error = %err, "MongoDB operation failed");
    RepositoryError::DatabaseError
}

/// Reads one `$group` output document. A missing or null `_id` means the
/// documents had no category; it is reported under the key `"null"`.
fn category_count(group: &Document) -> Result<CategoryCount, RepositoryError> {
    let category = match group.get("_id") {
        Some(Bson::String(s)) => s.clone(),
        Some(Bson::Null) | None => "null".to_string(),
        Some(other) => other.to_string(),
    };
    let count = match group.get("count") {
        Some(Bson::Int32(n)) => u64::try_from(*n).unwrap_or(0),
        Some(Bson::Int64(n)) => u64::try_from(*n).unwrap_or(0),
        _ => {
            tracing::error!(?group, "Unexpected category group shape");
            return Err(RepositoryError::DatabaseError);
        }
    };
    Ok(CategoryCount { category, count })
}

#[async_trait]
impl ProductRepository for ProductRepositoryMongo {
    #[instrument(skip(self))]
    async fn find(
        &self,
        filter: &ProductFilter,
        window: PageWindow,
    ) -> Result<Vec<Product>, RepositoryError> {
        let options = FindOptions::builder()
            .skip(window.skip)
            .limit(i64::from(window.limit))
            .sort(doc! { "_id": 1 })
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(filter))
            .with_options(options)
            .await
            .map_err(database_error)?;
        let documents: Vec<ProductDocument> =
            cursor.try_collect().await.map_err(database_error)?;

        documents
            .into_iter()
            .map(ProductDocument::into_domain)
            .collect()
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError> {
        self.collection
            .count_documents(Self::build_filter(filter))
            .await
            .map_err(database_error)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.collection
            .find_one(Self::id_filter(id)?)
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }

    #[instrument(skip(self, draft), fields(product_name = %draft.name))]
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let mut document = ProductDocument::from_draft(draft);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(database_error)?;

        document.id = result.inserted_id.as_object_id();
        let product = document.into_domain()?;
        tracing::info!(product_id = %product.id, "Product inserted");
        Ok(product)
    }

    #[instrument(skip(self, draft))]
    async fn replace(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, RepositoryError> {
        self.collection
            .find_one_and_replace(Self::id_filter(id)?, ProductDocument::from_draft(draft))
            .return_document(ReturnDocument::After)
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let result = self
            .collection
            .delete_one(Self::id_filter(id)?)
            .await
            .map_err(database_error)?;

        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound);
        }
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_category(&self) -> Result<Vec<CategoryCount>, RepositoryError> {
        let pipeline = vec![doc! {
            "$group": { "_id": "$category", "count": { "$sum": 1 } }
        }];

        let groups: Vec<Document> = self
            .collection
            .aggregate(pipeline)
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        groups.iter().map(category_count).collect()
    }
}
