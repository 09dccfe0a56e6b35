use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::value_objects::ProductId;

/// Shape of a document in the `products` collection.
///
/// `_id` is left out when writing so the store assigns it on insert and
/// keeps the existing one on replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

impl ProductDocument {
    pub fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            id: None,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            category: draft.category.clone(),
            in_stock: draft.in_stock,
        }
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = self.id.ok_or_else(|| {
            tracing::error!("Stored product document has no _id");
            RepositoryError::DatabaseError
        })?;

        Ok(Product::from_repository(
            ProductId::new(id.to_hex()),
            ProductDraft {
                name: self.name,
                description: self.description,
                price: self.price,
                category: self.category,
                in_stock: self.in_stock,
            },
        ))
    }
}

/// Parses a caller-supplied id. A malformed id is a store error, not a miss.
pub fn parse_object_id(id: &ProductId) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id.as_str()).map_err(|_| {
        tracing::warn!(product_id = %id, "Malformed product id");
        RepositoryError::DatabaseError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson, doc};

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn should_serialize_without_id_and_with_camel_case_stock_flag() {
        let document = bson::to_document(&ProductDocument::from_draft(&draft())).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_bool("inStock").unwrap(), true);
        assert_eq!(document.get_str("category").unwrap(), "electronics");
    }

    #[test]
    fn should_read_integer_prices_written_by_other_clients() {
        let oid = ObjectId::new();
        let stored = doc! {
            "_id": oid,
            "name": "Coffee Maker",
            "description": "Programmable coffee maker with timer",
            "price": Bson::Int32(50),
            "category": "kitchen",
            "inStock": false,
            "__v": 0
        };

        let product = bson::from_document::<ProductDocument>(stored)
            .unwrap()
            .into_domain()
            .unwrap();

        assert_eq!(product.id.as_str(), oid.to_hex());
        assert_eq!(product.price, 50.0);
        assert!(!product.in_stock);
    }

    #[test]
    fn should_treat_missing_id_as_store_error() {
        let result = ProductDocument::from_draft(&draft()).into_domain();

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }

    #[test]
    fn should_reject_malformed_ids() {
        assert!(parse_object_id(&ProductId::new("123")).is_err());
        assert!(parse_object_id(&ProductId::new("64b7f0c2a1b2c3d4e5f60718")).is_ok());
    }
}
