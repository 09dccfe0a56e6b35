use super::value_objects::ProductId;

/// A product as stored, always carrying its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// The five writable fields of a product, already validated.
///
/// Produced only by [`crate::domain::product::validator::validate`] on the
/// write path, so a draft handed to a store is always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
        }
    }

    /// Writable fields of this product, without the id.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            in_stock: self.in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_id_and_fields_when_built_from_repository() {
        let draft = ProductDraft {
            name: "Laptop".to_string(),
            description: "16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        };

        let product = Product::from_repository(ProductId::new("p-1"), draft.clone());

        assert_eq!(product.id.as_str(), "p-1");
        assert_eq!(product.to_draft(), draft);
    }
}
