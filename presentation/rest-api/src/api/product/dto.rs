use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::use_cases::list::ProductPage;

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            in_stock: product.in_stock,
        }
    }
}

/// Paginated listing envelope. `page` and `limit` are the effective values
/// after defaults were applied; `total` ignores pagination.
#[derive(Object, Debug)]
pub struct ProductListResponse {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub products: Vec<ProductResponse>,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            page: page.page,
            limit: page.limit,
            total: page.total,
            products: page.products.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::ProductDraft;
    use business::domain::product::value_objects::ProductId;
    use poem_openapi::types::ToJSON;

    #[test]
    fn should_serialize_in_stock_in_camel_case() {
        let product = Product::from_repository(
            ProductId::new("65a1b2c3d4e5f6a7b8c9d0e1"),
            ProductDraft {
                name: "Kettle".to_string(),
                description: "Steel".to_string(),
                price: 25.5,
                category: "kitchen".to_string(),
                in_stock: false,
            },
        );

        let json = ProductResponse::from(product).to_json().unwrap();

        assert_eq!(json["id"], "65a1b2c3d4e5f6a7b8c9d0e1");
        assert_eq!(json["inStock"], false);
        assert_eq!(json["price"], 25.5);
        assert!(json.get("in_stock").is_none());
    }
}
