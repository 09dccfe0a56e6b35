use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct EndpointIndex {
    pub get_all_products: String,
    pub get_product_by_id: String,
    pub create_product: String,
    pub update_product: String,
    pub delete_product: String,
    pub product_stats: String,
}

#[derive(Object, Debug)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: EndpointIndex,
}

pub struct RootApi;

#[OpenApi]
impl RootApi {
    /// Service index
    ///
    /// Greets the caller and lists the product endpoints.
    #[oai(path = "/", method = "get", tag = "ApiTags::Root")]
    async fn index(&self) -> Json<WelcomeResponse> {
        Json(WelcomeResponse {
            message: "Welcome to the Product API!".to_string(),
            endpoints: EndpointIndex {
                get_all_products: "/api/products".to_string(),
                get_product_by_id: "/api/products/:id".to_string(),
                create_product: "/api/products".to_string(),
                update_product: "/api/products/:id".to_string(),
                delete_product: "/api/products/:id".to_string(),
                product_stats: "/api/products/stats/category-count".to_string(),
            },
        })
    }
}
