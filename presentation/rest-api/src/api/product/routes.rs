use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use poem::{Body, Request};

use business::domain::product::query::ListProductsQuery;
use business::domain::product::stats::CategoryCounts;
use business::domain::product::use_cases::category_stats::CountByCategoryUseCase;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductListResponse, ProductResponse};
use crate::api::product::payload::read_write_body;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    count_by_category_use_case: Arc<dyn CountByCategoryUseCase>,
}

impl ProductApi {
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        count_by_category_use_case: Arc<dyn CountByCategoryUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            count_by_category_use_case,
        }
    }
}

/// Product catalogue API
///
/// Create, read, update, delete and aggregate catalogue products.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Filters by exact category and by name substring (both case-insensitive)
    /// and returns one page of results. Malformed `page`/`limit` values fall
    /// back to 1 and 10.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        category: Query<Option<String>>,
        search: Query<Option<String>>,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
    ) -> ListProductsResponse {
        let query = ListProductsQuery {
            category: category.0,
            search: search.0,
            page: page.0,
            limit: limit.0,
        };

        match self.list_use_case.execute(query).await {
            Ok(page) => ListProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Count products per category
    ///
    /// Returns an object mapping each category to its product count.
    #[oai(
        path = "/api/products/stats/category-count",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn count_by_category(&self) -> CountByCategoryResponse {
        match self.count_by_category_use_case.execute().await {
            Ok(counts) => CountByCategoryResponse::Ok(Json(counts)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CountByCategoryResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::from(id.0),
            })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Requires `name`, `description`, `price`, `category` and `inStock`.
    /// Unknown keys are ignored. The body must be sent as `application/json`;
    /// anything else is treated as an empty product and rejected with 400.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, req: &Request, body: Body) -> CreateProductResponse {
        let payload = read_write_body(req.content_type(), body).await;

        match self
            .create_use_case
            .execute(CreateProductParams { payload })
            .await
        {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a product
    ///
    /// Overwrites every writable field; the body is validated like a create.
    #[oai(path = "/api/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        req: &Request,
        body: Body,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: ProductId::from(id.0),
            payload: read_write_body(req.content_type(), body).await,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::from(id.0),
            })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CountByCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryCounts>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
