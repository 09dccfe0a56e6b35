use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::query::{ListProductsQuery, translate};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsUseCase, ProductPage};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, query: ListProductsQuery) -> Result<ProductPage, ProductError> {
        let translated = translate(&query);
        let pagination = translated.pagination;
        self.logger.debug(&format!(
            "Listing products: filter={:?} page={} limit={}",
            translated.filter, pagination.page, pagination.limit
        ));

        let total = self.repository.count(&translated.filter).await?;
        let products = self
            .repository
            .find(&translated.filter, pagination.window())
            .await?;

        self.logger.info(&format!(
            "Found {} of {} matching products",
            products.len(),
            total
        ));
        Ok(ProductPage {
            page: pagination.page,
            limit: pagination.limit,
            total,
            products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::logger::silent_logger;
    use crate::domain::product::model::{Product, ProductDraft};
    use crate::domain::product::query::{PageWindow, TextMatch};
    use crate::domain::product::repository::MockProductRepository;
    use crate::domain::product::value_objects::ProductId;

    fn make_product(id: &str, name: &str) -> Product {
        Product::from_repository(
            ProductId::new(id),
            ProductDraft {
                name: name.to_string(),
                description: String::new(),
                price: 10.0,
                category: "electronics".to_string(),
                in_stock: true,
            },
        )
    }

    #[tokio::test]
    async fn should_return_envelope_with_defaults_when_no_params() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_count()
            .withf(|filter| filter.is_empty())
            .returning(|_| Ok(2));
        mock_repo
            .expect_find()
            .withf(|filter, window| {
                filter.is_empty() && *window == PageWindow { skip: 0, limit: 10 }
            })
            .returning(|_, _| Ok(vec![make_product("1", "Laptop"), make_product("2", "Phone")]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let page = use_case.execute(ListProductsQuery::default()).await.unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 2);
        assert_eq!(page.products.len(), 2);
    }

    #[tokio::test]
    async fn should_pass_translated_filter_and_window_to_store() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_count()
            .withf(|filter| {
                filter.category == Some(TextMatch::Exact("Electronics".to_string()))
                    && filter.name == Some(TextMatch::Contains("top".to_string()))
            })
            .returning(|_| Ok(7));
        mock_repo
            .expect_find()
            .withf(|_, window| *window == PageWindow { skip: 5, limit: 5 })
            .returning(|_, _| Ok(vec![make_product("6", "Desktop")]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let page = use_case
            .execute(ListProductsQuery {
                category: Some("Electronics".to_string()),
                search: Some("top".to_string()),
                page: Some("2".to_string()),
                limit: Some("5".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 5);
        assert_eq!(page.total, 7);
        assert_eq!(page.products[0].name, "Desktop");
    }

    #[tokio::test]
    async fn should_echo_clamped_pagination() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_count().returning(|_| Ok(0));
        mock_repo
            .expect_find()
            .withf(|_, window| *window == PageWindow { skip: 0, limit: 1 })
            .returning(|_, _| Ok(vec![]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let page = use_case
            .execute(ListProductsQuery {
                page: Some("-3".to_string()),
                limit: Some("0".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!((page.page, page.limit), (1, 1));
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_count()
            .returning(|_| Err(RepositoryError::DatabaseError));
        mock_repo.expect_find().never();

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: silent_logger(),
        };

        let result = use_case.execute(ListProductsQuery::default()).await;

        assert!(matches!(result, Err(ProductError::Repository(_))));
    }
}
