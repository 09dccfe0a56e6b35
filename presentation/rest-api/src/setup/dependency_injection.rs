use std::sync::Arc;

use logger::TracingLogger;

use business::application::product::category_stats::CountByCategoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::repository::ProductRepository;

use crate::api::product::routes::ProductApi;
use crate::api::root::routes::RootApi;

pub struct DependencyContainer {
    pub root_api: RootApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        let logger = Arc::new(TracingLogger);

        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let count_by_category_use_case = Arc::new(CountByCategoryUseCaseImpl { repository, logger });

        let product_api = ProductApi::new(
            list_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            count_by_category_use_case,
        );

        Self {
            root_api: RootApi,
            product_api,
        }
    }
}
