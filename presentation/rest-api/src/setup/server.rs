use poem::{
    Endpoint, EndpointExt, Response, Route, Server as PoemServer, listener::TcpListener,
};
use poem_openapi::OpenApiService;

use crate::api::access_log::AccessLog;
use crate::api::error::render_error;
use crate::api::security::ApiKeyGate;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Assembles routes and middleware. CORS is layered on by [`Server::run`]
/// so preflight requests never reach the API key gate. The returned endpoint
/// owns everything it needs and borrows neither argument.
pub fn build_app(
    container: DependencyContainer,
    api_key: &str,
    server_url: &str,
) -> impl Endpoint<Output = Response> + use<> {
    let api_service = OpenApiService::new(
        (container.root_api, container.product_api),
        "Products API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .with(ApiKeyGate::new(api_key))
        .with(AccessLog)
        .catch_all_error(render_error)
}

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(
            container,
            &config.security.api_key,
            &format!("http://{}", addr),
        )
        .with(config.cors);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
