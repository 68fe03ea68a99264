// File: services/salonbook_backend/src/main.rs
use axum::{routing::get, Router};
use salonbook_common::logging;
use salonbook_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

mod app_state;
#[cfg(feature = "openapi")]
mod doc;
mod handlers;
mod routes;

#[tokio::main]
async fn main() {
    logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Salonbook API!" }))
        .merge(routes::routes(config.clone()));

    #[allow(unused_mut)]
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        info!("Adding Swagger UI at /api/docs");
        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", doc::ApiDoc::openapi());
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
