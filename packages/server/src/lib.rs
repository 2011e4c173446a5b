pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use std::time::Duration;

use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rental Catalog API",
        version = "1.0.0",
        description = "Users, places, amenities and reviews of a vacation rental catalog"
    ),
    tags(
        (name = "Users", description = "User registration and profiles"),
        (name = "Amenities", description = "Amenity CRUD operations"),
        (name = "Places", description = "Rental listings with owner, amenities and reviews"),
        (name = "Reviews", description = "Reviews left by users on places"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    let router = router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api));

    match cors {
        Some(layer) => router.layer(layer),
        None => router,
    }
}

fn cors_layer(config: &CorsConfig) -> Option<CorsLayer> {
    if config.allow_origins.is_empty() {
        return None;
    }

    let origin = if config.allow_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow any origin");
        AllowOrigin::any()
    } else {
        let origins: Vec<_> = config
            .allow_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        tracing::info!(origins = ?config.allow_origins, "CORS enabled");
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(Duration::from_secs(config.max_age)),
    )
}
