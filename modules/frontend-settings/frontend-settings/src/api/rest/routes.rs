use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers, problem};
use crate::domain::service::Service;

pub const SETTINGS_PATH: &str = "/api/frontend/settings";
pub const OPENAPI_PATH: &str = "/api/frontend/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Frontend settings", description = "Client bootstrap document"),
    paths(handlers::get_frontend_settings),
    components(schemas(
        dto::FrontendSettingsDto,
        dto::DataSourceDto,
        dto::DataSourceMetaDto,
        dto::PanelDto,
        dto::PluginInfoDto,
        dto::BuildInfoDto,
        problem::Problem,
    )),
    tags((name = "Frontend", description = "Frontend bootstrap"))
)]
pub struct FrontendSettingsApiDoc;

/// Mount the module's routes onto `router`.
///
/// The caller must provide an `Extension<SessionContext>` layer.
#[must_use]
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let routes = Router::new()
        .route(SETTINGS_PATH, get(handlers::get_frontend_settings))
        .route(OPENAPI_PATH, get(handlers::openapi_json))
        .layer(Extension(service));

    router.merge(routes)
}
