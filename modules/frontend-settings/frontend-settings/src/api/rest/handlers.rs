use std::sync::Arc;

use axum::{Json, extract::Extension};
use frontend_settings_sdk::models::SessionContext;
use utoipa::OpenApi as _;

use crate::domain::service::Service;

use super::dto::FrontendSettingsDto;
use super::problem::Problem;
use super::routes::FrontendSettingsApiDoc;

/// Assemble the bootstrap document for the caller's organization.
///
/// # Errors
///
/// Any failure is returned as a 400 [`Problem`].
#[utoipa::path(
    get,
    path = "/api/frontend/settings",
    tag = "Frontend",
    operation_id = "frontend-settings.get_frontend_settings",
    responses(
        (status = 200, description = "Settings assembled", body = FrontendSettingsDto),
        (status = 400, description = "Settings could not be assembled", body = Problem,
            content_type = "application/problem+json"),
    )
)]
pub async fn get_frontend_settings(
    Extension(ctx): Extension<SessionContext>,
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<FrontendSettingsDto>, Problem> {
    let settings = svc.get_frontend_settings(&ctx).await?;
    Ok(Json(settings.into()))
}

#[allow(clippy::unused_async)]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(FrontendSettingsApiDoc::openapi())
}
