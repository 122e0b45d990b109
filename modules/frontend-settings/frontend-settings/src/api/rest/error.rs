use axum::http::StatusCode;

use super::problem::Problem;
use crate::domain::error::DomainError;

pub const SETTINGS_UNAVAILABLE_CODE: &str = "FRONTEND_SETTINGS_UNAVAILABLE";
pub const SETTINGS_UNAVAILABLE_DETAIL: &str = "Failed to get frontend settings";

/// Map a domain error to an RFC 9457 Problem.
///
/// Every failure collapses into the same client-facing 400; the cause is only logged.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    match e {
        DomainError::DataSourceQuery(cause) => {
            tracing::error!(error = ?cause, "Failed to query data sources");
        }
        DomainError::PluginLookup(cause) => {
            tracing::error!(error = ?cause, "Failed to list enabled plugins");
        }
    }

    let problem = Problem::new(
        StatusCode::BAD_REQUEST,
        "Bad Request",
        SETTINGS_UNAVAILABLE_DETAIL,
    )
    .with_code(SETTINGS_UNAVAILABLE_CODE)
    .with_instance(instance);

    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, super::routes::SETTINGS_PATH)
    }
}
