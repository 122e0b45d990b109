//! `FrontendSettingsApi` trait definition.
//!
//! This trait defines the public API for the frontend-settings module.

use async_trait::async_trait;

use crate::errors::FrontendSettingsError;
use crate::models::{FrontendSettings, SessionContext};

/// Public API trait for the frontend-settings module.
///
/// The document is built fresh on every call from the caller's organization
/// scope; nothing is cached between calls.
#[async_trait]
pub trait FrontendSettingsApi: Send + Sync {
    /// Assemble the frontend settings document for the given session.
    ///
    /// # Errors
    ///
    /// Fails when data sources or enabled plugins cannot be loaded.
    async fn get_frontend_settings(
        &self,
        ctx: &SessionContext,
    ) -> Result<FrontendSettings, FrontendSettingsError>;
}
