//! Error types for the frontend-settings SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FrontendSettingsError {
    #[error("Failed to query data sources")]
    DataSourceQuery,

    #[error("Failed to look up enabled plugins")]
    PluginLookup,

    #[error("Internal error")]
    Internal,
}

impl FrontendSettingsError {
    #[must_use]
    pub fn data_source_query() -> Self {
        Self::DataSourceQuery
    }

    #[must_use]
    pub fn plugin_lookup() -> Self {
        Self::PluginLookup
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
