use frontend_settings_sdk::FrontendSettingsError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Data source query failed: {0}")]
    DataSourceQuery(#[source] anyhow::Error),

    #[error("Plugin lookup failed: {0}")]
    PluginLookup(#[source] anyhow::Error),
}

impl From<DomainError> for FrontendSettingsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DataSourceQuery(_) => Self::data_source_query(),
            DomainError::PluginLookup(_) => Self::plugin_lookup(),
        }
    }
}
