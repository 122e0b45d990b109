use async_trait::async_trait;
use frontend_settings_sdk::models::{DataSourcePluginMeta, EnabledPlugins, OrgId};

/// Read-only view of the plugin registry.
#[async_trait]
pub trait PluginRegistry: Send + Sync {
    /// Data-source and panel plugins enabled for the organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    async fn enabled_plugins(&self, org_id: OrgId) -> anyhow::Result<EnabledPlugins>;

    /// Metadata of any registered data-source plugin, regardless of enablement.
    fn data_source(&self, id: &str) -> Option<DataSourcePluginMeta>;
}
