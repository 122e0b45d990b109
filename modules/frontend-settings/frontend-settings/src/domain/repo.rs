use async_trait::async_trait;
use frontend_settings_sdk::models::{DataSourceRecord, OrgId};

#[async_trait]
pub trait DataSourceRepository: Send + Sync {
    /// All data sources of the organization, ordered by id ascending.
    ///
    /// # Errors
    ///
    /// Returns the storage error unchanged.
    async fn list_by_org(&self, org_id: OrgId) -> anyhow::Result<Vec<DataSourceRecord>>;
}
