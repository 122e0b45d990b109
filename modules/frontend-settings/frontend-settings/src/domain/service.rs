use std::collections::BTreeMap;
use std::sync::Arc;

use frontend_settings_sdk::models::{
    BuildInfo, DataSourceRecord, DataSourceTypes, FrontendSettings, SessionContext,
};

use super::datasource::{
    GRAFANA_DATASOURCE_NAME, MIXED_DATASOURCE_NAME, build_descriptor, grafana_descriptor,
    mixed_descriptor,
};
use super::error::DomainError;
use super::panels::build_panel_descriptor;
use super::plugins::PluginRegistry;
use super::repo::DataSourceRepository;
use super::updates::UpdateSource;
use crate::config::FrontendSettingsConfig;

/// Assembles the frontend settings document.
///
/// Holds no per-request state; every call reads its collaborators and builds
/// a fresh document.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn DataSourceRepository>,
    plugins: Arc<dyn PluginRegistry>,
    updates: Arc<dyn UpdateSource>,
    config: Arc<FrontendSettingsConfig>,
}

impl Service {
    #[must_use]
    pub fn new(
        repo: Arc<dyn DataSourceRepository>,
        plugins: Arc<dyn PluginRegistry>,
        updates: Arc<dyn UpdateSource>,
        config: Arc<FrontendSettingsConfig>,
    ) -> Self {
        Self {
            repo,
            plugins,
            updates,
            config,
        }
    }

    /// # Errors
    ///
    /// Returns `DomainError::DataSourceQuery` when the data sources cannot be
    /// loaded and `DomainError::PluginLookup` when the enabled plugins cannot
    /// be listed. Records whose type has no registered plugin are skipped.
    pub async fn get_frontend_settings(
        &self,
        ctx: &SessionContext,
    ) -> Result<FrontendSettings, DomainError> {
        let records = self.collect_data_sources(ctx).await?;

        let enabled = self
            .plugins
            .enabled_plugins(ctx.org_id)
            .await
            .map_err(DomainError::PluginLookup)?;

        let mut datasources = BTreeMap::new();
        let mut default_datasource = None;

        for record in &records {
            // TODO: report skipped data sources through the admin stats endpoint
            // so that records pointing at uninstalled plugins are visible.
            let Some(meta) = enabled.data_sources.get(&record.ds_type) else {
                tracing::error!(
                    data_source = %record.name,
                    ds_type = %record.ds_type,
                    org_id = %ctx.org_id,
                    "Could not find plugin definition for data source"
                );
                continue;
            };

            if record.is_default {
                default_datasource = Some(record.name.clone());
            }

            datasources.insert(record.name.clone(), build_descriptor(record, meta.clone()));
        }

        let grafana_meta = self
            .plugins
            .data_source(DataSourceTypes::GRAFANA)
            .unwrap_or_default();
        datasources.insert(
            GRAFANA_DATASOURCE_NAME.to_owned(),
            grafana_descriptor(grafana_meta),
        );

        let mixed_meta = self
            .plugins
            .data_source(DataSourceTypes::MIXED)
            .unwrap_or_default();
        datasources.insert(MIXED_DATASOURCE_NAME.to_owned(), mixed_descriptor(mixed_meta));

        let panels = enabled
            .panels
            .values()
            .map(|panel| (panel.id.clone(), build_panel_descriptor(panel)))
            .collect();

        let update = self.updates.current();
        let build = &self.config.build;

        Ok(FrontendSettings {
            default_datasource: default_datasource
                .unwrap_or_else(|| GRAFANA_DATASOURCE_NAME.to_owned()),
            datasources,
            panels,
            app_sub_url: self.config.app_sub_url.clone(),
            allow_org_create: (self.config.allow_user_org_create && ctx.is_signed_in)
                || ctx.is_grafana_admin,
            auth_proxy_enabled: self.config.auth_proxy_enabled,
            ldap_enabled: self.config.ldap_enabled,
            alerting_enabled: self.config.alerting_enabled,
            build_info: BuildInfo {
                version: build.version.clone(),
                commit: build.commit.clone(),
                buildstamp: build.buildstamp,
                latest_version: update.latest_version,
                has_update: update.has_update,
                env: build.env.clone(),
            },
        })
    }

    async fn collect_data_sources(
        &self,
        ctx: &SessionContext,
    ) -> Result<Vec<DataSourceRecord>, DomainError> {
        if ctx.org_id.is_none() {
            return Ok(Vec::new());
        }

        self.repo
            .list_by_org(ctx.org_id)
            .await
            .map_err(DomainError::DataSourceQuery)
    }
}
