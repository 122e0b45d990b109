use std::collections::BTreeMap;

use frontend_settings_sdk::models::{
    BuildInfo, DataSourceDescriptor, DataSourcePluginMeta, FrontendSettings, PanelDescriptor,
    PluginInfo,
};
use serde::Serialize;
use utoipa::ToSchema;

const DATASOURCE_PLUGIN_TYPE: &str = "datasource";

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PluginAuthorDto {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PluginLinkDto {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PluginLogosDto {
    pub small: String,
    pub large: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PluginScreenshotDto {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PluginInfoDto {
    pub author: PluginAuthorDto,
    pub description: String,
    pub links: Vec<PluginLinkDto>,
    pub logos: PluginLogosDto,
    pub screenshots: Vec<PluginScreenshotDto>,
    pub version: String,
    pub updated: String,
}

/// Plugin metadata attached to every data-source entry.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceMetaDto {
    #[serde(rename = "type")]
    pub plugin_type: String,
    pub name: String,
    pub id: String,
    pub info: PluginInfoDto,
    pub module: String,
    pub base_url: String,
    #[serde(skip_serializing_if = "is_false")]
    pub built_in: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub mixed: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub metrics: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub annotations: bool,
}

/// One entry of `datasources`. Absent fields are not emitted.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceDto {
    #[serde(rename = "type")]
    pub ds_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub meta: DataSourceMetaDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub json_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_credentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PanelDto {
    pub module: String,
    pub base_url: String,
    pub name: String,
    pub id: String,
    pub info: PluginInfoDto,
    pub hide_from_list: bool,
    pub sort: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfoDto {
    pub version: String,
    pub commit: String,
    pub buildstamp: i64,
    pub latest_version: String,
    pub has_update: bool,
    pub env: String,
}

/// Bootstrap document returned by `GET /api/frontend/settings`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrontendSettingsDto {
    pub default_datasource: String,
    pub datasources: BTreeMap<String, DataSourceDto>,
    pub panels: BTreeMap<String, PanelDto>,
    pub app_sub_url: String,
    pub allow_org_create: bool,
    pub auth_proxy_enabled: bool,
    pub ldap_enabled: bool,
    pub alerting_enabled: bool,
    pub build_info: BuildInfoDto,
}

impl From<PluginInfo> for PluginInfoDto {
    fn from(info: PluginInfo) -> Self {
        Self {
            author: PluginAuthorDto {
                name: info.author.name,
                url: info.author.url,
            },
            description: info.description,
            links: info
                .links
                .into_iter()
                .map(|l| PluginLinkDto {
                    name: l.name,
                    url: l.url,
                })
                .collect(),
            logos: PluginLogosDto {
                small: info.logos.small,
                large: info.logos.large,
            },
            screenshots: info
                .screenshots
                .into_iter()
                .map(|s| PluginScreenshotDto {
                    name: s.name,
                    path: s.path,
                })
                .collect(),
            version: info.version,
            updated: info.updated,
        }
    }
}

impl From<DataSourcePluginMeta> for DataSourceMetaDto {
    fn from(meta: DataSourcePluginMeta) -> Self {
        Self {
            plugin_type: DATASOURCE_PLUGIN_TYPE.to_owned(),
            name: meta.name,
            id: meta.id,
            info: meta.info.into(),
            module: meta.module,
            base_url: meta.base_url,
            built_in: meta.built_in,
            mixed: meta.mixed,
            metrics: meta.metrics,
            annotations: meta.annotations,
        }
    }
}

impl From<DataSourceDescriptor> for DataSourceDto {
    fn from(ds: DataSourceDescriptor) -> Self {
        Self {
            ds_type: ds.ds_type,
            name: ds.name,
            url: ds.url,
            meta: ds.meta.into(),
            json_data: ds.json_data,
            basic_auth: ds.basic_auth,
            with_credentials: ds.with_credentials,
            username: ds.username,
            password: ds.password,
            database: ds.database,
            index: ds.index,
            direct_url: ds.direct_url,
        }
    }
}

impl From<PanelDescriptor> for PanelDto {
    fn from(panel: PanelDescriptor) -> Self {
        Self {
            module: panel.module,
            base_url: panel.base_url,
            name: panel.name,
            id: panel.id,
            info: panel.info.into(),
            hide_from_list: panel.hide_from_list,
            sort: panel.sort,
        }
    }
}

impl From<BuildInfo> for BuildInfoDto {
    fn from(build: BuildInfo) -> Self {
        Self {
            version: build.version,
            commit: build.commit,
            buildstamp: build.buildstamp,
            latest_version: build.latest_version,
            has_update: build.has_update,
            env: build.env,
        }
    }
}

impl From<FrontendSettings> for FrontendSettingsDto {
    fn from(settings: FrontendSettings) -> Self {
        Self {
            default_datasource: settings.default_datasource,
            datasources: settings
                .datasources
                .into_iter()
                .map(|(name, ds)| (name, ds.into()))
                .collect(),
            panels: settings
                .panels
                .into_iter()
                .map(|(id, panel)| (id, panel.into()))
                .collect(),
            app_sub_url: settings.app_sub_url,
            allow_org_create: settings.allow_org_create,
            auth_proxy_enabled: settings.auth_proxy_enabled,
            ldap_enabled: settings.ldap_enabled,
            alerting_enabled: settings.alerting_enabled,
            build_info: settings.build_info.into(),
        }
    }
}
