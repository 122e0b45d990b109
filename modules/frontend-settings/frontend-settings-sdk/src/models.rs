//! Public models for the frontend-settings module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the frontend-settings module, its collaborators (data-source
//! storage, plugin registry, update checker) and its consumers.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

/// Organization identifier. `OrgId::NONE` (zero) means "not attached to an organization".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OrgId(pub i64);

impl OrgId {
    pub const NONE: Self = Self(0);

    #[must_use]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of the caller, as resolved by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    pub org_id: OrgId,
    pub user_id: i64,
    pub login: String,
    pub is_signed_in: bool,
    pub is_grafana_admin: bool,
}

impl SessionContext {
    /// Context of an unauthenticated caller with no organization.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// How the browser reaches a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSourceAccess {
    /// Requests go through the server-side proxy.
    Proxy,
    /// The browser talks to the data source directly.
    Direct,
}

impl DataSourceAccess {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Proxy => "proxy",
            Self::Direct => "direct",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "proxy" => Some(Self::Proxy),
            "direct" => Some(Self::Direct),
            _ => None,
        }
    }
}

/// Well-known data-source type tags that get type-specific fields.
pub struct DataSourceTypes;

impl DataSourceTypes {
    pub const INFLUXDB_08: &'static str = "influxdb_08";
    pub const INFLUXDB: &'static str = "influxdb";
    pub const ELASTICSEARCH: &'static str = "elasticsearch";
    pub const PROMETHEUS: &'static str = "prometheus";
    pub const GRAFANA: &'static str = "grafana";
    pub const MIXED: &'static str = "mixed";
}

/// A persisted data-source definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSourceRecord {
    pub id: i64,
    pub org_id: OrgId,
    pub version: i32,
    pub name: String,
    pub ds_type: String,
    pub access: DataSourceAccess,
    pub url: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub basic_auth: bool,
    pub basic_auth_user: String,
    pub basic_auth_password: String,
    pub with_credentials: bool,
    pub is_default: bool,
    pub json_data: Option<serde_json::Value>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginAuthor {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginLogos {
    pub small: String,
    pub large: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginScreenshot {
    pub name: String,
    pub path: String,
}

/// Descriptive info shipped with every plugin manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginInfo {
    pub author: PluginAuthor,
    pub description: String,
    pub links: Vec<PluginLink>,
    pub logos: PluginLogos,
    pub screenshots: Vec<PluginScreenshot>,
    pub version: String,
    pub updated: String,
}

/// Registry metadata of a data-source plugin.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataSourcePluginMeta {
    pub id: String,
    pub name: String,
    pub module: String,
    pub base_url: String,
    pub info: PluginInfo,
    pub enabled: bool,
    pub built_in: bool,
    pub mixed: bool,
    pub metrics: bool,
    pub annotations: bool,
}

/// Registry metadata of a panel plugin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelPluginMeta {
    pub id: String,
    pub name: String,
    pub module: String,
    pub base_url: String,
    pub info: PluginInfo,
    pub hide_from_list: bool,
}

/// Plugins enabled for one organization, keyed by plugin id.
#[derive(Debug, Clone, Default)]
pub struct EnabledPlugins {
    pub data_sources: BTreeMap<String, DataSourcePluginMeta>,
    pub panels: BTreeMap<String, PanelPluginMeta>,
}

/// Latest-version knowledge published by the update checker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateState {
    pub latest_version: String,
    pub has_update: bool,
}

/// Per-datasource entry of the frontend settings document.
///
/// Every optional field is present only when the assembly rules set it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSourceDescriptor {
    pub ds_type: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub meta: DataSourcePluginMeta,
    pub json_data: Option<serde_json::Value>,
    pub basic_auth: Option<String>,
    pub with_credentials: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub index: Option<String>,
    pub direct_url: Option<String>,
}

/// Per-panel entry of the frontend settings document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDescriptor {
    pub id: String,
    pub name: String,
    pub module: String,
    pub base_url: String,
    pub info: PluginInfo,
    pub hide_from_list: bool,
    pub sort: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub buildstamp: i64,
    pub latest_version: String,
    pub has_update: bool,
    pub env: String,
}

/// The assembled configuration document a web client loads on startup.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendSettings {
    pub default_datasource: String,
    pub datasources: BTreeMap<String, DataSourceDescriptor>,
    pub panels: BTreeMap<String, PanelDescriptor>,
    pub app_sub_url: String,
    pub allow_org_create: bool,
    pub auth_proxy_enabled: bool,
    pub ldap_enabled: bool,
    pub alerting_enabled: bool,
    pub build_info: BuildInfo,
}
