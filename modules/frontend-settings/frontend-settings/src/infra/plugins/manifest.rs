//! On-disk `plugin.json` manifest format.

use frontend_settings_sdk::models::{
    DataSourcePluginMeta, PanelPluginMeta, PluginAuthor, PluginInfo, PluginLink, PluginLogos,
    PluginScreenshot,
};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginKind {
    Datasource,
    Panel,
    App,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    #[serde(rename = "type")]
    pub kind: PluginKind,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub info: ManifestInfo,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub built_in: bool,
    #[serde(default)]
    pub mixed: bool,
    #[serde(default)]
    pub metrics: bool,
    #[serde(default)]
    pub annotations: bool,
    #[serde(default)]
    pub hide_from_list: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestInfo {
    pub author: ManifestLink,
    pub description: String,
    pub links: Vec<ManifestLink>,
    pub logos: ManifestLogos,
    pub screenshots: Vec<ManifestScreenshot>,
    pub version: String,
    pub updated: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestLogos {
    pub small: String,
    pub large: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestScreenshot {
    pub name: String,
    pub path: String,
}

impl From<ManifestInfo> for PluginInfo {
    fn from(info: ManifestInfo) -> Self {
        Self {
            author: PluginAuthor {
                name: info.author.name,
                url: info.author.url,
            },
            description: info.description,
            links: info
                .links
                .into_iter()
                .map(|l| PluginLink {
                    name: l.name,
                    url: l.url,
                })
                .collect(),
            logos: PluginLogos {
                small: info.logos.small,
                large: info.logos.large,
            },
            screenshots: info
                .screenshots
                .into_iter()
                .map(|s| PluginScreenshot {
                    name: s.name,
                    path: s.path,
                })
                .collect(),
            version: info.version,
            updated: info.updated,
        }
    }
}

impl PluginManifest {
    fn module_or_default(&self) -> String {
        self.module
            .clone()
            .unwrap_or_else(|| format!("plugins/{}/module", self.id))
    }

    fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("public/plugins/{}", self.id))
    }

    #[must_use]
    pub fn into_data_source_meta(self) -> DataSourcePluginMeta {
        DataSourcePluginMeta {
            module: self.module_or_default(),
            base_url: self.base_url_or_default(),
            id: self.id,
            name: self.name,
            info: self.info.into(),
            enabled: self.enabled,
            built_in: self.built_in,
            mixed: self.mixed,
            metrics: self.metrics,
            annotations: self.annotations,
        }
    }

    #[must_use]
    pub fn into_panel_meta(self) -> PanelPluginMeta {
        PanelPluginMeta {
            module: self.module_or_default(),
            base_url: self.base_url_or_default(),
            id: self.id,
            name: self.name,
            info: self.info.into(),
            hide_from_list: self.hide_from_list,
        }
    }
}
