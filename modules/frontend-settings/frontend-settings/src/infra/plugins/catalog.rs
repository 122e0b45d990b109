//! Plugin catalog built from `plugin.json` manifests found on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use async_trait::async_trait;
use frontend_settings_sdk::models::{
    DataSourcePluginMeta, DataSourceTypes, EnabledPlugins, OrgId, PanelPluginMeta, PluginInfo,
};
use walkdir::WalkDir;

use super::manifest::{PluginKind, PluginManifest};
use crate::domain::plugins::PluginRegistry;

const MANIFEST_FILE: &str = "plugin.json";

/// Every data-source and panel plugin known to the process.
///
/// Populated once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PluginCatalog {
    data_sources: BTreeMap<String, DataSourcePluginMeta>,
    panels: BTreeMap<String, PanelPluginMeta>,
}

impl Default for PluginCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_data_source(id: &str, name: &str, mixed: bool) -> DataSourcePluginMeta {
    DataSourcePluginMeta {
        id: id.to_owned(),
        name: name.to_owned(),
        module: format!("app/plugins/datasource/{id}/module"),
        base_url: format!("public/app/plugins/datasource/{id}"),
        info: PluginInfo::default(),
        enabled: true,
        built_in: true,
        mixed,
        metrics: true,
        annotations: !mixed,
    }
}

impl PluginCatalog {
    /// Catalog holding only the built-in pseudo data sources.
    #[must_use]
    pub fn builtin() -> Self {
        let mut data_sources = BTreeMap::new();
        for meta in [
            builtin_data_source(DataSourceTypes::GRAFANA, "Grafana", false),
            builtin_data_source(DataSourceTypes::MIXED, "Mixed datasource", true),
        ] {
            data_sources.insert(meta.id.clone(), meta);
        }

        Self {
            data_sources,
            panels: BTreeMap::new(),
        }
    }

    /// Scan the given directories for plugin manifests.
    ///
    /// Missing directories and unreadable or malformed manifests are logged
    /// and skipped.
    #[must_use]
    pub fn load(dirs: &[PathBuf]) -> Self {
        let mut catalog = Self::builtin();

        for dir in dirs {
            if !dir.is_dir() {
                tracing::info!(dir = %dir.display(), "Plugin directory not found, skipping");
                continue;
            }

            for entry in WalkDir::new(dir)
                .follow_links(true)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file() && e.file_name() == MANIFEST_FILE)
            {
                if let Err(e) = catalog.register_file(entry.path()) {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %e,
                        "Failed to load plugin manifest"
                    );
                }
            }
        }

        tracing::info!(
            data_sources = catalog.data_sources.len(),
            panels = catalog.panels.len(),
            "Plugin catalog loaded"
        );
        catalog
    }

    fn register_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let manifest: PluginManifest = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        self.register(manifest);
        Ok(())
    }

    /// Add a manifest; a later manifest with the same id replaces the earlier one.
    pub fn register(&mut self, manifest: PluginManifest) {
        match manifest.kind {
            PluginKind::Datasource => {
                let meta = manifest.into_data_source_meta();
                tracing::debug!(plugin = %meta.id, "Registered data source plugin");
                self.data_sources.insert(meta.id.clone(), meta);
            }
            PluginKind::Panel => {
                let meta = manifest.into_panel_meta();
                tracing::debug!(plugin = %meta.id, "Registered panel plugin");
                self.panels.insert(meta.id.clone(), meta);
            }
            PluginKind::App => {
                tracing::debug!(plugin = %manifest.id, "Ignoring app plugin manifest");
            }
        }
    }
}

#[async_trait]
impl PluginRegistry for PluginCatalog {
    async fn enabled_plugins(&self, _org_id: OrgId) -> anyhow::Result<EnabledPlugins> {
        Ok(EnabledPlugins {
            data_sources: self
                .data_sources
                .iter()
                .filter(|(_, meta)| meta.enabled)
                .map(|(id, meta)| (id.clone(), meta.clone()))
                .collect(),
            panels: self.panels.clone(),
        })
    }

    fn data_source(&self, id: &str) -> Option<DataSourcePluginMeta> {
        self.data_sources.get(id).cloned()
    }
}
