use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use frontend_settings::FrontendSettingsConfig;
use frontend_settings_sdk::{OrgId, SessionContext};
use serde::{Deserialize, Serialize};

/// Environment variable prefix; `__` separates nested keys.
pub const ENV_PREFIX: &str = "APP__";

/// Effective server configuration.
///
/// Layers: defaults, YAML file, `APP__*` environment, CLI overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub plugins: PluginsConfig,
    pub session: SessionConfig,
    pub updates: UpdatesConfig,
    pub frontend: FrontendSettingsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_owned(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://frontend-settings.db?mode=rwc".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Directories scanned recursively for `plugin.json` manifests.
    pub dirs: Vec<PathBuf>,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            dirs: vec![PathBuf::from("plugins")],
        }
    }
}

/// Identity attached to every request. The server runs single-organization
/// without a login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub org_id: i64,
    pub user_id: i64,
    pub login: String,
    pub signed_in: bool,
    pub grafana_admin: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            org_id: 1,
            user_id: 1,
            login: "admin".to_owned(),
            signed_in: true,
            grafana_admin: false,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn to_context(&self) -> SessionContext {
        SessionContext {
            org_id: OrgId(self.org_id),
            user_id: self.user_id,
            login: self.login.clone(),
            is_signed_in: self.signed_in,
            is_grafana_admin: self.grafana_admin,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatesConfig {
    /// Latest released version known at startup; empty means unknown.
    pub latest_version: String,
}

impl AppConfig {
    /// Layered provider stack without CLI overrides.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns an error if a layer cannot be parsed into the config shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            self.server.port = port;
        }
        match verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the listen address or database DSN is unusable.
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.database.dsn.trim().is_empty() {
            anyhow::bail!("database.dsn must not be empty");
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if `server.bind_addr` is not an IP address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid server.bind_addr '{}'", self.server.bind_addr))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration")
    }
}
