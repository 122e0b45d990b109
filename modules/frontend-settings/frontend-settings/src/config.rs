use serde::{Deserialize, Serialize};

/// Process-wide flags and build metadata folded into every settings document.
///
/// Resolved once at startup and shared read-only for the lifetime of the process.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendSettingsConfig {
    pub app_sub_url: String,
    pub allow_user_org_create: bool,
    pub auth_proxy_enabled: bool,
    pub ldap_enabled: bool,
    pub alerting_enabled: bool,
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub version: String,
    pub commit: String,
    /// Unix timestamp of the build.
    pub buildstamp: i64,
    pub env: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            commit: option_env!("BUILD_COMMIT").unwrap_or("NA").to_owned(),
            buildstamp: 0,
            env: default_env(),
        }
    }
}

fn default_env() -> String {
    "production".to_owned()
}
