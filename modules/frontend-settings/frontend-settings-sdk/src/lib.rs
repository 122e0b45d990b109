//! Frontend Settings SDK
//!
//! Contract of the frontend-settings module: the `FrontendSettingsApi` trait,
//! the models exchanged with its collaborators, and the error type.

pub mod api;
pub mod errors;
pub mod models;

pub use api::FrontendSettingsApi;
pub use errors::FrontendSettingsError;
pub use models::{
    BuildInfo, DataSourceAccess, DataSourceDescriptor, DataSourcePluginMeta, DataSourceRecord,
    DataSourceTypes, EnabledPlugins, FrontendSettings, OrgId, PanelDescriptor, PanelPluginMeta,
    PluginAuthor, PluginInfo, PluginLink, PluginLogos, PluginScreenshot, SessionContext,
    UpdateState,
};
