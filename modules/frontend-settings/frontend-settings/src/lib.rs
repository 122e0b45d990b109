//! Frontend Settings Module Implementation
//!
//! Assembles the bootstrap document a web client loads on startup.
//! The public API is defined in `frontend-settings-sdk` and re-exported here.

pub use frontend_settings_sdk::{
    FrontendSettings, FrontendSettingsApi, FrontendSettingsError, SessionContext,
};

pub mod module;
pub use module::{FrontendSettingsModule, ModuleCtx};

pub mod local_client;

pub mod config;
pub use config::{BuildConfig, FrontendSettingsConfig};

pub use infra::updates::UpdateStateCell;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
