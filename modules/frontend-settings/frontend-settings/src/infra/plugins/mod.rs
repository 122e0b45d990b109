pub mod catalog;
pub mod manifest;

pub use catalog::PluginCatalog;
