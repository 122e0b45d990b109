pub mod datasource;
pub mod error;
pub mod panels;
pub mod plugins;
pub mod repo;
pub mod service;
pub mod updates;

#[cfg(test)]
mod datasource_test;
