use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use axum::Router;
use frontend_settings_sdk::FrontendSettingsApi;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::config::FrontendSettingsConfig;
use crate::domain::service::Service;
use crate::infra::plugins::PluginCatalog;
use crate::infra::storage::SeaOrmDataSourceRepository;
use crate::infra::updates::UpdateStateCell;
use crate::local_client::LocalClient;

/// Everything the module needs from its host at startup.
pub struct ModuleCtx {
    pub db: DatabaseConnection,
    pub config: FrontendSettingsConfig,
    pub plugin_dirs: Vec<PathBuf>,
    pub updates: Arc<UpdateStateCell>,
}

/// Lifecycle wrapper: `migrate`, then `init`, then `register_rest` / `client`.
#[derive(Default)]
pub struct FrontendSettingsModule {
    service: ArcSwapOption<Service>,
}

impl FrontendSettingsModule {
    /// # Errors
    ///
    /// Returns an error if a migration fails.
    pub async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running frontend-settings database migrations");

        crate::infra::storage::migrations::Migrator::up(db, None).await?;

        info!("Frontend-settings database migrations completed successfully");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the plugin scan task panics.
    pub async fn init(&self, ctx: ModuleCtx) -> anyhow::Result<()> {
        info!("Initializing frontend-settings module");

        let plugin_dirs = ctx.plugin_dirs;
        let catalog = tokio::task::spawn_blocking(move || PluginCatalog::load(&plugin_dirs))
            .await
            .map_err(|e| anyhow::anyhow!("plugin scan failed: {e}"))?;

        let service = Service::new(
            Arc::new(SeaOrmDataSourceRepository::new(ctx.db)),
            Arc::new(catalog),
            ctx.updates,
            Arc::new(ctx.config),
        );
        self.service.store(Some(Arc::new(service)));

        info!("Frontend-settings module initialized");
        Ok(())
    }

    fn service(&self) -> anyhow::Result<Arc<Service>> {
        self.service
            .load_full()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// # Errors
    ///
    /// Returns an error if called before `init`.
    pub fn register_rest(&self, router: Router) -> anyhow::Result<Router> {
        info!("Registering frontend-settings REST routes");

        let router = routes::register_routes(router, self.service()?);

        info!("Frontend-settings REST routes registered successfully");
        Ok(router)
    }

    /// # Errors
    ///
    /// Returns an error if called before `init`.
    pub fn client(&self) -> anyhow::Result<Arc<dyn FrontendSettingsApi>> {
        Ok(Arc::new(LocalClient::new(self.service()?)))
    }
}
