use async_trait::async_trait;
use frontend_settings_sdk::{
    FrontendSettings, FrontendSettingsApi, FrontendSettingsError, SessionContext,
};
use std::sync::Arc;

use crate::domain::service::Service;

/// In-process implementation of [`FrontendSettingsApi`].
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl FrontendSettingsApi for LocalClient {
    async fn get_frontend_settings(
        &self,
        ctx: &SessionContext,
    ) -> Result<FrontendSettings, FrontendSettingsError> {
        self.service
            .get_frontend_settings(ctx)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to get frontend settings");
                e.into()
            })
    }
}
