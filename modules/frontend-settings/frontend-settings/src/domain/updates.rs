use frontend_settings_sdk::models::UpdateState;

/// Latest-version state maintained by the update checker.
///
/// Reading never triggers a check.
pub trait UpdateSource: Send + Sync {
    fn current(&self) -> UpdateState;
}
