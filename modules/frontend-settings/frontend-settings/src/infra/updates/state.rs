use std::cmp::Ordering;
use std::sync::Arc;

use arc_swap::ArcSwap;
use frontend_settings_sdk::models::UpdateState;

use crate::domain::updates::UpdateSource;

/// Shared holder of the latest known release.
///
/// Written by the update checker, read on every settings request.
#[derive(Debug)]
pub struct UpdateStateCell {
    state: ArcSwap<UpdateState>,
}

impl Default for UpdateStateCell {
    fn default() -> Self {
        Self::new(UpdateState::default())
    }
}

impl UpdateStateCell {
    #[must_use]
    pub fn new(initial: UpdateState) -> Self {
        Self {
            state: ArcSwap::from_pointee(initial),
        }
    }

    /// Record `latest` as the newest published release relative to `current`.
    pub fn publish(&self, latest: &str, current: &str) {
        let has_update = is_newer_version(latest, current);
        tracing::debug!(latest, current, has_update, "Update state published");
        self.state.store(Arc::new(UpdateState {
            latest_version: latest.to_owned(),
            has_update,
        }));
    }
}

impl UpdateSource for UpdateStateCell {
    fn current(&self) -> UpdateState {
        self.state.load().as_ref().clone()
    }
}

fn numeric_components(version: &str) -> Vec<u64> {
    version
        .trim()
        .trim_start_matches('v')
        .split(['-', '+'])
        .next()
        .unwrap_or_default()
        .split('.')
        .map(|part| part.parse().unwrap_or(0))
        .collect()
}

/// `true` when `latest` is strictly greater than `current`, comparing dotted
/// numeric components. Missing components count as zero and pre-release
/// suffixes are ignored.
#[must_use]
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    if latest.trim().is_empty() {
        return false;
    }

    let latest = numeric_components(latest);
    let current = numeric_components(current);
    let len = latest.len().max(current.len());

    for i in 0..len {
        let l = latest.get(i).copied().unwrap_or(0);
        let c = current.get(i).copied().unwrap_or(0);
        match l.cmp(&c) {
            Ordering::Greater => return true,
            Ordering::Less => return false,
            Ordering::Equal => {}
        }
    }
    false
}
