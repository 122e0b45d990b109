use frontend_settings_sdk::models::{PanelDescriptor, PanelPluginMeta};

/// Rank of panels without an explicit position.
pub const DEFAULT_PANEL_SORT: u32 = 100;

const PANEL_SORT_ORDER: &[(&str, u32)] = &[
    ("graph", 1),
    ("singlestat", 2),
    ("table", 3),
    ("text", 4),
    ("alertlist", 5),
    ("dashlist", 6),
];

/// Display rank of a panel type in the client's panel picker.
#[must_use]
pub fn panel_sort(id: &str) -> u32 {
    PANEL_SORT_ORDER
        .iter()
        .find(|(panel_id, _)| *panel_id == id)
        .map_or(DEFAULT_PANEL_SORT, |(_, sort)| *sort)
}

#[must_use]
pub fn build_panel_descriptor(panel: &PanelPluginMeta) -> PanelDescriptor {
    PanelDescriptor {
        id: panel.id.clone(),
        name: panel.name.clone(),
        module: panel.module.clone(),
        base_url: panel.base_url.clone(),
        info: panel.info.clone(),
        hide_from_list: panel.hide_from_list,
        sort: panel_sort(&panel.id),
    }
}
