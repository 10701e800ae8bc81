//! Builder für die Verzeichnis- und Formular-Szene.

use super::AppState;
use crate::core::LocationCategory;
use crate::map::MapPhase;
use crate::shared::{
    CategoryButton, DirectoryScene, FormScene, ListItem, ListPanel, MapPanel, NavEntry, NavTarget,
};

/// Label des "alle Kategorien"-Buttons.
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Kategorien im Sidebar-Untermenü ("Other" fehlt dort).
const SIDEBAR_CATEGORIES: [LocationCategory; 6] = [
    LocationCategory::Mural,
    LocationCategory::Museum,
    LocationCategory::MusicVenue,
    LocationCategory::HistoricPlace,
    LocationCategory::Gallery,
    LocationCategory::Theater,
];

/// Reihenfolge der Kategorie-Auswahl im Formular.
const FORM_CATEGORIES: [LocationCategory; 7] = [
    LocationCategory::Mural,
    LocationCategory::Museum,
    LocationCategory::MusicVenue,
    LocationCategory::Gallery,
    LocationCategory::HistoricPlace,
    LocationCategory::Theater,
    LocationCategory::Other,
];

/// Baut die Verzeichnis-Szene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> DirectoryScene {
    let active = state.directory.category;

    let categories = std::iter::once(CategoryButton {
        category: None,
        label: ALL_CATEGORIES_LABEL,
        active: active.is_none(),
    })
    .chain(LocationCategory::ALL.into_iter().map(|c| CategoryButton {
        category: Some(c),
        label: c.plural_label(),
        active: active == Some(c),
    }))
    .collect();

    let sidebar_categories = if state.ui.categories_menu_open {
        SIDEBAR_CATEGORIES
            .into_iter()
            .map(|c| CategoryButton {
                category: Some(c),
                label: c.plural_label(),
                active: active == Some(c),
            })
            .collect()
    } else {
        Vec::new()
    };

    let navigation = NavTarget::ALL
        .into_iter()
        .map(|target| NavEntry {
            target,
            label: target.label(),
            path: target.path(),
            active: state.ui.route == target,
        })
        .collect();

    DirectoryScene {
        map: build_map_panel(state),
        list: build_list_panel(state),
        categories,
        navigation,
        sidebar_categories,
        sidebar_open: state.ui.sidebar_open,
        sidebar_collapsed: state.ui.sidebar_collapsed,
        search_query: state.directory.search_query.clone(),
        fatal_error: state.ui.fatal_error.clone(),
    }
}

fn build_map_panel(state: &AppState) -> MapPanel {
    match state.map.phase() {
        MapPhase::Uninitialized | MapPhase::Initializing => MapPanel::Loading,
        MapPhase::Ready | MapPhase::Synchronizing => MapPanel::Ready {
            marker_count: state.map.marker_count(),
        },
        MapPhase::Failed => MapPanel::Failed {
            message: state
                .map
                .error_message()
                .unwrap_or(crate::map::MAP_FAILED_MESSAGE)
                .to_string(),
        },
        MapPhase::TornDown => MapPanel::Closed,
    }
}

fn build_list_panel(state: &AppState) -> ListPanel {
    let directory = &state.directory;
    if let Some(message) = &directory.error {
        return ListPanel::Error {
            message: message.clone(),
        };
    }
    if directory.loading {
        return ListPanel::Loading;
    }

    let items: Vec<ListItem> = directory
        .visible_locations()
        .map(|location| ListItem {
            id: location.id.clone(),
            title: location.title.clone(),
            description: (!location.description.is_empty()).then(|| location.description.clone()),
            address: location.address.clone(),
            selected: state.selection.is_selected(&location.id),
            on_map: location.is_placeable(),
        })
        .collect();

    if items.is_empty() {
        ListPanel::Empty
    } else {
        ListPanel::Items(items)
    }
}

/// Baut die Formular-Szene aus dem aktuellen AppState.
pub fn build_form(state: &AppState) -> FormScene {
    let form = &state.form;
    FormScene {
        description_counter: format!(
            "{}/{}",
            form.description_len(),
            state.options.form.description_max_chars
        ),
        submit_label: if form.submitting {
            "Submitting..."
        } else {
            "Submit Location"
        },
        submit_enabled: !form.submitting,
        success_notice: form
            .show_success
            .then_some(crate::shared::form::MSG_SUBMIT_SUCCESS),
        error_notice: form
            .show_error
            .then_some(crate::shared::form::MSG_SUBMIT_FAILED),
        field_errors: form
            .errors
            .iter()
            .map(|(field, message)| (*field, message.clone()))
            .collect(),
        category_options: FORM_CATEGORIES
            .into_iter()
            .map(|c| (c, c.label()))
            .collect(),
    }
}
