//! Handler für Navigation, Sidebar und Fehler-Panel.

use crate::app::AppState;
use crate::shared::NavTarget;

/// Wechselt die Seite.
pub fn navigate(state: &mut AppState, target: NavTarget) {
    if state.ui.route != target {
        log::debug!("Navigation: {}", target.path());
    }
    state.ui.route = target;
}

pub fn toggle_sidebar(state: &mut AppState) {
    state.ui.sidebar_open = !state.ui.sidebar_open;
}

pub fn close_sidebar(state: &mut AppState) {
    state.ui.sidebar_open = false;
}

pub fn toggle_collapsed(state: &mut AppState) {
    state.ui.sidebar_collapsed = !state.ui.sidebar_collapsed;
}

pub fn toggle_categories_menu(state: &mut AppState) {
    state.ui.categories_menu_open = !state.ui.categories_menu_open;
}

/// Schließt das Fehler-Panel.
pub fn dismiss_fatal_error(state: &mut AppState) {
    state.ui.fatal_error = None;
}
