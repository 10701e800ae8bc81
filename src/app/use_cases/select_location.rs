//! Use-Cases für die Auswahl eines Ortes.

use crate::app::AppState;
use crate::core::Location;

/// Setzt die Auswahl (Marker-Klick).
pub fn select_location(state: &mut AppState, location: Location) {
    log::debug!("Ort '{}' ausgewählt", location.id);
    state.selection.selected = Some(location);
}

/// Setzt die Auswahl auf einen Ort der aktuellen Liste (Listen-Klick).
pub fn select_location_by_id(state: &mut AppState, location_id: &str) {
    let Some(location) = state.directory.find(location_id).cloned() else {
        log::warn!("Ort '{}' ist nicht in der aktuellen Liste", location_id);
        return;
    };
    select_location(state, location);
}

/// Hebt die Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.selected = None;
}
