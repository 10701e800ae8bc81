//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Location;

/// Wählt den Ort hinter einem Marker aus.
pub fn select(state: &mut AppState, location: Location) {
    use_cases::select_location::select_location(state, location);
}

/// Wählt einen Ort der Liste per ID aus.
pub fn select_by_id(state: &mut AppState, location_id: &str) {
    use_cases::select_location::select_location_by_id(state, location_id);
}

/// Hebt die Auswahl auf.
pub fn clear(state: &mut AppState) {
    use_cases::select_location::clear_selection(state);
}
