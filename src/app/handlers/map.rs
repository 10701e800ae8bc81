//! Handler für Karten-Ereignisse. Alle Marker-Operationen laufen über
//! `MarkerSync`.

use crate::app::AppState;
use crate::map::PopupHandle;

pub fn mark_loaded(state: &mut AppState) {
    state.map.mark_loaded();
}

pub fn fail(state: &mut AppState, message: &str) {
    state.map.fail(message);
}

pub fn popup_opened(state: &mut AppState, popup: PopupHandle) {
    state.map.popup_opened(popup);
}

pub fn popup_closed(state: &mut AppState, popup: PopupHandle) {
    state.map.popup_closed(popup);
}

/// Gibt vorgemerkte Popup-Views frei (nächster Turn).
pub fn flush_deferred_releases(state: &mut AppState) {
    let released = state.map.flush_deferred_releases();
    if released > 0 {
        log::debug!("{} Popup-Views freigegeben", released);
    }
}

pub fn dispose(state: &mut AppState) {
    state.map.dispose();
}
