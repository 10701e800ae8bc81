//! Use-Cases für das Laden der Ortsliste.

use crate::app::effects::{Effect, FetchTicket};
use crate::app::AppState;
use crate::core::Location;
use crate::store::LocationQuery;
use std::sync::Arc;

/// Meldung für den Nutzer, wenn das Laden fehlschlägt.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load locations";

/// Gibt einen neuen Fetch für den aktuellen Filter aus.
///
/// Jede Antwort eines früheren Fetches wird danach verworfen.
pub fn start_fetch(state: &mut AppState) {
    let ticket = state.directory.issue_fetch_ticket();
    state.directory.loading = true;
    state.directory.error = None;

    let query = LocationQuery {
        category: state.directory.category,
    };
    log::debug!("Fetch {} gestartet ({:?})", ticket.0, query.category);
    state.push_effect(Effect::FetchLocations { ticket, query });
}

/// Übernimmt das Ergebnis eines Fetches, sofern es zum neuesten Ticket gehört.
pub fn apply_fetch_result(
    state: &mut AppState,
    ticket: FetchTicket,
    result: Result<Vec<Location>, String>,
) {
    if !state.directory.is_current(ticket) {
        log::debug!(
            "Veraltete Antwort von Fetch {} verworfen (aktuell: {:?})",
            ticket.0,
            state.directory.latest_fetch
        );
        return;
    }
    state.directory.loading = false;

    match result {
        Ok(locations) => {
            let locations: Arc<[Location]> = locations.into();
            log::info!("{} Orte geladen", locations.len());
            state.directory.locations = Arc::clone(&locations);
            state.directory.error = None;
            state.map.set_locations(locations);
        }
        Err(message) => {
            log::error!("Orte konnten nicht geladen werden: {}", message);
            let empty: Arc<[Location]> = Arc::from(Vec::new());
            state.directory.locations = Arc::clone(&empty);
            state.directory.error = Some(FETCH_FAILED_MESSAGE.to_string());
            state.map.set_locations(empty);
        }
    }
}
