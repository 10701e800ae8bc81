//! Handler für Ortsliste, Kategorie-Filter und Suche.

use crate::app::effects::FetchTicket;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Location, LocationCategory};
use crate::map::MapPhase;
use std::collections::HashSet;

/// Startet einen neuen Fetch.
pub fn start_fetch(state: &mut AppState) {
    use_cases::fetch_locations::start_fetch(state);
}

/// Übernimmt ein Fetch-Ergebnis und prüft danach die Marker-Invariante.
pub fn apply_fetch_result(
    state: &mut AppState,
    ticket: FetchTicket,
    result: Result<Vec<Location>, String>,
) -> anyhow::Result<()> {
    use_cases::fetch_locations::apply_fetch_result(state, ticket, result);

    if state.map.phase() == MapPhase::Ready {
        let expected: HashSet<&str> = state
            .directory
            .locations
            .iter()
            .filter(|l| l.is_placeable())
            .map(|l| l.id.as_str())
            .collect();
        anyhow::ensure!(
            state.map.marker_count() == expected.len()
                && state.map.marker_ids().all(|id| expected.contains(id)),
            "Marker ({}) stimmen nicht mit den platzierbaren Orten ({}) überein",
            state.map.marker_count(),
            expected.len()
        );
    }
    Ok(())
}

/// Setzt den Kategorie-Filter.
pub fn set_category(state: &mut AppState, category: Option<LocationCategory>) {
    state.directory.category = category;
}

/// Setzt den Suchbegriff.
pub fn set_search_query(state: &mut AppState, query: &str) {
    use_cases::search::set_search_query(state, query);
}
