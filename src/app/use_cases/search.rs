use crate::app::AppState;

/// Setzt den Suchbegriff der Liste. Marker bleiben unverändert.
pub fn set_search_query(state: &mut AppState, query: &str) {
    state.directory.search_query = query.trim().to_string();
}
