use crate::app::effects::FetchTicket;
use crate::core::{Location, LocationCategory};
use std::sync::Arc;

/// Zustand der Ortsliste (Fetch, Filter, Suche).
#[derive(Debug, Clone)]
pub struct DirectoryState {
    /// Zuletzt erfolgreich geladene Liste (wird komplett ersetzt)
    pub locations: Arc<[Location]>,
    /// Ob ein Fetch aussteht
    pub loading: bool,
    /// Einzelne Fehlermeldung des letzten Fetches
    pub error: Option<String>,
    /// Aktiver Kategorie-Filter (`None` = alle)
    pub category: Option<LocationCategory>,
    /// Zuletzt ausgegebenes Fetch-Ticket; nur dessen Antwort wird übernommen
    pub latest_fetch: Option<FetchTicket>,
    /// Suchbegriff für die Liste (getrimmt)
    pub search_query: String,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self {
            locations: Arc::from(Vec::new()),
            loading: true,
            error: None,
            category: None,
            latest_fetch: None,
            search_query: String::new(),
        }
    }

    /// Nächstes Fetch-Ticket ausgeben und als aktuell merken.
    pub fn issue_fetch_ticket(&mut self) -> FetchTicket {
        let next = self.latest_fetch.map_or(1, |t| t.0 + 1);
        let ticket = FetchTicket(next);
        self.latest_fetch = Some(ticket);
        ticket
    }

    /// Gibt zurück, ob das Ticket zum zuletzt ausgegebenen Fetch gehört.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest_fetch == Some(ticket)
    }

    /// Sucht einen Ort der aktuellen Liste.
    pub fn find(&self, location_id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == location_id)
    }

    /// Orte, die zur aktuellen Suche passen (nur für die Liste).
    pub fn visible_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations
            .iter()
            .filter(|l| l.matches_query(&self.search_query))
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}
