use culture_map::app::{Effect, FetchTicket};
use culture_map::{AppController, AppIntent, AppState, Location, LocationCategory, RecordingSurface};

mod controller_flow {
    mod fetch_ordering;
    mod markers;
    mod submission;
}

/// Controller und State mit geladener Aufzeichnungs-Karte.
pub fn ready_map() -> (AppController, AppState, RecordingSurface) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let surface = RecordingSurface::new();
    controller.attach_map_surface(&mut state, Box::new(surface.clone()));
    controller
        .handle_intent(&mut state, AppIntent::MapLoaded)
        .expect("MapLoaded sollte ohne Fehler durchlaufen");
    (controller, state, surface)
}

/// Entnimmt alle angeforderten Fetches (Ticket + Kategorie).
pub fn take_fetches(state: &mut AppState) -> Vec<(FetchTicket, Option<LocationCategory>)> {
    state
        .take_effects()
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::FetchLocations { ticket, query } => Some((ticket, query.category)),
            _ => None,
        })
        .collect()
}

/// Liefert ein Fetch-Ergebnis über den Intent-Pfad aus.
pub fn deliver(
    controller: &mut AppController,
    state: &mut AppState,
    ticket: FetchTicket,
    locations: Vec<Location>,
) {
    controller
        .handle_intent(
            state,
            AppIntent::LocationsLoaded {
                ticket,
                result: Ok(locations),
            },
        )
        .expect("LocationsLoaded sollte ohne Fehler durchlaufen");
}

pub fn placed(id: &str, category: LocationCategory) -> Location {
    Location::new(id, id.to_uppercase(), category, Some(39.1), Some(-94.58))
}

pub fn unplaced(id: &str, category: LocationCategory) -> Location {
    Location::new(id, id.to_uppercase(), category, None, Some(-94.58))
}

#[test]
fn test_directory_mounted_requests_unfiltered_fetch() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .expect("DirectoryMounted sollte ohne Fehler durchlaufen");

    assert!(state.directory.loading);
    assert_eq!(take_fetches(&mut state), vec![(FetchTicket(1), None)]);
}
