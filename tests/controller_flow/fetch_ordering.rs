use crate::{deliver, placed, ready_map, take_fetches};
use culture_map::shared::ListPanel;
use culture_map::{AppIntent, LocationCategory};

fn select(
    controller: &mut culture_map::AppController,
    state: &mut culture_map::AppState,
    category: LocationCategory,
) {
    controller
        .handle_intent(
            state,
            AppIntent::CategorySelected {
                category: Some(category),
            },
        )
        .expect("CategorySelected sollte ohne Fehler durchlaufen");
}

#[test]
fn test_later_issued_fetch_wins_when_stale_response_arrives_first() {
    let (mut controller, mut state, surface) = ready_map();

    select(&mut controller, &mut state, LocationCategory::Museum);
    let (museum, _) = take_fetches(&mut state)[0];
    select(&mut controller, &mut state, LocationCategory::Mural);
    let (mural, _) = take_fetches(&mut state)[0];

    deliver(
        &mut controller,
        &mut state,
        museum,
        vec![placed("nelson", LocationCategory::Museum)],
    );
    assert!(state.directory.loading, "veraltete Antwort beendet das Laden nicht");

    deliver(
        &mut controller,
        &mut state,
        mural,
        vec![placed("crossroads", LocationCategory::Mural)],
    );

    assert!(!state.directory.loading);
    assert_eq!(state.directory.locations.len(), 1);
    assert_eq!(state.directory.locations[0].id, "crossroads");
    assert_eq!(surface.location_ids(), vec!["crossroads".to_string()]);
}

#[test]
fn test_later_issued_fetch_wins_when_stale_response_arrives_last() {
    let (mut controller, mut state, surface) = ready_map();

    select(&mut controller, &mut state, LocationCategory::Museum);
    let (museum, _) = take_fetches(&mut state)[0];
    select(&mut controller, &mut state, LocationCategory::Mural);
    let (mural, _) = take_fetches(&mut state)[0];

    deliver(
        &mut controller,
        &mut state,
        mural,
        vec![placed("crossroads", LocationCategory::Mural)],
    );
    deliver(
        &mut controller,
        &mut state,
        museum,
        vec![placed("nelson", LocationCategory::Museum)],
    );

    assert_eq!(state.directory.category, Some(LocationCategory::Mural));
    assert_eq!(state.directory.locations[0].id, "crossroads");
    assert_eq!(surface.location_ids(), vec!["crossroads".to_string()]);
    assert_eq!(surface.add_calls(), 1);
}

#[test]
fn test_stale_failure_does_not_replace_current_list() {
    let (mut controller, mut state, _surface) = ready_map();

    select(&mut controller, &mut state, LocationCategory::Museum);
    let (museum, _) = take_fetches(&mut state)[0];
    select(&mut controller, &mut state, LocationCategory::Theater);
    let (theater, _) = take_fetches(&mut state)[0];

    deliver(
        &mut controller,
        &mut state,
        theater,
        vec![placed("folly", LocationCategory::Theater)],
    );
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationsLoaded {
                ticket: museum,
                result: Err("connection reset".to_string()),
            },
        )
        .unwrap();

    assert!(state.directory.error.is_none());
    assert_eq!(state.directory.locations[0].id, "folly");
}

#[test]
fn test_current_failure_shows_single_error_and_no_list() {
    let (mut controller, mut state, surface) = ready_map();
    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (first, _) = take_fetches(&mut state)[0];
    deliver(
        &mut controller,
        &mut state,
        first,
        vec![placed("nelson", LocationCategory::Museum)],
    );
    assert_eq!(surface.live_marker_count(), 1);

    select(&mut controller, &mut state, LocationCategory::Mural);
    let (ticket, _) = take_fetches(&mut state)[0];

    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationsLoaded {
                ticket,
                result: Err("timeout".to_string()),
            },
        )
        .unwrap();

    assert!(!state.directory.loading);
    assert!(state.pending_effects().is_empty(), "kein automatischer Retry");
    assert_eq!(
        controller.build_directory_scene(&state).list,
        ListPanel::Error {
            message: "Failed to load locations".to_string()
        }
    );
    assert!(state.directory.locations.is_empty());
    assert_eq!(surface.live_marker_count(), 0, "keine Marker der alten Liste");
}

#[test]
fn test_reselecting_active_category_issues_no_fetch() {
    let (mut controller, mut state, _surface) = ready_map();
    select(&mut controller, &mut state, LocationCategory::Gallery);
    assert_eq!(take_fetches(&mut state).len(), 1);

    select(&mut controller, &mut state, LocationCategory::Gallery);
    assert!(take_fetches(&mut state).is_empty());
}

#[test]
fn test_category_change_clears_selection() {
    let (mut controller, mut state, _surface) = ready_map();
    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (ticket, _) = take_fetches(&mut state)[0];
    deliver(
        &mut controller,
        &mut state,
        ticket,
        vec![placed("x", LocationCategory::Museum)],
    );
    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationListItemClicked {
                location_id: "x".to_string(),
            },
        )
        .unwrap();
    assert_eq!(state.selection.selected_id(), Some("x"));

    select(&mut controller, &mut state, LocationCategory::Mural);
    assert_eq!(state.selection.selected_id(), None);
}
