use crate::{deliver, placed, ready_map, take_fetches, unplaced};
use culture_map::map::MapPhase;
use culture_map::shared::{ListPanel, MapPanel};
use culture_map::{AppController, AppIntent, AppState, LocationCategory, RecordingSurface};

#[test]
fn test_only_placeable_locations_get_markers() {
    let (mut controller, mut state, surface) = ready_map();
    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (ticket, _) = take_fetches(&mut state)[0];

    deliver(
        &mut controller,
        &mut state,
        ticket,
        vec![
            placed("a", LocationCategory::Museum),
            unplaced("b", LocationCategory::Mural),
            placed("c", LocationCategory::Theater),
            placed("a", LocationCategory::Museum),
        ],
    );

    assert_eq!(state.map.marker_count(), 2);
    assert_eq!(surface.live_marker_count(), 2);
    let mut ids = surface.location_ids();
    ids.sort();
    assert_eq!(ids, vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn test_location_without_latitude_is_listed_but_not_mapped() {
    let (mut controller, mut state, surface) = ready_map();
    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (ticket, _) = take_fetches(&mut state)[0];

    deliver(
        &mut controller,
        &mut state,
        ticket,
        vec![unplaced("alley", LocationCategory::Mural)],
    );

    assert_eq!(surface.live_marker_count(), 0);
    let scene = controller.build_directory_scene(&state);
    let ListPanel::Items(items) = scene.list else {
        panic!("Liste erwartet, erhalten: {:?}", scene.list);
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "alley");
    assert!(!items[0].on_map);
}

#[test]
fn test_locations_before_map_load_sync_once_loaded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let surface = RecordingSurface::new();
    controller.attach_map_surface(&mut state, Box::new(surface.clone()));

    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (ticket, _) = take_fetches(&mut state)[0];
    deliver(
        &mut controller,
        &mut state,
        ticket,
        vec![placed("a", LocationCategory::Gallery)],
    );
    assert_eq!(surface.add_calls(), 0);

    controller
        .handle_intent(&mut state, AppIntent::MapLoaded)
        .unwrap();
    assert_eq!(surface.live_marker_count(), 1);
    assert_eq!(state.map.phase(), MapPhase::Ready);
}

#[test]
fn test_refetch_replaces_markers_without_leaks() {
    let (mut controller, mut state, surface) = ready_map();
    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (first, _) = take_fetches(&mut state)[0];
    deliver(
        &mut controller,
        &mut state,
        first,
        vec![
            placed("a", LocationCategory::Museum),
            placed("b", LocationCategory::Mural),
        ],
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::CategorySelected {
                category: Some(LocationCategory::Mural),
            },
        )
        .unwrap();
    let (second, category) = take_fetches(&mut state)[0];
    assert_eq!(category, Some(LocationCategory::Mural));
    deliver(
        &mut controller,
        &mut state,
        second,
        vec![placed("b", LocationCategory::Mural)],
    );

    assert_eq!(surface.live_marker_count(), 1);
    assert_eq!(surface.location_ids(), vec!["b".to_string()]);
    assert_eq!(surface.double_releases(), 0);
}

#[test]
fn test_marker_click_then_list_click_last_selection_wins() {
    let (mut controller, mut state, surface) = ready_map();
    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (ticket, _) = take_fetches(&mut state)[0];
    deliver(
        &mut controller,
        &mut state,
        ticket,
        vec![
            placed("x", LocationCategory::Museum),
            placed("y", LocationCategory::Theater),
        ],
    );

    let marker = surface.marker_handle_for("x").expect("Marker für x");
    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { marker })
        .unwrap();
    assert_eq!(state.selection.selected_id(), Some("x"));

    controller
        .handle_intent(
            &mut state,
            AppIntent::LocationListItemClicked {
                location_id: "y".to_string(),
            },
        )
        .unwrap();
    assert_eq!(state.selection.selected_id(), Some("y"));
    assert!(!state.selection.is_selected("x"));
}

#[test]
fn test_popup_close_releases_view_only_after_deferred_turn() {
    let (mut controller, mut state, surface) = ready_map();
    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (ticket, _) = take_fetches(&mut state)[0];
    deliver(
        &mut controller,
        &mut state,
        ticket,
        vec![placed("a", LocationCategory::Museum)],
    );

    let popup = surface.popup_handle_for("a").expect("Popup für a");
    controller
        .handle_intent(&mut state, AppIntent::PopupClosed { popup })
        .unwrap();
    assert_eq!(surface.release_calls(), 0);
    assert!(state.map.has_pending_releases());

    controller
        .handle_intent(&mut state, AppIntent::DeferredReleaseDue)
        .unwrap();
    assert_eq!(surface.release_calls(), 1);

    controller
        .handle_intent(&mut state, AppIntent::DeferredReleaseDue)
        .unwrap();
    assert_eq!(surface.release_calls(), 1);
    assert_eq!(surface.double_releases(), 0);
}

#[test]
fn test_map_failure_is_terminal() {
    let (mut controller, mut state, surface) = ready_map();
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapFailed {
                message: "style error".to_string(),
            },
        )
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (ticket, _) = take_fetches(&mut state)[0];
    deliver(
        &mut controller,
        &mut state,
        ticket,
        vec![placed("a", LocationCategory::Museum)],
    );

    assert_eq!(state.map.phase(), MapPhase::Failed);
    assert_eq!(surface.live_marker_count(), 0);
    assert_eq!(
        controller.build_directory_scene(&state).map,
        MapPanel::Failed {
            message: "Failed to load map".to_string()
        }
    );
}

#[test]
fn test_dispose_releases_everything_once() {
    let (mut controller, mut state, surface) = ready_map();
    controller
        .handle_intent(&mut state, AppIntent::DirectoryMounted)
        .unwrap();
    let (ticket, _) = take_fetches(&mut state)[0];
    deliver(
        &mut controller,
        &mut state,
        ticket,
        vec![
            placed("a", LocationCategory::Museum),
            placed("b", LocationCategory::Mural),
        ],
    );
    let popup = surface.popup_handle_for("a").unwrap();
    controller
        .handle_intent(&mut state, AppIntent::PopupClosed { popup })
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::MapDisposed)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DeferredReleaseDue)
        .unwrap();

    assert!(surface.is_disposed());
    assert_eq!(surface.live_marker_count(), 0);
    assert_eq!(surface.live_view_count(), 0);
    assert_eq!(surface.double_releases(), 0);
    assert_eq!(state.map.phase(), MapPhase::TornDown);
}
