//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::LocationCategory;
use crate::shared::NavTarget;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DirectoryMounted => vec![AppCommand::StartLocationFetch],
        AppIntent::CategorySelected { category } => category_change(state, category),
        AppIntent::LocationsLoaded { ticket, result } => {
            vec![AppCommand::ApplyFetchResult { ticket, result }]
        }
        AppIntent::LocationListItemClicked { location_id } => {
            vec![AppCommand::SelectLocationById { location_id }]
        }
        AppIntent::SearchSubmitted { query } => vec![AppCommand::SetSearchQuery { query }],
        AppIntent::SearchCleared => vec![AppCommand::SetSearchQuery {
            query: String::new(),
        }],

        AppIntent::MapLoaded => vec![AppCommand::MarkMapLoaded],
        AppIntent::MapFailed { message } => vec![AppCommand::FailMap { message }],
        AppIntent::MarkerClicked { marker } => state
            .map
            .location_for_marker(marker)
            .map(|location| AppCommand::SelectLocation {
                location: location.clone(),
            })
            .into_iter()
            .collect(),
        AppIntent::PopupOpened { popup } => vec![AppCommand::ReopenPopup { popup }],
        AppIntent::PopupClosed { popup } => vec![AppCommand::ClosePopup { popup }],
        AppIntent::DeferredReleaseDue => vec![AppCommand::FlushDeferredReleases],
        AppIntent::MapDisposed => vec![AppCommand::DisposeMap],

        AppIntent::NavigateRequested { target } if target.has_submenu() => {
            vec![AppCommand::ToggleCategoriesMenu]
        }
        AppIntent::NavigateRequested { target } => vec![AppCommand::Navigate { target }],
        AppIntent::SidebarToggled => vec![AppCommand::ToggleSidebar],
        AppIntent::SidebarClosed => vec![AppCommand::CloseSidebar],
        AppIntent::SidebarCollapseToggled => vec![AppCommand::ToggleSidebarCollapsed],
        AppIntent::SidebarCategoriesToggled => vec![AppCommand::ToggleCategoriesMenu],
        AppIntent::SidebarCategoryClicked { category } => {
            let mut commands = vec![AppCommand::Navigate {
                target: NavTarget::Home,
            }];
            commands.extend(category_change(state, Some(category)));
            commands
        }

        AppIntent::SubmissionFieldEdited { edit } => vec![AppCommand::EditFormField { edit }],
        AppIntent::SubmitRequested => vec![AppCommand::SubmitForm],
        AppIntent::SubmissionCompleted { ticket, result } => {
            vec![AppCommand::ApplySubmitResult { ticket, result }]
        }
        AppIntent::SuccessNoticeElapsed { ticket } => {
            vec![AppCommand::ResetFormAfterSuccess { ticket }]
        }

        AppIntent::FatalErrorDismissed => vec![AppCommand::DismissFatalError],
    }
}

/// Filterwechsel: Kategorie setzen, Auswahl aufheben, neu laden.
/// Dieselbe Kategorie erneut zu wählen ändert nichts.
fn category_change(state: &AppState, category: Option<LocationCategory>) -> Vec<AppCommand> {
    if state.directory.category == category {
        return Vec::new();
    }
    vec![
        AppCommand::SetCategory { category },
        AppCommand::ClearSelection,
        AppCommand::StartLocationFetch,
    ]
}
