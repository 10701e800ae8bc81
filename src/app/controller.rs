//! Application Controller für zentrale Event-Verarbeitung.

use super::directory_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::map::MapSurface;
use crate::shared::{DirectoryScene, FormScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Übergibt eine frisch erzeugte Karte an die Marker-Synchronisation.
    ///
    /// Kein Intent, da die Karte als Trait-Objekt nicht klonbar ist.
    pub fn attach_map_surface(&mut self, state: &mut AppState, surface: Box<dyn MapSurface>) {
        state.map.initialize(surface);
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Verzeichnis ===
            AppCommand::StartLocationFetch => handlers::directory::start_fetch(state),
            AppCommand::ApplyFetchResult { ticket, result } => {
                handlers::directory::apply_fetch_result(state, ticket, result)?
            }
            AppCommand::SetCategory { category } => {
                handlers::directory::set_category(state, category)
            }
            AppCommand::SetSearchQuery { query } => {
                handlers::directory::set_search_query(state, &query)
            }

            // === Selektion ===
            AppCommand::SelectLocation { location } => handlers::selection::select(state, location),
            AppCommand::SelectLocationById { location_id } => {
                handlers::selection::select_by_id(state, &location_id)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Karte ===
            AppCommand::MarkMapLoaded => handlers::map::mark_loaded(state),
            AppCommand::FailMap { message } => handlers::map::fail(state, &message),
            AppCommand::ReopenPopup { popup } => handlers::map::popup_opened(state, popup),
            AppCommand::ClosePopup { popup } => handlers::map::popup_closed(state, popup),
            AppCommand::FlushDeferredReleases => handlers::map::flush_deferred_releases(state),
            AppCommand::DisposeMap => handlers::map::dispose(state),

            // === Navigation & Sidebar ===
            AppCommand::Navigate { target } => handlers::navigation::navigate(state, target),
            AppCommand::ToggleSidebar => handlers::navigation::toggle_sidebar(state),
            AppCommand::CloseSidebar => handlers::navigation::close_sidebar(state),
            AppCommand::ToggleSidebarCollapsed => handlers::navigation::toggle_collapsed(state),
            AppCommand::ToggleCategoriesMenu => {
                handlers::navigation::toggle_categories_menu(state)
            }
            AppCommand::DismissFatalError => handlers::navigation::dismiss_fatal_error(state),

            // === Formular ===
            AppCommand::EditFormField { edit } => handlers::submission::edit_field(state, edit),
            AppCommand::SubmitForm => handlers::submission::submit(state),
            AppCommand::ApplySubmitResult { ticket, result } => {
                handlers::submission::apply_result(state, ticket, result)
            }
            AppCommand::ResetFormAfterSuccess { ticket } => {
                handlers::submission::reset_after_success(state, ticket)
            }
        }

        Ok(())
    }

    /// Baut die Verzeichnis-Szene aus dem aktuellen AppState.
    pub fn build_directory_scene(&self, state: &AppState) -> DirectoryScene {
        directory_scene::build(state)
    }

    /// Baut die Formular-Szene aus dem aktuellen AppState.
    pub fn build_form_scene(&self, state: &AppState) -> FormScene {
        directory_scene::build_form(state)
    }
}
