//! Application-Layer: Controller, State, Events, Use-Cases und Runtime.

pub mod controller;
pub mod directory_scene;
pub mod effects;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod runtime;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Ortsliste, Auswahl, Formular, Karte).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use directory_scene::build as build_directory_scene;
pub use effects::{Effect, FetchTicket, SubmitTicket};
pub use events::{AppCommand, AppIntent};
pub use runtime::{DirectoryRuntime, RuntimeHandle};
pub use state::{
    AppState, DirectoryState, FieldEdit, FormState, FormValues, SelectionState, UiState,
};
