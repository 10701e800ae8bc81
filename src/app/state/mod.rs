//! Application State: zentrale Datenhaltung.

mod app_state;
mod directory;
mod form;
mod selection;
mod ui;

pub use app_state::AppState;
pub use directory::DirectoryState;
pub use form::{FieldEdit, FormState, FormValues};
pub use selection::SelectionState;
pub use ui::UiState;
