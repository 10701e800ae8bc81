use crate::app::effects::Effect;
use crate::map::MarkerSync;
use crate::shared::AppOptions;

use super::{DirectoryState, FormState, SelectionState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Ortsliste, Filter, Suche
    pub directory: DirectoryState,
    /// Ausgewählter Ort
    pub selection: SelectionState,
    /// Einreichungsformular
    pub form: FormState,
    /// UI-Chrome
    pub ui: UiState,
    /// Exklusiver Besitzer der Karten-Marker
    pub map: MarkerSync,
    /// Laufzeit-Optionen
    pub options: AppOptions,
    /// Angeforderte, noch nicht ausgeführte Seiteneffekte
    effects: Vec<Effect>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            directory: DirectoryState::new(),
            selection: SelectionState::new(),
            form: FormState::new(),
            ui: UiState::new(),
            map: MarkerSync::new(),
            options,
            effects: Vec::new(),
        }
    }

    /// Fordert einen Seiteneffekt an.
    pub fn push_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Entnimmt alle angeforderten Seiteneffekte.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Read-only Sicht auf die ausstehenden Seiteneffekte.
    pub fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
