use crate::shared::NavTarget;

/// UI-Chrome: aktuelle Route, Sidebar, Fehler-Panel.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Aktuelle Seite
    pub route: NavTarget,
    /// Sidebar auf kleinen Bildschirmen eingeblendet
    pub sidebar_open: bool,
    /// Sidebar auf Icon-Breite eingeklappt
    pub sidebar_collapsed: bool,
    /// Kategorie-Untermenü der Sidebar aufgeklappt
    pub categories_menu_open: bool,
    /// Unerwarteter Fehler (Fallback-Panel)
    pub fatal_error: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            route: NavTarget::Home,
            sidebar_open: false,
            sidebar_collapsed: false,
            categories_menu_open: false,
            fatal_error: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
