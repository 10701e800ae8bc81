use crate::core::Location;

/// Aktuell ausgewählter Ort (höchstens einer, letzter Schreiber gewinnt).
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub selected: Option<Location>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID des ausgewählten Ortes.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|l| l.id.as_str())
    }

    pub fn is_selected(&self, location_id: &str) -> bool {
        self.selected_id() == Some(location_id)
    }
}
