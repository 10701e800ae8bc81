//! Schnittstelle zum imperativen Karten-Widget (Marker, Popups, Views).

use super::PopupContent;
use crate::core::LngLat;

/// Opaker Handle eines Markers auf der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

/// Opaker Handle eines Popups (inkl. gerenderter View).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PopupHandle(pub u64);

/// Darstellung eines Markers.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerAppearance {
    /// Eigenes Icon (ersetzt den farbigen Punkt)
    Icon { url: String, alt: String, size_px: u32 },
    /// Farbiger Punkt nach Kategorie
    Dot { color: &'static str, size_px: u32 },
}

/// Alles, was die Karte zum Anlegen eines Markers braucht.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub location_id: String,
    pub position: LngLat,
    pub appearance: MarkerAppearance,
    /// Tooltip / Accessibility-Text
    pub title: String,
}

/// Ereignisse, die das Karten-Widget an die App meldet.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Karte ist vollständig geladen
    Loaded,
    /// Karte meldet einen Fehler (terminal)
    Failed { message: String },
    /// Ein Marker wurde angeklickt
    MarkerClicked { marker: MarkerHandle },
    /// Ein Popup wurde (wieder) geöffnet
    PopupOpened { popup: PopupHandle },
    /// Ein Popup wurde geschlossen
    PopupClosed { popup: PopupHandle },
}

/// Imperatives Karten-Widget.
///
/// Die Implementierung lebt im UI-Host; `MarkerSync` ist der einzige Aufrufer
/// und besitzt alle zurückgegebenen Handles exklusiv.
pub trait MapSurface: Send {
    /// Legt einen Marker an und gibt seinen Handle zurück.
    fn add_marker(&mut self, spec: &MarkerSpec) -> MarkerHandle;

    /// Entfernt einen Marker (inkl. angehängtem Popup) von der Karte.
    fn remove_marker(&mut self, marker: MarkerHandle);

    /// Erzeugt ein Popup am Marker und rendert seinen Inhalt.
    fn attach_popup(&mut self, marker: MarkerHandle, content: &PopupContent) -> PopupHandle;

    /// Rendert den Popup-Inhalt erneut, nachdem die View freigegeben wurde.
    fn render_popup(&mut self, popup: PopupHandle, content: &PopupContent);

    /// Gibt die gerenderte View eines Popups frei.
    fn release_popup(&mut self, popup: PopupHandle);

    /// Entsorgt die Karte samt aller verbleibenden Ressourcen.
    fn dispose(&mut self);
}
