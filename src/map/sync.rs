//! Marker-Synchronisation: hält die Marker der Karte deckungsgleich mit der
//! aktuellen Ortsliste.
//!
//! Jede neue Liste führt zu einem vollständigen Abbau und Neuaufbau aller
//! Marker. Gerenderte Popup-Views werden nie im selben Turn freigegeben, in
//! dem der Abbau ausgelöst wurde, sondern über eine Queue im nächsten Turn
//! (`flush_deferred_releases`).

use super::{MapSurface, MarkerAppearance, MarkerHandle, MarkerSpec, PopupContent, PopupHandle};
use crate::core::Location;
use crate::shared::category_color;
use crate::shared::options::{MARKER_DOT_SIZE_PX, MARKER_ICON_SIZE_PX};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;
use std::sync::Arc;

/// Meldung für den Nutzer, wenn die Karte nicht geladen werden konnte.
pub const MAP_FAILED_MESSAGE: &str = "Failed to load map";

/// Lebenszyklus einer Karteninstanz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapPhase {
    /// Noch keine Karte vorhanden
    #[default]
    Uninitialized,
    /// Karte erzeugt, wartet auf `Loaded`
    Initializing,
    /// Karte bereit, Marker entsprechen der Liste
    Ready,
    /// Abbau/Aufbau läuft
    Synchronizing,
    /// Terminaler Fehler
    Failed,
    /// Entsorgt (terminal)
    TornDown,
}

impl MapPhase {
    /// Gibt zurück, ob keine weiteren Übergänge mehr möglich sind.
    pub fn is_terminal(self) -> bool {
        matches!(self, MapPhase::Failed | MapPhase::TornDown)
    }
}

/// Ein lebender Marker samt Popup.
#[derive(Debug)]
struct MarkerEntry {
    marker: MarkerHandle,
    popup: PopupHandle,
    /// Ob die Popup-View aktuell gerendert ist
    popup_mounted: bool,
    location: Location,
}

/// Exklusiver Besitzer aller Marker, Popups und Popup-Views einer Karte.
#[derive(Default)]
pub struct MarkerSync {
    phase: MapPhase,
    surface: Option<Box<dyn MapSurface>>,
    locations: Option<Arc<[Location]>>,
    /// Erhöht sich mit jeder neuen Liste
    input_revision: u64,
    /// Revision, deren Marker aktuell auf der Karte liegen
    synced_revision: Option<u64>,
    entries: IndexMap<String, MarkerEntry>,
    by_marker: HashMap<MarkerHandle, String>,
    by_popup: HashMap<PopupHandle, String>,
    /// Views, die im nächsten Turn freigegeben werden
    pending_releases: IndexSet<PopupHandle>,
    error_message: Option<String>,
}

impl std::fmt::Debug for MarkerSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerSync")
            .field("phase", &self.phase)
            .field("markers", &self.entries.len())
            .field("pending_releases", &self.pending_releases.len())
            .field("input_revision", &self.input_revision)
            .finish()
    }
}

impl MarkerSync {
    /// Erstellt eine Synchronisation ohne Karte.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MapPhase {
        self.phase
    }

    /// Anzahl lebender Marker.
    pub fn marker_count(&self) -> usize {
        self.entries.len()
    }

    /// Gibt zurück, ob für die Orts-ID ein Marker existiert.
    pub fn has_marker(&self, location_id: &str) -> bool {
        self.entries.contains_key(location_id)
    }

    /// Orts-IDs der lebenden Marker in Erstellungsreihenfolge.
    pub fn marker_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Anzahl der Views, die auf Freigabe im nächsten Turn warten.
    pub fn pending_release_count(&self) -> usize {
        self.pending_releases.len()
    }

    pub fn has_pending_releases(&self) -> bool {
        !self.pending_releases.is_empty()
    }

    /// Fehlermeldung für den Nutzer (nur in `Failed`).
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Übernimmt eine frisch erzeugte Karte; wartet danach auf `mark_loaded`.
    pub fn initialize(&mut self, surface: Box<dyn MapSurface>) {
        if self.phase != MapPhase::Uninitialized {
            log::warn!("Karte bereits initialisiert (Phase {:?}), ignoriert", self.phase);
            return;
        }
        self.surface = Some(surface);
        self.phase = MapPhase::Initializing;
    }

    /// Karte ist geladen. Liegt bereits eine Liste vor, wird genau einmal
    /// synchronisiert.
    pub fn mark_loaded(&mut self) {
        if self.phase != MapPhase::Initializing {
            log::debug!("Loaded-Event in Phase {:?} ignoriert", self.phase);
            return;
        }
        log::info!("Karte geladen");
        self.phase = MapPhase::Ready;
        if self.locations.is_some() {
            self.synchronize();
        }
    }

    /// Terminaler Kartenfehler: Marker abbauen, keine weiteren Syncs.
    pub fn fail(&mut self, message: &str) {
        if self.phase.is_terminal() {
            return;
        }
        log::error!("Kartenfehler: {message}");
        self.teardown();
        self.phase = MapPhase::Failed;
        self.error_message = Some(MAP_FAILED_MESSAGE.to_string());
    }

    /// Setzt eine neue Ortsliste. Jede Liste zählt als neue Paarung und wird
    /// sofort synchronisiert, sofern die Karte bereit ist.
    pub fn set_locations(&mut self, locations: Arc<[Location]>) {
        if self.phase.is_terminal() {
            return;
        }
        self.locations = Some(locations);
        self.input_revision += 1;
        if self.phase == MapPhase::Ready {
            self.synchronize();
        }
    }

    /// Baut alle Marker ab und legt für jeden platzierbaren Ort genau einen
    /// neuen an. Gibt die Anzahl erzeugter Marker zurück.
    pub fn synchronize(&mut self) -> usize {
        if self.phase != MapPhase::Ready {
            return 0;
        }
        if self.synced_revision == Some(self.input_revision) {
            return self.entries.len();
        }
        let Some(locations) = self.locations.clone() else {
            return 0;
        };

        self.phase = MapPhase::Synchronizing;
        self.teardown();

        let mut skipped = 0usize;
        if let Some(surface) = self.surface.as_mut() {
            for location in locations.iter() {
                if self.entries.contains_key(&location.id) {
                    log::warn!("Doppelte Orts-ID '{}' übersprungen", location.id);
                    continue;
                }
                let Some(spec) = marker_spec(location) else {
                    skipped += 1;
                    continue;
                };

                let marker = surface.add_marker(&spec);
                let popup = surface.attach_popup(marker, &PopupContent::from_location(location));
                self.by_marker.insert(marker, location.id.clone());
                self.by_popup.insert(popup, location.id.clone());
                self.entries.insert(
                    location.id.clone(),
                    MarkerEntry {
                        marker,
                        popup,
                        popup_mounted: true,
                        location: location.clone(),
                    },
                );
            }
        }

        self.synced_revision = Some(self.input_revision);
        self.phase = MapPhase::Ready;
        log::debug!(
            "{} Marker synchronisiert ({} ohne Koordinaten)",
            self.entries.len(),
            skipped
        );
        self.entries.len()
    }

    /// Entfernt alle Marker. Gerenderte Popup-Views wandern in die
    /// Freigabe-Queue. Idempotent; gibt die Anzahl entfernter Marker zurück.
    pub fn teardown(&mut self) -> usize {
        if self.entries.is_empty() {
            return 0;
        }
        let removed = self.entries.len();
        let entries = std::mem::take(&mut self.entries);
        self.by_marker.clear();
        self.by_popup.clear();
        self.synced_revision = None;

        for (_, entry) in entries {
            if entry.popup_mounted {
                self.pending_releases.insert(entry.popup);
            }
            if let Some(surface) = self.surface.as_mut() {
                surface.remove_marker(entry.marker);
            }
        }
        removed
    }

    /// Gibt alle vorgemerkten Views frei. Läuft im Turn nach dem Auslöser.
    pub fn flush_deferred_releases(&mut self) -> usize {
        if self.pending_releases.is_empty() {
            return 0;
        }
        let pending = std::mem::take(&mut self.pending_releases);
        let released = pending.len();
        for popup in pending {
            if let Some(surface) = self.surface.as_mut() {
                surface.release_popup(popup);
            }
            if let Some(entry) = self
                .by_popup
                .get(&popup)
                .and_then(|id| self.entries.get_mut(id))
            {
                entry.popup_mounted = false;
            }
        }
        released
    }

    /// Popup wurde geschlossen: View zur Freigabe im nächsten Turn vormerken.
    pub fn popup_closed(&mut self, popup: PopupHandle) {
        let Some(entry) = self.by_popup.get(&popup).and_then(|id| self.entries.get(id)) else {
            return;
        };
        if entry.popup_mounted {
            self.pending_releases.insert(popup);
        }
    }

    /// Popup wurde geöffnet: vorgemerkte Freigabe zurücknehmen oder die View
    /// neu rendern, falls sie bereits freigegeben wurde.
    ///
    /// Popups abgebauter Marker bleiben vorgemerkt.
    pub fn popup_opened(&mut self, popup: PopupHandle) {
        let Some(entry) = self
            .by_popup
            .get(&popup)
            .and_then(|id| self.entries.get_mut(id))
        else {
            log::debug!("Popup {} gehört zu keinem Marker mehr", popup.0);
            return;
        };
        if self.pending_releases.shift_remove(&popup) {
            return;
        }
        if !entry.popup_mounted {
            if let Some(surface) = self.surface.as_mut() {
                surface.render_popup(popup, &PopupContent::from_location(&entry.location));
            }
            entry.popup_mounted = true;
        }
    }

    /// Auswahl-Callback: liefert den Ort hinter einem angeklickten Marker.
    pub fn location_for_marker(&self, marker: MarkerHandle) -> Option<&Location> {
        self.by_marker
            .get(&marker)
            .and_then(|id| self.entries.get(id))
            .map(|entry| &entry.location)
    }

    /// Entsorgt die Karte: keine weiteren Syncs, Marker abbauen, vorgemerkte
    /// Views freigeben, Karte entsorgen.
    pub fn dispose(&mut self) {
        if self.phase == MapPhase::TornDown {
            return;
        }
        self.phase = MapPhase::TornDown;
        let removed = self.teardown();
        let released = self.flush_deferred_releases();
        if let Some(mut surface) = self.surface.take() {
            surface.dispose();
        }
        self.locations = None;
        log::info!("Karte entsorgt ({removed} Marker, {released} Views)");
    }
}

/// Marker-Beschreibung für einen Ort; `None` wenn nicht platzierbar.
pub fn marker_spec(location: &Location) -> Option<MarkerSpec> {
    let position = location.position()?;
    let appearance = match location
        .custom_icon_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        Some(url) => MarkerAppearance::Icon {
            url: url.to_string(),
            alt: format!("{} icon", location.title),
            size_px: MARKER_ICON_SIZE_PX,
        },
        None => MarkerAppearance::Dot {
            color: category_color(location.category),
            size_px: MARKER_DOT_SIZE_PX,
        },
    };
    Some(MarkerSpec {
        location_id: location.id.clone(),
        position,
        appearance,
        title: location.title.clone(),
    })
}
