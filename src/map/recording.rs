//! Headless `MapSurface`, das alle Aufrufe protokolliert.
//!
//! Dient als Karte ohne UI-Host (Tests, Benchmarks). Klone teilen
//! sich dasselbe Protokoll, sodass der Aufrufer nach der Übergabe an
//! `MarkerSync` weiter beobachten kann.

use super::{MapSurface, MarkerHandle, MarkerSpec, PopupContent, PopupHandle};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct SurfaceLog {
    next_id: u64,
    markers: BTreeMap<MarkerHandle, MarkerSpec>,
    /// Popup → zugehöriger Marker
    popups: BTreeMap<PopupHandle, MarkerHandle>,
    live_views: BTreeSet<PopupHandle>,
    add_calls: usize,
    render_calls: usize,
    release_calls: usize,
    double_releases: usize,
    disposed: bool,
}

impl SurfaceLog {
    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Protokollierende Karte.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, SurfaceLog> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Anzahl der Marker, die aktuell auf der Karte liegen.
    pub fn live_marker_count(&self) -> usize {
        self.log().markers.len()
    }

    /// Anzahl gerenderter, nicht freigegebener Popup-Views.
    pub fn live_view_count(&self) -> usize {
        self.log().live_views.len()
    }

    pub fn add_calls(&self) -> usize {
        self.log().add_calls
    }

    pub fn render_calls(&self) -> usize {
        self.log().render_calls
    }

    pub fn release_calls(&self) -> usize {
        self.log().release_calls
    }

    /// Freigaben einer View, die gar nicht (mehr) gerendert war.
    pub fn double_releases(&self) -> usize {
        self.log().double_releases
    }

    pub fn is_disposed(&self) -> bool {
        self.log().disposed
    }

    /// Marker-Titel in Erstellungsreihenfolge.
    pub fn titles(&self) -> Vec<String> {
        self.log().markers.values().map(|s| s.title.clone()).collect()
    }

    /// Orts-IDs der lebenden Marker in Erstellungsreihenfolge.
    pub fn location_ids(&self) -> Vec<String> {
        self.log()
            .markers
            .values()
            .map(|s| s.location_id.clone())
            .collect()
    }

    /// Marker-Handle für eine Orts-ID, falls ein lebender Marker existiert.
    pub fn marker_handle_for(&self, location_id: &str) -> Option<MarkerHandle> {
        self.log()
            .markers
            .iter()
            .find(|(_, spec)| spec.location_id == location_id)
            .map(|(handle, _)| *handle)
    }

    /// Popup-Handle am Marker einer Orts-ID.
    pub fn popup_handle_for(&self, location_id: &str) -> Option<PopupHandle> {
        let marker = self.marker_handle_for(location_id)?;
        self.log()
            .popups
            .iter()
            .find(|(_, m)| **m == marker)
            .map(|(popup, _)| *popup)
    }

    /// Alle Popups lebender Marker.
    pub fn popup_handles(&self) -> Vec<PopupHandle> {
        self.log().popups.keys().copied().collect()
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, spec: &MarkerSpec) -> MarkerHandle {
        let mut log = self.log();
        let handle = MarkerHandle(log.next());
        log.add_calls += 1;
        log.markers.insert(handle, spec.clone());
        handle
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        let mut log = self.log();
        log.markers.remove(&marker);
        log.popups.retain(|_, m| *m != marker);
    }

    fn attach_popup(&mut self, marker: MarkerHandle, _content: &PopupContent) -> PopupHandle {
        let mut log = self.log();
        let handle = PopupHandle(log.next());
        log.popups.insert(handle, marker);
        log.live_views.insert(handle);
        handle
    }

    fn render_popup(&mut self, popup: PopupHandle, _content: &PopupContent) {
        let mut log = self.log();
        log.render_calls += 1;
        log.live_views.insert(popup);
    }

    fn release_popup(&mut self, popup: PopupHandle) {
        let mut log = self.log();
        log.release_calls += 1;
        if !log.live_views.remove(&popup) {
            log.double_releases += 1;
        }
    }

    fn dispose(&mut self) {
        let mut log = self.log();
        log.markers.clear();
        log.popups.clear();
        log.disposed = true;
    }
}
