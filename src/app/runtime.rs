//! Single-threaded Event-Loop der Verzeichnis-Ansicht.
//!
//! Verarbeitet genau einen Intent pro Turn. Store-Aufrufe und Timer laufen als
//! tokio-Tasks und melden ihr Ergebnis über denselben Kanal zurück.

use super::effects::Effect;
use super::{AppController, AppIntent, AppState};
use crate::map::{MapAccess, MapSurface, SurfaceEvent};
use crate::shared::DirectoryScene;
use crate::store::RecordStore;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Klonbarer Zugang, über den der UI-Host Intents einspeist.
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    sender: mpsc::UnboundedSender<AppIntent>,
}

impl RuntimeHandle {
    /// Reiht einen Intent für einen späteren Turn ein.
    pub fn post(&self, intent: AppIntent) {
        if self.sender.send(intent).is_err() {
            log::debug!("Runtime beendet, Intent verworfen");
        }
    }

    /// Reiht ein Karten-Ereignis ein.
    pub fn post_surface_event(&self, event: SurfaceEvent) {
        self.post(AppIntent::from(event));
    }
}

/// Event-Loop über Controller, State und Record-Store.
pub struct DirectoryRuntime {
    controller: AppController,
    state: AppState,
    store: Arc<dyn RecordStore>,
    sender: mpsc::UnboundedSender<AppIntent>,
    receiver: mpsc::UnboundedReceiver<AppIntent>,
    /// Ob bereits ein `DeferredReleaseDue` unterwegs ist
    release_scheduled: bool,
}

impl DirectoryRuntime {
    pub fn new(state: AppState, store: Arc<dyn RecordStore>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            controller: AppController::new(),
            state,
            store,
            sender,
            receiver,
            release_scheduled: false,
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            sender: self.sender.clone(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Aktuelle Verzeichnis-Szene für den UI-Host.
    pub fn scene(&self) -> DirectoryScene {
        self.controller.build_directory_scene(&self.state)
    }

    /// Initialisiert den Kartenzugang und übergibt die vom Host erzeugte Karte.
    ///
    /// Ohne gültigen Zugang wird keine Karte erzeugt; die Karte geht direkt in
    /// den Fehlerzustand, der Prozess läuft weiter.
    pub fn open_map<F>(&mut self, create_surface: F)
    where
        F: FnOnce(&MapAccess) -> Box<dyn MapSurface>,
    {
        match MapAccess::initialize(&self.state.options.map) {
            Ok(access) => {
                let surface = create_surface(&access);
                self.controller.attach_map_surface(&mut self.state, surface);
            }
            Err(err) => {
                log::error!("Karte nicht verfügbar: {err}");
                self.dispatch(AppIntent::MapFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Verarbeitet einen Intent sofort (ein Turn).
    ///
    /// Unerwartete Fehler landen im Fehler-Panel statt den Loop zu beenden.
    pub fn dispatch(&mut self, intent: AppIntent) {
        if intent == AppIntent::DeferredReleaseDue {
            self.release_scheduled = false;
        }

        if let Err(err) = self.controller.handle_intent(&mut self.state, intent) {
            log::error!("Unerwarteter Fehler: {err:#}");
            self.state.ui.fatal_error = Some(format!("{err:#}"));
        }

        for effect in self.state.take_effects() {
            self.execute(effect);
        }

        if self.state.map.has_pending_releases() && !self.release_scheduled {
            self.release_scheduled = true;
            self.handle().post(AppIntent::DeferredReleaseDue);
        }
    }

    /// Startet einen Seiteneffekt als Task; das Ergebnis kommt als Intent zurück.
    fn execute(&self, effect: Effect) {
        let sender = self.handle();
        match effect {
            Effect::FetchLocations { ticket, query } => {
                let store = Arc::clone(&self.store);
                tokio::spawn(async move {
                    let result = store
                        .select_locations(&query)
                        .await
                        .map_err(|e| e.to_string());
                    sender.post(AppIntent::LocationsLoaded { ticket, result });
                });
            }
            Effect::SubmitLocation { ticket, input } => {
                let store = Arc::clone(&self.store);
                tokio::spawn(async move {
                    let result = store
                        .insert_submission(&input)
                        .await
                        .map_err(|e| e.to_string());
                    sender.post(AppIntent::SubmissionCompleted { ticket, result });
                });
            }
            Effect::ScheduleFormReset { ticket, delay } => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    sender.post(AppIntent::SuccessNoticeElapsed { ticket });
                });
            }
        }
    }

    /// Wartet auf den nächsten Intent und verarbeitet ihn.
    pub async fn turn(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(intent) => {
                self.dispatch(intent);
                true
            }
            None => false,
        }
    }

    /// Verarbeitet einen bereits eingereihten Intent, ohne zu warten.
    pub fn try_turn(&mut self) -> bool {
        match self.receiver.try_recv() {
            Ok(intent) => {
                self.dispatch(intent);
                true
            }
            Err(_) => false,
        }
    }

    /// Verarbeitet alle sofort verfügbaren Intents; gibt deren Anzahl zurück.
    pub fn drain_ready(&mut self) -> usize {
        let mut turns = 0;
        while self.try_turn() {
            turns += 1;
        }
        turns
    }

    /// Läuft, bis `shutdown` fertig ist. Entsorgt danach die Karte.
    pub async fn run<S>(mut self, shutdown: S) -> AppState
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                more = self.turn() => {
                    if !more {
                        break;
                    }
                }
            }
        }
        self.dispatch(AppIntent::MapDisposed);
        self.state
    }
}
