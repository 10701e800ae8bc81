//! Kulturkarte Kansas City.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod map;
pub mod server;
pub mod shared;
pub mod store;

pub use app::{AppCommand, AppController, AppIntent, AppState, DirectoryRuntime, UiState};
pub use core::{Location, LocationCategory, Profile, Session, SubmissionInput, SubmissionRecord};
pub use map::{MapPhase, MapSurface, MarkerSync, RecordingSurface};
pub use server::ServerState;
pub use shared::{AppOptions, DirectoryScene, FormScene, NavTarget};
pub use store::{LocationQuery, MemoryStore, RecordStore, RestStore, StoreError};
