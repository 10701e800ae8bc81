//! Karten-Schicht: Zugang, Widget-Schnittstelle und Marker-Synchronisation.

mod access;
mod popup;
mod recording;
mod surface;
pub mod sync;

pub use access::{MapAccess, MapInitError};
pub use popup::{directions_url, normalize_website, phone_href, PopupContent, PopupLink};
pub use recording::RecordingSurface;
pub use surface::{
    MapSurface, MarkerAppearance, MarkerHandle, MarkerSpec, PopupHandle, SurfaceEvent,
};
pub use sync::{marker_spec, MapPhase, MarkerSync, MAP_FAILED_MESSAGE};
