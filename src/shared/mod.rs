//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `map` und `server` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod category_style;
mod directory_scene;
pub mod form;
mod navigation;
pub mod options;

pub use category_style::category_color;
pub use directory_scene::{
    CategoryButton, DirectoryScene, FormScene, ListItem, ListPanel, MapPanel, NavEntry,
};
pub use form::FormField;
pub use navigation::NavTarget;
pub use options::AppOptions;
pub use options::{AccessOptions, FormOptions, MapOptions, ServerOptions, StoreOptions};
