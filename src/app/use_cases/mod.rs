//! Use-Cases der Application-Layer-Orchestrierung.

pub mod fetch_locations;
pub mod form_validation;
pub mod search;
pub mod select_location;
pub mod submit_location;
