//! Core-Domänentypen: Orte, Kategorien, Einreichungen, Profile.

pub mod location;
pub mod profile;
pub mod submission;

pub use location::{LngLat, Location, LocationCategory, UnknownCategory};
pub use profile::{Profile, Session};
pub use submission::{NewSubmissionRow, ReviewStatus, SubmissionInput, SubmissionRecord};
