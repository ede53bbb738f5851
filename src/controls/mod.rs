//! Contains camera controls.

/// First person camera controls.
pub mod first_person;

pub use self::first_person::{FirstPerson, LookControl};
