//! Typed film model
//!
//! This module provides:
//! - Closed enums for film type, format and log events, serialized as
//!   their wire display values
//! - The `FilmRoll` record and its append-only `LogEvent` entries
//! - Derivation of the canonical [`EnumTable`](crate::enums::EnumTable)
//!   from the recognized enum definitions

pub mod film;

pub use film::{film_enum_table, FilmEvent, FilmFormat, FilmRoll, FilmType, LogEvent};
