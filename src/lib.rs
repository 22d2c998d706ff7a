//! film-inventory - Personal Film Photography Inventory
//!
//! This crate tracks a catalog of film rolls (brand, type, format, ISO,
//! acquisition/expiry dates) with an append-only event log per roll.
//! Persistence and auth are delegated to a hosted backend exposing a
//! PostgREST-style REST API; this layer is typed models plus thin CRUD
//! wrappers over that API.
//!
//! The one seam with real design content is the enum value/key mapper:
//! enum-valued fields travel as human-readable display strings on the wire
//! ("Black and White", "Acquired") but are addressed by symbolic keys in
//! code and forms ("black_and_white", "acquired"). [`enums`] converts
//! between the two, recursively across nested records and collections.
//!
//! ## Quick Start
//!
//! ```rust
//! use film_inventory::enums::convert_enum_values_to_keys;
//! use film_inventory::types::film_enum_table;
//! use serde_json::json;
//!
//! let table = film_enum_table();
//! let row = json!({ "id": 1, "film_type": "Color", "name": "Roll A" });
//! let converted = convert_enum_values_to_keys(&row, &table);
//! assert_eq!(converted["film_type"], json!("color"));
//! ```

// Core error handling
pub mod error;

// Enum value/key mapping - the wire/form representation seam
pub mod enums;

// Typed film model and the canonical enum table
pub mod types;

// Hosted-backend configuration and CRUD client
pub mod api;

pub use error::{Error, Result};
