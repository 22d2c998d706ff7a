//! Hosted-backend integration
//!
//! This module provides:
//! - Configuration for the backend endpoint and API key
//! - An async CRUD client for the `film_collection` table
//!
//! The backend speaks a PostgREST-style REST dialect; enum-valued columns
//! carry display strings on the wire (see [`crate::enums`] for the seam
//! back to symbolic keys).

pub mod client;
pub mod config;

pub use client::FilmCollectionClient;
pub use config::BackendConfig;
