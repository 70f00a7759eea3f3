//! Shared test utilities for the romsift workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`library`]: [`Library`] builder with a temporary base directory, a
//!   destination, and helpers to populate and inspect categories

pub mod library;

pub use library::Library;
