//! Filesystem primitives for romsift
//!
//! Provides atomic list persistence, content checksums and metadata-preserving
//! copies. Everything above this crate deals in entry names; everything in it
//! deals in paths.

pub mod checksum;
pub mod error;
pub mod io;

pub use checksum::{compute_content_checksum, compute_file_checksum};
pub use error::{Error, Result};
