//! Hash-verified mirroring of a category to a destination
//!
//! This module provides:
//! - **copy phase**: copy missing or changed included files, verify by hash
//! - **delete phase**: prune excluded files from the destination
//! - **assets**: companion images and manuals for included entries

pub mod assets;
mod engine;
mod report;
mod transfer;

pub use engine::{CopyPlan, SyncEngine};
pub use report::{SyncAction, SyncReport};
pub use transfer::{FileTransfer, PreservingCopy};
