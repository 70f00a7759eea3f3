//! Core engine for romsift
//!
//! This crate turns a flat directory of per-title files into two disjoint,
//! deterministic lists and mirrors the included files to a destination:
//!
//! - **Classification**: ordered pattern rules over normalized names
//! - **Revision resolution**: only the greatest `(Rev ...)` of a title survives
//! - **List building**: operator overrides merged on top, custom-include wins
//! - **SyncEngine**: hash-verified copy of included files, pruning of excluded ones
//!
//! # Architecture
//!
//! ```text
//!                      romsift-cli
//!                           |
//!                        Curator
//!                      /         \
//!               ListBuilder     SyncEngine
//!            /      |      \         |
//!     RuleSet  Normalizer  Revision  |
//!                           \        /
//!                           ListStore
//!                               |
//!                           romsift-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use romsift_core::{CreateDirPolicy, Curator, Options};
//!
//! fn example() -> romsift_core::Result<()> {
//!     let mut curator = Curator::new("/srv/roms", Options::default(), CreateDirPolicy::Initialize);
//!     let report = curator.process("gba")?;
//!     println!("{} included", report.lists.include.len());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod curator;
pub mod dirs;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod revision;
pub mod rules;
pub mod store;
pub mod sync;

pub use builder::ListBuilder;
pub use config::{ALL_CATEGORIES, Options, RuleToggles};
pub use curator::{CategoryReport, Curator};
pub use dirs::{Confirmer, CreateDirPolicy, FixedAnswer};
pub use error::{Error, Result};
pub use layout::CategoryFile;
pub use normalize::NameNormalizer;
pub use revision::{Resolution, RevisionGroup, RevisionResolver};
pub use rules::{Classification, RuleSet};
pub use store::{CategoryLists, ListStore, Overrides};
pub use sync::{CopyPlan, FileTransfer, PreservingCopy, SyncAction, SyncEngine, SyncReport};
