//! Per-category orchestration
//!
//! A [`Curator`] runs the whole pipeline for one category at a time:
//! ensure the source directory, build and persist the lists, then (when a
//! destination is configured) copy and prune.

use std::path::{Path, PathBuf};

use crate::builder::ListBuilder;
use crate::config::Options;
use crate::dirs::CreateDirPolicy;
use crate::store::{CategoryLists, ListStore};
use crate::sync::{SyncEngine, SyncReport};
use crate::{Error, Result};

/// Outcome of processing one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: String,
    /// Whether the source category directory had to be created
    pub created_source: bool,
    pub lists: CategoryLists,
    /// Present only when a destination is configured
    pub sync: Option<SyncReport>,
}

/// Drives list building and syncing across categories.
#[derive(Debug)]
pub struct Curator {
    base_dir: PathBuf,
    options: Options,
    builder: ListBuilder,
    policy: CreateDirPolicy,
}

impl Curator {
    /// Create a curator rooted at `base_dir`.
    ///
    /// `options.base_dir` is ignored in favor of the explicit argument.
    pub fn new(base_dir: impl Into<PathBuf>, options: Options, policy: CreateDirPolicy) -> Self {
        let builder = ListBuilder::new(options.rules);
        Self {
            base_dir: base_dir.into(),
            options,
            builder,
            policy,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Process one category start to finish.
    ///
    /// # Errors
    ///
    /// Any error aborts the remaining phases of this category only; the
    /// caller decides whether to continue with the next one.
    pub fn process(&mut self, category: &str) -> Result<CategoryReport> {
        if !self.base_dir.is_dir() {
            return Err(Error::BaseDirNotFound {
                path: self.base_dir.clone(),
            });
        }

        let source_dir = self.base_dir.join(category);
        let created_source = self.policy.ensure_dir(category, &source_dir)?;
        if created_source {
            tracing::info!("{category}: created: {}", source_dir.display());
        }

        let store = ListStore::new(&source_dir);
        let lists = self.builder.build(category, &store)?;

        let sync = match &self.options.destination_dir {
            Some(destination) => {
                let engine = SyncEngine::new(category, store, destination)
                    .with_assets(!self.options.no_images, !self.options.no_manuals);
                Some(engine.run(&mut self.policy)?)
            }
            None => None,
        };

        Ok(CategoryReport {
            category: category.to_string(),
            created_source,
            lists,
            sync,
        })
    }
}
