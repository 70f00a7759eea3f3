//! SyncEngine implementation
//!
//! The SyncEngine makes a destination category directory converge on the
//! generated lists of its source category: included files are copied and
//! hash-verified, excluded files are pruned.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use romsift_fs::{compute_file_checksum, io};

use crate::dirs::CreateDirPolicy;
use crate::store::ListStore;
use crate::{Error, Result};

use super::assets::{self, AssetKind};
use super::report::{SyncAction, SyncReport};
use super::transfer::{FileTransfer, PreservingCopy};

/// Files the copy phase will visit, with the asset directories they need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPlan {
    /// Included entries plus companion asset paths, sorted
    pub entries: BTreeSet<String>,
    /// Asset kinds with at least one file in the plan
    pub asset_dirs: Vec<AssetKind>,
}

/// Engine for mirroring one category to a destination
pub struct SyncEngine {
    category: String,
    source: ListStore,
    destination: PathBuf,
    asset_kinds: Vec<AssetKind>,
    transfer: Box<dyn FileTransfer>,
}

impl SyncEngine {
    /// Create an engine mirroring `source` into `destination_root/<category>`.
    pub fn new(category: impl Into<String>, source: ListStore, destination_root: &Path) -> Self {
        let category = category.into();
        let destination = destination_root.join(&category);
        Self {
            category,
            source,
            destination,
            asset_kinds: vec![assets::IMAGES, assets::MANUALS],
            transfer: Box::new(PreservingCopy),
        }
    }

    /// Choose which companion assets ride along with included entries.
    pub fn with_assets(mut self, images: bool, manuals: bool) -> Self {
        self.asset_kinds.clear();
        if images {
            self.asset_kinds.push(assets::IMAGES);
        }
        if manuals {
            self.asset_kinds.push(assets::MANUALS);
        }
        self
    }

    /// Replace the file transfer implementation.
    pub fn with_transfer(mut self, transfer: Box<dyn FileTransfer>) -> Self {
        self.transfer = transfer;
        self
    }

    /// The destination category directory.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Run both phases against the persisted lists.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal condition; earlier actions stay applied.
    pub fn run(&self, policy: &mut CreateDirPolicy) -> Result<SyncReport> {
        let lists = self.source.read_lists()?;
        let mut report = SyncReport::new(&self.category);
        self.copy_included(&lists.include, policy, &mut report)?;
        self.delete_excluded(&lists.exclude, &mut report)?;
        Ok(report)
    }

    /// Work out the copy set for `include`, including companion assets.
    pub fn copy_plan(&self, include: &[String]) -> Result<CopyPlan> {
        let mut plan = CopyPlan {
            entries: include.iter().cloned().collect(),
            asset_dirs: Vec::new(),
        };

        for &kind in &self.asset_kinds {
            match assets::find_assets(self.source.root(), kind, include)? {
                Some(found) if !found.is_empty() => {
                    plan.asset_dirs.push(kind);
                    plan.entries.extend(found);
                }
                Some(_) => {}
                None => tracing::warn!(
                    "{}: not copying {} because dir does not exist: {}",
                    self.category,
                    kind.label,
                    self.source.root().join(kind.dir).display()
                ),
            }
        }

        Ok(plan)
    }

    /// Copy phase: bring every included file (and its assets) up to date.
    pub fn copy_included(
        &self,
        include: &[String],
        policy: &mut CreateDirPolicy,
        report: &mut SyncReport,
    ) -> Result<()> {
        if policy.ensure_dir(&self.category, &self.destination)? {
            report.record(SyncAction::Created {
                path: self.destination.clone(),
            });
        }

        let plan = self.copy_plan(include)?;
        for kind in &plan.asset_dirs {
            let dir = self.destination.join(kind.dir);
            if !dir.is_dir() {
                fs::create_dir(&dir).map_err(|e| romsift_fs::Error::io(&dir, e))?;
                report.record(SyncAction::Created { path: dir });
            }
        }

        if !plan.entries.is_empty() {
            tracing::info!(
                "{}: updating whitelisted files in {}, large files may take a while...",
                self.category,
                self.destination.display()
            );
        }
        for entry in &plan.entries {
            self.sync_file(entry, report)?;
        }

        tracing::info!("{}: whitelisted destination files are up-to-date", self.category);
        Ok(())
    }

    /// Delete phase: remove excluded files present at the destination.
    pub fn delete_excluded(&self, exclude: &[String], report: &mut SyncReport) -> Result<()> {
        if !self.destination.is_dir() {
            tracing::error!(
                "{}: path does NOT exist, exiting!: {}",
                self.category,
                self.destination.display()
            );
            return Err(Error::DestinationNotFound {
                path: self.destination.clone(),
            });
        }

        let present: BTreeSet<String> = io::list_files(&self.destination)?.into_iter().collect();
        for entry in exclude.iter().filter(|e| present.contains(*e)) {
            if io::remove_file_if_exists(&self.destination.join(entry))? {
                report.record(SyncAction::Deleted {
                    entry: entry.clone(),
                });
            }
        }

        tracing::info!("{}: blacklisted destination files are up-to-date", self.category);
        Ok(())
    }

    /// Entries are hashed one at a time, each source read whole.
    fn sync_file(&self, entry: &str, report: &mut SyncReport) -> Result<()> {
        let src = self.source.root().join(entry);
        let dst = self.destination.join(entry);

        let expected = compute_file_checksum(&src)?;
        if dst.is_file() && compute_file_checksum(&dst)? == expected {
            report.record(SyncAction::Verified {
                entry: entry.to_string(),
            });
            return Ok(());
        }

        self.transfer.transfer(&src, &dst)?;

        let actual = compute_file_checksum(&dst)?;
        if actual != expected {
            tracing::error!(
                "{}: hash sum mismatch (I/O error?), exiting!: {}",
                self.category,
                entry
            );
            return Err(Error::HashMismatch {
                path: dst,
                expected,
                actual,
            });
        }

        report.record(SyncAction::Copied {
            entry: entry.to_string(),
        });
        Ok(())
    }
}
