//! Report types for the sync engine

use std::fmt;
use std::path::PathBuf;

/// One state transition performed during a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// A destination directory was created
    Created { path: PathBuf },
    /// A file was copied and its hash verified
    Copied { entry: String },
    /// The destination already matched the source
    Verified { entry: String },
    /// An excluded file was removed from the destination
    Deleted { entry: String },
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { path } => write!(f, "created {}", path.display()),
            Self::Copied { entry } => write!(f, "copied {entry}"),
            Self::Verified { entry } => write!(f, "verified {entry}"),
            Self::Deleted { entry } => write!(f, "deleted {entry}"),
        }
    }
}

/// Everything a sync did to one destination category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Category the report belongs to
    pub category: String,
    /// Actions in the order they happened
    pub actions: Vec<SyncAction>,
}

impl SyncReport {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            actions: Vec::new(),
        }
    }

    /// Record an action and log it.
    pub fn record(&mut self, action: SyncAction) {
        tracing::info!("{}: {}", self.category, action);
        self.actions.push(action);
    }

    pub fn copied(&self) -> usize {
        self.count(|a| matches!(a, SyncAction::Copied { .. }))
    }

    pub fn verified(&self) -> usize {
        self.count(|a| matches!(a, SyncAction::Verified { .. }))
    }

    pub fn deleted(&self) -> usize {
        self.count(|a| matches!(a, SyncAction::Deleted { .. }))
    }

    pub fn created(&self) -> usize {
        self.count(|a| matches!(a, SyncAction::Created { .. }))
    }

    /// True if the run changed anything at the destination.
    pub fn has_writes(&self) -> bool {
        self.copied() + self.deleted() + self.created() > 0
    }

    fn count(&self, pred: impl Fn(&SyncAction) -> bool) -> usize {
        self.actions.iter().filter(|a| pred(a)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_track_actions() {
        let mut report = SyncReport::new("gba");
        report.record(SyncAction::Copied {
            entry: "A (USA).gba".into(),
        });
        report.record(SyncAction::Verified {
            entry: "B (USA).gba".into(),
        });
        report.record(SyncAction::Verified {
            entry: "C (USA).gba".into(),
        });

        assert_eq!(report.copied(), 1);
        assert_eq!(report.verified(), 2);
        assert_eq!(report.deleted(), 0);
        assert!(report.has_writes());
    }

    #[test]
    fn verified_only_run_has_no_writes() {
        let mut report = SyncReport::new("gba");
        report.record(SyncAction::Verified {
            entry: "A (USA).gba".into(),
        });
        assert!(!report.has_writes());
    }

    #[test]
    fn actions_render_as_log_lines() {
        let action = SyncAction::Deleted {
            entry: "Tetris (Japan).gb".into(),
        };
        assert_eq!(action.to_string(), "deleted Tetris (Japan).gb");
    }
}
