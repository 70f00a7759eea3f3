//! Directory creation policy
//!
//! Missing category directories (on the source or the destination side) are
//! either created outright in initialize mode or only after the operator
//! agrees. Declining stops the category.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Asks the operator whether a directory may be created.
pub trait Confirmer {
    /// Return `Ok(true)` to create `path`.
    fn confirm_create(&mut self, category: &str, path: &Path) -> Result<bool>;
}

/// A confirmer that always answers the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirmer for FixedAnswer {
    fn confirm_create(&mut self, _category: &str, _path: &Path) -> Result<bool> {
        Ok(self.0)
    }
}

/// How missing directories are handled.
pub enum CreateDirPolicy {
    /// Create without asking
    Initialize,
    /// Ask first
    Ask(Box<dyn Confirmer>),
}

impl std::fmt::Debug for CreateDirPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialize => write!(f, "Initialize"),
            Self::Ask(_) => write!(f, "Ask"),
        }
    }
}

impl CreateDirPolicy {
    /// Make sure `path` exists. Returns `true` if it had to be created.
    ///
    /// # Errors
    ///
    /// `Error::CreationDeclined` if the operator says no, or an I/O error
    /// if creation fails.
    pub fn ensure_dir(&mut self, category: &str, path: &Path) -> Result<bool> {
        if path.is_dir() {
            return Ok(false);
        }

        let approved = match self {
            Self::Initialize => true,
            Self::Ask(confirmer) => confirmer.confirm_create(category, path)?,
        };
        if !approved {
            tracing::error!("{category}: unable to proceed, {} was not created", path.display());
            return Err(Error::CreationDeclined {
                category: category.to_string(),
                path: path.to_path_buf(),
            });
        }

        fs::create_dir(path).map_err(|e| romsift_fs::Error::io(path, e))?;
        Ok(true)
    }
}
