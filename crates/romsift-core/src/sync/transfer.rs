//! File transfer seam used by the copy phase

use std::path::Path;

use crate::Result;

/// Moves bytes from a source file to a destination file.
pub trait FileTransfer {
    /// Copy `src` over `dst`, returning the number of bytes written.
    fn transfer(&self, src: &Path, dst: &Path) -> Result<u64>;
}

/// Copies file content along with permissions and timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreservingCopy;

impl FileTransfer for PreservingCopy {
    fn transfer(&self, src: &Path, dst: &Path) -> Result<u64> {
        Ok(romsift_fs::io::copy_preserving(src, dst)?)
    }
}
