//! Atomic I/O operations with file locking, plus the directory and copy
//! primitives the list builder and sync engine are built on.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use filetime::{FileTime, set_file_times};
use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy so that readers see either the old
/// content or the new content, never a partial write.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read a newline-delimited list file.
///
/// Trailing `\r` is stripped and blank lines are skipped; every other line is
/// returned verbatim.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_text(path)?;
    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Like [`read_lines`], but a missing file yields `None` instead of an error.
pub fn read_lines_if_exists(path: &Path) -> Result<Option<Vec<String>>> {
    match read_lines(path) {
        Ok(lines) => Ok(Some(lines)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Atomically write one line per item, each terminated by `\n`.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    write_atomic(path, content.as_bytes())
}

/// List the names of regular files directly under `dir`, sorted.
///
/// Subdirectories are skipped. Names that are not valid UTF-8 cannot be
/// written to a list file, so they are skipped with a warning.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!("skipping non UTF-8 file name: {}", raw.to_string_lossy());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Copy `src` to `dst`, carrying over permissions and access/modification
/// times. Returns the number of bytes copied.
pub fn copy_preserving(src: &Path, dst: &Path) -> Result<u64> {
    let bytes = fs::copy(src, dst).map_err(|e| Error::io(dst, e))?;

    let metadata = fs::metadata(src).map_err(|e| Error::io(src, e))?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);
    set_file_times(dst, accessed, modified).map_err(|e| Error::io(dst, e))?;

    Ok(bytes)
}

/// Remove a file. Returns `false` if it was already gone.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}
