use std::{
    fmt,
    fs::read_dir,
    io,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use log::{debug, warn};

use dutop_elist::{EList, ElistError};

use crate::record::FileRecord;

/// Counters for entries the scan had to pass over.
///
/// The scan is best-effort below its root: unreadable subdirectories and
/// files whose metadata cannot be read are counted here instead of failing
/// the whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Regular files recorded.
    pub scanned_files: usize,
    /// Subdirectories that could not be opened.
    pub skipped_dirs: usize,
    /// Entries skipped because their type or metadata could not be read.
    pub skipped_files: usize,
}

#[derive(Debug)]
pub enum ScanError {
    /// The root directory could not be read.
    Root(io::Error),
    /// The result list could not grow; the scan cannot continue.
    List(ElistError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Root(e) => write!(f, "cannot read directory: {e}"),
            ScanError::List(e) => write!(f, "cannot store scan results: {e}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Root(e) => Some(e),
            ScanError::List(e) => Some(e),
        }
    }
}

/// Recursively collects one [`FileRecord`] per regular file under `dir`.
///
/// The root must be readable; everything below it is best-effort. An
/// unreadable subdirectory abandons that subtree only, and a file whose
/// metadata cannot be read is skipped, both logged and counted in `stats`.
/// A full result list that cannot grow aborts the scan, since results
/// would otherwise be silently incomplete.
///
/// Entries are classified by the directory entry's own type information,
/// so symbolic links show up as links and are never followed. Cyclic links
/// therefore cannot recurse. Traversal order is whatever the filesystem
/// yields; callers sort afterwards.
pub fn scan_tree(
    dir: &Path,
    files: &mut EList<FileRecord>,
    stats: &mut ScanStats,
) -> Result<(), ScanError> {
    let entries = read_dir(dir).map_err(ScanError::Root)?;

    for entry_res in entries {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[scan] error reading entry in {:?}: {e}", dir);
                stats.skipped_files += 1;
                continue;
            }
        };

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!("[scan] file_type({:?}) failed: {e}", entry.path());
                stats.skipped_files += 1;
                continue;
            }
        };

        let full_path = entry.path();

        if file_type.is_dir() {
            match scan_tree(&full_path, files, stats) {
                Ok(()) => {}
                Err(ScanError::Root(e)) => {
                    // Contained here: one unreadable subtree does not
                    // abort the rest of the scan.
                    warn!("[scan] read_dir({:?}) failed: {e}", full_path);
                    stats.skipped_dirs += 1;
                }
                Err(fatal @ ScanError::List(_)) => return Err(fatal),
            }
        } else if file_type.is_file() {
            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    warn!("[scan] metadata({:?}) failed: {e}", full_path);
                    stats.skipped_files += 1;
                    continue;
                }
            };

            let record = FileRecord {
                path: full_path,
                size: metadata.len(),
                atime_secs: to_unix_secs(metadata.accessed().ok()),
            };

            files.push(record).map_err(ScanError::List)?;
            stats.scanned_files += 1;
        } else {
            // Symlinks, sockets, devices: left alone by policy.
            debug!("[scan] skipping non-regular entry {:?}", full_path);
        }
    }

    Ok(())
}

fn to_unix_secs(t: Option<SystemTime>) -> u64 {
    t.and_then(|tt| tt.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
