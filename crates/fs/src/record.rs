use std::path::PathBuf;

/// One scanned regular file.
///
/// Built by the walker right after a successful metadata read and never
/// mutated afterwards; the report only reads these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path as joined during traversal.
    pub path: PathBuf,
    /// Size in bytes at scan time.
    pub size: u64,
    /// Last access time, seconds since the Unix epoch.
    /// 0 when the platform or filesystem cannot report it.
    pub atime_secs: u64,
}
