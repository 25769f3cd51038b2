use std::cmp::Ordering;
use std::io::{self, Write};

use dutop_elist::EList;
use dutop_fs::FileRecord;

use crate::format::{human_size, simple_date};

/// Decimal places used for sizes in report lines.
pub const SIZE_DECIMALS: usize = 1;

/// Which field orders the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Ascending size; largest presented first.
    #[default]
    Size,
    /// Ascending last-access time; most recently accessed presented first.
    Atime,
}

impl SortMode {
    pub fn comparator(self) -> fn(&FileRecord, &FileRecord) -> Ordering {
        match self {
            SortMode::Size => by_size,
            SortMode::Atime => by_atime,
        }
    }
}

/// Ascending by size; equal sizes fall back to *descending* path order.
///
/// The reversed tie-break relative to [`by_atime`] is long-standing
/// observable behavior, kept as-is. Paths compare as raw bytes.
pub fn by_size(a: &FileRecord, b: &FileRecord) -> Ordering {
    a.size
        .cmp(&b.size)
        .then_with(|| b.path.as_os_str().cmp(a.path.as_os_str()))
}

/// Ascending by access time; equal times fall back to ascending path order.
pub fn by_atime(a: &FileRecord, b: &FileRecord) -> Ordering {
    a.atime_secs
        .cmp(&b.atime_secs)
        .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
}

/// Sorts `files` in place and writes the ranked report to `out`.
///
/// The list is sorted ascending by the selected mode and printed from the
/// top index downwards, so the largest (or most recently accessed) entries
/// come out first. `limit == 0` prints everything; a limit past the end is
/// clamped. Note the list really is left in ascending order afterwards:
/// the descending presentation lives entirely in this reversed iteration.
pub fn write_report<W: Write>(
    out: &mut W,
    files: &mut EList<FileRecord>,
    mode: SortMode,
    limit: usize,
) -> io::Result<()> {
    files.sort_unstable_by(mode.comparator());

    let total = files.len();
    let shown = if limit == 0 { total } else { limit.min(total) };

    for idx in (total - shown..total).rev() {
        if let Some(rec) = files.get(idx) {
            writeln!(
                out,
                "{:>10} | {:>11} | {}",
                human_size(rec.size as f64, SIZE_DECIMALS),
                simple_date(rec.atime_secs),
                rec.path.display()
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
