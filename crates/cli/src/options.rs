use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use dutop_report::SortMode;
use dutop_runtime::PROGRAM_NAME;

/// Parsed command line for `dutop [-ahs] [-l limit] [directory]`.
///
/// clap's automatic help and version flags are disabled so `-h` and all
/// argument errors can follow this program's stream and exit conventions
/// (usage on stderr; status 0 for `-h`, 1 for bad arguments).
#[derive(Debug, Parser)]
#[command(name = "dutop", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Sort by time of last access. The later of `-a`/`-s` wins.
    #[arg(short = 'a', overrides_with = "by_size")]
    pub by_atime: bool,

    /// Sort by size (the default).
    #[arg(short = 's', overrides_with = "by_atime")]
    pub by_size: bool,

    /// Print usage information and exit.
    #[arg(short = 'h')]
    pub help: bool,

    /// Keep only the top N report entries; 0 means unlimited.
    #[arg(short = 'l', value_name = "limit", default_value_t = 0)]
    pub limit: usize,

    /// Directory to analyze.
    pub directory: Option<PathBuf>,
}

impl Cli {
    pub fn sort_mode(&self) -> SortMode {
        if self.by_atime {
            SortMode::Atime
        } else {
            SortMode::Size
        }
    }

    /// Target directory, defaulting to the current working directory.
    pub fn directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Writes the usage text. Callers pick the stream and the exit status.
pub fn print_usage<W: Write>(out: &mut W) {
    let _ = writeln!(
        out,
        "{PROGRAM_NAME}: ranks the files under a directory by disk usage"
    );
    let _ = writeln!(out, "Usage: {PROGRAM_NAME} [-ahs] [-l limit] [directory]\n");
    let _ = writeln!(
        out,
        "If no directory is specified, the current working directory is used.\n"
    );
    let _ = writeln!(out, "Options:");
    let _ = writeln!(
        out,
        "    * -a              Sort the files by time of last access (descending)"
    );
    let _ = writeln!(out, "    * -h              Display help/usage information");
    let _ = writeln!(
        out,
        "    * -l limit        Limit the output to top N files (default=unlimited)"
    );
    let _ = writeln!(
        out,
        "    * -s              Sort the files by size (default, ascending)"
    );
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
