use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{debug, warn};

mod options;

use dutop_elist::EList;
use dutop_fs::{FileRecord, ScanStats, scan_tree};
use dutop_report::write_report;
use dutop_runtime::{PROGRAM_NAME, logging};
use options::{Cli, print_usage};

fn main() -> ExitCode {
    logging::init().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let mut stderr = io::stderr().lock();
            let rendered = err.to_string();
            let diagnostic = rendered.lines().next().unwrap_or("invalid arguments");
            let _ = writeln!(stderr, "{diagnostic}");
            print_usage(&mut stderr);
            return ExitCode::from(1);
        }
    };

    if cli.help {
        print_usage(&mut io::stderr().lock());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let directory = cli.directory();
    let mode = cli.sort_mode();

    debug!(
        "sorting by {:?}, limit {}, directory {:?}",
        mode, cli.limit, directory
    );

    let mut files: EList<FileRecord> = EList::with_capacity(0)?;
    let mut stats = ScanStats::default();

    scan_tree(&directory, &mut files, &mut stats)
        .with_context(|| format!("cannot analyze {}", directory.display()))?;

    debug!("scan found {} file(s)", stats.scanned_files);
    if stats.skipped_dirs > 0 || stats.skipped_files > 0 {
        warn!(
            "skipped {} unreadable director(y/ies) and {} unreadable file(s)",
            stats.skipped_dirs, stats.skipped_files
        );
    }

    let mut out = io::stdout().lock();
    write_report(&mut out, &mut files, mode, cli.limit)?;

    Ok(())
}
