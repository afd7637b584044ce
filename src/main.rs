mod defaults;

mod asserts;
mod body;
mod classify;
mod cli;
mod config;
mod delims;
mod discover;
mod error;
mod humanize;
mod locate;
mod logging;
mod model;
mod patch;
mod regexes;
mod synth;

use crate::cli::Cli;
use crate::discover::collect_source_files;
use crate::error::{Error, Result};
use crate::logging::init_tracing;
use crate::model::RunReport;
use crate::patch::patch_file;

use clap::Parser;
use tracing::{debug, error, info, warn};

use std::io::Write;
use std::path::Path;

/// Entry point for the `testdocs` CLI.
///
/// Expands the given paths into `.rs` files, annotates each one in turn, logs a
/// run summary, and optionally writes a JSON report. Tests skipped for
/// structural reasons only show up in the logs and report; the exit status is
/// zero whenever the run completes.
///
/// # Errors
/// - `Error::InvalidAcronym` for a malformed `--acronym` value.
/// - `Error::Walk` when a directory cannot be traversed.
/// - `Error::Io` when a source file or the report cannot be read or written.
/// - `Error::Json` when the report cannot be serialized.
fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed CLI");

    let heuristics = cli.heuristics()?;
    let walk = cli.walk_options();
    let targets = cli.targets();
    info!(targets = targets.len(), dry_run = cli.dry_run, "run: starting");

    let files = collect_source_files(&targets, &walk)?;
    debug!(?files, "files to scan");
    if files.is_empty() {
        warn!(?targets, "no source files found");
    }

    let mut run = RunReport::new(cli.dry_run);
    for file in &files {
        let report = patch_file(file, &heuristics, cli.dry_run).inspect_err(|e| {
            error!(error = %e, file = %file.display(), "annotation failed");
        })?;
        run.record(file, report);
    }

    let s = &run.summary;
    info!(
        files_scanned = s.files_scanned,
        files_changed = s.files_changed,
        tests_annotated = s.tests_annotated,
        tests_already_documented = s.tests_already_documented,
        tests_skipped = s.tests_skipped,
        "run: completed"
    );
    if s.tests_skipped > 0 {
        warn!(
            tests_skipped = s.tests_skipped,
            "some tests were skipped because their signature or body could not be located"
        );
    }

    if let Some(path) = &cli.report {
        write_report(path, &run)?;
    }
    Ok(())
}

/// Serializes `run` as pretty JSON to `path`, or to stdout when `path` is `-`.
fn write_report(path: &Path, run: &RunReport) -> Result<()> {
    let json = serde_json::to_vec_pretty(run).map_err(|e| Error::Json {
        context: "serialize run report",
        source: e,
    })?;

    if path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&json)
            .and_then(|_| stdout.write_all(b"\n"))
            .map_err(|e| Error::Io {
                path: None,
                source: e,
            })?;
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::Io {
            path: Some(parent.to_path_buf()),
            source: e,
        })?;
    }
    std::fs::write(path, json).map_err(|e| Error::Io {
        path: Some(path.to_path_buf()),
        source: e,
    })?;
    info!(file = %path.display(), "wrote report");
    Ok(())
}
