use crate::config::{Heuristics, WalkOptions};
use crate::defaults::DEFAULT_ROOT;
use crate::error::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "testdocs",
    version,
    about = "Add summarizing rustdoc comments to Rust tests that are missing them"
)]

/// The CLI entry point.
pub struct Cli {
    /// Files or directories to scan (defaults to the ./crates workspace).
    #[arg()]
    pub paths: Vec<PathBuf>,
    /// Compute and log the changes without writing any file.
    #[arg(long, action=ArgAction::SetTrue)]
    pub dry_run: bool,
    /// Write a JSON report of every annotated test to FILE ("-" for stdout).
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
    /// Extra or replacement acronyms, e.g. `--acronym grpc=gRPC,os=OS`.
    #[arg(long = "acronym", value_delimiter = ',', value_name = "WORD=FORM")]
    pub acronyms: Vec<String>,
    /// Start from an empty acronym table instead of the built-in one.
    #[arg(long, action=ArgAction::SetTrue)]
    pub no_default_acronyms: bool,
    /// Additional directory names to skip while walking (target and .cargo always are).
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,
}

impl Cli {
    /// Paths to scan; the default workspace root when none were given.
    pub fn targets(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(DEFAULT_ROOT)]
        } else {
            self.paths.clone()
        }
    }

    /// Naming heuristics after applying `--no-default-acronyms` and `--acronym`.
    ///
    /// # Errors
    /// - `Error::InvalidAcronym` for an override not shaped like `WORD=FORM`.
    pub fn heuristics(&self) -> Result<Heuristics> {
        let base = if self.no_default_acronyms {
            Heuristics::default().without_acronyms()
        } else {
            Heuristics::default()
        };
        base.with_acronym_overrides(&self.acronyms)
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::default().with_extra_skipped(&self.exclude_dirs)
    }
}
