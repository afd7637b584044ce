use crate::body::extract_body;
use crate::classify::{classify, LineKind};
use crate::config::Heuristics;
use crate::error::{Error, Result};
use crate::locate::{find_signature, has_doc_comment, indentation, marker_block};
use crate::model::{
    AnnotatedTest, Body, FileReport, FunctionDescriptor, MarkerBlock, SourceFile,
};
use crate::regexes::re_fn_name;
use crate::synth::build_doc_comment;

use tracing::{debug, info, instrument, warn};

use std::fs;
use std::path::{Path, PathBuf};

/// A doc block to splice in front of line `at` of the original file.
#[derive(Debug)]
pub struct Insertion {
    at: usize,
    lines: Vec<String>,
}

/// Re-threads `insertions` into the original lines.
///
/// Every original line is copied verbatim and in order; an insertion's lines
/// land immediately before the original line it targets. Insertions at or past
/// the end are appended.
fn apply_insertions(lines: &[&str], mut insertions: Vec<Insertion>) -> Vec<String> {
    insertions.sort_by_key(|ins| ins.at);
    let extra: usize = insertions.iter().map(|ins| ins.lines.len()).sum();
    let mut out = Vec::with_capacity(lines.len() + extra);

    let mut pending = insertions.into_iter().peekable();
    for (idx, line) in lines.iter().enumerate() {
        while let Some(ins) = pending.next_if(|ins| ins.at <= idx) {
            out.extend(ins.lines);
        }
        out.push(line.to_string());
    }
    for ins in pending {
        out.extend(ins.lines);
    }
    out
}

/// What to do about one test marker block.
enum Plan {
    Documented,
    NoSignature,
    Unterminated,
    Insert(Insertion, AnnotatedTest),
}

/// Gathers what synthesis needs to know about the test whose marker block is
/// `block` and whose `fn` line is `signature_line`.
///
/// # Returns
/// A `FunctionDescriptor` with:
/// - `name`: the identifier after `fn` (a leading `r#` is dropped), or
///   [`Heuristics::fn_name`] when the line has no recognisable name.
/// - `indent`: the leading whitespace of the block's first line.
/// - `body`: the brace-delimited body, which may be `Empty` or `Unterminated`.
///
/// # Notes
/// - Both indices must be in bounds for `lines`; callers obtain them from
///   [`marker_block`] and [`find_signature`].
pub fn describe_function(
    lines: &[&str],
    block: MarkerBlock,
    signature_line: usize,
    heuristics: &Heuristics,
) -> FunctionDescriptor {
    let name = re_fn_name()
        .captures(lines[signature_line])
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| heuristics.fn_name.clone());
    FunctionDescriptor {
        name,
        indent: indentation(lines[block.start]).to_string(),
        signature_line,
        body: extract_body(lines, signature_line),
    }
}

fn plan_test(lines: &[&str], block: MarkerBlock, heuristics: &Heuristics) -> Plan {
    if has_doc_comment(lines, block) {
        return Plan::Documented;
    }
    let Some(sig) = find_signature(lines, block) else {
        return Plan::NoSignature;
    };
    let func = describe_function(lines, block, sig, heuristics);
    if let Body::Unterminated = func.body {
        return Plan::Unterminated;
    }
    if let Body::Span {
        open_line,
        close_line,
        ..
    } = func.body
    {
        debug!(
            name = %func.name,
            signature_line = func.signature_line,
            open_line,
            close_line,
            "located test body"
        );
    }

    let doc = build_doc_comment(&func.indent, &func.name, func.body.text(), heuristics);
    let test = AnnotatedTest {
        name: func.name,
        line: block.start + 1,
        target: doc.target,
        assertions: doc.assertions,
        doc: doc.lines.clone(),
    };
    Plan::Insert(
        Insertion {
            at: block.start,
            lines: doc.lines,
        },
        test,
    )
}

/// Result of annotating one file's text in memory.
#[derive(Debug)]
pub struct Annotated {
    /// The rewritten text, or `None` when no test needed a doc block.
    pub text: Option<String>,
    pub report: FileReport,
}

/// Inserts a synthesized doc block above every undocumented test in `src`.
///
/// Lines are visited in order; each test marker resolves to its marker block,
/// and a block is planned at most once even when it holds several markers.
/// Tests that already carry a `///` comment are left alone, and tests whose
/// signature or body cannot be found are skipped and counted.
///
/// # Returns
/// - `Annotated { text: Some(..) }` with the full new file text when at least one
///   block was inserted, using the original trailing-newline convention.
/// - `Annotated { text: None }` otherwise.
pub fn annotate_source(src: &str, heuristics: &Heuristics) -> Annotated {
    let file = SourceFile::parse(src);
    let lines = &file.lines;

    let mut report = FileReport::default();
    let mut insertions = Vec::new();
    let mut last_block: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        if classify(line) != LineKind::TestMarker {
            continue;
        }
        let block = marker_block(lines, i);
        if last_block == Some(block.start) {
            continue;
        }
        last_block = Some(block.start);

        match plan_test(lines, block, heuristics) {
            Plan::Documented => report.already_documented += 1,
            Plan::NoSignature => {
                warn!(line = i + 1, "test marker without a following fn; skipped");
                report.skipped_no_signature += 1;
            }
            Plan::Unterminated => {
                warn!(line = i + 1, "test body never closes; skipped");
                report.skipped_unterminated += 1;
            }
            Plan::Insert(insertion, test) => {
                debug!(name = %test.name, line = test.line, "synthesized doc block");
                insertions.push(insertion);
                report.annotated.push(test);
            }
        }
    }

    let text = if insertions.is_empty() {
        None
    } else {
        Some(file.render(&apply_insertions(lines, insertions)))
    };
    Annotated { text, report }
}

/// Annotates one file on disk.
///
/// Reads `path`, runs [`annotate_source`], and rewrites the file only when at
/// least one doc block was inserted and `dry_run` is off. Untouched files are
/// never written, so their timestamps do not change.
///
/// # Errors
/// - `Error::Io` when the file cannot be read, or the rewrite cannot be
///   written or moved into place.
#[instrument(level = "info", skip(heuristics))]
pub fn patch_file(path: &Path, heuristics: &Heuristics, dry_run: bool) -> Result<FileReport> {
    let original = fs::read_to_string(path).map_err(|e| Error::Io {
        path: Some(path.to_path_buf()),
        source: e,
    })?;

    let Annotated { text, report } = annotate_source(&original, heuristics);
    let Some(new_text) = text else {
        debug!(
            already_documented = report.already_documented,
            skipped = report.skipped(),
            "no edits"
        );
        return Ok(report);
    };

    if dry_run {
        info!(
            inserted = report.annotated.len(),
            "dry run: would add doc comments"
        );
        return Ok(report);
    }

    write_atomically(path, &new_text)?;
    info!(
        inserted = report.annotated.len(),
        already_documented = report.already_documented,
        skipped = report.skipped(),
        "patched"
    );
    Ok(report)
}

/// Writes `contents` to a hidden sibling file and renames it over `path`,
/// carrying the original permissions across.
fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let tmp = sibling_tmp_path(path);

    fs::write(&tmp, contents).map_err(|e| Error::Io {
        path: Some(tmp.clone()),
        source: e,
    })?;
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(&tmp, meta.permissions()).map_err(|e| Error::Io {
            path: Some(tmp.clone()),
            source: e,
        })?;
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::Io {
            path: Some(path.to_path_buf()),
            source: e,
        }
    })
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.testdocs.tmp", name))
}
