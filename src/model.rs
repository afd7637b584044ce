use serde::Serialize;
use std::path::Path;

/// A file's lines plus whether the original text ended with a line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile<'a> {
    pub lines: Vec<&'a str>,
    pub trailing_newline: bool,
}

impl<'a> SourceFile<'a> {
    pub fn parse(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Joins `lines` back into file text using this file's newline convention.
    pub fn render(&self, lines: &[String]) -> String {
        let mut out = lines.join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}

/// Contiguous attribute lines directly above a function, first and last index inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerBlock {
    pub start: usize,
    pub end: usize,
}

/// Where the braces of a function body sit and what lies between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No `{` after the signature; nothing to summarize.
    Empty,
    /// A `{` was found but the file ended before it was closed.
    Unterminated,
    Span {
        open_line: usize,
        close_line: usize,
        text: String,
    },
}

impl Body {
    pub fn text(&self) -> &str {
        match self {
            Body::Span { text, .. } => text,
            Body::Empty | Body::Unterminated => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: String,
    /// Leading whitespace of the marker block's first line, reused verbatim.
    pub indent: String,
    pub signature_line: usize,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertSummary {
    pub keyword: String,
    pub text: String,
}

/// A freshly synthesized doc block and the facts it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    pub target: Option<String>,
    pub assertions: Vec<AssertSummary>,
    /// Fully indented `///` lines, ready to splice.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedTest {
    pub name: String,
    /// 1-based line of the marker block's first line in the original file.
    pub line: usize,
    pub target: Option<String>,
    pub assertions: Vec<AssertSummary>,
    pub doc: Vec<String>,
}

/// Per-file outcome of an annotation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    pub annotated: Vec<AnnotatedTest>,
    pub already_documented: usize,
    pub skipped_no_signature: usize,
    pub skipped_unterminated: usize,
}

impl FileReport {
    pub fn skipped(&self) -> usize {
        self.skipped_no_signature + self.skipped_unterminated
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub file: String,
    #[serde(flatten)]
    pub report: FileReport,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub tests_annotated: usize,
    pub tests_already_documented: usize,
    pub tests_skipped: usize,
}

/// Everything a run did; serialized for `--report`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub files: Vec<FileEntry>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Folds one file's outcome into the totals. Only files that gained at
    /// least one doc block are listed individually.
    pub fn record(&mut self, path: &Path, report: FileReport) {
        let s = &mut self.summary;
        s.files_scanned += 1;
        s.tests_annotated += report.annotated.len();
        s.tests_already_documented += report.already_documented;
        s.tests_skipped += report.skipped();
        if !report.annotated.is_empty() {
            s.files_changed += 1;
            self.files.push(FileEntry {
                file: path.to_string_lossy().into_owned(),
                report,
            });
        }
    }
}
