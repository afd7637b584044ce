use crate::defaults::{
    DEFAULT_ACRONYMS, DEFAULT_DISPLAY_WORD, DEFAULT_FN_NAME, DEFAULT_MARKER_WORD, SKIPPED_DIRS,
    SOURCE_SUFFIX,
};
use crate::error::{Error, Result};

use std::collections::BTreeMap;

/// Naming heuristics shared by the humanizer and the doc synthesizer.
///
/// Built once from [`crate::defaults`] and CLI overrides, then passed by reference
/// to every stage that needs it. Nothing reads these tables from global state.
#[derive(Debug, Clone)]
pub struct Heuristics {
    /// Lowercase segment → fixed-case rendering (`http` → `HTTP`).
    pub acronyms: BTreeMap<String, String>,
    /// Leading identifier segment to drop (`test`).
    pub marker_word: String,
    /// Phrase used when the identifier is empty after dropping the marker word.
    pub display_word: String,
    /// Name assumed when a signature line carries no identifier.
    pub fn_name: String,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            acronyms: DEFAULT_ACRONYMS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            marker_word: DEFAULT_MARKER_WORD.to_string(),
            display_word: DEFAULT_DISPLAY_WORD.to_string(),
            fn_name: DEFAULT_FN_NAME.to_string(),
        }
    }
}

impl Heuristics {
    /// Same heuristics with an empty acronym table.
    pub fn without_acronyms(mut self) -> Self {
        self.acronyms.clear();
        self
    }

    /// Applies `WORD=FORM` overrides on top of the current acronym table.
    ///
    /// The key is lowercased so lookups stay case-insensitive; the form is kept
    /// verbatim. An override whose key already exists replaces the previous form.
    ///
    /// # Errors
    /// - `Error::InvalidAcronym` when an entry has no `=`, or an empty side.
    pub fn with_acronym_overrides(mut self, specs: &[String]) -> Result<Self> {
        for spec in specs {
            let Some((word, form)) = spec.split_once('=') else {
                return Err(Error::InvalidAcronym { spec: spec.clone() });
            };
            let (word, form) = (word.trim(), form.trim());
            if word.is_empty() || form.is_empty() {
                return Err(Error::InvalidAcronym { spec: spec.clone() });
            }
            self.acronyms.insert(word.to_lowercase(), form.to_string());
        }
        Ok(self)
    }

    pub fn acronym(&self, lower: &str) -> Option<&str> {
        self.acronyms.get(lower).map(String::as_str)
    }
}

/// What the file discovery step looks for and what it refuses to descend into.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub suffix: String,
    pub skipped_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            suffix: SOURCE_SUFFIX.to_string(),
            skipped_dirs: SKIPPED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl WalkOptions {
    pub fn with_extra_skipped(mut self, extra: &[String]) -> Self {
        for dir in extra {
            if !self.skipped_dirs.contains(dir) {
                self.skipped_dirs.push(dir.clone());
            }
        }
        self
    }
}
