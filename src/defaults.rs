/// Lowercase word → rendered form used by the name humanizer.
pub const DEFAULT_ACRONYMS: &[(&str, &str)] = &[
    ("api", "API"),
    ("cpu", "CPU"),
    ("db", "DB"),
    ("http", "HTTP"),
    ("https", "HTTPS"),
    ("id", "ID"),
    ("io", "IO"),
    ("jwt", "JWT"),
    ("sql", "SQL"),
    ("ssl", "SSL"),
    ("tls", "TLS"),
    ("ui", "UI"),
    ("url", "URL"),
    ("uuid", "UUID"),
    ("rbac", "RBAC"),
    ("ipc", "IPC"),
    ("ip", "IP"),
];

/// Leading identifier segment dropped before humanizing (`test_foo` → `Foo`).
pub const DEFAULT_MARKER_WORD: &str = "test";

/// Display phrase used when nothing is left after dropping the marker word.
pub const DEFAULT_DISPLAY_WORD: &str = "test";

/// Function name assumed when the signature line has no parsable identifier.
pub const DEFAULT_FN_NAME: &str = "test";

/// Traversal root used when no paths are given on the command line.
pub const DEFAULT_ROOT: &str = "crates";

pub const SOURCE_SUFFIX: &str = "rs";

/// Build-artifact and dependency-cache directories never descended into.
pub const SKIPPED_DIRS: &[&str] = &["target", ".cargo"];

pub const DOC_PREFIX: &str = "///";

pub const COVERAGE_LINE: &str =
    "Assertion coverage: ensures the routine completes without panicking.";
