use std::{fmt, io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    // fs
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },

    // serde
    Json {
        context: &'static str,
        source: serde_json::Error,
    },

    // cli overrides
    InvalidAcronym {
        spec: String,
    },
}

impl fmt::Display for Error {
    /// Formats the `Error` into a human-readable message.
    ///
    /// `Io` errors include the offending path when one is known, `Walk` errors name
    /// the traversal root, and `Json` errors carry the serialization context.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            Io { path, source } => match path {
                Some(p) => write!(f, "I/O error at {}: {}", p.display(), source),
                None => write!(f, "I/O error: {}", source),
            },
            Walk { root, source } => {
                write!(f, "failed to walk {}: {}", root.display(), source)
            }
            Json { context, source } => write!(f, "JSON error in {}: {}", context, source),
            InvalidAcronym { spec } => write!(
                f,
                "invalid acronym override '{}': expected WORD=FORM",
                spec
            ),
        }
    }
}

impl std::error::Error for Error {
    /// Returns the underlying error for `Io`, `Walk` and `Json`; `InvalidAcronym`
    /// is terminal and has no source.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;
        match self {
            Io { source, .. } => Some(source),
            Walk { source, .. } => Some(source),
            Json { source, .. } => Some(source),
            InvalidAcronym { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_io_with_path() {
        let err = Error::Io {
            path: Some(PathBuf::from("crates/a.rs")),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "I/O error at crates/a.rs: missing");
        assert!(err.source().is_some(), "Io should expose its io::Error");
    }

    #[test]
    fn test_display_invalid_acronym_has_no_source() {
        let err = Error::InvalidAcronym { spec: "grpc".into() };
        assert_eq!(
            err.to_string(),
            "invalid acronym override 'grpc': expected WORD=FORM"
        );
        assert!(err.source().is_none());
    }
}
