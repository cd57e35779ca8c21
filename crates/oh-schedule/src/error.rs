use thiserror::Error;

/// Why a schedule line failed to match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected {expected} at offset {offset}, found {found}")]
    Expected {
        expected: &'static str,
        found:    String,
        offset:   usize,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str },
}

/// A recoverable, per-line parse failure.
///
/// The display text is what gets surfaced to users; the grammar-level cause
/// is kept as the error source for debugging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleWarning {
    #[error("Unexpected format for schedule \"{schedule}\"")]
    UnexpectedFormat {
        schedule: String,
        #[source]
        cause:    SyntaxError,
    },
}
