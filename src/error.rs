use thiserror::Error;

/// The pipeline's single failure mode: the quote-injected text was still not
/// valid strict JSON.
///
/// All malformed-input conditions (unbalanced braces, unterminated strings,
/// invalid literals, ...) collapse into this one kind; callers only need to
/// know that the input did not parse and where the parser gave up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    /// 1-based line of the failure in the quote-injected text.
    pub line: usize,
    /// 1-based column of the failure in the quote-injected text.
    pub column: usize,
}

impl ParseError {
    pub(crate) fn from_serde(err: &serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
