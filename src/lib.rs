pub mod cli;
pub mod error;
pub mod options;
pub mod quote;
mod rename;
mod transform;

pub use error::ParseError;
pub use options::{KeyStyle, Options};
pub use transform::TransformLogEntry;

use transform::Logger;

/// Transform relaxed, JavaScript-style object-literal text into a deep
/// camelCase-keyed, pretty-printed, quote-relaxed text block.
/// Bare keys are quoted, the text is parsed as strict JSON, every key at
/// every depth is renamed to camelCase, and the result is re-serialized
/// with the key quotes stripped back off.
pub fn transform_to_string(input: &str, opts: &Options) -> Result<String, ParseError> {
    let mut log = Logger::disabled();
    transform::transform_to_string(input, opts, &mut log)
}

use std::io::Write;

/// Transform and write the result into an `io::Write`.
/// This avoids an extra copy when the caller intends to stream to a sink.
pub fn transform_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), ParseError> {
    let s = transform_to_string(input, opts)?;
    writer
        .write_all(s.as_bytes())
        .map_err(|e| ParseError::from_serde(&serde_json::Error::io(e)))
}

/// Transform and stop before serialization, returning the renamed
/// `serde_json::Value` tree. Object key order follows the input.
pub fn transform_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, ParseError> {
    let mut log = Logger::disabled();
    transform::transform_to_value(input, opts, &mut log)
}

/// Transform and return both the output text and the transform log.
/// Entries are only collected when `opts.logging` is set.
pub fn transform_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<TransformLogEntry>), ParseError> {
    let mut log = Logger::new(opts.logging);
    let s = transform::transform_to_string(input, opts, &mut log)?;
    Ok((s, log.into_entries()))
}

#[cfg(test)]
mod tests;
