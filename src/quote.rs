//! Relaxed-syntax adapter: textual quote injection and stripping for object
//! keys.
//!
//! Both passes are byte-level heuristics, not grammar rewrites. `quote_keys`
//! runs before the strict parser and only needs to catch bare keys;
//! `unquote_keys` runs after serialization, where every renamed key is a
//! plain camelCase word, so its narrower pattern cannot miss one.

use memchr::{memchr, memchr2};
use std::ops::Range;

#[inline]
fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Wrap every detected bare object key in double quotes.
///
/// A bare key is one-or-more word characters (ASCII letters, digits, `_`,
/// `-`) between a `{` or `,` delimiter and a `:`, with optional whitespace
/// on either side. The whitespace is dropped in the rewrite; the result
/// feeds straight into the parser, so spacing is cosmetic. Keys that are
/// already quoted never match, since `"` is not a word character.
///
/// Known limitation: the scan does not track string state. A string value
/// containing `{` or `,` followed by key-shaped text and a colon will be
/// misquoted. That risk is accepted for the relaxed inputs this targets and
/// usually surfaces as a `ParseError` downstream rather than silent damage.
pub fn quote_keys(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len() + 16);
    let mut pos = 0;
    while let Some(off) = memchr2(b'{', b',', &bytes[pos..]) {
        let delim = pos + off;
        out.push_str(&input[pos..=delim]);
        pos = delim + 1;
        if let Some((key, after)) = match_bare_key(bytes, pos) {
            out.push('"');
            out.push_str(&input[key]);
            out.push_str("\":");
            pos = after;
        }
    }
    out.push_str(&input[pos..]);
    out
}

// Match optional-whitespace, key-bytes, optional-whitespace, ':' starting at
// `start`. Returns the key's byte range and the index just past the colon.
fn match_bare_key(bytes: &[u8], start: usize) -> Option<(Range<usize>, usize)> {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    let key_start = i;
    while i < bytes.len() && is_key_byte(bytes[i]) {
        i += 1;
    }
    if i == key_start {
        return None;
    }
    let key_end = i;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b':' {
        Some((key_start..key_end, i + 1))
    } else {
        None
    }
}

/// Strip the double quotes from every serialized object key.
///
/// Rewrites `"word":` to `word:` where `word` is one-or-more ASCII
/// alphanumeric/underscore characters. Applied to serializer output this is
/// safe: renamed keys are always plain camelCase words, and an escaped quote
/// inside a string value breaks the word run before the closing
/// quote-then-colon sequence can match.
pub fn unquote_keys(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(off) = memchr(b'"', &bytes[pos..]) {
        let open = pos + off;
        out.push_str(&input[pos..open]);
        if let Some((key, after)) = match_quoted_key(bytes, open) {
            out.push_str(&input[key]);
            out.push(':');
            pos = after;
        } else {
            out.push('"');
            pos = open + 1;
        }
    }
    out.push_str(&input[pos..]);
    out
}

// Match '"', word-bytes, '"', optional-whitespace, ':' starting at the
// opening quote. Returns the word's byte range and the index past the colon.
fn match_quoted_key(bytes: &[u8], open: usize) -> Option<(Range<usize>, usize)> {
    let mut i = open + 1;
    let word_start = i;
    while i < bytes.len() && is_word_byte(bytes[i]) {
        i += 1;
    }
    if i == word_start || i >= bytes.len() || bytes[i] != b'"' {
        return None;
    }
    let word_end = i;
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b':' {
        Some((word_start..word_end, i + 1))
    } else {
        None
    }
}
