use crate::error::ParseError;
use crate::options::{KeyStyle, Options};
use crate::quote::{quote_keys, unquote_keys};
use crate::rename::deep_rename;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// One recorded event from a transform run: a key rename or a camelCase
/// collision, with the JSON path of the enclosing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformLogEntry {
    pub path: String,
    pub message: &'static str,
    pub detail: String,
}

#[derive(Default)]
pub(crate) struct Logger {
    enable: bool,
    entries: Vec<TransformLogEntry>,
    path: Vec<PathElem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathElem {
    Index(usize),
    Key(String),
}

impl Logger {
    pub(crate) fn new(enable: bool) -> Self {
        Self {
            enable,
            ..Self::default()
        }
    }

    pub(crate) fn disabled() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn enabled(&self) -> bool {
        self.enable
    }

    pub(crate) fn log(&mut self, message: &'static str, detail: String) {
        if self.enable {
            self.entries.push(TransformLogEntry {
                path: self.format_path(),
                message,
                detail,
            });
        }
    }

    #[inline]
    pub(crate) fn push_index(&mut self, i: usize) {
        if self.enable {
            self.path.push(PathElem::Index(i));
        }
    }

    #[inline]
    pub(crate) fn push_key(&mut self, key: &str) {
        if self.enable {
            self.path.push(PathElem::Key(key.to_string()));
        }
    }

    #[inline]
    pub(crate) fn pop(&mut self) {
        if self.enable {
            self.path.pop();
        }
    }

    pub(crate) fn into_entries(self) -> Vec<TransformLogEntry> {
        self.entries
    }

    fn format_path(&self) -> String {
        let mut s = String::from("$");
        for elem in &self.path {
            match elem {
                PathElem::Index(i) => {
                    s.push('[');
                    s.push_str(&i.to_string());
                    s.push(']');
                }
                PathElem::Key(k) => {
                    s.push('.');
                    s.push_str(k);
                }
            }
        }
        s
    }
}

// Stages 1-3: quote bare keys, strict parse, rename. The parse is the only
// point in the whole pipeline that can fail.
pub(crate) fn transform_to_value(
    input: &str,
    opts: &Options,
    log: &mut Logger,
) -> Result<Value, ParseError> {
    let quoted = quote_keys(input);
    let value: Value = serde_json::from_str(&quoted).map_err(|e| ParseError::from_serde(&e))?;
    Ok(match opts.key_style {
        KeyStyle::Camel => deep_rename(value, log),
        KeyStyle::Preserve => value,
    })
}

// Full pipeline: stages 1-3, then serialization and key unquoting.
pub(crate) fn transform_to_string(
    input: &str,
    opts: &Options,
    log: &mut Logger,
) -> Result<String, ParseError> {
    let value = transform_to_value(input, opts, log)?;
    let rendered = render(&value, opts)?;
    Ok(if opts.strict_keys {
        rendered
    } else {
        unquote_keys(&rendered)
    })
}

fn render(value: &Value, opts: &Options) -> Result<String, ParseError> {
    if opts.compact {
        return serde_json::to_string(value).map_err(|e| ParseError::from_serde(&e));
    }
    let indent = " ".repeat(opts.indent);
    let mut buf = Vec::with_capacity(128);
    let fmt = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, fmt);
    value
        .serialize(&mut ser)
        .map_err(|e| ParseError::from_serde(&e))?;
    // The serializer only ever writes UTF-8; if that invariant ever broke,
    // fail loudly instead of substituting replacement characters.
    String::from_utf8(buf).map_err(|e| {
        ParseError::from_serde(&serde_json::Error::io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e,
        )))
    })
}
