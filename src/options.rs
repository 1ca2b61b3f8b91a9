#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// Rename every object key at every depth to camelCase.
    Camel,
    /// Keep keys as-is; the pipeline only reformats.
    Preserve,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Key rewriting policy applied to the parsed tree.
    pub key_style: KeyStyle,
    /// Keep double quotes around output keys (strict JSON) instead of the
    /// relaxed unquoted style.
    pub strict_keys: bool,
    /// Emit single-line output instead of pretty-printing.
    pub compact: bool,
    /// Spaces per nesting level when pretty-printing.
    pub indent: usize,
    /// Enable transform logging. Use `transform_to_string_with_log` to
    /// retrieve the entries.
    pub logging: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            key_style: KeyStyle::Camel,
            strict_keys: false,
            compact: false,
            indent: 2,
            logging: false,
        }
    }
}
