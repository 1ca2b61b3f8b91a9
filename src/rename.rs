use crate::transform::Logger;
use serde_json::{Map, Value};

/// Convert a single key to camelCase.
///
/// Word splitting: non-alphanumeric characters separate words, a
/// lower-to-upper case change starts a new word, the last capital of an
/// acronym run starts a new word when followed by lowercase ("HTMLParser"
/// splits into "HTML", "Parser"), and letters and digits never share a
/// word. The first word is lowercased whole; every later word keeps an
/// uppercase initial with the remainder lowercased. Already-camelCase input
/// is a fixed point.
pub(crate) fn camel_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len());
    let mut word = String::new();
    let mut first_emitted = false;

    for i in 0..chars.len() {
        let c = chars[i];
        if !c.is_alphanumeric() {
            push_word(&mut out, &word, &mut first_emitted);
            word.clear();
            continue;
        }
        if let Some(p) = word.chars().next_back() {
            let acronym_end = p.is_uppercase()
                && c.is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if (p.is_lowercase() && c.is_uppercase())
                || p.is_numeric() != c.is_numeric()
                || acronym_end
            {
                push_word(&mut out, &word, &mut first_emitted);
                word.clear();
            }
        }
        word.push(c);
    }
    push_word(&mut out, &word, &mut first_emitted);
    out
}

fn push_word(out: &mut String, word: &str, first_emitted: &mut bool) {
    if word.is_empty() {
        return;
    }
    let mut cs = word.chars();
    if !*first_emitted {
        out.extend(word.chars().flat_map(char::to_lowercase));
        *first_emitted = true;
    } else if let Some(head) = cs.next() {
        out.extend(head.to_uppercase());
        out.extend(cs.flat_map(char::to_lowercase));
    }
}

/// Rebuild a value with every object key at every depth renamed to
/// camelCase. Arrays recurse element-wise in order; scalars pass through
/// unchanged.
///
/// When two keys camelCase to the same name, the later key in enumeration
/// order wins and the earlier value is dropped. Collisions are surprising
/// enough to be reported through the log when logging is enabled.
pub(crate) fn deep_rename(value: Value, log: &mut Logger) -> Value {
    match value {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                log.push_index(i);
                out.push(deep_rename(item, log));
                log.pop();
            }
            Value::Array(out)
        }
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                let renamed = camel_case(&key);
                if log.enabled() && renamed != key {
                    log.log("renamed key", format!("{key} -> {renamed}"));
                }
                log.push_key(&renamed);
                let val = deep_rename(val, log);
                log.pop();
                if log.enabled() && out.contains_key(&renamed) {
                    log.log(
                        "camelCase key collision",
                        format!("{renamed} was produced twice; later key wins"),
                    );
                }
                out.insert(renamed, val);
            }
            Value::Object(out)
        }
        scalar => scalar,
    }
}
