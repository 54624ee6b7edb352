//! Lenient reading of TOML values.
//!
//! Settings files may be hand-edited or written by older builds, so each
//! key is coerced to the expected type and replaced by its default when
//! that fails. A bad key never prevents the rest of the file from loading.

use std::str::FromStr;

use toml::{Table, Value};

/// Reads keys from one `[section]` of a settings document.
pub(crate) struct SectionReader<'a> {
    section: &'static str,
    table: Option<&'a Table>,
    /// Set when any key was missing or had to be coerced.
    pub(crate) dirty: bool,
}

impl<'a> SectionReader<'a> {
    pub(crate) fn new(root: &'a Table, section: &'static str) -> Self {
        let table = root.get(section).and_then(Value::as_table);
        Self {
            section,
            table,
            dirty: table.is_none(),
        }
    }

    fn value(&mut self, key: &str) -> Option<&'a Value> {
        let value = self.table.and_then(|t| t.get(key));
        if value.is_none() {
            self.dirty = true;
        }
        value
    }

    fn fallback<T>(&mut self, key: &str, value: &Value, default: T) -> T {
        tracing::warn!(
            "Ignoring invalid value for {}.{}: {}",
            self.section,
            key,
            value
        );
        self.dirty = true;
        default
    }

    /// Any scalar is accepted and rendered as a string.
    pub(crate) fn string(&mut self, key: &str, default: &str) -> String {
        let Some(value) = self.value(key) else {
            return default.to_string();
        };
        match value {
            Value::String(s) => s.clone(),
            Value::Integer(i) => {
                self.dirty = true;
                i.to_string()
            }
            Value::Float(f) => {
                self.dirty = true;
                f.to_string()
            }
            Value::Boolean(b) => {
                self.dirty = true;
                b.to_string()
            }
            other => self.fallback(key, other, default.to_string()),
        }
    }

    pub(crate) fn bool(&mut self, key: &str, default: bool) -> bool {
        let Some(value) = self.value(key) else {
            return default;
        };
        match value {
            Value::Boolean(b) => *b,
            Value::Integer(i) => {
                self.dirty = true;
                *i != 0
            }
            Value::String(s) => match parse_bool(s) {
                Some(b) => {
                    self.dirty = true;
                    b
                }
                None => self.fallback(key, value, default),
            },
            other => self.fallback(key, other, default),
        }
    }

    pub(crate) fn u32(&mut self, key: &str, default: u32) -> u32 {
        let Some(value) = self.value(key) else {
            return default;
        };
        let parsed = match value {
            Value::Integer(i) => u32::try_from(*i).ok(),
            Value::String(s) => s.trim().parse().ok().inspect(|_| self.dirty = true),
            _ => None,
        };
        match parsed {
            Some(n) => n,
            None => self.fallback(key, value, default),
        }
    }

    /// A value parsed from its string form.
    pub(crate) fn parsed<T: FromStr>(&mut self, key: &str, default: T) -> T {
        let Some(value) = self.value(key) else {
            return default;
        };
        match value.as_str().map(str::parse::<T>) {
            Some(Ok(v)) => v,
            _ => self.fallback(key, value, default),
        }
    }

    /// Like [`parsed`](Self::parsed), with the empty string meaning `None`.
    pub(crate) fn optional<T: FromStr>(&mut self, key: &str) -> Option<T> {
        let value = self.value(key)?;
        match value.as_str() {
            Some(s) if s.trim().is_empty() => None,
            Some(s) => match s.parse::<T>() {
                Ok(v) => Some(v),
                Err(_) => self.fallback(key, value, None),
            },
            None => self.fallback(key, value, None),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(content: &str) -> Table {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn bool_coerces_strings_and_integers() {
        let t = root("[s]\na = \"true\"\nb = 0\nc = \"YES\"\nd = true\n");
        let mut r = SectionReader::new(&t, "s");
        assert!(r.bool("a", false));
        assert!(!r.bool("b", true));
        assert!(r.bool("c", false));
        assert!(r.bool("d", false));
    }

    #[test]
    fn bool_falls_back_on_garbage() {
        let t = root("[s]\na = \"maybe\"\n");
        let mut r = SectionReader::new(&t, "s");
        assert!(r.bool("a", true));
        assert!(r.dirty);
    }

    #[test]
    fn string_accepts_scalars() {
        let t = root("[s]\na = 42\nb = [1]\n");
        let mut r = SectionReader::new(&t, "s");
        assert_eq!(r.string("a", ""), "42");
        assert_eq!(r.string("b", "def"), "def");
    }

    #[test]
    fn missing_section_uses_defaults() {
        let t = root("");
        let mut r = SectionReader::new(&t, "s");
        assert_eq!(r.u32("n", 7), 7);
        assert!(r.dirty);
    }

    #[test]
    fn clean_section_stays_clean() {
        let t = root("[s]\nn = 3\nname = \"x\"\n");
        let mut r = SectionReader::new(&t, "s");
        assert_eq!(r.u32("n", 7), 3);
        assert_eq!(r.string("name", ""), "x");
        assert!(!r.dirty);
    }

    #[test]
    fn optional_treats_empty_as_none() {
        let t = root("[s]\na = \"\"\nb = \"7\"\n");
        let mut r = SectionReader::new(&t, "s");
        assert_eq!(r.optional::<u8>("a"), None);
        assert_eq!(r.optional::<u8>("b"), Some(7));
    }
}
