//! The `preferences` module provides [`Preferences`], a small JSON-backed key/value store for
//! tool settings such as the interpreter path and pretty-printer options.

use crate::json::*;
use serde_json::{json, Map, Value};

/// A single preference value.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceValue {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
}

/// Key/value settings store.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    data: Value,
}

impl Preferences {
    /// Create an empty preferences object.
    pub fn new() -> Preferences {
        Preferences {
            data: Value::Object(Map::new()),
        }
    }

    /// Store `value` for `key`, replacing any earlier value.
    ///
    /// # Arguments
    ///
    /// * `key` - The preference name.
    /// * `value` - The new value.
    pub fn set_value_for_key(&mut self, key: &str, value: PreferenceValue) {
        let json_value = match value {
            PreferenceValue::Int(i) => json![i],
            PreferenceValue::Float(f) => json![f],
            PreferenceValue::String(s) => json![s],
            PreferenceValue::Boolean(b) => json![b],
            PreferenceValue::Null => Value::Null,
        };
        self.data.set_node_for_key(key, json_value);
    }

    /// Return the value stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The preference name.
    pub fn get_value_for_key(&self, key: &str) -> Option<PreferenceValue> {
        let node = self.data.borrow_value_for_key(key)?;
        let value = match node {
            Value::Bool(b) => PreferenceValue::Boolean(*b),
            Value::String(s) => PreferenceValue::String(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => PreferenceValue::Int(i),
                None => PreferenceValue::Float(n.as_f64().unwrap_or_default()),
            },
            _ => PreferenceValue::Null,
        };
        Some(value)
    }

    /// Store the string `value` for `key`.
    pub fn set_string_for_key(&mut self, key: &str, value: &str) {
        self.set_value_for_key(key, PreferenceValue::String(String::from(value)));
    }

    /// Return the string stored for `key`, if the value is a string.
    pub fn get_string_for_key(&self, key: &str) -> Option<String> {
        self.data.get_str_for_key(key).map(String::from)
    }

    /// Return the boolean stored for `key`, if the value is a boolean.
    pub fn get_bool_for_key(&self, key: &str) -> Option<bool> {
        self.data.get_bool_for_key(key)
    }

    /// Return true if the store holds a value for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_store_each_value_kind() {
        let mut preferences = Preferences::new();
        preferences.set_value_for_key("count", PreferenceValue::Int(3));
        preferences.set_value_for_key("ratio", PreferenceValue::Float(0.5));
        preferences.set_value_for_key("flag", PreferenceValue::Boolean(true));
        preferences.set_value_for_key("nothing", PreferenceValue::Null);
        preferences.set_string_for_key("python", "/usr/bin/python3");

        assert_eq!(
            preferences.get_value_for_key("count"),
            Some(PreferenceValue::Int(3))
        );
        assert_eq!(
            preferences.get_value_for_key("ratio"),
            Some(PreferenceValue::Float(0.5))
        );
        assert_eq!(preferences.get_bool_for_key("flag"), Some(true));
        assert_eq!(
            preferences.get_value_for_key("nothing"),
            Some(PreferenceValue::Null)
        );
        assert_eq!(
            preferences.get_string_for_key("python"),
            Some(String::from("/usr/bin/python3"))
        );
        assert!(preferences.contains_key("nothing"));
        assert!(!preferences.contains_key("missing"));
        assert_eq!(preferences.get_value_for_key("missing"), None);
    }

    #[test]
    fn test_preferences_overwrite_and_clone() {
        let mut preferences = Preferences::new();
        preferences.set_string_for_key("python", "python3");

        let mut copy = preferences.clone();
        copy.set_string_for_key("python", "pypy3");

        assert_eq!(
            preferences.get_string_for_key("python"),
            Some(String::from("python3"))
        );
        assert_eq!(
            copy.get_string_for_key("python"),
            Some(String::from("pypy3"))
        );
        assert_eq!(copy.get_bool_for_key("python"), None);
    }
}
