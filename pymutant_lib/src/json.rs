//! The module contains functions and traits that simplify working with [`Value`] objects for
//! the purpose of traversing and rewriting syntax trees encoded in JSON.
use crate::error::PyMutantError;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;

/// Reads the contents of the JSON in the file named by `file_name`.
///
/// # Arguments
///
/// * `file_name` - The string slice containing the path to the file in the file system.
///
/// # Errors
///
/// The function may return [`PyMutantError::IO`] if the file cannot be opened, or
/// [`PyMutantError::JSON`] if the file does not contain valid JSON.
pub fn load_json_from_file_with_name(file_name: &str) -> Result<Value, PyMutantError> {
    let file = File::open(file_name)?;
    let reader = BufReader::new(file);
    let v = serde_json::from_reader(reader)?;
    Ok(v)
}

/// Add a '/' character as a prefix to a key so the key can be used with [`Value::pointer`] and
/// [`Value::pointer_mut`].
///
/// # Arguments
///
/// * `key` - The string slice containing the name to decorate.
fn json_path(key: &str) -> String {
    let mut jp = String::from("/");
    jp += key;
    jp
}

/// Trait for use with [`Value`] that adds functionality for accessing and modifying the
/// members of a JSON dictionary node.
///
/// Every accessor returns `None` (or does nothing) when the value is not a dictionary or does
/// not hold a member of the requested type for the key.
pub trait JSONMutate {
    fn has_value_for_key(&self, key: &str) -> bool;
    fn take_value_for_key(&mut self, key: &str) -> Option<Value>;
    fn borrow_value_for_key(&self, key: &str) -> Option<&Value>;
    fn set_node_for_key(&mut self, key: &str, node: Value);
    fn get_array_for_key(&self, key: &str) -> Option<&Vec<Value>>;
    fn get_str_for_key(&self, key: &str) -> Option<&str>;
    fn set_str_for_key(&mut self, key: &str, value: &str);
    fn get_bool_for_key(&self, key: &str) -> Option<bool>;
    fn get_int_for_key(&self, key: &str) -> Option<i64>;
    fn contains_key(&self, key: &str) -> bool;
}

impl JSONMutate for Value {
    /// Return true if the [`Value`] object has a key/value pair indexed by `key`, even if the
    /// value is `null`.
    ///
    /// # Arguments
    ///
    /// * `key` - A string slice referring to the text of the key.
    fn has_value_for_key(&self, key: &str) -> bool {
        self.pointer(&json_path(key)).is_some()
    }

    /// Take ownership of the value stored for `key`, leaving `null` in its place.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn take_value_for_key(&mut self, key: &str) -> Option<Value> {
        self.pointer_mut(&json_path(key)).map(|v| v.take())
    }

    /// Return a reference to the value stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn borrow_value_for_key(&self, key: &str) -> Option<&Value> {
        self.pointer(&json_path(key))
    }

    /// Store `node` for `key`.  If the dictionary does not have a member for `key`, the function
    /// appends one.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    /// * `node` - The [`Value`] object to use as the new value for `key`.
    fn set_node_for_key(&mut self, key: &str, node: Value) {
        if let Some(v) = self.pointer_mut(&json_path(key)) {
            *v = node;
        } else if let Some(node_map) = self.as_object_mut() {
            node_map.insert(String::from(key), node);
        }
    }

    /// Return a reference to the array stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_array_for_key(&self, key: &str) -> Option<&Vec<Value>> {
        self.pointer(&json_path(key)).and_then(|v| v.as_array())
    }

    /// Return the text of the string stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_str_for_key(&self, key: &str) -> Option<&str> {
        self.pointer(&json_path(key)).and_then(|v| v.as_str())
    }

    /// Add or update the string stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    /// * `value` - The string slice referencing the text comprising the value.
    fn set_str_for_key(&mut self, key: &str, value: &str) {
        self.set_node_for_key(key, Value::from(value));
    }

    /// Return the boolean stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_bool_for_key(&self, key: &str) -> Option<bool> {
        self.pointer(&json_path(key)).and_then(|v| v.as_bool())
    }

    /// Return the i64 value stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    fn get_int_for_key(&self, key: &str) -> Option<i64> {
        self.pointer(&json_path(key)).and_then(|v| v.as_i64())
    }

    /// Return true if the JSON value is a dictionary and it has a member for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key for which to search.
    fn contains_key(&self, key: &str) -> bool {
        self.is_object() && self.has_value_for_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, json};
    use std::io::Write;

    #[test]
    fn test_json_mutate_has_value_for_key() {
        let value: Value = from_str(
            "{\
            \"dog\": \"bark\",
            \"cat\": null
        }",
        )
        .unwrap();

        assert!(value.has_value_for_key("dog"));
        assert!(value.has_value_for_key("cat"));
        assert!(!value.has_value_for_key("horse"));
    }

    #[test]
    fn test_json_mutate_take_value_for_key() {
        let mut value = json!({"first": 1, "second": 2});

        let first_node = value.take_value_for_key("first").unwrap();
        assert_eq!(first_node.as_i64().unwrap(), 1);
        assert!(value.borrow_value_for_key("first").unwrap().is_null());
        assert!(value.take_value_for_key("third").is_none());
    }

    #[test]
    fn test_json_mutate_set_node_for_key_keeps_member_order() {
        let mut value = json!({"ast_type": "Assign", "targets": [], "value": 1});

        value.set_node_for_key("targets", json!(["x"]));
        value.set_node_for_key("type_comment", Value::Null);

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["ast_type", "targets", "value", "type_comment"]);
        assert_eq!(value.get_array_for_key("targets").unwrap().len(), 1);
    }

    #[test]
    fn test_json_mutate_typed_getters() {
        let value = json!({"name": "x", "flag": false, "level": 2, "list": [1, 3, 5]});

        assert_eq!(value.get_str_for_key("name"), Some("x"));
        assert_eq!(value.get_bool_for_key("flag"), Some(false));
        assert_eq!(value.get_int_for_key("level"), Some(2));
        assert_eq!(value.get_array_for_key("list").unwrap().len(), 3);

        assert_eq!(value.get_str_for_key("level"), None);
        assert_eq!(value.get_int_for_key("name"), None);
        assert_eq!(value.get_array_for_key("missing"), None);
    }

    #[test]
    fn test_json_mutate_set_str_for_key() {
        let mut value = json!({"first": 1});

        value.set_str_for_key("first", "one");
        assert_eq!(value.get_str_for_key("first"), Some("one"));

        value = json!({});
        value.set_str_for_key("first", "two");
        assert_eq!(value.get_str_for_key("first"), Some("two"));
    }

    #[test]
    fn test_json_mutate_contains_key_requires_object() {
        let object = json!({"key": null});
        let array = json!([1, 2]);
        let text = json!("key");

        assert!(object.contains_key("key"));
        assert!(!array.contains_key("0"));
        assert!(!text.contains_key("key"));
    }

    #[test]
    fn test_load_json_from_file_with_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"ast_type\": \"Module\", \"body\": []}}").unwrap();

        let value = load_json_from_file_with_name(file.path().to_str().unwrap()).unwrap();
        assert_eq!(value.get_str_for_key("ast_type"), Some("Module"));

        let missing = load_json_from_file_with_name("/nonexistent/pymutant/file.json");
        assert!(matches!(missing, Err(PyMutantError::IO(_))));
    }
}
