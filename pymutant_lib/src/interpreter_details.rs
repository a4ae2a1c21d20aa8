//! The `interpreter_details` module contains the preference keys and defaults for invoking the
//! Python interpreter that parses source files.

use crate::preferences::Preferences;

/// Key for the path to the Python interpreter in the file system.
pub static INTERPRETER_KEY: &str = "python";

/// The interpreter used when the preferences do not name one.
pub static DEFAULT_INTERPRETER: &str = "python3";

/// Return the interpreter named in `prefs`, or [`DEFAULT_INTERPRETER`].
///
/// # Arguments
///
/// * `prefs` - The [`Preferences`] object that may contain a value for [`INTERPRETER_KEY`].
pub fn get_interpreter_from_preferences(prefs: &Preferences) -> String {
    prefs
        .get_string_for_key(INTERPRETER_KEY)
        .unwrap_or_else(|| String::from(DEFAULT_INTERPRETER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_defaults_to_python3() {
        let mut prefs = Preferences::new();
        assert_eq!(get_interpreter_from_preferences(&prefs), "python3");

        prefs.set_string_for_key(INTERPRETER_KEY, "/opt/python/bin/python3.12");
        assert_eq!(
            get_interpreter_from_preferences(&prefs),
            "/opt/python/bin/python3.12"
        );
    }
}
