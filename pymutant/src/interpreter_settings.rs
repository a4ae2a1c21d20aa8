//! The `interpreter_settings` module provides the [`InterpreterSettings`] type that converts the
//! interpreter options of the command line into a [`Preferences`] object usable by the library.

use pymutant_lib::interpreter_details::*;
use pymutant_lib::preferences::Preferences;

pub struct InterpreterSettings {
    /// Python interpreter path
    pub python: Option<String>,
}

impl InterpreterSettings {
    pub fn to_preferences(&self) -> Preferences {
        let mut preferences = Preferences::new();
        let python = self.python.as_deref().unwrap_or(DEFAULT_INTERPRETER);
        preferences.set_string_for_key(INTERPRETER_KEY, python);
        preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_settings_to_preferences() {
        let settings = InterpreterSettings { python: None };
        assert_eq!(
            get_interpreter_from_preferences(&settings.to_preferences()),
            "python3"
        );

        let settings = InterpreterSettings {
            python: Some(String::from("/usr/local/bin/python3.12")),
        };
        assert_eq!(
            get_interpreter_from_preferences(&settings.to_preferences()),
            "/usr/local/bin/python3.12"
        );
    }
}
