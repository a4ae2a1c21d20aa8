//! The `string` module provides extra functionality for [`String`] objects.

/// Trait that adds the ability to collapse repeated text.
pub trait PyMutantString {
    /// Remove characters from `self` until it no longer contains `s`.  Each pass removes the
    /// first character of the first occurrence, so `remove_all("  ")` collapses runs of spaces
    /// to a single space.
    ///
    /// # Arguments
    ///
    /// * `s` - The reference to the string slice containing the text to remove.
    fn remove_all(&mut self, s: &str);
}

impl PyMutantString for String {
    fn remove_all(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        while let Some(index) = self.find(s) {
            self.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_all_newlines() {
        let mut text = String::from("one\ntwo\n");
        text.remove_all("\n");
        assert_eq!(text, "onetwo");
    }

    #[test]
    fn test_remove_all_collapses_spaces() {
        let mut text = String::from("a    b  c");
        text.remove_all("  ");
        assert_eq!(text, "a b c");
    }
}
