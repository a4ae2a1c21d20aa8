//! The `pretty_printer` module contains a low-level stream 'token' emitter to use when
//! reconstructing source code from a syntax tree, or when laying out help text.

use crate::error::PyMutantError;
use crate::string::*;
use std::io::Write;

/// Object that encapsulates the behavior needed to write structured output to any object that
/// implements the [`Write`] trait.
///
/// Printers created with [`PrettyPrinter::new`] break lines that would run past `page_width`.
/// Python source cannot be broken at arbitrary tokens, so printers created with
/// [`PrettyPrinter::new_for_source`] never insert line breaks of their own.
pub struct PrettyPrinter {
    pub row: usize,
    pub column: usize,
    pub tab_width: usize,
    pub page_width: usize,
    pub indent: usize,
    pub newline: String,
    pub max_indent: usize,
    pub wrap_lines: bool,
}

impl PrettyPrinter {
    /// Initialize a new pretty-printer object that wraps lines at `page_width`.
    ///
    /// # Arguments
    ///
    /// * `tab_width` - The number of spaces to use for one indentation level.
    /// * `page_width` - The number of columns in the document.  Tokens longer than the page
    /// width overflow it rather than being broken.
    pub fn new(tab_width: usize, page_width: usize) -> PrettyPrinter {
        let max_indent = (page_width as f64 / tab_width.max(1) as f64) - 1.0;

        PrettyPrinter {
            row: 1,
            column: 1,
            tab_width,
            page_width,
            indent: 0,
            newline: String::from("\n"),
            max_indent: max_indent.max(0.0) as usize,
            wrap_lines: true,
        }
    }

    /// Initialize a pretty-printer for program source.  The printer never wraps lines and never
    /// caps the indentation level.
    ///
    /// # Arguments
    ///
    /// * `tab_width` - The number of spaces to use for one indentation level.
    pub fn new_for_source(tab_width: usize) -> PrettyPrinter {
        PrettyPrinter {
            max_indent: usize::MAX,
            wrap_lines: false,
            ..PrettyPrinter::new(tab_width, usize::MAX)
        }
    }

    /// Increase the indentation level by 1.
    ///
    /// The function will not increase the indent level past the page width.
    pub fn increase_indent(&mut self) {
        self.increase_indent_by(1);
    }

    /// Increase the indentation by `amount`.
    ///
    /// The function will not increase the indent level past the page width.
    ///
    /// # Arguments
    ///
    /// * `amount` - The number of indents to add to the current indent value.
    pub fn increase_indent_by(&mut self, amount: usize) {
        self.indent = self.indent.saturating_add(amount).min(self.max_indent);
    }

    /// Decrease the indentation level by 1.
    ///
    /// The function will not decrease the indent lower than 0.
    pub fn decrease_indent(&mut self) {
        self.decrease_indent_by(1);
    }

    /// Decrease the indent level by `amount`, stopping at zero.
    ///
    /// # Arguments
    ///
    /// * `amount` - The number of indents to remove from the current indent level.
    pub fn decrease_indent_by(&mut self, amount: usize) {
        self.indent = self.indent.saturating_sub(amount);
    }

    /// Return the length of the current indentation in spaces.
    fn indent_length(&self) -> usize {
        self.indent * self.tab_width
    }

    /// Return the string of spaces that makes up the indentation prefix for a new line.
    pub fn indent_string(&self) -> String {
        " ".repeat(self.indent_length())
    }

    /// Return the number of columns left on the current line.
    fn space_left(&self) -> usize {
        self.page_width.saturating_sub(self.column)
    }

    /// Write out the indentation string to the `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The object that implements the [`Write`] trait.
    pub fn write_indent(&mut self, stream: &mut dyn Write) -> Result<(), PyMutantError> {
        let indention = self.indent_string();
        if !indention.is_empty() {
            self.write_basic_string(stream, &indention)?;
        }
        Ok(())
    }

    /// Write newline characters to the `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The object that implements the [`Write`] trait.
    pub fn write_newline(&mut self, stream: &mut dyn Write) -> Result<(), PyMutantError> {
        write!(stream, "{}", self.newline)?;
        self.row += 1;
        self.column = 1;
        Ok(())
    }

    /// Write a space character to the `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The object that implements the [`Write`] trait.
    pub fn write_space(&mut self, stream: &mut dyn Write) -> Result<(), PyMutantError> {
        if self.wrap_lines && self.column == self.page_width {
            self.write_newline(stream)?;
            self.write_indent(stream)?;
        }
        self.write_basic_string(stream, " ")?;
        Ok(())
    }

    /// Write `spaces` space characters to the `stream`.
    pub fn write_spaces(
        &mut self,
        stream: &mut dyn Write,
        spaces: usize,
    ) -> Result<(), PyMutantError> {
        for _ in 0..spaces {
            self.write_space(stream)?;
        }
        Ok(())
    }

    /// Write `token` to `stream`.
    ///
    /// A wrapping printer starts a new line first if the token does not fit on the current line.
    ///
    /// # Arguments
    ///
    /// * `stream` - The [`Write`] object that receives the token.
    /// * `token` - The string slice to write to `stream`.
    pub fn write_token(&mut self, stream: &mut dyn Write, token: &str) -> Result<(), PyMutantError> {
        if !self.wrap_lines {
            return self.write_basic_string(stream, token);
        }

        if self.column > self.page_width {
            self.write_newline(stream)?;
        }

        if token.len() > self.page_width {
            // The token will not fit at all, so let it spill over the page width.
            if self.column > self.indent_length() {
                self.write_newline(stream)?;
                self.write_indent(stream)?;
            }
        } else if token.len() > self.space_left() {
            self.write_newline(stream)?;
            self.write_indent(stream)?;
        }
        self.write_basic_string(stream, token)
    }

    /// Write `count` copies of `token` to `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The [`Write`] object that will receive the tokens.
    /// * `token` - The token text to write to `stream`.
    /// * `count` - The number of copies of `token` to write to the stream.
    pub fn write_tokens(
        &mut self,
        stream: &mut dyn Write,
        token: &str,
        count: usize,
    ) -> Result<(), PyMutantError> {
        for _ in 0..count {
            self.write_token(stream, token)?;
        }
        Ok(())
    }

    /// Write a string of text to `stream`.  The printer may break the text at any point and does
    /// not treat it as an atomic token.
    ///
    /// # Arguments
    ///
    /// * `stream` - The [`Write`] object that will receive the text.
    /// * `s` - The text to write.
    /// * `next_line_text` - Text the printer writes at the start of each continuation line.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// printer.write_flowable_text(stream,
    ///                             "Swap the arithmetic operator in a binary expression.",
    ///                             "  ");
    /// ```
    ///
    /// Might produce the output:
    ///
    /// Swap the arithmetic operator
    ///   in a binary expression.
    pub fn write_flowable_text(
        &mut self,
        stream: &mut dyn Write,
        s: &str,
        next_line_text: &str,
    ) -> Result<(), PyMutantError> {
        // Embedded newlines and runs of spaces would break the column accounting.
        let mut text = String::from(s);
        text.remove_all("\n");
        text.remove_all("  ");

        let mut rest = text.as_str();
        while !rest.is_empty() {
            if !self.wrap_lines || rest.len() <= self.space_left() {
                self.write_basic_string(stream, rest)?;
                break;
            }

            let mut split = self.space_left();
            while split > 0 && !rest.is_char_boundary(split) {
                split -= 1;
            }
            if split > 0 {
                self.write_basic_string(stream, &rest[..split])?;
            }
            self.write_newline(stream)?;
            self.write_indent(stream)?;
            self.write_basic_string(stream, next_line_text)?;
            rest = &rest[split..];

            if split == 0 && self.space_left() == 0 {
                // The continuation text alone fills the line.
                self.write_basic_string(stream, rest)?;
                break;
            }
        }

        Ok(())
    }

    /// Low-level function to write a string to the stream.
    ///
    /// # Arguments
    ///
    /// * `stream` - The [`Write`] object that will receive the text.
    /// * `s` - The string slice referring to the text to write to `stream`.
    fn write_basic_string(&mut self, stream: &mut dyn Write, s: &str) -> Result<(), PyMutantError> {
        write!(stream, "{s}")?;
        self.column += s.chars().count();
        Ok(())
    }
}

/// Helper function to write an indent to `stream` while suppressing any errors.  The function
/// sends errors to the log.
///
/// # Arguments
///
/// * `printer` - The pretty printer that will write the indent to `stream`.
/// * `stream` - The [`Write`] object that will receive the text.
pub fn write_indent(printer: &mut PrettyPrinter, stream: &mut dyn Write) {
    if let Err(e) = printer.write_indent(stream) {
        log::info!("Unable to write indentation: {e}");
    }
}

/// Helper function to write a space to `stream` while suppressing any errors.  The function
/// sends errors to the log.
pub fn write_space(printer: &mut PrettyPrinter, stream: &mut dyn Write) {
    if let Err(e) = printer.write_space(stream) {
        log::info!("Unable to write space character: {e}");
    }
}

/// Helper function to write `amount` spaces to `stream` while suppressing errors.  The function
/// sends errors to the log.
pub fn write_spaces(printer: &mut PrettyPrinter, stream: &mut dyn Write, amount: usize) {
    if let Err(e) = printer.write_spaces(stream, amount) {
        log::info!("Unable to write space characters: {e}");
    }
}

/// Helper function to write a newline to `stream` while suppressing any errors.  The function
/// sends errors to the log.
pub fn write_newline(printer: &mut PrettyPrinter, stream: &mut dyn Write) {
    if let Err(e) = printer.write_newline(stream) {
        log::info!("Unable to write newline: {e}");
    }
}

/// Helper function to write a token to `stream` while suppressing any errors.  The function
/// sends errors to the log.
///
/// # Arguments
///
/// * `printer` - The pretty-printer that will write the token to the `stream`.
/// * `stream` - The [`Write`] object that will receive the text.
/// * `token` - The token text to write to the stream.
pub fn write_token(printer: &mut PrettyPrinter, stream: &mut dyn Write, token: &str) {
    if let Err(e) = printer.write_token(stream, token) {
        log::info!("Unable to write token: {e}");
    }
}

/// Helper function to write multiple copies of `token` to `stream` while suppressing errors.
/// The function sends error messages to the log.
pub fn write_tokens(printer: &mut PrettyPrinter, stream: &mut dyn Write, token: &str, count: usize) {
    if let Err(e) = printer.write_tokens(stream, token, count) {
        log::info!("Unable to write multiple tokens: {e}");
    }
}

/// Helper function to write flowable text to `stream` while suppressing any errors.  The
/// function sends errors to the log.
///
/// The flowable text has the same semantics as [`PrettyPrinter::write_flowable_text`]
pub fn write_flowable_text(
    printer: &mut PrettyPrinter,
    stream: &mut dyn Write,
    s: &str,
    next_line_text: &str,
) {
    if let Err(e) = printer.write_flowable_text(stream, s, next_line_text) {
        log::info!("Unable to write flowable text: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_increase_indent() {
        let mut printer = PrettyPrinter::new(1, 3);
        printer.increase_indent();
        assert_eq!(printer.indent_length(), 1);
        printer.increase_indent();
        assert_eq!(printer.indent_length(), 2);
        printer.increase_indent();
        assert_eq!(printer.indent_length(), 2);
    }

    #[test]
    fn test_printer_decrease_indent_by() {
        let mut printer = PrettyPrinter::new(1, 3);
        printer.increase_indent_by(5);
        assert_eq!(printer.indent_length(), 2);
        printer.decrease_indent_by(1);
        assert_eq!(printer.indent_length(), 1);
        printer.decrease_indent_by(10);
        assert_eq!(printer.indent_length(), 0);
        printer.decrease_indent();
        assert_eq!(printer.indent_length(), 0);
    }

    #[test]
    fn test_wrapping_printer_breaks_long_lines() {
        let mut printer = PrettyPrinter::new(2, 10);
        let mut out: Vec<u8> = Vec::new();
        printer.increase_indent();
        printer.write_token(&mut out, "abcdef").unwrap();
        printer.write_token(&mut out, "ghijkl").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abcdef\n  ghijkl");
        assert_eq!(printer.row, 2);
    }

    #[test]
    fn test_source_printer_never_wraps() {
        let mut printer = PrettyPrinter::new_for_source(4);
        let mut out: Vec<u8> = Vec::new();
        let long = "x".repeat(500);
        for _ in 0..40 {
            printer.increase_indent();
        }
        printer.write_indent(&mut out).unwrap();
        printer.write_token(&mut out, &long).unwrap();
        printer.write_space(&mut out).unwrap();
        printer.write_token(&mut out, &long).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.starts_with(&" ".repeat(160)));
        assert_eq!(text.len(), 160 + 1001);
    }

    #[test]
    fn test_flowable_text_continues_lines() {
        let mut printer = PrettyPrinter::new(1, 12);
        let mut out: Vec<u8> = Vec::new();
        printer
            .write_flowable_text(&mut out, "aaaa bbbb cccc dddd", "> ")
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines[1..].iter().all(|l| l.starts_with("> ")));
        assert_eq!(text.replace("\n> ", ""), "aaaa bbbb cccc dddd");
    }
}
