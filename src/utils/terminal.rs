//! Terminal output sanitization utilities
//!
//! # Security: Terminal Injection Prevention
//!
//! Paths, timestamps and error messages in `history.json` come from the filesystem and
//! the cleaner, so they are sanitized before display to prevent terminal injection via
//! escape sequences. A folder whose name embeds escape codes could otherwise clear the
//! screen, recolor the terminal or corrupt the dashboard layout.
//!
//! Every renderer in [`crate::view::text`] and [`crate::tui`] passes user-controlled
//! strings through [`strip_ansi_codes`].

use std::borrow::Cow;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strips ANSI escape sequences and control characters from a string
///
/// Removes CSI sequences (`ESC [ ... letter`), OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`) and every other control character except tab and newline.
/// Clean input is returned borrowed.
///
/// # Examples
///
/// ```
/// use dev_cleaner_status::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31m/Users/alice/app\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "/Users/alice/app");
/// ```
pub fn strip_ansi_codes(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| ch.is_control() && ch != '\t' && ch != '\n') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Parameters and intermediates run until the final letter
                    for next in chars.by_ref() {
                        if next.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }

        result.push(ch);
    }

    Cow::Owned(result)
}
