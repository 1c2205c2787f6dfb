//! Single-line text field component.
//!
//! A deliberately small input: printable characters, backspace, and cursor
//! movement. The app owns focus; an unfocused field renders without a
//! cursor marker.

use crate::runtime::Key;

/// Single-line text field with a character cursor.
#[derive(Debug, Clone)]
pub struct TextField {
    label: &'static str,
    placeholder: &'static str,
    value: Vec<char>,
    cursor: usize,
}

impl TextField {
    /// Create an empty field with a label and placeholder.
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: Vec::new(),
            cursor: 0,
        }
    }

    /// The current value as a string.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the value and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.cursor = self.value.len();
    }

    /// Apply a key press. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
                true
            }
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            Key::Right => {
                if self.cursor < self.value.len() {
                    self.cursor += 1;
                }
                true
            }
            _ => false,
        }
    }

    /// Render the field as one line; a focused field shows the cursor as an
    /// underscore at the insertion point.
    pub fn view(&self, focused: bool) -> String {
        let marker = if focused { ">" } else { " " };

        if self.value.is_empty() && !focused {
            return format!("{marker} {}: {}", self.label, self.placeholder);
        }

        let mut text: String = self.value.iter().collect();
        if focused {
            let byte_idx = self
                .value
                .iter()
                .take(self.cursor)
                .map(|c| c.len_utf8())
                .sum();
            text.insert(byte_idx, '_');
        }
        format!("{marker} {}: {}", self.label, text)
    }
}
