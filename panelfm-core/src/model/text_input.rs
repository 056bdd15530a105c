//! Single-line text input used by every prompt (search bar, rename,
//! create-item, command line).

use compact_str::CompactString;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: CompactString,
    /// Byte offset of the cursor, always on a char boundary.
    cursor: usize,
    focused: bool,
    pub width: u16,
    pub placeholder: &'static str,
}

impl TextInput {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            placeholder,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn set_value(&mut self, text: impl Into<CompactString>) {
        self.value = text.into();
        self.cursor = self.value.len();
    }

    /// Clear the text and drop focus.
    pub fn reset(&mut self) {
        self.set_value("");
        self.blur();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut input_str = self.value.to_string();
        input_str.insert(self.cursor, ch);
        self.value = input_str.into();
        self.cursor += ch.len_utf8();
    }

    pub fn delete_char_before(&mut self) -> bool {
        let Some((char_pos, _)) = self.value[..self.cursor].char_indices().next_back() else {
            return false;
        };

        let mut input_str = self.value.to_string();
        input_str.remove(char_pos);
        self.value = input_str.into();
        self.cursor = char_pos;
        true
    }

    pub fn move_left(&mut self) {
        if let Some((pos, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_multibyte() {
        let mut input = TextInput::new("name");
        for ch in "añb".chars() {
            input.insert_char(ch);
        }
        assert_eq!(input.value(), "añb");

        input.move_left();
        input.move_left();
        assert!(input.delete_char_before());
        assert_eq!(input.value(), "ñb");
        assert_eq!(input.cursor(), 0);
        assert!(!input.delete_char_before());

        input.move_right();
        input.insert_char('x');
        assert_eq!(input.value(), "ñxb");
    }

    #[test]
    fn test_reset_clears_and_blurs() {
        let mut input = TextInput::new("");
        input.focus();
        input.set_value("query");
        input.reset();
        assert_eq!(input.value(), "");
        assert!(!input.is_focused());
        assert_eq!(input.cursor(), 0);
    }
}
