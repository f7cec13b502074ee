use crate::keymap::Action;
use crossterm::event::{KeyCode, KeyModifiers};

/// Which characters an input accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFilter {
    #[default]
    Any,
    /// ASCII digits only (CPF, birth year, money values)
    Digits,
}

impl InputFilter {
    fn accepts(self, c: char) -> bool {
        match self {
            InputFilter::Any => !c.is_control(),
            InputFilter::Digits => c.is_ascii_digit(),
        }
    }
}

/// Single-line text field state: text, cursor (in chars) and input rules.
///
/// ```
/// use disruption::utils::text_input::{InputFilter, TextInput};
///
/// let mut cpf = TextInput::new().filter(InputFilter::Digits).max_len(11);
/// for c in "12a3".chars() {
///     cpf.insert_char(c);
/// }
/// assert_eq!(cpf.text(), "123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
    filter: InputFilter,
    max_len: Option<usize>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn filter(mut self, filter: InputFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Maximum length in characters
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Empty or whitespace only
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the text (unfiltered), cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Insert at the cursor. Returns false if the filter or length limit
    /// rejected the character.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.filter.accepts(c) || self.max_len.is_some_and(|max| self.len() >= max) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply an editing action. Returns true if it was one.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Handle a key event. Plain characters are always typed, even when a
    /// preset binds them (vim `h`, `x`); other keys go through `action`
    /// first, then raw key handling. Characters typed with Ctrl or Alt are
    /// never inserted.
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Option<Action>,
    ) -> bool {
        if let Some(c) = typed_char(code, modifiers) {
            self.insert_char(c);
            return true;
        }

        if let Some(action) = action {
            if self.handle_action(action) {
                return true;
            }
        }

        match code {
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.move_home();
                true
            }
            KeyCode::End => {
                self.move_end();
                true
            }
            _ => false,
        }
    }

    /// Whether a mapped action still applies while an input has focus.
    ///
    /// Everything else (e.g. `Quit` on `q`) is suppressed so the key is
    /// typed instead.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextField
                | Action::PrevField
                | Action::Save
                | Action::MoveUp
                | Action::MoveDown
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}

/// The character a key event types, if it is a plain (or shifted) character
pub fn typed_char(code: KeyCode, modifiers: KeyModifiers) -> Option<char> {
    match code {
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("helo");
        input.move_left();
        input.insert_char('l');
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_unicode_editing() {
        let mut input = TextInput::with_text("João");
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "Joo");
        input.insert_char('ã');
        assert_eq!(input.text(), "João");
    }

    #[test]
    fn test_delete_and_bounds() {
        let mut input = TextInput::with_text("abc");
        input.delete();
        assert_eq!(input.text(), "abc");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "abc");
        input.delete();
        assert_eq!(input.text(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_digit_filter_and_limit() {
        let mut input = TextInput::new().filter(InputFilter::Digits).max_len(3);
        assert!(!input.insert_char('x'));
        assert!(input.insert_char('1'));
        input.insert_char('2');
        input.insert_char('3');
        assert!(!input.insert_char('4'));
        assert_eq!(input.text(), "123");
    }

    #[test]
    fn test_handle_key_ignores_control_chars() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyCode::Char('a'), KeyModifiers::NONE, None));
        assert!(!input.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL, None));
        assert!(input.handle_key(KeyCode::Char('B'), KeyModifiers::SHIFT, None));
        assert_eq!(input.text(), "aB");
    }

    #[test]
    fn test_handle_key_actions_and_plain_chars() {
        let mut input = TextInput::with_text("hello");
        input.handle_key(KeyCode::Char('a'), KeyModifiers::CONTROL, Some(Action::Home));
        assert_eq!(input.cursor(), 0);

        // A bound plain character is still typed
        input.handle_key(KeyCode::Char('x'), KeyModifiers::NONE, Some(Action::DeleteChar));
        assert_eq!(input.text(), "xhello");
    }

    #[test]
    fn test_take_and_whitespace() {
        let mut input = TextInput::with_text("   ");
        assert!(input.is_empty());
        assert_eq!(input.take(), "   ");
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_is_action_allowed_when_focused() {
        assert!(TextInput::is_action_allowed_when_focused(&Action::Cancel));
        assert!(TextInput::is_action_allowed_when_focused(&Action::NextField));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Save));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Quit));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Help));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Create));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Search));
    }
}
