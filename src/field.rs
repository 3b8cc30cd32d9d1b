//! Single-line text input field.
//!
//! A pared-down text input in the bubbles style: a char-buffer value, a
//! cursor position, a prompt, a placeholder shown while empty, and a key map
//! for editing. The form owns four of these, one per table bound. Only the
//! focused field consumes key messages.

use crate::key::{self, matches_binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Key bindings for editing within a field.
#[derive(Debug, Clone)]
pub struct FieldKeyMap {
    /// Move the cursor one character right.
    pub character_forward: key::Binding,
    /// Move the cursor one character left.
    pub character_backward: key::Binding,
    /// Move the cursor to the start of the value.
    pub line_start: key::Binding,
    /// Move the cursor to the end of the value.
    pub line_end: key::Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: key::Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: key::Binding,
}

/// The default editing key map.
pub fn default_key_map() -> FieldKeyMap {
    FieldKeyMap {
        character_forward: key::new_binding(vec![key::with_keys_str(&["right", "ctrl+f"])]),
        character_backward: key::new_binding(vec![key::with_keys_str(&["left", "ctrl+b"])]),
        line_start: key::new_binding(vec![key::with_keys_str(&["home", "ctrl+a"])]),
        line_end: key::new_binding(vec![key::with_keys_str(&["end", "ctrl+e"])]),
        delete_character_backward: key::new_binding(vec![key::with_keys_str(&[
            "backspace", "ctrl+h",
        ])]),
        delete_character_forward: key::new_binding(vec![key::with_keys_str(&["delete", "ctrl+d"])]),
    }
}

/// A single-line input field model.
pub struct Model {
    /// The prompt rendered before the value.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the typed value.
    pub text_style: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the character under the cursor while focused.
    pub cursor_style: Style,
    /// Maximum number of characters accepted; 0 means no limit.
    pub char_limit: usize,
    /// Key bindings for editing.
    pub key_map: FieldKeyMap,

    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates a new field with default settings. The field starts blurred.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        char_limit: 0,
        key_map: default_key_map(),
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        if self.char_limit > 0 {
            self.value.truncate(self.char_limit);
        }
        self.pos = self.value.len();
    }

    /// The current cursor position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value's length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start of the value.
    pub fn cursor_start(&mut self) {
        self.pos = 0;
    }

    /// Moves the cursor to the end of the value.
    pub fn cursor_end(&mut self) {
        self.pos = self.value.len();
    }

    /// Clears the value and resets the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Handles a message. Blurred fields ignore everything.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_editing_keys(key_msg);
            self.handle_character_input(key_msg);
        }

        None
    }

    fn handle_editing_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.pos += 1;
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward)
            && self.pos < self.value.len()
        {
            self.value.remove(self.pos);
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Shift is fine (it is encoded in the char); ctrl/alt are chords.
            if key_msg.modifiers.contains(KeyModifiers::CONTROL)
                || key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                return;
            }
            if self.char_limit > 0 && self.value.len() >= self.char_limit {
                return;
            }
            self.value.insert(self.pos, ch);
            self.pos += 1;
        }
    }

    /// Renders the field: prompt, then value or placeholder, with a
    /// reverse-video cursor while focused.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view());
        }

        let value: String = self.value.iter().collect();
        if !self.focus {
            return format!("{}{}", prompt, self.text_style.render(&value));
        }

        let before: String = self.value[..self.pos].iter().collect();
        let (under, after) = if self.pos < self.value.len() {
            (
                self.value[self.pos].to_string(),
                self.value[self.pos + 1..].iter().collect::<String>(),
            )
        } else {
            (" ".to_string(), String::new())
        };

        format!(
            "{}{}{}{}",
            prompt,
            self.text_style.render(&before),
            self.cursor_style.render(&under),
            self.text_style.render(&after)
        )
    }

    fn placeholder_view(&self) -> String {
        if !self.focus {
            return self.placeholder_style.render(&self.placeholder);
        }
        let mut chars = self.placeholder.chars();
        let first = chars.next().unwrap_or(' ').to_string();
        let rest: String = chars.collect();
        format!(
            "{}{}",
            self.cursor_style.render(&first),
            self.placeholder_style.render(&rest)
        )
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Msg {
        chord(code, KeyModifiers::NONE)
    }

    fn chord(code: KeyCode, modifiers: KeyModifiers) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers,
        })
    }

    fn type_str(field: &mut Model, s: &str) {
        for ch in s.chars() {
            field.update(&press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_new_defaults() {
        let field = new();
        assert_eq!(field.prompt, "> ");
        assert_eq!(field.value(), "");
        assert_eq!(field.position(), 0);
        assert!(!field.focused());
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut field = new();
        field.focus();
        type_str(&mut field, "42");
        assert_eq!(field.value(), "42");
        assert_eq!(field.position(), 2);

        field.cursor_start();
        field.update(&press(KeyCode::Char('-')));
        assert_eq!(field.value(), "-42");
    }

    #[test]
    fn test_blurred_field_ignores_input() {
        let mut field = new();
        type_str(&mut field, "123");
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = new();
        field.focus();
        field.set_value("123");

        field.update(&press(KeyCode::Backspace));
        assert_eq!(field.value(), "12");

        field.cursor_start();
        field.update(&press(KeyCode::Delete));
        assert_eq!(field.value(), "2");
    }

    #[test]
    fn test_backspace_on_empty_value() {
        let mut field = new();
        field.focus();
        field.update(&press(KeyCode::Backspace));
        assert_eq!(field.value(), "");
        assert_eq!(field.position(), 0);
    }

    #[test]
    fn test_cursor_movement() {
        let mut field = new();
        field.focus();
        field.set_value("345");
        assert_eq!(field.position(), 3);

        field.update(&press(KeyCode::Left));
        assert_eq!(field.position(), 2);
        field.update(&press(KeyCode::Home));
        assert_eq!(field.position(), 0);
        field.update(&press(KeyCode::Left));
        assert_eq!(field.position(), 0);
        field.update(&press(KeyCode::End));
        assert_eq!(field.position(), 3);
        field.update(&press(KeyCode::Right));
        assert_eq!(field.position(), 3);
    }

    #[test]
    fn test_char_limit() {
        let mut field = new();
        field.focus();
        field.char_limit = 3;
        type_str(&mut field, "12345");
        assert_eq!(field.value(), "123");

        field.set_value("6789");
        assert_eq!(field.value(), "678");
    }

    #[test]
    fn test_control_chords_are_not_text() {
        let mut field = new();
        field.focus();
        field.update(&chord(KeyCode::Char('c'), KeyModifiers::CONTROL));
        field.update(&chord(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut field = new();
        field.set_value("12");
        field.set_cursor(10);
        assert_eq!(field.position(), 2);
    }

    #[test]
    fn test_view_shows_placeholder_when_empty() {
        let mut field = new();
        field.prompt_style = Style::new();
        field.placeholder_style = Style::new();
        field.cursor_style = Style::new();
        field.placeholder = "0".to_string();
        assert_eq!(field.view(), "> 0");
    }

    #[test]
    fn test_view_shows_value() {
        let mut field = new();
        field.prompt_style = Style::new();
        field.text_style = Style::new();
        field.set_value("12");
        assert_eq!(field.view(), "> 12");
    }

    #[test]
    fn test_reset() {
        let mut field = new();
        field.set_value("99");
        field.reset();
        assert_eq!(field.value(), "");
        assert_eq!(field.position(), 0);
    }
}
