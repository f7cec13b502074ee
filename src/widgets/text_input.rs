//! Renders a [`TextInput`] as a bordered, single-line field.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    masked: bool,
    invalid: bool,
    /// Formatted view of the raw text, e.g. a CPF with its punctuation
    display: Option<String>,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
            invalid: false,
            display: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show bullets instead of the text
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Draw the border in the error color
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    fn display_text(&self) -> String {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or_default().to_string()
        } else if self.masked {
            "•".repeat(self.input.len())
        } else if let Some(display) = &self.display {
            display.clone()
        } else {
            text.to_string()
        }
    }

    /// Cursor column in the displayed text. With a formatted display the
    /// cursor sits after the same number of raw characters, skipping any
    /// punctuation the formatter inserted.
    fn cursor_column(&self) -> usize {
        let cursor = self.input.cursor();
        match &self.display {
            Some(display) if !self.masked && cursor > 0 => {
                let raw: Vec<char> = self.input.text().chars().collect();
                let mut matched = 0;
                for (column, c) in display.chars().enumerate() {
                    if raw.get(matched) == Some(&c) {
                        matched += 1;
                        if matched == cursor {
                            return column + 1;
                        }
                    }
                }
                display.chars().count()
            }
            _ => cursor,
        }
    }

    fn block(&self) -> Block<'a> {
        let t = theme();
        let border = if self.invalid {
            t.error_style()
        } else if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let style = if self.input.text().is_empty() {
            t.placeholder_style()
        } else {
            t.text_style()
        };
        Paragraph::new(self.display_text())
            .style(style)
            .block(self.block())
            .render(area, buf);
    }
}

/// Renders a [`TextInputWidget`] and places the terminal cursor in it.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let inner = widget.block().inner(area);
        let cursor = (widget.focused && inner.width > 0)
            .then(|| widget.cursor_column().min(inner.width as usize - 1) as u16);

        self.render_widget(widget, area);

        if let Some(offset) = cursor {
            self.set_cursor_position((inner.x + offset, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_and_mask() {
        let empty = TextInput::new();
        let widget = TextInputWidget::new(&empty).placeholder("000.000.000-00");
        assert_eq!(widget.display_text(), "000.000.000-00");

        let secret = TextInput::with_text("hunter2");
        assert_eq!(TextInputWidget::new(&secret).masked(true).display_text(), "•••••••");
    }

    #[test]
    fn test_formatted_display_cursor() {
        let mut input = TextInput::with_text("12345678901");
        let widget = TextInputWidget::new(&input).display("123.456.789-01");
        assert_eq!(widget.display_text(), "123.456.789-01");
        assert_eq!(widget.cursor_column(), 14);

        input.move_home();
        input.move_right();
        input.move_right();
        input.move_right();
        input.move_right();
        let widget = TextInputWidget::new(&input).display("123.456.789-01");
        assert_eq!(widget.cursor_column(), 5);
    }
}
