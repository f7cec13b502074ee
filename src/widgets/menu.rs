//! Card menu: each item is a three-line card with an accent bar when
//! selected. Used for the dashboard quick-access grid.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// Card height in rows
pub const CARD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: String,
    pub title: String,
    /// Muted text after the title
    pub description: Option<String>,
}

impl MenuItem {
    pub fn new(icon: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Selection state, wrapping around at both ends
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Rows needed to show every card
    pub fn height(&self) -> u16 {
        self.items.len() as u16 * CARD_HEIGHT
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + i as u16 * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }

            let selected = state.selected == i;
            let base = if selected {
                t.highlight_style()
            } else {
                t.text_style()
            };
            let bar = if selected { "▌" } else { " " };
            let bar_style = t.border_focused_style().patch(base);
            let fill = |used: usize| " ".repeat((area.width as usize).saturating_sub(used));

            let padding = Line::from(vec![
                Span::styled(bar, bar_style),
                Span::styled(fill(1), base),
            ]);

            let mut spans = vec![
                Span::styled(bar, bar_style),
                Span::styled(format!(" {}  ", item.icon), base),
                Span::styled(item.title.clone(), base.add_modifier(Modifier::BOLD)),
            ];
            if let Some(description) = &item.description {
                spans.push(Span::styled(
                    format!("  {}", description),
                    t.muted_style().patch(Style::default().bg(
                        base.bg.unwrap_or(ratatui::style::Color::Reset),
                    )),
                ));
            }
            let used = Line::from(spans.clone()).width();
            spans.push(Span::styled(fill(used), base));

            padding
                .clone()
                .render(Rect::new(area.x, y, area.width, 1), buf);
            Line::from(spans).render(Rect::new(area.x, y + 1, area.width, 1), buf);
            padding.render(Rect::new(area.x, y + 2, area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_wraps() {
        let mut state = MenuState::new();
        state.previous(4);
        assert_eq!(state.selected(), 3);
        state.next(4);
        assert_eq!(state.selected(), 0);
        state.next(0);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_render_cards() {
        let menu = Menu::new(vec![
            MenuItem::new("◎", "Members").description("Browse the network"),
            MenuItem::new("✉", "Messages"),
        ]);
        assert_eq!(menu.height(), 6);

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        let mut state = MenuState::new();
        StatefulWidget::render(menu, area, &mut buf, &mut state);

        let row = |y: u16| -> String { (0..40).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(1).starts_with('▌'));
        assert!(row(1).contains("Members"));
        assert!(row(4).contains("Messages"));
    }
}
