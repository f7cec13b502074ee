//! Keyboard shortcut overlay, toggled with `?`.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const CATEGORIES: [&str; 6] = [
    "Global",
    "Navigation",
    "Selection",
    "Actions",
    "Forms",
    "Text Editing",
];

pub struct HelpOverlay;

impl HelpOverlay {
    /// Help lines grouped by category; each action lists all of its keys
    pub fn lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = Vec::new();

        for category in CATEGORIES {
            let mut actions: Vec<Action> = Vec::new();
            for binding in &bindings {
                if binding.action.category() == category && !actions.contains(&binding.action) {
                    actions.push(binding.action);
                }
            }
            if actions.is_empty() {
                continue;
            }

            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::styled(format!(" {}", category), t.title_style()));
            for action in actions {
                let keys: Vec<String> = bindings
                    .iter()
                    .filter(|b| b.action == action)
                    .map(crate::keymap::KeyBinding::display)
                    .collect();
                let description = bindings
                    .iter()
                    .find(|b| b.action == action)
                    .map_or(action.description(), |b| b.get_description())
                    .to_string();
                lines.push(Line::from(vec![
                    Span::styled(format!("   {:<18}", keys.join(", ")), t.emphasis_style()),
                    Span::styled(description, t.text_style()),
                ]));
            }
        }
        lines
    }

    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup = center_popup(area, 70, 85);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" Keyboard shortcuts · {} ", keymap.preset.name()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);
        frame.render_widget(Paragraph::new(Self::lines(keymap)), list_area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(format!("Keymap settings: {}", config_path), t.muted_style()),
                Line::styled("Press any key to close", t.muted_style()),
            ])
            .alignment(Alignment::Center),
            footer_area,
        );
    }
}
