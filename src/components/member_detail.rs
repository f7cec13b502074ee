//! Member detail card shown over the directory.

use crate::data::Member;
use crate::keymap::Action;
use crate::navigation::NavEvent;
use crate::styles::theme;
use crate::utils::center_fixed;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Button {
    Message,
    Refer,
}

/// Modal state for the selected member
#[derive(Debug, Clone)]
pub struct MemberDetail {
    member: Member,
    focused: Button,
}

/// Initials for the avatar placeholder, e.g. "Marina Santos" -> "MS"
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let pick = match words.as_slice() {
        [] => Vec::new(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    pick.iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

impl MemberDetail {
    pub fn new(member: Member) -> Self {
        Self {
            member,
            focused: Button::Message,
        }
    }

    pub fn member(&self) -> &Member {
        &self.member
    }

    /// Navigation event triggered by `action`, if any
    pub fn handle_action(&mut self, action: Action) -> Option<NavEvent> {
        match action {
            Action::Cancel => Some(NavEvent::DismissMember),
            Action::MoveLeft | Action::MoveRight | Action::NextField | Action::PrevField => {
                self.focused = match self.focused {
                    Button::Message => Button::Refer,
                    Button::Refer => Button::Message,
                };
                None
            }
            Action::Confirm => Some(match self.focused {
                Button::Message => NavEvent::MessageMember,
                Button::Refer => NavEvent::IndicateMember,
            }),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let m = &self.member;
        let popup = center_fixed(area, 64, 20);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(" Member ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", initials(&m.name)), t.button_style(true)),
                Span::raw("  "),
                Span::styled(m.name.clone(), t.title_style()),
                Span::raw("  "),
                Span::styled(format!("[{}]", m.level.label()), t.level_style(m.level)),
            ]),
            Line::from(vec![
                Span::raw("      "),
                Span::styled(m.company.clone(), t.text_style()),
                Span::styled(format!("  ·  {}", m.segment), t.muted_style()),
            ]),
            Line::default(),
            Line::styled(m.bio.clone(), t.text_style()),
            Line::default(),
        ];
        let links = m.social_links();
        if !links.is_empty() {
            lines.push(Line::styled("Contacts", t.emphasis_style()));
            for (network, handle) in links {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<10}", network), t.muted_style()),
                    Span::styled(handle.to_string(), t.text_style()),
                ]));
            }
        }

        let [body, buttons] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ✉ Message ", t.button_style(self.focused == Button::Message)),
                Span::raw("   "),
                Span::styled(" ➜ Refer ", t.button_style(self.focused == Button::Refer)),
                Span::styled("   Esc close", t.muted_style()),
            ]))
            .alignment(Alignment::Center),
            buttons,
        );
    }
}
