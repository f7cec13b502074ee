//! Home screen: manifesto, quick access cards and community stats.

use crate::components::{Footer, Header, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::keymap::Action;
use crate::navigation::{
    NavEvent, TARGET_INDICATIONS, TARGET_MEMBERS, TARGET_MESSAGES, TARGET_PROFILE,
};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::create_standard_layout;
use crate::widgets::{Menu, MenuItem, MenuState};
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const MANIFESTO: &str = "We are entrepreneurs who refuse the ordinary. Disruption brings \
                         together people who build, invest and open doors for each other.";

/// Static community figures
pub const STATS: [(&str, &str); 3] = [("150+", "members"), ("50+", "referrals"), ("25+", "deals")];

/// Quick access entries: navigation target, icon, title, description
const QUICK_ACCESS: [(&str, &str, &str, &str); 4] = [
    (TARGET_MEMBERS, "◎", "Members", "Find leaders in every segment"),
    (TARGET_INDICATIONS, "⇄", "Referrals", "Share and pick up opportunities"),
    (TARGET_MESSAGES, "✉", "Messages", "Talk to your connections"),
    (TARGET_PROFILE, "☺", "Profile", "Your card in the network"),
];

pub struct DashboardScreen {
    first_name: String,
    menu_state: MenuState,
}

impl DashboardScreen {
    pub fn new(profile_name: &str) -> Self {
        Self {
            first_name: profile_name
                .split_whitespace()
                .next()
                .unwrap_or(profile_name)
                .to_string(),
            menu_state: MenuState::new(),
        }
    }

    /// Navigation target of the highlighted card
    pub fn selected_target(&self) -> &'static str {
        QUICK_ACCESS[self.menu_state.selected()].0
    }

    fn menu() -> Menu {
        Menu::new(
            QUICK_ACCESS
                .iter()
                .map(|(_, icon, title, description)| {
                    MenuItem::new(*icon, *title).description(*description)
                })
                .collect(),
        )
    }

    fn render_stats(frame: &mut Frame, area: Rect) {
        let t = theme();
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for ((value, label), cell) in STATS.iter().zip(cells.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(t.border_style());
            let text = vec![
                Line::styled(*value, t.title_style()),
                Line::styled(*label, t.muted_style()),
            ];
            frame.render_widget(
                Paragraph::new(text).block(block).alignment(Alignment::Center),
                *cell,
            );
        }
    }
}

impl Screen for DashboardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [header, content, footer] = create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);
        Header::render(
            frame,
            header,
            &format!("Welcome back, {}", self.first_name),
            ScreenId::Dashboard.title(),
        );

        let menu = Self::menu();
        let [manifesto, _, menu_area, stats] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(menu.height()),
            Constraint::Length(4),
        ])
        .areas(content);

        frame.render_widget(
            Paragraph::new(MANIFESTO)
                .style(t.text_style())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(t.border_focused_style())
                        .title(Span::styled(" Manifesto ", t.title_style()))
                        .padding(Padding::horizontal(1)),
                ),
            manifesto,
        );
        frame.render_stateful_widget(menu, menu_area, &mut self.menu_state);
        Self::render_stats(frame, stats);

        let keymap = &ctx.config.keymap;
        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Navigate | {}: Open | {}: Help | {}: Quit",
                keymap.navigation_display(),
                keymap.get_key_display_for_action(Action::Confirm),
                keymap.get_key_display_for_action(Action::Help),
                keymap.get_key_display_for_action(Action::Quit),
            ),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let len = QUICK_ACCESS.len();
        Ok(match ctx.action(key) {
            Some(Action::MoveDown | Action::MoveRight | Action::NextField) => {
                self.menu_state.next(len);
                ScreenAction::None
            }
            Some(Action::MoveUp | Action::MoveLeft | Action::PrevField) => {
                self.menu_state.previous(len);
                ScreenAction::None
            }
            Some(Action::GoToTop) => {
                self.menu_state.select(0);
                ScreenAction::None
            }
            Some(Action::GoToEnd) => {
                self.menu_state.select(len - 1);
                ScreenAction::None
            }
            Some(Action::Confirm) => {
                ScreenAction::Navigate(NavEvent::Navigate(self.selected_target().to_string()))
            }
            Some(Action::Cancel) => ScreenAction::Quit,
            _ => ScreenAction::None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(screen: &mut DashboardScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        screen
            .handle_event(
                Event::Key(KeyEvent::new(code, KeyModifiers::NONE)),
                &ScreenContext::new(&config),
            )
            .unwrap()
    }

    #[test]
    fn test_confirm_emits_target() {
        let mut screen = DashboardScreen::new("João Silva");
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Navigate(NavEvent::Navigate("members".into()))
        );

        press(&mut screen, KeyCode::Up);
        assert_eq!(screen.selected_target(), "profile");
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Down);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Navigate(NavEvent::Navigate("indications".into()))
        );
    }

    #[test]
    fn test_greets_by_first_name() {
        assert_eq!(DashboardScreen::new("João Silva").first_name, "João");
        assert_eq!(DashboardScreen::new("").first_name, "");
    }
}
