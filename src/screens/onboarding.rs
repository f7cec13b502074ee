//! Three-step introduction shown after the first login.

use crate::components::{Footer, FOOTER_HEIGHT};
use crate::keymap::Action;
use crate::navigation::NavEvent;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_fixed;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tracing::debug;

pub struct OnboardingStep {
    pub icon: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [OnboardingStep; 3] = [
    OnboardingStep {
        icon: "◎",
        badge: "Premium Networking",
        title: "Connect with Leaders",
        description: "Meet entrepreneurs and executives who are shaping the market. \
                      Every member is curated, so every conversation counts.",
    },
    OnboardingStep {
        icon: "⇄",
        badge: "Strategic Business",
        title: "Referral System",
        description: "Post opportunities, refer trusted partners and close deals \
                      inside the network.",
    },
    OnboardingStep {
        icon: "★",
        badge: "Rewards System",
        title: "Gamification and Rewards",
        description: "Climb from Member to Partner to Infinity as you generate \
                      business for the community.",
    },
];

#[derive(Default)]
pub struct OnboardingScreen {
    step: usize,
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    fn is_last(&self) -> bool {
        self.step + 1 == STEPS.len()
    }

    /// Advance one step; on the last step this completes onboarding
    pub fn next(&mut self) -> ScreenAction {
        if self.is_last() {
            return ScreenAction::Navigate(NavEvent::OnboardingCompleted);
        }
        self.step += 1;
        debug!("Onboarding step {}", self.step + 1);
        ScreenAction::None
    }

    /// Go back one step; a no-op on the first one
    pub fn previous(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    fn progress_dots(&self) -> Line<'static> {
        let t = theme();
        let spans: Vec<Span> = (0..STEPS.len())
            .flat_map(|i| {
                let (symbol, style) = if i == self.step {
                    ("━━━", t.title_style())
                } else {
                    ("━", t.muted_style())
                };
                [Span::styled(symbol, style), Span::raw(" ")]
            })
            .collect();
        Line::from(spans)
    }
}

impl Screen for OnboardingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let step = &STEPS[self.step];
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);

        let card = center_fixed(body, 56, 16);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} / {} ", self.step + 1, STEPS.len()))
            .title_alignment(Alignment::Right);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [icon, badge, _, title, _, description, dots, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(step.icon)
                .style(t.title_style())
                .alignment(Alignment::Center),
            icon,
        );
        frame.render_widget(
            Paragraph::new(step.badge.to_uppercase())
                .style(t.emphasis_style())
                .alignment(Alignment::Center),
            badge,
        );
        frame.render_widget(
            Paragraph::new(step.title)
                .style(t.title_style())
                .alignment(Alignment::Center),
            title,
        );
        frame.render_widget(
            Paragraph::new(step.description)
                .style(t.text_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            description.inner(Margin::new(2, 0)),
        );
        frame.render_widget(
            Paragraph::new(self.progress_dots()).alignment(Alignment::Center),
            dots,
        );

        let next_label = if self.is_last() { " Get started " } else { " Next " };
        let mut spans = Vec::new();
        if self.step > 0 {
            spans.push(Span::styled(" Back ", t.button_style(false)));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(next_label, t.button_style(true)));
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            buttons,
        );

        let keymap = &ctx.config.keymap;
        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Next | {}: Back | {}: Help",
                keymap.get_key_display_for_action(Action::Confirm),
                keymap.get_key_display_for_action(Action::MoveLeft),
                keymap.get_key_display_for_action(Action::Help),
            ),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        Ok(match ctx.action(key) {
            Some(Action::Confirm | Action::MoveRight | Action::NextField) => self.next(),
            Some(Action::MoveLeft | Action::PrevField) => {
                self.previous();
                ScreenAction::None
            }
            _ => ScreenAction::None,
        })
    }
}
