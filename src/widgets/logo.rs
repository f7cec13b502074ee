//! The [`DisruptionLogo`] widget renders the community wordmark.
use crate::styles::{theme, ThemeType};
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Widget};

const WORDMARK: &str = indoc! {"
    ╔╦╗╦╔═╗╦═╗╦ ╦╔═╗╔╦╗╦╔═╗╔╗╔
     ║║║╚═╗╠╦╝║ ║╠═╝ ║ ║║ ║║║║
    ═╩╝╩╚═╝╩╚═╚═╝╩   ╩ ╩╚═╝╝╚╝
"};

const TAGLINE: &str = "C O M M U N I T Y";

/// Wordmark widget, centered in its area.
///
/// `Large` is the three-line box drawing wordmark with the tagline under it;
/// `Small` is a single line for headers.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DisruptionLogo {
    size: Size,
    /// 0.0 is fully visible, 1.0 fully faded
    fade: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    #[default]
    Small,
    Large,
}

impl DisruptionLogo {
    pub const fn small() -> Self {
        Self {
            size: Size::Small,
            fade: 0.0,
        }
    }

    pub const fn large() -> Self {
        Self {
            size: Size::Large,
            fade: 0.0,
        }
    }

    /// Fade towards the background; `amount` is clamped to `0.0..=1.0`
    pub fn fade(mut self, amount: f32) -> Self {
        self.fade = amount.clamp(0.0, 1.0);
        self
    }

    /// Lines needed to draw this logo
    pub fn height(&self) -> u16 {
        match self.size {
            Size::Small => 1,
            Size::Large => WORDMARK.lines().count() as u16 + 2,
        }
    }

    fn style(&self) -> Style {
        let t = theme();
        if t.theme_type == ThemeType::NoColor {
            return if self.fade >= 0.5 {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
        }
        let color = match t.primary {
            Color::Rgb(r, g, b) => {
                let keep = 1.0 - self.fade;
                Color::Rgb(
                    (f32::from(r) * keep) as u8,
                    (f32::from(g) * keep) as u8,
                    (f32::from(b) * keep) as u8,
                )
            }
            other => other,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn text(&self) -> Text<'static> {
        let style = self.style();
        match self.size {
            Size::Small => Text::from(Line::styled("◆ DISRUPTION", style)),
            Size::Large => {
                let mut lines: Vec<Line> = WORDMARK
                    .lines()
                    .map(|l| Line::styled(l.to_string(), style))
                    .collect();
                lines.push(Line::default());
                lines.push(Line::styled(TAGLINE, style.remove_modifier(Modifier::BOLD)));
                Text::from(lines)
            }
        }
    }
}

impl Widget for DisruptionLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
