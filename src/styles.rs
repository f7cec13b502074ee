//! Theme and style system.
//!
//! One global [`Theme`] picked at startup (dark, light or no-color). The
//! brand accent is copper; everything else follows the terminal palette.

use crate::data::{IndicationStatus, MemberLevel};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// List selection indicator shown next to the selected item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Brand copper
pub const COPPER: Color = Color::Rgb(184, 115, 51);
/// Lighter copper for gradients and the splash fade
pub const COPPER_LIGHT: Color = Color::Rgb(218, 160, 109);

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Set the global theme
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Current global theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// No colors at all (`NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    /// Unknown names fall back to dark
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Brand accent: titles, focused borders, primary buttons
    pub primary: Color,
    /// Partner badge, secondary accents
    pub secondary: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    /// Outgoing chat bubble
    pub bubble_me: Color,
    /// Incoming chat bubble
    pub bubble_other: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: COPPER,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: COPPER_LIGHT,
            border: Color::DarkGray,
            border_focused: COPPER,
            highlight_bg: Color::Rgb(48, 38, 30),
            bubble_me: COPPER,
            bubble_other: Color::Rgb(40, 40, 40),
        }
    }

    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Rgb(150, 85, 30),
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Rgb(150, 85, 30),
            border: Color::DarkGray,
            border_focused: Color::Rgb(150, 85, 30),
            highlight_bg: Color::Rgb(240, 225, 210),
            bubble_me: Color::Rgb(150, 85, 30),
            bubble_other: Color::Rgb(225, 225, 225),
        }
    }

    /// Palette values are unused here; the style helpers only set modifiers
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            bubble_me: Color::Reset,
            bubble_other: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    fn fg(&self, color: Color, fallback: Modifier) -> Style {
        if self.is_plain() {
            Style::default().add_modifier(fallback)
        } else {
            Style::default().fg(color)
        }
    }

    pub fn title_style(&self) -> Style {
        self.fg(self.primary, Modifier::BOLD)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.fg(self.text, Modifier::empty())
    }

    pub fn muted_style(&self) -> Style {
        self.fg(self.text_muted, Modifier::DIM)
    }

    pub fn emphasis_style(&self) -> Style {
        self.fg(self.text_emphasis, Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        self.fg(self.success, Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        self.fg(self.warning, Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        self.fg(self.error, Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        self.fg(self.border, Modifier::empty())
    }

    pub fn border_focused_style(&self) -> Style {
        self.fg(self.border_focused, Modifier::BOLD)
    }

    /// Selected list row
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled button / active chip
    pub fn button_style(&self, focused: bool) -> Style {
        if self.is_plain() {
            return if focused {
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else {
                Style::default()
            };
        }
        if focused {
            Style::default()
                .fg(Color::Black)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.primary)
        }
    }

    pub fn placeholder_style(&self) -> Style {
        self.muted_style()
    }

    /// Membership tier badge
    pub fn level_style(&self, level: MemberLevel) -> Style {
        match level {
            MemberLevel::Infinity => self.fg(self.primary, Modifier::BOLD).add_modifier(Modifier::BOLD),
            MemberLevel::Partner => self.fg(self.secondary, Modifier::BOLD),
            MemberLevel::Member => self.muted_style(),
        }
    }

    /// Referral status badge
    pub fn status_style(&self, status: IndicationStatus) -> Style {
        match status {
            IndicationStatus::Open => self.success_style(),
            IndicationStatus::InProgress => self.warning_style(),
            IndicationStatus::Closed => self.muted_style(),
        }
    }

    /// Chat bubble for `mine` (outgoing) or incoming messages
    pub fn bubble_style(&self, mine: bool) -> Style {
        if self.is_plain() {
            return if mine {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
        }
        if mine {
            Style::default().fg(Color::Black).bg(self.bubble_me)
        } else {
            Style::default().fg(self.text).bg(self.bubble_other)
        }
    }
}
