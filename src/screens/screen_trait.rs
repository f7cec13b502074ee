//! Screen trait and associated types.
//!
//! Screens own their state, are rebuilt every time they are entered, and
//! report what should happen next by returning a [`ScreenAction`] instead
//! of touching app state.

use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::navigation::NavEvent;
use crate::widgets::ToastVariant;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

/// Read-only resources for rendering.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    /// Wall clock used for relative dates
    pub now: DateTime<Local>,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            now: Local::now(),
        }
    }
}

/// Read-only resources for event handling.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }

    /// Mapped action for a key event
    pub fn action(&self, key: &KeyEvent) -> Option<Action> {
        self.config.keymap.get_action(key.code, key.modifiers)
    }
}

/// What a screen asks the app to do after an event or tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    #[default]
    None,
    /// Feed an event to the navigator
    Navigate(NavEvent),
    /// Show a toast
    Notify {
        message: String,
        variant: ToastVariant,
    },
    ShowHelp,
    Quit,
}

impl ScreenAction {
    pub fn notify(message: impl Into<String>, variant: ToastVariant) -> Self {
        ScreenAction::Notify {
            message: message.into(),
            variant,
        }
    }
}

/// Key press from an event, ignoring releases and repeats reported by some
/// terminals
pub fn key_press(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

/// A screen controller.
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// When true, global shortcuts on plain keys (`q`, `?`) are typed
    /// instead of triggering
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called on every loop iteration, for timers
    fn tick(&mut self, _now: Instant) -> ScreenAction {
        ScreenAction::None
    }
}
