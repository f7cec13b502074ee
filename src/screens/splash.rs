//! Splash screen: the wordmark, then a fade, then login.

use crate::navigation::NavEvent;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_fixed;
use crate::widgets::DisruptionLogo;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::{Duration, Instant};
use tracing::debug;

/// Length of the closing fade, part of the total duration
pub const FADE: Duration = Duration::from_millis(500);

pub struct SplashScreen {
    started_at: Instant,
    duration: Duration,
    /// Fade progress of the last tick
    fade: f32,
    fired: bool,
}

impl SplashScreen {
    pub fn new(duration: Duration) -> Self {
        Self::started_at(Instant::now(), duration)
    }

    pub fn started_at(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
            fade: 0.0,
            fired: false,
        }
    }

    /// 0.0 until the fade starts, then up to 1.0 at the end
    pub fn fade_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let fade = FADE.min(self.duration);
        let fade_start = self.duration - fade;
        if elapsed <= fade_start || fade.is_zero() {
            0.0
        } else {
            ((elapsed - fade_start).as_secs_f32() / fade.as_secs_f32()).min(1.0)
        }
    }
}

impl Screen for SplashScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let logo = DisruptionLogo::large().fade(self.fade);
        let block = center_fixed(area, 40, logo.height() + 2);
        let [logo_area, _, tagline_area] = Layout::vertical([
            Constraint::Length(logo.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(block);

        frame.render_widget(logo, logo_area);
        frame.render_widget(
            Paragraph::new("Exclusive network of entrepreneurs")
                .style(t.muted_style())
                .alignment(Alignment::Center),
            tagline_area,
        );
        Ok(())
    }

    fn handle_event(&mut self, _event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(ScreenAction::None)
    }

    fn tick(&mut self, now: Instant) -> ScreenAction {
        self.fade = self.fade_at(now);
        if !self.fired && now.saturating_duration_since(self.started_at) >= self.duration {
            self.fired = true;
            debug!("Splash timer elapsed");
            return ScreenAction::Navigate(NavEvent::SplashElapsed);
        }
        ScreenAction::None
    }
}
