//! Toast notifications.
//!
//! One toast at a time, drawn in the bottom-right corner above the footer.
//! It expires on its own; the app calls [`ToastManager::tick`] every loop.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✔",
            ToastVariant::Info => "ℹ",
            ToastVariant::Error => "✘",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Renders a toast in the bottom-right corner of the given area
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn area(area: Rect) -> Rect {
        let width = 44u16.min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);
        Rect::new(
            area.x + area.width.saturating_sub(width + 2),
            area.y + area.height.saturating_sub(height + 2),
            width,
            height,
        )
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let toast_area = Self::area(area);
        let border = match self.toast.variant {
            ToastVariant::Success => t.success_style(),
            ToastVariant::Info => t.border_focused_style(),
            ToastVariant::Error => t.error_style(),
        };

        Clear.render(toast_area, buf);
        Paragraph::new(format!(" {} {}", self.toast.variant.icon(), self.toast.message))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            )
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(toast_area, buf);
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing the current one
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastVariant::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastVariant::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastVariant::Error));
    }

    /// Drop the toast once expired. Returns whether one is still showing.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = &self.current {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires() {
        let mut toasts = ToastManager::new();
        toasts.push(Toast::new("Saved", ToastVariant::Success).with_duration(Duration::from_millis(50)));
        let now = Instant::now();
        assert!(toasts.tick(now));
        assert!(!toasts.tick(now + Duration::from_millis(60)));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_push_replaces() {
        let mut toasts = ToastManager::new();
        toasts.info("first");
        toasts.error("second");
        let current = toasts.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.variant, ToastVariant::Error);
    }
}
