use crate::styles::theme;
use crate::widgets::DisruptionLogo;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Rows the header takes
pub const HEADER_HEIGHT: u16 = 3;

/// Common header: wordmark on the left, screen title and subtitle on the right
pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [logo_area, title_area] =
            Layout::horizontal([Constraint::Length(14), Constraint::Min(0)]).areas(inner);
        frame.render_widget(DisruptionLogo::small(), logo_area);

        let line = Line::from(vec![
            Span::styled(title, t.title_style()),
            Span::styled(
                if subtitle.is_empty() {
                    String::new()
                } else {
                    format!("  ·  {}", subtitle)
                },
                t.muted_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), title_area);
    }
}
