use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Rows the footer takes
pub const FOOTER_HEIGHT: u16 = 1;

/// Key hint bar. `text` is `"keys: label | keys: label"`.
pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        frame.render_widget(
            Paragraph::new(Self::line(text)).alignment(Alignment::Center),
            area,
        );
    }

    fn line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(keys, t.emphasis_style().add_modifier(Modifier::BOLD)));
                    spans.push(Span::styled(format!(" {}", label), t.muted_style()));
                }
                None => spans.push(Span::styled(part, t.text_style())),
            }
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_parsing() {
        let line = Footer::line("Enter: Open | Esc: Back");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter Open │ Esc Back");
    }
}
