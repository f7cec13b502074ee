//! Own profile: read-only card, edit mode with one field at a time, and a
//! static stats panel.

use crate::components::member_detail::initials;
use crate::components::{Footer, Header, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::data::models::format_thousands;
use crate::data::ProfileData;
use crate::keymap::Action;
use crate::navigation::NavEvent;
use crate::profile::{ProfileEditor, ProfileField};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{create_standard_layout, typed_char, InputFilter, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt, ToastVariant};
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Static activity figures
pub const STATS: [(&str, &str); 4] = [
    ("45", "Connections"),
    ("23", "Conversations"),
    ("12", "Referrals"),
    ("#8", "Ranking"),
];

pub struct ProfileScreen {
    editor: ProfileEditor,
    /// Index into [`ProfileField::ALL`] while editing
    field: usize,
    input: TextInput,
}

impl ProfileScreen {
    pub fn new(profile: ProfileData) -> Self {
        Self {
            editor: ProfileEditor::new(profile),
            field: 0,
            input: TextInput::new(),
        }
    }

    pub fn editor(&self) -> &ProfileEditor {
        &self.editor
    }

    fn current_field(&self) -> ProfileField {
        ProfileField::ALL[self.field]
    }

    fn load_field(&mut self) {
        let field = self.current_field();
        let value = field.get(self.editor.displayed());
        let filter = if field.is_numeric() {
            InputFilter::Digits
        } else {
            InputFilter::Any
        };
        let input = TextInput::with_text(value).filter(filter);
        self.input = match field.max_digits() {
            Some(max) => input.max_len(max),
            None => input,
        };
    }

    fn commit_field(&mut self) {
        self.editor.set_field(self.current_field(), self.input.text());
    }

    fn focus_field(&mut self, delta: isize) {
        self.commit_field();
        let len = ProfileField::ALL.len() as isize;
        self.field = (self.field as isize + delta).rem_euclid(len) as usize;
        self.load_field();
    }

    fn begin(&mut self) {
        self.editor.begin();
        self.field = 0;
        self.load_field();
    }

    fn save(&mut self) -> ScreenAction {
        self.commit_field();
        self.editor.save();
        ScreenAction::notify("Profile saved", ToastVariant::Success)
    }

    fn field_lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let profile = self.editor.displayed();
        let editing = self.editor.is_editing();
        ProfileField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let value = match field {
                    ProfileField::FomentValue => {
                        format!("R$ {}", format_thousands(profile.foment_value))
                    }
                    other => other.get(profile),
                };
                let focused = editing && i == self.field;
                let (marker, label_style, value_style) = if focused {
                    ("▌", t.emphasis_style(), t.highlight_style())
                } else {
                    (" ", t.muted_style(), t.text_style())
                };
                Line::from(vec![
                    Span::styled(marker, t.border_focused_style()),
                    Span::styled(format!(" {:<18}", field.label()), label_style),
                    Span::styled(value, value_style),
                ])
            })
            .collect()
    }

    fn render_card(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let profile = self.editor.displayed();
        let text = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", initials(&profile.name)), t.button_style(true)),
                Span::raw("  "),
                Span::styled(profile.name.clone(), t.title_style()),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", profile.level.label()),
                    t.level_style(profile.level),
                ),
            ]),
            Line::from(vec![
                Span::raw("      "),
                Span::styled(profile.company.clone(), t.text_style()),
                Span::styled(format!("  ·  {}", profile.location), t.muted_style()),
            ]),
            Line::from(vec![
                Span::raw("      "),
                Span::styled(profile.brands.join(", "), t.muted_style()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(t.border_style())
                    .padding(Padding::horizontal(1)),
            ),
            area,
        );
    }

    fn render_stats(frame: &mut Frame, area: Rect) {
        let t = theme();
        let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for ((value, label), cell) in STATS.iter().zip(cells.iter()) {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::styled(*value, t.title_style()),
                    Line::styled(*label, t.muted_style()),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(t.border_style()),
                ),
                *cell,
            );
        }
    }
}

impl Screen for ProfileScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [header, content, footer] = create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);
        let editing = self.editor.is_editing();
        Header::render(
            frame,
            header,
            ScreenId::Profile.title(),
            if editing { "Editing" } else { "" },
        );

        let fields_height = ProfileField::ALL.len() as u16 + 2;
        let [card, stats, fields, edit_box] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(fields_height),
            Constraint::Length(if editing { 3 } else { 0 }),
        ])
        .areas(content);

        self.render_card(frame, card);
        Self::render_stats(frame, stats);
        frame.render_widget(
            Paragraph::new(self.field_lines()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(if editing {
                        t.border_focused_style()
                    } else {
                        t.border_style()
                    })
                    .title(Span::styled(" Details ", t.title_style())),
            ),
            fields,
        );

        if editing {
            frame.render_text_input_widget(
                TextInputWidget::new(&self.input)
                    .title(self.current_field().label())
                    .focused(true),
                edit_box,
            );
        }

        let keymap = &ctx.config.keymap;
        let hint = if editing {
            format!(
                "{}/{}: Field | {}: Save | {}: Cancel",
                keymap.get_key_display_for_action(Action::NextField),
                keymap.get_key_display_for_action(Action::PrevField),
                keymap.get_key_display_for_action(Action::Save),
                keymap.get_key_display_for_action(Action::Cancel),
            )
        } else {
            format!(
                "{}: Edit | {}: Back",
                keymap.get_key_display_for_action(Action::Edit),
                keymap.get_key_display_for_action(Action::Cancel),
            )
        };
        Footer::render(frame, footer, &hint);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action(key);

        if !self.editor.is_editing() {
            return Ok(match action {
                Some(Action::Edit) => {
                    self.begin();
                    ScreenAction::None
                }
                Some(Action::Cancel) => ScreenAction::Navigate(NavEvent::Back),
                _ => ScreenAction::None,
            });
        }

        if typed_char(key.code, key.modifiers).is_some() {
            self.input.handle_key(key.code, key.modifiers, action);
            return Ok(ScreenAction::None);
        }

        Ok(match action {
            Some(Action::Save) => self.save(),
            Some(Action::Cancel) => {
                self.editor.cancel();
                ScreenAction::notify("Changes discarded", ToastVariant::Info)
            }
            Some(Action::NextField | Action::MoveDown | Action::Confirm) => {
                self.focus_field(1);
                ScreenAction::None
            }
            Some(Action::PrevField | Action::MoveUp) => {
                self.focus_field(-1);
                ScreenAction::None
            }
            _ => {
                self.input.handle_key(key.code, key.modifiers, action);
                ScreenAction::None
            }
        })
    }

    fn is_input_focused(&self) -> bool {
        self.editor.is_editing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::{DataProvider, SampleData};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn send(screen: &mut ProfileScreen, code: KeyCode, modifiers: KeyModifiers) -> ScreenAction {
        let config = Config::default();
        screen
            .handle_event(
                Event::Key(KeyEvent::new(code, modifiers)),
                &ScreenContext::new(&config),
            )
            .unwrap()
    }

    fn press(screen: &mut ProfileScreen, code: KeyCode) -> ScreenAction {
        send(screen, code, KeyModifiers::NONE)
    }

    fn screen() -> ProfileScreen {
        ProfileScreen::new(SampleData.current_profile())
    }

    #[test]
    fn test_edit_and_save() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('e'));
        assert!(screen.is_input_focused());

        for _ in 0.."João Silva".chars().count() {
            press(&mut screen, KeyCode::Backspace);
        }
        for c in "Ana Lima".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        let action = send(&mut screen, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(matches!(action, ScreenAction::Notify { .. }));
        assert!(!screen.editor().is_editing());
        assert_eq!(screen.editor().profile().name, "Ana Lima");
    }

    #[test]
    fn test_cancel_discards() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('e'));
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Char('X'));
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Esc);
        assert!(!screen.editor().is_editing());
        assert_eq!(screen.editor().profile(), &SampleData.current_profile());
    }

    #[test]
    fn test_numeric_field_rejects_letters() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('e'));
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.current_field(), ProfileField::BirthYear);
        press(&mut screen, KeyCode::Backspace);
        press(&mut screen, KeyCode::Char('a'));
        press(&mut screen, KeyCode::Char('1'));
        press(&mut screen, KeyCode::Tab);

        let original = SampleData.current_profile().birth_year;
        assert_eq!(screen.editor().displayed().birth_year, original / 10 * 10 + 1);
        assert_eq!(screen.editor().profile().birth_year, original);
    }

    #[test]
    fn test_birth_year_input_stops_at_four_digits() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('e'));
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        for _ in 0..7 {
            press(&mut screen, KeyCode::Char('0'));
        }
        assert_eq!(screen.input.len(), 4);
        press(&mut screen, KeyCode::Tab);

        let original = SampleData.current_profile().birth_year;
        assert_eq!(screen.editor().displayed().birth_year, original);
    }

    #[test]
    fn test_escape_goes_back_when_viewing() {
        let mut screen = screen();
        assert_eq!(
            press(&mut screen, KeyCode::Esc),
            ScreenAction::Navigate(NavEvent::Back)
        );
    }
}
