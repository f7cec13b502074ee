//! Login form. Nothing is checked against a server; both fields only have
//! to be filled in.

use crate::components::{Footer, FOOTER_HEIGHT};
use crate::keymap::Action;
use crate::navigation::NavEvent;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{center_fixed, typed_char, InputFilter, TextInput};
use crate::widgets::{DisruptionLogo, TextInputWidget, TextInputWidgetExt, ToastVariant};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use thiserror::Error;
use tracing::info;

pub const CPF_DIGITS: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Enter your CPF")]
    MissingCpf,
    #[error("Enter your password")]
    MissingPassword,
}

/// `12345678901` -> `123.456.789-01`; anything but 11 digits is returned as is
pub fn format_cpf(digits: &str) -> String {
    if digits.len() != CPF_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
        return digits.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Cpf,
    Password,
    SignIn,
    Register,
    ForgotPassword,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Cpf,
        Focus::Password,
        Focus::SignIn,
        Focus::Register,
        Focus::ForgotPassword,
    ];

    fn step(self, delta: isize) -> Focus {
        let len = Self::ORDER.len() as isize;
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ORDER[(index + delta).rem_euclid(len) as usize]
    }
}

pub struct LoginScreen {
    cpf: TextInput,
    password: TextInput,
    focus: Focus,
    error: Option<LoginError>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            cpf: TextInput::new()
                .filter(InputFilter::Digits)
                .max_len(CPF_DIGITS),
            password: TextInput::new(),
            focus: Focus::Cpf,
            error: None,
        }
    }

    pub fn validate(&self) -> Result<(), LoginError> {
        if self.cpf.is_empty() {
            return Err(LoginError::MissingCpf);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        Ok(())
    }

    fn submit(&mut self) -> ScreenAction {
        match self.validate() {
            Ok(()) => {
                info!("Login submitted");
                ScreenAction::Navigate(NavEvent::LoginSubmitted)
            }
            Err(e) => {
                self.focus = match e {
                    LoginError::MissingCpf => Focus::Cpf,
                    LoginError::MissingPassword => Focus::Password,
                };
                self.error = Some(e);
                ScreenAction::None
            }
        }
    }

    fn activate(&mut self) -> ScreenAction {
        match self.focus {
            Focus::Cpf => {
                self.focus = Focus::Password;
                ScreenAction::None
            }
            Focus::Password | Focus::SignIn => self.submit(),
            Focus::Register => ScreenAction::notify(
                "Registration is handled by the community team",
                ToastVariant::Info,
            ),
            Focus::ForgotPassword => ScreenAction::notify(
                "Password recovery is not available yet",
                ToastVariant::Info,
            ),
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Cpf => Some(&mut self.cpf),
            Focus::Password => Some(&mut self.password),
            _ => None,
        }
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);
        let form = center_fixed(body, 46, 20);
        let [logo, subtitle, _, cpf, password, error, buttons, _, links] = Layout::vertical([
            Constraint::Length(DisruptionLogo::large().height()),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(form);

        frame.render_widget(DisruptionLogo::large(), logo);
        frame.render_widget(
            Paragraph::new("Exclusive network of entrepreneurs")
                .style(t.muted_style())
                .alignment(Alignment::Center),
            subtitle,
        );

        let cpf_display = format_cpf(self.cpf.text());
        frame.render_text_input_widget(
            TextInputWidget::new(&self.cpf)
                .title("CPF")
                .placeholder("000.000.000-00")
                .display(cpf_display)
                .focused(self.focus == Focus::Cpf)
                .invalid(self.error == Some(LoginError::MissingCpf)),
            cpf,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.password)
                .title("Password")
                .placeholder("Your password")
                .masked(true)
                .focused(self.focus == Focus::Password)
                .invalid(self.error == Some(LoginError::MissingPassword)),
            password,
        );

        if let Some(err) = &self.error {
            frame.render_widget(
                Paragraph::new(err.to_string())
                    .style(t.error_style())
                    .alignment(Alignment::Center),
                error,
            );
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "  Sign in  ",
                t.button_style(self.focus == Focus::SignIn),
            ))
            .alignment(Alignment::Center),
            buttons,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Register ", t.button_style(self.focus == Focus::Register)),
                Span::raw("   "),
                Span::styled(
                    " Forgot password ",
                    t.button_style(self.focus == Focus::ForgotPassword),
                ),
            ]))
            .alignment(Alignment::Center),
            links,
        );

        let keymap = &ctx.config.keymap;
        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Next field | {}: Sign in | Ctrl+C: Quit",
                keymap.get_key_display_for_action(Action::NextField),
                keymap.get_key_display_for_action(Action::Confirm),
            ),
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action(key);

        // Characters always go to the focused field, even when bound
        if typed_char(key.code, key.modifiers).is_some() {
            if let Some(input) = self.focused_input() {
                input.handle_key(key.code, key.modifiers, action);
                self.error = None;
                return Ok(ScreenAction::None);
            }
        }

        match action {
            Some(Action::NextField | Action::MoveDown) => self.focus = self.focus.step(1),
            Some(Action::PrevField | Action::MoveUp) => self.focus = self.focus.step(-1),
            Some(Action::Confirm) => return Ok(self.activate()),
            Some(Action::MoveLeft | Action::MoveRight) if !self.is_input_focused() => {
                // Register and Forgot password share the last row
                self.focus = match self.focus {
                    Focus::Register => Focus::ForgotPassword,
                    Focus::ForgotPassword => Focus::Register,
                    other => other,
                };
            }
            _ => {
                if let Some(input) = self.focused_input() {
                    if input.handle_key(key.code, key.modifiers, action) {
                        self.error = None;
                    }
                }
            }
        }
        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        matches!(self.focus, Focus::Cpf | Focus::Password)
    }
}
