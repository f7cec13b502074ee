//! Application shell: owns the navigator, the active screen controller and
//! the overlays, and runs the event loop.

use crate::components::{HelpOverlay, MemberDetail};
use crate::config::Config;
use crate::data::DataProvider;
use crate::keymap::Action;
use crate::navigation::{NavEvent, Navigator};
use crate::screens::{self, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::store::KeyValueStore;
use crate::tui::Tui;
use crate::ui::Screen as ScreenId;
use crate::widgets::{Toast, ToastManager};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Event poll timeout; also the tick rate for timers
const TICK_RATE: Duration = Duration::from_millis(100);

pub struct App {
    config: Config,
    config_path: PathBuf,
    provider: Box<dyn DataProvider>,
    navigator: Navigator,
    screen: Box<dyn Screen>,
    member_detail: Option<MemberDetail>,
    show_help: bool,
    toasts: ToastManager,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        store: Box<dyn KeyValueStore>,
        provider: Box<dyn DataProvider>,
    ) -> Self {
        let navigator = Navigator::new(store);
        let screen = screens::build(navigator.screen(), provider.as_ref(), &config);

        let mut toasts = ToastManager::new();
        let invalid = config.keymap.invalid_overrides();
        for (binding, err) in &invalid {
            warn!("Ignoring keymap override {:?}: {}", binding.key, err);
        }
        if !invalid.is_empty() {
            toasts.error(format!(
                "{} keymap override(s) could not be parsed",
                invalid.len()
            ));
        }

        Self {
            config,
            config_path,
            provider,
            navigator,
            screen,
            member_detail: None,
            show_help: false,
            toasts,
            should_quit: false,
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.screen()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn member_detail(&self) -> Option<&MemberDetail> {
        self.member_detail.as_ref()
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("Starting on {}", self.current_screen());

        loop {
            tui.terminal_mut().draw(|frame| self.draw(frame))?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(TICK_RATE)? {
                self.handle_event(event)?;
            }
            self.tick(Instant::now());
        }

        tui.exit()?;
        info!("Exiting");
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config);
        if let Err(e) = self.screen.render(frame, area, &ctx) {
            error!("Failed to render {}: {:#}", self.navigator.screen(), e);
        }

        if let Some(detail) = &self.member_detail {
            detail.render(frame, area);
        }
        if self.show_help {
            HelpOverlay::render(
                frame,
                area,
                &self.config.keymap,
                &self.config_path.to_string_lossy(),
            );
        }
        self.toasts.render(frame, area);
    }

    /// Advance timers: the screen's (splash) and toast expiry.
    pub fn tick(&mut self, now: Instant) {
        let action = self.screen.tick(now);
        self.apply(action);
        self.toasts.tick(now);
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = &event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Ctrl+C quits whatever the keymap says
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        let action = self.config.keymap.get_action(key.code, key.modifiers);

        if let Some(detail) = self.member_detail.as_mut() {
            match action {
                Some(Action::Quit) => self.should_quit = true,
                Some(Action::Help) => self.show_help = true,
                Some(action) => {
                    if let Some(nav) = detail.handle_action(action) {
                        self.dispatch(nav);
                    }
                }
                None => {}
            }
            return Ok(());
        }

        if !self.screen.is_input_focused() {
            match action {
                Some(Action::Quit) => {
                    self.should_quit = true;
                    return Ok(());
                }
                Some(Action::Help) => {
                    self.show_help = true;
                    return Ok(());
                }
                _ => {}
            }
        }

        let ctx = ScreenContext::new(&self.config);
        let result = self.screen.handle_event(event, &ctx)?;
        self.apply(result);
        Ok(())
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(event) => self.dispatch(event),
            ScreenAction::Notify { message, variant } => {
                self.toasts.push(Toast::new(message, variant));
            }
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => self.should_quit = true,
        }
    }

    /// Feed a navigation event through the navigator and sync the active
    /// controller and member overlay with the result.
    pub fn dispatch(&mut self, event: NavEvent) {
        let outcome = self.navigator.dispatch(&event);

        match self.navigator.selected_member().map(str::to_string) {
            Some(id) => {
                let already_open = self
                    .member_detail
                    .as_ref()
                    .is_some_and(|d| d.member().id == id);
                if !already_open {
                    match self.provider.find_member(&id) {
                        Some(member) => self.member_detail = Some(MemberDetail::new(member)),
                        None => {
                            warn!("Selected member {} not found", id);
                            self.navigator.dispatch(&NavEvent::DismissMember);
                            self.member_detail = None;
                        }
                    }
                }
            }
            None => self.member_detail = None,
        }

        if outcome.screen_changed() {
            self.screen = screens::build(outcome.current, self.provider.as_ref(), &self.config);
        }
    }
}
