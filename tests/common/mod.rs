//! Shared test utilities for the integration tests.
//!
//! Provides `TestEnv`, an isolated config directory with its own flag store,
//! and helpers to drive an [`App`] with key presses.

#![allow(dead_code)]

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use disruption::app::App;
use disruption::config::Config;
use disruption::data::SampleData;
use disruption::navigation::NavEvent;
use disruption::store::FileStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated config directory, removed on drop.
pub struct TestEnv {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("disruption").join("config.toml");
        Ok(Self {
            temp_dir,
            config_path,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> Result<Config> {
        Config::load_or_create(&self.config_path)
    }

    pub fn state_path(&self) -> Result<PathBuf> {
        Ok(self.config()?.state_path(&self.config_path))
    }

    pub fn store(&self) -> Result<FileStore> {
        Ok(FileStore::open(&self.state_path()?))
    }

    /// App wired to this environment's config and flag store
    pub fn app(&self) -> Result<App> {
        Ok(App::new(
            self.config()?,
            self.config_path.clone(),
            Box::new(self.store()?),
            Box::new(SampleData),
        ))
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    send(app, code, KeyModifiers::NONE);
}

pub fn send(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(Event::Key(KeyEvent::new(code, modifiers)))
        .expect("event handling failed");
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill and submit the login form
pub fn log_in(app: &mut App) {
    type_text(app, "12345678901");
    press(app, KeyCode::Tab);
    type_text(app, "secret");
    press(app, KeyCode::Enter);
}

/// Walk a fresh app from the splash to the dashboard
pub fn reach_dashboard(app: &mut App) {
    app.dispatch(NavEvent::SplashElapsed);
    log_in(app);
    if !app.navigator().onboarding_completed() {
        for _ in 0..3 {
            press(app, KeyCode::Enter);
        }
    }
}
