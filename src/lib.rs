//! Disruption - terminal client for the Disruption Community business
//! network.
//!
//! The crate is split between plain state logic (navigation, directory
//! filtering, chat, profile editing, referrals) and the ratatui front end
//! (screens, components, widgets) that drives it.

pub mod app;
pub mod chat;
pub mod cli;
pub mod components;
pub mod config;
pub mod data;
pub mod directory;
pub mod keymap;
pub mod navigation;
pub mod profile;
pub mod referrals;
pub mod screens;
pub mod store;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

pub use config::Config;
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
pub use navigation::{NavEvent, NavState, Navigator};
