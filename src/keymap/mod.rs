//! Configurable keyboard shortcuts.
//!
//! A [`Keymap`] is a preset plus user overrides. An override for an action
//! replaces every preset binding of that action.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{KeyBinding, KeyParseError, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// Checked before the preset
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

/// Terminals report shifted characters (`G`, `?`) with the SHIFT modifier
/// set; bindings are written without it, so fold it into the character.
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => {
            if c.is_ascii_uppercase() {
                (KeyCode::Char(c.to_ascii_lowercase()), modifiers)
            } else {
                (code, modifiers & !KeyModifiers::SHIFT)
            }
        }
        _ => (code, modifiers),
    }
}

impl Keymap {
    pub fn new(preset: KeymapPreset) -> Self {
        Self {
            preset,
            overrides: Vec::new(),
        }
    }

    /// Action bound to a key event, if any
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let bindings = self.all_bindings();
        let (norm_code, norm_mods) = normalize(code, modifiers);
        bindings
            .iter()
            .find(|b| b.matches(code, modifiers))
            .or_else(|| bindings.iter().find(|b| b.matches(norm_code, norm_mods)))
            .map(|b| b.action)
    }

    /// Overrides followed by the preset bindings they do not shadow
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Keys that fail to parse, for reporting at startup
    pub fn invalid_overrides(&self) -> Vec<(&KeyBinding, KeyParseError)> {
        self.overrides
            .iter()
            .filter_map(|b| b.parse().err().map(|e| (b, e)))
            .collect()
    }

    /// Display form of the first key bound to `action`
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map_or_else(|| format!("{:?}", action), KeyBinding::display)
    }

    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown)
        )
    }

    /// Footer hint for list screens
    pub fn footer_navigation(&self) -> String {
        format!(
            "{}: Navigate | {}: Open | {}: Back | {}: Help",
            self.navigation_display(),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Cancel),
            self.get_key_display_for_action(Action::Help),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_shifted_characters() {
        let keymap = Keymap::new(KeymapPreset::Vim);
        assert_eq!(
            keymap.get_action(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(Action::GoToEnd)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_invalid_overrides_reported() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![
                KeyBinding::new("ctrl+q", Action::Quit),
                KeyBinding::new("hyper+q", Action::Help),
            ],
        };
        let invalid = keymap.invalid_overrides();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0.key, "hyper+q");
    }

    #[test]
    fn test_footer_reflects_overrides() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("ctrl+b", Action::Cancel)],
        };
        assert!(keymap.footer_navigation().contains("Ctrl+B: Back"));
    }
}
