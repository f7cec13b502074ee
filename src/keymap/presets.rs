//! Built-in keymaps: Standard, Vim and Emacs.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl on top of the arrows
    Vim,
    /// Ctrl+N/P/B/F on top of the arrows
    Emacs,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        };
        bindings.extend(common_bindings());
        bindings
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Bindings every preset shares
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("ctrl+s", Action::Save),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("backtab", Action::PrevField),
        KeyBinding::new("shift+backtab", Action::PrevField),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("home", Action::GoToTop),
        KeyBinding::new("end", Action::GoToEnd),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("e", Action::Edit),
        KeyBinding::new("n", Action::Create),
        KeyBinding::new("/", Action::Search),
        KeyBinding::new("shift+up", Action::ScrollUp),
        KeyBinding::new("shift+down", Action::ScrollDown),
    ]
}

fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("ctrl+u", Action::PageUp),
        KeyBinding::new("ctrl+d", Action::PageDown),
        KeyBinding::new("g", Action::GoToTop),
        KeyBinding::new("shift+g", Action::GoToEnd),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("e", Action::Edit),
        KeyBinding::new("o", Action::Create),
        KeyBinding::new("/", Action::Search),
        KeyBinding::new("x", Action::DeleteChar),
        KeyBinding::new("ctrl+y", Action::ScrollUp),
        KeyBinding::new("ctrl+e", Action::ScrollDown),
    ]
}

fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("alt+<", Action::GoToTop),
        KeyBinding::new("alt+>", Action::GoToEnd),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+o", Action::Create),
        KeyBinding::new("ctrl+x", Action::Edit),
        KeyBinding::new("ctrl+r", Action::Search),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        KeyBinding::new("alt+p", Action::ScrollUp),
        KeyBinding::new("alt+n", Action::ScrollDown),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(preset: KeymapPreset, key: &str, action: Action) -> bool {
        preset
            .bindings()
            .iter()
            .any(|b| b.key == key && b.action == action)
    }

    #[test]
    fn test_every_preset_has_core_actions() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            let bindings = preset.bindings();
            for action in [
                Action::MoveUp,
                Action::MoveDown,
                Action::Confirm,
                Action::Cancel,
                Action::Quit,
                Action::Help,
                Action::Create,
                Action::Edit,
                Action::Search,
            ] {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{} lacks {:?}",
                    preset.name(),
                    action
                );
            }
        }
    }

    #[test]
    fn test_preset_specific_keys() {
        assert!(has(KeymapPreset::Vim, "j", Action::MoveDown));
        assert!(has(KeymapPreset::Vim, "h", Action::MoveLeft));
        assert!(has(KeymapPreset::Emacs, "ctrl+n", Action::MoveDown));
        assert!(has(KeymapPreset::Standard, "n", Action::Create));
    }

    #[test]
    fn test_every_preset_key_parses() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs] {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "{}: {}", preset.name(), binding.key);
            }
        }
    }

    #[test]
    fn test_preset_serde() {
        assert_eq!(serde_json::to_string(&KeymapPreset::Vim).unwrap(), "\"vim\"");
        let preset: KeymapPreset = serde_json::from_str("\"emacs\"").unwrap();
        assert_eq!(preset, KeymapPreset::Emacs);
    }
}
