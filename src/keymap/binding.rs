//! Key strings such as `"j"`, `"ctrl+n"` or `"shift+tab"` mapped to actions.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a key string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// One key combination bound to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: Action,
    /// Shown in help instead of the action description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Key code plus modifiers, ready to compare against crossterm events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Whether a key event triggers this binding. Unparseable keys never match.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.parse()
            .is_ok_and(|parsed| parsed.code == code && parsed.modifiers == modifiers)
    }

    pub fn parse(&self) -> Result<ParsedKey, KeyParseError> {
        parse_key_string(&self.key)
    }

    /// Display form, e.g. `Ctrl+N`
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse `"ctrl+shift+n"` style strings. The last `+`-separated part is the
/// key, the rest are modifiers.
pub fn parse_key_string(key: &str) -> Result<ParsedKey, KeyParseError> {
    let key = key.trim().to_lowercase();
    // A lone "+" is the plus key itself
    let (modifier_parts, key_part) = match key.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" => KeyModifiers::SUPER,
            other => return Err(KeyParseError::UnknownModifier(other.to_string())),
        };
    }

    Ok(ParsedKey {
        code: parse_key_code(key_part.trim())?,
        modifiers,
    })
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let code = match key {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(KeyParseError::UnknownKey(key.to_string())),
            }
        }
    };
    Ok(code)
}

/// `"ctrl+n"` -> `"Ctrl+N"`, `"up"` -> `"↑"`
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" => "Cmd".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "pageup" | "pgup" => "PgUp".to_string(),
                "pagedown" | "pgdn" => "PgDn".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ => part.to_uppercase(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_named_keys() {
        assert_eq!(parse_key_string("j").unwrap().code, KeyCode::Char('j'));
        assert_eq!(parse_key_string("Down").unwrap().code, KeyCode::Down);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert_eq!(parse_key_string("/").unwrap().code, KeyCode::Char('/'));
    }

    #[test]
    fn test_parse_modifiers() {
        let parsed = parse_key_string("ctrl+shift+n").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('n'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);

        let parsed = parse_key_string("shift+tab").unwrap();
        assert_eq!(parsed.code, KeyCode::Tab);
        assert_eq!(parsed.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
        let parsed = parse_key_string("ctrl++").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('+'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_key_string("hyper+x"),
            Err(KeyParseError::UnknownModifier("hyper".into()))
        );
        assert_eq!(
            parse_key_string("f13"),
            Err(KeyParseError::UnknownKey("f13".into()))
        );
        assert!(!KeyBinding::new("nonsense", Action::Quit)
            .matches(KeyCode::Char('n'), KeyModifiers::NONE));
    }

    #[test]
    fn test_display() {
        assert_eq!(format_key_display("ctrl+n"), "Ctrl+N");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("esc"), "Esc");
    }

    #[test]
    fn test_binding_matches() {
        let binding = KeyBinding::new("ctrl+s", Action::Save);
        assert!(binding.matches(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('s'), KeyModifiers::NONE));
        assert_eq!(binding.get_description(), "Save");
    }
}
