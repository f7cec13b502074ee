//! Semantic actions bound to keys.

use serde::{Deserialize, Serialize};

/// Everything a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Lists and cards
    MoveUp,
    MoveDown,
    /// Previous segment chip / tab
    MoveLeft,
    /// Next segment chip / tab
    MoveRight,
    PageUp,
    PageDown,
    GoToTop,
    GoToEnd,
    /// Start of the focused input
    Home,
    /// End of the focused input
    End,

    // Confirmation
    Confirm,
    /// Close the overlay or go back to the dashboard
    Cancel,

    // Global
    Quit,
    Help,

    // Screen actions
    /// Edit the profile
    Edit,
    /// New referral
    Create,
    /// Focus the directory search box
    Search,
    /// Save the profile edit buffer
    Save,

    // Text editing
    Backspace,
    DeleteChar,

    // Form fields
    NextField,
    PrevField,

    // Long text panes
    ScrollUp,
    ScrollDown,
}

impl Action {
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Previous tab / segment",
            Action::MoveRight => "Next tab / segment",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Home => "Start of input",
            Action::End => "End of input",
            Action::Confirm => "Open / confirm",
            Action::Cancel => "Close / back",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Edit => "Edit profile",
            Action::Create => "New referral",
            Action::Search => "Search members",
            Action::Save => "Save",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::ScrollUp => "Scroll up",
            Action::ScrollDown => "Scroll down",
        }
    }

    /// Group heading in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd
            | Action::Home
            | Action::End
            | Action::ScrollUp
            | Action::ScrollDown => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::Quit | Action::Help => "Global",

            Action::Edit | Action::Create | Action::Search | Action::Save => "Actions",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextField | Action::PrevField => "Forms",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveLeft.category(), "Navigation");
        assert_eq!(Action::Quit.category(), "Global");
        assert_eq!(Action::Create.category(), "Actions");
        assert_eq!(Action::NextField.category(), "Forms");
    }

    #[test]
    fn test_action_serde_names() {
        assert_eq!(
            serde_json::to_string(&Action::NextField).unwrap(),
            "\"next_field\""
        );
        let action: Action = serde_json::from_str("\"search\"").unwrap();
        assert_eq!(action, Action::Search);
    }
}
