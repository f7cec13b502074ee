use std::fmt;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Login,
    Onboarding,
    Dashboard,
    Members,
    Chat,
    Profile,
    Indications,
}

impl Screen {
    /// All screens, in flow order
    pub fn all() -> [Screen; 8] {
        [
            Screen::Splash,
            Screen::Login,
            Screen::Onboarding,
            Screen::Dashboard,
            Screen::Members,
            Screen::Chat,
            Screen::Profile,
            Screen::Indications,
        ]
    }

    /// Title shown in the screen header
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash => "Disruption Community",
            Screen::Login => "Sign in",
            Screen::Onboarding => "Welcome",
            Screen::Dashboard => "Disruption Community",
            Screen::Members => "Network Members",
            Screen::Chat => "Messages",
            Screen::Profile => "My Profile",
            Screen::Indications => "Referrals",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Splash => "splash",
            Screen::Login => "login",
            Screen::Onboarding => "onboarding",
            Screen::Dashboard => "dashboard",
            Screen::Members => "members",
            Screen::Chat => "chat",
            Screen::Profile => "profile",
            Screen::Indications => "indications",
        };
        f.write_str(name)
    }
}
