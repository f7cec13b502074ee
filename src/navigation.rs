//! Screen navigation state machine.
//!
//! [`transition`] is a pure function from the current [`NavState`] and a
//! [`NavEvent`] to the next state. [`Navigator`] owns the live state, applies
//! transitions and persists the onboarding flag the moment it flips.
//!
//! ```text
//! Splash ──SplashElapsed──▶ Login ──LoginSubmitted──▶ Onboarding ──Completed──▶ Dashboard
//!                                  └──(flag set)───────────────────────────────▶ Dashboard
//! Dashboard ──Navigate(members|messages|profile|indications)──▶ Members|Chat|Profile|Indications
//! any ──Back──▶ Dashboard
//! ```

use crate::store::{self, KeyValueStore};
use crate::ui::Screen;
use tracing::{debug, info, warn};

/// Dashboard target identifiers accepted by [`NavEvent::Navigate`]
pub const TARGET_MEMBERS: &str = "members";
pub const TARGET_MESSAGES: &str = "messages";
pub const TARGET_PROFILE: &str = "profile";
pub const TARGET_INDICATIONS: &str = "indications";

/// User or timer events that can move the app between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// The splash display timer fired
    SplashElapsed,
    /// The login form was submitted
    LoginSubmitted,
    /// The last onboarding step was confirmed
    OnboardingCompleted,
    /// A dashboard quick-access item was chosen
    Navigate(String),
    /// Return to the dashboard
    Back,
    /// A member was picked in the directory
    SelectMember(String),
    /// The member detail was closed
    DismissMember,
    /// "Message" action in the member detail
    MessageMember,
    /// "Refer" action in the member detail
    IndicateMember,
}

/// Everything the navigation controller tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub screen: Screen,
    pub onboarding_completed: bool,
    pub selected_member: Option<String>,
}

impl NavState {
    /// Initial state for a session
    pub fn new(onboarding_completed: bool) -> Self {
        Self {
            screen: Screen::Splash,
            onboarding_completed,
            selected_member: None,
        }
    }
}

/// Map a dashboard target identifier to its screen.
///
/// Unknown targets fall back to the dashboard.
pub fn target_screen(target: &str) -> Screen {
    match target {
        TARGET_MEMBERS => Screen::Members,
        TARGET_MESSAGES => Screen::Chat,
        TARGET_PROFILE => Screen::Profile,
        TARGET_INDICATIONS => Screen::Indications,
        _ => Screen::Dashboard,
    }
}

/// Compute the next navigation state.
///
/// Events that are not defined for the current state return it unchanged.
/// The onboarding flag only ever goes from `false` to `true`.
pub fn transition(state: &NavState, event: &NavEvent) -> NavState {
    let mut next = state.clone();
    match (state.screen, event) {
        (Screen::Splash, NavEvent::SplashElapsed) => {
            next.screen = Screen::Login;
        }
        (Screen::Login, NavEvent::LoginSubmitted) => {
            next.screen = if state.onboarding_completed {
                Screen::Dashboard
            } else {
                Screen::Onboarding
            };
        }
        (Screen::Onboarding, NavEvent::OnboardingCompleted) => {
            next.onboarding_completed = true;
            next.screen = Screen::Dashboard;
        }
        (Screen::Dashboard, NavEvent::Navigate(target)) => {
            next.screen = target_screen(target);
        }
        (_, NavEvent::Back) => {
            next.screen = Screen::Dashboard;
        }
        (Screen::Members, NavEvent::SelectMember(id)) => {
            next.selected_member = Some(id.clone());
        }
        (_, NavEvent::DismissMember) => {
            next.selected_member = None;
        }
        (_, NavEvent::MessageMember) if state.selected_member.is_some() => {
            next.selected_member = None;
            next.screen = Screen::Chat;
        }
        (_, NavEvent::IndicateMember) if state.selected_member.is_some() => {
            next.selected_member = None;
            next.screen = Screen::Indications;
        }
        _ => {}
    }
    next
}

/// Result of applying an event through the [`Navigator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    pub previous: Screen,
    pub current: Screen,
}

impl NavOutcome {
    /// Whether the active screen changed
    pub fn screen_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Live navigation state holder.
pub struct Navigator {
    state: NavState,
    store: Box<dyn KeyValueStore>,
}

impl Navigator {
    /// Create a navigator, reading the onboarding flag once from `store`.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let completed = store::onboarding_completed(store.as_ref());
        info!("Session starting (onboarding completed: {})", completed);
        Self {
            state: NavState::new(completed),
            store,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn onboarding_completed(&self) -> bool {
        self.state.onboarding_completed
    }

    pub fn selected_member(&self) -> Option<&str> {
        self.state.selected_member.as_deref()
    }

    /// Apply an event, persisting the onboarding flag if it was just set.
    pub fn dispatch(&mut self, event: &NavEvent) -> NavOutcome {
        let previous = self.state.screen;
        let next = transition(&self.state, event);

        if next.onboarding_completed && !self.state.onboarding_completed {
            match store::mark_onboarding_completed(self.store.as_mut()) {
                Ok(()) => info!("Onboarding completed, flag persisted"),
                Err(e) => warn!("Failed to persist onboarding flag: {:#}", e),
            }
        }

        if next == self.state {
            debug!("Ignored {:?} on {}", event, previous);
        } else if next.screen != previous {
            info!("Screen {} -> {} ({:?})", previous, next.screen, event);
        }

        self.state = next;
        NavOutcome {
            previous,
            current: self.state.screen,
        }
    }
}
