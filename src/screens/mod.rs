//! Screen controllers.
//!
//! Each screen owns its state, renders itself and turns key events into a
//! [`ScreenAction`]. The app keeps exactly one controller alive and builds a
//! fresh one with [`build`] every time navigation lands on a screen, so
//! unsaved drafts and filters never survive a visit.
//!
//! ```text
//! App ── event ──▶ active screen ── ScreenAction ──▶ App
//!                                     ├─ Navigate(NavEvent) ─▶ Navigator
//!                                     ├─ Notify ─▶ toasts
//!                                     └─ ShowHelp / Quit
//! ```

pub mod chat;
pub mod dashboard;
pub mod indications;
pub mod login;
pub mod members;
pub mod onboarding;
pub mod profile;
pub mod screen_trait;
pub mod splash;

pub use chat::ChatScreen;
pub use dashboard::DashboardScreen;
pub use indications::IndicationsScreen;
pub use login::LoginScreen;
pub use members::MembersScreen;
pub use onboarding::OnboardingScreen;
pub use profile::ProfileScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use splash::SplashScreen;

use crate::config::Config;
use crate::data::DataProvider;
use crate::referrals::ReferralFeed;
use crate::ui::Screen as ScreenId;
use std::time::Duration;

/// Build the controller for `id` with fresh state.
pub fn build(id: ScreenId, provider: &dyn DataProvider, config: &Config) -> Box<dyn Screen> {
    match id {
        ScreenId::Splash => Box::new(SplashScreen::new(Duration::from_millis(
            config.splash_duration_ms,
        ))),
        ScreenId::Login => Box::new(LoginScreen::new()),
        ScreenId::Onboarding => Box::new(OnboardingScreen::new()),
        ScreenId::Dashboard => Box::new(DashboardScreen::new(&provider.current_profile().name)),
        ScreenId::Members => Box::new(MembersScreen::new(provider.list_members())),
        ScreenId::Chat => Box::new(ChatScreen::new(provider)),
        ScreenId::Profile => Box::new(ProfileScreen::new(provider.current_profile())),
        ScreenId::Indications => Box::new(IndicationsScreen::new(ReferralFeed::new(
            provider.list_indications(),
            provider.current_profile().name,
        ))),
    }
}
