//! Data access for the screens.
//!
//! Screens never embed their content; they ask a [`DataProvider`] for it when
//! they are built. [`SampleData`] is the built-in provider backed by the
//! static sample set, and is what the app uses today.

pub mod models;
pub mod sample;

pub use models::{
    Chat, Indication, IndicationStatus, Member, MemberLevel, Message, ProfileData, Sender,
    SEGMENTS,
};
pub use sample::SampleData;

/// Source of members, conversations, referrals and the local profile.
pub trait DataProvider {
    /// All directory members, in display order.
    fn list_members(&self) -> Vec<Member>;

    /// Conversation summaries for the chat list.
    fn list_chats(&self) -> Vec<Chat>;

    /// Message history for a conversation.
    fn list_messages(&self, chat_id: &str) -> Vec<Message>;

    /// Referral feed, newest first.
    fn list_indications(&self) -> Vec<Indication>;

    /// The local user's profile.
    fn current_profile(&self) -> ProfileData;

    /// Look up a single member by id.
    fn find_member(&self, id: &str) -> Option<Member> {
        self.list_members().into_iter().find(|m| m.id == id)
    }
}
