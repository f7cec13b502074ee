//! Chat sending and profile editing, driven through the screen controllers.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use disruption::chat;
use disruption::config::Config;
use disruption::data::{DataProvider, SampleData, Sender};
use disruption::keymap::KeymapPreset;
use disruption::navigation::NavEvent;
use disruption::profile::{ProfileEditor, ProfileField};
use disruption::screens::{ChatScreen, ProfileScreen, Screen, ScreenAction, ScreenContext};
use disruption::widgets::ToastVariant;
use proptest::prelude::*;

fn send(screen: &mut dyn Screen, config: &Config, code: KeyCode, modifiers: KeyModifiers) -> ScreenAction {
    screen
        .handle_event(Event::Key(KeyEvent::new(code, modifiers)), &ScreenContext::new(config))
        .unwrap()
}

fn press(screen: &mut dyn Screen, config: &Config, code: KeyCode) -> ScreenAction {
    send(screen, config, code, KeyModifiers::NONE)
}

fn type_text(screen: &mut dyn Screen, config: &Config, text: &str) {
    for c in text.chars() {
        press(screen, config, KeyCode::Char(c));
    }
}

// ============================================================================
// Chat
// ============================================================================

proptest! {
    #[test]
    fn prop_whitespace_drafts_never_send(draft in "[ \t\n]{0,8}", sent in 0usize..4) {
        let mut messages = Vec::new();
        for i in 0..sent {
            messages = chat::send(messages, format!("message {}", i)).0;
        }
        let (after, kept) = chat::send(messages.clone(), draft.clone());
        prop_assert_eq!(after, messages);
        prop_assert_eq!(kept, draft);
    }
}

#[test]
fn test_send_hello() {
    let (messages, draft) = chat::send(SampleData.list_messages("1"), "hello".to_string());
    let before = SampleData.list_messages("1").len();
    assert_eq!(messages.len(), before + 1);
    let last = messages.last().unwrap();
    assert_eq!(last.text, "hello");
    assert_eq!(last.sender, Sender::Me);
    assert!(draft.is_empty());
}

#[test]
fn test_send_appends_outgoing_message() {
    let config = Config::default();
    let mut chat = ChatScreen::new(&SampleData);
    press(&mut chat, &config, KeyCode::Enter);
    assert!(chat.is_open());
    let before = chat.messages().unwrap().len();

    type_text(&mut chat, &config, "Olá, tudo bem?");
    press(&mut chat, &config, KeyCode::Enter);

    let messages = chat.messages().unwrap();
    assert_eq!(messages.len(), before + 1);
    let last = messages.last().unwrap();
    assert_eq!(last.text, "Olá, tudo bem?");
    assert_eq!(last.sender, Sender::Me);
}

#[test]
fn test_whitespace_draft_is_not_sent() {
    let config = Config::default();
    let mut chat = ChatScreen::new(&SampleData);
    press(&mut chat, &config, KeyCode::Enter);
    let before = chat.messages().unwrap().len();

    type_text(&mut chat, &config, "   ");
    press(&mut chat, &config, KeyCode::Enter);
    assert_eq!(chat.messages().unwrap().len(), before);
}

#[test]
fn test_vim_keys_are_typed_in_chat() {
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    let mut chat = ChatScreen::new(&SampleData);
    press(&mut chat, &config, KeyCode::Enter);
    let before = chat.messages().unwrap().len();

    type_text(&mut chat, &config, "jk qx");
    press(&mut chat, &config, KeyCode::Enter);

    let messages = chat.messages().unwrap();
    assert_eq!(messages.len(), before + 1);
    assert_eq!(messages.last().unwrap().text, "jk qx");
}

#[test]
fn test_sent_messages_survive_reopening() {
    let config = Config::default();
    let mut chat = ChatScreen::new(&SampleData);
    press(&mut chat, &config, KeyCode::Enter);
    type_text(&mut chat, &config, "ping");
    press(&mut chat, &config, KeyCode::Enter);
    let count = chat.messages().unwrap().len();

    press(&mut chat, &config, KeyCode::Esc);
    assert!(!chat.is_open());
    press(&mut chat, &config, KeyCode::Enter);
    assert_eq!(chat.messages().unwrap().len(), count);

    // Closing the conversation then the list goes back to the dashboard
    press(&mut chat, &config, KeyCode::Esc);
    assert_eq!(
        press(&mut chat, &config, KeyCode::Esc),
        ScreenAction::Navigate(NavEvent::Back)
    );
}

// ============================================================================
// Profile
// ============================================================================

proptest! {
    #[test]
    fn prop_cancel_restores_after_many_changes(
        edits in proptest::collection::vec(
            (proptest::sample::select(ProfileField::ALL.to_vec()), "[A-Za-z0-9 ]{0,12}"),
            1..10,
        ),
    ) {
        let original = SampleData.current_profile();
        let mut editor = ProfileEditor::new(original.clone());
        editor.begin();
        for (field, value) in &edits {
            editor.set_field(*field, value);
        }
        editor.cancel();
        prop_assert_eq!(editor.profile(), &original);
        prop_assert!(!editor.is_editing());
    }
}

#[test]
fn test_profile_save_commits_buffer() {
    let config = Config::default();
    let original = SampleData.current_profile();
    let mut profile = ProfileScreen::new(original.clone());

    press(&mut profile, &config, KeyCode::Char('e'));
    assert!(profile.editor().is_editing());

    // Name field: clear it and type a new one
    for _ in 0..original.name.chars().count() {
        press(&mut profile, &config, KeyCode::Backspace);
    }
    type_text(&mut profile, &config, "Maria Souza");
    let action = send(&mut profile, &config, KeyCode::Char('s'), KeyModifiers::CONTROL);

    assert_eq!(
        action,
        ScreenAction::Notify {
            message: "Profile saved".to_string(),
            variant: ToastVariant::Success,
        }
    );
    assert!(!profile.editor().is_editing());
    assert_eq!(profile.editor().profile().name, "Maria Souza");
    assert_eq!(profile.editor().profile().company, original.company);
}

#[test]
fn test_profile_cancel_keeps_original() {
    let config = Config::default();
    let original = SampleData.current_profile();
    let mut profile = ProfileScreen::new(original.clone());

    press(&mut profile, &config, KeyCode::Char('e'));
    type_text(&mut profile, &config, " Jr");
    press(&mut profile, &config, KeyCode::Tab);
    type_text(&mut profile, &config, " Ltda");
    press(&mut profile, &config, KeyCode::Esc);

    assert!(!profile.editor().is_editing());
    assert_eq!(profile.editor().profile(), &original);
}

#[test]
fn test_profile_editing_moves_across_fields() {
    let config = Config::default();
    let original = SampleData.current_profile();
    let mut profile = ProfileScreen::new(original.clone());

    press(&mut profile, &config, KeyCode::Char('e'));
    press(&mut profile, &config, KeyCode::Tab);
    type_text(&mut profile, &config, " Group");
    press(&mut profile, &config, KeyCode::BackTab);
    type_text(&mut profile, &config, "!");
    send(&mut profile, &config, KeyCode::Char('s'), KeyModifiers::CONTROL);

    let saved = profile.editor().profile();
    assert_eq!(saved.name, format!("{}!", original.name));
    assert_eq!(saved.company, format!("{} Group", original.company));
}
