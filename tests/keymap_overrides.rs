use crossterm::event::{KeyCode, KeyModifiers};
use disruption::app::App;
use disruption::config::Config;
use disruption::data::SampleData;
use disruption::keymap::{Action, KeyBinding, Keymap, KeymapPreset};
use disruption::store::MemoryStore;
use disruption::widgets::ToastVariant;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let keymap = &loaded.keymap;
    assert_eq!(
        keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );

    // Overridden actions lose every preset binding
    assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);

    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_keymap_override_with_modifiers() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("ctrl+n", Action::Create)],
    };

    assert_eq!(
        keymap.get_action(KeyCode::Char('n'), KeyModifiers::CONTROL),
        Some(Action::Create)
    );
    assert_eq!(keymap.get_action(KeyCode::Char('n'), KeyModifiers::NONE), None);
}

#[test]
fn test_config_file_with_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
theme = "light"
splash_duration_ms = 1200

[keymap]
preset = "emacs"

[[keymap.overrides]]
key = "f1"
action = "help"

[[keymap.overrides]]
key = "ctrl+h"
action = "quit"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config.theme, "light");
    assert_eq!(config.splash_duration_ms, 1200);
    assert_eq!(config.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(
        config.keymap.get_action(KeyCode::F(1), KeyModifiers::NONE),
        Some(Action::Help)
    );
    assert_eq!(
        config
            .keymap
            .get_action(KeyCode::Char('h'), KeyModifiers::CONTROL),
        Some(Action::Quit)
    );
    assert!(config.keymap.invalid_overrides().is_empty());
}

#[test]
fn test_invalid_override_in_config_raises_toast() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[keymap]
preset = "standard"

[[keymap.overrides]]
key = "hyper+x"
action = "quit"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    let app = App::new(
        config,
        config_path,
        Box::new(MemoryStore::new()),
        Box::new(SampleData),
    );

    let toast = app.toasts().current().expect("expected an error toast");
    assert_eq!(toast.variant, ToastVariant::Error);
    assert!(toast.message.contains("1 keymap override"));
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("w", Action::MoveUp)],
    };
    let nav = keymap.navigation_display();
    assert!(nav.to_lowercase().contains('w'), "got {:?}", nav);
}
