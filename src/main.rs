use anyhow::Result;
use clap::Parser;
use disruption::app::App;
use disruption::cli::Cli;
use disruption::config::Config;
use disruption::data::SampleData;
use disruption::store::{FileStore, KeyValueStore, MemoryStore};
use disruption::styles::{init_theme, ThemeType};
use disruption::tui::Tui;
use disruption::utils::{get_log_dir, path::LOG_FILE_NAME};
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// `--no-colors` / `NO_COLOR` first, then `--theme`, then the config file
fn resolve_theme(cli: &Cli, config: &Config) -> ThemeType {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if cli.no_colors || no_color_env {
        return ThemeType::NoColor;
    }
    cli.theme
        .as_deref()
        .unwrap_or(&config.theme)
        .parse()
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join(LOG_FILE_NAME);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path)?;
    init_theme(resolve_theme(&cli, &config));

    let store: Box<dyn KeyValueStore> = if cli.ephemeral {
        info!("Ephemeral session, onboarding flag kept in memory");
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::open(&config.state_path(&config_path)))
    };

    let mut tui = Tui::new()?;
    let mut app = App::new(config, config_path, store, Box::new(SampleData));
    let result = app.run(&mut tui);

    drop(tui);
    drop(guard);
    result
}
