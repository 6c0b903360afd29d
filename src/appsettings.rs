use calrelay_models::settings::{Settings, TelegramSettings};
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

/// Token variable read by teloxide itself; accepted as a fallback.
const TELOXIDE_TOKEN: &str = "TELOXIDE_TOKEN";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Telegram bot token is not set")]
    MissingToken,
}

/// Layers defaults, `appsettings`, `appsettings.local` and `APP_*` variables.
pub fn load() -> Result<Settings, SettingsError> {
    let settings = Config::builder()
        .set_default("relay_client.base_url", "http://127.0.0.1:8000")?
        .set_default("relay_client.reminder_timeout_secs", 3)?
        .set_default("relay_client.search_song_timeout_secs", 20)?
        .set_default("server.bind_address", "127.0.0.1:8000")?
        .set_default("executables.reminder.path", "./SetReminder")?
        .set_default("executables.reminder.timeout_secs", 3)?
        .set_default("executables.search_song.path", "./SearchSong")?
        .set_default("executables.search_song.timeout_secs", 15)?
        .add_source(File::with_name("appsettings").required(false))
        .add_source(File::with_name("appsettings.local").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn bot_token(settings: &TelegramSettings) -> Result<String, SettingsError> {
    settings
        .token
        .clone()
        .or_else(|| std::env::var(TELOXIDE_TOKEN).ok())
        .filter(|token| !token.trim().is_empty())
        .ok_or(SettingsError::MissingToken)
}

pub fn print_token_help() {
    eprintln!("Error: Telegram bot token is not set");
    eprintln!("\nTo set your token:");
    eprintln!("  export APP_TELEGRAM__TOKEN='your-token-here'");
    eprintln!("\nOr create a .env file with:");
    eprintln!("  APP_TELEGRAM__TOKEN=your-token-here");
    eprintln!("\nOr add it to appsettings.local.toml:");
    eprintln!("  [telegram]");
    eprintln!("  token = \"your-token-here\"");
}
