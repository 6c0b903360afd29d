use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct TelegramSettings {
    pub token: Option<String>,
}

/// Where the bot finds the relay service and how long it waits for it.
#[derive(Deserialize, Debug, Clone)]
pub struct RelayClientSettings {
    pub base_url: String,
    pub reminder_timeout_secs: u64,
    pub search_song_timeout_secs: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerSettings {
    pub bind_address: SocketAddr,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExecutableSettings {
    pub path: PathBuf,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExecutablesSettings {
    pub reminder: ExecutableSettings,
    pub search_song: ExecutableSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(default)]
    pub telegram: TelegramSettings,
    pub relay_client: RelayClientSettings,
    pub server: ServerSettings,
    pub executables: ExecutablesSettings,
}
