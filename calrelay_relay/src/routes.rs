use std::path::PathBuf;
use std::time::Duration;

use calrelay_models::relay::{SEARCH_SONG_PATH, SET_REMINDER_PATH};
use calrelay_models::reminder::ReminderRequest;
use calrelay_models::settings::ExecutablesSettings;
use calrelay_models::song::SongSearchRequest;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SetReminder,
    SearchSong,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::SetReminder => SET_REMINDER_PATH,
            Endpoint::SearchSong => SEARCH_SONG_PATH,
        }
    }

    pub fn timeout_message(self) -> &'static str {
        match self {
            Endpoint::SetReminder => "Calendar operation timed out",
            Endpoint::SearchSong => "Search song operation timed out",
        }
    }
}

/// A request body the relay knows how to turn into executable arguments.
pub trait RelayPayload: DeserializeOwned + Send + 'static {
    const ENDPOINT: Endpoint;

    fn into_arguments(self) -> Vec<String>;
}

impl RelayPayload for ReminderRequest {
    const ENDPOINT: Endpoint = Endpoint::SetReminder;

    fn into_arguments(self) -> Vec<String> {
        ReminderRequest::into_arguments(self)
    }
}

impl RelayPayload for SongSearchRequest {
    const ENDPOINT: Endpoint = Endpoint::SearchSong;

    fn into_arguments(self) -> Vec<String> {
        SongSearchRequest::into_arguments(self)
    }
}

#[derive(Debug, Clone)]
pub struct RelayRoute {
    pub executable: PathBuf,
    pub timeout: Duration,
    pub timeout_message: String,
}

impl RelayRoute {
    pub fn new(endpoint: Endpoint, executable: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            executable: executable.into(),
            timeout,
            timeout_message: endpoint.timeout_message().to_string(),
        }
    }
}

/// Endpoint to executable mapping shared by all requests.
#[derive(Debug, Clone)]
pub struct RelayRoutes {
    set_reminder: RelayRoute,
    search_song: RelayRoute,
}

impl RelayRoutes {
    pub fn new(set_reminder: RelayRoute, search_song: RelayRoute) -> Self {
        Self {
            set_reminder,
            search_song,
        }
    }

    pub fn from_settings(settings: &ExecutablesSettings) -> Self {
        Self::new(
            RelayRoute::new(
                Endpoint::SetReminder,
                settings.reminder.path.clone(),
                Duration::from_secs(settings.reminder.timeout_secs),
            ),
            RelayRoute::new(
                Endpoint::SearchSong,
                settings.search_song.path.clone(),
                Duration::from_secs(settings.search_song.timeout_secs),
            ),
        )
    }

    pub fn route(&self, endpoint: Endpoint) -> &RelayRoute {
        match endpoint {
            Endpoint::SetReminder => &self.set_reminder,
            Endpoint::SearchSong => &self.search_song,
        }
    }
}
