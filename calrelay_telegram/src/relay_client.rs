use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use calrelay_models::relay::{RelayResult, SEARCH_SONG_PATH, SET_REMINDER_PATH};
use calrelay_models::reminder::ReminderRequest;
use calrelay_models::settings::RelayClientSettings;
use calrelay_models::song::SongSearchRequest;
use serde::Serialize;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum RelayClientError {
    #[error("the relay service did not answer in time")]
    Timeout,

    #[error("could not reach the relay service: {0}")]
    Transport(#[source] BoxError),

    #[error("the relay service sent an unexpected response: {0}")]
    InvalidResponse(#[source] BoxError),
}

impl From<reqwest::Error> for RelayClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() || err.is_status() {
            Self::InvalidResponse(err.into())
        } else {
            Self::Transport(err.into())
        }
    }
}

#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn set_reminder(
        &self,
        request: &ReminderRequest,
    ) -> Result<RelayResult, RelayClientError>;

    async fn search_song(
        &self,
        request: &SongSearchRequest,
    ) -> Result<RelayResult, RelayClientError>;
}

pub struct HttpRelayClient {
    client: reqwest::Client,
    base_url: String,
    reminder_timeout: Duration,
    search_song_timeout: Duration,
}

impl HttpRelayClient {
    pub fn new(settings: &RelayClientSettings) -> reqwest::Result<Self> {
        Self::with_timeouts(
            &settings.base_url,
            Duration::from_secs(settings.reminder_timeout_secs),
            Duration::from_secs(settings.search_song_timeout_secs),
        )
    }

    pub fn with_timeouts(
        base_url: &str,
        reminder_timeout: Duration,
        search_song_timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            reminder_timeout,
            search_song_timeout,
        })
    }

    async fn post<T>(
        &self,
        path: &str,
        body: &T,
        timeout: Duration,
    ) -> Result<RelayResult, RelayClientError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("Sending POST to {url}");

        let response = self
            .client
            .post(&url)
            .json(body)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;

        log::debug!("Relay answered {} for {url}", response.status());
        Ok(response.json::<RelayResult>().await?)
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn set_reminder(
        &self,
        request: &ReminderRequest,
    ) -> Result<RelayResult, RelayClientError> {
        self.post(SET_REMINDER_PATH, request, self.reminder_timeout)
            .await
    }

    async fn search_song(
        &self,
        request: &SongSearchRequest,
    ) -> Result<RelayResult, RelayClientError> {
        self.post(SEARCH_SONG_PATH, request, self.search_song_timeout)
            .await
    }
}
