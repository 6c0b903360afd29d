use serde::{Deserialize, Serialize};

pub const SET_REMINDER_PATH: &str = "/setreminder";
pub const SEARCH_SONG_PATH: &str = "/searchsong";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RelayStatus {
    Success,
    Error,
}

/// Outcome of one executable invocation as returned by the relay service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RelayResult {
    pub status: RelayStatus,
    pub output: String,
}

impl RelayResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            status: RelayStatus::Success,
            output: output.into(),
        }
    }

    pub fn error(output: impl Into<String>) -> Self {
        Self {
            status: RelayStatus::Error,
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RelayStatus::Success
    }
}
