use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A calendar entry to create. Fields stay as the user typed them; the
/// front-end checks the date and time formats before anything is sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
}

impl ReminderRequest {
    /// Positional arguments for the reminder executable.
    pub fn into_arguments(self) -> Vec<String> {
        vec![
            self.title,
            self.date,
            self.start_time,
            self.end_time,
            self.description,
        ]
    }

    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}
