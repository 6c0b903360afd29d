use calrelay_models::relay::RelayResult;
use calrelay_models::reminder::ReminderRequest;
use calrelay_models::song::SongSearchRequest;
use teloxide::types::Message;
use teloxide::utils::html;

use crate::pending_reply::UserReply;
use crate::relay_client::RelayClientError;
use crate::validation::ValidationError;

/// Telegram rejects messages over 4096 characters; leave room for the frame.
const MAX_DETAIL_CHARS: usize = 3500;

pub(crate) const CALENDAR_TIMEOUT_HINT: &str = "❌ The calendar operation timed out. This may be due to:
• Calendar access not granted to Terminal/IDE
• Go to System Preferences → Security &amp; Privacy → Privacy → Calendars
• Add your Terminal or IDE to the allowed apps";

pub(crate) const SONG_TIMEOUT_HINT: &str =
    "❌ The song search timed out. Make sure the music app can be opened and try again.";

pub(crate) fn requester_name(msg: &Message) -> String {
    msg.from
        .as_ref()
        .map(|user| user.full_name())
        .unwrap_or_else(|| "unknown user".to_string())
}

pub(crate) fn validation_error(err: ValidationError) -> UserReply {
    UserReply::requester_only(format!("❌ {err}"))
}

fn detail(output: &str) -> String {
    if output.trim().is_empty() {
        return html::code_block("Unknown error");
    }

    match output.char_indices().nth(MAX_DETAIL_CHARS) {
        Some((cut, _)) => html::code_block(&format!("{}…", &output[..cut])),
        None => html::code_block(output),
    }
}

fn unexpected(err: &RelayClientError) -> UserReply {
    UserReply::requester_only(format!(
        "❌ An unexpected error occurred: {}",
        html::escape(&err.to_string())
    ))
}

pub(crate) fn reminder_outcome(
    request: &ReminderRequest,
    outcome: &Result<RelayResult, RelayClientError>,
    requester: &str,
) -> UserReply {
    match outcome {
        Ok(result) if result.is_success() => UserReply::public(reminder_created(request, requester)),
        Ok(result) => UserReply::requester_only(format!(
            "❌ Failed to create reminder:\n{}",
            detail(&result.output)
        )),
        Err(RelayClientError::Timeout) => UserReply::requester_only(CALENDAR_TIMEOUT_HINT),
        Err(err) => unexpected(err),
    }
}

fn reminder_created(request: &ReminderRequest, requester: &str) -> String {
    format!(
        "✅ {}\nYour reminder has been added to your Calendar!\n\n\
         {} {}\n{} {}\n{} {}\n{} {}\n\n{}",
        html::bold("Reminder Created"),
        html::bold("Title:"),
        html::escape(&request.title),
        html::bold("Date:"),
        html::escape(&request.date),
        html::bold("Time:"),
        html::escape(&request.time_range()),
        html::bold("Description:"),
        html::escape(&request.description),
        html::italic(&format!("Created by {}", html::escape(requester))),
    )
}

pub(crate) fn song_outcome(
    request: &SongSearchRequest,
    outcome: &Result<RelayResult, RelayClientError>,
    requester: &str,
) -> UserReply {
    match outcome {
        Ok(result) if result.is_success() => {
            let mut text = format!(
                "🎵 {}\n\n{} {}\n",
                html::bold("Song Search"),
                html::bold("Song:"),
                html::escape(&request.song)
            );
            if let Some(artist) = request.artist() {
                text.push_str(&format!("{} {}\n", html::bold("Artist:"), html::escape(artist)));
            }
            if !result.output.trim().is_empty() {
                text.push_str(&format!("\n{}\n", detail(&result.output)));
            }
            text.push_str(&format!(
                "\n{}",
                html::italic(&format!("Requested by {}", html::escape(requester)))
            ));
            UserReply::public(text)
        }
        Ok(result) => UserReply::requester_only(format!(
            "❌ Failed to search song:\n{}",
            detail(&result.output)
        )),
        Err(RelayClientError::Timeout) => UserReply::requester_only(SONG_TIMEOUT_HINT),
        Err(err) => unexpected(err),
    }
}

pub(crate) fn help() -> UserReply {
    let text = format!(
        "📅 {}\nThis bot creates reminders in your macOS Calendar app.\n\n\
         {}\n/setreminder title | date | start_time | end_time | description\n\n\
         {}\n\
         • {}: Name of your reminder\n\
         • {}: Date in YYYY-MM-DD format\n\
         • {}: Start time in HH:MM (24-hour)\n\
         • {}: End time in HH:MM (24-hour)\n\
         • {}: Details about the reminder\n\n\
         {}\n{}\n\n\
         {}\n/searchsong song | artist (artist is optional)\n\n\
         {}",
        html::bold("Reminder Bot Help"),
        html::bold("Command"),
        html::bold("Parameters"),
        html::bold("title"),
        html::bold("date"),
        html::bold("start_time"),
        html::bold("end_time"),
        html::bold("description"),
        html::bold("Example"),
        html::code_block("/setreminder Team Meeting | 2026-01-15 | 14:00 | 15:00 | Discuss Q1 goals"),
        html::bold("Song search"),
        html::italic("Note: This bot requires macOS Calendar access"),
    );

    UserReply::public(text)
}

pub(crate) fn command_not_found() -> UserReply {
    UserReply::public("❌ Command not found. Use /reminderhelp for available commands.")
}

pub(crate) fn unreadable_arguments(usage: &str) -> UserReply {
    UserReply::requester_only(format!(
        "❌ Could not read the command arguments. Use:\n{}\nSee /reminderhelp for details.",
        html::code_inline(usage)
    ))
}

pub(crate) fn not_a_command() -> UserReply {
    UserReply::public("I only understand commands. Use /reminderhelp to see what I can do.")
}
