use teloxide::macros::BotCommands;
use teloxide::utils::command::ParseError;

/// Separates the fields of multi-argument commands.
pub(crate) const FIELD_SEPARATOR: char = '|';

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub(crate) enum RelayCommand {
    #[command(
        description = "create a calendar reminder: title | YYYY-MM-DD | HH:MM | HH:MM | description",
        parse_with = parse_reminder_fields
    )]
    SetReminder {
        title: String,
        date: String,
        start_time: String,
        end_time: String,
        description: String,
    },
    #[command(
        description = "search for a song: song | artist (artist is optional)",
        parse_with = parse_song_fields
    )]
    SearchSong { song: String, artist: Option<String> },
    #[command(description = "show how to use the reminder bot")]
    ReminderHelp,
}

/// How a known command is meant to be typed, by command name without the slash.
pub(crate) fn usage(command: &str) -> Option<&'static str> {
    match command {
        "setreminder" => Some("/setreminder title | YYYY-MM-DD | HH:MM | HH:MM | description"),
        "searchsong" => Some("/searchsong song | artist"),
        "reminderhelp" => Some("/reminderhelp"),
        _ => None,
    }
}

fn split_fields(input: &str) -> Vec<String> {
    input
        .split(FIELD_SEPARATOR)
        .map(|field| field.trim().to_string())
        .collect()
}

fn field_count_error(expected: &str, found: usize) -> ParseError {
    ParseError::Custom(
        format!("expected {expected} separated by '{FIELD_SEPARATOR}', found {found}").into(),
    )
}

pub(crate) type ReminderFields = (String, String, String, String, String);

pub(crate) fn parse_reminder_fields(input: String) -> Result<ReminderFields, ParseError> {
    let fields = split_fields(&input);

    match <[String; 5]>::try_from(fields) {
        Ok([title, date, start_time, end_time, description]) => {
            Ok((title, date, start_time, end_time, description))
        }
        Err(fields) => Err(field_count_error("5 fields", fields.len())),
    }
}

pub(crate) fn parse_song_fields(input: String) -> Result<(String, Option<String>), ParseError> {
    let fields = split_fields(&input);
    let found = fields.len();
    let mut fields = fields.into_iter();

    match (fields.next(), fields.next(), fields.next()) {
        (Some(song), artist, None) if !song.is_empty() => {
            Ok((song, artist.filter(|artist| !artist.is_empty())))
        }
        _ => Err(field_count_error("a song and an optional artist", found)),
    }
}
