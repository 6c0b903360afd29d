mod commands;
mod pending_reply;
mod relay_client;
mod replies;
mod search_song;
mod set_reminder;
mod validation;

#[cfg(test)]
mod tests;

pub use teloxide;

pub use pending_reply::{PendingReply, ReplyVisibility, UserReply};
pub use relay_client::{HttpRelayClient, RelayClient, RelayClientError};
pub use validation::{ValidationError, validate_reminder};

use commands::RelayCommand;
use pending_reply::send_reply;
use std::sync::Arc;
use teloxide::{
    dispatching::UpdateHandler,
    dptree::case,
    prelude::*,
    types::Me,
    utils::command::BotCommands,
};

type HandlerResult = anyhow::Result<()>;

pub struct TelegramInteractionInterface;

impl TelegramInteractionInterface {
    pub async fn start(bot: teloxide::Bot, relay: Arc<dyn RelayClient>) {
        log::info!("Starting Telegram UI.");

        sync_commands(&bot).await;

        Dispatcher::builder(bot, schema())
            .dependencies(dptree::deps![relay])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await
    }
}

/// Registers the command list with Telegram. Failures are logged only.
async fn sync_commands(bot: &Bot) {
    match bot.get_me().await {
        Ok(me) => log::info!("@{} has connected to Telegram!", me.username()),
        Err(err) => log::warn!("Could not fetch bot identity: {err}"),
    }

    let commands = RelayCommand::bot_commands();
    let count = commands.len();
    match bot.set_my_commands(commands).await {
        Ok(_) => log::info!("Synced {count} command(s)"),
        Err(err) => log::error!("Failed to sync commands: {err}"),
    }
}

pub(crate) fn schema() -> UpdateHandler<anyhow::Error> {
    let command_handler = teloxide::filter_command::<RelayCommand, _>()
        .branch(
            case![RelayCommand::SetReminder {
                title,
                date,
                start_time,
                end_time,
                description
            }]
            .endpoint(set_reminder::set_reminder),
        )
        .branch(case![RelayCommand::SearchSong { song, artist }].endpoint(search_song::search_song))
        .branch(case![RelayCommand::ReminderHelp].endpoint(reminder_help));

    Update::filter_message()
        .branch(command_handler)
        .branch(dptree::filter(is_command_for_me).endpoint(unrecognized_command))
        .branch(dptree::filter(|msg: Message| msg.chat.is_private()).endpoint(invalid_message))
}

/// Sends the generic failure reply for an error that escaped a command.
pub(crate) async fn report_command_error(
    bot: &Bot,
    msg: &Message,
    result: HandlerResult,
) -> HandlerResult {
    if let Err(err) = result {
        log::error!("Command failed in chat {}: {:?}", msg.chat.id, err);
        bot.send_message(msg.chat.id, format!("❌ An error occurred: {err}"))
            .await?;
    }

    Ok(())
}

async fn reminder_help(bot: Bot, msg: Message) -> HandlerResult {
    let result = send_reply(&bot, &msg, replies::help()).await;
    report_command_error(&bot, &msg, result).await
}

/// A `/command` that is either unaddressed or mentions this bot.
fn is_command_for_me(msg: Message, me: Me) -> bool {
    let Some(text) = msg.text().filter(|text| text.starts_with('/')) else {
        return false;
    };

    match command_mention(text) {
        Some(mention) => mention.eq_ignore_ascii_case(me.username()),
        None => true,
    }
}

fn command_token(text: &str) -> &str {
    text.split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_start_matches('/')
}

/// Name of the command in `text` without the slash and bot mention.
fn command_name(text: &str) -> &str {
    command_token(text).split('@').next().unwrap_or_default()
}

fn command_mention(text: &str) -> Option<&str> {
    command_token(text).split_once('@').map(|(_, mention)| mention)
}

async fn unrecognized_command(bot: Bot, msg: Message) -> HandlerResult {
    let name = command_name(msg.text().unwrap_or_default()).to_lowercase();

    if name == "start" {
        return send_reply(&bot, &msg, replies::help()).await;
    }

    let reply = match commands::usage(&name) {
        Some(usage) => {
            log::info!("Could not parse arguments of /{name} in chat {}", msg.chat.id);
            replies::unreadable_arguments(usage)
        }
        None => {
            log::info!("Unknown command /{name} in chat {}", msg.chat.id);
            replies::command_not_found()
        }
    };

    send_reply(&bot, &msg, reply).await
}

async fn invalid_message(bot: Bot, msg: Message) -> HandlerResult {
    send_reply(&bot, &msg, replies::not_a_command()).await
}
