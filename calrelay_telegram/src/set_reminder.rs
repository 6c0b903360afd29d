use std::sync::Arc;

use calrelay_models::reminder::ReminderRequest;
use teloxide::prelude::*;

use crate::commands::ReminderFields;
use crate::pending_reply::{PendingReply, send_reply};
use crate::relay_client::RelayClient;
use crate::validation::validate_reminder;
use crate::{HandlerResult, replies, report_command_error};

pub(crate) async fn set_reminder(
    bot: Bot,
    msg: Message,
    relay: Arc<dyn RelayClient>,
    (title, date, start_time, end_time, description): ReminderFields,
) -> HandlerResult {
    let request = ReminderRequest {
        title,
        date,
        start_time,
        end_time,
        description,
    };

    let result = relay_reminder(&bot, &msg, relay.as_ref(), request).await;
    report_command_error(&bot, &msg, result).await
}

async fn relay_reminder(
    bot: &Bot,
    msg: &Message,
    relay: &dyn RelayClient,
    request: ReminderRequest,
) -> HandlerResult {
    log::debug!("/setreminder invoked in chat {}", msg.chat.id);

    if let Err(err) = validate_reminder(&request) {
        log::info!("Rejected /setreminder in chat {}: {}", msg.chat.id, err);
        return send_reply(bot, msg, replies::validation_error(err)).await;
    }

    let pending = PendingReply::acknowledge(bot, msg, "⏳ Creating your reminder…").await?;

    let outcome = relay.set_reminder(&request).await;
    match &outcome {
        Ok(result) => log::info!("Relay answered /setreminder with {:?}", result.status),
        Err(err) => log::warn!("Relay call for /setreminder failed: {err}"),
    }

    let reply = replies::reminder_outcome(&request, &outcome, &replies::requester_name(msg));
    pending.complete(reply).await
}
