use std::sync::Arc;

use calrelay_models::song::SongSearchRequest;
use teloxide::prelude::*;

use crate::pending_reply::PendingReply;
use crate::relay_client::RelayClient;
use crate::{HandlerResult, replies, report_command_error};

pub(crate) async fn search_song(
    bot: Bot,
    msg: Message,
    relay: Arc<dyn RelayClient>,
    (song, artist): (String, Option<String>),
) -> HandlerResult {
    let request = SongSearchRequest { song, artist };

    let result = relay_song_search(&bot, &msg, relay.as_ref(), request).await;
    report_command_error(&bot, &msg, result).await
}

async fn relay_song_search(
    bot: &Bot,
    msg: &Message,
    relay: &dyn RelayClient,
    request: SongSearchRequest,
) -> HandlerResult {
    log::debug!("/searchsong invoked in chat {}", msg.chat.id);

    let pending = PendingReply::acknowledge(bot, msg, "⏳ Searching…").await?;

    let outcome = relay.search_song(&request).await;
    if let Err(err) = &outcome {
        log::warn!("Relay call for /searchsong failed: {err}");
    }

    let reply = replies::song_outcome(&request, &outcome, &replies::requester_name(msg));
    pending.complete(reply).await
}
