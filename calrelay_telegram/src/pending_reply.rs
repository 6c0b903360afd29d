use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::HandlerResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyVisibility {
    Public,
    RequesterOnly,
}

/// Final text of an interaction. Always HTML formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReply {
    pub text: String,
    pub visibility: ReplyVisibility,
}

impl UserReply {
    pub fn public(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: ReplyVisibility::Public,
        }
    }

    pub fn requester_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visibility: ReplyVisibility::RequesterOnly,
        }
    }

    pub fn is_requester_only(&self) -> bool {
        self.visibility == ReplyVisibility::RequesterOnly
    }
}

/// Telegram has no per-user messages inside a group, so requester-only
/// replies from a group go to the requester's private chat.
#[derive(Debug, Clone, Copy)]
struct ReplyTarget {
    chat: ChatId,
    requester: Option<ChatId>,
}

impl ReplyTarget {
    fn of(msg: &Message) -> Self {
        let requester = if msg.chat.is_private() {
            None
        } else {
            msg.from.as_ref().map(|user| ChatId::from(user.id))
        };

        Self {
            chat: msg.chat.id,
            requester,
        }
    }

    async fn try_send_private(&self, bot: &Bot, reply: &UserReply) -> bool {
        let Some(requester) = self.requester.filter(|_| reply.is_requester_only()) else {
            return false;
        };

        match send_html(bot, requester, &reply.text).await {
            Ok(_) => true,
            Err(err) => {
                log::warn!(
                    "Could not message requester {} privately, replying in chat {}: {}",
                    requester,
                    self.chat,
                    err
                );
                false
            }
        }
    }
}

async fn send_html(bot: &Bot, chat_id: ChatId, text: &str) -> Result<Message, teloxide::RequestError> {
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
        .await
}

/// Replies to `msg` right away.
pub async fn send_reply(bot: &Bot, msg: &Message, reply: UserReply) -> HandlerResult {
    let target = ReplyTarget::of(msg);
    if target.try_send_private(bot, &reply).await {
        return Ok(());
    }

    send_html(bot, target.chat, &reply.text).await?;
    Ok(())
}

/// An acknowledged interaction whose final reply is not known yet.
pub struct PendingReply {
    bot: Bot,
    target: ReplyTarget,
    acknowledgement: Message,
}

impl PendingReply {
    /// Tells the requester the command is being processed.
    pub async fn acknowledge(bot: &Bot, msg: &Message, text: &str) -> anyhow::Result<Self> {
        let acknowledgement = bot.send_message(msg.chat.id, text).await?;

        Ok(Self {
            bot: bot.clone(),
            target: ReplyTarget::of(msg),
            acknowledgement,
        })
    }

    /// Replaces the acknowledgement with the final reply.
    pub async fn complete(self, reply: UserReply) -> HandlerResult {
        let ack_chat = self.acknowledgement.chat.id;
        let ack_id = self.acknowledgement.id;

        if self.target.try_send_private(&self.bot, &reply).await {
            if let Err(err) = self.bot.delete_message(ack_chat, ack_id).await {
                log::warn!("Could not remove acknowledgement in chat {ack_chat}: {err}");
            }
            return Ok(());
        }

        self.bot
            .edit_message_text(ack_chat, ack_id, reply.text)
            .parse_mode(ParseMode::Html)
            .await?;

        Ok(())
    }
}
