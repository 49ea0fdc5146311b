use std::{
    sync::{Arc, Mutex, PoisonError},
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{rngs::StdRng, SeedableRng};
use teloxide::{dispatching::DpHandlerDescription, prelude::*};

use crate::error::HandlerResult;

pub mod command_handler;

pub struct BotState {
    rng: Mutex<StdRng>,
    pub verbose: bool,
}

pub type AsyncBotState = Arc<BotState>;

pub fn new_async_bot_state(rng: StdRng, verbose: bool) -> AsyncBotState {
    Arc::new(BotState {
        rng: Mutex::new(rng),
        verbose,
    })
}

/// Generator for a bot run, seeded once from the wall clock.
pub fn time_seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}

impl BotState {
    /// Runs `f` with exclusive access to the shared generator. The lock is released before
    /// returning, so callers may await afterwards.
    pub fn draw<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    // Per-command lines are only visible at info when the bot runs verbose
    fn reply_log_level(&self) -> log::Level {
        if self.verbose {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}

pub fn get_handler() -> Handler<'static, DependencyMap, HandlerResult, DpHandlerDescription> {
    Update::filter_message()
        .branch(command_handler::get_command_handler())
        .branch(command_handler::get_invalid_command_handler())
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use teloxide::types::Me;

    use super::*;
    use crate::{
        decision::INVALID_COMMAND_TEXT,
        transport::{testing::RecordingTransport, SharedTransport},
    };

    const CHAT_ID: i64 = 42;

    fn me() -> Me {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "is_bot": true,
            "first_name": "Easy Decision",
            "username": "easy_decision_bot",
            "can_join_groups": true,
            "can_read_all_group_messages": false,
            "supports_inline_queries": false,
        }))
        .unwrap()
    }

    fn message_update(content: serde_json::Value) -> Update {
        let mut message = serde_json::json!({
            "message_id": 7,
            "date": 1_700_000_000,
            "chat": { "id": CHAT_ID, "type": "private", "first_name": "Ann" },
            "from": { "id": CHAT_ID, "is_bot": false, "first_name": "Ann" },
        });
        for (key, value) in content.as_object().unwrap() {
            message[key.as_str()] = value.clone();
        }
        // Parse from text: teloxide-core 0.9 cannot read flattened `UpdateKind` keys from `from_value`
        serde_json::from_str(&serde_json::json!({ "update_id": 1, "message": message }).to_string())
            .unwrap()
    }

    fn text_update(text: &str) -> Update {
        message_update(serde_json::json!({ "text": text }))
    }

    async fn route(update: Update) -> (ControlFlow<HandlerResult, DependencyMap>, Vec<String>) {
        let recorder = Arc::new(RecordingTransport::default());
        let transport: SharedTransport = recorder.clone();
        let bot_state = new_async_bot_state(StdRng::seed_from_u64(5), false);

        let flow = get_handler()
            .dispatch(dptree::deps![update, me(), bot_state, transport])
            .await;

        let replies = recorder
            .sent()
            .into_iter()
            .map(|(chat_id, text)| {
                assert_eq!(chat_id, ChatId(CHAT_ID));
                text
            })
            .collect();
        (flow, replies)
    }

    #[tokio::test]
    async fn known_command_reaches_its_handler() {
        let (flow, replies) = route(text_update("/coin")).await;

        assert!(matches!(flow, ControlFlow::Break(Ok(()))));
        assert_eq!(replies.len(), 1);
        assert!(replies[0] == "Head" || replies[0] == "Tail", "{}", replies[0]);
    }

    #[tokio::test]
    async fn command_addressed_to_this_bot_is_handled() {
        let (_, replies) = route(text_update("/help@Easy_Decision_Bot")).await;
        assert_eq!(replies, vec![crate::decision::help_text().to_string()]);
    }

    #[tokio::test]
    async fn plain_text_gets_invalid_reply() {
        let (flow, replies) = route(text_update("hello")).await;

        assert!(matches!(flow, ControlFlow::Break(Ok(()))));
        assert_eq!(replies, vec![INVALID_COMMAND_TEXT.to_string()]);
    }

    #[tokio::test]
    async fn unknown_command_gets_invalid_reply() {
        let (_, replies) = route(text_update("/roll")).await;
        assert_eq!(replies, vec![INVALID_COMMAND_TEXT.to_string()]);
    }

    #[tokio::test]
    async fn commands_for_other_bots_are_ignored() {
        for text in ["/coin@other_bot", "/roll@other_bot 2d6"] {
            let (flow, replies) = route(text_update(text)).await;

            assert!(matches!(flow, ControlFlow::Continue(_)), "{}", text);
            assert!(replies.is_empty(), "{}", text);
        }
    }

    #[tokio::test]
    async fn non_text_message_gets_no_reply() {
        let update = message_update(serde_json::json!({
            "location": { "latitude": 51.5, "longitude": -0.12 }
        }));
        let (flow, replies) = route(update).await;

        assert!(matches!(flow, ControlFlow::Continue(_)));
        assert!(replies.is_empty());
    }

    #[test]
    fn time_seeded_rng_feeds_a_usable_state() {
        let state = new_async_bot_state(time_seeded_rng(), true);
        let face = state.draw(|rng| crate::decision::roll_dice(rng));
        assert!((1..=6).contains(&face.0));
    }
}
