use teloxide::{
    dispatching::DpHandlerDescription, prelude::*, types::Me, utils::command::BotCommands,
};

use super::{AsyncBotState, BotState};
use crate::{
    decision::{self, INVALID_COMMAND_TEXT},
    error::HandlerResult,
    transport::{SharedTransport, Transport},
};

pub fn get_command_handler(
) -> Handler<'static, DependencyMap, HandlerResult, DpHandlerDescription> {
    dptree::entry()
        .filter_command::<Command>()
        .endpoint(command_endpoint)
}

/// Catches text the command branch did not claim, including unknown commands. Commands
/// addressed to another bot in the same chat are left alone.
pub fn get_invalid_command_handler(
) -> Handler<'static, DependencyMap, HandlerResult, DpHandlerDescription> {
    dptree::filter(|msg: Message, me: Me| match msg.text() {
        Some(text) => !addressed_to_other_bot(text, me.username()),
        None => false,
    })
    .endpoint(invalid_command_endpoint)
}

/// True for `/cmd@name ...` when `name` is not `bot_username`.
pub fn addressed_to_other_bot(text: &str, bot_username: &str) -> bool {
    let first_word = text.split_whitespace().next().unwrap_or_default();
    match first_word
        .strip_prefix('/')
        .and_then(|cmd| cmd.split_once('@'))
    {
        Some((_, name)) => !name.eq_ignore_ascii_case(bot_username),
        None => false,
    }
}

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "print this help message")]
    Help,
    #[command(description = "flip a coin")]
    Coin,
    #[command(description = "throw the dice")]
    Dice,
}

async fn command_endpoint(
    bot_state: AsyncBotState,
    transport: SharedTransport,
    msg: Message,
    cmd: Command,
) -> HandlerResult {
    handle_command(transport.as_ref(), &bot_state, msg.chat.id, cmd).await
}

async fn invalid_command_endpoint(
    bot_state: AsyncBotState,
    transport: SharedTransport,
    msg: Message,
) -> HandlerResult {
    handle_invalid_command(transport.as_ref(), &bot_state, msg.chat.id).await
}

pub async fn handle_command<T>(
    transport: &T,
    bot_state: &BotState,
    chat_id: ChatId,
    cmd: Command,
) -> HandlerResult
where
    T: Transport + ?Sized,
{
    let (text, log_line) = match cmd {
        Command::Start => (
            decision::start_text(),
            String::from("Replied to /start command"),
        ),
        Command::Help => (
            decision::help_text().to_string(),
            String::from("Replied to /help command"),
        ),
        Command::Coin => {
            let face = bot_state.draw(|rng| decision::flip_coin(rng))?;
            (
                face.to_string(),
                format!("Replied to /coin command with {}", face),
            )
        }
        Command::Dice => {
            let face = bot_state.draw(|rng| decision::roll_dice(rng));
            (
                face.to_string(),
                format!("Replied to /dice command with {}", face.0),
            )
        }
    };

    transport.send_text(chat_id, text).await?;
    log::log!(bot_state.reply_log_level(), "{}", log_line);

    Ok(())
}

pub async fn handle_invalid_command<T>(
    transport: &T,
    bot_state: &BotState,
    chat_id: ChatId,
) -> HandlerResult
where
    T: Transport + ?Sized,
{
    transport
        .send_text(chat_id, String::from(INVALID_COMMAND_TEXT))
        .await?;
    log::log!(bot_state.reply_log_level(), "Invalid command provided");

    Ok(())
}
