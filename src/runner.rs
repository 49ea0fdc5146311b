use std::sync::Arc;

use teloxide::{prelude::*, update_listeners::Polling, utils::command::BotCommands};

use crate::{
    config::Config,
    error::BotError,
    handlers::{command_handler::Command, get_handler, new_async_bot_state, time_seeded_rng},
    transport::SharedTransport,
};

/// Connects to Telegram and polls until interrupted. Only fails if the bot cannot identify
/// itself with the configured token.
pub async fn run(config: Config) -> Result<(), BotError> {
    let bot = Bot::new(&config.token);

    let me = bot.get_me().await?;
    log::info!("Logged in as @{}", me.username());

    if let Err(err) = bot.set_my_commands(Command::bot_commands()).await {
        log::warn!("Failed to publish command list: {}", err);
    }

    let bot_state = new_async_bot_state(time_seeded_rng(), config.verbose);
    let transport: SharedTransport = Arc::new(bot.clone());
    let listener = Polling::builder(bot.clone())
        .timeout(config.poll_timeout)
        .delete_webhook()
        .await
        .build();

    Dispatcher::builder(bot, get_handler())
        .dependencies(dptree::deps![bot_state, transport])
        .default_handler(|upd| async move {
            log::debug!("Ignoring update: {:?}", upd);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
