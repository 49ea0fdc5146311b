use coin::CoinFace;
use dice::DiceFace;
use rand::Rng;

use crate::error::BotError;

pub mod coin;
pub mod dice;

const HELP_TEXT: &str = "/help  print this help message\n/coin  flip a coin\n/dice  throw the dice\n";

const WELCOME_TEXT: &str = "Welcome to the EasyDecisionMakingBot page\nPlease take a look here:\n";

pub const INVALID_COMMAND_TEXT: &str = "Invalid command provided";

/// Instructions on how to use the bot's commands.
pub fn help_text() -> &'static str {
    HELP_TEXT
}

pub fn start_text() -> String {
    format!("{}{}", WELCOME_TEXT, help_text())
}

/// Maps a raw draw onto a coin face. Only 0 and 1 are valid.
pub fn coin_face(value: u32) -> Result<CoinFace, BotError> {
    match value {
        0 => Ok(CoinFace::Head),
        1 => Ok(CoinFace::Tail),
        other => Err(BotError::InvalidCoinValue(other)),
    }
}

pub fn flip_coin<R: Rng>(rng: &mut R) -> Result<CoinFace, BotError> {
    coin_face(rng.gen_range(0..2))
}

pub fn roll_dice<R: Rng>(rng: &mut R) -> DiceFace {
    DiceFace(rng.gen_range(DiceFace::MIN..=DiceFace::MAX))
}
