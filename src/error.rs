use std::error::Error;

use teloxide::RequestError;

#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum BotError {
    /// A coin draw produced something other than 0 or 1.
    #[display(fmt = "Invalid coin value: {}", _0)]
    #[from(ignore)]
    InvalidCoinValue(u32),

    #[display(fmt = "Failed to send reply: {}", _0)]
    Request(RequestError),
}

impl Error for BotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BotError::InvalidCoinValue(_) => None,
            BotError::Request(err) => Some(err),
        }
    }
}

pub type HandlerResult = Result<(), BotError>;
