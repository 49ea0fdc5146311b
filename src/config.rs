use std::{ffi::OsString, time::Duration};

use clap::Parser;

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub const POLL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "easy_decision_bot", about = "A Telegram bot that flips coins and throws dice")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Telegram API Token
    #[arg(long, default_value = "")]
    pub token: String,

    /// Enable verbosity
    #[arg(long)]
    pub verbose: bool,

    /// Print software version
    #[arg(long)]
    pub version: bool,
}

impl Cli {
    /// Parses process arguments, accepting `-token` as well as `--token`.
    pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_flags(args))
    }
}

/// Rewrites single-dash long flags (`-token`, `-token=value`) into their double-dash form.
/// Everything after a bare `--` is left alone.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }

            let name = s.split('=').next().unwrap_or(s);
            if name.len() > 2 && name.starts_with('-') && !name.starts_with("--") {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub verbose: bool,
    pub poll_timeout: Duration,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            token: cli.token,
            verbose: cli.verbose,
            poll_timeout: POLL_TIMEOUT,
        }
    }
}

impl Config {
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}
