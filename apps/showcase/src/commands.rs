//! Line-oriented commands typed into the running showcase.

use std::str::FromStr;

use showcase_core::player::MAX_VOLUME;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseCommand {
    Next,
    Prev,
    /// Zero-based page; typed 1-based.
    Page(usize),
    Play,
    Mute,
    Volume(u8),
    Click,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for the list")]
    Unknown(String),
    #[error("'{command}' expects a number, got '{value}'")]
    NotANumber { command: &'static str, value: String },
    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),
    #[error("pages are numbered from 1")]
    PageZero,
}

pub const HELP: &str =
    "commands: next, prev, page <n>, play, mute, volume <0-100>, click, help, quit";

impl FromStr for ShowcaseCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let arg = words.next();

        match head.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Prev),
            "page" => {
                let page: usize = number("page", arg)?;
                page.checked_sub(1)
                    .map(Self::Page)
                    .ok_or(CommandError::PageZero)
            }
            "play" | "pause" => Ok(Self::Play),
            "mute" | "unmute" => Ok(Self::Mute),
            "volume" | "vol" => {
                let volume: i64 = number("volume", arg)?;
                let clamped = volume.clamp(0, i64::from(MAX_VOLUME));
                Ok(Self::Volume(u8::try_from(clamped).unwrap_or(MAX_VOLUME)))
            }
            "click" => Ok(Self::Click),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

fn number<N: FromStr>(command: &'static str, arg: Option<&str>) -> Result<N, CommandError> {
    let value = arg.ok_or(CommandError::MissingArgument(command))?;
    value.parse().map_err(|_| CommandError::NotANumber {
        command,
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
