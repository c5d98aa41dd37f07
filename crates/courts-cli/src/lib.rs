//! # courts-cli
//!
//! Outer surfaces for `courts-engine`: process settings, the GotCourts HTTP
//! snapshot source and the Telegram transport used by the `gotcourts` binary.
//!
//! ## Modules
//!
//! - [`settings`] - command-line/environment settings and the chat config file
//! - [`gotcourts`] - `SnapshotSource` over the public reservations endpoint
//! - [`telegram`] - Bot API delivery, command parsing and the polling service

pub mod gotcourts;
pub mod settings;
pub mod telegram;

pub use gotcourts::GotCourtsClient;
pub use settings::{ChatConfig, GlobalArgs, Settings};
pub use telegram::{BotCommand, TelegramBot};
