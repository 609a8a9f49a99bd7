//! # matchbot-core
//!
//! Core types and traits for the interest-matching bot: [`Bot`], [`Handler`], message and user
//! types, command classification, and tracing initialization. Transport-agnostic; used by
//! matchbot-telegram, matchbot-handlers, and handler-chain.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use command::Command;
pub use error::{MatchbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
