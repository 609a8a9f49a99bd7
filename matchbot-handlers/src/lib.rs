//! # matchbot-handlers
//!
//! Command handlers (`/start`, `/setinterest`, `/match`, `/events`) and the free-text chat relay.
//! Each handler claims exactly its command and otherwise returns `Continue`; the relay is the
//! chain's catch-all, so chain order realizes the routing. Replies go through the core `Bot`
//! trait, so tests substitute a capturing bot.

mod chat_relay_handler;
mod event_catalog;
mod events_handler;
mod match_handler;
mod set_interest_handler;
mod start_handler;

pub use chat_relay_handler::ChatRelayHandler;
pub use event_catalog::recommended_events;
pub use events_handler::EventsHandler;
pub use match_handler::MatchHandler;
pub use set_interest_handler::SetInterestHandler;
pub use start_handler::StartHandler;

/// Guidance reply shared by `/match` and `/events` when no interest is stored yet.
pub(crate) const MSG_SET_INTEREST_FIRST: &str =
    "Please set your interest first using the /setinterest command.";
