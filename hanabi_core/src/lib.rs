//! Rule engine for a two-player cooperative card game driven by text commands.

pub mod card;
pub mod command;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod player;
pub mod session;
pub mod table;
pub mod utils;

pub use session::{run_session, OutputFormat, Session};
