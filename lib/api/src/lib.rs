//! # personax API
//!
//! REST surface for the personax service: application state, game-round
//! sessions and the actix-web route table.

pub mod rest;
pub mod session;
pub mod state;

pub use rest::RestApi;
pub use session::{rank_hint, GameRound, GuessOutcome, GuessRecord, RoundState, SessionStore};
pub use state::AppState;
