//! Core game types: cards, players, RNG, configuration, actions, state, views.
//!
//! These are the building blocks the engine and strategies share. Nothing
//! here applies game rules; see `rules` for that.

pub mod card;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;
pub mod view;

pub use card::{full_deck, Card, Suit, DECK_SIZE, MAX_RANK, MIN_RANK};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, HandDistribution};
pub use error::{CheatError, ConfigError, InvalidAction, Result};
pub use action::{Action, ActionKind, Bluff, RawAction};
pub use state::{GameState, Hand, Pile};
pub use view::PlayerView;
