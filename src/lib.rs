//! Detective Quest
//!
//! A turn-based detective game played over a fixed mansion map. Walk the
//! rooms, pick up the clue each room hides, backtrack along the way you came,
//! and finally name the culprit. The accusation holds only when enough of the
//! collected clues point at the same suspect.
//!
//! # Architecture
//!
//! - `data` - Room tree, ordered clue store, suspect index
//! - `game` - Exploration state machine, accusation judge, session, scenario content
//! - `tui` - Terminal user interface with ratatui
//! - `console` - Line-oriented front end over any reader/writer
//! - `config` - Runtime configuration

pub mod config;
pub mod console;
pub mod data;
pub mod game;
pub mod tui;

pub use config::GameConfig;
pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown room: {0}")]
    UnknownRoom(RoomId),

    #[error("Room '{parent}' already has a {direction} exit")]
    ExitTaken { parent: String, direction: Direction },

    #[error("Room '{0}' is linked from more than one parent")]
    MultipleParents(String),

    #[error("Linking room '{0}' would close a loop")]
    Cycle(String),

    #[error("Room '{0}' cannot be reached from the entrance")]
    Unreachable(String),

    #[error("Duplicate room name: {0}")]
    DuplicateRoom(String),

    #[error("The mansion has {0} rooms, more than a room id can address")]
    TooManyRooms(usize),

    #[error("The mansion has no rooms")]
    EmptyMansion,

    #[error("Mansion is {depth} rooms deep, path limit is {limit}")]
    TooDeep { depth: usize, limit: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid game state: {0}")]
    InvalidState(String),
}
