//! Data structures for the game world
//!
//! Defines the mansion's rooms, the notebook of collected clues and the
//! table tying every clue to a suspect.

pub mod clues;
pub mod rooms;
pub mod suspects;

pub use clues::*;
pub use rooms::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tone of a message shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tone {
    Info,
    Discovery,
    Warning,
    Verdict,
}

impl Tone {
    pub fn symbol(&self) -> &'static str {
        match self {
            Tone::Info => "·",
            Tone::Discovery => "✦",
            Tone::Warning => "!",
            Tone::Verdict => "⚖",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Info => write!(f, "INFO"),
            Tone::Discovery => write!(f, "CLUE"),
            Tone::Warning => write!(f, "WARN"),
            Tone::Verdict => write!(f, "VERDICT"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
