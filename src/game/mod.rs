//! Core game logic and state management

pub mod exploration;
pub mod investigation;
pub mod scenario;

pub use exploration::{Command, Exploration, Rejection, State, TurnOutcome};
pub use investigation::{AccusationJudge, Verdict, CORROBORATION_THRESHOLD};
pub use scenario::Scenario;

use crate::config::GameConfig;
use crate::data::*;
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Session identifier, shows up in logs and the case report
    pub id: Id,

    pub title: String,
    pub synopsis: String,

    /// Current game phase
    pub phase: GamePhase,

    /// Game statistics
    pub stats: GameStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,

    exploration: Exploration,
    suspects: SuspectIndex,
    judge: AccusationJudge,
    last_outcome: TurnOutcome,
}

/// Current phase of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    Accusing,
    Closed { accused: String, verdict: Verdict },
}

/// Game statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub turns_taken: u32,
    pub moves: u32,
    pub backtracks: u32,
    pub rejected: u32,
    pub clues_collected: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub tone: Tone,
    pub source: String,
    pub message: String,
}

impl GameMessage {
    pub fn info(source: &str, message: &str) -> Self {
        Self::with_tone(Tone::Info, source, message)
    }

    pub fn with_tone(tone: Tone, source: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            tone,
            source: source.to_string(),
            message: message.to_string(),
        }
    }
}

/// Summary printed when a session ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub session: Id,
    pub title: String,
    pub clues: Vec<String>,
    pub accused: Option<String>,
    pub verdict: Option<Verdict>,
    pub stats: GameStats,
    pub generated_at: DateTime<Utc>,
}

impl CaseReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Game {
    /// Start a session on `scenario`: build the suspect table and step into
    /// the entrance.
    pub fn new(scenario: Scenario, config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let mut suspects = SuspectIndex::with_buckets(config.suspect_buckets)?;
        for (clue, suspect) in &scenario.suspects {
            suspects.insert(clue, suspect);
        }

        let (exploration, opening) = Exploration::begin(scenario.rooms, config.max_depth)?;

        let id = Id::new();
        info!(
            session = %id,
            scenario = scenario.id.as_str(),
            rooms = exploration.tree().len(),
            suspects = suspects.len(),
            "session started"
        );

        let mut game = Self {
            id,
            title: scenario.title,
            synopsis: scenario.synopsis,
            phase: GamePhase::Exploring,
            stats: GameStats::default(),
            message_log: Vec::new(),
            exploration,
            suspects,
            judge: AccusationJudge::new(),
            last_outcome: opening.clone(),
        };

        game.add_message(GameMessage::info(
            "System",
            "You step into the mansion. Somewhere inside, the truth is waiting...",
        ));
        game.record(&opening);
        Ok(game)
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    /// Execute one player command
    pub fn command(&mut self, command: Command) -> TurnOutcome {
        let outcome = self.exploration.step(command);
        self.stats.turns_taken += 1;

        match (&outcome.rejection, command) {
            (Some(_), _) => self.stats.rejected += 1,
            (None, Command::Left | Command::Right) => self.stats.moves += 1,
            (None, Command::Back) => self.stats.backtracks += 1,
            _ => {}
        }

        self.record(&outcome);
        if outcome.finished && self.phase == GamePhase::Exploring {
            self.phase = GamePhase::Accusing;
            self.add_message(GameMessage::info("System", "Exploration finished."));
        }

        self.last_outcome = outcome.clone();
        outcome
    }

    /// Name the culprit. Only allowed once, after the exploration ended.
    pub fn accuse(&mut self, accused: &str) -> Result<Verdict> {
        match self.phase {
            GamePhase::Accusing => {}
            GamePhase::Exploring => {
                return Err(GameError::InvalidState("exploration still in progress".to_string()).into())
            }
            GamePhase::Closed { .. } => {
                return Err(GameError::InvalidState("an accusation was already made".to_string()).into())
            }
        }

        let verdict = self
            .judge
            .verdict(accused, self.exploration.clues(), &self.suspects);
        info!(session = %self.id, accused, ?verdict, "verdict issued");

        self.add_message(GameMessage::with_tone(
            Tone::Verdict,
            "Judge",
            &format!("You accuse {accused}. {verdict}"),
        ));
        self.phase = GamePhase::Closed {
            accused: accused.to_string(),
            verdict,
        };
        Ok(verdict)
    }

    pub fn last_outcome(&self) -> &TurnOutcome {
        &self.last_outcome
    }

    pub fn current_room(&self) -> &str {
        self.exploration.current_name()
    }

    /// Exits from the current room, with the room each leads to
    pub fn paths(&self) -> Vec<(Direction, &str)> {
        self.exploration.tree().paths(self.exploration.current())
    }

    pub fn depth(&self) -> usize {
        self.exploration.depth()
    }

    pub fn clues(&self) -> &ClueStore {
        self.exploration.clues()
    }

    pub fn suspects(&self) -> Vec<&str> {
        self.suspects.suspects()
    }

    /// Collected clues per suspect
    pub fn tally(&self) -> BTreeMap<&str, usize> {
        investigation::tally(self.exploration.clues(), &self.suspects)
    }

    pub fn threshold(&self) -> usize {
        self.judge.threshold()
    }

    pub fn is_exploring(&self) -> bool {
        self.phase == GamePhase::Exploring
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match &self.phase {
            GamePhase::Closed { verdict, .. } => Some(*verdict),
            _ => None,
        }
    }

    /// Check current game status
    pub fn check_status(&self) -> String {
        format!(
            "Turn: {} | Room: {} | Depth: {} | Clues: {}",
            self.stats.turns_taken,
            self.current_room(),
            self.depth(),
            self.clues().len()
        )
    }

    pub fn report(&self) -> CaseReport {
        let (accused, verdict) = match &self.phase {
            GamePhase::Closed { accused, verdict } => (Some(accused.clone()), Some(*verdict)),
            _ => (None, None),
        };
        CaseReport {
            session: self.id,
            title: self.title.clone(),
            clues: self.clues().iter().map(str::to_string).collect(),
            accused,
            verdict,
            stats: self.stats.clone(),
            generated_at: Utc::now(),
        }
    }

    fn record(&mut self, outcome: &TurnOutcome) {
        if let Some(rejection) = outcome.rejection {
            self.add_message(GameMessage::with_tone(Tone::Warning, "Mansion", &rejection.to_string()));
            return;
        }
        if outcome.finished {
            return;
        }

        self.add_message(GameMessage::info(
            "Mansion",
            &format!("You are in: {}", outcome.room_name),
        ));
        match &outcome.collected {
            Some(clue) => {
                self.stats.clues_collected += 1;
                self.add_message(GameMessage::with_tone(
                    Tone::Discovery,
                    "Clue",
                    &format!("You found a clue: \"{clue}\""),
                ));
            }
            None => self.add_message(GameMessage::info("Mansion", "No clue here.")),
        }
    }
}
