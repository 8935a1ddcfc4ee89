//! Walking the mansion
//!
//! A two-state machine: the detective is either standing in a room or has
//! called it a day. Arriving in a room pockets its clue. A stack of the rooms
//! passed through makes every forward step reversible.

use crate::data::{ClueStore, Direction, RoomId, RoomTree};
use crate::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One player input, already decoded from its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Left,
    Right,
    Back,
    Quit,
    Invalid(char),
}

impl Command {
    /// `e`squerda, `d`ireita, `v`oltar, `s`air; either case
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'e' => Command::Left,
            'd' => Command::Right,
            'v' => Command::Back,
            's' => Command::Quit,
            _ => Command::Invalid(key),
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Why a command left the state untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    NoSuchPath(Direction),
    AlreadyAtStart,
    Invalid(char),
    Finished,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NoSuchPath(direction) => write!(f, "There is no path to the {direction}."),
            Rejection::AlreadyAtStart => write!(f, "You are already at the entrance."),
            Rejection::Invalid(key) => write!(f, "Invalid option '{key}'. Try again."),
            Rejection::Finished => write!(f, "The exploration is over."),
        }
    }
}

/// Where the detective is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    AtRoom(RoomId),
    /// Exploration ended; the room is where the detective stopped
    Finished(RoomId),
}

/// What a single command did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub room: RoomId,
    pub room_name: String,
    pub collected: Option<String>,
    pub rejection: Option<Rejection>,
    pub finished: bool,
}

impl TurnOutcome {
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

/// Drives the detective through a `RoomTree`
#[derive(Debug, Clone)]
pub struct Exploration {
    tree: RoomTree,
    clues: ClueStore,
    path: Vec<RoomId>,
    state: State,
}

impl Exploration {
    /// Enter the mansion at its root and report what was found there.
    ///
    /// Fails if the mansion is deeper than `max_depth` rooms.
    pub fn begin(tree: RoomTree, max_depth: usize) -> Result<(Self, TurnOutcome), GameError> {
        let depth = tree.height();
        if depth > max_depth {
            return Err(GameError::TooDeep { depth, limit: max_depth });
        }

        let root = tree.root();
        let mut exploration = Self {
            tree,
            clues: ClueStore::new(),
            path: Vec::with_capacity(depth),
            state: State::AtRoom(root),
        };
        let outcome = exploration.arrive(root);
        Ok((exploration, outcome))
    }

    /// Apply one command
    pub fn step(&mut self, command: Command) -> TurnOutcome {
        let State::AtRoom(current) = self.state else {
            return self.reject(Rejection::Finished);
        };

        match command {
            Command::Left => self.advance(current, Direction::Left),
            Command::Right => self.advance(current, Direction::Right),
            Command::Back => match self.path.pop() {
                Some(previous) => self.arrive(previous),
                None => self.reject(Rejection::AlreadyAtStart),
            },
            Command::Quit => {
                self.state = State::Finished(current);
                info!(room = self.tree.name(current), clues = self.clues.len(), "exploration finished");
                TurnOutcome {
                    room: current,
                    room_name: self.tree.name(current).to_string(),
                    collected: None,
                    rejection: None,
                    finished: true,
                }
            }
            Command::Invalid(key) => self.reject(Rejection::Invalid(key)),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn current(&self) -> RoomId {
        match self.state {
            State::AtRoom(room) | State::Finished(room) => room,
        }
    }

    pub fn current_name(&self) -> &str {
        self.tree.name(self.current())
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished(_))
    }

    /// How many steps back to the entrance
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &[RoomId] {
        &self.path
    }

    pub fn tree(&self) -> &RoomTree {
        &self.tree
    }

    pub fn clues(&self) -> &ClueStore {
        &self.clues
    }

    fn advance(&mut self, current: RoomId, direction: Direction) -> TurnOutcome {
        match self.tree.child(current, direction) {
            Some(next) => {
                self.path.push(current);
                debug_assert!(self.path.len() < self.tree.height());
                self.arrive(next)
            }
            None => self.reject(Rejection::NoSuchPath(direction)),
        }
    }

    fn arrive(&mut self, room: RoomId) -> TurnOutcome {
        self.state = State::AtRoom(room);
        let collected = self.tree.take_clue(room);
        if let Some(clue) = &collected {
            self.clues.insert(clue);
            info!(room = self.tree.name(room), clue = clue.as_str(), "clue collected");
        }
        debug!(room = self.tree.name(room), depth = self.path.len(), "arrived");

        TurnOutcome {
            room,
            room_name: self.tree.name(room).to_string(),
            collected,
            rejection: None,
            finished: false,
        }
    }

    fn reject(&self, rejection: Rejection) -> TurnOutcome {
        debug!(?rejection, "command rejected");
        let room = self.current();
        TurnOutcome {
            room,
            room_name: self.tree.name(room).to_string(),
            collected: None,
            rejection: Some(rejection),
            finished: self.is_finished(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RoomTreeBuilder;

    /// Hall{A} -> left Estar{B} -> left Quarto{C}; Hall -> right Cozinha (no clue)
    fn mansion() -> RoomTree {
        let mut builder = RoomTreeBuilder::new();
        let hall = builder.add_room("Hall", Some("A"));
        let estar = builder.add_room("Estar", Some("B"));
        let quarto = builder.add_room("Quarto", Some("C"));
        let cozinha = builder.add_room("Cozinha", None);
        builder.link(hall, Direction::Left, estar).unwrap();
        builder.link(estar, Direction::Left, quarto).unwrap();
        builder.link(hall, Direction::Right, cozinha).unwrap();
        builder.build(hall).unwrap()
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_key('e'), Command::Left);
        assert_eq!(Command::from_key('D'), Command::Right);
        assert_eq!(Command::from_key('v'), Command::Back);
        assert_eq!(Command::from_key('S'), Command::Quit);
        assert_eq!(Command::from_key('x'), Command::Invalid('x'));
    }

    #[test]
    fn entrance_clue_is_collected_on_start() {
        let (exploration, opening) = Exploration::begin(mansion(), 8).unwrap();
        assert_eq!(opening.room_name, "Hall");
        assert_eq!(opening.collected.as_deref(), Some("A"));
        assert!(exploration.clues().contains("A"));
        assert_eq!(exploration.depth(), 0);
    }

    #[test]
    fn back_undoes_a_forward_step() {
        let (mut exploration, _) = Exploration::begin(mansion(), 8).unwrap();
        let start = exploration.current();

        let outcome = exploration.step(Command::Left);
        assert_eq!(outcome.room_name, "Estar");
        assert_eq!(outcome.collected.as_deref(), Some("B"));
        assert_eq!(exploration.depth(), 1);

        let outcome = exploration.step(Command::Back);
        assert_eq!(outcome.room, start);
        assert_eq!(outcome.collected, None);
        assert_eq!(exploration.depth(), 0);
    }

    #[test]
    fn missing_exit_is_rejected_without_moving() {
        let (mut exploration, _) = Exploration::begin(mansion(), 8).unwrap();
        exploration.step(Command::Right);
        let outcome = exploration.step(Command::Left);
        assert_eq!(outcome.rejection, Some(Rejection::NoSuchPath(Direction::Left)));
        assert_eq!(outcome.room_name, "Cozinha");
        assert_eq!(exploration.depth(), 1);
    }

    #[test]
    fn back_at_entrance_is_rejected() {
        let (mut exploration, _) = Exploration::begin(mansion(), 8).unwrap();
        let outcome = exploration.step(Command::Back);
        assert_eq!(outcome.rejection, Some(Rejection::AlreadyAtStart));
        assert_eq!(outcome.room_name, "Hall");
    }

    #[test]
    fn invalid_key_is_rejected() {
        let (mut exploration, _) = Exploration::begin(mansion(), 8).unwrap();
        let outcome = exploration.step(Command::from_key('z'));
        assert_eq!(outcome.rejection, Some(Rejection::Invalid('z')));
        assert!(!outcome.finished);
    }

    #[test]
    fn dead_end_does_not_end_the_walk() {
        let (mut exploration, _) = Exploration::begin(mansion(), 8).unwrap();
        exploration.step(Command::Left);
        let outcome = exploration.step(Command::Left);
        assert_eq!(outcome.room_name, "Quarto");
        assert!(exploration.tree()[outcome.room].is_dead_end());
        assert!(!exploration.is_finished());
        assert_eq!(exploration.path().len(), 2);
    }

    #[test]
    fn quit_finishes_and_blocks_further_moves() {
        let (mut exploration, _) = Exploration::begin(mansion(), 8).unwrap();
        exploration.step(Command::Left);
        let outcome = exploration.step(Command::Quit);
        assert!(outcome.finished);
        assert_eq!(exploration.state(), State::Finished(outcome.room));

        let after = exploration.step(Command::Back);
        assert_eq!(after.rejection, Some(Rejection::Finished));
        assert_eq!(exploration.current_name(), "Estar");
    }

    #[test]
    fn revisiting_collects_nothing_twice() {
        let (mut exploration, _) = Exploration::begin(mansion(), 8).unwrap();
        exploration.step(Command::Left);
        exploration.step(Command::Back);
        let again = exploration.step(Command::Left);
        assert_eq!(again.collected, None);
        assert_eq!(exploration.clues().len(), 2);
    }

    #[test]
    fn too_deep_mansion_is_a_setup_error() {
        let err = Exploration::begin(mansion(), 2).unwrap_err();
        assert_eq!(err, GameError::TooDeep { depth: 3, limit: 2 });
    }
}
