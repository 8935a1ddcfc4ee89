//! The mansion map
//!
//! Rooms are kept in a flat arena and refer to their children by index. The
//! tree owns every room; everything outside it only ever holds a `RoomId`.

use crate::GameError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Index;

/// Index of a room inside its `RoomTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(u32);

impl RoomId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for RoomId {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index)
            .map(RoomId)
            .map_err(|_| GameError::TooManyRooms(index.saturating_add(1)))
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which exit of a room to take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Key the player presses to take this exit
    pub fn key(&self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// One location in the mansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    fn new(name: &str, clue: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            // The empty string has always meant "nothing here"
            clue: clue.filter(|c| !c.is_empty()).map(str::to_string),
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue still lying in this room, if any
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn has_clue(&self) -> bool {
        self.clue.is_some()
    }

    pub fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<RoomId> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// Assembles a `RoomTree` room by room.
///
/// Rooms are added first and linked afterwards. `build` checks that the links
/// form a single tree hanging off the chosen entrance.
#[derive(Debug, Clone, Default)]
pub struct RoomTreeBuilder {
    rooms: Vec<Room>,
    parents: Vec<Option<RoomId>>,
}

impl RoomTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. An empty clue is the same as no clue.
    ///
    /// Room ids are 32 bits wide. Rooms past `u32::MAX` all share the last id
    /// and `build` refuses the map.
    pub fn add_room(&mut self, name: &str, clue: Option<&str>) -> RoomId {
        let id = RoomId::try_from(self.rooms.len()).unwrap_or(RoomId(u32::MAX));
        self.rooms.push(Room::new(name, clue));
        self.parents.push(None);
        id
    }

    /// Make `child` the `direction` exit of `parent`
    pub fn link(
        &mut self,
        parent: RoomId,
        direction: Direction,
        child: RoomId,
    ) -> Result<&mut Self, GameError> {
        self.check(parent)?;
        self.check(child)?;

        if self.rooms[parent.index()].child(direction).is_some() {
            return Err(GameError::ExitTaken {
                parent: self.rooms[parent.index()].name.clone(),
                direction,
            });
        }
        if self.parents[child.index()].is_some() {
            return Err(GameError::MultipleParents(self.rooms[child.index()].name.clone()));
        }

        // Walking up from the parent must never meet the child
        let mut cursor = Some(parent);
        while let Some(at) = cursor {
            if at == child {
                return Err(GameError::Cycle(self.rooms[child.index()].name.clone()));
            }
            cursor = self.parents[at.index()];
        }

        *self.rooms[parent.index()].slot_mut(direction) = Some(child);
        self.parents[child.index()] = Some(parent);
        Ok(self)
    }

    /// Finish the map with `root` as the entrance
    pub fn build(self, root: RoomId) -> Result<RoomTree, GameError> {
        if self.rooms.is_empty() {
            return Err(GameError::EmptyMansion);
        }
        RoomId::try_from(self.rooms.len() - 1)?;
        self.check(root)?;

        let mut names = HashSet::new();
        for room in &self.rooms {
            if !names.insert(room.name.as_str()) {
                return Err(GameError::DuplicateRoom(room.name.clone()));
            }
        }

        let mut reached = vec![false; self.rooms.len()];
        let mut height = 0;
        let mut stack = vec![(root, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            reached[id.index()] = true;
            height = height.max(depth);
            let room = &self.rooms[id.index()];
            for direction in Direction::ALL {
                if let Some(child) = room.child(direction) {
                    stack.push((child, depth + 1));
                }
            }
        }

        if let Some(lost) = reached.iter().position(|r| !r) {
            return Err(GameError::Unreachable(self.rooms[lost].name.clone()));
        }

        Ok(RoomTree {
            rooms: self.rooms,
            root,
            height,
        })
    }

    fn check(&self, id: RoomId) -> Result<(), GameError> {
        if id.index() < self.rooms.len() {
            Ok(())
        } else {
            Err(GameError::UnknownRoom(id))
        }
    }
}

/// The immutable layout of the mansion.
///
/// The only thing that ever changes after `build` is a room's clue, which can
/// be taken exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTree {
    rooms: Vec<Room>,
    root: RoomId,
    height: usize,
}

impl RoomTree {
    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn name(&self, id: RoomId) -> &str {
        self[id].name()
    }

    pub fn child(&self, id: RoomId, direction: Direction) -> Option<RoomId> {
        self.get(id).and_then(|room| room.child(direction))
    }

    pub fn has_clue(&self, id: RoomId) -> bool {
        self.get(id).is_some_and(Room::has_clue)
    }

    /// Remove and return the room's clue. Later calls return `None`.
    pub fn take_clue(&mut self, id: RoomId) -> Option<String> {
        self.rooms.get_mut(id.index()).and_then(|room| room.clue.take())
    }

    /// Exits that lead somewhere, with the name of the room behind each
    pub fn paths(&self, id: RoomId) -> Vec<(Direction, &str)> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                self.child(id, direction)
                    .map(|child| (direction, self.name(child)))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of rooms on the longest walk from the entrance to a dead end
    pub fn height(&self) -> usize {
        self.height
    }
}

impl Index<RoomId> for RoomTree {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Self::Output {
        &self.rooms[id.index()]
    }
}
