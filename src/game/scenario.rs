//! Scenario definitions
//!
//! A scenario is the static input of a session: the mansion layout with the
//! clue hidden in each room, and the suspect each clue incriminates.

use crate::data::{Direction, RoomTree, RoomTreeBuilder};
use crate::GameError;

/// A complete case, ready to be played
#[derive(Debug, Clone)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub synopsis: String,

    /// The mansion, entrance first
    pub rooms: RoomTree,

    /// Clue text and the suspect it points at
    pub suspects: Vec<(String, String)>,
}

impl Scenario {
    pub fn new(id: &str, title: &str, synopsis: &str, rooms: RoomTree) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            synopsis: synopsis.to_string(),
            rooms,
            suspects: Vec::new(),
        }
    }

    pub fn with_suspect(mut self, clue: &str, suspect: &str) -> Self {
        self.suspects.push((clue.to_string(), suspect.to_string()));
        self
    }

    /// The Detective Quest mansion
    pub fn mansion() -> Result<Self, GameError> {
        let mut map = RoomTreeBuilder::new();
        let hall = map.add_room("Hall de entrada", Some("Pegadas misteriosas no tapete"));
        let sala_estar = map.add_room("Sala de estar", Some("Um relógio parado às 3h15"));
        let cozinha = map.add_room("Cozinha", Some("Uma xícara de café ainda quente"));
        let quarto = map.add_room("Quarto principal", Some("Uma carta rasgada sobre a cama"));
        let banheiro = map.add_room("Banheiro", None);
        let jardim = map.add_room("Jardim", Some("Marcas de pneu no chão molhado"));
        let biblioteca = map.add_room("Biblioteca", Some("Um livro antigo com anotações suspeitas"));
        let escritorio = map.add_room("Escritório", Some("Um cofre trancado"));

        map.link(hall, Direction::Left, sala_estar)?
            .link(hall, Direction::Right, cozinha)?
            .link(sala_estar, Direction::Left, quarto)?
            .link(sala_estar, Direction::Right, banheiro)?
            .link(cozinha, Direction::Left, jardim)?
            .link(cozinha, Direction::Right, biblioteca)?
            .link(jardim, Direction::Left, escritorio)?;

        let scenario = Self::new(
            "mansao",
            "Detective Quest: O Mistério da Mansão",
            "Someone broke into the mansion last night. Explore the rooms, collect the clues \
             and name the culprit. You need at least two clues against the same person.",
            map.build(hall)?,
        )
        .with_suspect("Pegadas misteriosas no tapete", "Jardineiro")
        .with_suspect("Um relógio parado às 3h15", "Mordomo")
        .with_suspect("Uma xícara de café ainda quente", "Cozinheira")
        .with_suspect("Uma carta rasgada sobre a cama", "Mordomo")
        .with_suspect("Marcas de pneu no chão molhado", "Jardineiro")
        .with_suspect("Um livro antigo com anotações suspeitas", "Mordomo")
        .with_suspect("Um cofre trancado", "Cozinheira");

        Ok(scenario)
    }
}
