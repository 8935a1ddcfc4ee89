//! Fixtures shared across integration tests.

#![allow(dead_code)]

use detective_quest::game::Scenario;
use detective_quest::{Direction, Game, GameConfig, RoomTreeBuilder};

/// Hall{"A"} with Estar{"B"} to its left. Both clues point at X.
pub fn two_rooms() -> Scenario {
    let mut map = RoomTreeBuilder::new();
    let hall = map.add_room("Hall", Some("A"));
    let estar = map.add_room("Estar", Some("B"));
    map.link(hall, Direction::Left, estar).unwrap();
    let rooms = map.build(hall).unwrap();

    Scenario::new("two-rooms", "Two rooms", "A hall and a sitting room.", rooms)
        .with_suspect("A", "X")
        .with_suspect("B", "X")
}

pub fn game_for(scenario: Scenario) -> Game {
    Game::new(scenario, &GameConfig::default()).unwrap()
}

pub fn mansion_game() -> Game {
    game_for(Scenario::mansion().unwrap())
}

/// Every ordering of `items`, built by repeated insertion.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut all = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, item.clone());
            all.push(tail);
        }
    }
    all
}
