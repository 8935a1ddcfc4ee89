mod common;

use common::{game_for, mansion_game, two_rooms};
use detective_quest::game::{Command, GamePhase, Rejection, Verdict};
use detective_quest::GameError;

#[test]
fn two_room_session_convicts_x() {
    let mut game = game_for(two_rooms());
    game.command(Command::Left);
    game.command(Command::Back);
    let outcome = game.command(Command::Quit);
    assert!(outcome.finished);

    let clues: Vec<&str> = game.clues().iter().collect();
    assert_eq!(clues, vec!["A", "B"]);
    assert_eq!(game.accuse("X").unwrap(), Verdict::Guilty { corroboration: 2 });
}

#[test]
fn two_room_session_acquits_y() {
    let mut game = game_for(two_rooms());
    game.command(Command::Left);
    game.command(Command::Back);
    game.command(Command::Quit);
    assert_eq!(game.accuse("Y").unwrap(), Verdict::NotProven { corroboration: 0 });
}

#[test]
fn revisiting_a_room_yields_nothing_new() {
    let mut game = game_for(two_rooms());
    let first = game.command(Command::Left);
    assert_eq!(first.collected.as_deref(), Some("B"));
    game.command(Command::Back);
    let again = game.command(Command::Left);
    assert_eq!(again.collected, None);
    assert_eq!(game.clues().len(), 2);
}

#[test]
fn single_clue_is_not_enough() {
    let mut game = game_for(two_rooms());
    game.command(Command::Quit);
    assert_eq!(game.accuse("X").unwrap(), Verdict::NotProven { corroboration: 1 });
}

#[test]
fn mansion_walkthrough_finds_every_clue() {
    let mut game = mansion_game();
    for command in [
        Command::Left,  // Sala de estar
        Command::Left,  // Quarto principal
        Command::Back,
        Command::Right, // Banheiro
        Command::Back,
        Command::Back,
        Command::Right, // Cozinha
        Command::Left,  // Jardim
        Command::Left,  // Escritório
        Command::Back,
        Command::Back,
        Command::Right, // Biblioteca
    ] {
        assert!(!game.command(command).is_rejected());
    }
    assert_eq!(game.current_room(), "Biblioteca");
    assert_eq!(game.depth(), 2);
    assert_eq!(game.clues().len(), 7);

    let tally = game.tally();
    assert_eq!(tally.get("Mordomo"), Some(&3));
    assert_eq!(tally.get("Jardineiro"), Some(&2));
    assert_eq!(tally.get("Cozinheira"), Some(&2));

    game.command(Command::Quit);
    assert_eq!(game.accuse("Mordomo").unwrap(), Verdict::Guilty { corroboration: 3 });
    assert!(matches!(game.phase, GamePhase::Closed { .. }));
}

#[test]
fn blocked_moves_leave_the_room_unchanged() {
    let mut game = mansion_game();
    game.command(Command::Left);
    game.command(Command::Right); // Banheiro, a dead end
    let outcome = game.command(Command::Left);
    assert_eq!(outcome.rejection, Some(Rejection::NoSuchPath(detective_quest::Direction::Left)));
    assert_eq!(game.current_room(), "Banheiro");
    assert_eq!(game.depth(), 2);
}

#[test]
fn commands_after_quitting_are_rejected() {
    let mut game = mansion_game();
    game.command(Command::Quit);
    let outcome = game.command(Command::Left);
    assert_eq!(outcome.rejection, Some(Rejection::Finished));
    assert_eq!(game.current_room(), "Hall de entrada");
}

#[test]
fn accusing_while_exploring_fails() {
    let mut game = mansion_game();
    let err = game.accuse("Mordomo").unwrap_err();
    assert!(matches!(err.downcast_ref::<GameError>(), Some(GameError::InvalidState(_))));
}

#[test]
fn case_report_reads_back() {
    let mut game = game_for(two_rooms());
    game.command(Command::Left);
    game.command(Command::Quit);
    game.accuse("X").unwrap();

    let json = game.report().to_json().unwrap();
    let report: detective_quest::game::CaseReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report.session, game.id);
    assert_eq!(report.clues, vec!["A", "B"]);
    assert_eq!(report.verdict, Some(Verdict::Guilty { corroboration: 2 }));
    assert_eq!(report.stats.moves, 1);
}
