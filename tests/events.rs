use jumping_ghost::events::{GameCommand, GameEvent};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

#[test]
fn test_game_command_to_game_event_conversion_all_variants() {
    for command in GameCommand::iter() {
        let event: GameEvent = command.into();
        assert_eq!(event, GameEvent::Command(command));
    }
}

#[test]
fn test_game_command_names() {
    let names: Vec<&'static str> = GameCommand::iter().map(Into::into).collect();
    assert_eq!(names, vec!["Exit", "Jump", "TogglePause"]);
}
