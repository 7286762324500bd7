//! Keyboard adapter
//!
//! Maps host key names (DOM `KeyboardEvent.key` style) to session actions.

use crate::sim::{Command, GamePhase, LaneGenerator, Session};

/// What a key press asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(Command),
    /// Start a new run (only honored outside of play)
    Restart,
}

/// Translate a key for the given phase. Unknown keys yield `None`.
pub fn action_for_key(key: &str, phase: GamePhase) -> Option<InputAction> {
    if phase != GamePhase::Playing {
        return (key == " ").then_some(InputAction::Restart);
    }

    let command = match key {
        "ArrowUp" | "w" | "W" => Command::Forward,
        "ArrowDown" | "s" | "S" => Command::Backward,
        "ArrowLeft" | "a" | "A" => Command::Left,
        "ArrowRight" | "d" | "D" => Command::Right,
        _ => return None,
    };
    Some(InputAction::Move(command))
}

/// Apply a key press to the session. Returns true if anything changed.
pub fn handle_key<G: LaneGenerator>(session: &mut Session<G>, key: &str) -> bool {
    match action_for_key(key, session.phase()) {
        Some(InputAction::Move(command)) => session.command(command),
        Some(InputAction::Restart) => session.restart(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        let playing = GamePhase::Playing;
        assert_eq!(
            action_for_key("ArrowUp", playing),
            Some(InputAction::Move(Command::Forward))
        );
        assert_eq!(
            action_for_key("S", playing),
            Some(InputAction::Move(Command::Backward))
        );
        assert_eq!(
            action_for_key("a", playing),
            Some(InputAction::Move(Command::Left))
        );
        assert_eq!(
            action_for_key("ArrowRight", playing),
            Some(InputAction::Move(Command::Right))
        );
        assert_eq!(action_for_key("q", playing), None);
        assert_eq!(action_for_key(" ", playing), None);
    }

    #[test]
    fn test_space_restarts_only_outside_play() {
        assert_eq!(
            action_for_key(" ", GamePhase::GameOver),
            Some(InputAction::Restart)
        );
        assert_eq!(
            action_for_key(" ", GamePhase::NotStarted),
            Some(InputAction::Restart)
        );
        assert_eq!(action_for_key("w", GamePhase::GameOver), None);
    }

    #[test]
    fn test_handle_key_drives_session() {
        let mut session = Session::seeded(8);
        assert!(!handle_key(&mut session, "w"));
        assert!(handle_key(&mut session, " "));
        assert_eq!(session.phase(), GamePhase::Playing);
        assert!(handle_key(&mut session, "w"));
        assert_eq!(session.score(), 1);
        assert!(!handle_key(&mut session, "Escape"));
    }
}
