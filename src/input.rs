use macroquad::input::{KeyCode, get_keys_pressed};

use crate::heading::Heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Heading),
    SpeedUp,
    SlowDown,
    Quit,
}

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Up | KeyCode::W => Command::Turn(Heading::Up),
        KeyCode::Down | KeyCode::S => Command::Turn(Heading::Down),
        KeyCode::Left | KeyCode::A => Command::Turn(Heading::Left),
        KeyCode::Right | KeyCode::D => Command::Turn(Heading::Right),

        KeyCode::Equal | KeyCode::KpAdd | KeyCode::PageUp => Command::SpeedUp,
        KeyCode::Minus | KeyCode::KpSubtract | KeyCode::PageDown => Command::SlowDown,

        KeyCode::Escape => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Commands for every key pressed since the previous frame.
pub fn poll_commands() -> Vec<Command> {
    get_keys_pressed()
        .into_iter()
        .filter_map(command_for_key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::Turn(Heading::Up)));
        assert_eq!(command_for_key(KeyCode::Down), Some(Command::Turn(Heading::Down)));
        assert_eq!(command_for_key(KeyCode::Left), Some(Command::Turn(Heading::Left)));
        assert_eq!(command_for_key(KeyCode::Right), Some(Command::Turn(Heading::Right)));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(command_for_key(KeyCode::W), Some(Command::Turn(Heading::Up)));
        assert_eq!(command_for_key(KeyCode::A), Some(Command::Turn(Heading::Left)));
        assert_eq!(command_for_key(KeyCode::S), Some(Command::Turn(Heading::Down)));
        assert_eq!(command_for_key(KeyCode::D), Some(Command::Turn(Heading::Right)));
    }

    #[test]
    fn test_speed_keys() {
        assert_eq!(command_for_key(KeyCode::Equal), Some(Command::SpeedUp));
        assert_eq!(command_for_key(KeyCode::KpAdd), Some(Command::SpeedUp));
        assert_eq!(command_for_key(KeyCode::Minus), Some(Command::SlowDown));
        assert_eq!(command_for_key(KeyCode::PageDown), Some(Command::SlowDown));
    }

    #[test]
    fn test_escape_quits() {
        assert_eq!(command_for_key(KeyCode::Escape), Some(Command::Quit));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(command_for_key(KeyCode::X), None);
        assert_eq!(command_for_key(KeyCode::Space), None);
        assert_eq!(command_for_key(KeyCode::Enter), None);
    }
}
