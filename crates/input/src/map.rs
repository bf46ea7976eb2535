//! Mapping from terminal events to game input.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// A pointer press at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerHit {
    pub column: u16,
    pub row: u16,
    pub flagging: bool,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Tab => Some(GameAction::ToggleFlagMode),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Map a mouse press to a pointer hit.
///
/// The left button hits in the current mode; the right button always flags.
/// Releases, drags and scrolling are ignored.
pub fn handle_mouse_event(mouse: MouseEvent, flag_mode: bool) -> Option<PointerHit> {
    let flagging = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => flag_mode,
        MouseEventKind::Down(MouseButton::Right) => true,
        _ => return None,
    };
    Some(PointerHit {
        column: mouse.column,
        row: mouse.row,
        flagging,
    })
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f'))),
            Some(GameAction::ToggleFlagMode)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(GameAction::ToggleFlagMode)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_left_click_uses_mode() {
        let down = mouse(MouseEventKind::Down(MouseButton::Left));
        assert_eq!(
            handle_mouse_event(down, false),
            Some(PointerHit {
                column: 7,
                row: 3,
                flagging: false
            })
        );
        assert!(handle_mouse_event(down, true).unwrap().flagging);
    }

    #[test]
    fn test_right_click_always_flags() {
        let down = mouse(MouseEventKind::Down(MouseButton::Right));
        assert!(handle_mouse_event(down, false).unwrap().flagging);
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        for kind in [
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
            MouseEventKind::Down(MouseButton::Middle),
        ] {
            assert_eq!(handle_mouse_event(mouse(kind), false), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
