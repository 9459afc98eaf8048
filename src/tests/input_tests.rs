#[cfg(test)]
mod tests {
    use crate::engine::Command;
    use crate::input::{Input, KeyAction, action_for_key};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        let bindings = [
            (KeyCode::Left, Command::MoveLeft),
            (KeyCode::Char('a'), Command::MoveLeft),
            (KeyCode::Right, Command::MoveRight),
            (KeyCode::Char('d'), Command::MoveRight),
            (KeyCode::Down, Command::SoftDrop),
            (KeyCode::Char('s'), Command::SoftDrop),
            (KeyCode::Up, Command::Rotate),
            (KeyCode::Char('w'), Command::Rotate),
            (KeyCode::Char('x'), Command::Rotate),
            (KeyCode::Char(' '), Command::HardDrop),
            (KeyCode::Enter, Command::Start),
            (KeyCode::Char('r'), Command::Restart),
        ];

        for (code, command) in bindings {
            assert_eq!(
                action_for_key(press(code)),
                Some(KeyAction::Game(command)),
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(press(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_unbound_and_released_keys_are_ignored() {
        assert_eq!(action_for_key(press(KeyCode::Char('z'))), None);
        assert_eq!(action_for_key(press(KeyCode::Tab)), None);

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for_key(release), None);
    }

    #[test]
    fn test_input_queue_drains_in_order() {
        let mut input = Input::default();
        input.push(Command::Start);
        input.push(Command::MoveLeft);
        input.push(Command::HardDrop);
        assert_eq!(input.len(), 3);

        let drained: Vec<_> = input.drain().collect();
        assert_eq!(
            drained,
            vec![Command::Start, Command::MoveLeft, Command::HardDrop]
        );
        assert!(input.is_empty());
    }
}
