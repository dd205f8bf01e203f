use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event::RawKeyEvent;

impl From<KeyEvent> for RawKeyEvent {
    fn from(key: KeyEvent) -> Self {
        let name = match key.code {
            KeyCode::Char(ch) => ch.to_string(),
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
            KeyCode::Left => "ArrowLeft".to_string(),
            KeyCode::Right => "ArrowRight".to_string(),
            KeyCode::Up => "ArrowUp".to_string(),
            KeyCode::Down => "ArrowDown".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::CapsLock => "CapsLock".to_string(),
            KeyCode::Modifier(_) => "Shift".to_string(),
            _ => "Unidentified".to_string(),
        };

        let mut event = RawKeyEvent::new(name);
        event.shift |= key.modifiers.contains(KeyModifiers::SHIFT);
        event.ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        event.alt = key.modifiers.contains(KeyModifiers::ALT);
        event.meta = key
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META);
        event
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
