use std::fmt;

use serde::Serialize;

/// Logical keys the editing surface accepts as synthetic input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKey {
    /// Lowercase ASCII letter
    Letter(char),
    Digit(char),
    Backspace,
    Enter,
    Escape,
    Space,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Delete,
}

impl SurfaceKey {
    /// Map a printable character onto the key that types it.
    /// Uppercase letters map to their lowercase key; shift is a modifier.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(SurfaceKey::Space),
            c if c.is_ascii_alphabetic() => Some(SurfaceKey::Letter(c.to_ascii_lowercase())),
            c if c.is_ascii_digit() => Some(SurfaceKey::Digit(c)),
            _ => None,
        }
    }

    pub fn name(&self) -> String {
        match self {
            SurfaceKey::Letter(c) | SurfaceKey::Digit(c) => c.to_string(),
            SurfaceKey::Backspace => "backspace".to_string(),
            SurfaceKey::Enter => "enter".to_string(),
            SurfaceKey::Escape => "esc".to_string(),
            SurfaceKey::Space => "space".to_string(),
            SurfaceKey::End => "end".to_string(),
            SurfaceKey::Home => "home".to_string(),
            SurfaceKey::Left => "left".to_string(),
            SurfaceKey::Up => "up".to_string(),
            SurfaceKey::Right => "right".to_string(),
            SurfaceKey::Down => "down".to_string(),
            SurfaceKey::Delete => "delete".to_string(),
        }
    }
}

/// Modifier flags attached to an emitted key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
    };
    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
    };
    pub const CONTROL_SHIFT: Modifiers = Modifiers {
        shift: true,
        control: true,
    };

    /// Add shift when extending a selection
    pub fn with_shift(self, shift: bool) -> Self {
        Modifiers {
            shift: self.shift || shift,
            ..self
        }
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.control {
            write!(f, "ctrl+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod keys_tests;
