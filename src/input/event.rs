use serde::Serialize;

/// A key event as delivered by the host's capture layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RawKeyEvent {
    /// Logical key value: a printed character, or a name such as `Escape`
    pub key: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl RawKeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let shift = key.chars().count() == 1 && key.chars().all(char::is_uppercase);
        RawKeyEvent {
            key,
            shift,
            ..Default::default()
        }
    }

    pub fn char(ch: char) -> Self {
        Self::new(ch.to_string())
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Modifiers the host reserves for its own shortcuts
    pub fn has_host_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    pub fn input_key(&self) -> InputKey {
        InputKey::parse(&self.key)
    }
}

/// The interpreter's view of a raw key value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    Escape,
    Enter,
    /// A modifier pressed on its own
    Modifier,
    Named(String),
}

impl InputKey {
    pub fn parse(key: &str) -> Self {
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return InputKey::Char(ch);
        }

        match key {
            "Escape" | "Esc" => InputKey::Escape,
            "Enter" => InputKey::Enter,
            "Shift" | "Control" | "Alt" | "AltGraph" | "Meta" | "OS" | "CapsLock" | "Fn" => {
                InputKey::Modifier
            }
            other => InputKey::Named(other.to_string()),
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            InputKey::Char(ch) => Some(*ch),
            _ => None,
        }
    }
}

/// What the capture layer should do with the original event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Swallow the event; the interpreter handled it
    Suppress,
    /// Let the host process the event natively
    PassThrough,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod event_tests;
