use serde::Serialize;

/// Interpreter modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    /// Navigation and commands
    #[default]
    Normal,
    /// Keys go straight to the surface
    Insert,
    /// Character-wise selection
    Visual,
    /// Line-wise selection
    VisualLine,
    /// The host's find box has focus
    Search,
    /// Operator typed, waiting for its motion (w, p, i, a)
    WaitForOperatorMotion1,
    /// Operator plus i/a typed, waiting for the text object
    WaitForOperatorMotion2,
    /// i/a typed in Visual mode, waiting for the text object
    WaitForVisualTextObject,
}

impl Mode {
    /// Get the display string for the mode indicator
    pub fn display(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Visual => "VISUAL",
            Mode::VisualLine => "VISUAL LINE",
            Mode::Search => "SEARCH",
            Mode::WaitForOperatorMotion1 => "OPERATOR",
            Mode::WaitForOperatorMotion2 => "OPERATOR OBJECT",
            Mode::WaitForVisualTextObject => "VISUAL OBJECT",
        }
    }

    pub fn is_visual(&self) -> bool {
        matches!(self, Mode::Visual | Mode::VisualLine)
    }

    /// An operator or text object is still waiting for its next key
    pub fn is_waiting(&self) -> bool {
        matches!(
            self,
            Mode::WaitForOperatorMotion1
                | Mode::WaitForOperatorMotion2
                | Mode::WaitForVisualTextObject
        )
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod mode_tests;
