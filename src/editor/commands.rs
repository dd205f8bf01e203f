//! Dispatch tables: which key means which command in each mode.
//!
//! Lookups are pure. Executing a command is `editor_events`' job.

use crate::surface::SurfaceKey;

/// Operators that turn a selection into a cut, copy or paste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Delete,
    Change,
    Yank,
    /// Only reachable from Visual dispatch
    Put,
}

impl Operator {
    /// Operators that can lead a Normal-mode sequence
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'd' => Some(Operator::Delete),
            'c' => Some(Operator::Change),
            'y' => Some(Operator::Yank),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Delete => 'd',
            Operator::Change => 'c',
            Operator::Yank => 'y',
            Operator::Put => 'p',
        }
    }
}

/// First key of a two-key Normal-mode sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leader {
    /// `m`
    SetMark,
    /// `'`
    JumpToMarkLine,
    /// `` ` ``
    JumpToMark,
    /// `g`
    Go,
    Operator(Operator),
}

impl Leader {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'm' => Some(Leader::SetMark),
            '\'' => Some(Leader::JumpToMarkLine),
            '`' => Some(Leader::JumpToMark),
            'g' => Some(Leader::Go),
            _ => Operator::from_char(ch).map(Leader::Operator),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Leader::SetMark => 'm',
            Leader::JumpToMarkLine => '\'',
            Leader::JumpToMark => '`',
            Leader::Go => 'g',
            Leader::Operator(op) => op.as_char(),
        }
    }
}

/// Targets of `iw`/`ip` style selections and of operator motions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextObject {
    Word,
    Paragraph,
}

impl TextObject {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(TextObject::Word),
            'p' => Some(TextObject::Paragraph),
            _ => None,
        }
    }
}

/// Single-key Normal-mode commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalCommand {
    /// h j k l
    Move(SurfaceKey),
    WordBackward,
    WordForward,
    ParagraphBackward,
    ParagraphForward,
    /// `G`, or "go to line" with a count
    DocumentEnd,
    Paste,
    Append,
    Insert,
    LineStart,
    LineEnd,
    InsertAtLineStart,
    AppendAtLineEnd,
    Visual,
    VisualLine,
    OpenBelow,
    OpenAbove,
    Undo,
    Redo,
    JoinLines,
    DeleteChar,
    DeleteCharBefore,
    DeleteToLineEnd,
    ChangeToLineEnd,
    SearchNext,
    SearchPrevious,
    Search,
    Leader(Leader),
}

pub fn normal_command(key: char) -> Option<NormalCommand> {
    let command = match key {
        'h' => NormalCommand::Move(SurfaceKey::Left),
        'j' => NormalCommand::Move(SurfaceKey::Down),
        'k' => NormalCommand::Move(SurfaceKey::Up),
        'l' => NormalCommand::Move(SurfaceKey::Right),
        'b' => NormalCommand::WordBackward,
        'w' => NormalCommand::WordForward,
        '{' => NormalCommand::ParagraphBackward,
        '}' => NormalCommand::ParagraphForward,
        'G' => NormalCommand::DocumentEnd,
        'p' => NormalCommand::Paste,
        'a' => NormalCommand::Append,
        'i' => NormalCommand::Insert,
        '^' | '_' | '0' => NormalCommand::LineStart,
        '$' => NormalCommand::LineEnd,
        'I' => NormalCommand::InsertAtLineStart,
        'A' => NormalCommand::AppendAtLineEnd,
        'v' => NormalCommand::Visual,
        'V' => NormalCommand::VisualLine,
        'o' => NormalCommand::OpenBelow,
        'O' => NormalCommand::OpenAbove,
        'u' => NormalCommand::Undo,
        'r' => NormalCommand::Redo,
        'J' => NormalCommand::JoinLines,
        'x' => NormalCommand::DeleteChar,
        'X' => NormalCommand::DeleteCharBefore,
        'D' => NormalCommand::DeleteToLineEnd,
        'C' => NormalCommand::ChangeToLineEnd,
        'n' => NormalCommand::SearchNext,
        'N' => NormalCommand::SearchPrevious,
        '/' => NormalCommand::Search,
        other => return Leader::from_char(other).map(NormalCommand::Leader),
    };
    Some(command)
}

/// Visual and VisualLine commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualCommand {
    /// h j k l, extending by one step
    Extend(SurfaceKey),
    WordBackward,
    WordForward,
    ParagraphBackward,
    ParagraphForward,
    DocumentEnd,
    DocumentStart,
    Operate(Operator),
    /// `i` / `a`
    TextObject,
}

pub fn visual_command(key: char) -> Option<VisualCommand> {
    let command = match key {
        'h' => VisualCommand::Extend(SurfaceKey::Left),
        'j' => VisualCommand::Extend(SurfaceKey::Down),
        'k' => VisualCommand::Extend(SurfaceKey::Up),
        'l' => VisualCommand::Extend(SurfaceKey::Right),
        'b' => VisualCommand::WordBackward,
        'w' => VisualCommand::WordForward,
        '{' => VisualCommand::ParagraphBackward,
        '}' => VisualCommand::ParagraphForward,
        'G' => VisualCommand::DocumentEnd,
        'g' => VisualCommand::DocumentStart,
        'p' => VisualCommand::Operate(Operator::Put),
        'i' | 'a' => VisualCommand::TextObject,
        other => return Operator::from_char(other).map(VisualCommand::Operate),
    };
    Some(command)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
