//! A host surface that records every call instead of performing it.
//!
//! Backs the `replay` and `live` harnesses and doubles as the test surface.

use std::fmt;

use serde::Serialize;

use super::keys::{Modifiers, SurfaceKey};
use super::ports::{Action, ActionError, ActionPort, KeystrokePort, SelectionPort, StatusSink};
use crate::editor::Status;

/// Selection range on the recorded surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        TextRange { start, end }
    }
}

/// One observable side effect on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum PortCall {
    Emit { key: SurfaceKey, mods: Modifiers },
    Perform { action: Action },
    RestoreSelection { range: TextRange },
}

impl PortCall {
    pub fn emit(key: SurfaceKey, mods: Modifiers) -> Self {
        PortCall::Emit { key, mods }
    }
}

impl fmt::Display for PortCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortCall::Emit { key, mods } => write!(f, "emit {}{}", mods, key.name()),
            PortCall::Perform { action } => {
                write!(f, "perform {}", action.caption().to_lowercase())
            }
            PortCall::RestoreSelection { range } => {
                write!(f, "restore {}..{}", range.start, range.end)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<PortCall>,
    pub announcements: Vec<Status>,
    /// What `selection()` reports; tests move it by hand
    pub selection: Option<TextRange>,
    unavailable: Vec<Action>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface {
            selection: Some(TextRange::default()),
            ..Default::default()
        }
    }

    /// Make `perform` fail for these actions, as a host with a missing menu item would
    pub fn with_unavailable(mut self, actions: &[Action]) -> Self {
        self.unavailable = actions.to_vec();
        self
    }

    pub fn take_calls(&mut self) -> Vec<PortCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn take_announcements(&mut self) -> Vec<Status> {
        std::mem::take(&mut self.announcements)
    }

    pub fn last_status(&self) -> Option<&Status> {
        self.announcements.last()
    }

    pub fn count_emits(&self, key: SurfaceKey, mods: Modifiers) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == PortCall::emit(key, mods))
            .count()
    }

    pub fn count_performs(&self, action: Action) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == PortCall::Perform { action })
            .count()
    }

    /// Calls rendered one per line
    pub fn trace(&self) -> String {
        self.calls
            .iter()
            .map(|call| call.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl KeystrokePort for RecordingSurface {
    fn emit(&mut self, key: SurfaceKey, mods: Modifiers) {
        self.calls.push(PortCall::emit(key, mods));
    }
}

impl ActionPort for RecordingSurface {
    fn perform(&mut self, action: Action) -> Result<(), ActionError> {
        if self.unavailable.contains(&action) {
            return Err(ActionError::NotFound(action));
        }
        self.calls.push(PortCall::Perform { action });
        Ok(())
    }
}

impl SelectionPort for RecordingSurface {
    type Selection = TextRange;

    fn selection(&self) -> Option<TextRange> {
        self.selection
    }

    fn restore_selection(&mut self, selection: TextRange) {
        self.selection = Some(selection);
        self.calls.push(PortCall::RestoreSelection { range: selection });
    }
}

impl StatusSink for RecordingSurface {
    fn announce(&mut self, status: &Status) {
        self.announcements.push(status.clone());
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod recorder_tests;
