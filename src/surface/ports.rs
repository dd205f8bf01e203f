//! Capabilities the interpreter needs from the host surface.
//!
//! The interpreter never touches document text. Everything it does goes
//! through these traits, which the embedding host implements.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::keys::{Modifiers, SurfaceKey};
use crate::editor::Status;

/// High-level actions reached through the host's menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
}

impl Action {
    pub fn caption(&self) -> &'static str {
        match self {
            Action::Copy => "Copy",
            Action::Cut => "Cut",
            Action::Paste => "Paste",
            Action::Undo => "Undo",
            Action::Redo => "Redo",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.caption())
    }
}

/// Why an action could not be performed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("could not find menu item with caption {0}")]
    NotFound(Action),
}

/// Synthetic keystroke injection
pub trait KeystrokePort {
    fn emit(&mut self, key: SurfaceKey, mods: Modifiers);
}

/// Menu-driven command invocation
pub trait ActionPort {
    fn perform(&mut self, action: Action) -> Result<(), ActionError>;
}

/// Access to the surface's current selection, used by marks.
///
/// Snapshots must be owned values: later cursor movement on the surface
/// must not change a snapshot already handed out.
pub trait SelectionPort {
    type Selection: Clone;

    /// `None` when the surface has no selection range at all
    fn selection(&self) -> Option<Self::Selection>;

    fn restore_selection(&mut self, selection: Self::Selection);
}

/// Receives the current mode and pending command text after every change
pub trait StatusSink {
    fn announce(&mut self, status: &Status);
}

/// Everything the interpreter drives
pub trait Host: KeystrokePort + ActionPort + SelectionPort + StatusSink {}

impl<T> Host for T where T: KeystrokePort + ActionPort + SelectionPort + StatusSink {}
