//! Vim-style modal command interpreter for editing surfaces that can only be
//! driven by synthetic keystrokes and menu actions.
//!
//! Feed raw key events to [`Interpreter::handle_key_event`] together with a
//! [`Host`] implementation; the interpreter answers with a [`Disposition`]
//! and drives the host through its ports.

pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod surface;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use editor::{Interpreter, Mode, Status};
pub use error::ModalKeysError;
pub use input::{Disposition, RawKeyEvent};
pub use surface::{Action, ActionError, Host, Modifiers, RecordingSurface, SurfaceKey};
