pub mod event;
pub mod notation;
mod terminal;

pub use event::{Disposition, InputKey, RawKeyEvent};
pub use notation::parse_key_notation;
