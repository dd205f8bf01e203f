pub mod commands;
pub mod editor_events;
pub mod interpreter;
pub mod marks;
pub mod mode;
pub mod pending;
pub mod status;

pub use commands::{Leader, Operator};
pub use interpreter::Interpreter;
pub use marks::MarkRegistry;
pub use mode::Mode;
pub use pending::PendingCommand;
pub use status::Status;
