pub mod keys;
pub mod ports;
pub mod recorder;

pub use keys::{Modifiers, SurfaceKey};
pub use ports::{
    Action, ActionError, ActionPort, Host, KeystrokePort, SelectionPort, StatusSink,
};
pub use recorder::{PortCall, RecordingSurface, TextRange};
