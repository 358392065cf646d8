pub mod event;
pub mod input;
pub mod registry;
pub mod script;
pub mod snapshot;

pub use event::Event;
pub use input::{InputController, Key, PlacementMode, RawInput};
pub use registry::{Colony, Delivery, TickReport};
pub use script::{parse_script, parse_script_from_str, Script, ScriptAction, ScriptEntry};
pub use snapshot::{AntView, PheromoneView, Snapshot};
