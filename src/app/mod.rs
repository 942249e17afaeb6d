// app/mod.rs - Widget State
//
// Timer, tasks, launcher entry and window config bundled into `FocusState`.
// The iced layer in the binary only forwards messages to it.

mod state;

pub use state::{FocusState, READY_STATUS};
