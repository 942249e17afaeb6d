//! Focus Tool - Core Library
//!
//! Countdown, task list, window geometry, settings and launcher logic.
//! Nothing in here depends on the GUI toolkit; the binary owns the window.

pub mod app;
pub mod constants;
pub mod geometry;
pub mod hexgrid;
pub mod launcher;
pub mod logging;
pub mod paths;
pub mod settings;
pub mod tasks;
pub mod timer;

// Re-export commonly used types
pub use app::FocusState;
pub use geometry::{Geometry, WindowConfig};
pub use paths::DataDir;
pub use settings::{Background, Settings, TitleBar};
pub use tasks::{Task, TaskList, TaskStore};
pub use timer::{Countdown, TickOutcome, TimerState};
