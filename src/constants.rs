// constants.rs - Application-wide Constants
//
// Centralized constants for dimensions, timer presets and file names.
// Colors live with the UI in the binary.

/// Main window dimensions
pub mod window {
    /// Default window width
    pub const DEFAULT_WIDTH: u32 = 450;
    /// Default window height
    pub const DEFAULT_HEIGHT: u32 = 700;
    /// Minimum window width
    pub const MIN_WIDTH: u32 = 400;
    /// Minimum window height while expanded
    pub const MIN_HEIGHT: u32 = 600;
    /// Window height in compact mode (title bar + timer)
    pub const COMPACT_HEIGHT: u32 = 200;
    /// Height of the custom title bar
    pub const TITLE_BAR_HEIGHT: u32 = 35;
    /// Resize hit area thickness for the borderless window
    pub const RESIZE_BORDER: i32 = 8;
}

/// Custom timer dialog dimensions
pub mod dialog {
    pub const WIDTH: f32 = 300.0;
    pub const HEIGHT: f32 = 150.0;
    /// Offset from the main window's top-left corner
    pub const OFFSET_X: f32 = 75.0;
    pub const OFFSET_Y: f32 = 275.0;
}

/// Countdown defaults
pub mod timer {
    /// Length of a session after reset or completion
    pub const DEFAULT_MINUTES: u32 = 50;
    /// Preset buttons shown under the display
    pub const PRESETS: [u32; 3] = [20, 50, 120];
    /// Longest custom session (24 hours)
    pub const MAX_MINUTES: u32 = 1440;
}

/// Hexagon backdrop layout
pub mod hexgrid {
    /// Distance between neighbouring hexagon centers
    pub const SPACING: f32 = 40.0;
    /// Hexagon circumradius
    pub const RADIUS: f32 = 8.0;
    /// Animation frame interval in milliseconds
    pub const FRAME_MS: u64 = 80;
}

/// File names inside the data directory
pub mod files {
    pub const APP_DIR: &str = "FocusTool";
    pub const SETTINGS: &str = "settings.json";
    pub const WINDOW_CONFIG: &str = "window_config.json";
    pub const TASKS: &str = "tasks.json";
    pub const LOG: &str = "focus_tool.log";
}
