// settings.rs - User Preferences
//
// Choices that used to be separate program revisions (window chrome,
// background style) plus timer presets and the launcher command.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::constants::timer::{DEFAULT_MINUTES, MAX_MINUTES, PRESETS};
use crate::launcher;
use crate::paths::write_file;

/// Window chrome style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TitleBar {
    /// Borderless window with the app's own title bar
    #[default]
    Custom,
    /// Native decorations from the window manager
    Native,
}

/// Backdrop drawn behind the feature boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    #[default]
    Static,
    Animated,
    None,
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "Static"),
            Self::Animated => write!(f, "Animated"),
            Self::None => write!(f, "None"),
        }
    }
}

impl Background {
    /// Cycle order for the backdrop toggle button
    pub fn next(self) -> Self {
        match self {
            Self::Static => Self::Animated,
            Self::Animated => Self::None,
            Self::None => Self::Static,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title_bar: TitleBar,
    pub background: Background,
    pub always_on_top: bool,
    /// Session length after reset or completion
    pub default_minutes: u32,
    /// Preset buttons in minutes
    pub presets: Vec<u32>,
    /// Last command typed into the launcher
    pub launch_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title_bar: TitleBar::Custom,
            background: Background::Static,
            always_on_top: true,
            default_minutes: DEFAULT_MINUTES,
            presets: PRESETS.to_vec(),
            launch_command: launcher::default_command().to_string(),
        }
    }
}

impl Settings {
    /// Missing files and parse failures give defaults
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match read_settings(path) {
                Ok(settings) => {
                    info!("Settings loaded from {:?}", path);
                    return settings.sanitized();
                }
                Err(e) => error!("Failed to load settings: {:#}", e),
            }
        }
        Self::default()
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        write_file(path, &json).with_context(|| format!("Failed to write {:?}", path))?;
        info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Drop out-of-range minute values a hand-edited file might contain
    fn sanitized(mut self) -> Self {
        let valid = 1..=MAX_MINUTES;
        if !valid.contains(&self.default_minutes) {
            self.default_minutes = DEFAULT_MINUTES;
        }
        self.presets.retain(|m| valid.contains(m));
        if self.presets.is_empty() {
            self.presets = PRESETS.to_vec();
        }
        self
    }
}

fn read_settings(path: &Path) -> anyhow::Result<Settings> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&contents).context("Failed to parse settings")
}
