//! Focus Tool - Desktop Focus Widget
//!
//! Small always-on-top window with:
//! - Countdown timer with presets and a custom-length dialog
//! - Persisted task checklist
//! - Quick launcher for a frequently used application

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod platform;
mod ui;

use log::{info, warn};

use focus_tool::{logging, DataDir};
use ui::FocusApp;

/// Command line switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// `--debug` / `-d`: debug-level logging
    pub debug: bool,
    /// `--native-title-bar`: let the OS draw the window frame
    pub native_title_bar: bool,
}

impl LaunchOptions {
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--debug" | "-d" => options.debug = true,
                "--native-title-bar" => options.native_title_bar = true,
                _ => {}
            }
        }
        options
    }
}

fn main() -> iced::Result {
    let options = LaunchOptions::from_args(std::env::args().skip(1));
    let (data_dir, dir_error) = match DataDir::resolve() {
        Ok(dir) => (dir, None),
        Err(e) => (DataDir::fallback(), Some(e)),
    };

    logging::init(&data_dir.log_file(), options.debug);
    if let Some(e) = dir_error {
        warn!("Could not create data directory, using working directory: {}", e);
    }
    info!(
        "Focus Tool {} starting, data dir: {:?}",
        env!("CARGO_PKG_VERSION"),
        data_dir.root()
    );

    iced::daemon(FocusApp::title, FocusApp::update, FocusApp::view)
        .subscription(FocusApp::subscription)
        .theme(FocusApp::theme)
        .run_with(move || FocusApp::new(data_dir, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        assert_eq!(LaunchOptions::from_args(Vec::<String>::new()), LaunchOptions::default());
    }

    #[test]
    fn test_flags() {
        let options = LaunchOptions::from_args(["-d", "--native-title-bar", "--unknown"]);
        assert!(options.debug);
        assert!(options.native_title_bar);

        let options = LaunchOptions::from_args(["--debug"]);
        assert!(options.debug);
        assert!(!options.native_title_bar);
    }
}
