// logging.rs - Logger Setup
//
// env_logger writing to stderr and to focus_tool.log in the data directory.
// Level precedence: debug flag > FOCUS_LOG_LEVEL > RUST_LOG > info.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

pub const LOG_LEVEL_ENV: &str = "FOCUS_LOG_LEVEL";
pub const DEBUG_ENV: &str = "FOCUS_DEBUG";

/// Writes every record to stderr and, when available, to the log file
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            // A full disk shouldn't take the console log down with it
            let _ = file.write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
        Ok(())
    }
}

/// Explicit level from the debug flag or environment, if any
pub fn level_override(debug_flag: bool) -> Option<LevelFilter> {
    let debug_env = std::env::var(DEBUG_ENV).ok();
    let level_env = std::env::var(LOG_LEVEL_ENV).ok();
    resolve_level(debug_flag, debug_env.as_deref(), level_env.as_deref())
}

fn resolve_level(
    debug_flag: bool,
    debug_env: Option<&str>,
    level_env: Option<&str>,
) -> Option<LevelFilter> {
    let debug_env = matches!(debug_env.map(str::trim), Some("1" | "true" | "yes"));
    if debug_flag || debug_env {
        return Some(LevelFilter::Debug);
    }
    level_env.and_then(|level| level.trim().parse().ok())
}

/// Install the global logger. Safe to call once per process.
pub fn init(log_file: &Path, debug_flag: bool) {
    let file = OpenOptions::new().create(true).append(true).open(log_file).ok();
    let file_ok = file.is_some();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level_override(debug_flag) {
        builder.filter_level(level);
    }
    builder
        .filter_module("wgpu_hal", LevelFilter::Error)
        .filter_module("wgpu_core", LevelFilter::Error)
        .filter_module("naga", LevelFilter::Error)
        .filter_module("cosmic_text", LevelFilter::Warn)
        .filter_module("iced_wgpu", LevelFilter::Warn)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .init();

    if !file_ok {
        log::warn!("Could not open log file {:?}, logging to stderr only", log_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_wins() {
        assert_eq!(resolve_level(true, None, Some("error")), Some(LevelFilter::Debug));
        assert_eq!(resolve_level(false, Some("1"), Some("warn")), Some(LevelFilter::Debug));
    }

    #[test]
    fn test_level_env() {
        assert_eq!(resolve_level(false, Some("0"), Some("WARN")), Some(LevelFilter::Warn));
        assert_eq!(resolve_level(false, None, Some(" trace ")), Some(LevelFilter::Trace));
        assert_eq!(resolve_level(false, None, Some("loud")), None);
        assert_eq!(resolve_level(false, None, None), None);
    }

    #[test]
    fn test_tee_writer_copies_to_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let mut writer = TeeWriter {
            file: Some(temp.reopen().unwrap()),
        };
        writer.write_all(b"hello log\n").unwrap();
        writer.flush().unwrap();
        let contents = std::fs::read_to_string(temp.path()).unwrap();
        assert_eq!(contents, "hello log\n");
    }
}
