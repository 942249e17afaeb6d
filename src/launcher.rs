// launcher.rs - Quick Launch
//
// Runs a user-typed command line through the platform shell without waiting
// for it, the same way a desktop "Run" box would.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use log::{debug, error, info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No application name provided")]
    Empty,
    #[error("Could not launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Command shown in the launcher entry on first run
pub fn default_command() -> &'static str {
    if cfg!(windows) {
        "notepad.exe"
    } else if cfg!(target_os = "macos") {
        "open -a TextEdit"
    } else {
        "xdg-open ."
    }
}

/// Entry text for a file picked in the browse dialog, quoted if it has spaces
pub fn command_for_path(path: &Path) -> String {
    let path = path.display().to_string();
    if path.contains(char::is_whitespace) {
        format!("\"{}\"", path)
    } else {
        path
    }
}

/// Build the shell invocation for `command_line`
pub fn shell_command(command_line: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command_line]);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command_line]);
        cmd
    }
}

/// Spawn `command_line` detached. Returns the process id.
pub fn launch(command_line: &str) -> Result<u32, LaunchError> {
    let command_line = command_line.trim();
    if command_line.is_empty() {
        return Err(LaunchError::Empty);
    }

    let mut child = shell_command(command_line)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| {
            error!("Failed to launch {}: {}", command_line, source);
            LaunchError::Spawn {
                command: command_line.to_string(),
                source,
            }
        })?;

    let pid = child.id();
    info!("Launched '{}' (pid {})", command_line, pid);

    // Reap the shell once it exits so it doesn't linger as a zombie
    let reaper = thread::Builder::new()
        .name(format!("launch-{}", pid))
        .spawn(move || match child.wait() {
            Ok(status) => debug!("Launched process {} exited with {}", pid, status),
            Err(e) => warn!("Failed to wait on launched process {}: {}", pid, e),
        });
    if let Err(e) = reaper {
        warn!("Could not start wait thread for process {}: {}", pid, e);
    }

    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_rejected() {
        assert!(matches!(launch("   "), Err(LaunchError::Empty)));
        assert_eq!(LaunchError::Empty.to_string(), "No application name provided");
    }

    #[test]
    fn test_shell_command_wraps_command_line() {
        let cmd = shell_command("code --new-window");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        if cfg!(windows) {
            assert_eq!(cmd.get_program(), "cmd");
            assert_eq!(args, ["/C", "code --new-window"]);
        } else {
            assert_eq!(cmd.get_program(), "sh");
            assert_eq!(args, ["-c", "code --new-window"]);
        }
    }

    #[test]
    fn test_command_for_path_quotes_spaces() {
        assert_eq!(command_for_path(Path::new("/usr/bin/gedit")), "/usr/bin/gedit");
        assert_eq!(
            command_for_path(Path::new("/opt/My Apps/editor")),
            "\"/opt/My Apps/editor\""
        );
    }

    #[test]
    fn test_spawn_error_message() {
        let err = LaunchError::Spawn {
            command: "nope".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Could not launch nope: not found");
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_true_succeeds() {
        assert!(launch("true").is_ok());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_exited_child_is_reaped() {
        use std::time::{Duration, Instant};

        let pid = launch("true").unwrap();
        let proc_entry = std::path::PathBuf::from(format!("/proc/{}", pid));
        let deadline = Instant::now() + Duration::from_secs(5);
        while proc_entry.exists() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(20));
        }
        assert!(!proc_entry.exists(), "process {} was never reaped", pid);
    }
}
