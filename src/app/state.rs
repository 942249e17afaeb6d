// app/state.rs - Core Application State
//
// Everything the widget knows, independent of the UI toolkit. The window
// layer forwards user actions here and renders what comes back.

use log::{error, info, warn};

use crate::geometry::WindowConfig;
use crate::launcher::{self, LaunchError};
use crate::paths::DataDir;
use crate::settings::{Background, Settings};
use crate::tasks::{TaskList, TaskStore};
use crate::timer::{Countdown, TickOutcome};

pub const READY_STATUS: &str = "Ready to focus!";

/// Main application state
/// This is the single source of truth for all application data
#[derive(Debug)]
pub struct FocusState {
    pub settings: Settings,
    pub window: WindowConfig,
    pub countdown: Countdown,
    pub tasks: TaskList,

    /// Row picked in the task list, if any
    pub selected_task: Option<usize>,
    /// Text in the "add task" entry
    pub task_input: String,
    /// Text in the launcher entry
    pub launch_input: String,
    /// One-line feedback under the feature boxes
    pub status: String,

    data_dir: DataDir,
    task_store: TaskStore,
}

impl FocusState {
    /// Load settings, window geometry and tasks from `data_dir`
    pub fn load(data_dir: DataDir) -> Self {
        let settings = Settings::load(&data_dir.settings());
        let window = WindowConfig::load(data_dir.window_config());
        let task_store = TaskStore::new(data_dir.tasks());
        let tasks = task_store.load();

        Self {
            countdown: Countdown::new(settings.default_minutes),
            launch_input: settings.launch_command.clone(),
            settings,
            window,
            tasks,
            selected_task: None,
            task_input: String::new(),
            status: READY_STATUS.to_string(),
            data_dir,
            task_store,
        }
    }

    pub fn data_dir(&self) -> &DataDir {
        &self.data_dir
    }

    // ---- timer ----------------------------------------------------------

    pub fn start_timer(&mut self) {
        if self.countdown.start() {
            self.status = format!("Focusing: {}-minute session", self.countdown.session_minutes());
        }
    }

    pub fn stop_timer(&mut self) {
        self.countdown.stop();
        self.status = "Timer paused".to_string();
    }

    /// Space bar: start when idle or paused, pause when running
    pub fn toggle_timer(&mut self) {
        self.countdown.toggle();
        self.status = if self.countdown.is_running() {
            format!("Focusing: {}-minute session", self.countdown.session_minutes())
        } else {
            "Timer paused".to_string()
        };
    }

    pub fn set_timer(&mut self, minutes: u32) {
        self.countdown.set_minutes(minutes);
        self.status = format!("Timer set to {} minutes", self.countdown.session_minutes());
    }

    pub fn reset_timer(&mut self) {
        self.countdown.reset();
        self.status = READY_STATUS.to_string();
    }

    /// Advance the countdown by one second.
    /// Returns the finished session's minutes on completion.
    pub fn tick(&mut self) -> Option<u32> {
        match self.countdown.tick() {
            TickOutcome::Completed { minutes } => {
                self.status = format!("{}-minute session complete", minutes);
                Some(minutes)
            }
            TickOutcome::Continue(_) | TickOutcome::Idle => None,
        }
    }

    // ---- tasks ----------------------------------------------------------

    /// Add whatever is in the task entry; the entry is cleared on success
    pub fn add_task(&mut self) -> bool {
        if self.tasks.add(&self.task_input).is_none() {
            return false;
        }
        self.task_input.clear();
        self.selected_task = None;
        self.status = format!("{} tasks", self.tasks.len());
        self.save_tasks();
        true
    }

    pub fn select_task(&mut self, index: usize) {
        self.selected_task = (index < self.tasks.len()).then_some(index);
    }

    /// Toggle the selected task's completed flag
    pub fn complete_selected(&mut self) -> bool {
        let Some(index) = self.selected_task else {
            warn!("No task selected for completion");
            return false;
        };
        let Some(done) = self.tasks.toggle(index) else {
            return false;
        };
        self.status = if done { "Task completed" } else { "Task reopened" }.to_string();
        self.save_tasks();
        true
    }

    pub fn delete_selected(&mut self) -> bool {
        let Some(index) = self.selected_task.take() else {
            warn!("No task selected for deletion");
            return false;
        };
        if self.tasks.remove(index).is_none() {
            return false;
        }
        self.status = "Task deleted".to_string();
        self.save_tasks();
        true
    }

    /// Caller is responsible for confirming with the user first
    pub fn clear_tasks(&mut self) {
        self.tasks.clear();
        self.selected_task = None;
        self.status = "All tasks cleared".to_string();
        self.save_tasks();
    }

    pub fn save_tasks(&self) {
        if let Err(e) = self.task_store.save(&self.tasks) {
            error!("Error saving tasks: {:#}", e);
        }
    }

    // ---- launcher -------------------------------------------------------

    pub fn launch(&mut self) -> Result<(), LaunchError> {
        match launcher::launch(&self.launch_input) {
            Ok(_) => {
                let command = self.launch_input.trim().to_string();
                self.status = format!("Launched {}", command);
                if self.settings.launch_command != command {
                    self.settings.launch_command = command;
                    self.save_settings();
                }
                Ok(())
            }
            Err(LaunchError::Empty) => {
                warn!("No application name provided");
                Err(LaunchError::Empty)
            }
            Err(e) => {
                self.status = "Launch failed".to_string();
                Err(e)
            }
        }
    }

    // ---- window & settings ---------------------------------------------

    /// Record a resize of the main window and persist it.
    /// Returns the size to force when the window went below the minimum.
    pub fn window_resized(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        let correction = self.window.resized(width, height);
        self.save_window();
        correction
    }

    /// Record a move of the main window and persist it
    pub fn window_moved(&mut self, x: i32, y: i32) {
        self.window.moved(x, y);
        self.save_window();
    }

    pub fn cycle_background(&mut self) -> Background {
        self.settings.background = self.settings.background.next();
        info!("Background set to {}", self.settings.background);
        self.save_settings();
        self.settings.background
    }

    pub fn save_settings(&self) {
        if let Err(e) = self.settings.save(&self.data_dir.settings()) {
            error!("Error saving settings: {:#}", e);
        }
    }

    pub fn save_window(&self) {
        if let Err(e) = self.window.save() {
            error!("Error saving window config: {:#}", e);
        }
    }

    /// Persist everything; called on exit
    pub fn save_all(&self) {
        self.save_tasks();
        self.save_window();
        self.save_settings();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerState;
    use tempfile::TempDir;

    fn state_in(temp: &TempDir) -> FocusState {
        FocusState::load(DataDir::new(temp.path()))
    }

    #[test]
    fn test_fresh_state() {
        let temp = TempDir::new().unwrap();
        let state = state_in(&temp);
        assert_eq!(state.status, READY_STATUS);
        assert_eq!(state.countdown.display(), "50:00");
        assert!(state.tasks.is_empty());
        assert_eq!(state.launch_input, launcher::default_command());
    }

    #[test]
    fn test_task_flow_persists() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);

        state.task_input = "  ship release ".to_string();
        assert!(state.add_task());
        assert!(state.task_input.is_empty());

        state.task_input = "   ".to_string();
        assert!(!state.add_task());

        assert!(!state.complete_selected());
        state.select_task(0);
        assert!(state.complete_selected());

        let reloaded = state_in(&temp);
        assert_eq!(reloaded.tasks.len(), 1);
        assert!(reloaded.tasks.get(0).unwrap().completed);
    }

    #[test]
    fn test_select_out_of_range_clears_selection() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.task_input = "a".to_string();
        state.add_task();
        state.select_task(0);
        state.select_task(3);
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn test_delete_and_clear() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        for text in ["a", "b", "c"] {
            state.task_input = text.to_string();
            state.add_task();
        }
        state.select_task(1);
        assert!(state.delete_selected());
        assert_eq!(state.selected_task, None);
        assert!(!state.delete_selected());
        assert_eq!(state.tasks.len(), 2);

        state.clear_tasks();
        assert!(state_in(&temp).tasks.is_empty());
    }

    #[test]
    fn test_timer_completion_via_tick() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.set_timer(1);
        state.start_timer();
        assert_eq!(state.countdown.state(), TimerState::Running);

        let finished: Vec<_> = (0..60).filter_map(|_| state.tick()).collect();
        assert_eq!(finished, vec![1]);
        assert_eq!(state.countdown.display(), "50:00");
        assert_eq!(state.tick(), None);
    }

    #[test]
    fn test_toggle_timer_updates_status() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.toggle_timer();
        assert!(state.countdown.is_running());
        assert_eq!(state.status, "Focusing: 50-minute session");
        state.toggle_timer();
        assert_eq!(state.countdown.state(), TimerState::Stopped);
        assert_eq!(state.status, "Timer paused");
    }

    #[test]
    fn test_empty_launch_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.launch_input = " ".to_string();
        assert!(matches!(state.launch(), Err(LaunchError::Empty)));
    }

    #[test]
    fn test_resize_and_move_are_saved_immediately() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        assert_eq!(state.window_resized(520, 760), None);
        state.window_moved(33, 44);
        assert!(state.data_dir().window_config().exists());

        let reloaded = state_in(&temp).window.geometry();
        assert_eq!((reloaded.width, reloaded.height), (520, 760));
        assert_eq!(reloaded.position(), Some((33, 44)));
    }

    #[test]
    fn test_undersized_resize_is_corrected_and_saved() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        assert_eq!(state.window_resized(300, 500), Some((400, 600)));
        let reloaded = state_in(&temp).window.geometry();
        assert_eq!((reloaded.width, reloaded.height), (400, 600));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_launch_is_remembered() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        state.launch_input = " true ".to_string();
        assert!(state.launch().is_ok());
        assert_eq!(state.status, "Launched true");
        assert_eq!(state.settings.launch_command, "true");

        let saved = Settings::load(&state.data_dir().settings());
        assert_eq!(saved.launch_command, "true");
    }

    #[test]
    fn test_save_all_writes_every_file() {
        let temp = TempDir::new().unwrap();
        let state = state_in(&temp);
        state.save_all();
        let dir = state.data_dir();
        assert!(dir.tasks().exists());
        assert!(dir.window_config().exists());
        assert!(dir.settings().exists());
    }

    #[test]
    fn test_background_cycle_is_saved() {
        let temp = TempDir::new().unwrap();
        let mut state = state_in(&temp);
        assert_eq!(state.cycle_background(), Background::Animated);
        assert_eq!(state_in(&temp).settings.background, Background::Animated);
    }
}
