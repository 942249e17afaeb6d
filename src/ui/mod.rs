// ui/mod.rs - Focus Tool Window Layer
//
// An iced daemon owning two kinds of windows: the main widget and the small
// "custom timer" dialog. All state lives in `FocusState`; this module turns
// window events into state changes and state into widgets.

mod backdrop;
mod dialogs;
mod icon;
mod theme;
mod view;

use std::collections::BTreeMap;
use std::time::Duration;

use iced::{event, keyboard, window, Event, Point, Size, Subscription, Task, Theme};
use log::{debug, info, warn};

use focus_tool::constants::{dialog, hexgrid, window as window_consts};
use focus_tool::launcher::{self, LaunchError};
use focus_tool::timer::parse_custom_minutes;
use focus_tool::{DataDir, FocusState, TitleBar};

use crate::platform;
use crate::LaunchOptions;
use backdrop::Backdrop;

/// Id of the minutes entry in the custom timer dialog
const CUSTOM_MINUTES_INPUT: &str = "custom-minutes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowKind {
    Main,
    Dialog,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Window lifecycle
    MainWindowOpened(window::Id),
    DialogOpened(window::Id),
    WindowClosed(window::Id),
    WindowResized(window::Id, Size),
    WindowMoved(window::Id, Point),

    // Title bar
    DragWindow,
    MinimizeWindow,
    ToggleCompact,
    CycleBackground,
    Exit,

    // Timers
    Tick,
    Animate,

    // Countdown
    /// Space pressed in the given window with no widget claiming it
    SpacePressed(window::Id),
    StartTimer,
    StopTimer,
    ResetTimer,
    SetPreset(u32),

    // Custom timer dialog
    OpenCustomTimer,
    CustomMinutesChanged(String),
    ApplyCustomTimer,
    CloseCustomTimer,

    // Tasks
    TaskInputChanged(String),
    AddTask,
    SelectTask(usize),
    CompleteTask,
    DeleteTask,
    ClearTasks,

    // Launcher
    LaunchInputChanged(String),
    LaunchApp,
    BrowseApp,
}

pub struct FocusApp {
    state: FocusState,
    backdrop: Backdrop,
    windows: BTreeMap<window::Id, WindowKind>,
    main_id: Option<window::Id>,
    dialog_id: Option<window::Id>,
    /// Last known top-left of the main window
    main_position: Option<Point>,
    custom_minutes: String,
}

impl FocusApp {
    pub fn new(data_dir: DataDir, options: LaunchOptions) -> (Self, Task<Message>) {
        let mut state = FocusState::load(data_dir);
        if options.native_title_bar {
            state.settings.title_bar = TitleBar::Native;
        }
        info!(
            "Focus Tool starting (title bar: {:?}, background: {})",
            state.settings.title_bar, state.settings.background
        );

        let geometry = state.window.geometry();
        let (width, height) = state.window.current_size();
        let (position, main_position) = match geometry.position() {
            Some((x, y)) => {
                let point = Point::new(x as f32, y as f32);
                (window::Position::Specific(point), Some(point))
            }
            None => (window::Position::Centered, None),
        };

        let main_settings = window::Settings {
            size: Size::new(width as f32, height as f32),
            min_size: Some(Size::new(
                window_consts::MIN_WIDTH as f32,
                window_consts::COMPACT_HEIGHT as f32,
            )),
            position,
            decorations: state.settings.title_bar == TitleBar::Native,
            resizable: true,
            level: if state.settings.always_on_top {
                window::Level::AlwaysOnTop
            } else {
                window::Level::Normal
            },
            icon: icon::app_icon(),
            ..Default::default()
        };

        let app = Self {
            backdrop: Backdrop::new(state.settings.background),
            custom_minutes: String::new(),
            windows: BTreeMap::new(),
            main_id: None,
            dialog_id: None,
            main_position,
            state,
        };

        let (_, open_task) = window::open(main_settings);
        (app, open_task.map(Message::MainWindowOpened))
    }

    pub fn title(&self, window_id: window::Id) -> String {
        match self.windows.get(&window_id) {
            Some(WindowKind::Dialog) => "Custom Timer".to_string(),
            Some(WindowKind::Main) | None => "Focus Tool".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MainWindowOpened(id) => {
                self.main_id = Some(id);
                self.windows.insert(id, WindowKind::Main);
                info!("Main window opened: {:?}", id);

                if self.state.settings.title_bar == TitleBar::Custom {
                    return Task::batch([
                        window::gain_focus(id),
                        platform::enable_borderless_resize(id),
                    ]);
                }
                window::gain_focus(id)
            }

            Message::DialogOpened(id) => {
                self.dialog_id = Some(id);
                self.windows.insert(id, WindowKind::Dialog);
                debug!("Custom timer dialog opened: {:?}", id);
                Task::batch([
                    window::gain_focus(id),
                    iced::widget::text_input::focus(iced::widget::text_input::Id::new(
                        CUSTOM_MINUTES_INPUT,
                    )),
                ])
            }

            Message::WindowClosed(id) => match self.windows.remove(&id) {
                Some(WindowKind::Main) => {
                    info!("Main window closed");
                    self.main_id = None;
                    self.state.save_all();
                    iced::exit()
                }
                Some(WindowKind::Dialog) => {
                    self.dialog_id = None;
                    self.custom_minutes.clear();
                    Task::none()
                }
                None => Task::none(),
            },

            Message::WindowResized(id, size) => {
                if Some(id) != self.main_id {
                    return Task::none();
                }
                let (width, height) = (size.width.round() as u32, size.height.round() as u32);
                match self.state.window_resized(width, height) {
                    Some((w, h)) => {
                        debug!("Enforcing minimum size: {}x{} -> {}x{}", width, height, w, h);
                        window::resize(id, Size::new(w as f32, h as f32))
                    }
                    None => Task::none(),
                }
            }

            Message::WindowMoved(id, position) => {
                if Some(id) == self.main_id {
                    self.main_position = Some(position);
                    self.state
                        .window_moved(position.x.round() as i32, position.y.round() as i32);
                }
                Task::none()
            }

            Message::DragWindow => match self.main_id {
                Some(id) => window::drag(id),
                None => Task::none(),
            },

            Message::MinimizeWindow => match self.main_id {
                Some(id) => window::minimize(id, true),
                None => Task::none(),
            },

            Message::ToggleCompact => {
                let Some(id) = self.main_id else {
                    return Task::none();
                };
                let (width, height) = self.state.window.toggle_compact();
                window::resize(id, Size::new(width as f32, height as f32))
            }

            Message::CycleBackground => {
                let style = self.state.cycle_background();
                self.backdrop.set_style(style);
                Task::none()
            }

            Message::Exit => {
                info!("Exit requested");
                self.state.save_all();
                iced::exit()
            }

            Message::Tick => {
                if let Some(minutes) = self.state.tick() {
                    info!("Focus session of {} minutes completed", minutes);
                    dialogs::info(
                        "Timer Complete",
                        &format!("{}-minute focus session completed!", minutes),
                    );
                }
                Task::none()
            }

            Message::Animate => {
                self.backdrop.advance();
                Task::none()
            }

            Message::SpacePressed(id) => {
                if Some(id) == self.main_id {
                    self.state.toggle_timer();
                }
                Task::none()
            }

            Message::StartTimer => {
                self.state.start_timer();
                Task::none()
            }

            Message::StopTimer => {
                self.state.stop_timer();
                Task::none()
            }

            Message::ResetTimer => {
                self.state.reset_timer();
                Task::none()
            }

            Message::SetPreset(minutes) => {
                self.state.set_timer(minutes);
                Task::none()
            }

            Message::OpenCustomTimer => {
                if let Some(id) = self.dialog_id {
                    return window::gain_focus(id);
                }
                let (_, open_task) = window::open(self.dialog_settings());
                open_task.map(Message::DialogOpened)
            }

            Message::CustomMinutesChanged(value) => {
                self.custom_minutes = value;
                Task::none()
            }

            Message::ApplyCustomTimer => match parse_custom_minutes(&self.custom_minutes) {
                Ok(minutes) => {
                    self.state.set_timer(minutes);
                    self.close_dialog()
                }
                Err(e) => {
                    warn!("Rejected custom timer input {:?}: {}", self.custom_minutes, e);
                    dialogs::error(e.title(), &e.to_string());
                    Task::none()
                }
            },

            Message::CloseCustomTimer => self.close_dialog(),

            Message::TaskInputChanged(value) => {
                self.state.task_input = value;
                Task::none()
            }

            Message::AddTask => {
                self.state.add_task();
                Task::none()
            }

            Message::SelectTask(index) => {
                self.state.select_task(index);
                Task::none()
            }

            Message::CompleteTask => {
                self.state.complete_selected();
                Task::none()
            }

            Message::DeleteTask => {
                self.state.delete_selected();
                Task::none()
            }

            Message::ClearTasks => {
                if dialogs::confirm("Clear Tasks", "Are you sure you want to clear all tasks?") {
                    self.state.clear_tasks();
                }
                Task::none()
            }

            Message::LaunchInputChanged(value) => {
                self.state.launch_input = value;
                Task::none()
            }

            Message::LaunchApp => {
                match self.state.launch() {
                    Ok(()) | Err(LaunchError::Empty) => {}
                    Err(e) => dialogs::error("Error", &e.to_string()),
                }
                Task::none()
            }

            Message::BrowseApp => {
                if let Some(path) = dialogs::pick_application() {
                    info!("Selected application: {:?}", path);
                    self.state.launch_input = launcher::command_for_path(&path);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self, window_id: window::Id) -> iced::Element<'_, Message> {
        match self.windows.get(&window_id) {
            Some(WindowKind::Dialog) => view::dialog(&self.custom_minutes),
            Some(WindowKind::Main) | None => view::main_window(&self.state, &self.backdrop),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![
            window::resize_events().map(|(id, size)| Message::WindowResized(id, size)),
            window::close_events().map(Message::WindowClosed),
            event::listen_with(|event, status, id| match event {
                Event::Window(window::Event::Moved(position)) => {
                    Some(Message::WindowMoved(id, position))
                }
                // Escape closes the dialog even while the minutes entry has focus
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::CloseCustomTimer),
                // Space typed into an entry is captured and never toggles the timer
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Space),
                    ..
                }) if matches!(status, event::Status::Ignored) => Some(Message::SpacePressed(id)),
                _ => None,
            }),
        ];

        if self.state.countdown.is_running() {
            subs.push(iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick));
        }
        if self.backdrop.is_animated() {
            subs.push(
                iced::time::every(Duration::from_millis(hexgrid::FRAME_MS))
                    .map(|_| Message::Animate),
            );
        }

        Subscription::batch(subs)
    }

    pub fn theme(&self, _window_id: window::Id) -> Theme {
        theme::app_theme()
    }

    /// Dialog sits over the main window when we know where it is
    fn dialog_settings(&self) -> window::Settings {
        let position = match self.main_position {
            Some(origin) => window::Position::Specific(Point::new(
                origin.x + dialog::OFFSET_X,
                origin.y + dialog::OFFSET_Y,
            )),
            None => window::Position::Centered,
        };
        window::Settings {
            size: Size::new(dialog::WIDTH, dialog::HEIGHT),
            position,
            resizable: false,
            level: window::Level::AlwaysOnTop,
            ..Default::default()
        }
    }

    fn close_dialog(&mut self) -> Task<Message> {
        match self.dialog_id.take() {
            Some(id) => {
                self.custom_minutes.clear();
                window::close(id)
            }
            None => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focus_tool::TimerState;
    use tempfile::TempDir;

    fn open_app(temp: &TempDir) -> (FocusApp, window::Id) {
        let (mut app, _) = FocusApp::new(DataDir::new(temp.path()), LaunchOptions::default());
        let id = window::Id::unique();
        let _ = app.update(Message::MainWindowOpened(id));
        (app, id)
    }

    #[test]
    fn test_window_geometry_saved_on_resize_and_move() {
        let temp = TempDir::new().unwrap();
        let (mut app, id) = open_app(&temp);
        let _ = app.update(Message::WindowResized(id, Size::new(520.0, 760.0)));
        let _ = app.update(Message::WindowMoved(id, Point::new(33.0, 44.0)));

        let saved = FocusState::load(DataDir::new(temp.path())).window.geometry();
        assert_eq!((saved.width, saved.height), (520, 760));
        assert_eq!(saved.position(), Some((33, 44)));
    }

    #[test]
    fn test_dialog_geometry_is_not_saved() {
        let temp = TempDir::new().unwrap();
        let (mut app, _) = open_app(&temp);
        let dialog_id = window::Id::unique();
        let _ = app.update(Message::DialogOpened(dialog_id));
        let _ = app.update(Message::WindowResized(dialog_id, Size::new(300.0, 150.0)));
        assert!(!DataDir::new(temp.path()).window_config().exists());
    }

    #[test]
    fn test_space_only_toggles_from_main_window() {
        let temp = TempDir::new().unwrap();
        let (mut app, main_id) = open_app(&temp);
        let dialog_id = window::Id::unique();
        let _ = app.update(Message::DialogOpened(dialog_id));

        let _ = app.update(Message::SpacePressed(dialog_id));
        assert_eq!(app.state.countdown.state(), TimerState::Idle);

        let _ = app.update(Message::SpacePressed(main_id));
        assert!(app.state.countdown.is_running());
        let _ = app.update(Message::SpacePressed(main_id));
        assert_eq!(app.state.countdown.state(), TimerState::Stopped);
    }
}
