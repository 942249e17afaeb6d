// ui/view.rs - Widget Trees
//
// Main window: title bar (or a toolbar under native decorations), then the
// Timer, Task Management and Quick Launch boxes over the hexagon backdrop.
// Compact mode keeps the title bar and the timer only.

use iced::widget::{
    button, canvas, column, container, horizontal_space, mouse_area, row, scrollable, stack,
    text, text_input, Column,
};
use iced::{Alignment, Element, Length};

use focus_tool::constants::window::TITLE_BAR_HEIGHT;
use focus_tool::{FocusState, TitleBar};

use super::backdrop::Backdrop;
use super::theme::{self, colors, Tone, BOLD};
use super::{Message, CUSTOM_MINUTES_INPUT};

const TASK_LIST_HEIGHT: f32 = 160.0;

pub fn main_window<'a>(state: &'a FocusState, backdrop: &'a Backdrop) -> Element<'a, Message> {
    let custom_chrome = state.settings.title_bar == TitleBar::Custom;
    let compact = state.window.is_compact();

    let header: Element<'a, Message> = if custom_chrome {
        title_bar(compact)
    } else {
        toolbar(state, compact)
    };

    let mut sections = column![timer_box(state)].spacing(12).padding(12);
    if !compact {
        sections = sections
            .push(tasks_box(state))
            .push(launcher_box(state))
            .push(
                text(state.status.as_str())
                    .size(12)
                    .color(colors::TEXT_SECONDARY),
            );
    }

    let content = stack![
        canvas(backdrop).width(Length::Fill).height(Length::Fill),
        scrollable(sections).height(Length::Fill),
    ];

    container(column![header, content])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::window_body(custom_chrome))
        .into()
}

pub fn dialog(minutes: &str) -> Element<'_, Message> {
    let input = text_input("", minutes)
        .id(text_input::Id::new(CUSTOM_MINUTES_INPUT))
        .on_input(Message::CustomMinutesChanged)
        .on_submit(Message::ApplyCustomTimer)
        .padding(6);

    let buttons = row![
        horizontal_space(),
        action("Set", Tone::GREEN, Some(Message::ApplyCustomTimer)),
        action("Cancel", Tone::GREY, Some(Message::CloseCustomTimer)),
    ]
    .spacing(8);

    container(column![text("Enter minutes:"), input, buttons].spacing(10))
        .padding(15)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::dialog_body)
        .into()
}

fn title_bar<'a>(compact: bool) -> Element<'a, Message> {
    let title = mouse_area(
        container(text("Focus Tool").font(BOLD).size(14))
            .padding([0, 10])
            .width(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::DragWindow);

    let chrome_button = |label: &'a str, message: Message, danger: bool| {
        button(text(label).size(14))
            .width(TITLE_BAR_HEIGHT as f32)
            .height(Length::Fill)
            .style(theme::title_button(danger))
            .on_press(message)
    };

    container(
        row![
            title,
            chrome_button("◐", Message::CycleBackground, false),
            chrome_button("─", Message::MinimizeWindow, false),
            chrome_button(if compact { "▣" } else { "□" }, Message::ToggleCompact, false),
            chrome_button("×", Message::Exit, true),
        ]
        .align_y(Alignment::Center),
    )
    .height(TITLE_BAR_HEIGHT as f32)
    .width(Length::Fill)
    .style(theme::title_bar)
    .into()
}

/// Replaces the title bar buttons when the OS draws the frame
fn toolbar<'a>(state: &'a FocusState, compact: bool) -> Element<'a, Message> {
    let background = format!("Background: {}", state.settings.background);
    container(
        row![
            action(
                if compact { "Expand" } else { "Compact" },
                Tone::SLATE,
                Some(Message::ToggleCompact)
            ),
            action(background, Tone::SLATE, Some(Message::CycleBackground)),
            horizontal_space(),
            action("Exit", Tone::RED, Some(Message::Exit)),
        ]
        .spacing(6),
    )
    .padding(6)
    .width(Length::Fill)
    .style(theme::title_bar)
    .into()
}

fn timer_box(state: &FocusState) -> Element<'_, Message> {
    let countdown = &state.countdown;
    let running = countdown.is_running();

    let display = text(countdown.display())
        .size(48)
        .font(BOLD)
        .color(colors::ACCENT);

    let presets = state
        .settings
        .presets
        .iter()
        .enumerate()
        .fold(row![].spacing(6), |row, (i, &minutes)| {
            row.push(action(
                format!("{}m", minutes),
                Tone::preset(i),
                Some(Message::SetPreset(minutes)),
            ))
        })
        .push(action("Custom", Tone::PURPLE, Some(Message::OpenCustomTimer)));

    let controls = row![
        action("Start", Tone::GREEN, (!running).then_some(Message::StartTimer)),
        action("Stop", Tone::RED, running.then_some(Message::StopTimer)),
        action("Reset", Tone::GREY, Some(Message::ResetTimer)),
    ]
    .spacing(6);

    feature_box(
        "Timer",
        column![display, presets, controls]
            .spacing(10)
            .align_x(Alignment::Center)
            .width(Length::Fill),
    )
}

fn tasks_box(state: &FocusState) -> Element<'_, Message> {
    let input = row![
        text_input("Enter a new task...", &state.task_input)
            .on_input(Message::TaskInputChanged)
            .on_submit(Message::AddTask)
            .padding(6),
        action("Add Task", Tone::ACCENT, Some(Message::AddTask)),
    ]
    .spacing(6);

    let rows = Column::with_children(state.tasks.iter().enumerate().map(|(i, task)| {
        button(text(task.label()).size(13))
            .width(Length::Fill)
            .style(theme::task_row(state.selected_task == Some(i), task.completed))
            .on_press(Message::SelectTask(i))
            .into()
    }));

    let list = container(scrollable(rows).height(TASK_LIST_HEIGHT))
        .padding(2)
        .width(Length::Fill)
        .style(theme::list_frame);

    let has_selection = state.selected_task.is_some();
    let buttons = row![
        action("Complete", Tone::GREEN, has_selection.then_some(Message::CompleteTask)),
        action("Delete", Tone::RED, has_selection.then_some(Message::DeleteTask)),
        horizontal_space(),
        text(format!(
            "{}/{} done",
            state.tasks.completed_count(),
            state.tasks.len()
        ))
        .size(12)
        .color(colors::TEXT_SECONDARY),
        action(
            "Clear All",
            Tone::GREY,
            (!state.tasks.is_empty()).then_some(Message::ClearTasks)
        ),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    feature_box("Task Management", column![input, list, buttons].spacing(8))
}

fn launcher_box(state: &FocusState) -> Element<'_, Message> {
    let input = text_input("Application or command", &state.launch_input)
        .on_input(Message::LaunchInputChanged)
        .on_submit(Message::LaunchApp)
        .padding(6);

    let buttons = row![
        action("Launch App", Tone::PURPLE, Some(Message::LaunchApp)),
        action("Browse Files", Tone::SLATE, Some(Message::BrowseApp)),
    ]
    .spacing(6);

    feature_box("Quick Launch", column![input, buttons].spacing(8))
}

/// Panel with an accent header strip
fn feature_box<'a>(title: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let header = container(text(title).font(BOLD).size(14))
        .padding([6, 10])
        .width(Length::Fill)
        .style(theme::box_header);

    container(column![header, container(content).padding(10)])
        .width(Length::Fill)
        .style(theme::feature_box)
        .into()
}

/// Filled button; `None` renders it disabled
fn action<'a>(
    label: impl text::IntoFragment<'a>,
    tone: Tone,
    message: Option<Message>,
) -> iced::widget::Button<'a, Message> {
    button(text(label).size(13))
        .padding([6, 12])
        .style(theme::filled(tone))
        .on_press_maybe(message)
}
