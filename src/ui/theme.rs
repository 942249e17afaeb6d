// ui/theme.rs - Focus Tool Visual Theme
//
// Dark palette with a blue accent, plus the button and container styles
// shared by every section.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

/// Color palette (dark glass look)
pub mod colors {
    use iced::Color;

    macro_rules! rgb {
        ($r:expr, $g:expr, $b:expr) => {
            Color::from_rgb($r as f32 / 255.0, $g as f32 / 255.0, $b as f32 / 255.0)
        };
    }

    pub const BG: Color = rgb!(0x1e, 0x1e, 0x1e);
    pub const TITLE_BAR: Color = rgb!(0x1a, 0x1a, 0x1a);
    pub const FRAME: Color = rgb!(0x2d, 0x2d, 0x2d);
    pub const ENTRY: Color = rgb!(0x1e, 0x1e, 0x1e);

    pub const ACCENT: Color = rgb!(0x4a, 0x9e, 0xff);
    pub const ACCENT_HOVER: Color = rgb!(0x3a, 0x8e, 0xef);

    pub const TEXT: Color = Color::WHITE;
    pub const TEXT_SECONDARY: Color = rgb!(0xb0, 0xb0, 0xb0);

    pub const GREEN: Color = rgb!(0x28, 0xa7, 0x45);
    pub const GREEN_HOVER: Color = rgb!(0x21, 0x88, 0x38);
    pub const RED: Color = rgb!(0xdc, 0x35, 0x45);
    pub const RED_HOVER: Color = rgb!(0xc8, 0x23, 0x33);
    pub const TEAL: Color = rgb!(0x17, 0xa2, 0xb8);
    pub const TEAL_HOVER: Color = rgb!(0x13, 0x84, 0x96);
    pub const ORANGE: Color = rgb!(0xfd, 0x7e, 0x14);
    pub const ORANGE_HOVER: Color = rgb!(0xe8, 0x69, 0x0b);
    pub const PURPLE: Color = rgb!(0x6f, 0x42, 0xc1);
    pub const PURPLE_HOVER: Color = rgb!(0x5a, 0x32, 0xa3);
    pub const GREY: Color = rgb!(0x55, 0x55, 0x55);
    pub const GREY_HOVER: Color = rgb!(0x44, 0x44, 0x44);
    pub const SLATE: Color = rgb!(0x6c, 0x75, 0x7d);
    pub const SLATE_HOVER: Color = rgb!(0x5a, 0x62, 0x68);
    pub const DISABLED: Color = rgb!(0x66, 0x66, 0x66);

    pub const HEX_OUTLINE: Color = rgb!(0x40, 0x40, 0x40);
    pub const HEX_GLOW: Color = rgb!(0x4a, 0x6e, 0x9a);
}

pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Button color pair: resting and hovered/pressed
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    pub base: Color,
    pub hover: Color,
}

impl Tone {
    pub const ACCENT: Tone = Tone { base: colors::ACCENT, hover: colors::ACCENT_HOVER };
    pub const GREEN: Tone = Tone { base: colors::GREEN, hover: colors::GREEN_HOVER };
    pub const RED: Tone = Tone { base: colors::RED, hover: colors::RED_HOVER };
    pub const TEAL: Tone = Tone { base: colors::TEAL, hover: colors::TEAL_HOVER };
    pub const ORANGE: Tone = Tone { base: colors::ORANGE, hover: colors::ORANGE_HOVER };
    pub const PURPLE: Tone = Tone { base: colors::PURPLE, hover: colors::PURPLE_HOVER };
    pub const GREY: Tone = Tone { base: colors::GREY, hover: colors::GREY_HOVER };
    pub const SLATE: Tone = Tone { base: colors::SLATE, hover: colors::SLATE_HOVER };

    /// Colors for the preset buttons, in order
    pub fn preset(index: usize) -> Tone {
        const CYCLE: [Tone; 3] = [Tone::TEAL, Tone::GREEN, Tone::ORANGE];
        CYCLE[index % CYCLE.len()]
    }
}

/// App theme: iced's dark theme re-tinted to the widget palette
pub fn app_theme() -> Theme {
    Theme::custom(
        "Focus".to_string(),
        Palette {
            background: colors::BG,
            text: colors::TEXT,
            primary: colors::ACCENT,
            success: colors::GREEN,
            danger: colors::RED,
        },
    )
}

/// Flat colored button; disabled buttons turn grey
pub fn filled(tone: Tone) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => tone.hover,
            button::Status::Disabled => colors::DISABLED,
            button::Status::Active => tone.base,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
        }
    }
}

/// Transparent title bar button; `danger` turns red on hover (close)
pub fn title_button(danger: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed if danger => colors::RED,
            button::Status::Hovered | button::Status::Pressed => Color::from_rgb8(0x33, 0x33, 0x33),
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: colors::TEXT,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Row in the task list; completed tasks are drawn in green
pub fn task_row(
    selected: bool,
    completed: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let bg = match (selected, status) {
            (true, _) => colors::ACCENT,
            (false, button::Status::Hovered) => Color::from_rgba(1.0, 1.0, 1.0, 0.06),
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: if completed { colors::GREEN } else { colors::TEXT },
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub fn title_bar(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::TITLE_BAR)),
        ..Default::default()
    }
}

pub fn box_header(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::ACCENT)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

pub fn feature_box(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::FRAME)),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

pub fn list_frame(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::ENTRY)),
        border: Border {
            color: colors::ACCENT,
            width: 1.0,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}

/// Main window body; borderless windows get a thin accent outline
pub fn window_body(outlined: bool) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(colors::BG)),
        border: Border {
            color: colors::ACCENT,
            width: if outlined { 1.0 } else { 0.0 },
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn dialog_body(_: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::FRAME)),
        text_color: Some(colors::TEXT),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_rows_are_green() {
        let theme = app_theme();
        let done = task_row(false, true)(&theme, button::Status::Active);
        assert_eq!(done.text_color, colors::GREEN);
        let selected_done = task_row(true, true)(&theme, button::Status::Hovered);
        assert_eq!(selected_done.text_color, colors::GREEN);

        let open = task_row(false, false)(&theme, button::Status::Active);
        assert_eq!(open.text_color, colors::TEXT);
    }
}
