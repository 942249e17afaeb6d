// ui/backdrop.rs - Hexagon Grid Canvas
//
// Draws the hexagon grid behind the feature boxes. The layout is rebuilt only
// when the canvas size changes; the cached strokes are also redrawn on every
// animation frame.

use std::cell::RefCell;

use iced::widget::canvas::{self, Cache, Frame, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme};

use focus_tool::hexgrid::{wave_intensity, HexGrid, Hexagon};
use focus_tool::Background;

use super::theme::colors;

/// Radians the wave travels per animation frame
const PHASE_STEP: f32 = 0.12;

pub struct Backdrop {
    cache: Cache,
    grid: RefCell<HexGrid>,
    style: Background,
    phase: f32,
}

impl Backdrop {
    pub fn new(style: Background) -> Self {
        Self {
            cache: Cache::new(),
            grid: RefCell::new(HexGrid::default()),
            style,
            phase: 0.0,
        }
    }

    pub fn set_style(&mut self, style: Background) {
        self.style = style;
        self.phase = 0.0;
        self.cache.clear();
    }

    pub fn is_animated(&self) -> bool {
        self.style == Background::Animated
    }

    /// Advance one animation frame
    pub fn advance(&mut self) {
        if self.is_animated() {
            self.phase = (self.phase + PHASE_STEP) % std::f32::consts::TAU;
            self.cache.clear();
        }
    }

    fn outline_color(&self, hexagon: &Hexagon) -> Color {
        match self.style {
            Background::Animated => {
                let t = wave_intensity(hexagon, self.phase);
                mix(colors::HEX_OUTLINE, colors::HEX_GLOW, t)
            }
            Background::Static | Background::None => colors::HEX_OUTLINE,
        }
    }

    fn draw_grid(&self, frame: &mut Frame) {
        let mut grid = self.grid.borrow_mut();
        if grid.refit(frame.width(), frame.height()) {
            log::debug!("Hexagon grid rebuilt for {}x{}", frame.width(), frame.height());
        }
        for hexagon in grid.hexagons() {
            let stroke = Stroke::default()
                .with_width(1.0)
                .with_color(self.outline_color(hexagon));
            frame.stroke(&hexagon_path(hexagon), stroke);
        }
    }
}

impl<Message> canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        if self.style == Background::None {
            return Vec::new();
        }
        let grid = self
            .cache
            .draw(renderer, bounds.size(), |frame| self.draw_grid(frame));
        vec![grid]
    }
}

fn hexagon_path(hexagon: &Hexagon) -> Path {
    let vertices = hexagon.vertices();
    Path::new(|builder| {
        let (x, y) = vertices[0];
        builder.move_to(Point::new(x, y));
        for &(x, y) in &vertices[1..] {
            builder.line_to(Point::new(x, y));
        }
        builder.close();
    })
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::from_rgb(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
    )
}
