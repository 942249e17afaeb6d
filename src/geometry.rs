// geometry.rs - Window Geometry Parsing & Persistence
//
// Geometry strings follow the X11 convention: "WxH", optionally followed by
// signed X and Y offsets ("450x700+100+200", "450x700-8+0", "450x700+-8+0").
// The persisted form is a small JSON object.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::window::{
    COMPACT_HEIGHT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH,
};
use crate::paths::write_file;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("geometry '{0}' has no 'x' between width and height")]
    MissingSeparator(String),
    #[error("invalid number '{0}' in geometry")]
    InvalidNumber(String),
    #[error("geometry size must be non-zero")]
    ZeroSize,
    #[error("geometry has an x offset but no y offset")]
    IncompleteOffset,
}

/// Window size with an optional screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            x: None,
            y: None,
        }
    }
}

impl Geometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, x: None, y: None }
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        Some((self.x?, self.y?))
    }

    /// Grow to the expanded-mode minimum size
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
            ..self
        }
    }

    /// Top-left corner that centers this size on a screen
    pub fn centered_on(&self, screen_width: u32, screen_height: u32) -> (i32, i32) {
        (
            (screen_width as i32 / 2) - (self.width as i32 / 2),
            (screen_height as i32 / 2) - (self.height as i32 / 2),
        )
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if let Some((x, y)) = self.position() {
            write!(f, "{:+}{:+}", x, y)?;
        }
        Ok(())
    }
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let offsets_at = s.find(['+', '-']).unwrap_or(s.len());
        let (size, offsets) = s.split_at(offsets_at);

        let (w, h) = size
            .split_once('x')
            .ok_or_else(|| GeometryError::MissingSeparator(s.to_string()))?;
        let width = parse_number::<u32>(w)?;
        let height = parse_number::<u32>(h)?;
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroSize);
        }

        let mut geometry = Geometry::new(width, height);
        let offsets = split_offsets(offsets)?;
        match offsets.as_slice() {
            [] => {}
            [x, y] => {
                geometry.x = Some(*x);
                geometry.y = Some(*y);
            }
            _ => return Err(GeometryError::IncompleteOffset),
        }
        Ok(geometry)
    }
}

fn parse_number<T: FromStr>(raw: &str) -> Result<T, GeometryError> {
    raw.trim()
        .parse()
        .map_err(|_| GeometryError::InvalidNumber(raw.to_string()))
}

/// Split "+10-20" or "+-10+20" into signed offsets.
fn split_offsets(raw: &str) -> Result<Vec<i32>, GeometryError> {
    let mut values = Vec::new();
    let mut rest = raw;
    while !rest.is_empty() {
        // Leading '+' is the separator; a '-' right after it belongs to the number.
        let body = rest.strip_prefix('+').unwrap_or(rest);
        let sign_len = usize::from(body.starts_with('-'));
        let end = body[sign_len..]
            .find(['+', '-'])
            .map_or(body.len(), |i| i + sign_len);
        let (number, tail) = body.split_at(end);
        values.push(parse_number::<i32>(number)?);
        if values.len() > 2 {
            return Err(GeometryError::IncompleteOffset);
        }
        rest = tail;
    }
    Ok(values)
}

/// Persisted main-window geometry plus the compact/expanded toggle
#[derive(Debug, Clone)]
pub struct WindowConfig {
    path: PathBuf,
    geometry: Geometry,
    compact: bool,
}

impl WindowConfig {
    /// Load from `path`, falling back to 450x700 with no position
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let geometry = if path.exists() {
            match read_geometry(&path) {
                Ok(geometry) => {
                    info!("Loaded window config: {}", geometry);
                    geometry.clamped()
                }
                Err(e) => {
                    error!("Error loading window config: {:#}", e);
                    Geometry::default()
                }
            }
        } else {
            info!("No saved config, using default size");
            Geometry::default()
        };
        Self { path, geometry, compact: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expanded-mode geometry; compact mode never overwrites the height
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Size the window should currently have
    pub fn current_size(&self) -> (u32, u32) {
        if self.compact {
            (self.geometry.width, COMPACT_HEIGHT)
        } else {
            (self.geometry.width, self.geometry.height)
        }
    }

    /// Record a resize reported by the window system.
    ///
    /// Returns a corrected size when the window went below the minimum
    /// while expanded.
    pub fn resized(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        self.geometry.width = width.max(MIN_WIDTH);
        if self.compact {
            return (width < MIN_WIDTH).then_some((MIN_WIDTH, height));
        }
        self.geometry.height = height.max(MIN_HEIGHT);
        let corrected = (self.geometry.width, self.geometry.height);
        (corrected != (width, height)).then_some(corrected)
    }

    pub fn moved(&mut self, x: i32, y: i32) {
        self.geometry.x = Some(x);
        self.geometry.y = Some(y);
    }

    /// Flip compact mode and return the size to apply
    pub fn toggle_compact(&mut self) -> (u32, u32) {
        self.compact = !self.compact;
        info!(
            "{}",
            if self.compact { "Collapsing to compact mode" } else { "Expanding to full mode" }
        );
        self.current_size()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.geometry)
            .context("Failed to serialize window config")?;
        write_file(&self.path, &json)
            .with_context(|| format!("Failed to write {:?}", self.path))?;
        debug!("Window config saved: {}", self.geometry);
        Ok(())
    }
}

fn read_geometry(path: &Path) -> anyhow::Result<Geometry> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&contents).context("Failed to parse window config")
}
