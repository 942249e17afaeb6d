// hexgrid.rs - Hexagon Backdrop Layout
//
// Pure layout math for the decorative hexagon grid. Drawing happens in the
// UI crate on a canvas; this module only says where the hexagons go and how
// bright each one is at a given animation phase.

use std::f32::consts::PI;

use crate::constants::hexgrid::{RADIUS, SPACING};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hexagon {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Hexagon {
    /// The six corners, starting at angle 0 and going counter-clockwise
    pub fn vertices(&self) -> [(f32, f32); 6] {
        std::array::from_fn(|i| {
            let angle = i as f32 * PI / 3.0;
            (self.x + self.radius * angle.cos(), self.y + self.radius * angle.sin())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexGrid {
    width: f32,
    height: f32,
    hexagons: Vec<Hexagon>,
}

impl HexGrid {
    /// Lay out a grid that covers `width + spacing` x `height + spacing`
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_spacing(width, height, SPACING, RADIUS)
    }

    pub fn with_spacing(width: f32, height: f32, spacing: f32, radius: f32) -> Self {
        let mut hexagons = Vec::new();
        if width > 1.0 && height > 1.0 && spacing > 0.0 && radius > 0.0 {
            let rows = ((height + spacing) / spacing).ceil() as usize;
            let cols = ((width + spacing) / spacing).ceil() as usize;
            for row in 0..rows {
                let y = row as f32 * spacing;
                // Odd rows shift right by half a cell
                let shift = if row % 2 == 1 { spacing / 2.0 } else { 0.0 };
                for col in 0..cols {
                    hexagons.push(Hexagon { x: col as f32 * spacing + shift, y, radius });
                }
            }
        }
        Self { width, height, hexagons }
    }

    pub fn hexagons(&self) -> &[Hexagon] {
        &self.hexagons
    }

    pub fn len(&self) -> usize {
        self.hexagons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexagons.is_empty()
    }

    /// Whether this layout was made for the given canvas size
    pub fn fits(&self, width: f32, height: f32) -> bool {
        (self.width - width).abs() < 0.5 && (self.height - height).abs() < 0.5
    }

    /// Regenerate for a new canvas size. Returns false when the layout already fits.
    pub fn refit(&mut self, width: f32, height: f32) -> bool {
        if self.fits(width, height) {
            return false;
        }
        *self = Self::new(width, height);
        true
    }
}

/// Brightness in `0.0..=1.0` of a hexagon for the travelling wave animation
pub fn wave_intensity(hexagon: &Hexagon, phase: f32) -> f32 {
    let wave = ((hexagon.x + hexagon.y) / 120.0 - phase).sin();
    0.5 + 0.5 * wave
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_area_with_margin() {
        let grid = HexGrid::new(450.0, 700.0);
        // x in 0..490 step 40 -> 13 columns, y in 0..740 -> 19 rows
        assert_eq!(grid.len(), 13 * 19);
        assert!(grid.fits(450.0, 700.0));
        assert!(!grid.fits(451.0, 700.0));
    }

    #[test]
    fn test_refit_only_on_size_change() {
        let mut grid = HexGrid::default();
        assert!(grid.is_empty());
        assert!(grid.refit(450.0, 700.0));
        assert_eq!(grid.len(), 13 * 19);
        assert!(!grid.refit(450.2, 700.0));

        assert!(grid.refit(450.0, 200.0));
        assert_eq!(grid.len(), 13 * 6);
        assert!(grid.fits(450.0, 200.0));
    }

    #[test]
    fn test_odd_rows_are_offset() {
        let grid = HexGrid::with_spacing(100.0, 100.0, 40.0, 8.0);
        let cols = 4;
        let first_row = &grid.hexagons()[..cols];
        let second_row = &grid.hexagons()[cols..cols * 2];
        assert_eq!(first_row[0].x, 0.0);
        assert_eq!(second_row[0].x, 20.0);
        assert_eq!(second_row[0].y, 40.0);
    }

    #[test]
    fn test_degenerate_size_is_empty() {
        assert!(HexGrid::new(0.0, 700.0).is_empty());
        assert!(HexGrid::new(450.0, 1.0).is_empty());
    }

    #[test]
    fn test_vertices_lie_on_circle() {
        let hex = Hexagon { x: 10.0, y: 20.0, radius: 8.0 };
        let vertices = hex.vertices();
        assert!((vertices[0].0 - 18.0).abs() < 1e-4);
        assert!((vertices[0].1 - 20.0).abs() < 1e-4);
        for (vx, vy) in vertices {
            let dist = ((vx - 10.0).powi(2) + (vy - 20.0).powi(2)).sqrt();
            assert!((dist - 8.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_wave_intensity_bounds() {
        let hex = Hexagon { x: 40.0, y: 80.0, radius: 8.0 };
        for step in 0..64 {
            let v = wave_intensity(&hex, step as f32 * 0.1);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
