// ui/icon.rs - Window Icon
//
// The icon is rasterized at startup: an accent hexagon ring around a dark
// core, matching the backdrop motif.

use iced::window;
use image::{Rgba, RgbaImage};

const SIZE: u32 = 64;
const ACCENT: Rgba<u8> = Rgba([0x4a, 0x9e, 0xff, 0xff]);
const CORE: Rgba<u8> = Rgba([0x1e, 0x1e, 0x1e, 0xff]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Point-in-hexagon test for a hexagon with vertices at angles i*60 degrees
fn inside_hexagon(dx: f32, dy: f32, radius: f32) -> bool {
    let half_height = radius * 3f32.sqrt() / 2.0;
    let dy = dy.abs();
    dy <= half_height && dx.abs() <= radius - dy / 3f32.sqrt()
}

fn rasterize() -> RgbaImage {
    let center = SIZE as f32 / 2.0;
    let outer = center - 2.0;
    let inner = outer * 0.62;
    RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if inside_hexagon(dx, dy, inner) {
            CORE
        } else if inside_hexagon(dx, dy, outer) {
            ACCENT
        } else {
            CLEAR
        }
    })
}

pub fn app_icon() -> Option<window::Icon> {
    let image = rasterize();
    let (width, height) = image.dimensions();
    match window::icon::from_rgba(image.into_raw(), width, height) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("Failed to build window icon: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_has_ring_core_and_clear_corners() {
        let image = rasterize();
        assert_eq!(*image.get_pixel(0, 0), CLEAR);
        assert_eq!(*image.get_pixel(SIZE / 2, SIZE / 2), CORE);
        assert_eq!(*image.get_pixel(4, SIZE / 2), ACCENT);
    }
}
