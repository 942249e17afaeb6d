// platform/mod.rs - Platform Abstraction Layer
//
// Borderless windows lose the window manager's resize frame. On Windows we put
// it back by answering WM_NCHITTEST ourselves; elsewhere the window keeps the
// toolkit's default behavior.

#[cfg(windows)]
mod windows;

use iced::{window, Task};

use focus_tool::constants::window::RESIZE_BORDER;

/// Part of the window frame a screen point falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(windows), allow(dead_code))]
pub enum ResizeEdge {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// Window rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(windows), allow(dead_code))]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Map a screen point to a resize edge. Corners get a double-size hit area.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn hit_test(rect: FrameRect, x: i32, y: i32) -> Option<ResizeEdge> {
    let border = RESIZE_BORDER;
    let corner = border * 2;

    let within = |v: i32, lo: i32, hi: i32| v >= lo && v < hi;
    if !within(x, rect.left, rect.right) || !within(y, rect.top, rect.bottom) {
        return None;
    }

    let near_left = x < rect.left + corner;
    let near_right = x >= rect.right - corner;
    let near_top = y < rect.top + corner;
    let near_bottom = y >= rect.bottom - corner;

    let edge = match (near_top, near_bottom, near_left, near_right) {
        (true, _, true, _) => ResizeEdge::TopLeft,
        (true, _, _, true) => ResizeEdge::TopRight,
        (_, true, true, _) => ResizeEdge::BottomLeft,
        (_, true, _, true) => ResizeEdge::BottomRight,
        _ if x < rect.left + border => ResizeEdge::Left,
        _ if x >= rect.right - border => ResizeEdge::Right,
        _ if y < rect.top + border => ResizeEdge::Top,
        _ if y >= rect.bottom - border => ResizeEdge::Bottom,
        _ => return None,
    };
    Some(edge)
}

/// Give a borderless main window resizable edges
#[cfg(windows)]
pub fn enable_borderless_resize<T: Send + 'static>(id: window::Id) -> Task<T> {
    windows::install_resize_subclass(id)
}

#[cfg(not(windows))]
pub fn enable_borderless_resize<T: Send + 'static>(_id: window::Id) -> Task<T> {
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: FrameRect = FrameRect { left: 100, top: 100, right: 550, bottom: 800 };

    #[test]
    fn test_corners() {
        assert_eq!(hit_test(RECT, 100, 100), Some(ResizeEdge::TopLeft));
        assert_eq!(hit_test(RECT, 110, 112), Some(ResizeEdge::TopLeft));
        assert_eq!(hit_test(RECT, 549, 100), Some(ResizeEdge::TopRight));
        assert_eq!(hit_test(RECT, 100, 799), Some(ResizeEdge::BottomLeft));
        assert_eq!(hit_test(RECT, 540, 790), Some(ResizeEdge::BottomRight));
    }

    #[test]
    fn test_edges() {
        assert_eq!(hit_test(RECT, 103, 400), Some(ResizeEdge::Left));
        assert_eq!(hit_test(RECT, 545, 400), Some(ResizeEdge::Right));
        assert_eq!(hit_test(RECT, 300, 104), Some(ResizeEdge::Top));
        assert_eq!(hit_test(RECT, 300, 795), Some(ResizeEdge::Bottom));
    }

    #[test]
    fn test_interior_and_outside() {
        assert_eq!(hit_test(RECT, 300, 400), None);
        assert_eq!(hit_test(RECT, 300, 110), None);
        assert_eq!(hit_test(RECT, 99, 400), None);
        assert_eq!(hit_test(RECT, 550, 400), None);
    }
}
