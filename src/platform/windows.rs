// platform/windows.rs - Win32 Resize Frame for the Borderless Window
//
// Subclasses the main window and answers WM_NCHITTEST with the resize edge
// under the cursor, so Windows drives the resize loop itself.

use iced::window::raw_window_handle::{HasWindowHandle, RawWindowHandle};
use iced::{window, Task};
use log::{error, info};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::UI::Shell::{DefSubclassProc, SetWindowSubclass};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowRect, HTBOTTOM, HTBOTTOMLEFT, HTBOTTOMRIGHT, HTLEFT, HTRIGHT, HTTOP, HTTOPLEFT,
    HTTOPRIGHT, WM_NCHITTEST,
};

use super::{hit_test, FrameRect, ResizeEdge};

const SUBCLASS_ID: usize = 1;

unsafe extern "system" fn resize_subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _uidsubclass: usize,
    _dwrefdata: usize,
) -> LRESULT {
    if msg == WM_NCHITTEST {
        let x = (lparam.0 & 0xFFFF) as i16 as i32;
        let y = ((lparam.0 >> 16) & 0xFFFF) as i16 as i32;

        let mut rect = RECT::default();
        if GetWindowRect(hwnd, &mut rect).is_ok() {
            let frame = FrameRect {
                left: rect.left,
                top: rect.top,
                right: rect.right,
                bottom: rect.bottom,
            };
            if let Some(edge) = hit_test(frame, x, y) {
                let code = match edge {
                    ResizeEdge::TopLeft => HTTOPLEFT,
                    ResizeEdge::Top => HTTOP,
                    ResizeEdge::TopRight => HTTOPRIGHT,
                    ResizeEdge::Left => HTLEFT,
                    ResizeEdge::Right => HTRIGHT,
                    ResizeEdge::BottomLeft => HTBOTTOMLEFT,
                    ResizeEdge::Bottom => HTBOTTOM,
                    ResizeEdge::BottomRight => HTBOTTOMRIGHT,
                };
                return LRESULT(code as isize);
            }
        }
    }

    DefSubclassProc(hwnd, msg, wparam, lparam)
}

pub fn install_resize_subclass<T: Send + 'static>(id: window::Id) -> Task<T> {
    window::run_with_handle(id, |handle| match handle.window_handle() {
        Ok(raw) => {
            if let RawWindowHandle::Win32(win32) = raw.as_raw() {
                let hwnd = HWND(win32.hwnd.get() as *mut _);
                unsafe {
                    let _ = SetWindowSubclass(hwnd, Some(resize_subclass_proc), SUBCLASS_ID, 0);
                }
                info!("Installed resize subclass on main window");
            } else {
                info!("Not a Win32 window handle, skipping resize subclass");
            }
        }
        Err(e) => error!("Failed to get window handle: {:?}", e),
    })
    .discard()
}
