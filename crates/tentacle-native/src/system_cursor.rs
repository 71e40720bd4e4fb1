// Screen-space cursor position straight from the OS. A click-through window
// receives no pointer events, so the host asks for the position every tick.

use glam::Vec2;

#[cfg(target_os = "windows")]
mod imp {
    use glam::Vec2;
    use windows_sys::Win32::Foundation::POINT;
    use windows_sys::Win32::UI::WindowsAndMessaging::GetCursorPos;

    pub struct Query;

    impl Query {
        pub fn open() -> Option<Self> {
            Some(Query)
        }

        pub fn position(&mut self) -> Option<Vec2> {
            let mut p = POINT { x: 0, y: 0 };
            // SAFETY: `p` is a valid, writable POINT for the duration of the call.
            let ok = unsafe { GetCursorPos(&mut p) };
            (ok != 0).then(|| Vec2::new(p.x as f32, p.y as f32))
        }
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
mod imp {
    use std::os::raw::{c_int, c_uint};
    use std::ptr;

    use glam::Vec2;
    use x11_dl::xlib;

    pub struct Query {
        xlib: xlib::Xlib,
        display: *mut xlib::Display,
        root: xlib::Window,
    }

    impl Query {
        /// `None` without an X server (e.g. a pure Wayland session).
        pub fn open() -> Option<Self> {
            let xlib = xlib::Xlib::open().ok()?;
            // SAFETY: a null name selects $DISPLAY; the result is checked before use.
            let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
            if display.is_null() {
                return None;
            }
            // SAFETY: `display` is an open connection.
            let root = unsafe { (xlib.XDefaultRootWindow)(display) };
            Some(Self {
                xlib,
                display,
                root,
            })
        }

        pub fn position(&mut self) -> Option<Vec2> {
            let (mut root_ret, mut child) = (0, 0);
            let (mut root_x, mut root_y, mut win_x, mut win_y): (c_int, c_int, c_int, c_int) =
                (0, 0, 0, 0);
            let mut mask: c_uint = 0;
            // SAFETY: the connection stays open until drop; every out-pointer is a local.
            let on_screen = unsafe {
                (self.xlib.XQueryPointer)(
                    self.display,
                    self.root,
                    &mut root_ret,
                    &mut child,
                    &mut root_x,
                    &mut root_y,
                    &mut win_x,
                    &mut win_y,
                    &mut mask,
                )
            };
            (on_screen != 0).then(|| Vec2::new(root_x as f32, root_y as f32))
        }
    }

    impl Drop for Query {
        fn drop(&mut self) {
            // SAFETY: opened in `open` and closed exactly once.
            unsafe {
                (self.xlib.XCloseDisplay)(self.display);
            }
        }
    }
}

#[cfg(not(any(
    target_os = "windows",
    all(
        unix,
        not(any(target_os = "macos", target_os = "ios", target_os = "android"))
    )
)))]
mod imp {
    use glam::Vec2;

    pub struct Query;

    impl Query {
        pub fn open() -> Option<Self> {
            None
        }

        pub fn position(&mut self) -> Option<Vec2> {
            None
        }
    }
}

/// OS cursor query, when the platform offers one.
pub struct SystemCursor(imp::Query);

impl SystemCursor {
    pub fn open() -> Option<Self> {
        let query = imp::Query::open();
        if query.is_none() {
            log::warn!("[pointer] no global cursor query; estimating from device motion");
        }
        query.map(SystemCursor)
    }

    /// Current cursor position in screen pixels.
    pub fn position(&mut self) -> Option<Vec2> {
        self.0.position()
    }
}
