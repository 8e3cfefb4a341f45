//! The seam to the host windowing system.
//!
//! [`HostWindow`] is the narrow set of commands the window layer issues to
//! the platform. The layer never owns the platform window; it holds a host
//! implementation and identifies the window by a [`NativeWindowId`].
//!
//! Hosts report asynchronous outcomes (animation completion, user-driven
//! state changes) as [`HostEvent`]s, which the application forwards to
//! `NativeWindow::handle_host_event`.

use std::fmt;

use crate::color::Color;
use crate::geometry::Rect;
use crate::window::properties::Capability;
use crate::window::transition::TransitionToken;

/// A non-owning identifier for a host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeWindowId(u64);

impl NativeWindowId {
    /// Create an identifier from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NativeWindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[cfg(feature = "winit-host")]
impl From<winit::window::WindowId> for NativeWindowId {
    fn from(id: winit::window::WindowId) -> Self {
        Self(u64::from(id))
    }
}

#[cfg(feature = "winit-host")]
impl From<NativeWindowId> for winit::window::WindowId {
    fn from(id: NativeWindowId) -> Self {
        winit::window::WindowId::from(id.0)
    }
}

/// How the host carried out a full-screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostTransition {
    /// The change is complete.
    Finished,
    /// The change is animating; completion arrives as
    /// [`HostEvent::TransitionFinished`] with the token passed in.
    Animating,
}

/// Notifications from the host window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// An animated transition started with this token has completed.
    TransitionFinished(TransitionToken),
    /// The user put the window into native full screen.
    EnteredFullscreen,
    /// The user took the window out of native full screen.
    ExitedFullscreen,
    /// The user minimized the window.
    Minimized,
    /// The window was restored from minimized by the user.
    Restored,
    /// The user zoomed the window from its title bar.
    Maximized,
    /// The user un-zoomed the window.
    Unmaximized,
    /// The frame moved.
    Moved(Rect),
    /// The frame changed size.
    Resized(Rect),
}

/// Commands the window layer issues to the platform.
///
/// The required methods are the ones the mode state machine depends on.
/// Cosmetic commands have empty default implementations so a host without the
/// feature simply ignores them.
pub trait HostWindow: Send {
    /// The host's identifier for this window.
    fn id(&self) -> NativeWindowId;

    /// The current window frame.
    fn frame(&self) -> Rect;

    /// Move and resize the window. Returns the frame actually applied, which
    /// may be clamped to the screen.
    fn set_frame(&mut self, frame: Rect, animate: bool) -> Rect;

    /// The full frame of the screen holding the window.
    fn screen_frame(&self) -> Rect;

    /// The screen area not covered by the dock, taskbar or menu bar.
    fn work_area(&self) -> Rect;

    /// Show or hide the window.
    fn set_visible(&mut self, visible: bool, activate: bool);

    /// Give the window keyboard focus.
    fn focus(&mut self);

    /// Whether the window currently has keyboard focus.
    fn is_focused(&self) -> bool;

    /// Set the title bar text.
    fn set_title(&mut self, title: &str);

    /// Miniaturize the window, or bring it back.
    fn set_minimized(&mut self, minimized: bool);

    /// Zoom the window to the work area, or back to its previous frame.
    fn set_maximized(&mut self, maximized: bool);

    /// Enter or leave native full screen.
    fn set_fullscreen(&mut self, fullscreen: bool, token: TransitionToken) -> HostTransition;

    /// Enable or disable a window capability.
    fn set_capability(&mut self, capability: Capability, enabled: bool);

    /// Set the absolute window level.
    fn set_window_level(&mut self, level: i32);

    /// Set the window opacity. Returns the value applied; `NaN` is treated
    /// as fully opaque.
    fn set_opacity(&mut self, opacity: f64) -> f64 {
        normalize_opacity(opacity)
    }

    /// Paint the area behind the content.
    fn set_background_color(&mut self, _color: Color) {}

    fn set_has_shadow(&mut self, _has_shadow: bool) {}

    /// Show or hide the title text in the title bar.
    fn set_title_visible(&mut self, _visible: bool) {}

    /// Show the window on every virtual desktop.
    fn set_visible_on_all_workspaces(&mut self, _visible: bool, _include_fullscreen: bool) {}

    /// Exclude the window from screen capture.
    fn set_content_protection(&mut self, _enabled: bool) {}

    /// Let clicks pass through the window. With `forward`, pointer movement
    /// is still reported while clicks pass through.
    fn set_ignore_mouse_events(&mut self, _ignore: bool, _forward: bool) {}

    /// Accept or refuse user input.
    fn set_enabled(&mut self, _enabled: bool) {}

    fn set_skip_taskbar(&mut self, _skip: bool) {}

    fn set_represented_filename(&mut self, _path: &str) {}

    fn set_document_edited(&mut self, _edited: bool) {}

    fn set_auto_hide_cursor(&mut self, _auto_hide: bool) {}

    /// Show or hide the traffic-light buttons.
    fn set_window_button_visibility(&mut self, _visible: bool) {}

    /// Raise the window above its siblings without giving it focus.
    fn move_to_top(&mut self) {}

    /// Start or stop bouncing/flashing the taskbar entry.
    fn request_attention(&mut self, _flash: bool) {}

    /// Close the window.
    fn close(&mut self);
}

/// Clamp an opacity to `0.0..=1.0`, mapping `NaN` to opaque.
pub(crate) fn normalize_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A host that only implements the required commands.
    struct BareHost {
        frame: Rect,
    }

    impl HostWindow for BareHost {
        fn id(&self) -> NativeWindowId {
            NativeWindowId::from_raw(7)
        }

        fn frame(&self) -> Rect {
            self.frame
        }

        fn set_frame(&mut self, frame: Rect, _animate: bool) -> Rect {
            self.frame = frame;
            frame
        }

        fn screen_frame(&self) -> Rect {
            Rect::new(0, 0, 800, 600)
        }

        fn work_area(&self) -> Rect {
            self.screen_frame()
        }

        fn set_visible(&mut self, _visible: bool, _activate: bool) {}

        fn focus(&mut self) {}

        fn is_focused(&self) -> bool {
            false
        }

        fn set_title(&mut self, _title: &str) {}

        fn set_minimized(&mut self, _minimized: bool) {}

        fn set_maximized(&mut self, _maximized: bool) {}

        fn set_fullscreen(&mut self, _fullscreen: bool, _token: TransitionToken) -> HostTransition {
            HostTransition::Finished
        }

        fn set_capability(&mut self, _capability: Capability, _enabled: bool) {}

        fn set_window_level(&mut self, _level: i32) {}

        fn close(&mut self) {}
    }

    #[test]
    fn test_default_opacity_is_normalized() {
        let mut host = BareHost {
            frame: Rect::default(),
        };
        assert_eq!(host.set_opacity(f64::NAN), 1.0);
        assert_eq!(host.set_opacity(1.5), 1.0);
        assert_eq!(host.set_opacity(-0.5), 0.0);
        assert_eq!(host.set_opacity(0.25), 0.25);
    }

    #[test]
    fn test_default_cosmetics_are_no_ops() {
        let mut host = BareHost {
            frame: Rect::new(1, 2, 3, 4),
        };
        host.move_to_top();
        host.set_ignore_mouse_events(true, true);
        host.request_attention(true);
        assert_eq!(host.frame(), Rect::new(1, 2, 3, 4));
        assert_eq!(host.id().to_string(), "window-7");
    }
}
