//! Window display modes.
//!
//! A window is in exactly one [`ModeState`]. The controller stores the richer
//! [`ModeStack`], which also owns the values that must be restored when a
//! special mode is left. Holding the snapshot inside the variant means a
//! snapshot exists exactly while its mode is active.

use std::fmt;

use crate::geometry::Rect;
use crate::window::presentation::PresentationOptions;

/// The observable display mode of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeState {
    /// A regular, restored window.
    #[default]
    Normal,
    /// Minimized to the taskbar or dock.
    Minimized,
    /// Maximized (zoomed) to the work area.
    Maximized,
    /// Native full screen.
    Fullscreen,
    /// Full screen achieved by resizing the window over the screen.
    SimpleFullscreen,
    /// Kiosk mode: full screen with all escape routes disabled.
    Kiosk,
}

impl ModeState {
    /// Lowercase name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            ModeState::Normal => "normal",
            ModeState::Minimized => "minimized",
            ModeState::Maximized => "maximized",
            ModeState::Fullscreen => "fullscreen",
            ModeState::SimpleFullscreen => "simple-fullscreen",
            ModeState::Kiosk => "kiosk",
        }
    }
}

impl fmt::Display for ModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Window attributes captured on entry to simple full screen or kiosk.
///
/// Created once per entry and consumed by value on exit.
#[derive(Debug, PartialEq)]
pub struct TransitionSnapshot {
    pub(crate) was_maximizable: bool,
    pub(crate) was_movable: bool,
    pub(crate) was_resizable: bool,
    pub(crate) was_fullscreenable: bool,
    pub(crate) original_frame: Rect,
    pub(crate) original_window_level: i32,
    pub(crate) original_presentation_options: PresentationOptions,
}

impl TransitionSnapshot {
    pub fn was_maximizable(&self) -> bool {
        self.was_maximizable
    }

    pub fn was_movable(&self) -> bool {
        self.was_movable
    }

    pub fn was_resizable(&self) -> bool {
        self.was_resizable
    }

    pub fn was_fullscreenable(&self) -> bool {
        self.was_fullscreenable
    }

    /// The window frame before entry.
    pub fn original_frame(&self) -> Rect {
        self.original_frame
    }

    /// The absolute window level before entry.
    pub fn original_window_level(&self) -> i32 {
        self.original_window_level
    }

    /// The process presentation options before entry.
    pub fn original_presentation_options(&self) -> PresentationOptions {
        self.original_presentation_options
    }
}

/// The controller's owned mode representation.
///
/// `Kiosk { over_fullscreen: true, .. }` is kiosk layered over native full
/// screen; leaving it returns to [`ModeStack::Fullscreen`].
#[derive(Debug, Default, PartialEq)]
pub enum ModeStack {
    /// A regular window.
    #[default]
    Normal,
    /// Minimized.
    Minimized,
    /// Maximized.
    Maximized,
    /// Native full screen.
    Fullscreen,
    /// Simple full screen with the values to restore on exit.
    SimpleFullscreen(TransitionSnapshot),
    /// Kiosk with the values to restore on exit.
    Kiosk {
        /// Values captured on kiosk entry.
        snapshot: TransitionSnapshot,
        /// Whether kiosk was layered on an existing native full screen.
        over_fullscreen: bool,
    },
}

impl ModeStack {
    /// The observable mode.
    pub fn state(&self) -> ModeState {
        match self {
            ModeStack::Normal => ModeState::Normal,
            ModeStack::Minimized => ModeState::Minimized,
            ModeStack::Maximized => ModeState::Maximized,
            ModeStack::Fullscreen => ModeState::Fullscreen,
            ModeStack::SimpleFullscreen(_) => ModeState::SimpleFullscreen,
            ModeStack::Kiosk { .. } => ModeState::Kiosk,
        }
    }

    /// Whether the host window is in native full screen.
    ///
    /// Kiosk always runs on top of native full screen, whether it was layered
    /// or entered it itself.
    pub fn is_native_fullscreen(&self) -> bool {
        matches!(self, ModeStack::Fullscreen | ModeStack::Kiosk { .. })
    }

    /// The active snapshot, if the mode holds one.
    pub fn snapshot(&self) -> Option<&TransitionSnapshot> {
        match self {
            ModeStack::SimpleFullscreen(snapshot) | ModeStack::Kiosk { snapshot, .. } => {
                Some(snapshot)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> TransitionSnapshot {
        TransitionSnapshot {
            was_maximizable: true,
            was_movable: true,
            was_resizable: false,
            was_fullscreenable: true,
            original_frame: Rect::new(1, 2, 3, 4),
            original_window_level: 0,
            original_presentation_options: PresentationOptions::DEFAULT,
        }
    }

    #[test]
    fn test_stack_state() {
        assert_eq!(ModeStack::default().state(), ModeState::Normal);
        assert_eq!(ModeStack::SimpleFullscreen(snapshot()).state(), ModeState::SimpleFullscreen);

        let kiosk = ModeStack::Kiosk {
            snapshot: snapshot(),
            over_fullscreen: true,
        };
        assert_eq!(kiosk.state(), ModeState::Kiosk);
        assert!(kiosk.is_native_fullscreen());
        assert_eq!(kiosk.snapshot().map(|s| s.original_frame()), Some(Rect::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_simple_fullscreen_is_not_native() {
        assert!(!ModeStack::SimpleFullscreen(snapshot()).is_native_fullscreen());
        assert!(ModeStack::Maximized.snapshot().is_none());
    }
}
