//! Host adapter for a real `winit` window.
//!
//! [`WinitHost`] drives a `winit::window::Window` owned by the application.
//! Coordinates are converted to logical pixels with the window's scale
//! factor. winit applies full-screen changes without a completion callback,
//! so every transition reports [`HostTransition::Finished`].
//!
//! Some capabilities have no winit equivalent (movable, fullscreenable).
//! winit can only raise a window by focusing it, so `move_to_top` focuses.

use std::sync::Arc;

use horizon_casement_core::logging::targets;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::WindowEvent;
use winit::window::{
    Fullscreen, UserAttentionType, Window, WindowButtons, WindowLevel as WinitLevel,
};

use crate::geometry::Rect;
use crate::window::host::{HostEvent, HostTransition, HostWindow, NativeWindowId, normalize_opacity};
use crate::window::properties::Capability;
use crate::window::transition::TransitionToken;

/// A [`HostWindow`] backed by a winit window.
pub struct WinitHost {
    window: Arc<Window>,
    buttons: WindowButtons,
    fullscreenable: bool,
    observed: ObservedMode,
    minimized: bool,
}

/// The last window mode seen, so only real changes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ObservedMode {
    fullscreen: bool,
    maximized: bool,
}

impl ObservedMode {
    /// Record the current mode, returning the host events for what changed.
    fn update(&mut self, fullscreen: bool, maximized: bool) -> Vec<HostEvent> {
        let mut events = Vec::new();
        if fullscreen != self.fullscreen {
            events.push(if fullscreen {
                HostEvent::EnteredFullscreen
            } else {
                HostEvent::ExitedFullscreen
            });
        }
        if maximized != self.maximized {
            events.push(if maximized {
                HostEvent::Maximized
            } else {
                HostEvent::Unmaximized
            });
        }
        *self = Self {
            fullscreen,
            maximized,
        };
        events
    }
}

impl WinitHost {
    /// Wrap a window created by the application.
    pub fn new(window: Arc<Window>) -> Self {
        let buttons = window.enabled_buttons();
        let observed = ObservedMode {
            fullscreen: window.fullscreen().is_some(),
            maximized: window.is_maximized(),
        };
        let minimized = window.is_minimized() == Some(true);
        Self {
            window,
            buttons,
            fullscreenable: true,
            observed,
            minimized,
        }
    }

    /// The wrapped winit window.
    pub fn winit_window(&self) -> &Window {
        &self.window
    }

    /// Translate a winit window event into the host events the window layer
    /// follows, in the order they should be handled.
    ///
    /// Mode changes made by the user (zoom button, native full-screen
    /// shortcut) surface as a resize; they are reported before the resize.
    pub fn translate_event(&mut self, event: &WindowEvent) -> Vec<HostEvent> {
        match event {
            WindowEvent::Moved(_) => vec![HostEvent::Moved(self.frame())],
            WindowEvent::Resized(_) => {
                let fullscreen = self.window.fullscreen().is_some();
                let maximized = self.window.is_maximized();
                let mut events = self.observed.update(fullscreen, maximized);
                events.push(HostEvent::Resized(self.frame()));
                events
            }
            WindowEvent::Occluded(true) if self.window.is_minimized() == Some(true) => {
                self.minimized = true;
                vec![HostEvent::Minimized]
            }
            WindowEvent::Occluded(false) if self.minimized => {
                self.minimized = false;
                vec![HostEvent::Restored]
            }
            _ => Vec::new(),
        }
    }

    fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    fn monitor_frame(&self) -> Option<Rect> {
        let monitor = self.window.current_monitor()?;
        let scale = monitor.scale_factor();
        let position: LogicalPosition<i32> = monitor.position().to_logical(scale);
        let size: LogicalSize<i32> = monitor.size().to_logical(scale);
        Some(Rect::new(position.x, position.y, size.width, size.height))
    }

    fn set_button(&mut self, button: WindowButtons, enabled: bool) {
        self.buttons.set(button, enabled);
        self.window.set_enabled_buttons(self.buttons);
    }
}

impl HostWindow for WinitHost {
    fn id(&self) -> NativeWindowId {
        NativeWindowId::from(self.window.id())
    }

    fn frame(&self) -> Rect {
        let scale = self.scale_factor();
        let position: LogicalPosition<i32> = self
            .window
            .outer_position()
            .map(|p| p.to_logical(scale))
            .unwrap_or_else(|_| LogicalPosition::new(0, 0));
        let size: LogicalSize<i32> = self.window.outer_size().to_logical(scale);
        Rect::new(position.x, position.y, size.width, size.height)
    }

    fn set_frame(&mut self, frame: Rect, _animate: bool) -> Rect {
        let applied = match self.monitor_frame() {
            Some(screen) => {
                let width = frame.width.clamp(0, screen.width);
                let height = frame.height.clamp(0, screen.height);
                Rect::new(frame.x, frame.y.max(screen.y), width, height)
            }
            None => frame,
        };

        // winit sizes the inner area; keep the current decoration thickness.
        let scale = self.scale_factor();
        let outer: LogicalSize<i32> = self.window.outer_size().to_logical(scale);
        let inner: LogicalSize<i32> = self.window.inner_size().to_logical(scale);
        let decoration_width = outer.width.saturating_sub(inner.width);
        let decoration_height = outer.height.saturating_sub(inner.height);
        let inner_width = applied.width.saturating_sub(decoration_width).max(0);
        let inner_height = applied.height.saturating_sub(decoration_height).max(0);

        self.window.set_outer_position(LogicalPosition::new(applied.x, applied.y));
        let requested = LogicalSize::new(inner_width, inner_height);
        let applied = match self.window.request_inner_size(requested) {
            Some(size) => {
                let size: LogicalSize<i32> = size.to_logical(scale);
                Rect::new(
                    applied.x,
                    applied.y,
                    size.width.saturating_add(decoration_width),
                    size.height.saturating_add(decoration_height),
                )
            }
            // Resized asynchronously; the Resized event carries the result.
            None => applied,
        };
        tracing::trace!(target: targets::HOST, ?applied, "winit frame requested");
        applied
    }

    fn screen_frame(&self) -> Rect {
        self.monitor_frame().unwrap_or_else(|| self.frame())
    }

    fn work_area(&self) -> Rect {
        self.screen_frame()
    }

    fn set_visible(&mut self, visible: bool, activate: bool) {
        self.window.set_visible(visible);
        if visible && activate {
            self.window.focus_window();
        }
    }

    fn focus(&mut self) {
        self.window.focus_window();
    }

    fn is_focused(&self) -> bool {
        self.window.has_focus()
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
        self.window.set_minimized(minimized);
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.observed.maximized = maximized;
        self.window.set_maximized(maximized);
    }

    fn set_fullscreen(&mut self, fullscreen: bool, token: TransitionToken) -> HostTransition {
        if fullscreen && !self.fullscreenable {
            tracing::debug!(
                target: targets::HOST,
                %token,
                "entering fullscreen with the fullscreen button disabled"
            );
        }
        self.observed.fullscreen = fullscreen;
        let mode = fullscreen.then(|| Fullscreen::Borderless(None));
        self.window.set_fullscreen(mode);
        HostTransition::Finished
    }

    fn set_capability(&mut self, capability: Capability, enabled: bool) {
        match capability {
            Capability::Resizable => self.window.set_resizable(enabled),
            Capability::Minimizable => self.set_button(WindowButtons::MINIMIZE, enabled),
            Capability::Maximizable => self.set_button(WindowButtons::MAXIMIZE, enabled),
            Capability::Closable => self.set_button(WindowButtons::CLOSE, enabled),
            Capability::Movable => {
                tracing::trace!(target: targets::HOST, enabled, "movable has no winit equivalent");
            }
            Capability::Fullscreenable => self.fullscreenable = enabled,
        }
    }

    fn set_window_level(&mut self, level: i32) {
        let level = match level {
            0 => WinitLevel::Normal,
            l if l > 0 => WinitLevel::AlwaysOnTop,
            _ => WinitLevel::AlwaysOnBottom,
        };
        self.window.set_window_level(level);
    }

    fn set_opacity(&mut self, opacity: f64) -> f64 {
        let applied = normalize_opacity(opacity);
        self.window.set_transparent(applied < 1.0);
        applied
    }

    fn set_title_visible(&mut self, visible: bool) {
        self.window.set_decorations(visible);
    }

    fn set_content_protection(&mut self, enabled: bool) {
        self.window.set_content_protected(enabled);
    }

    fn set_ignore_mouse_events(&mut self, ignore: bool, forward: bool) {
        if let Err(error) = self.window.set_cursor_hittest(!ignore) {
            tracing::debug!(target: targets::HOST, %error, "cursor hit-test not supported");
        }
        if forward {
            tracing::debug!(
                target: targets::HOST,
                "winit delivers no cursor events to a window that ignores the mouse"
            );
        }
    }

    fn set_auto_hide_cursor(&mut self, auto_hide: bool) {
        self.window.set_cursor_visible(!auto_hide);
    }

    fn request_attention(&mut self, flash: bool) {
        self.window
            .request_user_attention(flash.then_some(UserAttentionType::Informational));
    }

    fn move_to_top(&mut self) {
        if self.window.is_visible() != Some(false) {
            self.window.focus_window();
        }
    }

    fn close(&mut self) {
        // The application owns the winit window; hiding is as far as we go.
        self.window.set_visible(false);
        tracing::debug!(target: targets::HOST, "winit window hidden on close");
    }
}

impl std::fmt::Debug for WinitHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinitHost")
            .field("id", &self.window.id())
            .field("observed", &self.observed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_mode_changes_are_reported_once() {
        let mut observed = ObservedMode::default();
        assert_eq!(observed.update(false, true), vec![HostEvent::Maximized]);
        assert!(observed.update(false, true).is_empty());

        assert_eq!(
            observed.update(true, false),
            vec![HostEvent::EnteredFullscreen, HostEvent::Unmaximized]
        );
        assert_eq!(observed.update(false, false), vec![HostEvent::ExitedFullscreen]);
    }

    #[test]
    fn test_commanded_mode_is_not_reported_back() {
        let mut observed = ObservedMode::default();
        // `set_fullscreen` records the mode before winit resizes the window.
        observed.fullscreen = true;
        assert!(observed.update(true, false).is_empty());
    }
}
