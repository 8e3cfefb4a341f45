//! Observable window attributes.
//!
//! [`WindowProperties`] stores the last value *applied* to the host for every
//! window attribute. Each attribute lives in a [`Property`], so writes report
//! whether anything changed and the facade only notifies on real changes.
//!
//! The properties never talk to the host themselves; `NativeWindow` applies a
//! value to the host first and records whatever the host accepted (for
//! example a clamped frame or opacity).

use std::fmt;

use horizon_casement_core::Property;

use crate::color::Color;
use crate::geometry::Rect;

/// A user-facing capability of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The user can resize the window by dragging its edges.
    Resizable,
    /// The user can move the window.
    Movable,
    /// The window can be minimized.
    Minimizable,
    /// The window can be maximized (zoomed).
    Maximizable,
    /// The window can enter native full screen.
    Fullscreenable,
    /// The window can be closed by the user.
    Closable,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 6] = [
        Capability::Resizable,
        Capability::Movable,
        Capability::Minimizable,
        Capability::Maximizable,
        Capability::Fullscreenable,
        Capability::Closable,
    ];

    /// Lowercase name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Capability::Resizable => "resizable",
            Capability::Movable => "movable",
            Capability::Minimizable => "minimizable",
            Capability::Maximizable => "maximizable",
            Capability::Fullscreenable => "fullscreenable",
            Capability::Closable => "closable",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The applied attribute values of one window.
pub struct WindowProperties {
    pub(crate) bounds: Property<Rect>,
    pub(crate) title: Property<String>,
    resizable: Property<bool>,
    movable: Property<bool>,
    minimizable: Property<bool>,
    maximizable: Property<bool>,
    fullscreenable: Property<bool>,
    closable: Property<bool>,
    pub(crate) skip_taskbar: Property<bool>,
    pub(crate) opacity: Property<f64>,
    pub(crate) background_color: Property<Color>,
    pub(crate) has_shadow: Property<bool>,
    pub(crate) represented_filename: Property<String>,
    pub(crate) document_edited: Property<bool>,
    pub(crate) window_level: Property<i32>,
    pub(crate) visible: Property<bool>,
    pub(crate) enabled: Property<bool>,
    pub(crate) visible_on_all_workspaces: Property<bool>,
    pub(crate) content_protection: Property<bool>,
    pub(crate) ignore_mouse_events: Property<bool>,
    pub(crate) forward_mouse_events: Property<bool>,
    pub(crate) auto_hide_cursor: Property<bool>,
    pub(crate) window_button_visibility: Property<Option<bool>>,
}

impl WindowProperties {
    /// Properties for a fresh window: every capability enabled, opaque,
    /// hidden, at the normal level.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Property::new(bounds),
            title: Property::new(String::new()),
            resizable: Property::new(true),
            movable: Property::new(true),
            minimizable: Property::new(true),
            maximizable: Property::new(true),
            fullscreenable: Property::new(true),
            closable: Property::new(true),
            skip_taskbar: Property::new(false),
            opacity: Property::new(1.0),
            background_color: Property::new(Color::WHITE),
            has_shadow: Property::new(true),
            represented_filename: Property::new(String::new()),
            document_edited: Property::new(false),
            window_level: Property::new(0),
            visible: Property::new(false),
            enabled: Property::new(true),
            visible_on_all_workspaces: Property::new(false),
            content_protection: Property::new(false),
            ignore_mouse_events: Property::new(false),
            forward_mouse_events: Property::new(false),
            auto_hide_cursor: Property::new(false),
            window_button_visibility: Property::new(None),
        }
    }

    fn capability_cell(&self, capability: Capability) -> &Property<bool> {
        match capability {
            Capability::Resizable => &self.resizable,
            Capability::Movable => &self.movable,
            Capability::Minimizable => &self.minimizable,
            Capability::Maximizable => &self.maximizable,
            Capability::Fullscreenable => &self.fullscreenable,
            Capability::Closable => &self.closable,
        }
    }

    /// The current value of a capability.
    pub fn capability(&self, capability: Capability) -> bool {
        self.capability_cell(capability).get()
    }

    /// Record a capability value; returns `true` if it changed.
    pub(crate) fn set_capability(&self, capability: Capability, enabled: bool) -> bool {
        self.capability_cell(capability).set(enabled)
    }

    /// The window frame in screen coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// The window title.
    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable.get()
    }

    pub fn is_movable(&self) -> bool {
        self.movable.get()
    }

    pub fn is_minimizable(&self) -> bool {
        self.minimizable.get()
    }

    pub fn is_maximizable(&self) -> bool {
        self.maximizable.get()
    }

    pub fn is_fullscreenable(&self) -> bool {
        self.fullscreenable.get()
    }

    pub fn is_closable(&self) -> bool {
        self.closable.get()
    }

    /// Whether the window is left out of the taskbar / window switcher.
    pub fn skip_taskbar(&self) -> bool {
        self.skip_taskbar.get()
    }

    /// Window opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity.get()
    }

    pub fn background_color(&self) -> Color {
        self.background_color.get()
    }

    pub fn has_shadow(&self) -> bool {
        self.has_shadow.get()
    }

    /// Path of the file the window represents, or empty.
    pub fn represented_filename(&self) -> String {
        self.represented_filename.get()
    }

    pub fn is_document_edited(&self) -> bool {
        self.document_edited.get()
    }

    /// The absolute window level; `0` is the normal level.
    pub fn window_level(&self) -> i32 {
        self.window_level.get()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn is_visible_on_all_workspaces(&self) -> bool {
        self.visible_on_all_workspaces.get()
    }

    /// Whether screen capture of the window content is prevented.
    pub fn content_protection(&self) -> bool {
        self.content_protection.get()
    }

    pub fn ignores_mouse_events(&self) -> bool {
        self.ignore_mouse_events.get()
    }

    /// Whether pointer movement is still delivered while clicks pass through.
    pub fn forwards_mouse_events(&self) -> bool {
        self.forward_mouse_events.get()
    }

    pub fn auto_hide_cursor(&self) -> bool {
        self.auto_hide_cursor.get()
    }

    /// Explicit window button visibility; `None` means the style default.
    pub fn window_button_visibility(&self) -> Option<bool> {
        self.window_button_visibility.get()
    }
}

impl fmt::Debug for WindowProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowProperties")
            .field("bounds", &self.bounds())
            .field("title", &self.title())
            .field("resizable", &self.is_resizable())
            .field("movable", &self.is_movable())
            .field("minimizable", &self.is_minimizable())
            .field("maximizable", &self.is_maximizable())
            .field("fullscreenable", &self.is_fullscreenable())
            .field("closable", &self.is_closable())
            .field("opacity", &self.opacity())
            .field("window_level", &self.window_level())
            .field("visible", &self.is_visible())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(WindowProperties: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = WindowProperties::new(Rect::new(0, 0, 800, 600));
        for cap in Capability::ALL {
            assert!(props.capability(cap), "{cap}");
        }
        assert_eq!(props.opacity(), 1.0);
        assert_eq!(props.window_level(), 0);
        assert!(!props.is_visible());
        assert_eq!(props.window_button_visibility(), None);
    }

    #[test]
    fn test_capability_set_reports_change() {
        let props = WindowProperties::new(Rect::default());
        assert!(props.set_capability(Capability::Movable, false));
        assert!(!props.set_capability(Capability::Movable, false));
        assert!(!props.is_movable());
        assert!(props.is_resizable());
    }
}
