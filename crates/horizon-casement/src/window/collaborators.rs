//! External collaborators of a window.
//!
//! Content rendering, taskbar/dock integration, tab groups, the touch bar,
//! file preview and vibrancy are provided by the embedding application. The
//! window layer only calls into them through these traits. Every slot in
//! [`Collaborators`] is optional; an absent collaborator turns the matching
//! operation into a no-op.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::window::host::NativeWindowId;
use crate::window::overlay_icon::OverlayIcon;

/// The view hosting the window content.
pub trait ContentView: Send {
    /// Lay out for new content bounds.
    fn relayout(&mut self, content_bounds: Rect);

    /// The width the content would like when zoomed, if it has one.
    fn preferred_width(&self) -> Option<i32> {
        None
    }

    /// Redraw overlays such as draggable regions and custom buttons.
    fn refresh_overlays(&mut self) {}
}

/// Taskbar/dock progress display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressState {
    /// Regular progress.
    #[default]
    Normal,
    /// Progress is paused.
    Paused,
    /// An error occurred.
    Error,
    /// Activity with unknown completion.
    Indeterminate,
    /// No progress shown.
    None,
}

/// What a taskbar progress call should display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskbarProgress {
    /// Hide the progress bar.
    Hidden,
    /// Show an indeterminate bar.
    Indeterminate,
    /// Show a fraction in `[0, 1]`.
    Fraction(f64, ProgressState),
}

impl TaskbarProgress {
    /// Interpret a raw progress value: negative hides, above one is
    /// indeterminate.
    pub fn from_value(progress: f64, state: ProgressState) -> Self {
        if progress.is_nan() || progress < 0.0 || state == ProgressState::None {
            TaskbarProgress::Hidden
        } else if progress > 1.0 || state == ProgressState::Indeterminate {
            TaskbarProgress::Indeterminate
        } else {
            TaskbarProgress::Fraction(progress, state)
        }
    }
}

/// The taskbar entry or dock tile of the window.
pub trait TaskbarIntegration: Send {
    /// Show progress on the taskbar or dock icon.
    fn set_progress(&mut self, progress: TaskbarProgress);

    /// Show a badge icon, or clear it with `None`.
    fn set_overlay_icon(&mut self, icon: Option<&OverlayIcon>, description: &str);
}

/// Native window tabbing.
///
/// Each operation returns whether the tab group could carry it out.
pub trait TabGroup: Send {
    /// Select the tab before the current one.
    fn select_previous_tab(&mut self) -> bool;

    /// Select the tab after the current one.
    fn select_next_tab(&mut self) -> bool;

    /// Merge all windows into one tab group.
    fn merge_all_windows(&mut self) -> bool;

    /// Detach the current tab into a new window.
    fn move_tab_to_new_window(&mut self) -> bool;

    /// Show or hide the tab bar.
    fn toggle_tab_bar(&mut self) -> bool;

    /// Add another window as a tab of this one.
    fn add_tabbed_window(&mut self, window: NativeWindowId) -> bool;
}

/// The kind of a touch bar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TouchBarItemKind {
    Button,
    ColorPicker,
    Group,
    Label,
    Popover,
    Scrubber,
    SegmentedControl,
    Slider,
    Spacer,
}

/// A touch bar item description.
///
/// Properties are passed through to the touch bar untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchBarItem {
    /// Stable identifier used by refresh calls.
    pub id: String,
    /// Item kind.
    #[serde(rename = "type")]
    pub kind: TouchBarItemKind,
    /// Kind-specific properties (label, colour, icon, ...).
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl TouchBarItem {
    /// Create an item with no properties.
    pub fn new(id: impl Into<String>, kind: TouchBarItemKind) -> Self {
        Self {
            id: id.into(),
            kind,
            properties: serde_json::Map::new(),
        }
    }

    /// Set a property, builder-style.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// The touch bar attached to the window.
pub trait TouchBar: Send {
    /// Replace all items.
    fn set_items(&mut self, items: &[TouchBarItem]);

    /// Redraw the item with this id.
    fn refresh_item(&mut self, id: &str);

    /// Replace the escape key item, or restore the system one with `None`.
    fn set_escape_item(&mut self, item: Option<&TouchBarItem>);
}

/// Quick Look style file preview.
pub trait FilePreview: Send {
    /// Show a preview panel for `path`.
    fn preview(&mut self, path: &Path, display_name: &str);

    /// Dismiss the preview panel.
    fn close(&mut self);
}

/// Translucent background materials.
pub trait VibrancyEffect: Send {
    /// Apply a material, or remove it with `None`.
    fn set_vibrancy(&mut self, kind: Option<&str>);
}

/// Optional collaborators of a window.
#[derive(Default)]
pub struct Collaborators {
    pub(crate) content_view: Option<Box<dyn ContentView>>,
    pub(crate) taskbar: Option<Box<dyn TaskbarIntegration>>,
    pub(crate) tab_group: Option<Box<dyn TabGroup>>,
    pub(crate) touch_bar: Option<Box<dyn TouchBar>>,
    pub(crate) file_preview: Option<Box<dyn FilePreview>>,
    pub(crate) vibrancy: Option<Box<dyn VibrancyEffect>>,
}

impl Collaborators {
    /// No collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the view hosting the window content.
    pub fn with_content_view(mut self, view: impl ContentView + 'static) -> Self {
        self.content_view = Some(Box::new(view));
        self
    }

    /// Attach taskbar or dock integration.
    pub fn with_taskbar(mut self, taskbar: impl TaskbarIntegration + 'static) -> Self {
        self.taskbar = Some(Box::new(taskbar));
        self
    }

    /// Attach native tab support.
    pub fn with_tab_group(mut self, tabs: impl TabGroup + 'static) -> Self {
        self.tab_group = Some(Box::new(tabs));
        self
    }

    /// Attach a touch bar.
    pub fn with_touch_bar(mut self, touch_bar: impl TouchBar + 'static) -> Self {
        self.touch_bar = Some(Box::new(touch_bar));
        self
    }

    /// Attach a quick-look preview panel.
    pub fn with_file_preview(mut self, preview: impl FilePreview + 'static) -> Self {
        self.file_preview = Some(Box::new(preview));
        self
    }

    /// Attach a vibrancy backend.
    pub fn with_vibrancy(mut self, vibrancy: impl VibrancyEffect + 'static) -> Self {
        self.vibrancy = Some(Box::new(vibrancy));
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("content_view", &self.content_view.is_some())
            .field("taskbar", &self.taskbar.is_some())
            .field("tab_group", &self.tab_group.is_some())
            .field("touch_bar", &self.touch_bar.is_some())
            .field("file_preview", &self.file_preview.is_some())
            .field("vibrancy", &self.vibrancy.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_interpretation() {
        let normal = ProgressState::Normal;
        assert_eq!(TaskbarProgress::from_value(-1.0, normal), TaskbarProgress::Hidden);
        assert_eq!(TaskbarProgress::from_value(2.0, normal), TaskbarProgress::Indeterminate);
        assert_eq!(
            TaskbarProgress::from_value(0.5, ProgressState::Paused),
            TaskbarProgress::Fraction(0.5, ProgressState::Paused)
        );
        assert_eq!(TaskbarProgress::from_value(0.5, ProgressState::None), TaskbarProgress::Hidden);
    }

    #[test]
    fn test_touch_bar_item_from_json() {
        let item: TouchBarItem = serde_json::from_value(serde_json::json!({
            "id": "play",
            "type": "button",
            "properties": { "label": "Play" }
        }))
        .unwrap();
        let expected =
            TouchBarItem::new("play", TouchBarItemKind::Button).with_property("label", "Play");
        assert_eq!(item, expected);
    }

    #[test]
    fn test_empty_collaborators_debug() {
        let debug = format!("{:?}", Collaborators::new());
        assert!(debug.contains("tab_group: false"));
    }
}
