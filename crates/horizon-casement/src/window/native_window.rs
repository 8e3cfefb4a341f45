//! The public control surface of a window.
//!
//! `NativeWindow` composes the host window, the applied
//! [`WindowProperties`], the [`ModeController`], the [`ConstraintEngine`] and
//! the optional [`Collaborators`]. Every operation follows the same path:
//! legality check, host command, property update, then notification. Signals
//! fire only when something observable changed, so repeating an operation
//! never produces duplicate notifications.
//!
//! # Example
//!
//! ```
//! use horizon_casement::geometry::Rect;
//! use horizon_casement::window::{HeadlessHost, ModeState, NativeWindow, WindowOptions};
//!
//! let host = HeadlessHost::new();
//! let options = WindowOptions::new().with_size(640, 480).with_frame(false);
//! let mut window = NativeWindow::new(Box::new(host), options);
//!
//! window.set_bounds(Rect::new(100, 100, 400, 300), false);
//! window.set_simple_full_screen(true);
//! assert_eq!(window.mode(), ModeState::SimpleFullscreen);
//! window.set_simple_full_screen(false);
//! assert_eq!(window.bounds(), Rect::new(100, 100, 400, 300));
//! ```

use std::path::Path;

use horizon_casement_core::Signal;
use horizon_casement_core::logging::{span_names, targets};

use crate::color::Color;
use crate::error::WindowResult;
use crate::geometry::{Rect, Size};
use crate::window::collaborators::{
    Collaborators, ProgressState, TabGroup, TaskbarProgress, TouchBarItem,
};
use crate::window::constraints::{AspectRatio, ConstraintEngine, ResizeEdge, SizeConstraints};
use crate::window::decoration::Decoration;
use crate::window::host::{HostEvent, HostWindow, NativeWindowId};
use crate::window::mode::ModeState;
use crate::window::mode_controller::{ModeBehavior, ModeController, ModeEnv};
use crate::window::overlay_icon::OverlayIcon;
use crate::window::presentation::PresentationContext;
use crate::window::properties::{Capability, WindowProperties};
use crate::window::transition::ModeRequest;
use crate::window::window_level::WindowLevel;
use crate::window::window_options::WindowOptions;

/// A top-level window driven through a [`HostWindow`].
pub struct NativeWindow {
    host: Box<dyn HostWindow>,
    props: WindowProperties,
    controller: ModeController,
    constraints: ConstraintEngine,
    decoration: Decoration,
    collaborators: Collaborators,
    vibrancy: Option<String>,
    saved_background: Option<Color>,
    state_changed: Signal<ModeState>,
    bounds_changed: Signal<Rect>,
    capability_changed: Signal<(Capability, bool)>,
}

impl NativeWindow {
    /// Create a window with no collaborators, using the process-wide
    /// presentation context.
    pub fn new(host: Box<dyn HostWindow>, options: WindowOptions) -> Self {
        Self::with_context(
            host,
            options,
            Collaborators::new(),
            PresentationContext::global().clone(),
        )
    }

    /// Create a window with collaborators and an explicit presentation context.
    pub fn with_context(
        mut host: Box<dyn HostWindow>,
        options: WindowOptions,
        collaborators: Collaborators,
        presentation: PresentationContext,
    ) -> Self {
        let decoration = options.decoration();
        let initial = initial_frame(host.as_ref(), &options, decoration);
        let applied = host.set_frame(initial, false);

        let behavior = ModeBehavior {
            always_simple_fullscreen: options.simple_fullscreen(),
            zoom_to_page_width: options.zoom_to_page_width(),
            fullscreen_window_title: options.fullscreen_window_title(),
        };

        let mut constraints = ConstraintEngine::new();
        let limits = SizeConstraints::new(options.min_size(), options.max_size());
        constraints.set_size_constraints(limits);

        let mut window = Self {
            host,
            props: WindowProperties::new(applied),
            controller: ModeController::new(presentation, behavior, applied),
            constraints,
            decoration,
            collaborators,
            vibrancy: None,
            saved_background: None,
            state_changed: Signal::new(),
            bounds_changed: Signal::new(),
            capability_changed: Signal::new(),
        };

        tracing::debug!(
            target: targets::FACADE,
            id = %window.id(),
            bounds = ?applied,
            style = ?decoration.title_bar_style(),
            "creating window"
        );

        window.set_title(options.title());
        window.set_resizable(options.resizable());
        window.set_movable(options.movable());
        window.set_minimizable(options.minimizable());
        window.set_maximizable(options.maximizable());
        window.set_fullscreenable(options.fullscreenable());
        window.set_closable(options.closable());
        window.set_skip_taskbar(options.skip_taskbar());
        window.set_has_shadow(options.has_shadow());
        window.set_opacity(options.opacity());
        if let Some(color) = options.background_color() {
            window.set_background_color(color);
        }
        if options.always_on_top() {
            window.apply_window_level(WindowLevel::Floating.value());
        }
        if let Some(kind) = options.vibrancy() {
            window.set_vibrancy(Some(kind));
        }

        if options.fullscreen() {
            window.set_full_screen(true);
        }
        if options.kiosk() {
            window.set_kiosk(true);
        }
        if options.show() {
            window.show();
        }
        window
    }

    /// The host's identifier for this window.
    pub fn id(&self) -> NativeWindowId {
        self.host.id()
    }

    /// The applied attribute values.
    pub fn properties(&self) -> &WindowProperties {
        &self.props
    }

    /// The mode state machine.
    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    /// The fixed decoration of the window.
    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    // Signals

    /// Emitted with the new mode whenever the mode changes.
    pub fn state_changed(&self) -> &Signal<ModeState> {
        &self.state_changed
    }

    /// Emitted with the new frame whenever the frame changes.
    pub fn bounds_changed(&self) -> &Signal<Rect> {
        &self.bounds_changed
    }

    /// Emitted whenever a capability flag changes.
    pub fn capability_changed(&self) -> &Signal<(Capability, bool)> {
        &self.capability_changed
    }

    // Notification plumbing

    fn with_mode_env<R>(
        &mut self,
        f: impl FnOnce(&mut ModeController, &mut ModeEnv<'_>) -> R,
    ) -> R {
        let before_mode = self.controller.mode();
        let before_bounds = self.props.bounds();

        let mut env = ModeEnv::new(
            self.host.as_mut(),
            &self.props,
            self.decoration,
            self.collaborators.content_view.as_deref(),
        );
        let result = f(&mut self.controller, &mut env);
        let capability_changes = env.capability_changes;

        for change in capability_changes {
            self.capability_changed.emit(change);
        }
        self.notify(before_mode, before_bounds);
        result
    }

    fn request(&mut self, request: ModeRequest) {
        self.with_mode_env(|controller, env| controller.request(request, env));
    }

    fn notify(&mut self, before_mode: ModeState, before_bounds: Rect) {
        let bounds = self.props.bounds();
        if bounds != before_bounds {
            let content = self.decoration.window_bounds_to_content_bounds(bounds);
            if let Some(view) = self.collaborators.content_view.as_mut() {
                view.relayout(content);
            }
            self.bounds_changed.emit(bounds);
        }

        let mode = self.controller.mode();
        if mode != before_mode {
            if let Some(view) = self.collaborators.content_view.as_mut() {
                view.refresh_overlays();
            }
            self.state_changed.emit(mode);
        }
    }

    /// Forward a notification from the host window system.
    ///
    /// Returns `false` if the event was a stale transition completion.
    pub fn handle_host_event(&mut self, event: HostEvent) -> bool {
        let span = tracing::trace_span!(
            target: targets::HOST,
            "host",
            operation = span_names::HOST_EVENT,
            ?event
        );
        let _entered = span.enter();

        match event {
            HostEvent::TransitionFinished(token) => {
                self.with_mode_env(|controller, env| controller.transition_finished(token, env))
            }
            HostEvent::Moved(frame) | HostEvent::Resized(frame) => {
                if !self.controller.tracker().is_busy() {
                    let before_mode = self.controller.mode();
                    let before_bounds = self.props.bounds();
                    self.props.bounds.set(frame);
                    self.notify(before_mode, before_bounds);
                }
                true
            }
            other => {
                self.with_mode_env(|controller, env| controller.sync_host_event(other, env));
                true
            }
        }
    }

    // Lifecycle and visibility

    /// Show and focus the window.
    pub fn show(&mut self) {
        self.host.set_visible(true, true);
        self.props.visible.set(true);
    }

    /// Show the window without focusing it.
    pub fn show_inactive(&mut self) {
        self.host.set_visible(true, false);
        self.props.visible.set(true);
    }

    /// Hide the window.
    pub fn hide(&mut self) {
        self.host.set_visible(false, false);
        self.props.visible.set(false);
    }

    /// Whether the window is shown.
    pub fn is_visible(&self) -> bool {
        self.props.is_visible()
    }

    /// Ask the host to close the window.
    ///
    /// Ignored while the window is not closable; see
    /// [`close_immediately`](Self::close_immediately).
    pub fn close(&mut self) {
        if !self.props.is_closable() {
            tracing::debug!(target: targets::FACADE, "close ignored: window is not closable");
            return;
        }
        self.close_immediately();
    }

    /// Close the window even when it is not closable.
    pub fn close_immediately(&mut self) {
        self.host.close();
        self.props.visible.set(false);
    }

    /// Give the window keyboard focus.
    pub fn focus(&mut self) {
        self.host.focus();
    }

    /// Whether the window has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.host.is_focused()
    }

    /// Raise the window above other windows without focusing it.
    pub fn move_top(&mut self) {
        self.host.move_to_top();
    }

    /// Enable or disable user interaction with the window.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.props.enabled.set(enabled) {
            self.host.set_enabled(enabled);
        }
    }

    /// Whether the window accepts user input.
    pub fn is_enabled(&self) -> bool {
        self.props.is_enabled()
    }

    /// Start or stop drawing the user's attention to the window.
    pub fn flash_frame(&mut self, flash: bool) {
        self.host.request_attention(flash);
    }

    /// Center the window on the work area.
    pub fn center(&mut self) {
        let frame = self.props.bounds().centered_in(self.host.work_area());
        self.set_bounds(frame, false);
    }

    // Geometry

    /// Move and resize the window frame.
    ///
    /// The content area implied by `bounds` is run through the aspect-ratio
    /// and size constraints with the top-left corner fixed. The host may clamp
    /// the result further; [`bounds`](Self::bounds) reports what was applied.
    pub fn set_bounds(&mut self, bounds: Rect, animate: bool) {
        let frame = self.constrain_frame(bounds, ResizeEdge::Programmatic);
        let before_mode = self.controller.mode();
        let before_bounds = self.props.bounds();
        let applied = self.host.set_frame(frame, animate);
        self.props.bounds.set(applied);
        self.notify(before_mode, before_bounds);
    }

    /// The current window frame.
    pub fn bounds(&self) -> Rect {
        self.props.bounds()
    }

    /// Set the frame so that the content area is `bounds`.
    pub fn set_content_bounds(&mut self, bounds: Rect, animate: bool) {
        let frame = self.decoration.content_bounds_to_window_bounds(bounds);
        self.set_bounds(frame, animate);
    }

    /// The current content area.
    pub fn content_bounds(&self) -> Rect {
        self.decoration.window_bounds_to_content_bounds(self.bounds())
    }

    /// The frame the window has, or will return to, in `Normal` mode.
    pub fn normal_bounds(&self) -> Rect {
        if self.is_normal() {
            self.bounds()
        } else {
            self.controller.saved_normal_bounds()
        }
    }

    /// Whether the window is in `Normal` mode.
    pub fn is_normal(&self) -> bool {
        self.mode() == ModeState::Normal
    }

    /// Constrain a frame the user is dragging from `edge`.
    ///
    /// Hosts call this while a live resize is in progress; the returned frame
    /// keeps the corner opposite `edge` fixed.
    pub fn constrain_user_resize(&self, requested: Rect, edge: ResizeEdge) -> Rect {
        self.constrain_frame(requested, edge)
    }

    fn constrain_frame(&self, frame: Rect, edge: ResizeEdge) -> Rect {
        let current = self.content_bounds();
        let requested = self.decoration.window_bounds_to_content_bounds(frame);
        let constrained = self.constraints.constrain_from(current, requested, edge);
        self.decoration.content_bounds_to_window_bounds(constrained.bounds)
    }

    /// Convert a content rectangle to the frame enclosing it.
    pub fn content_bounds_to_window_bounds(&self, bounds: Rect) -> Rect {
        self.decoration.content_bounds_to_window_bounds(bounds)
    }

    /// Convert a frame to the content rectangle inside it.
    pub fn window_bounds_to_content_bounds(&self, bounds: Rect) -> Rect {
        self.decoration.window_bounds_to_content_bounds(bounds)
    }

    /// Lock the content aspect ratio; `ratio <= 0` removes the lock.
    ///
    /// `extra_size` is the part of the content that does not scale.
    pub fn set_aspect_ratio(&mut self, ratio: f64, extra_size: Size) {
        if self.constraints.set_aspect_ratio(ratio, extra_size) {
            tracing::debug!(
                target: targets::CONSTRAINTS,
                ratio,
                ?extra_size,
                "aspect ratio changed"
            );
        }
    }

    /// The locked aspect ratio, if any.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.constraints.aspect_ratio()
    }

    /// Limit the content size.
    pub fn set_content_size_constraints(&mut self, min: Option<Size>, max: Option<Size>) {
        let constraints = SizeConstraints::new(min, max);
        if self.constraints.set_size_constraints(constraints) {
            tracing::debug!(target: targets::CONSTRAINTS, ?min, ?max, "size constraints changed");
        }
    }

    /// The min/max content size limits.
    pub fn content_size_constraints(&self) -> SizeConstraints {
        self.constraints.size_constraints()
    }

    // Modes

    /// The current display mode.
    pub fn mode(&self) -> ModeState {
        self.controller.mode()
    }

    /// Zoom the window to the work area.
    pub fn maximize(&mut self) {
        self.request(ModeRequest::Maximize);
    }

    /// Return a maximized window to its normal frame.
    pub fn unmaximize(&mut self) {
        self.request(ModeRequest::Unmaximize);
    }

    /// Whether the window is maximized.
    pub fn is_maximized(&self) -> bool {
        self.mode() == ModeState::Maximized
    }

    /// Miniaturize the window.
    pub fn minimize(&mut self) {
        self.request(ModeRequest::Minimize);
    }

    /// Restore from minimized.
    pub fn restore(&mut self) {
        self.request(ModeRequest::Restore);
    }

    /// Whether the window is minimized.
    pub fn is_minimized(&self) -> bool {
        self.mode() == ModeState::Minimized
    }

    /// Enter or leave full screen.
    ///
    /// Windows created with `simpleFullscreen` use simple full screen.
    /// Leaving full screen while in kiosk also leaves kiosk.
    pub fn set_full_screen(&mut self, fullscreen: bool) {
        self.request(ModeRequest::Fullscreen(fullscreen));
    }

    /// Whether the window is full screen, including kiosk.
    pub fn is_fullscreen(&self) -> bool {
        match self.mode() {
            ModeState::Fullscreen | ModeState::Kiosk => true,
            ModeState::SimpleFullscreen => self.controller.behavior().always_simple_fullscreen,
            _ => false,
        }
    }

    /// Enter or leave simple full screen, which covers the screen in place.
    pub fn set_simple_full_screen(&mut self, fullscreen: bool) {
        self.request(ModeRequest::SimpleFullscreen(fullscreen));
    }

    /// Whether the window is in simple full screen.
    pub fn is_simple_full_screen(&self) -> bool {
        self.mode() == ModeState::SimpleFullscreen
    }

    /// Enter or leave kiosk mode.
    pub fn set_kiosk(&mut self, kiosk: bool) {
        self.request(ModeRequest::Kiosk(kiosk));
    }

    /// Whether the window is in kiosk mode.
    pub fn is_kiosk(&self) -> bool {
        self.mode() == ModeState::Kiosk
    }

    // Capabilities

    /// Enable or disable a capability.
    ///
    /// Takes effect immediately in every mode; it never changes the mode.
    pub fn set_capability(&mut self, capability: Capability, enabled: bool) {
        if self.props.set_capability(capability, enabled) {
            self.host.set_capability(capability, enabled);
            tracing::debug!(target: targets::FACADE, %capability, enabled, "capability changed");
            self.capability_changed.emit((capability, enabled));
        }
    }

    /// Allow or forbid resizing.
    pub fn set_resizable(&mut self, resizable: bool) {
        self.set_capability(Capability::Resizable, resizable);
    }

    /// Whether the window can be resized; the last value set, in every mode.
    pub fn is_resizable(&self) -> bool {
        self.props.is_resizable()
    }

    /// Allow or forbid dragging the window.
    pub fn set_movable(&mut self, movable: bool) {
        self.set_capability(Capability::Movable, movable);
    }

    /// Whether the window can be moved.
    pub fn is_movable(&self) -> bool {
        self.props.is_movable()
    }

    /// Enable or disable the minimize button.
    pub fn set_minimizable(&mut self, minimizable: bool) {
        self.set_capability(Capability::Minimizable, minimizable);
    }

    /// Whether the window can be minimized.
    pub fn is_minimizable(&self) -> bool {
        self.props.is_minimizable()
    }

    /// Enable or disable the zoom button.
    pub fn set_maximizable(&mut self, maximizable: bool) {
        self.set_capability(Capability::Maximizable, maximizable);
    }

    /// Whether the window can be maximized.
    pub fn is_maximizable(&self) -> bool {
        self.props.is_maximizable()
    }

    /// Allow or forbid native full screen.
    pub fn set_fullscreenable(&mut self, fullscreenable: bool) {
        self.set_capability(Capability::Fullscreenable, fullscreenable);
    }

    /// Whether the window can enter native full screen.
    pub fn is_fullscreenable(&self) -> bool {
        self.props.is_fullscreenable()
    }

    /// Enable or disable the close button.
    pub fn set_closable(&mut self, closable: bool) {
        self.set_capability(Capability::Closable, closable);
    }

    /// Whether the window can be closed by the user.
    pub fn is_closable(&self) -> bool {
        self.props.is_closable()
    }

    /// Keep the window out of the taskbar or window menu.
    pub fn set_skip_taskbar(&mut self, skip: bool) {
        if self.props.skip_taskbar.set(skip) {
            self.host.set_skip_taskbar(skip);
        }
    }

    // Stacking

    /// Keep the window above others at a named level.
    ///
    /// With `top == false` the window returns to the normal level and `level`
    /// is not inspected. An unknown level name or an out-of-range
    /// `relative_level` is an error and changes nothing.
    pub fn set_always_on_top(
        &mut self,
        top: bool,
        level: &str,
        relative_level: i32,
    ) -> WindowResult<()> {
        let absolute = if top {
            level.parse::<WindowLevel>()?.resolve(relative_level)?
        } else {
            WindowLevel::Normal.value()
        };
        self.apply_window_level(absolute);
        Ok(())
    }

    fn apply_window_level(&mut self, level: i32) {
        if self.props.window_level.set(level) {
            self.host.set_window_level(level);
            tracing::debug!(target: targets::FACADE, level, "window level changed");
        }
    }

    /// Whether the window sits above the normal level.
    pub fn is_always_on_top(&self) -> bool {
        self.props.window_level() != WindowLevel::Normal.value()
    }

    // Cosmetics

    /// Set the title bar text.
    pub fn set_title(&mut self, title: &str) {
        if self.props.title.set(title.to_string()) {
            self.host.set_title(title);
        }
    }

    /// The title bar text.
    pub fn title(&self) -> String {
        self.props.title()
    }

    /// Set the opacity; the host clamps it to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) {
        let applied = self.host.set_opacity(opacity);
        self.props.opacity.set(applied);
    }

    /// The applied opacity.
    pub fn opacity(&self) -> f64 {
        self.props.opacity()
    }

    /// Set the background colour.
    ///
    /// While vibrancy is active the colour is remembered and applied when
    /// vibrancy is removed.
    pub fn set_background_color(&mut self, color: Color) {
        if self.vibrancy.is_some() {
            self.saved_background = Some(color);
            return;
        }
        if self.props.background_color.set(color) {
            self.host.set_background_color(color);
        }
    }

    /// The background colour.
    pub fn background_color(&self) -> Color {
        self.props.background_color()
    }

    /// Show or hide the window shadow.
    pub fn set_has_shadow(&mut self, has_shadow: bool) {
        if self.props.has_shadow.set(has_shadow) {
            self.host.set_has_shadow(has_shadow);
        }
    }

    /// Whether the window draws a shadow.
    pub fn has_shadow(&self) -> bool {
        self.props.has_shadow()
    }

    /// Associate a file with the window's title bar.
    pub fn set_represented_filename(&mut self, path: &str) {
        if self.props.represented_filename.set(path.to_string()) {
            self.host.set_represented_filename(path);
        }
    }

    /// The file shown in the title bar.
    pub fn represented_filename(&self) -> String {
        self.props.represented_filename()
    }

    /// Mark the represented document as having unsaved changes.
    pub fn set_document_edited(&mut self, edited: bool) {
        if self.props.document_edited.set(edited) {
            self.host.set_document_edited(edited);
        }
    }

    /// Whether the document is marked as edited.
    pub fn is_document_edited(&self) -> bool {
        self.props.is_document_edited()
    }

    /// Apply a vibrancy material, or remove it with `None`.
    ///
    /// The background is made transparent while a material is active and the
    /// previous colour comes back when it is removed.
    pub fn set_vibrancy(&mut self, kind: Option<&str>) {
        let Some(effect) = self.collaborators.vibrancy.as_mut() else {
            tracing::debug!(
                target: targets::FACADE,
                "set_vibrancy ignored: no vibrancy collaborator"
            );
            return;
        };
        effect.set_vibrancy(kind);

        match kind {
            Some(kind) => {
                if self.vibrancy.is_none() {
                    self.saved_background = Some(self.props.background_color());
                }
                self.vibrancy = Some(kind.to_string());
                if self.props.background_color.set(Color::TRANSPARENT) {
                    self.host.set_background_color(Color::TRANSPARENT);
                }
            }
            None => {
                self.vibrancy = None;
                if let Some(color) = self.saved_background.take() {
                    self.set_background_color(color);
                }
            }
        }
    }

    /// The active vibrancy material.
    pub fn vibrancy(&self) -> Option<&str> {
        self.vibrancy.as_deref()
    }

    /// Show or hide the window buttons.
    ///
    /// Returns `false` for `CustomButtonsOnHover`, which manages its own buttons.
    pub fn set_window_button_visibility(&mut self, visible: bool) -> bool {
        if self.decoration.has_custom_buttons() {
            tracing::debug!(
                target: targets::FACADE,
                "window button visibility is managed by the title bar style"
            );
            return false;
        }
        if self.props.window_button_visibility.set(Some(visible)) {
            self.host.set_window_button_visibility(visible);
            if let Some(view) = self.collaborators.content_view.as_mut() {
                view.refresh_overlays();
            }
        }
        true
    }

    /// Explicit button visibility; `None` means the title bar style decides.
    pub fn window_button_visibility(&self) -> Option<bool> {
        self.props.window_button_visibility()
    }

    /// Exclude the window content from screen capture.
    pub fn set_content_protection(&mut self, enabled: bool) {
        if self.props.content_protection.set(enabled) {
            self.host.set_content_protection(enabled);
        }
    }

    /// Whether screen capture is blocked.
    pub fn is_content_protected(&self) -> bool {
        self.props.content_protection()
    }

    /// Let mouse events pass through to windows below.
    ///
    /// With `forward`, pointer movement keeps reaching the window while
    /// clicks pass through. `forward` has no effect when `ignore` is false.
    pub fn set_ignore_mouse_events(&mut self, ignore: bool, forward: bool) {
        let forward = ignore && forward;
        let ignore_changed = self.props.ignore_mouse_events.set(ignore);
        let forward_changed = self.props.forward_mouse_events.set(forward);
        if ignore_changed || forward_changed {
            self.host.set_ignore_mouse_events(ignore, forward);
        }
    }

    /// Whether clicks pass through the window.
    pub fn ignores_mouse_events(&self) -> bool {
        self.props.ignores_mouse_events()
    }

    /// Whether pointer movement is forwarded while clicks pass through.
    pub fn forwards_mouse_events(&self) -> bool {
        self.props.forwards_mouse_events()
    }

    /// Hide the cursor while typing.
    pub fn set_auto_hide_cursor(&mut self, auto_hide: bool) {
        if self.props.auto_hide_cursor.set(auto_hide) {
            self.host.set_auto_hide_cursor(auto_hide);
        }
    }

    /// Whether the cursor hides while typing.
    pub fn auto_hide_cursor(&self) -> bool {
        self.props.auto_hide_cursor()
    }

    /// Show the window on every workspace.
    pub fn set_visible_on_all_workspaces(&mut self, visible: bool, include_fullscreen: bool) {
        self.props.visible_on_all_workspaces.set(visible);
        self.host.set_visible_on_all_workspaces(visible, include_fullscreen);
    }

    /// Whether the window shows on every workspace.
    pub fn is_visible_on_all_workspaces(&self) -> bool {
        self.props.is_visible_on_all_workspaces()
    }

    // Taskbar / dock

    /// Show progress on the taskbar entry. Negative values hide the bar and
    /// values above one show an indeterminate bar.
    pub fn set_progress_bar(&mut self, progress: f64, state: ProgressState) {
        match self.collaborators.taskbar.as_mut() {
            Some(taskbar) => taskbar.set_progress(TaskbarProgress::from_value(progress, state)),
            None => tracing::debug!(
                target: targets::FACADE,
                "set_progress_bar ignored: no taskbar collaborator"
            ),
        }
    }

    /// Badge the taskbar entry, or clear the badge with `None`.
    pub fn set_overlay_icon(&mut self, icon: Option<&OverlayIcon>, description: &str) {
        match self.collaborators.taskbar.as_mut() {
            Some(taskbar) => taskbar.set_overlay_icon(icon, description),
            None => tracing::debug!(
                target: targets::FACADE,
                "set_overlay_icon ignored: no taskbar collaborator"
            ),
        }
    }

    // Tabs

    fn with_tabs(
        &mut self,
        operation: &str,
        f: impl FnOnce(&mut Box<dyn TabGroup>) -> bool,
    ) -> bool {
        match self.collaborators.tab_group.as_mut() {
            Some(tabs) => f(tabs),
            None => {
                tracing::debug!(
                    target: targets::FACADE,
                    operation,
                    "tab operation ignored: no tab group"
                );
                false
            }
        }
    }

    /// Select the previous tab. Returns `false` without a tab group.
    pub fn select_previous_tab(&mut self) -> bool {
        self.with_tabs("select_previous_tab", |tabs| tabs.select_previous_tab())
    }

    /// Select the next tab. Returns `false` without a tab group.
    pub fn select_next_tab(&mut self) -> bool {
        self.with_tabs("select_next_tab", |tabs| tabs.select_next_tab())
    }

    /// Merge every window into this tab group.
    pub fn merge_all_windows(&mut self) -> bool {
        self.with_tabs("merge_all_windows", |tabs| tabs.merge_all_windows())
    }

    /// Move the current tab into its own window.
    pub fn move_tab_to_new_window(&mut self) -> bool {
        self.with_tabs("move_tab_to_new_window", |tabs| tabs.move_tab_to_new_window())
    }

    /// Show or hide the tab bar.
    pub fn toggle_tab_bar(&mut self) -> bool {
        self.with_tabs("toggle_tab_bar", |tabs| tabs.toggle_tab_bar())
    }

    /// Add another window as a tab of this one.
    pub fn add_tabbed_window(&mut self, window: NativeWindowId) -> bool {
        if window == self.id() {
            tracing::debug!(target: targets::FACADE, "a window cannot be added as its own tab");
            return false;
        }
        self.with_tabs("add_tabbed_window", |tabs| tabs.add_tabbed_window(window))
    }

    // Touch bar

    /// Replace the touch bar items.
    pub fn set_touch_bar(&mut self, items: &[TouchBarItem]) {
        match self.collaborators.touch_bar.as_mut() {
            Some(touch_bar) => touch_bar.set_items(items),
            None => tracing::debug!(target: targets::FACADE, "set_touch_bar ignored: no touch bar"),
        }
    }

    /// Redraw one touch bar item.
    pub fn refresh_touch_bar_item(&mut self, id: &str) {
        match self.collaborators.touch_bar.as_mut() {
            Some(touch_bar) => touch_bar.refresh_item(id),
            None => tracing::debug!(
                target: targets::FACADE,
                id,
                "refresh_touch_bar_item ignored: no touch bar"
            ),
        }
    }

    /// Replace the item shown in the escape key slot.
    pub fn set_escape_touch_bar_item(&mut self, item: Option<&TouchBarItem>) {
        match self.collaborators.touch_bar.as_mut() {
            Some(touch_bar) => touch_bar.set_escape_item(item),
            None => tracing::debug!(
                target: targets::FACADE,
                "set_escape_touch_bar_item ignored: no touch bar"
            ),
        }
    }

    // File preview

    /// Open a quick-look preview of `path`.
    pub fn preview_file(&mut self, path: impl AsRef<Path>, display_name: &str) {
        match self.collaborators.file_preview.as_mut() {
            Some(preview) => preview.preview(path.as_ref(), display_name),
            None => tracing::debug!(
                target: targets::FACADE,
                "preview_file ignored: no file preview"
            ),
        }
    }

    /// Dismiss the file preview.
    pub fn close_file_preview(&mut self) {
        if let Some(preview) = self.collaborators.file_preview.as_mut() {
            preview.close();
        }
    }
}

/// The frame a window starts with.
fn initial_frame(host: &dyn HostWindow, options: &WindowOptions, decoration: Decoration) -> Rect {
    let size = options.size();
    let mut frame = Rect::new(0, 0, size.width, size.height);
    if options.use_content_size() {
        frame = decoration.content_bounds_to_window_bounds(frame);
        frame.x = 0;
        frame.y = 0;
    }

    let work_area = host.work_area();
    match options.position() {
        Some((x, y)) if !options.center() => {
            frame.x = x;
            frame.y = y;
            frame
        }
        _ => frame.centered_in(work_area),
    }
}

impl std::fmt::Debug for NativeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeWindow")
            .field("id", &self.id())
            .field("mode", &self.mode())
            .field("bounds", &self.bounds())
            .field("decoration", &self.decoration)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(NativeWindow: Send);
