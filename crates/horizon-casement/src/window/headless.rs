//! An in-memory host window.
//!
//! [`HeadlessHost`] behaves like a well-mannered platform window on a single
//! virtual screen: frames are clamped to the screen, opacity is clamped to
//! `[0, 1]`, maximizing fills the work area and native full screen covers the
//! whole screen and restores the previous frame on exit. Full-screen changes
//! can optionally animate, in which case completion must be reported back
//! through `NativeWindow::handle_host_event`.
//!
//! The host is a cheap handle around shared state, so a clone kept outside
//! the window can inspect what the window layer asked for:
//!
//! ```
//! use horizon_casement::window::{HeadlessHost, NativeWindow, WindowOptions};
//!
//! let host = HeadlessHost::new();
//! let mut window = NativeWindow::new(Box::new(host.clone()), WindowOptions::default());
//! window.maximize();
//! assert!(host.is_maximized());
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use horizon_casement_core::logging::targets;
use parking_lot::Mutex;

use crate::color::Color;
use crate::geometry::Rect;
use crate::window::host::{HostTransition, HostWindow, NativeWindowId, normalize_opacity};
use crate::window::properties::Capability;
use crate::window::transition::TransitionToken;

/// Height reserved for the menu bar at the top of the virtual screen.
pub const MENU_BAR_HEIGHT: i32 = 25;

static NEXT_HEADLESS_ID: AtomicU64 = AtomicU64::new(1);

/// A command received by a [`HeadlessHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SetFrame(Rect),
    SetVisible(bool),
    SetMinimized(bool),
    SetMaximized(bool),
    SetFullscreen(bool),
    SetCapability(Capability, bool),
    SetWindowLevel(i32),
    SetTitleVisible(bool),
    SetBackgroundColor(Color),
    RequestAttention(bool),
    MoveToTop,
    Close,
}

#[derive(Debug)]
struct HeadlessState {
    id: NativeWindowId,
    screen: Rect,
    frame: Rect,
    restore_frame: Option<Rect>,
    fullscreen_restore_frame: Option<Rect>,
    visible: bool,
    focused: bool,
    title: String,
    title_visible: bool,
    minimized: bool,
    maximized: bool,
    fullscreen: bool,
    animate_fullscreen: bool,
    started_transitions: Vec<TransitionToken>,
    capabilities: HashMap<Capability, bool>,
    window_level: i32,
    opacity: f64,
    background_color: Color,
    has_shadow: bool,
    on_all_workspaces: bool,
    content_protection: bool,
    ignore_mouse_events: bool,
    forward_mouse_events: bool,
    enabled: bool,
    skip_taskbar: bool,
    attention: bool,
    closed: bool,
    calls: Vec<HostCall>,
}

/// An in-memory [`HostWindow`] on a virtual screen.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    state: Arc<Mutex<HeadlessState>>,
}

impl HeadlessHost {
    /// A host on a 1920x1080 screen.
    pub fn new() -> Self {
        Self::with_screen(Rect::new(0, 0, 1920, 1080))
    }

    /// A host on a screen of the given frame.
    pub fn with_screen(screen: Rect) -> Self {
        let id = NativeWindowId::from_raw(NEXT_HEADLESS_ID.fetch_add(1, Ordering::Relaxed));
        Self {
            state: Arc::new(Mutex::new(HeadlessState {
                id,
                screen,
                frame: Rect::new(screen.x, screen.y + MENU_BAR_HEIGHT, 0, 0),
                restore_frame: None,
                fullscreen_restore_frame: None,
                visible: false,
                focused: false,
                title: String::new(),
                title_visible: true,
                minimized: false,
                maximized: false,
                fullscreen: false,
                animate_fullscreen: false,
                started_transitions: Vec::new(),
                capabilities: Capability::ALL.iter().map(|&c| (c, true)).collect(),
                window_level: 0,
                opacity: 1.0,
                background_color: Color::WHITE,
                has_shadow: true,
                on_all_workspaces: false,
                content_protection: false,
                ignore_mouse_events: false,
                forward_mouse_events: false,
                enabled: true,
                skip_taskbar: false,
                attention: false,
                closed: false,
                calls: Vec::new(),
            })),
        }
    }

    /// Make native full-screen changes animate.
    pub fn with_animated_fullscreen(self, animate: bool) -> Self {
        self.state.lock().animate_fullscreen = animate;
        self
    }

    /// Tokens of animated transitions started so far, oldest first.
    pub fn started_transitions(&self) -> Vec<TransitionToken> {
        self.state.lock().started_transitions.clone()
    }

    /// The most recent animated transition token.
    pub fn last_transition(&self) -> Option<TransitionToken> {
        self.state.lock().started_transitions.last().copied()
    }

    /// Every command received, oldest first.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().calls.clone()
    }

    /// Forget the recorded commands.
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    pub fn is_focused(&self) -> bool {
        self.state.lock().focused
    }

    pub fn title(&self) -> String {
        self.state.lock().title.clone()
    }

    pub fn is_title_visible(&self) -> bool {
        self.state.lock().title_visible
    }

    pub fn is_minimized(&self) -> bool {
        self.state.lock().minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.state.lock().maximized
    }

    pub fn is_fullscreen(&self) -> bool {
        self.state.lock().fullscreen
    }

    /// The last value set for a capability.
    pub fn capability(&self, capability: Capability) -> bool {
        self.state.lock().capabilities.get(&capability).copied().unwrap_or(true)
    }

    pub fn window_level(&self) -> i32 {
        self.state.lock().window_level
    }

    pub fn opacity(&self) -> f64 {
        self.state.lock().opacity
    }

    pub fn background_color(&self) -> Color {
        self.state.lock().background_color
    }

    pub fn has_shadow(&self) -> bool {
        self.state.lock().has_shadow
    }

    pub fn is_visible_on_all_workspaces(&self) -> bool {
        self.state.lock().on_all_workspaces
    }

    pub fn content_protection(&self) -> bool {
        self.state.lock().content_protection
    }

    pub fn ignores_mouse_events(&self) -> bool {
        self.state.lock().ignore_mouse_events
    }

    /// Whether pointer movement is still reported while clicks pass through.
    pub fn forwards_mouse_events(&self) -> bool {
        self.state.lock().forward_mouse_events
    }

    pub fn is_enabled(&self) -> bool {
        self.state.lock().enabled
    }

    pub fn skips_taskbar(&self) -> bool {
        self.state.lock().skip_taskbar
    }

    pub fn is_requesting_attention(&self) -> bool {
        self.state.lock().attention
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Simulate the user dragging the window to a new frame.
    pub fn user_set_frame(&self, frame: Rect) -> Rect {
        let mut state = self.state.lock();
        let applied = clamp_to_screen(frame, state.screen);
        state.frame = applied;
        applied
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_to_screen(frame: Rect, screen: Rect) -> Rect {
    let width = frame.width.clamp(0, screen.width);
    let height = frame.height.clamp(0, screen.height);
    let x = frame.x.clamp(screen.x, screen.right() - width);
    let y = frame.y.clamp(screen.y, screen.bottom() - height);
    Rect::new(x, y, width, height)
}

fn work_area_of(screen: Rect) -> Rect {
    Rect::new(screen.x, screen.y + MENU_BAR_HEIGHT, screen.width, screen.height - MENU_BAR_HEIGHT)
}

impl HostWindow for HeadlessHost {
    fn id(&self) -> NativeWindowId {
        self.state.lock().id
    }

    fn frame(&self) -> Rect {
        self.state.lock().frame
    }

    fn set_frame(&mut self, frame: Rect, _animate: bool) -> Rect {
        let mut state = self.state.lock();
        let applied = clamp_to_screen(frame, state.screen);
        if applied != frame {
            tracing::trace!(target: targets::HOST, ?frame, ?applied, "frame clamped to screen");
        }
        state.frame = applied;
        state.calls.push(HostCall::SetFrame(applied));
        applied
    }

    fn screen_frame(&self) -> Rect {
        self.state.lock().screen
    }

    fn work_area(&self) -> Rect {
        work_area_of(self.state.lock().screen)
    }

    fn set_visible(&mut self, visible: bool, activate: bool) {
        let mut state = self.state.lock();
        state.visible = visible;
        state.focused = visible && activate;
        state.calls.push(HostCall::SetVisible(visible));
    }

    fn focus(&mut self) {
        let mut state = self.state.lock();
        if state.visible {
            state.focused = true;
        }
    }

    fn is_focused(&self) -> bool {
        self.state.lock().focused
    }

    fn set_title(&mut self, title: &str) {
        self.state.lock().title = title.to_string();
    }

    fn set_minimized(&mut self, minimized: bool) {
        let mut state = self.state.lock();
        state.minimized = minimized;
        if minimized {
            state.focused = false;
        }
        state.calls.push(HostCall::SetMinimized(minimized));
    }

    fn set_maximized(&mut self, maximized: bool) {
        let mut state = self.state.lock();
        if maximized && !state.maximized {
            state.restore_frame = Some(state.frame);
            state.frame = work_area_of(state.screen);
        } else if !maximized && state.maximized {
            if let Some(frame) = state.restore_frame.take() {
                state.frame = frame;
            }
        }
        state.maximized = maximized;
        state.calls.push(HostCall::SetMaximized(maximized));
    }

    fn set_fullscreen(&mut self, fullscreen: bool, token: TransitionToken) -> HostTransition {
        let mut state = self.state.lock();
        if fullscreen && !state.fullscreen {
            state.fullscreen_restore_frame = Some(state.frame);
            state.frame = state.screen;
        } else if !fullscreen && state.fullscreen {
            if let Some(frame) = state.fullscreen_restore_frame.take() {
                state.frame = frame;
            }
        }
        state.fullscreen = fullscreen;
        state.calls.push(HostCall::SetFullscreen(fullscreen));

        if state.animate_fullscreen {
            state.started_transitions.push(token);
            HostTransition::Animating
        } else {
            HostTransition::Finished
        }
    }

    fn set_capability(&mut self, capability: Capability, enabled: bool) {
        let mut state = self.state.lock();
        state.capabilities.insert(capability, enabled);
        state.calls.push(HostCall::SetCapability(capability, enabled));
    }

    fn set_window_level(&mut self, level: i32) {
        let mut state = self.state.lock();
        state.window_level = level;
        state.calls.push(HostCall::SetWindowLevel(level));
    }

    fn set_opacity(&mut self, opacity: f64) -> f64 {
        let applied = normalize_opacity(opacity);
        self.state.lock().opacity = applied;
        applied
    }

    fn set_background_color(&mut self, color: Color) {
        let mut state = self.state.lock();
        state.background_color = color;
        state.calls.push(HostCall::SetBackgroundColor(color));
    }

    fn set_has_shadow(&mut self, has_shadow: bool) {
        self.state.lock().has_shadow = has_shadow;
    }

    fn set_title_visible(&mut self, visible: bool) {
        let mut state = self.state.lock();
        state.title_visible = visible;
        state.calls.push(HostCall::SetTitleVisible(visible));
    }

    fn set_visible_on_all_workspaces(&mut self, visible: bool, _include_fullscreen: bool) {
        self.state.lock().on_all_workspaces = visible;
    }

    fn set_content_protection(&mut self, enabled: bool) {
        self.state.lock().content_protection = enabled;
    }

    fn set_ignore_mouse_events(&mut self, ignore: bool, forward: bool) {
        let mut state = self.state.lock();
        state.ignore_mouse_events = ignore;
        state.forward_mouse_events = ignore && forward;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.state.lock().enabled = enabled;
    }

    fn set_skip_taskbar(&mut self, skip: bool) {
        self.state.lock().skip_taskbar = skip;
    }

    fn request_attention(&mut self, flash: bool) {
        let mut state = self.state.lock();
        state.attention = flash;
        state.calls.push(HostCall::RequestAttention(flash));
    }

    fn move_to_top(&mut self) {
        self.state.lock().calls.push(HostCall::MoveToTop);
    }

    fn close(&mut self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.visible = false;
        state.calls.push(HostCall::Close);
    }
}

static_assertions::assert_impl_all!(HeadlessHost: Send, Sync);
