//! The window mode state machine.
//!
//! [`ModeController`] owns the [`ModeStack`] and decides, for every
//! [`ModeRequest`], whether it is legal, which host commands carry it out and
//! what must be captured so that leaving the mode restores the window.
//!
//! Direct transitions are `Normal ⇄ {Maximized, Minimized, Fullscreen,
//! SimpleFullscreen, Kiosk}` and `Fullscreen ⇄ Kiosk`. Any other change first
//! leaves the current mode for `Normal`. If leaving starts a host animation,
//! the original request is parked at the head of the transition queue and
//! resumes when the animation completes.
//!
//! Mode state changes as soon as a request is accepted; the host animation
//! may lag behind. Illegal requests are ignored and logged at `debug`.
//!
//! Kiosk takes precedence over simple full screen: asking for kiosk leaves
//! simple full screen first, and asking for simple full screen during kiosk
//! is ignored.

use std::mem;

use horizon_casement_core::logging::{span_names, targets};
use horizon_casement_core::mode_debug;

use crate::geometry::Rect;
use crate::window::collaborators::ContentView;
use crate::window::decoration::Decoration;
use crate::window::host::{HostEvent, HostTransition, HostWindow};
use crate::window::mode::{ModeStack, ModeState, TransitionSnapshot};
use crate::window::presentation::{PresentationContext, PresentationOptions};
use crate::window::properties::{Capability, WindowProperties};
use crate::window::transition::{Admission, ModeRequest, TransitionToken, TransitionTracker};
use crate::window::window_level::WindowLevel;

/// Creation-time switches that change how modes behave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeBehavior {
    /// Native full-screen requests become simple full-screen requests.
    pub always_simple_fullscreen: bool,
    /// Maximize to the content's preferred width instead of the work area.
    pub zoom_to_page_width: bool,
    /// Keep the title visible in simple full screen.
    pub fullscreen_window_title: bool,
}

/// Everything a transition may touch, borrowed from the window for one call.
pub(crate) struct ModeEnv<'a> {
    pub(crate) host: &'a mut dyn HostWindow,
    pub(crate) props: &'a WindowProperties,
    pub(crate) decoration: Decoration,
    pub(crate) content: Option<&'a dyn ContentView>,
    pub(crate) capability_changes: Vec<(Capability, bool)>,
}

impl<'a> ModeEnv<'a> {
    pub(crate) fn new(
        host: &'a mut dyn HostWindow,
        props: &'a WindowProperties,
        decoration: Decoration,
        content: Option<&'a dyn ContentView>,
    ) -> Self {
        Self {
            host,
            props,
            decoration,
            content,
            capability_changes: Vec::new(),
        }
    }

    fn set_capability(&mut self, capability: Capability, enabled: bool) {
        if self.props.set_capability(capability, enabled) {
            self.host.set_capability(capability, enabled);
            self.capability_changes.push((capability, enabled));
        }
    }

    fn set_window_level(&mut self, level: i32) {
        if self.props.window_level.set(level) {
            self.host.set_window_level(level);
        }
    }

    fn set_frame(&mut self, frame: Rect) {
        let applied = self.host.set_frame(frame, false);
        self.props.bounds.set(applied);
    }

    fn sync_bounds(&mut self) {
        self.props.bounds.set(self.host.frame());
    }
}

/// Drives mode transitions for one window.
#[derive(Debug)]
pub struct ModeController {
    stack: ModeStack,
    normal_bounds: Rect,
    tracker: TransitionTracker,
    presentation: PresentationContext,
    behavior: ModeBehavior,
}

impl ModeController {
    /// Create a controller for a window starting in `Normal` at `bounds`.
    pub fn new(presentation: PresentationContext, behavior: ModeBehavior, bounds: Rect) -> Self {
        Self {
            stack: ModeStack::Normal,
            normal_bounds: bounds,
            tracker: TransitionTracker::new(),
            presentation,
            behavior,
        }
    }

    /// The observable mode.
    pub fn mode(&self) -> ModeState {
        self.stack.state()
    }

    /// The owned mode representation.
    pub fn stack(&self) -> &ModeStack {
        &self.stack
    }

    /// The creation-time behaviour switches.
    pub fn behavior(&self) -> ModeBehavior {
        self.behavior
    }

    /// The presentation context this controller writes to.
    pub fn presentation(&self) -> &PresentationContext {
        &self.presentation
    }

    /// The transition tracker.
    pub fn tracker(&self) -> &TransitionTracker {
        &self.tracker
    }

    /// The frame the window had when it last left `Normal`.
    pub fn saved_normal_bounds(&self) -> Rect {
        self.normal_bounds
    }

    /// Submit a mode request.
    pub(crate) fn request(&mut self, request: ModeRequest, env: &mut ModeEnv<'_>) {
        let span = tracing::debug_span!(
            target: targets::MODE,
            "mode",
            operation = span_names::MODE_REQUEST,
            ?request,
            from = %self.mode()
        );
        let _entered = span.enter();

        match self.tracker.admit(request) {
            Admission::Coalesced | Admission::Queued => {}
            Admission::Apply | Admission::Superseded(_) => self.apply(request, env),
        }
    }

    /// Handle the host's report that an animated transition completed.
    ///
    /// Returns `false` if the token was stale.
    pub(crate) fn transition_finished(
        &mut self,
        token: TransitionToken,
        env: &mut ModeEnv<'_>,
    ) -> bool {
        if !self.tracker.complete(token) {
            return false;
        }
        env.sync_bounds();
        while let Some(request) = self.tracker.next_pending() {
            self.apply(request, env);
        }
        true
    }

    /// Follow a state change the user made through the native chrome.
    ///
    /// Ignored while a transition is animating.
    pub(crate) fn sync_host_event(&mut self, event: HostEvent, env: &mut ModeEnv<'_>) {
        if self.tracker.is_busy() {
            tracing::trace!(target: targets::MODE, ?event, "host event during transition ignored");
            return;
        }

        match (event, self.mode()) {
            (HostEvent::EnteredFullscreen, ModeState::Normal) => {
                self.normal_bounds = env.props.bounds();
                self.stack = ModeStack::Fullscreen;
            }
            (HostEvent::EnteredFullscreen, ModeState::Maximized) => {
                self.stack = ModeStack::Fullscreen;
            }
            (HostEvent::ExitedFullscreen, ModeState::Fullscreen) => {
                self.stack = ModeStack::Normal;
            }
            (HostEvent::ExitedFullscreen, ModeState::Kiosk) => {
                if let ModeStack::Kiosk { snapshot, .. } = mem::take(&mut self.stack) {
                    self.restore_kiosk_snapshot(snapshot, env);
                }
            }
            (HostEvent::Minimized, ModeState::Normal) => {
                self.normal_bounds = env.props.bounds();
                self.stack = ModeStack::Minimized;
            }
            (HostEvent::Minimized, ModeState::Maximized) => {
                self.stack = ModeStack::Minimized;
            }
            (HostEvent::Restored, ModeState::Minimized)
            | (HostEvent::Unmaximized, ModeState::Maximized) => {
                self.stack = ModeStack::Normal;
            }
            (HostEvent::Maximized, ModeState::Normal) => {
                self.normal_bounds = env.props.bounds();
                self.stack = ModeStack::Maximized;
            }
            _ => return,
        }
        mode_debug!(?event, to = %self.mode(), "mode followed host");
        env.sync_bounds();
    }

    fn apply(&mut self, request: ModeRequest, env: &mut ModeEnv<'_>) {
        let before = self.mode();
        match request {
            ModeRequest::Fullscreen(on) if self.behavior.always_simple_fullscreen => {
                self.simple_fullscreen(on, env)
            }
            ModeRequest::Fullscreen(true) => self.enter_fullscreen(env),
            ModeRequest::Fullscreen(false) => self.exit_fullscreen(env),
            ModeRequest::SimpleFullscreen(on) => self.simple_fullscreen(on, env),
            ModeRequest::Kiosk(true) => self.enter_kiosk(env),
            ModeRequest::Kiosk(false) => self.exit_kiosk(env),
            ModeRequest::Maximize => self.maximize(env),
            ModeRequest::Unmaximize => self.unmaximize(env),
            ModeRequest::Minimize => self.minimize(env),
            ModeRequest::Restore => self.restore(env),
        }
        let after = self.mode();
        if before != after {
            mode_debug!(?request, from = %before, to = %after, "mode changed");
        }
    }

    // Leaving to Normal

    /// Leave the current mode for `Normal`.
    ///
    /// Returns `false` if an exit animation started; `resume`, if any, is then
    /// queued to run once it completes.
    fn leave_to_normal(&mut self, resume: Option<ModeRequest>, env: &mut ModeEnv<'_>) -> bool {
        match mem::take(&mut self.stack) {
            ModeStack::Normal => true,
            ModeStack::Minimized => {
                env.host.set_minimized(false);
                env.sync_bounds();
                true
            }
            ModeStack::Maximized => {
                env.host.set_maximized(false);
                env.set_frame(self.normal_bounds);
                true
            }
            ModeStack::SimpleFullscreen(snapshot) => {
                self.restore_simple_snapshot(snapshot, env);
                true
            }
            ModeStack::Fullscreen => {
                self.native_fullscreen_off(ModeRequest::Fullscreen(false), resume, env)
            }
            ModeStack::Kiosk { snapshot, .. } => {
                self.restore_kiosk_snapshot(snapshot, env);
                self.native_fullscreen_off(ModeRequest::Kiosk(false), resume, env)
            }
        }
    }

    /// Turn native full screen off, the stack already being `Normal`.
    fn native_fullscreen_off(
        &mut self,
        started_by: ModeRequest,
        resume: Option<ModeRequest>,
        env: &mut ModeEnv<'_>,
    ) -> bool {
        if !self.start_native_fullscreen(false, started_by, env) {
            return true;
        }
        if let Some(request) = resume {
            self.tracker.defer(request);
        }
        false
    }

    /// Issue a native full-screen command. Returns `true` if it animates.
    fn start_native_fullscreen(
        &mut self,
        on: bool,
        request: ModeRequest,
        env: &mut ModeEnv<'_>,
    ) -> bool {
        let token = self.tracker.issue();
        match env.host.set_fullscreen(on, token) {
            HostTransition::Animating => {
                self.tracker.begin(token, request);
                true
            }
            HostTransition::Finished => {
                env.sync_bounds();
                false
            }
        }
    }

    fn leave_for(&mut self, resume: ModeRequest, env: &mut ModeEnv<'_>) -> bool {
        if matches!(self.stack, ModeStack::Normal) {
            return true;
        }
        self.leave_to_normal(Some(resume), env)
    }

    // Native full screen

    fn enter_fullscreen(&mut self, env: &mut ModeEnv<'_>) {
        if self.stack.is_native_fullscreen() {
            return;
        }
        if !env.props.is_fullscreenable() {
            mode_debug!("fullscreen ignored: window is not fullscreenable");
            return;
        }
        if !self.leave_for(ModeRequest::Fullscreen(true), env) {
            return;
        }

        self.normal_bounds = env.props.bounds();
        self.stack = ModeStack::Fullscreen;
        self.start_native_fullscreen(true, ModeRequest::Fullscreen(true), env);
    }

    fn exit_fullscreen(&mut self, env: &mut ModeEnv<'_>) {
        if self.stack.is_native_fullscreen() {
            self.leave_to_normal(None, env);
        }
    }

    // Simple full screen

    fn simple_fullscreen(&mut self, on: bool, env: &mut ModeEnv<'_>) {
        if !on {
            match mem::take(&mut self.stack) {
                ModeStack::SimpleFullscreen(snapshot) => {
                    self.restore_simple_snapshot(snapshot, env)
                }
                other => self.stack = other,
            }
            return;
        }

        match self.stack {
            ModeStack::SimpleFullscreen(_) => return,
            ModeStack::Kiosk { .. } => {
                mode_debug!("simple fullscreen ignored: kiosk takes precedence");
                return;
            }
            _ => {}
        }
        if !self.leave_for(ModeRequest::SimpleFullscreen(true), env) {
            return;
        }

        let props = env.props;
        self.normal_bounds = props.bounds();
        let snapshot = TransitionSnapshot {
            was_maximizable: props.is_maximizable(),
            was_movable: props.is_movable(),
            was_resizable: props.is_resizable(),
            was_fullscreenable: props.is_fullscreenable(),
            original_frame: props.bounds(),
            original_window_level: props.window_level(),
            original_presentation_options: self.presentation.get(),
        };

        self.presentation.set(PresentationOptions::SIMPLE_FULLSCREEN);
        env.set_window_level(WindowLevel::MainMenu.value());
        env.set_capability(Capability::Maximizable, false);
        env.set_capability(Capability::Movable, false);
        if !self.behavior.fullscreen_window_title {
            env.host.set_title_visible(false);
        }
        let screen = env.host.screen_frame();
        env.set_frame(screen);
        self.stack = ModeStack::SimpleFullscreen(snapshot);
    }

    fn restore_simple_snapshot(&mut self, snapshot: TransitionSnapshot, env: &mut ModeEnv<'_>) {
        self.presentation.set(snapshot.original_presentation_options);
        env.set_window_level(snapshot.original_window_level);
        env.set_capability(Capability::Maximizable, snapshot.was_maximizable);
        env.set_capability(Capability::Movable, snapshot.was_movable);
        env.set_capability(Capability::Resizable, snapshot.was_resizable);
        if !self.behavior.fullscreen_window_title {
            env.host.set_title_visible(true);
        }
        env.set_frame(snapshot.original_frame);
        self.stack = ModeStack::Normal;
    }

    // Kiosk

    fn enter_kiosk(&mut self, env: &mut ModeEnv<'_>) {
        let over_fullscreen = match self.stack {
            ModeStack::Kiosk { .. } => return,
            ModeStack::Fullscreen => true,
            ModeStack::Normal => false,
            _ => {
                if !self.leave_for(ModeRequest::Kiosk(true), env) {
                    return;
                }
                false
            }
        };

        let props = env.props;
        if !over_fullscreen {
            self.normal_bounds = props.bounds();
        }
        let snapshot = TransitionSnapshot {
            was_maximizable: props.is_maximizable(),
            was_movable: props.is_movable(),
            was_resizable: props.is_resizable(),
            was_fullscreenable: props.is_fullscreenable(),
            original_frame: props.bounds(),
            original_window_level: props.window_level(),
            original_presentation_options: self.presentation.get(),
        };

        self.presentation.set(PresentationOptions::KIOSK);
        env.set_capability(Capability::Fullscreenable, true);
        env.set_window_level(WindowLevel::Status.value());
        self.stack = ModeStack::Kiosk {
            snapshot,
            over_fullscreen,
        };

        if !over_fullscreen {
            self.start_native_fullscreen(true, ModeRequest::Kiosk(true), env);
        }
    }

    fn exit_kiosk(&mut self, env: &mut ModeEnv<'_>) {
        match mem::take(&mut self.stack) {
            ModeStack::Kiosk {
                snapshot,
                over_fullscreen: true,
            } => {
                self.restore_kiosk_snapshot(snapshot, env);
                self.stack = ModeStack::Fullscreen;
            }
            ModeStack::Kiosk {
                snapshot,
                over_fullscreen: false,
            } => {
                self.restore_kiosk_snapshot(snapshot, env);
                self.start_native_fullscreen(false, ModeRequest::Kiosk(false), env);
            }
            other => self.stack = other,
        }
    }

    /// Restore what kiosk entry changed; leaves the stack at `Normal`.
    fn restore_kiosk_snapshot(&mut self, snapshot: TransitionSnapshot, env: &mut ModeEnv<'_>) {
        self.presentation.set(snapshot.original_presentation_options);
        env.set_capability(Capability::Fullscreenable, snapshot.was_fullscreenable);
        env.set_window_level(snapshot.original_window_level);
        self.stack = ModeStack::Normal;
    }

    // Maximize / minimize

    fn maximize(&mut self, env: &mut ModeEnv<'_>) {
        match self.stack {
            ModeStack::Maximized => return,
            ModeStack::Kiosk { .. } => {
                mode_debug!("maximize ignored during kiosk");
                return;
            }
            _ => {}
        }
        if !(env.props.is_maximizable() && env.props.is_resizable()) {
            mode_debug!("maximize ignored: window is not maximizable");
            return;
        }
        if !self.leave_for(ModeRequest::Maximize, env) {
            return;
        }

        self.normal_bounds = env.props.bounds();
        env.host.set_maximized(true);
        match self.zoomed_frame(env) {
            Some(frame) => env.set_frame(frame),
            None => env.sync_bounds(),
        }
        self.stack = ModeStack::Maximized;
    }

    /// The zoom frame when zooming to the content's preferred width.
    fn zoomed_frame(&self, env: &ModeEnv<'_>) -> Option<Rect> {
        if !self.behavior.zoom_to_page_width {
            return None;
        }
        let preferred = env.content.and_then(|view| view.preferred_width())?;
        let work_area = env.host.work_area();
        let current = self.normal_bounds;

        let width = preferred
            .saturating_add(env.decoration.insets().width())
            .max(current.width)
            .min(work_area.width);
        let x = if current.x.saturating_add(width) > work_area.right() {
            work_area.right().saturating_sub(width)
        } else {
            current.x.max(work_area.x)
        };
        Some(Rect::new(x, work_area.y, width, work_area.height))
    }

    fn unmaximize(&mut self, env: &mut ModeEnv<'_>) {
        if !matches!(self.stack, ModeStack::Maximized) {
            return;
        }
        if !env.props.is_resizable() {
            mode_debug!("unmaximize ignored: window is not resizable");
            return;
        }
        self.leave_to_normal(None, env);
    }

    fn minimize(&mut self, env: &mut ModeEnv<'_>) {
        match self.stack {
            ModeStack::Minimized => return,
            ModeStack::Kiosk { .. } => {
                mode_debug!("minimize ignored during kiosk");
                return;
            }
            _ => {}
        }
        if !env.props.is_minimizable() {
            mode_debug!("minimize ignored: window is not minimizable");
            return;
        }
        if !self.leave_for(ModeRequest::Minimize, env) {
            return;
        }

        self.normal_bounds = env.props.bounds();
        env.host.set_minimized(true);
        self.stack = ModeStack::Minimized;
    }

    fn restore(&mut self, env: &mut ModeEnv<'_>) {
        if matches!(self.stack, ModeStack::Minimized) {
            self.leave_to_normal(None, env);
        }
    }
}
