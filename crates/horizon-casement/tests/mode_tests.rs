//! Tests for window mode transitions driven through `NativeWindow`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_casement::geometry::Rect;
use horizon_casement::window::{
    Collaborators, HeadlessHost, HostEvent, ModeState, NativeWindow, PresentationContext,
    PresentationOptions, WindowLevel, WindowOptions,
};

fn open(host: HeadlessHost, options: WindowOptions) -> (NativeWindow, PresentationContext) {
    let presentation = PresentationContext::new();
    let window = NativeWindow::with_context(
        Box::new(host),
        options,
        Collaborators::new(),
        presentation.clone(),
    );
    (window, presentation)
}

fn counter() -> (Arc<AtomicUsize>, impl Fn(&ModeState) + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let slot_count = count.clone();
    (count, move |_: &ModeState| {
        slot_count.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_resizable_reflects_last_set_value_in_every_mode() {
    let (mut window, _) = open(HeadlessHost::new(), WindowOptions::new());

    let modes: [fn(&mut NativeWindow); 5] = [
        |_| {},
        |w| w.maximize(),
        |w| w.set_full_screen(true),
        |w| w.set_simple_full_screen(true),
        |w| w.set_kiosk(true),
    ];

    for enter in modes {
        enter(&mut window);
        let mode = window.mode();
        for value in [false, true, false, true] {
            window.set_resizable(value);
            assert_eq!(window.is_resizable(), value, "in {mode}");
            assert_eq!(window.mode(), mode);
        }
        window.set_kiosk(false);
        window.set_full_screen(false);
        window.set_simple_full_screen(false);
        window.unmaximize();
        assert_eq!(window.mode(), ModeState::Normal);
    }
}

#[test]
fn test_unresizable_maximized_window_stays_maximized() {
    let (mut window, _) = open(HeadlessHost::new(), WindowOptions::new());
    window.maximize();
    window.set_resizable(false);
    assert!(window.is_maximized());

    // Unmaximize needs the window to be resizable.
    window.unmaximize();
    assert!(window.is_maximized());
}

#[test]
fn test_simple_fullscreen_restores_flags_and_bounds() {
    let bounds = Rect::new(100, 100, 400, 300);

    for bits in 0..8u8 {
        let movable = bits & 1 != 0;
        let maximizable = bits & 2 != 0;
        let resizable = bits & 4 != 0;

        let (mut window, presentation) = open(HeadlessHost::new(), WindowOptions::new());
        window.set_bounds(bounds, false);
        window.set_movable(movable);
        window.set_maximizable(maximizable);
        window.set_resizable(resizable);

        window.set_simple_full_screen(true);
        assert!(window.is_simple_full_screen());
        assert!(!window.is_movable());
        assert_eq!(presentation.get(), PresentationOptions::SIMPLE_FULLSCREEN);

        window.set_simple_full_screen(false);
        assert_eq!(window.mode(), ModeState::Normal);
        assert_eq!(window.is_movable(), movable);
        assert_eq!(window.is_maximizable(), maximizable);
        assert_eq!(window.is_resizable(), resizable);
        assert_eq!(window.bounds(), bounds);
        assert_eq!(presentation.get(), PresentationOptions::DEFAULT);
    }
}

#[test]
fn test_simple_fullscreen_reentry_keeps_first_snapshot() {
    let (mut window, _) = open(HeadlessHost::new(), WindowOptions::new());
    let bounds = window.bounds();

    window.set_simple_full_screen(true);
    window.set_simple_full_screen(true);
    window.set_simple_full_screen(false);

    assert!(window.is_movable());
    assert_eq!(window.bounds(), bounds);
}

#[test]
fn test_kiosk_over_fullscreen_exits_to_fullscreen() {
    let (mut window, presentation) = open(HeadlessHost::new(), WindowOptions::new());
    window.set_full_screen(true);
    window.set_kiosk(true);
    assert!(window.is_kiosk());
    assert!(window.is_fullscreen());
    assert_eq!(presentation.get(), PresentationOptions::KIOSK);
    assert!(window.is_always_on_top());

    window.set_kiosk(false);
    assert_eq!(window.mode(), ModeState::Fullscreen);
    assert_eq!(presentation.get(), PresentationOptions::DEFAULT);
    assert!(!window.is_always_on_top());
}

#[test]
fn test_leaving_fullscreen_during_kiosk_ends_in_normal() {
    let (mut window, presentation) = open(HeadlessHost::new(), WindowOptions::new());
    let bounds = window.bounds();
    window.set_full_screen(true);
    window.set_kiosk(true);

    window.set_full_screen(false);
    assert_eq!(window.mode(), ModeState::Normal);
    assert_eq!(presentation.get(), PresentationOptions::DEFAULT);
    assert_eq!(window.bounds(), bounds);
}

#[test]
fn test_kiosk_wins_over_simple_fullscreen() {
    let (mut window, presentation) = open(HeadlessHost::new(), WindowOptions::new());
    window.set_simple_full_screen(true);
    window.set_kiosk(true);
    assert!(window.is_kiosk());
    assert_eq!(presentation.get(), PresentationOptions::KIOSK);

    window.set_simple_full_screen(true);
    assert!(window.is_kiosk());

    window.set_kiosk(false);
    assert_eq!(window.mode(), ModeState::Normal);
    assert!(window.is_movable());
    assert!(window.is_maximizable());
    assert_eq!(presentation.get(), PresentationOptions::DEFAULT);
}

#[test]
fn test_kiosk_raises_level_and_restores_it() {
    let (mut window, _) = open(HeadlessHost::new(), WindowOptions::new());
    window.set_always_on_top(true, "floating", 0).unwrap();

    window.set_kiosk(true);
    assert_eq!(window.properties().window_level(), WindowLevel::Status.value());

    window.set_kiosk(false);
    assert_eq!(window.properties().window_level(), WindowLevel::Floating.value());
}

#[test]
fn test_maximize_twice_notifies_once() {
    let (mut window, _) = open(HeadlessHost::new(), WindowOptions::new());
    let (states, on_state) = counter();
    window.state_changed().connect(on_state);

    let bounds_count = Arc::new(AtomicUsize::new(0));
    let slot_count = bounds_count.clone();
    window.bounds_changed().connect(move |_| {
        slot_count.fetch_add(1, Ordering::SeqCst);
    });

    window.maximize();
    window.maximize();

    assert!(window.is_maximized());
    assert_eq!(states.load(Ordering::SeqCst), 1);
    assert_eq!(bounds_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_maximize_and_restore_normal_bounds() {
    let (mut window, _) = open(HeadlessHost::new(), WindowOptions::new());
    let bounds = Rect::new(50, 60, 500, 400);
    window.set_bounds(bounds, false);

    window.maximize();
    assert_ne!(window.bounds(), bounds);
    assert_eq!(window.normal_bounds(), bounds);
    assert!(!window.is_normal());

    window.unmaximize();
    assert!(window.is_normal());
    assert_eq!(window.bounds(), bounds);
}

#[test]
fn test_illegal_requests_are_ignored() {
    let options = WindowOptions::new()
        .with_maximizable(false)
        .with_minimizable(false)
        .with_fullscreenable(false);
    let (mut window, _) = open(HeadlessHost::new(), options);

    window.maximize();
    window.minimize();
    window.set_full_screen(true);
    assert_eq!(window.mode(), ModeState::Normal);
}

#[test]
fn test_minimize_from_maximized_then_restore() {
    let (mut window, _) = open(HeadlessHost::new(), WindowOptions::new());
    let bounds = window.bounds();
    window.maximize();
    window.minimize();
    assert!(window.is_minimized());

    window.restore();
    assert!(window.is_normal());
    assert_eq!(window.bounds(), bounds);
}

#[test]
fn test_rapid_fullscreen_toggle_ignores_stale_completion() {
    let host = HeadlessHost::new().with_animated_fullscreen(true);
    let handle = host.clone();
    let (mut window, _) = open(host, WindowOptions::new());
    let bounds = window.bounds();

    window.set_full_screen(true);
    let enter = handle.last_transition().unwrap();
    window.set_full_screen(false);
    let exit = handle.last_transition().unwrap();
    assert_eq!(window.mode(), ModeState::Normal);

    assert!(!window.handle_host_event(HostEvent::TransitionFinished(enter)));
    assert!(window.handle_host_event(HostEvent::TransitionFinished(exit)));
    assert_eq!(window.mode(), ModeState::Normal);
    assert!(!handle.is_fullscreen());
    assert_eq!(window.bounds(), bounds);
}

#[test]
fn test_repeated_request_during_animation_is_coalesced() {
    let host = HeadlessHost::new().with_animated_fullscreen(true);
    let handle = host.clone();
    let (mut window, _) = open(host, WindowOptions::new());

    window.set_full_screen(true);
    window.set_full_screen(true);
    assert_eq!(handle.started_transitions().len(), 1);
    assert_eq!(window.controller().tracker().pending_len(), 0);
}

#[test]
fn test_requests_during_animation_apply_in_order() {
    let host = HeadlessHost::new().with_animated_fullscreen(true);
    let handle = host.clone();
    let (mut window, _) = open(host, WindowOptions::new());

    window.set_full_screen(true);
    let enter = handle.last_transition().unwrap();
    window.maximize();
    window.minimize();
    assert!(window.is_fullscreen());

    assert!(window.handle_host_event(HostEvent::TransitionFinished(enter)));
    let exit = handle.last_transition().unwrap();
    assert_ne!(enter, exit);

    assert!(window.handle_host_event(HostEvent::TransitionFinished(exit)));
    assert!(window.is_minimized());
    assert_eq!(window.controller().tracker().pending_len(), 0);
}

#[test]
fn test_user_driven_fullscreen_is_followed() {
    let (mut window, _) = open(HeadlessHost::new(), WindowOptions::new());
    let (states, on_state) = counter();
    window.state_changed().connect(on_state);

    window.handle_host_event(HostEvent::EnteredFullscreen);
    assert_eq!(window.mode(), ModeState::Fullscreen);
    window.handle_host_event(HostEvent::ExitedFullscreen);
    assert_eq!(window.mode(), ModeState::Normal);
    assert_eq!(states.load(Ordering::SeqCst), 2);
}

#[test]
fn test_simple_fullscreen_option_routes_fullscreen() {
    let options = WindowOptions::new().with_simple_fullscreen(true);
    let (mut window, _) = open(HeadlessHost::new(), options);

    window.set_full_screen(true);
    assert!(window.is_simple_full_screen());
    assert!(window.is_fullscreen());

    window.set_full_screen(false);
    assert!(window.is_normal());
}

#[test]
fn test_created_in_kiosk() {
    let host = HeadlessHost::new();
    let handle = host.clone();
    let (window, presentation) = open(host, WindowOptions::new().with_kiosk(true));
    assert!(window.is_kiosk());
    assert!(handle.is_fullscreen());
    assert_eq!(presentation.get(), PresentationOptions::KIOSK);
}
