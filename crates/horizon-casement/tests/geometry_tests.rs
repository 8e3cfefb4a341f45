//! Tests for bounds, content conversion and constraints on a window.

use horizon_casement::geometry::{Rect, Size};
use horizon_casement::window::{
    Collaborators, Decoration, HeadlessHost, NativeWindow, PresentationContext, ResizeEdge,
    TITLE_BAR_HEIGHT, TitleBarStyle, WindowOptions,
};

fn open(options: WindowOptions) -> NativeWindow {
    NativeWindow::with_context(
        Box::new(HeadlessHost::new()),
        options,
        Collaborators::new(),
        PresentationContext::new(),
    )
}

#[test]
fn test_aspect_ratio_projects_programmatic_bounds() {
    let mut window = open(WindowOptions::new().with_frame(false));
    window.set_aspect_ratio(2.0, Size::ZERO);
    window.set_bounds(Rect::new(0, 0, 100, 40), false);

    let bounds = window.bounds();
    assert_eq!(bounds, Rect::new(0, 0, 100, 50));
    assert_eq!(f64::from(bounds.width) / f64::from(bounds.height), 2.0);
}

#[test]
fn test_aspect_ratio_applies_to_content_area() {
    let mut window = open(WindowOptions::new());
    window.set_aspect_ratio(2.0, Size::ZERO);
    window.set_bounds(Rect::new(0, 0, 200, 40), false);

    let content = window.content_bounds();
    assert_eq!(content.width, 2 * content.height);
    assert_eq!(window.bounds().height, content.height + TITLE_BAR_HEIGHT);
}

#[test]
fn test_clearing_aspect_ratio() {
    let mut window = open(WindowOptions::new().with_frame(false));
    window.set_aspect_ratio(1.5, Size::ZERO);
    assert!(window.aspect_ratio().is_some());

    window.set_aspect_ratio(0.0, Size::ZERO);
    assert!(window.aspect_ratio().is_none());
    window.set_bounds(Rect::new(10, 10, 300, 100), false);
    assert_eq!(window.bounds(), Rect::new(10, 10, 300, 100));
}

#[test]
fn test_user_resize_keeps_opposite_corner() {
    let mut window = open(WindowOptions::new().with_frame(false));
    window.set_bounds(Rect::new(200, 200, 400, 200), false);
    window.set_aspect_ratio(2.0, Size::ZERO);

    // Dragging the top-left corner up and left.
    let requested = Rect::new(100, 150, 500, 250);
    let constrained = window.constrain_user_resize(requested, ResizeEdge::TopLeft);
    assert_eq!(constrained.right(), requested.right());
    assert_eq!(constrained.bottom(), requested.bottom());
    assert_eq!(constrained.width, 2 * constrained.height);
}

#[test]
fn test_size_constraints_from_options() {
    let options = WindowOptions::new()
        .with_frame(false)
        .with_min_size(200, 150)
        .with_max_size(1000, 800);
    let mut window = open(options);

    window.set_bounds(Rect::new(0, 0, 50, 50), false);
    assert_eq!(window.bounds(), Rect::new(0, 0, 200, 150));

    window.set_bounds(Rect::new(0, 0, 1500, 1000), false);
    assert_eq!(window.bounds(), Rect::new(0, 0, 1000, 800));
}

#[test]
fn test_host_clamps_to_screen() {
    let mut window = open(WindowOptions::new().with_frame(false));
    window.set_bounds(Rect::new(-500, 0, 4000, 300), false);
    assert_eq!(window.bounds(), Rect::new(0, 0, 1920, 300));
}

#[test]
fn test_content_conversions_are_inverse() {
    let styles = [
        TitleBarStyle::Normal,
        TitleBarStyle::Hidden,
        TitleBarStyle::HiddenInset,
        TitleBarStyle::CustomButtonsOnHover,
    ];
    let samples = [
        Rect::new(0, 0, 100, 100),
        Rect::new(-40, 25, 1, 0),
        Rect::new(300, 200, 1280, 720),
    ];

    for style in styles {
        for has_frame in [true, false] {
            let options = WindowOptions::new().with_title_bar_style(style).with_frame(has_frame);
            let window = open(options);
            for rect in samples {
                let frame = window.content_bounds_to_window_bounds(rect);
                let content = window.window_bounds_to_content_bounds(frame);
                assert_eq!(content, rect, "{style:?} frame={has_frame}");
            }
        }
    }
}

#[test]
fn test_title_bar_inset_only_for_normal_framed_windows() {
    let content = Rect::new(10, 50, 400, 300);
    let framed = Decoration::new(TitleBarStyle::Normal, true);
    assert_eq!(
        framed.content_bounds_to_window_bounds(content),
        Rect::new(10, 50 - TITLE_BAR_HEIGHT, 400, 300 + TITLE_BAR_HEIGHT)
    );

    let hidden = Decoration::new(TitleBarStyle::Hidden, true);
    assert_eq!(hidden.content_bounds_to_window_bounds(content), content);

    let frameless = Decoration::new(TitleBarStyle::Normal, false);
    assert_eq!(frameless.content_bounds_to_window_bounds(content), content);
}

#[test]
fn test_set_content_bounds() {
    let mut window = open(WindowOptions::new());
    let content = Rect::new(100, 200, 640, 480);
    window.set_content_bounds(content, false);
    assert_eq!(window.content_bounds(), content);
    assert_eq!(window.bounds().height, 480 + TITLE_BAR_HEIGHT);
}

#[test]
fn test_initial_frame_from_options() {
    let window = open(WindowOptions::new().with_size(400, 300).with_position(20, 40));
    assert_eq!(window.bounds(), Rect::new(20, 40, 400, 300));

    let centered = open(WindowOptions::new().with_size(400, 300));
    let work_area = Rect::new(0, 25, 1920, 1055);
    assert_eq!(centered.bounds(), Rect::new(0, 0, 400, 300).centered_in(work_area));

    let by_content = open(
        WindowOptions::new()
            .with_size(400, 300)
            .with_position(0, 100)
            .with_use_content_size(true),
    );
    assert_eq!(by_content.content_bounds().width, 400);
    assert_eq!(by_content.content_bounds().height, 300);
}

#[test]
fn test_center() {
    let mut window = open(WindowOptions::new().with_frame(false).with_position(0, 0));
    window.set_bounds(Rect::new(0, 0, 200, 100), false);
    window.center();
    assert_eq!(window.bounds(), Rect::new(860, 25 + 477, 200, 100));
}

#[test]
fn test_extreme_bounds_are_clamped() {
    let mut window = open(WindowOptions::new());
    window.set_bounds(Rect::new(0, 0, 100, i32::MIN), false);
    assert_eq!(window.bounds(), Rect::new(0, 0, 100, TITLE_BAR_HEIGHT));

    window.set_bounds(Rect::new(i32::MAX, i32::MIN, i32::MAX, i32::MAX), false);
    assert_eq!(window.bounds(), Rect::new(0, 0, 1920, 1080));

    window.set_bounds(Rect::new(i32::MAX, i32::MIN, 10, 10), false);
    assert_eq!(window.bounds(), Rect::new(1910, 0, 10, TITLE_BAR_HEIGHT));

    let frame = window.content_bounds_to_window_bounds(Rect::new(i32::MIN, i32::MIN, 1, 1));
    assert_eq!(frame, Rect::new(i32::MIN, i32::MIN, 1, 1 + TITLE_BAR_HEIGHT));
}

#[test]
fn test_extreme_bounds_with_aspect_ratio() {
    let mut window = open(WindowOptions::new());
    window.set_aspect_ratio(0.5, Size::ZERO);
    window.set_bounds(Rect::new(0, 0, i32::MAX, 10), false);
    assert_eq!(window.bounds(), Rect::new(0, 0, 1920, 1080));

    let mut frameless = open(WindowOptions::new().with_frame(false));
    frameless.set_aspect_ratio(2.0, Size::ZERO);
    frameless.set_bounds(Rect::new(0, 0, 100, i32::MIN), false);
    assert_eq!(frameless.bounds(), Rect::new(0, 0, 100, 50));

    frameless.set_bounds(Rect::new(0, 0, i32::MIN, i32::MIN), false);
    assert_eq!(frameless.bounds(), Rect::new(0, 0, 0, 0));
}
