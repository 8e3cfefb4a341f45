//! Size constraints and aspect-ratio locking.
//!
//! [`ConstraintEngine`] takes a requested content rectangle and projects it
//! onto the active constraints:
//!
//! 1. If an aspect ratio is locked, the scalable part of the size (the size
//!    minus the non-scaling `extra_size`) is adjusted so that
//!    `width / height == ratio`. The dragged edge decides which dimension
//!    drives; programmatic requests are width-driven.
//! 2. Minimum and maximum content sizes are applied. When a width range
//!    exists that satisfies both the ratio and the limits, the size is
//!    clamped inside it. Otherwise each axis is clamped independently and the
//!    result is marked as degraded.
//! 3. The anchor (the corner opposite the dragged edge, or the top-left for
//!    programmatic requests) stays where the request put it.
//!
//! # Example
//!
//! ```
//! use horizon_casement::geometry::{Rect, Size};
//! use horizon_casement::window::{ConstraintEngine, ResizeEdge};
//!
//! let mut engine = ConstraintEngine::new();
//! engine.set_aspect_ratio(2.0, Size::ZERO);
//!
//! let result = engine.constrain(Rect::new(0, 0, 100, 40), ResizeEdge::Programmatic);
//! assert_eq!(result.bounds, Rect::new(0, 0, 100, 50));
//! ```

use horizon_casement_core::logging::targets;

use crate::geometry::{Rect, Size};

/// A locked aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    ratio: f64,
    extra_size: Size,
}

impl AspectRatio {
    /// Create an aspect ratio lock.
    ///
    /// Returns `None` when `ratio` is not a positive finite number, which
    /// callers treat as "no lock".
    pub fn new(ratio: f64, extra_size: Size) -> Option<Self> {
        if ratio.is_finite() && ratio > 0.0 {
            Some(Self {
                ratio,
                extra_size: Size::new(extra_size.width.max(0), extra_size.height.max(0)),
            })
        } else {
            None
        }
    }

    /// The width / height ratio of the scalable area.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Size excluded from the ratio (for example, a fixed sidebar).
    pub fn extra_size(&self) -> Size {
        self.extra_size
    }
}

/// Minimum and maximum content sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeConstraints {
    /// Smallest allowed content size.
    pub min: Option<Size>,
    /// Largest allowed content size.
    pub max: Option<Size>,
}

impl SizeConstraints {
    /// No limits.
    pub const NONE: SizeConstraints = SizeConstraints {
        min: None,
        max: None,
    };

    /// Create size constraints.
    pub fn new(min: Option<Size>, max: Option<Size>) -> Self {
        Self { min, max }
    }

    fn min_width(&self) -> f64 {
        self.min.map_or(0.0, |s| f64::from(s.width.max(0)))
    }

    fn min_height(&self) -> f64 {
        self.min.map_or(0.0, |s| f64::from(s.height.max(0)))
    }

    fn max_width(&self) -> f64 {
        self.max
            .filter(|s| s.width > 0)
            .map_or(f64::INFINITY, |s| f64::from(s.width))
    }

    fn max_height(&self) -> f64 {
        self.max
            .filter(|s| s.height > 0)
            .map_or(f64::INFINITY, |s| f64::from(s.height))
    }
}

/// The edge or corner a resize gesture is dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeEdge {
    /// A programmatic resize; the top-left corner is preserved.
    #[default]
    Programmatic,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl ResizeEdge {
    fn moves_left_side(self) -> bool {
        matches!(self, ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft)
    }

    fn moves_top_side(self) -> bool {
        matches!(self, ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight)
    }

    fn is_vertical_edge(self) -> bool {
        matches!(self, ResizeEdge::Top | ResizeEdge::Bottom)
    }

    fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeEdge::TopLeft
                | ResizeEdge::TopRight
                | ResizeEdge::BottomLeft
                | ResizeEdge::BottomRight
        )
    }
}

/// The outcome of a constrained resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constrained {
    /// The constrained rectangle.
    pub bounds: Rect,
    /// `true` when the aspect ratio had to be given up to honour the size limits.
    pub degraded: bool,
}

/// Applies aspect-ratio and size constraints to resize requests.
#[derive(Debug, Clone, Default)]
pub struct ConstraintEngine {
    aspect_ratio: Option<AspectRatio>,
    size_constraints: SizeConstraints,
}

impl ConstraintEngine {
    /// Create an engine with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the aspect ratio, or clear the lock when `ratio` is not positive.
    ///
    /// Returns `true` if the constraint changed.
    pub fn set_aspect_ratio(&mut self, ratio: f64, extra_size: Size) -> bool {
        let next = AspectRatio::new(ratio, extra_size);
        if next == self.aspect_ratio {
            return false;
        }
        self.aspect_ratio = next;
        true
    }

    /// The current aspect ratio lock.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.aspect_ratio
    }

    /// Replace the min/max content size limits.
    ///
    /// Returns `true` if the constraints changed.
    pub fn set_size_constraints(&mut self, constraints: SizeConstraints) -> bool {
        if constraints == self.size_constraints {
            return false;
        }
        self.size_constraints = constraints;
        true
    }

    /// The current min/max content size limits.
    pub fn size_constraints(&self) -> SizeConstraints {
        self.size_constraints
    }

    /// Project a requested content rectangle onto the constraints.
    ///
    /// For drag gestures `requested` is the rectangle the gesture produced;
    /// its edge opposite the dragged one is the anchor.
    pub fn constrain(&self, requested: Rect, edge: ResizeEdge) -> Constrained {
        self.constrain_from(requested, requested, edge)
    }

    /// Like [`constrain`](Self::constrain), using `current` to decide which
    /// dimension drives a corner drag.
    pub fn constrain_from(&self, current: Rect, requested: Rect, edge: ResizeEdge) -> Constrained {
        let limits = self.size_constraints;
        let mut width = f64::from(requested.width.max(0));
        let mut height = f64::from(requested.height.max(0));
        let mut degraded = false;

        match self.aspect_ratio {
            Some(aspect) => {
                let extra_w = f64::from(aspect.extra_size.width);
                let extra_h = f64::from(aspect.extra_size.height);
                let r = aspect.ratio;

                let mut scalable_w = (width - extra_w).max(0.0);
                let mut scalable_h = (height - extra_h).max(0.0);
                if height_drives(current, requested, edge) {
                    scalable_w = scalable_h * r;
                } else {
                    scalable_h = scalable_w / r;
                }

                let lo = (limits.min_width() - extra_w)
                    .max((limits.min_height() - extra_h) * r)
                    .max(0.0);
                let hi = (limits.max_width() - extra_w).min((limits.max_height() - extra_h) * r);

                if lo <= hi {
                    scalable_w = scalable_w.max(lo).min(hi);
                    scalable_h = scalable_w / r;
                    width = scalable_w.round() + extra_w;
                    height = scalable_h.round() + extra_h;
                } else {
                    degraded = true;
                    width =
                        clamp_axis(scalable_w + extra_w, limits.min_width(), limits.max_width());
                    height =
                        clamp_axis(scalable_h + extra_h, limits.min_height(), limits.max_height());
                    tracing::debug!(
                        target: targets::CONSTRAINTS,
                        ratio = r,
                        width,
                        height,
                        "aspect ratio cannot satisfy size limits; clamping without ratio"
                    );
                }
            }
            None => {
                width = clamp_axis(width, limits.min_width(), limits.max_width());
                height = clamp_axis(height, limits.min_height(), limits.max_height());
            }
        }

        let width = to_extent(width);
        let height = to_extent(height);
        let x = if edge.moves_left_side() {
            requested.right().saturating_sub(width)
        } else {
            requested.x
        };
        let y = if edge.moves_top_side() {
            requested.bottom().saturating_sub(height)
        } else {
            requested.y
        };

        Constrained {
            bounds: Rect::new(x, y, width, height),
            degraded,
        }
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Round a computed dimension back to pixels, keeping it inside `0..=i32::MAX`.
fn to_extent(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(i32::MAX)) as i32
}

fn height_drives(current: Rect, requested: Rect, edge: ResizeEdge) -> bool {
    if edge.is_vertical_edge() {
        return true;
    }
    if !edge.is_corner() || current.width <= 0 || current.height <= 0 {
        return false;
    }
    let relative = |requested: i32, current: i32| {
        (f64::from(requested) - f64::from(current)).abs() / f64::from(current)
    };
    let dw = relative(requested.width, current.width);
    let dh = relative(requested.height, current.height);
    dh > dw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio_of(r: Rect) -> f64 {
        f64::from(r.width) / f64::from(r.height)
    }

    #[test]
    fn test_no_constraints_is_identity() {
        let engine = ConstraintEngine::new();
        let r = Rect::new(3, 4, 123, 77);
        assert_eq!(engine.constrain(r, ResizeEdge::Programmatic).bounds, r);
    }

    #[test]
    fn test_programmatic_is_width_driven() {
        let mut engine = ConstraintEngine::new();
        engine.set_aspect_ratio(2.0, Size::ZERO);
        let out = engine.constrain(Rect::new(0, 0, 100, 40), ResizeEdge::Programmatic);
        assert_eq!(out.bounds, Rect::new(0, 0, 100, 50));
        assert!(!out.degraded);
    }

    #[test]
    fn test_bottom_edge_is_height_driven() {
        let mut engine = ConstraintEngine::new();
        engine.set_aspect_ratio(2.0, Size::ZERO);
        let out = engine.constrain(Rect::new(0, 0, 100, 40), ResizeEdge::Bottom);
        assert_eq!(out.bounds, Rect::new(0, 0, 80, 40));
    }

    #[test]
    fn test_top_left_drag_keeps_bottom_right_anchor() {
        let mut engine = ConstraintEngine::new();
        engine.set_aspect_ratio(1.0, Size::ZERO);
        let current = Rect::new(100, 100, 200, 200);
        // Dragged the top-left corner outwards, mostly horizontally.
        let requested = Rect::new(50, 90, 250, 210);
        let out = engine.constrain_from(current, requested, ResizeEdge::TopLeft);
        assert_eq!(out.bounds.size(), Size::new(250, 250));
        assert_eq!(out.bounds.right(), requested.right());
        assert_eq!(out.bounds.bottom(), requested.bottom());
    }

    #[test]
    fn test_extra_size_is_excluded() {
        let mut engine = ConstraintEngine::new();
        engine.set_aspect_ratio(1.0, Size::new(40, 0));
        let out = engine.constrain(Rect::new(0, 0, 140, 10), ResizeEdge::Programmatic);
        assert_eq!(out.bounds.size(), Size::new(140, 100));
    }

    #[test]
    fn test_clamp_preserves_ratio_when_feasible() {
        let mut engine = ConstraintEngine::new();
        engine.set_aspect_ratio(2.0, Size::ZERO);
        engine.set_size_constraints(SizeConstraints::new(Some(Size::new(200, 50)), None));
        let out = engine.constrain(Rect::new(0, 0, 100, 40), ResizeEdge::Programmatic);
        assert_eq!(out.bounds.size(), Size::new(200, 100));
        assert!((ratio_of(out.bounds) - 2.0).abs() < f64::EPSILON);
        assert!(!out.degraded);

        engine.set_size_constraints(SizeConstraints::new(None, Some(Size::new(1000, 300))));
        let out = engine.constrain(Rect::new(0, 0, 900, 10), ResizeEdge::Programmatic);
        assert_eq!(out.bounds.size(), Size::new(600, 300));
    }

    #[test]
    fn test_infeasible_limits_degrade() {
        let mut engine = ConstraintEngine::new();
        engine.set_aspect_ratio(4.0, Size::ZERO);
        // Width at most 100 forces height at most 25, but min height is 50.
        engine.set_size_constraints(SizeConstraints::new(
            Some(Size::new(0, 50)),
            Some(Size::new(100, 1000)),
        ));
        let out = engine.constrain(Rect::new(0, 0, 400, 100), ResizeEdge::Programmatic);
        assert!(out.degraded);
        assert_eq!(out.bounds.size(), Size::new(100, 100));
    }

    #[test]
    fn test_non_positive_ratio_clears_lock() {
        let mut engine = ConstraintEngine::new();
        assert!(engine.set_aspect_ratio(1.5, Size::ZERO));
        assert!(!engine.set_aspect_ratio(1.5, Size::ZERO));
        assert!(engine.set_aspect_ratio(0.0, Size::ZERO));
        assert!(engine.aspect_ratio().is_none());
        assert!(!engine.set_aspect_ratio(f64::NAN, Size::ZERO));
    }

    #[test]
    fn test_extreme_requests_stay_in_range() {
        let mut engine = ConstraintEngine::new();
        let huge = Rect::new(0, 0, i32::MAX, 10);
        assert_eq!(engine.constrain(huge, ResizeEdge::Programmatic).bounds, huge);

        engine.set_aspect_ratio(0.5, Size::ZERO);
        let out = engine.constrain(huge, ResizeEdge::Programmatic).bounds;
        assert_eq!(out.width, i32::MAX);
        assert_eq!(out.height, i32::MAX);

        let out = engine.constrain(Rect::new(i32::MIN, 0, 100, 50), ResizeEdge::Left).bounds;
        assert_eq!(out, Rect::new(i32::MIN, 0, 100, 200));
    }

    #[test]
    fn test_min_max_without_ratio() {
        let mut engine = ConstraintEngine::new();
        engine.set_size_constraints(SizeConstraints::new(
            Some(Size::new(100, 100)),
            Some(Size::new(300, 300)),
        ));
        let out = engine.constrain(Rect::new(0, 0, 50, 500), ResizeEdge::Programmatic);
        assert_eq!(out.bounds.size(), Size::new(100, 300));
        assert!(!out.degraded);
    }
}
