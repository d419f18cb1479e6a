//! Catch and off-field tests
//!
//! The catch test is deliberately asymmetric: the catcher's whole vertical
//! band is checked against only the catchable's bottom edge, while the
//! horizontal check is a full overlap on both sides. A catch registers as
//! soon as the bottom edge enters the band with any horizontal overlap.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }
}

/// Whether a falling catchable is caught by the catcher this tick.
///
/// Edges are inclusive; touching counts.
pub fn catch_predicate(catchable: Rect, catcher: Rect) -> bool {
    catchable.bottom() >= catcher.top()
        && catchable.bottom() <= catcher.bottom()
        && catchable.right() >= catcher.left()
        && catchable.left() <= catcher.right()
}

/// Whether a catchable's top edge has passed below the field
pub fn is_below_field(catchable: Rect, field_height: f32) -> bool {
    catchable.top() > field_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catcher() -> Rect {
        // 400x800 field, 100x100 catcher at (150, 750)
        Rect::new(Vec2::new(150.0, 750.0), Vec2::new(100.0, 100.0))
    }

    fn item(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(100.0, 100.0))
    }

    #[test]
    fn test_catch_inside_band() {
        // bottom 840 in [750, 850], x 180..280 overlaps 150..250
        assert!(catch_predicate(item(180.0, 740.0), catcher()));
    }

    #[test]
    fn test_bottom_edge_boundaries_inclusive() {
        assert!(catch_predicate(item(150.0, 650.0), catcher()));
        assert!(catch_predicate(item(150.0, 750.0), catcher()));
        assert!(!catch_predicate(item(150.0, 649.0), catcher()));
        assert!(!catch_predicate(item(150.0, 751.0), catcher()));
    }

    #[test]
    fn test_horizontal_touching_counts() {
        // right edge touches catcher left edge
        assert!(catch_predicate(item(50.0, 700.0), catcher()));
        // left edge touches catcher right edge
        assert!(catch_predicate(item(250.0, 700.0), catcher()));
        assert!(!catch_predicate(item(49.0, 700.0), catcher()));
        assert!(!catch_predicate(item(251.0, 700.0), catcher()));
    }

    #[test]
    fn test_not_symmetric_aabb() {
        // Rectangles overlap, but the catchable's bottom edge is already past
        // the catcher band, so a plain AABB test would disagree.
        let deep = item(150.0, 790.0);
        let overlaps = deep.top() <= catcher().bottom() && deep.bottom() >= catcher().top();
        assert!(overlaps);
        assert!(!catch_predicate(deep, catcher()));
    }

    #[test]
    fn test_below_field() {
        assert!(is_below_field(item(0.0, 810.0), 800.0));
        assert!(!is_below_field(item(0.0, 800.0), 800.0));
        assert!(!is_below_field(item(0.0, -100.0), 800.0));
    }
}
