//! Transforms between the board plane and screen pixels.

use eframe::egui::{pos2, Pos2, Rect, Vec2};

/// A uniform scale plus translation that also flips the y axis, since the
/// board plane points up and the screen points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: f32,
    offset: Vec2,
}

impl Transform {
    /// Creates a `Transform` that fits the board rect `src` inside the screen rect `dst`,
    /// centering it and adding letterboxing so its aspect ratio is preserved.
    pub fn letterboxed(src: Rect, dst: Rect) -> Self {
        let scale_x = dst.width() / src.width().max(f32::EPSILON);
        let scale_y = dst.height() / src.height().max(f32::EPSILON);
        let scale = scale_x.min(scale_y);
        let center = src.center();
        Self {
            scale,
            offset: dst.center() - pos2(center.x * scale, -center.y * scale),
        }
    }

    /// Board point to screen point.
    pub fn map_point(&self, p: Pos2) -> Pos2 {
        pos2(p.x * self.scale, -p.y * self.scale) + self.offset
    }

    /// Screen point to board point.
    pub fn unmap_point(&self, p: Pos2) -> Pos2 {
        let p = p - self.offset;
        pos2(p.x / self.scale, -p.y / self.scale)
    }

    /// Board length to screen length.
    pub fn map_dist(&self, d: f32) -> f32 {
        d * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn centers_line_up() {
        let src = Rect::from_min_max(pos2(-2.0, -1.0), pos2(4.0, 3.0));
        let dst = Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0));
        let t = Transform::letterboxed(src, dst);
        assert!(close(t.map_point(src.center()), dst.center()));
    }

    #[test]
    fn wide_source_is_letterboxed_vertically() {
        let src = Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 1.0));
        let dst = Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0));
        let t = Transform::letterboxed(src, dst);
        assert_eq!(t.map_dist(1.0), 10.0);
        // Board y points up, so the top edge of the board lands above the center.
        assert!(close(t.map_point(pos2(0.0, 1.0)), pos2(0.0, 45.0)));
    }

    #[test]
    fn unmap_inverts_map() {
        let src = Rect::from_min_max(pos2(-3.0, -3.0), pos2(3.0, 3.0));
        let dst = Rect::from_min_max(pos2(10.0, 20.0), pos2(310.0, 220.0));
        let t = Transform::letterboxed(src, dst);
        let p = pos2(1.25, -2.5);
        assert!(close(t.unmap_point(t.map_point(p)), p));
    }
}
