//! Scrollable-region computation.

use crate::geom::{Point, Rect};

/// Merge the scaled image bounding box with the visible box into the
/// region the scroll offset may range over.
///
/// Starts from the union of the two boxes. On any axis where the visible
/// box already spans the whole union (the image is narrower than the view
/// on that axis, or the view covers the image edge to edge), the bound
/// collapses back to the image's true extent so the image cannot be
/// dragged past its own edges inside an oversized view.
pub fn scroll_region(image_bbox: Rect, visible: Rect) -> Rect {
    let mut region = image_bbox.union(&visible);

    // Exact comparisons: each union edge is a copy of one input edge.
    if visible.left == region.left && visible.right == region.right {
        region.left = image_bbox.left;
        region.right = image_bbox.right;
    }
    if visible.top == region.top && visible.bottom == region.bottom {
        region.top = image_bbox.top;
        region.bottom = image_bbox.bottom;
    }

    region
}

/// Clamp a scroll offset so the view window stays inside `region`.
///
/// When the region is narrower than the view on an axis, the offset pins
/// to the region origin on that axis.
pub fn clamp_offset(region: Rect, view_width: f64, view_height: f64, offset: Point) -> Point {
    let max_x = (region.right - view_width).max(region.left);
    let max_y = (region.bottom - view_height).max(region.top);
    Point::new(
        offset.x.clamp(region.left, max_x),
        offset.y.clamp(region.top, max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_wider_than_image_collapses_to_image_bounds() {
        let image = Rect::from_size(200.0, 800.0);
        let visible = Rect::new(-50.0, 100.0, 350.0, 400.0);
        let region = scroll_region(image, visible);
        assert_eq!(region.left, 0.0);
        assert_eq!(region.right, 200.0);
        // Vertical axis keeps the union: the image is taller than the view.
        assert_eq!(region.top, 0.0);
        assert_eq!(region.bottom, 800.0);
    }

    #[test]
    fn one_pixel_wide_image_is_pinned() {
        let image = Rect::from_size(1.0, 600.0);
        let visible = Rect::new(-100.0, 0.0, 300.0, 300.0);
        let region = scroll_region(image, visible);
        let clamped = clamp_offset(region, 400.0, 300.0, Point::new(-100.0, 0.0));
        assert_eq!(clamped.x, 0.0);
    }

    #[test]
    fn view_inside_large_image_keeps_union() {
        let image = Rect::from_size(1000.0, 800.0);
        let visible = Rect::new(100.0, 100.0, 500.0, 400.0);
        let region = scroll_region(image, visible);
        assert_eq!(region, image);
    }
}
