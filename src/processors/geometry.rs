//! Geometric primitives for region post-processing.
//!
//! Everything here operates on axis-aligned rectangles in image pixel space.
//! The functions are pure and never fail: degenerate boxes (zero width or
//! height) simply contribute zero area, and an IoU over a zero-area union is
//! defined as 0.0 rather than a division error.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in image pixel space.
///
/// The coordinate invariant `x1 <= x2 && y1 <= y2` holds for every box built
/// through [`BoundingBox::new`] and is preserved by all operations. Boxes are
/// immutable; each pipeline stage produces new boxes instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// X-coordinate of the left edge.
    pub x1: f32,
    /// Y-coordinate of the top edge.
    pub y1: f32,
    /// X-coordinate of the right edge.
    pub x2: f32,
    /// Y-coordinate of the bottom edge.
    pub y2: f32,
}

impl BoundingBox {
    /// Creates a box from two corner points, normalizing flipped coordinates
    /// so that `x1 <= x2` and `y1 <= y2` always hold.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Width of the box.
    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Height of the box.
    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Area of the box. Zero for degenerate boxes.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Area of the overlap between two boxes.
    ///
    /// Returns 0.0 for disjoint or degenerate boxes.
    pub fn intersection_area(&self, other: &Self) -> f32 {
        let inter_w = (self.x2.min(other.x2) - self.x1.max(other.x1)).max(0.0);
        let inter_h = (self.y2.min(other.y2) - self.y1.max(other.y1)).max(0.0);
        inter_w * inter_h
    }

    /// Combined area of two boxes, counting the overlap once.
    pub fn union_area(&self, other: &Self) -> f32 {
        self.area() + other.area() - self.intersection_area(other)
    }

    /// Intersection over Union.
    ///
    /// Defined as 0.0 when the union area is zero, so a pair of degenerate
    /// boxes yields 0 instead of a division by zero.
    pub fn iou(&self, other: &Self) -> f32 {
        let union = self.union_area(other);
        if union > 0.0 {
            self.intersection_area(other) / union
        } else {
            0.0
        }
    }

    /// Vertical distance between the facing horizontal edges of two boxes.
    ///
    /// The smaller of `|a.y1 - b.y2|` and `|a.y2 - b.y1|`. Used as a looser
    /// merge trigger than IoU for vertically stacked lines that belong to the
    /// same field but do not overlap.
    pub fn vertical_gap(&self, other: &Self) -> f32 {
        (self.y1 - other.y2).abs().min((self.y2 - other.y1).abs())
    }

    /// Bounding rectangle of both boxes (the coordinate-extent union).
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Whether `other` lies entirely within this box.
    pub fn contains(&self, other: &Self) -> bool {
        self.x1 <= other.x1 && self.y1 <= other.y1 && self.x2 >= other.x2 && self.y2 >= other.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_flipped_coordinates() {
        let b = BoundingBox::new(10.0, 8.0, 2.0, 4.0);
        assert_eq!(b, BoundingBox::new(2.0, 4.0, 10.0, 8.0));
        assert!(b.x1 <= b.x2 && b.y1 <= b.y2);
    }

    #[test]
    fn intersection_area_overlapping() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.intersection_area(&b), 25.0);
        assert_eq!(b.intersection_area(&a), 25.0);
    }

    #[test]
    fn intersection_area_disjoint_is_zero() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn iou_bounds_and_identity() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        let iou = a.iou(&b);
        assert!((0.0..=1.0).contains(&iou));
        // inter 25, union 175
        assert!((iou - 25.0 / 175.0).abs() < 1e-6, "iou: {iou}");
        assert_eq!(a.iou(&a), 1.0);
    }

    #[test]
    fn iou_of_degenerate_boxes_is_zero() {
        let line = BoundingBox::new(0.0, 5.0, 10.0, 5.0);
        assert_eq!(line.area(), 0.0);
        assert_eq!(line.iou(&line), 0.0);

        let point = BoundingBox::new(3.0, 3.0, 3.0, 3.0);
        assert_eq!(point.iou(&line), 0.0);
    }

    #[test]
    fn vertical_gap_between_stacked_boxes() {
        let top = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let bottom = BoundingBox::new(0.0, 14.0, 10.0, 24.0);
        // |top.y2 - bottom.y1| = 4 is the smaller of the two distances
        assert_eq!(top.vertical_gap(&bottom), 4.0);
        assert_eq!(bottom.vertical_gap(&top), 4.0);
    }

    #[test]
    fn union_contains_both_inputs() {
        let a = BoundingBox::new(2.0, 3.0, 8.0, 9.0);
        let b = BoundingBox::new(5.0, 1.0, 12.0, 6.0);
        let u = a.union(&b);
        assert_eq!(u, BoundingBox::new(2.0, 1.0, 12.0, 9.0));
        assert!(u.contains(&a));
        assert!(u.contains(&b));
    }

    #[test]
    fn union_area_counts_overlap_once() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(0.0, 5.0, 10.0, 15.0);
        assert_eq!(a.union_area(&b), 100.0 + 100.0 - 50.0);
    }
}
