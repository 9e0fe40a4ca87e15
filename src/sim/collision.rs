//! Axis-aligned collision boxes
//!
//! World-space boxes for the falling entities, the plate, and rockets,
//! plus the screen-space rectangles used for menu buttons and the
//! Devil capture box. Everything here is derived transiently from a
//! position each frame; nothing is persisted.

use glam::{Vec2, Vec3};

use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box for a generic falling entity
    pub fn for_entity(position: Vec3) -> Self {
        Self {
            min: Vec3::new(
                position.x - ENTITY_HALF_WIDTH,
                position.y - ENTITY_HALF_HEIGHT,
                position.z - ENTITY_HALF_DEPTH,
            ),
            max: Vec3::new(
                position.x + ENTITY_HALF_WIDTH,
                position.y + ENTITY_HALF_HEIGHT,
                position.z + ENTITY_HALF_DEPTH,
            ),
        }
    }

    /// The plate's catch box reaches further above the plate than below
    pub fn for_plate(position: Vec3) -> Self {
        let mut aabb = Self::for_entity(position);
        aabb.max.y += PLATE_CATCH_REACH;
        aabb
    }

    /// Rocket box from its edge length
    pub fn for_rocket(position: Vec3, size: f32) -> Self {
        let half = size / 2.0;
        Self {
            min: Vec3::new(
                position.x - half,
                position.y - half,
                position.z - ENTITY_HALF_DEPTH,
            ),
            max: Vec3::new(
                position.x + half,
                position.y + half,
                position.z + ENTITY_HALF_DEPTH,
            ),
        }
    }

    /// Separating-axis test with inclusive bounds: touching edges overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
            && self.max.z >= other.min.z
            && self.min.z <= other.max.z
    }
}

/// Screen-space rectangle with the same inclusive-bounds contract
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Rect {
    pub fn from_bounds(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn around(center: Vec2, half: f32) -> Self {
        Self {
            left: center.x - half,
            right: center.x + half,
            bottom: center.y - half,
            top: center.y + half,
        }
    }

    pub fn offset(self, by: Vec2) -> Self {
        Self {
            left: self.left + by.x,
            right: self.right + by.x,
            bottom: self.bottom + by.y,
            top: self.top + by.y,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    /// Inclusive on all four edges, like [`Aabb::overlaps`]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }
}

/// The click target for capturing a Devil: a box around the entity,
/// displaced by the run's current random screen offset
pub fn devil_capture_rect(position: Vec3, offset: Vec2) -> Rect {
    Rect::around(Vec2::new(position.x, position.y), CAPTURE_HALF).offset(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overlap_is_symmetric() {
        let a = Aabb::for_entity(Vec3::new(0.0, 0.0, 0.2));
        let b = Aabb::for_entity(Vec3::new(0.1, 0.05, 0.2));
        let c = Aabb::for_entity(Vec3::new(5.0, 5.0, 0.2));

        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn touching_edges_count_as_overlap() {
        let a = Aabb::for_entity(Vec3::new(0.0, 0.0, 0.2));
        // Shifted by exactly one box width: a.max.x == b.min.x
        let b = Aabb::for_entity(Vec3::new(ENTITY_HALF_WIDTH * 2.0, 0.0, 0.2));
        assert_eq!(a.max.x, b.min.x);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn plate_box_is_taller_above() {
        let position = Vec3::new(0.0, -1.10, 0.2);
        let plate = Aabb::for_plate(position);
        assert!((position.y - plate.min.y - ENTITY_HALF_HEIGHT).abs() < 0.001);
        assert!(
            (plate.max.y - position.y - (ENTITY_HALF_HEIGHT + PLATE_CATCH_REACH)).abs() < 0.001
        );
    }

    #[test]
    fn rocket_box_uses_half_size() {
        let rocket = Aabb::for_rocket(Vec3::new(0.0, 0.0, 0.2), 0.1);
        assert!((rocket.max.x - rocket.min.x - 0.1).abs() < 0.001);
        assert!((rocket.max.y - rocket.min.y - 0.1).abs() < 0.001);
        assert!((rocket.max.z - rocket.min.z - ENTITY_HALF_DEPTH * 2.0).abs() < 0.001);
    }

    #[test]
    fn rect_bounds_are_inclusive() {
        let rect = Rect::from_bounds(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(Vec2::new(10.0, 30.0)));
        assert!(rect.contains(Vec2::new(20.0, 40.0)));
        assert!(rect.contains(Vec2::new(15.0, 35.0)));
        assert!(!rect.contains(Vec2::new(9.99, 35.0)));
        assert!(!rect.contains(Vec2::new(15.0, 40.01)));
    }

    #[test]
    fn capture_rect_follows_entity_and_offset() {
        let rect = devil_capture_rect(Vec3::new(0.2, 0.5, 0.2), Vec2::new(600.0, 300.0));
        assert_eq!(rect.left, 0.2 - CAPTURE_HALF + 600.0);
        assert_eq!(rect.top, 0.5 + CAPTURE_HALF + 300.0);
        assert!(rect.contains(Vec2::new(600.2, 300.5)));
    }

    proptest! {
        #[test]
        fn overlap_symmetric_for_any_pair(
            ax in -2.0f32..2.0, ay in -2.0f32..2.0,
            bx in -2.0f32..2.0, by in -2.0f32..2.0,
        ) {
            let a = Aabb::for_entity(Vec3::new(ax, ay, 0.2));
            let b = Aabb::for_entity(Vec3::new(bx, by, 0.2));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn overlap_matches_interval_logic(
            ax in -1.0f32..1.0, ay in -1.0f32..1.0,
            bx in -1.0f32..1.0, by in -1.0f32..1.0,
        ) {
            // Stay clear of the exact-touch boundary, where float
            // rounding makes both answers defensible
            prop_assume!(((ax - bx).abs() - ENTITY_HALF_WIDTH * 2.0).abs() > 1e-4);
            prop_assume!(((ay - by).abs() - ENTITY_HALF_HEIGHT * 2.0).abs() > 1e-4);

            let a = Aabb::for_entity(Vec3::new(ax, ay, 0.2));
            let b = Aabb::for_entity(Vec3::new(bx, by, 0.2));
            let expected = (ax - bx).abs() <= ENTITY_HALF_WIDTH * 2.0
                && (ay - by).abs() <= ENTITY_HALF_HEIGHT * 2.0;
            prop_assert_eq!(a.overlaps(&b), expected);
        }
    }
}
