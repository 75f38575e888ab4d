use glam::Vec2;

/// An axis-aligned bounding box, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Returns true if the boxes share any interior area.
    ///
    /// Boxes that merely touch along an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }

    /// Returns true if the box lies strictly inside `outer` shrunk by `inset` on every side.
    pub fn is_inside(&self, outer: Vec2, inset: f32) -> bool {
        let max = outer - Vec2::splat(inset) - self.size;
        self.min.x > inset && self.min.y > inset && self.min.x < max.x && self.min.y < max.y
    }
}

/// Trait for entities that can participate in collision detection.
pub trait Collidable {
    fn bounding_box(&self) -> Aabb;

    fn is_colliding_with(&self, other: &dyn Collidable) -> bool {
        self.bounding_box().intersects(&other.bounding_box())
    }
}
