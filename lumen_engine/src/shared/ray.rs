use crate::core::types::{Number, Point3, Vector3};

/// A directed line, `origin + direction * t`
///
/// The direction is stored exactly as given: it is not normalised, and may even be zero.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self { Self { origin, direction } }

    /// World-space coordinate the ray starts from
    #[inline(always)]
    pub fn origin(&self) -> Point3 { self.origin }

    /// Direction vector of the ray, with whatever length it was created with
    #[inline(always)]
    pub fn direction(&self) -> Vector3 { self.direction }

    /// Gets the position at a given distance along the ray
    ///
    /// `origin + (direction * t)`. Any `t` is accepted, including negative values.
    pub fn at(&self, t: Number) -> Point3 {
        let mut pos = self.direction.scale(t);
        *pos.add_in_place(self.origin)
    }
}
