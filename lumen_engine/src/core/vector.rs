use crate::core::scalar;
use crate::core::types::Number;
use crate::{impl_op, impl_op_assign};
use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// Default tolerance for [`Vector3::equals_with_default_epsilon`]
pub const VECTOR_EPSILON: Number = 0.001;

/// A three-component vector, used for points, directions and colours alike.
///
/// The engine uses a left-handed coordinate system.
///
/// # API
/// Every operation comes in a pure form, which returns a new vector (`add`, `scale`, ...),
/// and where it makes sense an in-place form (`add_in_place`, `scale_in_place`, ...) which
/// overwrites `self` and returns it again so calls can be chained. Both forms give bit-identical results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: Number,
    pub y: Number,
    pub z: Number,
}

// region Constructors

impl Vector3 {
    pub const ZERO: Self = Self::new(0., 0., 0.);
    pub const ONE: Self = Self::new(1., 1., 1.);
    pub const X: Self = Self::new(1., 0., 0.);
    pub const Y: Self = Self::new(0., 1., 0.);
    pub const Z: Self = Self::new(0., 0., 1.);

    pub const fn new(x: Number, y: Number, z: Number) -> Self { Self { x, y, z } }

    /// Creates a zero vector `(0, 0, 0)`
    pub const fn zero() -> Self { Self::ZERO }
}

// endregion Constructors

// region To/From impls

impl Vector3 {
    /// The components as an `(x, y, z)` tuple
    pub const fn tuple(&self) -> (Number, Number, Number) { (self.x, self.y, self.z) }

    pub const fn to_array(&self) -> [Number; 3] { [self.x, self.y, self.z] }

    /// Overwrites this vector with the components of `source`
    pub fn copy_from_vector(&mut self, source: &Vector3) -> &mut Self {
        *self = *source;
        self
    }

    /// Overwrites this vector with the given `(x, y, z)` components
    pub fn copy_from_components(&mut self, (x, y, z): (Number, Number, Number)) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }
}

impl From<(Number, Number, Number)> for Vector3 {
    fn from((x, y, z): (Number, Number, Number)) -> Self { Self::new(x, y, z) }
}
impl From<Vector3> for (Number, Number, Number) {
    fn from(v: Vector3) -> Self { v.tuple() }
}
impl From<[Number; 3]> for Vector3 {
    fn from([x, y, z]: [Number; 3]) -> Self { Self::new(x, y, z) }
}
impl From<Vector3> for [Number; 3] {
    fn from(v: Vector3) -> Self { v.to_array() }
}
impl From<glam::DVec3> for Vector3 {
    fn from(v: glam::DVec3) -> Self { Self::new(v.x, v.y, v.z) }
}
impl From<Vector3> for glam::DVec3 {
    fn from(v: Vector3) -> Self { glam::DVec3::new(v.x, v.y, v.z) }
}

// endregion To/From impls

// region Arithmetic

impl Vector3 {
    pub fn add(self, other: Vector3) -> Vector3 { Self::new(self.x + other.x, self.y + other.y, self.z + other.z) }

    pub fn add_in_place(&mut self, other: Vector3) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    pub fn subtract(self, other: Vector3) -> Vector3 { Self::new(self.x - other.x, self.y - other.y, self.z - other.z) }

    pub fn subtract_in_place(&mut self, other: Vector3) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    /// Multiplies each component by `scale`, which may be zero, negative or fractional
    pub fn scale(self, scale: Number) -> Vector3 { Self::new(self.x * scale, self.y * scale, self.z * scale) }

    pub fn scale_in_place(&mut self, scale: Number) -> &mut Self {
        self.x *= scale;
        self.y *= scale;
        self.z *= scale;
        self
    }

    /// Component-wise minimum
    pub fn min(self, other: Vector3) -> Vector3 {
        Self::new(
            if self.x < other.x { self.x } else { other.x },
            if self.y < other.y { self.y } else { other.y },
            if self.z < other.z { self.z } else { other.z },
        )
    }

    pub fn min_in_place(&mut self, other: Vector3) -> &mut Self {
        let min = self.min(other);
        self.copy_from_vector(&min)
    }

    /// Component-wise maximum
    pub fn max(self, other: Vector3) -> Vector3 {
        Self::new(
            if self.x > other.x { self.x } else { other.x },
            if self.y > other.y { self.y } else { other.y },
            if self.z > other.z { self.z } else { other.z },
        )
    }

    pub fn max_in_place(&mut self, other: Vector3) -> &mut Self {
        let max = self.max(other);
        self.copy_from_vector(&max)
    }
}

// endregion Arithmetic

// region Geometry

impl Vector3 {
    /// Euclidean norm
    pub fn length(&self) -> Number { Number::sqrt(self.x * self.x + self.y * self.y + self.z * self.z) }

    /// Distance between the two points `self` and `target`
    pub fn distance_from(&self, target: &Vector3) -> Number {
        let x = self.x - target.x;
        let y = self.y - target.y;
        let z = self.z - target.z;
        Number::sqrt(x * x + y * y + z * z)
    }

    /// Scales the vector to unit length.
    ///
    /// Vectors whose length is exactly `0.0` or exactly `1.0` are left untouched.
    #[allow(clippy::float_cmp)]
    pub fn normalize_in_place(&mut self) -> &mut Self {
        let length = self.length();
        if length == 0. || length == 1. {
            return self;
        }
        self.scale_in_place(1. / length)
    }

    /// Pure version of [`Self::normalize_in_place`]
    pub fn normalize(self) -> Vector3 {
        let mut v = self;
        v.normalize_in_place();
        v
    }

    /// `(ay·bz − az·by, az·bx − ax·bz, ax·by − ay·bx)`
    ///
    /// The formula is applied as-is, the orientation of the result does not depend on handedness.
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn dot(&self, other: &Vector3) -> Number { self.x * other.x + self.y * other.y + self.z * other.z }

    /// Linear interpolation from `self` towards `end`.
    ///
    /// `gradient` is not clamped, values outside `0..=1` extrapolate.
    pub fn lerp_to(&self, end: &Vector3, gradient: Number) -> Vector3 {
        Self::new(
            self.x + (end.x - self.x) * gradient,
            self.y + (end.y - self.y) * gradient,
            self.z + (end.z - self.z) * gradient,
        )
    }

    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() && self.z.is_finite() }

    pub fn is_nan(&self) -> bool { self.x.is_nan() || self.y.is_nan() || self.z.is_nan() }
}

// endregion Geometry

// region Comparison

impl Vector3 {
    /// Exact component equality, no tolerance
    #[allow(clippy::float_cmp)]
    pub fn equals(&self, other: &Vector3) -> bool { self.x == other.x && self.y == other.y && self.z == other.z }

    /// Component-wise `|a - b| <= epsilon`
    pub fn equals_with_epsilon(&self, other: &Vector3, epsilon: Number) -> bool {
        scalar::within_epsilon(other.x, self.x, epsilon)
            && scalar::within_epsilon(other.y, self.y, epsilon)
            && scalar::within_epsilon(other.z, self.z, epsilon)
    }

    /// [`Self::equals_with_epsilon`] with [`VECTOR_EPSILON`]
    pub fn equals_with_default_epsilon(&self, other: &Vector3) -> bool { self.equals_with_epsilon(other, VECTOR_EPSILON) }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = Number;

    fn default_epsilon() -> Self::Epsilon { VECTOR_EPSILON }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool { self.equals_with_epsilon(other, epsilon) }
}

// endregion Comparison

// region Operators

impl_op!(impl std::ops::Add : fn add(a: Vector3, b: Vector3) -> Vector3 { Vector3::add(a, b) });
impl_op!(impl std::ops::Sub : fn sub(a: Vector3, b: Vector3) -> Vector3 { Vector3::subtract(a, b) });
impl_op!(impl std::ops::Mul : fn mul(a: Vector3, b: Number) -> Vector3 { Vector3::scale(a, b) });
impl_op!(impl std::ops::Div : fn div(a: Vector3, b: Number) -> Vector3 { Vector3::new(a.x / b, a.y / b, a.z / b) });

impl_op_assign!(impl std::ops::AddAssign : fn add_assign(a: Vector3, b: Vector3) { a.add_in_place(b) });
impl_op_assign!(impl std::ops::SubAssign : fn sub_assign(a: Vector3, b: Vector3) { a.subtract_in_place(b) });
impl_op_assign!(impl std::ops::MulAssign : fn mul_assign(a: Vector3, b: Number) { a.scale_in_place(b) });

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output { Self::new(-self.x, -self.y, -self.z) }
}

// endregion Operators
