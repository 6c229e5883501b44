use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D vector in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    pub const UP: Vec2 = Vec2 { x: 0.0, y: -1.0 };
    pub const DOWN: Vec2 = Vec2 { x: 0.0, y: 1.0 };
    pub const LEFT: Vec2 = Vec2 { x: -1.0, y: 0.0 };
    pub const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Calculates the squared magnitude (length) of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized version of the vector (unit vector).
    /// If the magnitude is zero, it returns a zero vector.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            self / mag
        } else {
            Self::ZERO
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Calculates the squared distance between two vector points.
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Returns a vector perpendicular to this vector (90-degree counter-clockwise rotation).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates the vector by a given angle (in radians).
    pub fn rotate(self, angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Scales the vector down so its length does not exceed `max_length`.
    pub fn clamp_length(self, max_length: f64) -> Self {
        let mag = self.magnitude();
        if mag > max_length {
            self * (max_length / mag)
        } else {
            self
        }
    }

    /// Angle of the vector relative to the +x axis, in radians.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle of the direction from this point to `other`, in radians.
    pub fn angle_to(self, other: Self) -> f64 {
        (other - self).angle()
    }

    /// Reflects the vector about a unit `normal`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_arithmetic() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(v2 / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));

        let mut v = v1;
        v += v2;
        v -= Vec2::ONE;
        assert_eq!(v, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_vec2_dot_and_cross() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_abs_diff_eq!(v1.dot(v2), 11.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v1.cross(v2), -2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Vec2::RIGHT.cross(Vec2::DOWN), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_vec2_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.magnitude_squared(), 25.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.magnitude(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Vec2::ZERO.magnitude(), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_vec2_normalize() {
        let norm_v = Vec2::new(3.0, 4.0).normalize();
        assert_abs_diff_eq!(norm_v.magnitude(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(norm_v.x, 0.6, epsilon = EPSILON);
        assert_abs_diff_eq!(norm_v.y, 0.8, epsilon = EPSILON);

        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_distance() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(4.0, 6.0);
        assert_abs_diff_eq!(v1.distance_squared(v2), 25.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v2.distance(v1), 5.0, epsilon = EPSILON);
    }

    #[test]
    fn test_vec2_perpendicular() {
        let v = Vec2::new(3.0, 4.0);
        let perp = v.perpendicular();
        assert_eq!(perp, Vec2::new(-4.0, 3.0));
        assert_abs_diff_eq!(v.dot(perp), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_vec2_rotate() {
        let v90 = Vec2::RIGHT.rotate(PI / 2.0);
        assert_abs_diff_eq!(v90.x, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v90.y, 1.0, epsilon = EPSILON);

        let v180 = Vec2::RIGHT.rotate(PI);
        assert_abs_diff_eq!(v180.x, -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v180.y, 0.0, epsilon = EPSILON);

        let v2 = Vec2::new(1.0, 1.0).rotate(PI / 2.0);
        assert_abs_diff_eq!(v2.x, -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v2.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_vec2_lerp() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(5.0, 15.0));
    }

    #[test]
    fn test_vec2_clamp_length() {
        let long = Vec2::new(30.0, 40.0).clamp_length(5.0);
        assert_abs_diff_eq!(long.magnitude(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(long.x, 3.0, epsilon = EPSILON);

        let short = Vec2::new(1.0, 1.0);
        assert_eq!(short.clamp_length(5.0), short);
    }

    #[test]
    fn test_vec2_angles() {
        assert_abs_diff_eq!(Vec2::DOWN.angle(), PI / 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Vec2::LEFT.angle(), PI, epsilon = EPSILON);
        let from = Vec2::new(1.0, 1.0);
        assert_abs_diff_eq!(from.angle_to(Vec2::new(1.0, 5.0)), PI / 2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_vec2_reflect() {
        // A ball falling onto a floor whose normal points up bounces straight back.
        let falling = Vec2::new(2.0, 5.0);
        assert_eq!(falling.reflect(Vec2::UP), Vec2::new(2.0, -5.0));
    }

    #[test]
    fn test_vec2_abs_and_zero() {
        assert_eq!(Vec2::new(-1.5, 2.0).abs(), Vec2::new(1.5, 2.0));
        assert!(Vec2::ZERO.is_zero());
        assert!(!Vec2::UP.is_zero());
    }
}
