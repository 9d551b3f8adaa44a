use serde::{Deserialize, Serialize};

/// 2D Vector for physics calculations (world units)
///
/// All operations return new values; operands are never mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn from_array([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn add(self, other: Vec2) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    pub fn sub(self, other: Vec2) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    pub fn scale(self, s: f64) -> Self {
        Self { x: self.x * s, y: self.y * s }
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Direction of the vector, `atan2(y, x)`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unit vector in the same direction.
    ///
    /// There is no zero-length guard: the zero vector scales by `1/0` and
    /// comes back with NaN components.
    pub fn unit(self) -> Self {
        self.scale(1.0 / self.magnitude())
    }

    /// Rotated 90 degrees clockwise: `(y, -x)`
    pub fn perpendicular(self) -> Self {
        Self { x: self.y, y: -self.x }
    }

    pub fn distance(self, other: Vec2) -> f64 {
        self.sub(other).magnitude()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(a: [f64; 2]) -> Self {
        Vec2::from_array(a)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec2::add(self, rhs)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec2::sub(self, rhs)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn unit_has_magnitude_one() {
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-0.001, 0.0),
            Vec2::new(1e6, -2e6),
            Vec2::new(0.3, -0.7),
        ] {
            assert!((v.unit().magnitude() - 1.0).abs() < EPS, "{:?}", v);
        }
    }

    #[test]
    fn unit_of_zero_is_not_finite() {
        let u = Vec2::zero().unit();
        assert!(u.x.is_nan());
        assert!(u.y.is_nan());
        assert!(!u.is_finite());
    }

    #[test]
    fn operations_do_not_mutate_operands() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-3.0, 0.5);

        assert_eq!(a.add(b), Vec2::new(-2.0, 2.5));
        assert_eq!(a.sub(b), Vec2::new(4.0, 1.5));
        assert_eq!(a.scale(2.0), Vec2::new(2.0, 4.0));
        assert_eq!(a.dot(b), -2.0);
        assert_eq!(a, Vec2::new(1.0, 2.0));
        assert_eq!(b, Vec2::new(-3.0, 0.5));

        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.sub(b));
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn angle_uses_atan2() {
        assert_eq!(Vec2::new(1.0, 0.0).angle(), 0.0);
        assert!((Vec2::new(0.0, 1.0).angle() - std::f64::consts::FRAC_PI_2).abs() < EPS);
        assert!((Vec2::new(-1.0, 0.0).angle() - std::f64::consts::PI).abs() < EPS);
    }

    #[test]
    fn perpendicular_is_orthogonal_and_clockwise() {
        let n = Vec2::new(0.6, 0.8);
        let t = n.perpendicular();
        assert_eq!(t, Vec2::new(0.8, -0.6));
        assert_eq!(n.dot(t), 0.0);
    }
}
