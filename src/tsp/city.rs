//! Cities and the Euclidean distance metric.

/// A point in the plane. A city's identifier is its index in the instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        distance(self, other)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two cities. Symmetric and never negative.
///
/// Uses `hypot`, so squaring cannot overflow or underflow: the result is
/// finite and non-zero for any two distinct cities whose coordinate
/// differences are finite.
pub fn distance(a: &City, b: &City) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_345() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = City::new(1.5, -2.0);
        let b = City::new(-7.25, 3.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_distance_extreme_magnitudes() {
        let origin = City::new(0.0, 0.0);
        let far = City::new(3e200, 4e200);
        assert!((distance(&origin, &far) / 5e200 - 1.0).abs() < 1e-12);

        let near = City::new(3e-200, 4e-200);
        let d = distance(&origin, &near);
        assert!(d > 0.0);
        assert!((d / 5e-200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = City::from((4.0, 6.0));
        assert_eq!(distance(&a, &a), 0.0);
    }
}
