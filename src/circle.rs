use std::f64::consts::PI;

use crate::error::FigureError;
use crate::shape::Shape;

/// A circle, defined by one positive radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Builds a circle, rejecting non-positive radii. Construction always
    /// validates through [`Circle::set_radius`].
    pub fn new(radius: f64) -> Result<Self, FigureError> {
        let mut circle = Self { radius: 1.0 };
        circle.set_radius(radius)?;
        Ok(circle)
    }

    /// Replaces the radius. On failure the previous value is kept.
    pub fn set_radius(&mut self, value: f64) -> Result<(), FigureError> {
        if value <= 0.0 || value.is_nan() {
            return Err(FigureError::invalid_dimension("radius", value));
        }

        self.radius = value;
        Ok(())
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn label(&self) -> &'static str {
        "circle"
    }

    fn dimension_line(&self) -> String {
        format!("Radius of the circle is {}", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-3;

    #[test]
    fn test_metrics_follow_radius() {
        let circle = Circle::new(3.0).unwrap();
        assert!((circle.area() - 28.274).abs() < TOLERANCE);
        assert!((circle.circumference() - 18.850).abs() < TOLERANCE);

        let circle = Circle::new(1.0).unwrap();
        assert_eq!(circle.area(), PI);
        assert_eq!(circle.circumference(), 2.0 * PI);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        assert!(Circle::new(0.0).is_err());
        assert!(Circle::new(-0.5).is_err());
        assert!(Circle::new(f64::NAN).is_err());

        let err = Circle::new(0.0).unwrap_err();
        assert_eq!(err, FigureError::invalid_dimension("radius", 0.0));
    }

    #[test]
    fn test_failed_mutation_keeps_previous_value() {
        let mut circle = Circle::new(2.0).unwrap();
        assert!(circle.set_radius(-1.0).is_err());
        assert_eq!(circle.radius(), 2.0);
    }

    #[test]
    fn test_dimension_line() {
        let circle = Circle::new(3.0).unwrap();
        assert_eq!(circle.dimension_line(), "Radius of the circle is 3");
    }
}
