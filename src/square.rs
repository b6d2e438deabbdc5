use crate::error::FigureError;
use crate::shape::Shape;

const SIDE_COUNT: f64 = 4.0;

/// A square, defined by one positive side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    side_length: f64,
}

impl Square {
    /// Builds a square, rejecting non-positive side lengths. Construction
    /// always validates through [`Square::set_side_length`]; there is no
    /// unvalidated path.
    pub fn new(side_length: f64) -> Result<Self, FigureError> {
        let mut square = Self { side_length: 1.0 };
        square.set_side_length(side_length)?;
        Ok(square)
    }

    /// Replaces the side length. On failure the previous value is kept.
    pub fn set_side_length(&mut self, value: f64) -> Result<(), FigureError> {
        if value <= 0.0 || value.is_nan() {
            return Err(FigureError::invalid_dimension("side length", value));
        }

        self.side_length = value;
        Ok(())
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side_length * self.side_length
    }

    fn circumference(&self) -> f64 {
        self.side_length * SIDE_COUNT
    }

    fn label(&self) -> &'static str {
        "square"
    }

    fn dimension_line(&self) -> String {
        format!("Side length of the square is {}", self.side_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_follow_side_length() {
        let square = Square::new(2.0).unwrap();
        assert_eq!(square.area(), 4.0);
        assert_eq!(square.circumference(), 8.0);

        let square = Square::new(3.5).unwrap();
        assert_eq!(square.area(), 3.5 * 3.5);
        assert_eq!(square.circumference(), 4.0 * 3.5);
    }

    #[test]
    fn test_rejects_non_positive_side_length() {
        assert!(Square::new(0.0).is_err());
        assert!(Square::new(-1.0).is_err());
        assert!(Square::new(f64::NAN).is_err());

        let err = Square::new(-3.0).unwrap_err();
        assert_eq!(err, FigureError::invalid_dimension("side length", -3.0));
    }

    #[test]
    fn test_failed_mutation_keeps_previous_value() {
        let mut square = Square::new(5.0).unwrap();
        assert!(square.set_side_length(-2.0).is_err());
        assert_eq!(square.side_length(), 5.0);
        assert!(square.set_side_length(0.0).is_err());
        assert_eq!(square.side_length(), 5.0);
    }

    #[test]
    fn test_growth_increases_metrics() {
        let mut square = Square::new(2.0).unwrap();
        square.set_side_length(square.side_length() + 5.0).unwrap();
        assert_eq!(square.side_length(), 7.0);
        assert_eq!(square.area(), 49.0);
        assert_eq!(square.circumference(), 28.0);
    }

    #[test]
    fn test_dimension_line() {
        let square = Square::new(7.0).unwrap();
        assert_eq!(square.dimension_line(), "Side length of the square is 7");
    }
}
