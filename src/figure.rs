use crate::circle::Circle;
use crate::shape::Shape;
use crate::square::Square;

/// An owned figure: the closed set of concrete variants behind one type.
///
/// The collection in the driver is `Vec<Figure>`; each element is exclusively
/// owned and dropped with the vector. The `Shape` impl delegates to the
/// wrapped variant, so a `Figure` can stand in anywhere a `&dyn Shape` is
/// expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Square(Square),
    Circle(Circle),
}

impl Figure {
    /// The variant-tag check used by the growth pass: squares reveal their
    /// concrete type, everything else stays opaque.
    pub fn as_square_mut(&mut self) -> Option<&mut Square> {
        match self {
            Figure::Square(square) => Some(square),
            Figure::Circle(_) => None,
        }
    }

    pub fn is_square(&self) -> bool {
        matches!(self, Figure::Square(_))
    }
}

impl Shape for Figure {
    fn area(&self) -> f64 {
        match self {
            Figure::Square(square) => square.area(),
            Figure::Circle(circle) => circle.area(),
        }
    }

    fn circumference(&self) -> f64 {
        match self {
            Figure::Square(square) => square.circumference(),
            Figure::Circle(circle) => circle.circumference(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Figure::Square(square) => square.label(),
            Figure::Circle(circle) => circle.label(),
        }
    }

    fn dimension_line(&self) -> String {
        match self {
            Figure::Square(square) => square.dimension_line(),
            Figure::Circle(circle) => circle.dimension_line(),
        }
    }
}

impl From<Square> for Figure {
    fn from(square: Square) -> Self {
        Figure::Square(square)
    }
}

impl From<Circle> for Figure {
    fn from(circle: Circle) -> Self {
        Figure::Circle(circle)
    }
}
