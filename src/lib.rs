//! A small demonstration of runtime polymorphism: two figure variants share
//! one capability ([`Shape`]), are generated randomly, held in an owning
//! collection, selectively grown via a variant-tag check, and printed.

pub mod circle;
pub mod composition;
pub mod error;
pub mod figure;
pub mod gallery;
pub mod shape;
pub mod square;

pub use circle::Circle;
pub use error::FigureError;
pub use figure::Figure;
pub use shape::Shape;
pub use square::Square;
