use thiserror::Error;

/// The only error this crate produces: a figure's defining dimension was set
/// to a non-positive value. It is never caught inside the crate; the driver
/// lets it unwind to `main`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    #[error("invalid {dimension}: {value} (must be greater than 0)")]
    InvalidDimension { dimension: &'static str, value: f64 },
}

impl FigureError {
    pub fn invalid_dimension(dimension: &'static str, value: f64) -> Self {
        Self::InvalidDimension { dimension, value }
    }
}
