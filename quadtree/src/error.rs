use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "rectangle must have finite coordinates and finite, non-negative width/height (x: {x}, y: {y}, width: {width}, height: {height})"
    )]
    InvalidGeometry {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    #[error("minimum subdivision size must be finite and positive (min_size: {min_size})")]
    DegenerateSubdivision { min_size: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl QuadtreeError {
    pub(crate) fn invalid_geometry(rect: &common::Rectangle) -> Self {
        QuadtreeError::InvalidGeometry {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}
