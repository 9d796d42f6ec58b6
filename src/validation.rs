//! Validation for coordinates and rectangles handed to the index.
//!
//! The index itself never errors on odd geometry: out-of-bounds points are
//! refused with `false` and degenerate queries return nothing. These checks
//! are for callers that would rather fail loudly.

use crate::error::{QuadError, Result};
use geo::Point;
use quadcluster_types::bbox::Rect;

/// Validates that both coordinates of a point are finite.
///
/// # Examples
///
/// ```
/// use quadcluster::validation::validate_point;
/// use quadcluster::Point;
///
/// assert!(validate_point(&Point::new(1.0, 2.0)).is_ok());
/// assert!(validate_point(&Point::new(f64::NAN, 2.0)).is_err());
/// ```
pub fn validate_point(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(QuadError::InvalidInput(format!(
            "X coordinate must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(QuadError::InvalidInput(format!(
            "Y coordinate must be finite, got: {}",
            y
        )));
    }

    Ok(())
}

/// Validates that a rectangle is finite and has a positive area.
///
/// # Examples
///
/// ```
/// use quadcluster::validation::validate_rect;
/// use quadcluster::Rect;
///
/// assert!(validate_rect(&Rect::new(0.0, 0.0, 320.0, 480.0)).is_ok());
/// assert!(validate_rect(&Rect::new(0.0, 0.0, 0.0, 480.0)).is_err());
/// ```
pub fn validate_rect(rect: &Rect) -> Result<()> {
    if !rect.is_finite() {
        return Err(QuadError::InvalidInput(format!(
            "Rectangle coordinates must be finite, got: {:?}",
            rect
        )));
    }

    if rect.is_empty() {
        return Err(QuadError::InvalidInput(format!(
            "Rectangle must have a positive area, got {}x{}",
            rect.width(),
            rect.height()
        )));
    }

    Ok(())
}

/// Validates multiple points.
pub fn validate_points(points: &[Point]) -> Result<()> {
    for (idx, point) in points.iter().enumerate() {
        validate_point(point)
            .map_err(|e| QuadError::InvalidInput(format!("Point at index {}: {}", idx, e)))?;
    }
    Ok(())
}

/// Validates that a point lies inside `bounds` under half-open containment.
pub fn validate_within(point: &Point, bounds: &Rect) -> Result<()> {
    validate_point(point)?;

    if !bounds.contains(point) {
        return Err(QuadError::InvalidInput(format!(
            "Point ({}, {}) is outside [{}, {}) x [{}, {})",
            point.x(),
            point.y(),
            bounds.min_x(),
            bounds.max_x(),
            bounds.min_y(),
            bounds.max_y()
        )));
    }

    Ok(())
}
