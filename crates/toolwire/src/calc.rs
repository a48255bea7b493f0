//! Basic arithmetic tools.

use crate::types::Rectangle;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Compute area and perimeter of a `length` × `width` rectangle.
pub fn rectangle(length: f64, width: f64) -> Rectangle {
    Rectangle {
        length,
        width,
        area: length * width,
        perimeter: 2.0 * (length + width),
    }
}
