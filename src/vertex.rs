//! Struct and functions for working with the `Vertex`s a surface mesh is built from.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A mesh vertex, holding position and normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non-unit) normal; it will be **copied
    ///              verbatim**, so make sure it is oriented the way
    ///              you need it for lighting
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    /// Flip vertex normal
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }
}
