//! Engine-agnostic mesh assembly.
//!
//! The builder itself knows nothing about rendering; this module pairs a
//! built [`SurfaceMesh`] with the minimal material description a host
//! renderer needs to shade the graph of a function: a flat color and
//! double-sided rasterization (the underside of a surface is routinely
//! visible when the camera dips below it).

use crate::errors::BuildError;
use crate::float_types::Real;
use crate::grid::{Bounds, Domain};
use crate::surface::{SurfaceMesh, SurfaceMeshBuilder};
use crate::traits::Triangulated3D;
use crate::vertex::Vertex;

/// Flat-shaded material description.
///
/// The color is a required input; there is no default. Hosts that want
/// height-mapped or textured shading can ignore it and use the UV channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatMaterial {
    pub color: [f32; 3],
    pub double_sided: bool,
}

impl FlatMaterial {
    pub const fn new(color: [f32; 3]) -> Self {
        FlatMaterial { color, double_sided: true }
    }

    pub const fn single_sided(mut self) -> Self {
        self.double_sided = false;
        self
    }
}

/// A surface mesh paired with its material, ready to hand to a host
/// renderer's buffer-upload API.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceObject {
    pub surface: SurfaceMesh,
    pub material: FlatMaterial,
}

impl SurfaceObject {
    pub const fn new(surface: SurfaceMesh, material: FlatMaterial) -> Self {
        SurfaceObject { surface, material }
    }

    /// Sample and tessellate in one step, forwarding to
    /// [`SurfaceMeshBuilder`] and attaching the material.
    pub fn build<F>(
        value_function: F,
        builder: &SurfaceMeshBuilder,
        material: FlatMaterial,
    ) -> Result<Self, BuildError>
    where
        F: Fn(Real, Real) -> Real + Sync,
    {
        Ok(SurfaceObject::new(builder.build(value_function)?, material))
    }

    /// Position attribute slice, 3 components per vertex.
    pub fn positions(&self) -> &[Real] {
        &self.surface.buffers.positions
    }

    /// Normal attribute slice, 3 components per vertex.
    pub fn normals(&self) -> &[Real] {
        &self.surface.buffers.normals
    }

    /// UV attribute slice, 2 components per vertex.
    pub fn uvs(&self) -> &[Real] {
        &self.surface.buffers.uvs
    }

    pub const fn domain(&self) -> &Domain {
        &self.surface.domain
    }

    pub const fn range(&self) -> &Bounds {
        &self.surface.range
    }
}

impl Triangulated3D for SurfaceObject {
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        self.surface.visit_triangles(f);
    }
}
