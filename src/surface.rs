//! Tessellation of a sampled grid into a renderable surface mesh.
//!
//! Each grid cell is split along one diagonal into two triangles. Every
//! triangle gets a flat face normal, `normalize(cross(B - A, C - A))` of its
//! oriented vertices, replicated to all three vertices, and a planar UV
//! projection `(x / u_scale, z / v_scale)` that is independent of the sampled
//! height.

use crate::buffers::MeshBuffers;
use crate::errors::BuildError;
use crate::float_types::{Real, tolerance};
use crate::grid::{Bounds, Domain, SampleGrid, validate_order};
use crate::traits::Triangulated3D;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// A built surface: the attribute buffers plus the domain and range bounds
/// they were generated over, so consumers can place and scale the mesh
/// without re-deriving them.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    pub buffers: MeshBuffers,
    pub domain: Domain,
    pub range: Bounds,
}

impl Triangulated3D for SurfaceMesh {
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        self.buffers.visit_triangles(f);
    }
}

/// Configuration for building the graph of `y = f(x, z)` over a rectangular
/// domain.
///
/// Every build is independent: given the same (pure) function and parameters
/// the output buffers are bit-identical, and no state is shared between
/// calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMeshBuilder {
    order: usize,
    domain: Domain,
    range: Bounds,
    u_scale: Real,
    v_scale: Real,
    smooth: bool,
}

impl SurfaceMeshBuilder {
    /// A builder sampling `order` points per axis across `domain`, with unit
    /// UV scales and flat per-face normals.
    ///
    /// `range` is the expected `[min, max]` of the function values; it is
    /// carried through to the output untouched.
    pub const fn new(order: usize, domain: Domain, range: Bounds) -> Self {
        SurfaceMeshBuilder {
            order,
            domain,
            range,
            u_scale: 1.0,
            v_scale: 1.0,
            smooth: false,
        }
    }

    /// Divisors applied to the planar UV projection.
    pub fn uv_scale(mut self, u_scale: Real, v_scale: Real) -> Self {
        self.u_scale = u_scale;
        self.v_scale = v_scale;
        self
    }

    /// Average normals across shared vertex positions after emission,
    /// replacing the flat per-face normals.
    pub fn smooth_normals(mut self, enabled: bool) -> Self {
        self.smooth = enabled;
        self
    }

    fn validate(&self) -> Result<(), BuildError> {
        validate_order(self.order)?;
        self.domain.validate()?;
        self.range.validate()?;
        for scale in [self.u_scale, self.v_scale] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(BuildError::InvalidUvScale(scale));
            }
        }
        Ok(())
    }

    /// Sample `value_function` and tessellate into fresh buffers.
    pub fn build<F>(&self, value_function: F) -> Result<SurfaceMesh, BuildError>
    where
        F: Fn(Real, Real) -> Real + Sync,
    {
        let mut buffers = MeshBuffers::with_capacity_for_order(self.order);
        self.build_into(value_function, &mut buffers)?;
        Ok(self.wrap(buffers))
    }

    /// Sample `value_function` and tessellate into caller-owned buffers,
    /// reusing their allocations. On error the buffers are left cleared,
    /// never half-filled.
    pub fn build_into<F>(
        &self,
        value_function: F,
        buffers: &mut MeshBuffers,
    ) -> Result<(), BuildError>
    where
        F: Fn(Real, Real) -> Real + Sync,
    {
        buffers.clear();
        self.validate()?;
        let grid = SampleGrid::sample(value_function, self.order, &self.domain)?;
        self.tessellate_grid(&grid, buffers)
    }

    /// Like [`SurfaceMeshBuilder::build`] for a fallible value function.
    /// Evaluation errors abort the build with the offending `(x, z)` attached.
    pub fn try_build<F, E>(&self, value_function: F) -> Result<SurfaceMesh, BuildError>
    where
        F: Fn(Real, Real) -> Result<Real, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.validate()?;
        let grid = SampleGrid::try_sample(value_function, self.order, &self.domain)?;
        let mut buffers = MeshBuffers::with_capacity_for_order(self.order);
        self.tessellate_grid(&grid, &mut buffers)?;
        Ok(self.wrap(buffers))
    }

    /// Tessellate an already-sampled grid. The grid's order must match the
    /// builder's.
    pub fn build_from_grid(&self, grid: &SampleGrid) -> Result<SurfaceMesh, BuildError> {
        self.validate()?;
        let mut buffers = MeshBuffers::with_capacity_for_order(self.order);
        self.tessellate_grid(grid, &mut buffers)?;
        Ok(self.wrap(buffers))
    }

    fn tessellate_grid(
        &self,
        grid: &SampleGrid,
        buffers: &mut MeshBuffers,
    ) -> Result<(), BuildError> {
        if grid.order() != self.order {
            return Err(BuildError::OrderMismatch { expected: self.order, got: grid.order() });
        }
        tessellate_into(grid, &self.domain, self.u_scale, self.v_scale, buffers)?;
        if self.smooth {
            buffers.smooth_normals();
        }
        Ok(())
    }

    fn wrap(&self, buffers: MeshBuffers) -> SurfaceMesh {
        SurfaceMesh { buffers, domain: self.domain, range: self.range }
    }
}

/// One-call entry point matching the builder defaults: flat normals, explicit
/// UV scales.
pub fn build_surface_mesh<F>(
    value_function: F,
    order: usize,
    domain: Domain,
    range: Bounds,
    u_scale: Real,
    v_scale: Real,
) -> Result<SurfaceMesh, BuildError>
where
    F: Fn(Real, Real) -> Real + Sync,
{
    SurfaceMeshBuilder::new(order, domain, range)
        .uv_scale(u_scale, v_scale)
        .build(value_function)
}

/// Emit two triangles per grid cell into `buffers` (cleared first).
///
/// For cell `(i, j)` with corner heights `value`, `value_plus_x`,
/// `value_plus_z` and `value_plus_xz`, the quad is split as:
///
/// ```text
/// triangle 1: (x, value_plus_z, z+dz) (x+dx, value_plus_x, z) (x, value, z)
/// triangle 2: (x+dx, value_plus_x, z) (x, value_plus_z, z+dz) (x+dx, value_plus_xz, z+dz)
/// ```
///
/// Vertices land in the buffers in exactly this order, six per cell.
pub fn tessellate_into(
    grid: &SampleGrid,
    domain: &Domain,
    u_scale: Real,
    v_scale: Real,
    buffers: &mut MeshBuffers,
) -> Result<(), BuildError> {
    domain.validate()?;
    for scale in [u_scale, v_scale] {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(BuildError::InvalidUvScale(scale));
        }
    }

    let order = grid.order();
    let x_step = domain.x.span() / (order - 1) as Real;
    let z_step = domain.z.span() / (order - 1) as Real;

    buffers.clear();
    buffers.reserve_for_order(order);

    for i in 0..order - 1 {
        let x = domain.x.min + i as Real * x_step;
        for j in 0..order - 1 {
            let z = domain.z.min + j as Real * z_step;

            let value = grid.value(i, j);
            let value_plus_x = grid.value(i + 1, j);
            let value_plus_z = grid.value(i, j + 1);
            let value_plus_xz = grid.value(i + 1, j + 1);

            let a = Point3::new(x, value_plus_z, z + z_step);
            let b = Point3::new(x + x_step, value_plus_x, z);
            let c = Point3::new(x, value, z);
            emit_triangle(buffers, &a, &b, &c, u_scale, v_scale);

            let a = Point3::new(x + x_step, value_plus_x, z);
            let b = Point3::new(x, value_plus_z, z + z_step);
            let c = Point3::new(x + x_step, value_plus_xz, z + z_step);
            emit_triangle(buffers, &a, &b, &c, u_scale, v_scale);
        }
    }
    Ok(())
}

fn emit_triangle(
    buffers: &mut MeshBuffers,
    a: &Point3<Real>,
    b: &Point3<Real>,
    c: &Point3<Real>,
    u_scale: Real,
    v_scale: Real,
) {
    let normal = face_normal(a, b, c);
    buffers.push_vertex(a, &normal, u_scale, v_scale);
    buffers.push_vertex(b, &normal, u_scale, v_scale);
    buffers.push_vertex(c, &normal, u_scale, v_scale);
}

/// Unit normal of the oriented triangle `a b c`. Degenerate (zero-area)
/// triangles fall back to `+Y` so the buffers never carry NaN.
fn face_normal(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Vector3<Real> {
    (b - a).cross(&(c - a)).try_normalize(tolerance()).unwrap_or_else(Vector3::y)
}
