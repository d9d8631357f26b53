//! Flat attribute buffers for a non-indexed triangle mesh.
//!
//! Three index-aligned sequences: positions (3 floats per vertex), normals
//! (3 floats per vertex) and UVs (2 floats per vertex), in strict emission
//! order with no vertex deduplication. This is the shape most rendering APIs
//! accept directly as a triangle-list upload.

use crate::float_types::{Real, tolerance};
use crate::traits::Triangulated3D;
use crate::vertex::Vertex;
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

/// Vertex attribute arrays for a non-indexed triangle list.
///
/// Invariant: `positions.len() / 3 == normals.len() / 3 == uvs.len() / 2`,
/// and the vertex count is a multiple of 3.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<Real>,
    pub normals: Vec<Real>,
    pub uvs: Vec<Real>,
}

impl MeshBuffers {
    pub const fn new() -> Self {
        MeshBuffers { positions: Vec::new(), normals: Vec::new(), uvs: Vec::new() }
    }

    /// Empty buffers with capacity for a full `order × order` tessellation,
    /// for callers that rebuild frequently and want to avoid allocation churn.
    pub fn with_capacity_for_order(order: usize) -> Self {
        let mut buffers = MeshBuffers::new();
        buffers.reserve_for_order(order);
        buffers
    }

    /// Reserve room for the `2 * (order - 1)^2` triangles a grid of the given
    /// order tessellates into.
    pub fn reserve_for_order(&mut self, order: usize) {
        let cells = order.saturating_sub(1);
        let vertices = cells * cells * 2 * 3;
        self.positions.reserve(vertices * 3);
        self.normals.reserve(vertices * 3);
        self.uvs.reserve(vertices * 2);
    }

    /// Drop all vertices, keeping allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// The `index`-th emitted vertex.
    pub fn vertex(&self, index: usize) -> Vertex {
        let p = index * 3;
        Vertex::new(
            Point3::new(self.positions[p], self.positions[p + 1], self.positions[p + 2]),
            Vector3::new(self.normals[p], self.normals[p + 1], self.normals[p + 2]),
        )
    }

    /// UV coordinate of the `index`-th emitted vertex.
    pub fn uv(&self, index: usize) -> (Real, Real) {
        (self.uvs[index * 2], self.uvs[index * 2 + 1])
    }

    pub(crate) fn push_vertex(&mut self, pos: &Point3<Real>, normal: &Vector3<Real>, u_scale: Real, v_scale: Real) {
        self.positions.extend_from_slice(&[pos.x, pos.y, pos.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        self.uvs.extend_from_slice(&[pos.x / u_scale, pos.z / v_scale]);
    }

    /// Replace the flat per-face normals with smoothed per-vertex normals.
    ///
    /// Vertices whose positions coincide within [`tolerance`] are welded, and
    /// each welded vertex receives the normalized sum of the raw face cross
    /// products of every incident triangle. Summing the unnormalized cross
    /// products weights each face by twice its area, so large faces dominate
    /// the average. Degenerate clusters whose sum is below tolerance keep
    /// their flat normal.
    pub fn smooth_normals(&mut self) {
        let tol = tolerance();
        let inv = 1.0 / tol;
        let key = |x: Real, y: Real, z: Real| -> (i64, i64, i64) {
            ((x * inv).round() as i64, (y * inv).round() as i64, (z * inv).round() as i64)
        };

        let mut accumulated: HashMap<(i64, i64, i64), Vector3<Real>> = HashMap::new();
        for triangle in 0..self.triangle_count() {
            let base = triangle * 9;
            let corner = |offset: usize| -> Point3<Real> {
                Point3::new(
                    self.positions[base + offset],
                    self.positions[base + offset + 1],
                    self.positions[base + offset + 2],
                )
            };
            let a = corner(0);
            let b = corner(3);
            let c = corner(6);
            let face = (b - a).cross(&(c - a));
            for p in [a, b, c] {
                *accumulated.entry(key(p.x, p.y, p.z)).or_insert_with(Vector3::zeros) += face;
            }
        }

        for index in 0..self.vertex_count() {
            let base = index * 3;
            let k = key(self.positions[base], self.positions[base + 1], self.positions[base + 2]);
            if let Some(sum) = accumulated.get(&k) {
                if let Some(normal) = sum.try_normalize(tol) {
                    self.normals[base] = normal.x;
                    self.normals[base + 1] = normal.y;
                    self.normals[base + 2] = normal.z;
                }
            }
        }
    }
}

impl Triangulated3D for MeshBuffers {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for triangle in 0..self.triangle_count() {
            let base = triangle * 3;
            f([self.vertex(base), self.vertex(base + 1), self.vertex(base + 2)]);
        }
    }
}
