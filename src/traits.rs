//! Seam between mesh producers and triangle-consuming backends.

use crate::vertex::Vertex;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a list of triangles can be walked by
/// a triangle-consuming backend (GPU upload, file export, debugging dumps)
/// without knowing how the geometry was produced.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions and normals in emission
    /// order.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);
}
