//! A small library for building triangulated surface meshes from the graph of a
//! scalar function `y = f(x, z)` sampled on a regular grid.
//!
//! The output is a set of flat attribute buffers (positions, normals, UV
//! coordinates) laid out as a non-indexed triangle list, ready for direct upload
//! to any rendering API. Each grid cell yields two triangles with a flat per-face
//! normal; an optional post-pass averages normals across shared positions for
//! smooth shading.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to parallelize grid sampling
//!
//! # Example
//! ```
//! use graphmesh::{Bounds, Domain, SurfaceMeshBuilder};
//!
//! let domain = Domain::new(Bounds::new(-1.0, 1.0), Bounds::new(-1.0, 1.0));
//! let range = Bounds::new(0.0, 2.0);
//! let surface = SurfaceMeshBuilder::new(32, domain, range)
//!     .build(|x, z| x * x + z * z)
//!     .unwrap();
//! assert_eq!(surface.buffers.triangle_count(), 2 * 31 * 31);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod buffers;
pub mod errors;
pub mod float_types;
pub mod grid;
pub mod scene;
pub mod surface;
pub mod traits;
pub mod vertex;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use buffers::MeshBuffers;
pub use errors::BuildError;
pub use grid::{Bounds, Domain, SampleGrid};
pub use scene::{FlatMaterial, SurfaceObject};
pub use surface::{SurfaceMesh, SurfaceMeshBuilder, build_surface_mesh};
pub use traits::Triangulated3D;
pub use vertex::Vertex;
