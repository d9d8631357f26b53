use graphmesh::{Bounds, Domain, SurfaceMeshBuilder};

const EPS: f64 = 1e-9;

fn symmetric_domain() -> Domain {
    // Unit steps keep shared corner positions bit-identical across cells,
    // so position welding is exact.
    Domain::new(Bounds::new(-1.0, 1.0), Bounds::new(-1.0, 1.0))
}

#[test]
fn smoothing_a_constant_surface_is_a_no_op() {
    let c = 0.75;
    let flat = SurfaceMeshBuilder::new(3, symmetric_domain(), Bounds::new(c, c))
        .build(|_x, _z| c)
        .unwrap();
    let smoothed = SurfaceMeshBuilder::new(3, symmetric_domain(), Bounds::new(c, c))
        .smooth_normals(true)
        .build(|_x, _z| c)
        .unwrap();

    for index in 0..smoothed.buffers.vertex_count() {
        let normal = smoothed.buffers.vertex(index).normal;
        assert!((normal.x).abs() < EPS);
        assert!((normal.y - 1.0).abs() < EPS);
        assert!((normal.z).abs() < EPS);
    }
    assert_eq!(flat.buffers.positions, smoothed.buffers.positions);
    assert_eq!(flat.buffers.uvs, smoothed.buffers.uvs);
}

#[test]
fn smoothed_normals_are_unit_length_and_welded() {
    // A ridge along x = 0: faces on either side disagree, shared positions
    // must end up with one averaged normal.
    let smoothed = SurfaceMeshBuilder::new(3, symmetric_domain(), Bounds::new(0.0, 1.0))
        .smooth_normals(true)
        .build(|x, _z| x.abs())
        .unwrap();

    let buffers = &smoothed.buffers;
    for index in 0..buffers.vertex_count() {
        assert!((buffers.vertex(index).normal.norm() - 1.0).abs() < EPS);
    }

    for i in 0..buffers.vertex_count() {
        for j in (i + 1)..buffers.vertex_count() {
            let a = buffers.vertex(i);
            let b = buffers.vertex(j);
            if a.pos == b.pos {
                assert!(
                    (a.normal - b.normal).norm() < EPS,
                    "vertices sharing a position must share a smoothed normal"
                );
            }
        }
    }
}

#[test]
fn smoothing_changes_normals_across_a_crease() {
    let flat = SurfaceMeshBuilder::new(3, symmetric_domain(), Bounds::new(0.0, 1.0))
        .build(|x, _z| x.abs())
        .unwrap();
    let smoothed = SurfaceMeshBuilder::new(3, symmetric_domain(), Bounds::new(0.0, 1.0))
        .smooth_normals(true)
        .build(|x, _z| x.abs())
        .unwrap();

    assert_eq!(flat.buffers.positions, smoothed.buffers.positions);
    assert_ne!(flat.buffers.normals, smoothed.buffers.normals);
}

#[test]
fn builder_flag_matches_manual_smoothing() {
    let f = |x: f64, z: f64| x * x - z * z;
    let via_flag = SurfaceMeshBuilder::new(4, symmetric_domain(), Bounds::new(-1.0, 1.0))
        .smooth_normals(true)
        .build(f)
        .unwrap();

    let mut manual = SurfaceMeshBuilder::new(4, symmetric_domain(), Bounds::new(-1.0, 1.0))
        .build(f)
        .unwrap();
    manual.buffers.smooth_normals();

    assert_eq!(via_flag.buffers, manual.buffers);
}
