use graphmesh::{
    Bounds, Domain, FlatMaterial, SurfaceMeshBuilder, SurfaceObject, Triangulated3D,
};

#[test]
fn assembled_object_exposes_upload_ready_slices() {
    let domain = Domain::new(Bounds::new(0.0, 4.0), Bounds::new(0.0, 4.0));
    let builder = SurfaceMeshBuilder::new(5, domain, Bounds::new(0.0, 8.0));
    let object =
        SurfaceObject::build(|x, z| x + z, &builder, FlatMaterial::new([0.2, 0.6, 0.3]))
            .unwrap();

    let triangles = 2 * 4 * 4;
    assert_eq!(object.positions().len(), triangles * 3 * 3);
    assert_eq!(object.normals().len(), triangles * 3 * 3);
    assert_eq!(object.uvs().len(), triangles * 3 * 2);
    assert_eq!(object.domain(), &domain);
    assert_eq!(object.range(), &Bounds::new(0.0, 8.0));
}

#[test]
fn materials_default_to_double_sided() {
    let material = FlatMaterial::new([1.0, 0.0, 0.0]);
    assert!(material.double_sided);
    assert_eq!(material.color, [1.0, 0.0, 0.0]);

    let one_sided = material.single_sided();
    assert!(!one_sided.double_sided);
}

#[test]
fn flipped_vertices_shade_the_underside() {
    // Hosts without double-sided rasterization render the underside as a
    // second pass with reversed normals.
    let domain = Domain::new(Bounds::new(0.0, 1.0), Bounds::new(0.0, 1.0));
    let builder = SurfaceMeshBuilder::new(4, domain, Bounds::new(0.0, 1.0));
    let object = SurfaceObject::build(|x, z| x * x + z, &builder, FlatMaterial::new([0.5; 3]))
        .unwrap();

    object.visit_triangles(|mut tri| {
        for vertex in &mut tri {
            let original = vertex.normal;
            vertex.flip();
            assert_eq!(vertex.normal, -original);
            assert!((vertex.normal.norm() - original.norm()).abs() < 1e-12);
        }
    });
}

#[test]
fn objects_are_walkable_as_triangles() {
    let domain = Domain::new(Bounds::new(0.0, 1.0), Bounds::new(0.0, 1.0));
    let builder = SurfaceMeshBuilder::new(3, domain, Bounds::new(0.0, 1.0));
    let object =
        SurfaceObject::build(|x, z| x * z, &builder, FlatMaterial::new([0.5; 3])).unwrap();

    let mut count = 0;
    object.visit_triangles(|_tri| count += 1);
    assert_eq!(count, 8);
}
