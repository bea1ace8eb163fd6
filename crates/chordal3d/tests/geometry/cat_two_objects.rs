use chordal3d::cat::{compute_cat_faces, sweep_cells};
use chordal3d::cell::{filter_relevant_cells, ObjectRanges};
use chordal3d::math::Point;
use chordal3d::mesh::TetMesh;

fn two_object_mesh() -> (TetMesh, ObjectRanges) {
    let points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let mesh = TetMesh::from_flat_cells(points, &[4, 0, 1, 2, 3]).unwrap();
    (mesh, ObjectRanges::new(&[2, 2]))
}

#[test]
fn shared_tetrahedron_yields_one_common_face() {
    let (mesh, ranges) = two_object_mesh();
    let cat = compute_cat_faces(&mesh, &ranges).unwrap();

    assert_eq!(cat.faces(0).len(), 1);
    assert_eq!(cat.faces(1).len(), 1);
    assert_eq!(cat.normals(0).len(), 1);
    assert_eq!(cat.normals(1).len(), 1);

    let face0 = &cat.faces(0)[0];
    let face1 = &cat.faces(1)[0];
    assert_eq!(face0.len(), 4);
    assert!(face0.same_points_as(face1, 1.0e-6));

    // Each object sees the face normal pointing toward itself.
    let n0 = cat.normals(0)[0].normal;
    let n1 = cat.normals(1)[0].normal;
    approx::assert_relative_eq!(n0.into_inner(), -n1.into_inner(), epsilon = 1.0e-6);
    assert!(n0.dot(&(mesh.points()[0] - face0.center())) > 0.0);
    assert!(n1.dot(&(mesh.points()[2] - face1.center())) > 0.0);

    // Every point got the normal of the face bounding its object.
    for pt in 0..4 {
        assert_eq!(cat.point_normals(pt).len(), 1);
    }

    let cell_mesh = cat.cell_mesh(0).unwrap();
    assert_eq!(cell_mesh.vertices.len(), 4);
    assert_eq!(cell_mesh.num_faces(), 1);
}

#[test]
fn sweep_is_deterministic() {
    let (mesh, ranges) = two_object_mesh();
    let first = compute_cat_faces(&mesh, &ranges).unwrap();
    let second = compute_cat_faces(&mesh, &ranges).unwrap();
    assert_eq!(first, second);

    let filtered = filter_relevant_cells(mesh.cells(), &ranges).unwrap();
    let serial = sweep_cells(mesh.points(), &filtered.relevant, ranges.num_objects()).unwrap();
    assert_eq!(first, serial);
}
