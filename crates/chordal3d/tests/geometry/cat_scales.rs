use chordal3d::cat::compute_cat_faces;
use chordal3d::cell::ObjectRanges;
use chordal3d::math::{Point, Real};
use chordal3d::mesh::TetMesh;

fn corner_tetrahedron(scale: Real) -> Vec<Point<Real>> {
    vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(scale, 0.0, 0.0),
        Point::new(0.0, scale, 0.0),
        Point::new(0.0, 0.0, scale),
    ]
}

#[test]
fn tiny_and_huge_cells_are_split() {
    for scale in [1.0e-4, 1.0, 1.0e4] {
        // Two objects of two points each.
        let mesh = TetMesh::new(corner_tetrahedron(scale), vec![[0, 1, 2, 3]]).unwrap();
        let cat = compute_cat_faces(&mesh, &ObjectRanges::new(&[2, 2])).unwrap();
        assert_eq!(cat.total_faces(), 2);

        // Four objects of one point each.
        let cat = compute_cat_faces(&mesh, &ObjectRanges::new(&[1, 1, 1, 1])).unwrap();
        assert_eq!(cat.total_faces(), 12);

        for obj in 0..4 {
            for normal in cat.normals(obj) {
                approx::assert_relative_eq!(normal.normal.norm(), 1.0, epsilon = 1.0e-5);
            }
        }
    }
}
