use chordal3d::cat::compute_cat_faces;
use chordal3d::cell::{classify, filter_relevant_cells, ObjectRanges};
use chordal3d::math::{Point, Real, Vector};
use chordal3d::mesh::TetMesh;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N: u32 = 4;

fn grid_id(x: u32, y: u32, z: u32) -> u32 {
    (x * N + y) * N + z
}

/// A regular grid of `N^3` points with each cube split into six tetrahedra
/// along its main diagonal.
fn kuhn_grid() -> (Vec<Point<Real>>, Vec<[u32; 4]>) {
    let mut points = Vec::new();
    for x in 0..N {
        for y in 0..N {
            for z in 0..N {
                points.push(Point::new(x as Real, y as Real, z as Real));
            }
        }
    }

    let axes = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];
    let paths = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let mut cells = Vec::new();

    for x in 0..N - 1 {
        for y in 0..N - 1 {
            for z in 0..N - 1 {
                for path in paths {
                    let mut corner = [x, y, z];
                    let mut cell = [grid_id(x, y, z); 4];
                    for (k, axis) in path.iter().enumerate() {
                        for d in 0..3 {
                            corner[d] += axes[*axis][d];
                        }
                        cell[k + 1] = grid_id(corner[0], corner[1], corner[2]);
                    }
                    cells.push(cell);
                }
            }
        }
    }

    (points, cells)
}

/// Reorders the points so that the points of each object are contiguous.
fn group_by_object(
    points: &[Point<Real>],
    cells: &[[u32; 4]],
    labels: &[u32],
    num_objects: usize,
) -> (TetMesh, ObjectRanges) {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|i| labels[*i]);

    let mut new_id = vec![0; points.len()];
    for (new, old) in order.iter().enumerate() {
        new_id[*old] = new as u32;
    }

    let sorted_points = order.iter().map(|i| points[*i]).collect();
    let cells = cells
        .iter()
        .map(|cell| cell.map(|i| new_id[i as usize]))
        .collect();
    let counts: Vec<usize> = (0..num_objects as u32)
        .map(|obj| labels.iter().filter(|l| **l == obj).count())
        .collect();

    (
        TetMesh::new(sorted_points, cells).unwrap(),
        ObjectRanges::new(&counts),
    )
}

#[test]
fn slabs_are_separated_by_a_flat_wall() {
    let (points, cells) = kuhn_grid();
    // The grid ids are x-major: the first two x-layers form object 0.
    let half = (N * N * 2) as usize;
    let mesh = TetMesh::new(points, cells).unwrap();
    let ranges = ObjectRanges::new(&[half, half]);
    let cat = compute_cat_faces(&mesh, &ranges).unwrap();

    let filtered = filter_relevant_cells(mesh.cells(), &ranges).unwrap();
    assert_eq!(filtered.relevant.len() + filtered.num_skipped(), mesh.num_cells());
    assert_eq!(cat.faces(0).len(), filtered.relevant.len());
    assert_eq!(cat.faces(1).len(), filtered.relevant.len());

    for (obj, dir) in [(0, -1.0), (1, 1.0)] {
        for (face, normal) in cat.faces(obj).iter().zip(cat.normals(obj)) {
            assert!(face
                .points()
                .iter()
                .all(|p| near(p.x, 1.5)));
            approx::assert_relative_eq!(
                normal.normal.into_inner(),
                Vector::x() * dir,
                epsilon = 1.0e-5
            );
        }
    }
}

fn near(a: Real, b: Real) -> bool {
    approx::relative_eq!(a, b, epsilon = 1.0e-5)
}

#[test]
fn random_objects_get_consistent_cat_cells() {
    let (points, cells) = kuhn_grid();
    let mut rng = StdRng::seed_from_u64(0);
    let num_objects = 5;
    let labels: Vec<u32> = (0..points.len())
        .map(|_| rng.gen_range(0..num_objects as u32))
        .collect();
    let (mesh, ranges) = group_by_object(&points, &cells, &labels, num_objects);

    let cat = compute_cat_faces(&mesh, &ranges).unwrap();
    assert_eq!(cat, compute_cat_faces(&mesh, &ranges).unwrap());

    // Count the faces each object should receive from each cell.
    let mut expected = vec![0; num_objects];
    for cell in mesh.cells() {
        let objects = ranges.objects_of(cell).unwrap();
        let classified = classify(cell, &objects).unwrap();
        if !classified.case.is_relevant() {
            continue;
        }

        let sizes = classified.case.group_sizes();
        let offsets = classified.case.group_offsets();
        for (size, offset) in sizes.iter().zip(offsets) {
            let faces = match (classified.case.object_count(), *size) {
                (4, _) => 3,
                (3, 2) => 2,
                _ => 1,
            };
            expected[classified.objects[*offset] as usize] += faces;
        }
    }

    for obj in 0..num_objects as u32 {
        assert_eq!(cat.faces(obj).len(), expected[obj as usize]);
        assert_eq!(cat.normals(obj).len(), cat.faces(obj).len());

        for (face, normal) in cat.faces(obj).iter().zip(cat.normals(obj)) {
            assert_eq!(normal.anchor, face.points()[0]);
            approx::assert_relative_eq!(normal.normal.norm(), 1.0, epsilon = 1.0e-5);
            // The normal points toward the object's side of the face.
            assert!(normal.normal.dot(&(normal.reference - normal.anchor)) >= 0.0);
            let range = ranges.range(obj).unwrap();
            assert!(range
                .map(|i| mesh.points()[i as usize])
                .any(|p| p == normal.reference));
        }

        let cell_mesh = cat.cell_mesh(obj).unwrap();
        assert_eq!(cell_mesh.num_faces(), cat.faces(obj).len());
        assert!(cell_mesh.vertices.len() <= cat.faces(obj).len() * 4);
    }
}
