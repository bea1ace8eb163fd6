use chordal3d::cell::{classify, filter_relevant_cells, CellCase, ObjectRanges};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn classification_groups_and_orders_points() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let points: [u32; 4] = [
            rng.gen_range(0..100),
            rng.gen_range(0..100),
            rng.gen_range(0..100),
            rng.gen_range(0..100),
        ];
        let objects: [u32; 4] = [
            rng.gen_range(0..4),
            rng.gen_range(0..4),
            rng.gen_range(0..4),
            rng.gen_range(0..4),
        ];
        let cell = classify(&points, &objects).unwrap();

        // Same multiset of (point, object) pairs.
        let mut expected: Vec<_> = points.iter().zip(objects.iter()).collect();
        let mut actual: Vec<_> = cell.points.iter().zip(cell.objects.iter()).collect();
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual);

        // Groups are contiguous, sorted by (size desc, object id desc).
        let offsets = cell.case.group_offsets();
        let sizes = cell.case.group_sizes();
        let keys: Vec<_> = offsets
            .iter()
            .zip(sizes)
            .map(|(offset, size)| {
                let group = &cell.objects[*offset..*offset + *size];
                assert!(group.iter().all(|obj| *obj == group[0]));
                (*size, group[0])
            })
            .collect();
        assert!(keys.windows(2).all(|w| w[0] > w[1]));

        // Points keep their relative order within a group.
        for (offset, size) in offsets.iter().zip(sizes) {
            let obj = cell.objects[*offset];
            let original: Vec<_> = points
                .iter()
                .zip(objects.iter())
                .filter(|(_, o)| **o == obj)
                .map(|(p, _)| *p)
                .collect();
            assert_eq!(&cell.points[*offset..*offset + *size], &original[..]);
        }
    }
}

#[test]
fn filter_resolves_objects_from_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let counts: Vec<usize> = (0..10).map(|_| rng.gen_range(1..20)).collect();
    let ranges = ObjectRanges::new(&counts);
    let num_points = counts.iter().sum::<usize>() as u32;

    let cells: Vec<[u32; 4]> = (0..500)
        .map(|_| {
            [
                rng.gen_range(0..num_points),
                rng.gen_range(0..num_points),
                rng.gen_range(0..num_points),
                rng.gen_range(0..num_points),
            ]
        })
        .collect();
    let filtered = filter_relevant_cells(&cells, &ranges).unwrap();

    assert_eq!(filtered.relevant.len() + filtered.num_skipped(), cells.len());
    assert!(filtered.skipped.iter().all(|c| c.case() == CellCase::Single));

    for cell in filtered.relevant.iter().chain(filtered.skipped.iter()) {
        assert!(cell.case() != CellCase::Single || filtered.skipped.contains(cell));

        for (pt, obj) in cell.points().iter().zip(cell.objects()) {
            let range = ranges.range(*obj).unwrap();
            assert!(range.contains(pt));
        }
    }
}
