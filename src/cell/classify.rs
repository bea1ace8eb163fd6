use crate::cell::CellCase;
use crate::CatError;
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// The points of a tetrahedron grouped by owning object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedCell {
    /// The point ids, grouped by object.
    pub points: [u32; 4],
    /// The object id of each entry of `points`.
    pub objects: [u32; 4],
    /// The partition shape of the groups.
    pub case: CellCase,
}

/// Groups the four points of a tetrahedron by their owning object.
///
/// Groups are sorted by decreasing size, ties being broken by decreasing object
/// id. The points of a group keep their original relative order, and the groups
/// are laid out contiguously in the output arrays.
///
/// Fails with [`CatError::InvalidCellShape`] unless both slices have exactly
/// four elements.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use chordal3d::cell::{classify, CellCase};
///
/// let cell = classify(&[1, 2, 3, 4], &[1, 1, 2, 2]).unwrap();
/// assert_eq!(cell.points, [3, 4, 1, 2]);
/// assert_eq!(cell.objects, [2, 2, 1, 1]);
/// assert_eq!(cell.case, CellCase::TwoTwo);
/// # }
/// ```
pub fn classify(point_ids: &[u32], object_ids: &[u32]) -> Result<ClassifiedCell, CatError> {
    match (<[u32; 4]>::try_from(point_ids), <[u32; 4]>::try_from(object_ids)) {
        (Ok(points), Ok(objects)) => Ok(classify_tetrahedron(points, objects)),
        _ => Err(CatError::InvalidCellShape {
            points: point_ids.len(),
            objects: object_ids.len(),
        }),
    }
}

/// Groups the four points of a tetrahedron by their owning object.
///
/// This is [`classify`] for inputs that are known to have four elements.
pub fn classify_tetrahedron(point_ids: [u32; 4], object_ids: [u32; 4]) -> ClassifiedCell {
    // Groups in order of first appearance.
    let mut groups: SmallVec<[(u32, ArrayVec<u32, 4>); 4]> = SmallVec::new();

    for (pt, obj) in point_ids.into_iter().zip(object_ids) {
        match groups.iter_mut().find(|(id, _)| *id == obj) {
            Some((_, members)) => members.push(pt),
            None => {
                let mut members = ArrayVec::new();
                members.push(pt);
                groups.push((obj, members));
            }
        }
    }

    // Object ids are distinct among groups, so the order is total.
    groups.sort_by(|(obj1, members1), (obj2, members2)| {
        members2
            .len()
            .cmp(&members1.len())
            .then_with(|| obj2.cmp(obj1))
    });

    // Four points admit exactly five partitions, told apart by the group
    // count and, for two groups, the size of the largest one.
    let case = match (groups.len(), groups[0].1.len()) {
        (1, _) => CellCase::Single,
        (2, 3) => CellCase::ThreeOne,
        (2, _) => CellCase::TwoTwo,
        (3, _) => CellCase::TwoOneOne,
        _ => CellCase::FourSingles,
    };

    let mut points = [0; 4];
    let mut objects = [0; 4];
    let sorted = groups
        .iter()
        .flat_map(|(obj, members)| members.iter().map(move |pt| (*pt, *obj)));

    for (i, (pt, obj)) in sorted.enumerate() {
        points[i] = pt;
        objects[i] = obj;
    }

    ClassifiedCell {
        points,
        objects,
        case,
    }
}
