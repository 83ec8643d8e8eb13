//! Wire: a closed, planar loop of directed edges

use serde::{Deserialize, Serialize};

use super::{DirectedEdgeId, EntityCore, FaceId, impl_topology};
use crate::constants::EPSILON;
use crate::error::{TopoError, TopoResult};
use crate::geometry::{Plane3D, Point3D, Vector3D};

/// Ordered loop of directed edges. Parents are the faces bounded by it.
///
/// Plane, normal and perimeter are derived from the directed edges and
/// recomputed by the model after every splice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wire {
    #[serde(flatten)]
    pub(crate) core: EntityCore<FaceId>,
    pub(crate) directed_edges: Vec<DirectedEdgeId>,
    #[serde(skip)]
    pub(crate) plane: Plane3D,
    #[serde(skip)]
    pub(crate) perimeter: f64,
}

impl_topology!(Wire, FaceId);

impl Wire {
    pub(crate) fn new(directed_edges: Vec<DirectedEdgeId>) -> Self {
        Self {
            core: EntityCore::new(),
            directed_edges,
            plane: Plane3D::default(),
            perimeter: 0.0,
        }
    }

    pub fn directed_edges(&self) -> &[DirectedEdgeId] {
        &self.directed_edges
    }

    pub fn len(&self) -> usize {
        self.directed_edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directed_edges.is_empty()
    }

    pub fn plane(&self) -> Plane3D {
        self.plane
    }

    /// Unit normal, right-handed with respect to the traversal direction
    pub fn outward_normal(&self) -> Vector3D {
        self.plane.normal
    }

    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Insert `new` directly after `existing`, or before it when `before` is set
    pub(crate) fn splice(&mut self, existing: DirectedEdgeId, new: DirectedEdgeId, before: bool) -> bool {
        let Some(pos) = self.directed_edges.iter().position(|de| *de == existing) else {
            return false;
        };
        let at = if before { pos } else { pos + 1 };
        self.directed_edges.insert(at, new);
        true
    }

    /// Refresh plane and perimeter from the directed edges' origins, vectors and lengths
    pub(crate) fn recalculate(
        &mut self,
        points: &[Point3D],
        vectors: &[Vector3D],
        lengths: &[f64],
    ) -> TopoResult<()> {
        self.plane = compute_plane(points, vectors)?;
        self.perimeter = lengths.iter().sum();
        Ok(())
    }
}

/// Plane of a loop given each directed edge's origin point and vector.
///
/// The normal is the largest-magnitude cross product of the first vector
/// with each of the others; the first maximum wins a tie. Its sign follows
/// the loop's signed area, so the normal is right-handed with respect to
/// the traversal. Every point must then lie on the plane within [`EPSILON`].
pub fn compute_plane(points: &[Point3D], vectors: &[Vector3D]) -> TopoResult<Plane3D> {
    let (Some(first_point), Some(first_vector)) = (points.first(), vectors.first()) else {
        return Err(TopoError::EmptyWire);
    };

    let mut normal = Vector3D::ZERO;
    let mut largest = 0.0;
    for vector in vectors.iter().skip(1) {
        let cross = first_vector.cross(*vector);
        if cross.length_squared() > largest {
            largest = cross.length_squared();
            normal = cross;
        }
    }

    // Newell area vector, relative to the first point
    let area = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| (*a - *first_point).cross(*b - *first_point))
        .fold(Vector3D::ZERO, |acc, v| acc + v);
    if normal.dot(area) < 0.0 {
        normal = -normal;
    }

    if normal.length_squared() == 0.0 {
        return Err(TopoError::DegenerateNormal);
    }
    let plane = Plane3D::from_point_normal(*first_point, normal).ok_or(TopoError::DegenerateNormal)?;

    for (index, point) in points.iter().enumerate() {
        let distance = plane.signed_distance(*point).abs();
        if distance > EPSILON {
            return Err(TopoError::NotPlanar { index, distance });
        }
    }

    Ok(plane)
}

/// Rotation offset that maps `a` onto `b`: `a[i] == b[(offset + i) % n]`.
///
/// `None` when lengths differ, either is empty, or `b` is not a rotation of `a`.
/// Reversal is not a match.
pub fn find_offset<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
    let n = a.len();
    if n == 0 || n != b.len() {
        return None;
    }
    (0..n).find(|&offset| (0..n).all(|i| a[i] == b[(offset + i) % n]))
}

/// True when each segment ends where the next begins (no wraparound)
pub fn is_sequential<T: PartialEq>(segments: &[(T, T)]) -> bool {
    segments.windows(2).all(|pair| pair[0].1 == pair[1].0)
}

/// True for at least three segments where the last ends at the first's start
pub fn is_closed<T: PartialEq>(segments: &[(T, T)]) -> bool {
    match (segments.first(), segments.last()) {
        (Some(first), Some(last)) if segments.len() >= 3 => last.1 == first.0,
        _ => false,
    }
}
