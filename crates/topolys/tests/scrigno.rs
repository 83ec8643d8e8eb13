//! A small two-storey building: gallery with elevator, plenum with a sloped
//! floor and stairwell, roof shades and balconies. Surfaces are built floors
//! first, then ceilings, walls and shades, each group bottom to top.

mod common;

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use common::p;
use serde_json::json;
use topolys::{BoundingBox, EdgeId, FaceId, Model, Point3D, TopoError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    Floor,
    Ceiling,
    Wall,
    Shade,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Floor => "floor",
            Kind::Ceiling => "ceiling",
            Kind::Wall => "wall",
            Kind::Shade => "shade",
        }
    }
}

struct Surface {
    name: &'static str,
    kind: Kind,
    points: Vec<Point3D>,
    /// Wound the same way as `points`
    holes: Vec<Vec<Point3D>>,
}

impl Surface {
    fn new(name: &'static str, kind: Kind, points: Vec<Point3D>) -> Self {
        Self {
            name,
            kind,
            points,
            holes: Vec::new(),
        }
    }

    fn with_hole(mut self, hole: Vec<Point3D>) -> Self {
        self.holes.push(hole);
        self
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.points.iter().copied())
    }
}

/// Height of the sloped plenum floor, which falls from z = 43 at x = 24 to
/// z = 42 at x = 30.7. The survey rounds points on it to 42.4 and 42.26.
fn plenum_slope(x: f64) -> f64 {
    43.0 - (x - 24.0) / 6.7
}

fn surfaces() -> Vec<Surface> {
    use Kind::*;

    let door = |x0: f64, x1: f64, y: f64| {
        vec![p(x0, y, 46.0), p(x0, y, 44.0), p(x1, y, 44.0), p(x1, y, 46.0)]
    };
    let gallery_top = vec![
        p(17.4, 40.2, 49.5),
        p(17.4, 29.8, 49.5),
        p(54.0, 29.8, 49.5),
        p(54.0, 40.2, 49.5),
    ];
    let elevator_top = plenum_slope(28.0);
    let stair_top = plenum_slope(29.0);

    vec![
        // Roof shades and balconies
        Surface::new(
            "r1_shade",
            Shade,
            vec![p(12.4, 45.0, 50.0), p(12.4, 25.0, 50.0), p(22.7, 25.0, 50.0), p(22.7, 45.0, 50.0)],
        ),
        Surface::new(
            "r2_shade",
            Shade,
            vec![p(22.7, 45.0, 50.0), p(22.7, 37.5, 50.0), p(48.7, 37.5, 50.0), p(48.7, 45.0, 50.0)],
        ),
        Surface::new(
            "r3_shade",
            Shade,
            vec![p(22.7, 32.5, 50.0), p(22.7, 25.0, 50.0), p(48.7, 25.0, 50.0), p(48.7, 32.5, 50.0)],
        ),
        Surface::new(
            "r4_shade",
            Shade,
            vec![p(48.7, 45.0, 50.0), p(48.7, 25.0, 50.0), p(59.0, 25.0, 50.0), p(59.0, 45.0, 50.0)],
        ),
        Surface::new(
            "N_balcony",
            Shade,
            vec![p(47.4, 40.2, 44.0), p(47.4, 41.7, 44.0), p(45.7, 41.7, 44.0), p(45.7, 40.2, 44.0)],
        ),
        // The survey puts the outer edge at y = 28.3, 0.1 beside the elevator's
        // south wall; see test_balcony_corner_beside_elevator_edge.
        Surface::new(
            "S_balcony",
            Shade,
            vec![p(28.1, 29.8, 44.0), p(28.1, 28.0, 44.0), p(47.4, 28.0, 44.0), p(47.4, 29.8, 44.0)],
        ),
        // Gallery and elevator
        Surface::new(
            "g_W_wall",
            Wall,
            vec![p(17.4, 40.2, 49.5), p(17.4, 40.2, 44.0), p(17.4, 29.8, 44.0), p(17.4, 29.8, 49.5)],
        ),
        Surface::new(
            "g_N_wall",
            Wall,
            vec![p(54.0, 40.2, 49.5), p(54.0, 40.2, 44.0), p(17.4, 40.2, 44.0), p(17.4, 40.2, 49.5)],
        )
        .with_hole(door(47.4, 46.4, 40.2)),
        Surface::new(
            "g_E_wall",
            Wall,
            vec![p(54.0, 29.8, 49.5), p(54.0, 29.8, 44.0), p(54.0, 40.2, 44.0), p(54.0, 40.2, 49.5)],
        ),
        Surface::new(
            "g_S_wall",
            Wall,
            vec![
                p(17.4, 29.8, 49.5),
                p(17.4, 29.8, 44.0),
                p(24.0, 29.8, 44.0),
                p(24.0, 29.8, 46.7),
                p(24.0, 29.8, 46.7),
                p(28.0, 29.8, 46.7),
                p(28.0, 29.8, 44.0),
                p(54.0, 29.8, 44.0),
                p(54.0, 29.8, 49.5),
            ],
        )
        .with_hole(door(46.4, 47.4, 29.8)),
        Surface::new("g_top", Ceiling, gallery_top.clone()).with_hole(gallery_top),
        Surface::new(
            "e_top",
            Ceiling,
            vec![p(24.0, 29.8, 46.7), p(24.0, 28.3, 46.7), p(28.0, 28.3, 46.7), p(28.0, 29.8, 46.7)],
        ),
        Surface::new(
            "e_floor",
            Floor,
            vec![p(24.0, 28.3, 40.8), p(24.0, 29.8, 40.8), p(28.0, 29.8, 40.8), p(28.0, 28.3, 40.8)],
        ),
        Surface::new(
            "e_W_wall",
            Wall,
            vec![p(24.0, 29.8, 46.7), p(24.0, 29.8, 40.8), p(24.0, 28.3, 40.8), p(24.0, 28.3, 46.7)],
        ),
        Surface::new(
            "e_S_wall",
            Wall,
            vec![p(24.0, 28.3, 46.7), p(24.0, 28.3, 40.8), p(28.0, 28.3, 40.8), p(28.0, 28.3, 46.7)],
        ),
        Surface::new(
            "e_E_wall",
            Wall,
            vec![p(28.0, 28.3, 46.7), p(28.0, 28.3, 40.8), p(28.0, 29.8, 40.8), p(28.0, 29.8, 46.7)],
        ),
        Surface::new(
            "e_N_wall",
            Wall,
            vec![p(28.0, 29.8, elevator_top), p(28.0, 29.8, 40.8), p(24.0, 29.8, 40.8), p(24.0, 29.8, 43.0)],
        ),
        Surface::new(
            "e_p_wall",
            Wall,
            vec![p(28.0, 29.8, 44.0), p(28.0, 29.8, elevator_top), p(24.0, 29.8, 43.0), p(24.0, 29.8, 44.0)],
        ),
        Surface::new(
            "g_floor",
            Floor,
            vec![p(17.4, 29.8, 44.0), p(17.4, 40.2, 44.0), p(54.0, 40.2, 44.0), p(54.0, 29.8, 44.0)],
        ),
        // Plenum and stairwell
        Surface::new(
            "p_top",
            Ceiling,
            vec![p(17.4, 40.2, 44.0), p(17.4, 29.8, 44.0), p(54.0, 29.8, 44.0), p(54.0, 40.2, 44.0)],
        ),
        Surface::new(
            "p_e_wall",
            Wall,
            vec![p(24.0, 29.8, 44.0), p(24.0, 29.8, 43.0), p(28.0, 29.8, elevator_top), p(28.0, 29.8, 44.0)],
        ),
        Surface::new(
            "p_S1_wall",
            Wall,
            vec![p(17.4, 29.8, 44.0), p(24.0, 29.8, 43.0), p(24.0, 29.8, 44.0)],
        ),
        Surface::new(
            "p_S2_wall",
            Wall,
            vec![
                p(28.0, 29.8, 44.0),
                p(28.0, 29.8, elevator_top),
                p(30.7, 29.8, 42.0),
                p(40.7, 29.8, 42.0),
                p(54.0, 29.8, 44.0),
            ],
        ),
        // Follows the break in the plenum floor at x = 24, which a straight
        // run from x = 30.7 to x = 17.4 passes 0.0075 above
        Surface::new(
            "p_N_wall",
            Wall,
            vec![
                p(54.0, 40.2, 44.0),
                p(40.7, 40.2, 42.0),
                p(30.7, 40.2, 42.0),
                p(24.0, 40.2, 43.0),
                p(17.4, 40.2, 44.0),
            ],
        ),
        Surface::new(
            "p_floor",
            Floor,
            vec![p(30.7, 29.8, 42.0), p(30.7, 40.2, 42.0), p(40.7, 40.2, 42.0), p(40.7, 29.8, 42.0)],
        ),
        Surface::new(
            "p_E_floor",
            Floor,
            vec![p(40.7, 29.8, 42.0), p(40.7, 40.2, 42.0), p(54.0, 40.2, 44.0), p(54.0, 29.8, 44.0)],
        ),
        Surface::new(
            "p_W1_floor",
            Floor,
            vec![p(17.4, 29.8, 44.0), p(17.4, 40.2, 44.0), p(24.0, 40.2, 43.0), p(24.0, 29.8, 43.0)],
        ),
        Surface::new(
            "p_W2_floor",
            Floor,
            vec![
                p(24.0, 29.8, 43.0),
                p(24.0, 33.1, 43.0),
                p(29.0, 33.1, stair_top),
                p(29.0, 36.9, stair_top),
                p(24.0, 36.9, 43.0),
                p(24.0, 40.2, 43.0),
                p(30.7, 40.2, 42.0),
                p(30.7, 29.8, 42.0),
            ],
        ),
        Surface::new(
            "s_W_wall",
            Wall,
            vec![p(24.0, 36.9, 43.0), p(24.0, 36.9, 40.8), p(24.0, 33.1, 40.8), p(24.0, 33.1, 43.0)],
        ),
        Surface::new(
            "s_N_wall",
            Wall,
            vec![p(29.0, 36.9, stair_top), p(29.0, 36.9, 40.8), p(24.0, 36.9, 40.8), p(24.0, 36.9, 43.0)],
        ),
        Surface::new(
            "s_E_wall",
            Wall,
            vec![p(29.0, 33.1, stair_top), p(29.0, 33.1, 40.8), p(29.0, 36.9, 40.8), p(29.0, 36.9, stair_top)],
        ),
        Surface::new(
            "s_S_wall",
            Wall,
            vec![p(24.0, 33.1, 43.0), p(24.0, 33.1, 40.8), p(29.0, 33.1, 40.8), p(29.0, 33.1, stair_top)],
        ),
        Surface::new(
            "s_floor",
            Floor,
            vec![p(24.0, 33.1, 40.8), p(24.0, 36.9, 40.8), p(29.0, 36.9, 40.8), p(29.0, 33.1, 40.8)],
        ),
    ]
}

/// Kind, then lowest z, y and x of the bounding box
fn build_order(a: &Surface, b: &Surface) -> Ordering {
    let (ba, bb) = (a.bounds(), b.bounds());
    a.kind
        .cmp(&b.kind)
        .then(ba.min.z.total_cmp(&bb.min.z))
        .then(ba.min.y.total_cmp(&bb.min.y))
        .then(ba.min.x.total_cmp(&bb.min.x))
}

fn add_surface(model: &mut Model, surface: &Surface) -> Result<FaceId, TopoError> {
    let vertices = model.get_vertices(&surface.points)?;
    let outer = model.get_wire(&vertices)?;

    let mut holes = Vec::with_capacity(surface.holes.len());
    for hole in &surface.holes {
        let mut vertices = model.get_vertices(hole)?;
        vertices.reverse();
        holes.push(model.get_wire(&vertices)?);
    }

    let face = model.get_face(outer, &holes)?.expect("wires belong to the model");
    let attributes = model.attributes_mut(face).expect("face");
    attributes.insert("name".into(), json!(surface.name));
    attributes.insert("type".into(), json!(surface.kind.name()));
    Ok(face)
}

fn build() -> (Model, BTreeMap<&'static str, FaceId>) {
    let mut surfaces = surfaces();
    surfaces.sort_by(build_order);

    let mut model = Model::new();
    let mut faces = BTreeMap::new();
    for surface in &surfaces {
        let face = add_surface(&mut model, surface)
            .unwrap_or_else(|err| panic!("{} failed: {err}", surface.name));
        faces.insert(surface.name, face);
    }
    (model, faces)
}

fn outer_edges(model: &Model, face: FaceId) -> BTreeSet<EdgeId> {
    let outer = model.face(face).unwrap().outer();
    model.wire_edges(outer).into_iter().collect()
}

#[test]
fn test_build_order() {
    let mut surfaces = surfaces();
    surfaces.sort_by(build_order);
    let names: Vec<_> = surfaces.iter().map(|s| s.name).collect();

    assert_eq!(
        &names[..7],
        &["e_floor", "s_floor", "p_W2_floor", "p_floor", "p_E_floor", "p_W1_floor", "g_floor"]
    );
    assert_eq!(&names[7..10], &["p_top", "e_top", "g_top"]);
    // Ties keep their listed order
    assert_eq!(&names[10..12], &["e_W_wall", "e_S_wall"]);
    assert_eq!(&names[27..], &["S_balcony", "N_balcony", "r1_shade", "r3_shade", "r4_shade", "r2_shade"]);
}

#[test]
fn test_scrigno_model() {
    let (model, faces) = build();
    assert_eq!(model.faces().len(), 33);
    for (name, face) in &faces {
        assert_eq!(model.attributes(*face).unwrap()["name"], *name);
    }

    let v1 = model.find_existing_vertex(p(17.4, 29.8, 44.0)).unwrap();
    let v2 = model.find_existing_vertex(p(24.0, 29.8, 44.0)).unwrap();
    let v3 = model.find_existing_vertex(p(28.0, 29.8, 44.0)).unwrap();
    let v4 = model.find_existing_vertex(p(28.1, 29.8, 44.0)).unwrap();
    assert_ne!(v3, v4);

    // The south edge of the gallery floor is cut at every vertex along it
    assert!(model.find_existing_edge(v1, v2).is_some());
    assert!(model.find_existing_edge(v2, v3).is_some());
    assert!(model.find_existing_edge(v3, v4).is_some());
    assert!(model.find_existing_edge(v1, v3).is_none());
    assert!(model.find_existing_edge(v1, v4).is_none());

    // Plenum south wall, both sides of the wall between elevator and plenum,
    // and the elevator's east wall meet in one edge
    let p_s2 = faces["p_S2_wall"];
    let e_p = faces["e_p_wall"];
    let p_e = faces["p_e_wall"];
    let e_e = faces["e_E_wall"];

    let meeting: BTreeSet<EdgeId> = [e_p, p_e, e_e]
        .into_iter()
        .fold(outer_edges(&model, p_s2), |acc, f| {
            acc.intersection(&outer_edges(&model, f)).copied().collect()
        });
    assert_eq!(meeting.len(), 1);
    let meeting = *meeting.first().unwrap();

    let three: BTreeSet<EdgeId> = [e_p, p_e].into_iter().fold(outer_edges(&model, p_s2), |acc, f| {
        acc.intersection(&outer_edges(&model, f)).copied().collect()
    });
    assert_eq!(three, BTreeSet::from([meeting]));

    for other in [e_p, p_e, e_e] {
        assert_eq!(model.shared_outer_edges(p_s2, other), vec![meeting]);
    }

    // The gallery floor and the plenum ceiling are the same surface
    let g_floor = faces["g_floor"];
    let p_top = faces["p_top"];
    let g_floor_edges = model.wire_edges(model.face(g_floor).unwrap().outer());
    let p_top_edges = model.wire_edges(model.face(p_top).unwrap().outer());
    assert!(g_floor_edges.len() > 4);
    assert_eq!(g_floor_edges.len(), 12);
    assert_eq!(g_floor_edges.len(), p_top_edges.len());
    assert_eq!(model.shared_outer_edges(p_top, g_floor).len(), p_top_edges.len());
    for edge in &g_floor_edges {
        assert!(p_top_edges.contains(edge));
    }

    // The elevator's north wall ends on the sloped plenum floor
    assert_eq!(model.shared_outer_edges(faces["e_N_wall"], faces["p_W2_floor"]).len(), 1);
    assert_eq!(model.wire(model.face(e_e).unwrap().outer()).unwrap().len(), 6);
}

#[test]
fn test_balcony_corner_beside_elevator_edge() {
    let (mut model, faces) = build();
    let vertices = model.vertices().len();
    let edges = model.edges().len();
    let balcony = model.face(faces["S_balcony"]).unwrap().outer();
    let balcony_len = model.wire(balcony).unwrap().len();

    // 0.1 from the elevator's south-east corner edge, which is 5.9 long:
    // close enough to count as on it, too far to be moved onto it
    let result = model.get_vertex(p(28.1, 28.3, 44.0));
    assert!(matches!(result, Err(TopoError::SplitProjection { .. })));

    assert_eq!(model.vertices().len(), vertices);
    assert_eq!(model.edges().len(), edges);
    assert_eq!(model.wire(balcony).unwrap().len(), balcony_len);
}
