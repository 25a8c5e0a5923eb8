use super::*;
use crate::core::PlanarGeoOps;

fn store_with(lines: &[&[(f64, f64)]]) -> TransectStore {
    let geometry = TransectGeometry::from_coords(
        lines
            .iter()
            .map(|l| l.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
            .collect(),
    )
    .expect("gültige Geometrie");
    let mut store = TransectStore::new(CorridorBuilder::new(Arc::new(PlanarGeoOps), 25.0), 0.0);
    store.rebuild(Arc::new(geometry));
    store
}

#[test]
fn test_rebuild_erzeugt_segmente_und_korridore() {
    let store = store_with(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]]);

    assert_eq!(store.segment_shapes().len(), 1);
    assert_eq!(store.segment_shapes()[0].len(), 2);
    let shape = store
        .segment_shape(IdxTuple::new(0, 1))
        .expect("Segment erwartet");
    assert_eq!(shape.start, DVec2::new(0.0, 10.0));
    assert_eq!(shape.end, DVec2::new(0.0, 20.0));
}

#[test]
fn test_handles_loesen_in_o1_auf() {
    let store = store_with(&[&[(0.0, 0.0), (0.0, 10.0)], &[(0.0, 10.0), (0.0, 20.0)]]);

    let point = store.point_handle(IdxTuple::new(1, 1)).unwrap();
    assert_eq!(
        store.resolve(point),
        Some((ShapeKind::Point, IdxTuple::new(1, 1)))
    );

    let segment = store.segment_handle(IdxTuple::new(1, 0)).unwrap();
    assert_eq!(
        store.resolve(segment),
        Some((ShapeKind::Segment, IdxTuple::new(1, 0)))
    );

    let corridor = store.corridor_handle(IdxTuple::new(0, 0)).unwrap();
    assert_eq!(
        store.resolve(corridor),
        Some((ShapeKind::Corridor, IdxTuple::new(0, 0)))
    );
}

#[test]
fn test_rebuild_invalidiert_alte_handles() {
    let mut store = store_with(&[&[(0.0, 0.0), (0.0, 10.0)]]);
    let old = store.point_handle(IdxTuple::new(0, 0)).unwrap();

    let geometry = store.geometry().clone();
    store.rebuild(geometry);

    assert_eq!(store.resolve(old), None);
    assert!(matches!(
        store.resolve_checked(old),
        Err(InvariantViolation::StaleHandle { .. })
    ));
    assert!(store.point_handle(IdxTuple::new(0, 0)).is_some());
}

#[test]
fn test_move_point_live_aktualisiert_nur_angrenzende_segmente() {
    let mut store = store_with(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0), (0.0, 30.0)]]);
    let handle_before = store.point_handle(IdxTuple::new(0, 1)).unwrap();
    let untouched = *store.segment_shape(IdxTuple::new(0, 2)).unwrap();

    let touched = store
        .move_point_live(IdxTuple::new(0, 1), DVec2::new(5.0, 10.0))
        .expect("Punkt existiert");

    assert_eq!(touched, vec![IdxTuple::new(0, 0), IdxTuple::new(0, 1)]);
    assert_eq!(
        store.segment_shape(IdxTuple::new(0, 0)).unwrap().end,
        DVec2::new(5.0, 10.0)
    );
    assert_eq!(
        store.segment_shape(IdxTuple::new(0, 1)).unwrap().start,
        DVec2::new(5.0, 10.0)
    );
    assert_eq!(*store.segment_shape(IdxTuple::new(0, 2)).unwrap(), untouched);
    // Live-Updates erzeugen keine neue Generation
    assert!(store.resolve(handle_before).is_some());
}

#[test]
fn test_move_point_live_laesst_snapshot_unveraendert() {
    let mut store = store_with(&[&[(0.0, 0.0), (0.0, 10.0)]]);
    let snapshot = store.geometry().clone();

    store
        .move_point_live(IdxTuple::new(0, 0), DVec2::new(1.0, 1.0))
        .unwrap();

    assert_eq!(snapshot.point(IdxTuple::new(0, 0)), Some(DVec2::ZERO));
    assert_eq!(
        store.geometry().point(IdxTuple::new(0, 0)),
        Some(DVec2::new(1.0, 1.0))
    );
}

#[test]
fn test_move_point_live_mit_ungueltigem_index() {
    let mut store = store_with(&[&[(0.0, 0.0), (0.0, 10.0)]]);
    assert!(store
        .move_point_live(IdxTuple::new(0, 5), DVec2::ZERO)
        .is_err());
}

#[test]
fn test_overlap_maps_sind_symmetrisch() {
    let store = store_with(&[
        &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)],
        &[(10.0, 10.0), (0.0, 10.0), (-10.0, 10.0)],
    ]);
    assert!(store.overlaps().is_symmetric());
    assert_eq!(
        store.overlaps().nonadjacent_partner(IdxTuple::new(0, 1)),
        Some(IdxTuple::new(1, 1))
    );
}

#[test]
fn test_neukonfiguration_laesst_alte_handles_veraltet() {
    let mut store = store_with(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]]);
    let old_point = store.point_handle(IdxTuple::new(0, 2)).unwrap();

    let shorter = TransectGeometry::from_coords(vec![vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 20.0),
    ]])
    .expect("gültige Geometrie");
    store.rebuild(Arc::new(shorter));
    let generation = store.generation();

    let wider = store.corridors().with_half_width(40.0);
    store.reconfigure(wider, 0.0);

    assert_eq!(store.generation(), generation + 1);
    assert_eq!(store.resolve(old_point), None);
    assert!(store.resolve_checked(old_point).is_err());
    let shape = store
        .segment_shape(IdxTuple::new(0, 0))
        .expect("Segment erwartet");
    assert!((shape.corridor.corners[0].distance(shape.start) - 40.0).abs() < 1e-9);
}

#[test]
fn test_kreuzungspartner_gilt_fuer_beide_nahttupel() {
    let store = store_with(&[
        &[(0.0, 0.0), (0.0, 10.0)],
        &[(0.0, 10.0), (0.0, 20.0)],
        &[(-5.0, 10.0), (0.0, 10.0), (5.0, 10.0)],
    ]);

    assert_eq!(
        store.crossing_partner(IdxTuple::new(0, 1)),
        Some(IdxTuple::new(2, 1))
    );
    assert_eq!(
        store.crossing_partner(IdxTuple::new(1, 0)),
        Some(IdxTuple::new(2, 1))
    );
    assert_eq!(store.crossing_partner(IdxTuple::new(1, 1)), None);
}
