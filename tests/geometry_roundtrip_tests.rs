//! Roundtrip-Tests an der Serialisierungsgrenze (GeoJSON-Geometrie) und
//! Datei-I/O über den Controller.

use glam::DVec2;
use transect_editor::{AppController, AppIntent, AppState, TransectGeometry};

#[test]
fn test_linestring_wird_gelesen() {
    let json = r#"{"type":"LineString","coordinates":[[0.0,0.0],[0.0,10.0],[0.0,20.0]]}"#;
    let geometry = TransectGeometry::from_json(json).expect("gültiges JSON");

    assert_eq!(geometry.line_count(), 1);
    assert_eq!(geometry.segment_count(), 2);
}

#[test]
fn test_multilinestring_roundtrip() {
    let json = r#"{"type":"MultiLineString","coordinates":[[[0,0],[0,10]],[[0,10],[0,20]]]}"#;
    let geometry = TransectGeometry::from_json(json).expect("gültiges JSON");
    assert_eq!(geometry.line_count(), 2);
    assert!(geometry.is_seam(0));

    let written = geometry.to_json().expect("Serialisierung erwartet");
    assert!(written.contains("MultiLineString"));
    let reread = TransectGeometry::from_json(&written).expect("Roundtrip erwartet");
    assert_eq!(reread, geometry);
}

#[test]
fn test_linie_mit_einem_punkt_wird_abgelehnt() {
    let json = r#"{"type":"LineString","coordinates":[[0.0,0.0]]}"#;
    assert!(TransectGeometry::from_json(json).is_err());
}

#[test]
fn test_unbekannter_typ_wird_abgelehnt() {
    let json = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#;
    assert!(TransectGeometry::from_json(json).is_err());
}

#[test]
fn test_datei_roundtrip_ueber_controller() {
    let tmp = std::env::temp_dir().join("test_transect_roundtrip");
    std::fs::create_dir_all(&tmp).expect("Temp-Verzeichnis");
    let input = tmp.join("input.json");
    let output = tmp.join("output.json");
    std::fs::write(
        &input,
        r#"{"type":"MultiLineString","coordinates":[[[0,0],[0,10]],[[5,0],[5,10]]]}"#,
    )
    .expect("Schreiben erwartet");

    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::OpenGeometryRequested {
                path: input.to_string_lossy().to_string(),
            },
        )
        .expect("Öffnen erwartet");
    assert_eq!(state.geometry().line_count(), 2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::AppendLineRequested {
                points: vec![DVec2::new(9.0, 0.0), DVec2::new(9.0, 10.0)],
            },
        )
        .expect("Anhängen erwartet");
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveGeometryRequested {
                path: output.to_string_lossy().to_string(),
            },
        )
        .expect("Speichern erwartet");

    let written = std::fs::read_to_string(&output).expect("Datei erwartet");
    let reread = TransectGeometry::from_json(&written).expect("gültiges JSON");
    assert_eq!(&reread, state.geometry().as_ref());

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn test_fehlende_datei_ist_fehler() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let result = controller.handle_intent(
        &mut state,
        AppIntent::OpenGeometryRequested {
            path: "/nonexistent/transekt.json".to_string(),
        },
    );
    assert!(result.is_err());
    assert!(!state.has_geometry());
}
