//! Integrationstests für die Editing-Use-Cases über den Controller:
//! - Punkt entfernen (Innenpunkt, Naht-Merge)
//! - Punkt einfügen (inkl. `edit_inserted_point`)
//! - Split und Merge über die Modi
//! - Startpunkt verlegen, Linie anhängen, aktive Linie

use approx::assert_relative_eq;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use transect_editor::app::InteractionMode;
use transect_editor::{
    AppController, AppIntent, AppState, EditEvent, EditorOptions, IdxTuple, SelectMode,
    ShapeHandle, TransectGeometry, ValidationError,
};

type EventLog = Rc<RefCell<Vec<Vec<EditEvent>>>>;

fn geometry(lines: &[&[(f64, f64)]]) -> TransectGeometry {
    TransectGeometry::from_coords(
        lines
            .iter()
            .map(|l| l.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
            .collect(),
    )
    .expect("gültige Geometrie")
}

/// Erstellt Controller und State mit geladener Geometrie und Event-Protokoll.
fn setup_with(options: EditorOptions, lines: &[&[(f64, f64)]]) -> (AppController, AppState, EventLog) {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    state.set_listener(Box::new(move |events: &[EditEvent]| {
        sink.borrow_mut().push(events.to_vec());
    }));
    controller
        .handle_intent(
            &mut state,
            AppIntent::GeometryLoaded {
                geometry: geometry(lines),
            },
        )
        .expect("Laden darf nicht fehlschlagen");
    (controller, state, log)
}

fn setup(lines: &[&[(f64, f64)]]) -> (AppController, AppState, EventLog) {
    setup_with(EditorOptions::default(), lines)
}

fn point(state: &AppState, line: usize, index: usize) -> ShapeHandle {
    state
        .store
        .point_handle(IdxTuple::new(line, index))
        .expect("Punkt-Handle erwartet")
}

fn segment(state: &AppState, line: usize, index: usize) -> ShapeHandle {
    state
        .store
        .segment_handle(IdxTuple::new(line, index))
        .expect("Segment-Handle erwartet")
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent darf nicht fehlschlagen");
}

// ─── Punkt entfernen ─────────────────────────────────────────────────────────

#[test]
fn test_doppelklick_auf_innenpunkt_entfernt_ihn() {
    let (mut controller, mut state, log) = setup(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]]);

    let target = point(&state, 0, 1);
    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::new(0.0, 10.0),
            target: Some(target),
        },
    );

    let line = state.geometry().line(0).expect("Linie 0 erwartet");
    assert_eq!(line.segment_count(), 1);
    assert_eq!(line.points(), &[DVec2::new(0.0, 0.0), DVec2::new(0.0, 20.0)]);

    let log = log.borrow();
    assert_eq!(log.len(), 1, "Genau eine Benachrichtigung pro Commit");
    assert!(matches!(log[0].as_slice(), [EditEvent::Edit { index: 0, .. }]));
    assert!(state.can_undo());
}

#[test]
fn test_doppelklick_auf_naht_fuehrt_linien_zusammen() {
    let (mut controller, mut state, log) = setup(&[
        &[(0.0, 0.0), (0.0, 10.0)],
        &[(0.0, 10.0), (0.0, 20.0)],
    ]);

    let seam = point(&state, 0, 1);
    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::new(0.0, 10.0),
            target: Some(seam),
        },
    );

    assert_eq!(state.geometry().line_count(), 1);
    assert_eq!(
        state.geometry().line(0).expect("Linie 0 erwartet").points(),
        &[DVec2::new(0.0, 0.0), DVec2::new(0.0, 20.0)]
    );
    assert!(matches!(
        log.borrow()[0].as_slice(),
        [EditEvent::Merge {
            index: 0,
            removed_index: 1,
            ..
        }]
    ));
}

#[test]
fn test_letztes_segment_kann_nicht_entfernt_werden() {
    let (mut controller, mut state, log) = setup(&[&[(0.0, 0.0), (0.0, 10.0)]]);

    let end = point(&state, 0, 1);
    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::new(0.0, 10.0),
            target: Some(end),
        },
    );

    assert_eq!(state.last_error, Some(ValidationError::LastSegment));
    assert_eq!(state.geometry().segment_count(), 1);
    assert!(log.borrow().is_empty());
    assert!(!state.can_undo());
}

#[test]
fn test_veraltetes_handle_ist_fehler() {
    let (mut controller, mut state, _log) = setup(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]]);

    let stale = point(&state, 0, 1);
    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::ZERO,
            target: Some(stale),
        },
    );

    // Nach dem Commit gehört das Handle zu einer alten Generation.
    let result = controller.handle_intent(
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::ZERO,
            target: Some(stale),
        },
    );
    assert!(result.is_err());
    assert_eq!(state.geometry().segment_count(), 1);
}

// ─── Punkt einfügen ──────────────────────────────────────────────────────────

#[test]
fn test_doppelklick_auf_segment_fuegt_lotfusspunkt_ein() {
    let (mut controller, mut state, _log) = setup(&[&[(0.0, 0.0), (0.0, 10.0)]]);

    let seg = segment(&state, 0, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::new(3.0, 4.0),
            target: Some(seg),
        },
    );

    let inserted = state
        .geometry()
        .point(IdxTuple::new(0, 1))
        .expect("eingefügter Punkt erwartet");
    assert_relative_eq!(inserted.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(inserted.y, 4.0, epsilon = 1e-9);
    assert_eq!(state.geometry().segment_count(), 2);
    assert!(matches!(state.interaction.mode, InteractionMode::Idle));
}

#[test]
fn test_eingefuegter_punkt_wird_bearbeitet_wenn_option_aktiv() {
    let options = EditorOptions {
        edit_inserted_point: true,
        ..EditorOptions::default()
    };
    let (mut controller, mut state, _log) = setup_with(options, &[&[(0.0, 0.0), (0.0, 10.0)]]);

    let seg = segment(&state, 0, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::new(0.0, 5.0),
            target: Some(seg),
        },
    );

    match state.interaction.mode {
        InteractionMode::EditingPoint { point } => assert_eq!(point, IdxTuple::new(0, 1)),
        ref other => panic!("EditingPoint erwartet, war {other:?}"),
    }
}

// ─── Split & Merge ───────────────────────────────────────────────────────────

#[test]
fn test_split_und_merge_stellen_linie_wieder_her() {
    let original = &[(0.0, 0.0), (0.0, 10.0)];
    let (mut controller, mut state, _log) = setup(&[original]);

    send(&mut controller, &mut state, AppIntent::SplitModeRequested);
    assert!(matches!(state.interaction.mode, InteractionMode::Splitting));

    let seg = segment(&state, 0, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::Click {
            pos: DVec2::new(1.0, 5.0),
            target: Some(seg),
        },
    );
    assert_eq!(state.geometry().line_count(), 2);
    assert!(state.geometry().is_seam(0));
    assert!(matches!(state.interaction.mode, InteractionMode::Idle));

    send(
        &mut controller,
        &mut state,
        AppIntent::SelectModeRequested {
            mode: SelectMode::Segment,
        },
    );
    let first = segment(&state, 0, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::Click {
            pos: DVec2::new(0.0, 2.0),
            target: Some(first),
        },
    );
    let last = segment(&state, 1, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::Click {
            pos: DVec2::new(0.0, 8.0),
            target: Some(last),
        },
    );

    assert_eq!(state.geometry().as_ref(), &geometry(&[original]));
    assert!(matches!(state.interaction.mode, InteractionMode::Idle));
}

#[test]
fn test_merge_ohne_zusammenhang_behaelt_modus_und_verwirft_anker() {
    let (mut controller, mut state, _log) = setup(&[
        &[(0.0, 0.0), (0.0, 10.0)],
        &[(5.0, 0.0), (5.0, 10.0)],
    ]);

    send(
        &mut controller,
        &mut state,
        AppIntent::SelectModeRequested {
            mode: SelectMode::Segment,
        },
    );
    let first = segment(&state, 0, 0);
    let last = segment(&state, 1, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::Click {
            pos: DVec2::ZERO,
            target: Some(first),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::Click {
            pos: DVec2::ZERO,
            target: Some(last),
        },
    );

    assert!(matches!(
        state.last_error,
        Some(ValidationError::NonContiguousRange { .. })
    ));
    assert!(matches!(
        state.interaction.mode,
        InteractionMode::Selecting {
            mode: SelectMode::Segment,
            anchor: None
        }
    ));
    assert_eq!(state.geometry().line_count(), 2);
}

// ─── Startpunkt, Linien, aktive Linie ────────────────────────────────────────

#[test]
fn test_startpunkt_verlegen_rotiert_gruppe() {
    let (mut controller, mut state, log) = setup(&[
        &[(0.0, 0.0), (10.0, 0.0)],
        &[(10.0, 0.0), (10.0, 10.0)],
        &[(10.0, 10.0), (0.0, 10.0)],
    ]);

    send(&mut controller, &mut state, AppIntent::ShiftStartModeRequested);
    let start = point(&state, 1, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::Click {
            pos: DVec2::new(10.0, 0.0),
            target: Some(start),
        },
    );

    assert_eq!(
        state.geometry().point(IdxTuple::new(0, 0)),
        Some(DVec2::new(10.0, 0.0))
    );
    assert_eq!(
        state.geometry().point(IdxTuple::new(2, 0)),
        Some(DVec2::new(0.0, 0.0))
    );
    assert!(log.borrow()[0]
        .iter()
        .all(|e| matches!(e, EditEvent::Move { .. })));
    assert!(matches!(state.interaction.mode, InteractionMode::Idle));
}

#[test]
fn test_linie_anhaengen_meldet_create() {
    let (mut controller, mut state, log) = setup(&[&[(0.0, 0.0), (0.0, 10.0)]]);

    send(
        &mut controller,
        &mut state,
        AppIntent::AppendLineRequested {
            points: vec![DVec2::new(20.0, 0.0), DVec2::new(20.0, 10.0)],
        },
    );

    assert_eq!(state.geometry().line_count(), 2);
    assert!(matches!(
        log.borrow()[0].as_slice(),
        [EditEvent::Create { index: 1, .. }]
    ));
}

#[test]
fn test_klick_auf_segment_setzt_aktive_linie_ohne_history() {
    let (mut controller, mut state, log) = setup(&[
        &[(0.0, 0.0), (0.0, 10.0)],
        &[(5.0, 0.0), (5.0, 10.0)],
    ]);

    let seg = segment(&state, 1, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::Click {
            pos: DVec2::new(5.0, 5.0),
            target: Some(seg),
        },
    );

    assert_eq!(state.active_line, Some(1));
    assert_eq!(
        log.borrow()[0],
        vec![EditEvent::Active {
            before: None,
            after: Some(1)
        }]
    );
    assert!(!state.can_undo());
}
