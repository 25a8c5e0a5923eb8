//! Integrationstests für Undo/Redo über den Controller.

use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use transect_editor::app::InteractionMode;
use transect_editor::core::invert_all;
use transect_editor::{
    AppController, AppIntent, AppState, EditEvent, EditorOptions, IdxTuple, ShapeHandle,
    TransectGeometry,
};

type EventLog = Rc<RefCell<Vec<Vec<EditEvent>>>>;

fn three_points() -> TransectGeometry {
    TransectGeometry::from_coords(vec![vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 10.0),
        DVec2::new(0.0, 20.0),
    ]])
    .expect("gültige Geometrie")
}

fn two_lines_with_seam() -> TransectGeometry {
    TransectGeometry::from_coords(vec![
        vec![DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0)],
        vec![DVec2::new(0.0, 10.0), DVec2::new(0.0, 20.0)],
    ])
    .expect("gültige Geometrie")
}

fn setup_with(options: EditorOptions) -> (AppController, AppState, EventLog) {
    setup_geometry(options, three_points())
}

fn setup_geometry(
    options: EditorOptions,
    geometry: TransectGeometry,
) -> (AppController, AppState, EventLog) {
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
            AppIntent::GeometryLoaded { geometry },
        )
        .expect("Laden darf nicht fehlschlagen");
    (controller, state, log)
}

fn setup() -> (AppController, AppState, EventLog) {
    setup_with(EditorOptions::default())
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent darf nicht fehlschlagen");
}

fn point(state: &AppState, line: usize, index: usize) -> ShapeHandle {
    state
        .store
        .point_handle(IdxTuple::new(line, index))
        .expect("Punkt-Handle erwartet")
}

fn remove_middle(controller: &mut AppController, state: &mut AppState) {
    let handle = point(state, 0, 1);
    send(
        controller,
        state,
        AppIntent::DoubleClick {
            pos: DVec2::new(0.0, 10.0),
            target: Some(handle),
        },
    );
}

fn append(controller: &mut AppController, state: &mut AppState, x: f64) {
    send(
        controller,
        state,
        AppIntent::AppendLineRequested {
            points: vec![DVec2::new(x, 0.0), DVec2::new(x, 10.0)],
        },
    );
}

#[test]
fn test_undo_stellt_geometrie_wieder_her_und_meldet_inverse() {
    let (mut controller, mut state, log) = setup();
    remove_middle(&mut controller, &mut state);
    assert_eq!(state.geometry().segment_count(), 1);

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert_eq!(state.geometry().as_ref(), &three_points());
    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1], invert_all(&log[0]));
    assert!(!state.can_undo());
    assert!(state.can_redo());
}

#[test]
fn test_redo_nach_undo_wiederholt_operation() {
    let (mut controller, mut state, log) = setup();
    remove_middle(&mut controller, &mut state);
    let after = state.geometry().as_ref().clone();

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::RedoRequested);

    assert_eq!(state.geometry().as_ref(), &after);
    let log = log.borrow();
    assert_eq!(log.len(), 3);
    assert_eq!(log[2], log[0], "Redo meldet die Vorwärts-Events");
}

#[test]
fn test_naht_entfernen_undo_und_redo() {
    let (mut controller, mut state, log) =
        setup_geometry(EditorOptions::default(), two_lines_with_seam());
    let seam = point(&state, 0, 1);
    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::new(0.0, 10.0),
            target: Some(seam),
        },
    );
    let merged = state.geometry().as_ref().clone();
    assert_eq!(merged.line_count(), 1);
    assert_eq!(
        merged.line(0).expect("Linie 0 erwartet").points(),
        &[DVec2::new(0.0, 0.0), DVec2::new(0.0, 20.0)]
    );

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.geometry().as_ref(), &two_lines_with_seam());
    assert!(state.geometry().is_seam(0));

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.geometry().as_ref(), &merged);

    let log = log.borrow();
    assert_eq!(log.len(), 3);
    assert!(matches!(log[0].as_slice(), [EditEvent::Merge { .. }]));
    assert_eq!(log[1], invert_all(&log[0]));
    assert!(matches!(
        log[1].as_slice(),
        [
            EditEvent::Edit { index: 0, .. },
            EditEvent::Insert { index: 1, .. }
        ]
    ));
    assert_eq!(log[2], log[0]);

    // Undo-Events bringen die Geometrie auch per Replay zurück
    let mut replay = merged;
    replay.apply_events(&log[1]).expect("Undo-Events anwendbar");
    assert_eq!(replay, two_lines_with_seam());
}

#[test]
fn test_startpunkt_verlegen_undo() {
    let chain = TransectGeometry::from_coords(vec![
        vec![DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0)],
        vec![DVec2::new(0.0, 10.0), DVec2::new(10.0, 10.0)],
        vec![DVec2::new(10.0, 10.0), DVec2::new(10.0, 0.0)],
    ])
    .expect("gültige Geometrie");
    let (mut controller, mut state, log) = setup_geometry(EditorOptions::default(), chain.clone());

    send(&mut controller, &mut state, AppIntent::ShiftStartModeRequested);
    let start = point(&state, 2, 0);
    send(
        &mut controller,
        &mut state,
        AppIntent::Click {
            pos: DVec2::new(10.0, 10.0),
            target: Some(start),
        },
    );
    assert_eq!(state.geometry().line(0), chain.line(2));
    assert_eq!(state.geometry().line(1), chain.line(0));
    assert_eq!(state.geometry().line(2), chain.line(1));
    assert!(matches!(state.interaction.mode, InteractionMode::Idle));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.geometry().as_ref(), &chain);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], vec![EditEvent::Move { from: 2, to: 0 }]);
    assert_eq!(log[1], invert_all(&log[0]));
    assert_eq!(log[1], vec![EditEvent::Move { from: 0, to: 3 }]);
}

#[test]
fn test_undo_an_der_grenze_ist_noop() {
    let (mut controller, mut state, log) = setup();

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::RedoRequested);

    assert_eq!(state.geometry().as_ref(), &three_points());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_neue_operation_nach_undo_verwirft_zukunft() {
    let (mut controller, mut state, _log) = setup();
    remove_middle(&mut controller, &mut state);
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    append(&mut controller, &mut state, 50.0);

    assert!(!state.can_redo());
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.geometry().line_count(), 2);
    assert_eq!(state.geometry().segment_count(), 3);
}

#[test]
fn test_kapazitaet_verwirft_aelteste_eintraege() {
    let options = EditorOptions {
        history_depth: 3,
        ..EditorOptions::default()
    };
    let (mut controller, mut state, _log) = setup_with(options);

    append(&mut controller, &mut state, 10.0);
    append(&mut controller, &mut state, 20.0);
    append(&mut controller, &mut state, 30.0);
    assert_eq!(state.history.len(), 3);
    assert_eq!(state.geometry().line_count(), 4);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(!state.can_undo(), "älteste Einträge sind verworfen");
    assert_eq!(state.geometry().line_count(), 2);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.geometry().line_count(), 2);
}

#[test]
fn test_undo_beendet_offenen_modus() {
    let (mut controller, mut state, _log) = setup();
    remove_middle(&mut controller, &mut state);

    send(&mut controller, &mut state, AppIntent::SplitModeRequested);
    assert!(matches!(state.interaction.mode, InteractionMode::Splitting));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(matches!(state.interaction.mode, InteractionMode::Idle));
    assert_eq!(state.geometry().as_ref(), &three_points());
}

#[test]
fn test_undo_nach_loeschen_der_aktiven_linie() {
    let (mut controller, mut state, _log) = setup();
    append(&mut controller, &mut state, 10.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::SetActiveLineRequested { line: Some(1) },
    );

    // Linie 1 komplett entfernen: aktive Linie wird gelöscht
    let end = point(&state, 1, 1);
    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: DVec2::new(10.0, 10.0),
            target: Some(end),
        },
    );
    assert_eq!(state.active_line, None);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.geometry().line_count(), 2);
}

#[test]
fn test_undo_meldet_zurueckgesetzte_aktive_linie() {
    let (mut controller, mut state, log) = setup();
    append(&mut controller, &mut state, 10.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::SetActiveLineRequested { line: Some(1) },
    );
    assert_eq!(log.borrow().len(), 2);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.active_line, None);
    {
        let log = log.borrow();
        assert!(matches!(
            log[2].as_slice(),
            [
                EditEvent::Delete { index: 1, .. },
                EditEvent::Active {
                    before: Some(1),
                    after: None
                }
            ]
        ));
    }

    // Redo: aktive Linie bleibt None, kein weiteres active-Event
    send(&mut controller, &mut state, AppIntent::RedoRequested);
    let log = log.borrow();
    assert!(matches!(log[3].as_slice(), [EditEvent::Create { index: 1, .. }]));
}

#[test]
fn test_neues_laden_setzt_history_zurueck() {
    let (mut controller, mut state, _log) = setup();
    remove_middle(&mut controller, &mut state);
    assert!(state.can_undo());

    send(
        &mut controller,
        &mut state,
        AppIntent::GeometryLoaded {
            geometry: three_points(),
        },
    );
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.history.len(), 1);
}
