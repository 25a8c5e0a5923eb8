//! Handler für Zeiger-Gesten, Klicks und Modi.
//!
//! Klick-Reihenfolge: Drag-Nachlauf → zurückgehaltener Einzelklick →
//! offene Overlap-Auswahl → aktueller Modus → frische Auswahl im Leerlauf.

use crate::app::state::{DeferredTask, InteractionMode, PendingAction, PendingClick, SelectMode};
use crate::app::use_cases::editing;
use crate::app::AppState;
use crate::core::{DragTarget, IdxTuple, ShapeHandle, ShapeKind};
use glam::DVec2;

/// Löst ein Render-Handle auf; ein veraltetes Handle ist ein Fehler.
fn resolve_target(
    state: &AppState,
    target: Option<ShapeHandle>,
) -> anyhow::Result<Option<(ShapeKind, IdxTuple)>> {
    Ok(target
        .map(|handle| state.store.resolve_checked(handle))
        .transpose()?)
}

/// Pointer-Down: startet ggf. einen Punkt- oder Korridor-Drag.
pub fn pointer_down(
    state: &mut AppState,
    pos: DVec2,
    target: Option<ShapeHandle>,
) -> anyhow::Result<()> {
    let resolved = resolve_target(state, target)?;
    let editing_point = match state.interaction.mode {
        InteractionMode::EditingPoint { point } => Some(point),
        _ => None,
    };
    let idle = matches!(state.interaction.mode, InteractionMode::Idle);

    match (editing_point, resolved) {
        (Some(point), Some((ShapeKind::Point, hit))) => {
            let grabbed = hit == point || state.geometry().seam_partner(point) == Some(hit);
            if grabbed {
                editing::begin_drag(state, DragTarget::Point(point), pos, Some(point))?;
            }
        }
        (None, Some((ShapeKind::Corridor, segment))) if idle => {
            editing::begin_drag(state, DragTarget::Corridor(segment), pos, None)?;
        }
        _ => {}
    }
    Ok(())
}

/// Pointer-Move: aktualisiert einen laufenden Drag.
pub fn pointer_move(state: &mut AppState, pos: DVec2) -> anyhow::Result<()> {
    if matches!(state.interaction.mode, InteractionMode::Dragging(_)) {
        editing::update_drag(state, pos)?;
    }
    Ok(())
}

/// Pointer-Up: schließt einen laufenden Drag ab.
pub fn pointer_up(state: &mut AppState, pos: DVec2) -> anyhow::Result<()> {
    if matches!(state.interaction.mode, InteractionMode::Dragging(_)) {
        editing::update_drag(state, pos)?;
        editing::end_drag(state)?;
    }
    Ok(())
}

/// Einzelklick.
pub fn click(state: &mut AppState, pos: DVec2, target: Option<ShapeHandle>) -> anyhow::Result<()> {
    if state.interaction.drag_tail {
        log::debug!("Klick nach Drag ignoriert");
        return Ok(());
    }

    if let Some(pending) = state.interaction.pending_click.take() {
        if state.interaction.now_ms < pending.deadline_ms {
            log::debug!("Zweiter Klick im Zeitfenster: Einzelklick verworfen");
            return Ok(());
        }
        // Zeitfenster abgelaufen, aber noch kein Tick: Einzelklick nachholen
        editing::request_gated(state, pending.action)?;
    }

    if state.interaction.pending_choice.is_some() {
        log::debug!("Overlap-Auswahl offen, Klick ignoriert");
        return Ok(());
    }

    let resolved = resolve_target(state, target)?;
    match state.interaction.mode.clone() {
        InteractionMode::Idle => click_idle(state, resolved),
        InteractionMode::EditingPoint { point } => {
            let same_point = matches!(resolved, Some((ShapeKind::Point, hit))
                if hit == point || state.geometry().seam_partner(point) == Some(hit));
            if same_point {
                return Ok(());
            }
            log::info!("Bearbeitung von {} beendet", point);
            state.set_mode(InteractionMode::Idle);
            click_idle(state, resolved)
        }
        InteractionMode::Dragging(_) => Ok(()),
        InteractionMode::Splitting => match segment_of(resolved) {
            Some(segment) => {
                editing::split_segment_at(state, segment, pos)?;
                state.set_mode(InteractionMode::Idle);
                Ok(())
            }
            None => {
                log::debug!("Split-Modus: Klick ohne Segment ignoriert");
                Ok(())
            }
        },
        InteractionMode::Selecting {
            mode: SelectMode::Segment,
            anchor,
        } => {
            let Some(segment) = segment_of(resolved) else {
                log::debug!("Auswahl: Klick ohne Segment ignoriert");
                return Ok(());
            };
            match anchor {
                None => {
                    state.set_mode(InteractionMode::Selecting {
                        mode: SelectMode::Segment,
                        anchor: Some(segment),
                    });
                    log::debug!("Auswahl-Anker: {}", segment);
                }
                Some(first) => {
                    let commit = editing::merge_segments(state, first, segment)?;
                    if commit == editing::Commit::Rejected {
                        state.set_mode(InteractionMode::Selecting {
                            mode: SelectMode::Segment,
                            anchor: None,
                        });
                    } else {
                        state.set_mode(InteractionMode::Idle);
                    }
                }
            }
            Ok(())
        }
        InteractionMode::Selecting {
            mode: SelectMode::Line,
            ..
        } => match resolved {
            Some((_, idx)) => {
                editing::set_active_line(state, Some(idx.line))?;
                state.set_mode(InteractionMode::Idle);
                Ok(())
            }
            None => Ok(()),
        },
        InteractionMode::ShiftingStart => match resolved {
            Some((ShapeKind::Point, point)) => {
                editing::request_gated(state, PendingAction::ShiftStart(point))
            }
            _ => {
                log::debug!("Startpunkt-Modus: Klick ohne Punkt ignoriert");
                Ok(())
            }
        },
    }
}

/// Frische Auswahl im Leerlauf.
fn click_idle(state: &mut AppState, resolved: Option<(ShapeKind, IdxTuple)>) -> anyhow::Result<()> {
    match resolved {
        Some((ShapeKind::Point, point)) => {
            let action = PendingAction::EditPoint(point);
            if state.store.crossing_partner(point).is_some() {
                let deadline_ms = state
                    .interaction
                    .now_ms
                    .saturating_add(state.options.click_timeout_ms);
                state.interaction.pending_click = Some(PendingClick {
                    action,
                    deadline_ms,
                });
                log::debug!("Klick auf Overlap-Punkt {}: warte bis {} ms", point, deadline_ms);
                Ok(())
            } else {
                editing::request_gated(state, action)
            }
        }
        Some((ShapeKind::Segment | ShapeKind::Corridor, segment)) => {
            editing::set_active_line(state, Some(segment.line))
        }
        None => Ok(()),
    }
}

fn segment_of(resolved: Option<(ShapeKind, IdxTuple)>) -> Option<IdxTuple> {
    match resolved {
        Some((ShapeKind::Segment | ShapeKind::Corridor, segment)) => Some(segment),
        _ => None,
    }
}

/// Doppelklick: Punkt einfügen (Segment) bzw. entfernen (Punkt).
pub fn double_click(
    state: &mut AppState,
    pos: DVec2,
    target: Option<ShapeHandle>,
) -> anyhow::Result<()> {
    if state.interaction.drag_tail {
        log::debug!("Doppelklick nach Drag ignoriert");
        return Ok(());
    }
    state.interaction.pending_click = None;
    if state.interaction.pending_choice.is_some() {
        log::debug!("Overlap-Auswahl offen, Doppelklick ignoriert");
        return Ok(());
    }

    match &state.interaction.mode {
        InteractionMode::Idle => {}
        InteractionMode::EditingPoint { .. } => state.set_mode(InteractionMode::Idle),
        _ => {
            log::debug!("Doppelklick im Modus {:?} ignoriert", state.interaction.mode.kind());
            return Ok(());
        }
    }

    match resolve_target(state, target)? {
        Some((ShapeKind::Segment | ShapeKind::Corridor, segment)) => {
            editing::insert_point_at(state, segment, pos).map(|_| ())
        }
        Some((ShapeKind::Point, point)) => {
            editing::request_gated(state, PendingAction::RemovePoint(point))
        }
        None => Ok(()),
    }
}

/// Abbruch: Drag zurücksetzen, Bearbeitung abschließen, sonst Modus verlassen.
pub fn cancel(state: &mut AppState) -> anyhow::Result<()> {
    state.interaction.pending_click = None;
    if state.interaction.pending_choice.take().is_some() {
        log::info!("Overlap-Auswahl abgebrochen");
    }

    match &state.interaction.mode {
        InteractionMode::Idle => {}
        InteractionMode::Dragging(_) => editing::cancel_drag(state)?,
        InteractionMode::EditingPoint { point } => {
            log::info!("Bearbeitung von {} beendet", point);
            state.set_mode(InteractionMode::Idle);
        }
        other => {
            log::info!("Modus {:?} abgebrochen", other.kind());
            state.set_mode(InteractionMode::Idle);
        }
    }
    Ok(())
}

/// Verwirft nur einen laufenden Drag; geparkte Auswahl und Timer bleiben.
pub fn cancel_drag(state: &mut AppState) -> anyhow::Result<()> {
    if matches!(state.interaction.mode, InteractionMode::Dragging(_)) {
        editing::cancel_drag(state)?;
    }
    Ok(())
}

/// Schreibt die Host-Uhr fort und löst einen abgelaufenen Einzelklick aus.
pub fn advance_clock(state: &mut AppState, now_ms: u64) -> anyhow::Result<()> {
    state.interaction.now_ms = now_ms;
    let expired = state
        .interaction
        .pending_click
        .is_some_and(|pending| pending.deadline_ms <= now_ms);
    if expired {
        if let Some(pending) = state.interaction.pending_click.take() {
            log::debug!("Klick-Zeitfenster abgelaufen: {:?}", pending.action);
            editing::request_gated(state, pending.action)?;
        }
    }
    Ok(())
}

/// Führt alle zurückgestellten Aufgaben aus.
pub fn run_deferred_tasks(state: &mut AppState) {
    while let Some(task) = state.interaction.deferred.pop_front() {
        match task {
            DeferredTask::ClearDragTail => state.interaction.drag_tail = false,
        }
    }
}

/// Betritt den Split-Modus.
pub fn enter_split_mode(state: &mut AppState) {
    enter_mode(state, InteractionMode::Splitting);
}

/// Betritt den Auswahlmodus.
pub fn enter_select_mode(state: &mut AppState, mode: SelectMode) {
    enter_mode(state, InteractionMode::Selecting { mode, anchor: None });
}

/// Betritt den Startpunkt-Modus.
pub fn enter_shift_start_mode(state: &mut AppState) {
    enter_mode(state, InteractionMode::ShiftingStart);
}

fn enter_mode(state: &mut AppState, mode: InteractionMode) {
    if !state.has_geometry() {
        log::debug!("Keine Geometrie geladen, Modus {:?} ignoriert", mode.kind());
        return;
    }
    log::debug!("Modus: {:?}", mode.kind());
    state.set_mode(mode);
}
