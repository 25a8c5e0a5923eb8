//! Use-Case: Punkt- und Korridor-Drag.
//!
//! Während des Drags wird nur live im Store verschoben und der Render-Adapter
//! per Einzel-Update informiert. Festgeschrieben wird erst beim Loslassen.

use super::commit::{apply_outcome, Commit};
use crate::app::state::{DeferredTask, DragState, InteractionMode};
use crate::app::AppState;
use crate::core::{DragSession, DragTarget, IdxTuple, ShapeKind};
use crate::shared::style_for;
use glam::DVec2;
use indexmap::IndexSet;

/// Startet einen Drag auf `target`.
///
/// `resume_editing` ist der Punkt, dessen Bearbeitung nach dem Drag weiterläuft.
pub fn begin_drag(
    state: &mut AppState,
    target: DragTarget,
    pointer: DVec2,
    resume_editing: Option<IdxTuple>,
) -> anyhow::Result<()> {
    let session = DragSession::begin(state.geometry().clone(), target, pointer)?;
    log::debug!(
        "Drag gestartet: {:?} ({} Punkt(e))",
        target,
        session.points().len()
    );
    state.set_mode(InteractionMode::Dragging(DragState {
        session,
        resume_editing,
    }));
    Ok(())
}

/// Verschiebt die gezogenen Punkte zur neuen Zeigerposition.
pub fn update_drag(state: &mut AppState, pointer: DVec2) -> anyhow::Result<()> {
    let InteractionMode::Dragging(drag) = &mut state.interaction.mode else {
        return Ok(());
    };
    let moves = drag.session.positions_for(pointer);
    apply_live_positions(state, &moves)
}

/// Beendet den Drag und schreibt ihn fest, falls sich etwas geändert hat.
///
/// Nach einem echten Drag wird der folgende Klick ignoriert, bis der nächste
/// Tick den Nachlauf zurücksetzt.
pub fn end_drag(state: &mut AppState) -> anyhow::Result<Commit> {
    let InteractionMode::Dragging(drag) = std::mem::take(&mut state.interaction.mode) else {
        return Ok(Commit::Unchanged);
    };
    state.set_mode(resume_mode(&drag));

    if !drag.session.has_moved() {
        log::debug!("Drag ohne Bewegung beendet");
        return Ok(Commit::Unchanged);
    }

    state.interaction.drag_tail = true;
    state
        .interaction
        .deferred
        .push_back(DeferredTask::ClearDragTail);

    let result = drag.session.finish(state.geometry(), state.active_line);
    apply_outcome(state, "Drag", result)
}

/// Bricht den Drag ab und stellt die Ursprungspositionen wieder her.
pub fn cancel_drag(state: &mut AppState) -> anyhow::Result<()> {
    let InteractionMode::Dragging(drag) = std::mem::take(&mut state.interaction.mode) else {
        return Ok(());
    };
    apply_live_positions(state, &drag.session.origin_positions())?;
    state.set_mode(resume_mode(&drag));
    log::info!("Drag abgebrochen");
    Ok(())
}

fn resume_mode(drag: &DragState) -> InteractionMode {
    drag.resume_editing
        .map(|point| InteractionMode::EditingPoint { point })
        .unwrap_or_default()
}

/// Verschiebt Punkte live und schickt Einzel-Updates an den Render-Adapter.
fn apply_live_positions(state: &mut AppState, moves: &[(IdxTuple, DVec2)]) -> anyhow::Result<()> {
    let mut touched: IndexSet<IdxTuple> = IndexSet::new();
    for (point, pos) in moves {
        touched.extend(state.store.move_point_live(*point, *pos)?);
    }

    if state.render_adapter_mut().is_none() {
        return Ok(());
    }

    let mode = state.mode_snapshot();
    let options = &state.options;
    let store = &state.store;

    let point_updates: Vec<_> = moves
        .iter()
        .filter_map(|(point, pos)| {
            let handle = store.point_handle(*point)?;
            Some((handle, *pos, style_for(ShapeKind::Point, *point, &mode, options)))
        })
        .collect();

    let mut segment_updates = Vec::with_capacity(touched.len());
    let mut corridor_updates = Vec::with_capacity(touched.len());
    for seg in &touched {
        let Some(shape) = store.segment_shape(*seg) else {
            continue;
        };
        if let Some(handle) = store.segment_handle(*seg) {
            let style = style_for(ShapeKind::Segment, *seg, &mode, options);
            segment_updates.push((handle, shape.start, shape.end, style));
        }
        if let Some(handle) = store.corridor_handle(*seg) {
            let style = style_for(ShapeKind::Corridor, *seg, &mode, options);
            corridor_updates.push((handle, shape.corridor.corners, style));
        }
    }

    if let Some(render) = state.render_adapter_mut() {
        for (handle, pos, style) in point_updates {
            render.update_point(handle, pos, style);
        }
        for (handle, start, end, style) in segment_updates {
            render.update_segment(handle, start, end, style);
        }
        for (handle, corners, style) in corridor_updates {
            render.update_corridor(handle, &corners, style);
        }
    }
    Ok(())
}
