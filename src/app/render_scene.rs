//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{IdxTuple, ShapeKind};
use crate::shared::{style_for, CorridorItem, PointItem, RenderScene, SegmentItem};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let store = &state.store;
    let options = &state.options;
    let mode = state.mode_snapshot();

    let mut scene = RenderScene {
        generation: store.generation(),
        ..RenderScene::default()
    };

    for (l, line) in store.geometry().lines().iter().enumerate() {
        for (i, position) in line.points().iter().enumerate() {
            let idx = IdxTuple::new(l, i);
            let Some(handle) = store.point_handle(idx) else {
                continue;
            };
            scene.points.push(PointItem {
                handle,
                idx,
                position: *position,
                style: style_for(ShapeKind::Point, idx, &mode, options),
            });
        }
    }

    for (l, shapes) in store.segment_shapes().iter().enumerate() {
        for (s, shape) in shapes.iter().enumerate() {
            let idx = IdxTuple::new(l, s);
            if let Some(handle) = store.segment_handle(idx) {
                scene.segments.push(SegmentItem {
                    handle,
                    idx,
                    start: shape.start,
                    end: shape.end,
                    style: style_for(ShapeKind::Segment, idx, &mode, options),
                });
            }
            if let Some(handle) = store.corridor_handle(idx) {
                scene.corridors.push(CorridorItem {
                    handle,
                    idx,
                    corners: shape.corridor.corners,
                    style: style_for(ShapeKind::Corridor, idx, &mode, options),
                });
            }
        }
    }

    scene
}
