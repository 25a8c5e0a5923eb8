//! Overlap-Gate: punktbezogene Aktionen auf zusammenfallenden, nicht
//! benachbarten Punkten brauchen eine Auswahl, bevor sie ausgeführt werden.

use super::{points, shift};
use crate::app::state::{PendingAction, PendingChoice};
use crate::app::AppState;
use crate::core::IdxTuple;

/// Führt `action` aus oder fragt vorher nach dem gemeinten Punkt.
///
/// Mit registriertem `OverlapChooser` wird sofort gewählt, sonst wird die
/// Aktion geparkt und per [`resolve_choice`] fortgesetzt.
pub fn request(state: &mut AppState, action: PendingAction) -> anyhow::Result<()> {
    let target = action.target();
    let Some(partner) = state.store.crossing_partner(target) else {
        return execute(state, action);
    };
    let candidates = [target, partner];

    if let Some(chooser) = state.overlap_chooser_mut() {
        return match chooser.choose(candidates) {
            Some(chosen) if candidates.contains(&chosen) => {
                execute(state, action.with_target(chosen))
            }
            Some(chosen) => {
                log::warn!("Overlap-Auswahl {} ist kein Kandidat, Aktion verworfen", chosen);
                Ok(())
            }
            None => {
                log::debug!("Overlap-Auswahl abgebrochen");
                Ok(())
            }
        };
    }

    log::info!(
        "Overlap bei {}: Auswahl zwischen {} und {} erforderlich",
        target,
        candidates[0],
        candidates[1]
    );
    state.interaction.pending_choice = Some(PendingChoice { action, candidates });
    Ok(())
}

/// Setzt eine geparkte Aktion mit dem gewählten Punkt fort.
pub fn resolve_choice(state: &mut AppState, chosen: IdxTuple) -> anyhow::Result<()> {
    let Some(pending) = state.interaction.pending_choice.take() else {
        log::debug!("Keine Overlap-Auswahl offen");
        return Ok(());
    };
    if !pending.candidates.contains(&chosen) {
        log::warn!("{} ist kein Kandidat der offenen Overlap-Auswahl", chosen);
        state.interaction.pending_choice = Some(pending);
        return Ok(());
    }
    execute(state, pending.action.with_target(chosen))
}

/// Führt eine Aktion ohne weitere Prüfung aus.
fn execute(state: &mut AppState, action: PendingAction) -> anyhow::Result<()> {
    match action {
        PendingAction::EditPoint(point) => points::start_editing(state, point),
        PendingAction::RemovePoint(point) => points::remove_point(state, point).map(|_| ()),
        PendingAction::ShiftStart(point) => shift::shift_start(state, point).map(|_| ()),
    }
}
