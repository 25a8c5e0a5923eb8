//! Mapping von Host-Intents auf mutierende App-Commands.

use super::state::InteractionMode;
use super::{AppCommand, AppIntent, AppState};

/// Gibt `true` zurück, wenn ein Modus oder eine geparkte Aktion offen ist.
fn interaction_open(state: &AppState) -> bool {
    !matches!(state.interaction.mode, InteractionMode::Idle)
        || state.interaction.pending_choice.is_some()
        || state.interaction.pending_click.is_some()
}

/// Stellt `command` ein `CancelDrag` voran, solange ein Drag läuft.
///
/// Die Store-Geometrie ist während eines Drags live verschoben und darf
/// nicht als Ausgangspunkt anderer Operationen dienen.
fn after_drag(state: &AppState, command: AppCommand) -> Vec<AppCommand> {
    if matches!(state.interaction.mode, InteractionMode::Dragging(_)) {
        vec![AppCommand::CancelDrag, command]
    } else {
        vec![command]
    }
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenGeometryRequested { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveGeometryRequested { path } => {
            after_drag(state, AppCommand::SaveFile { path })
        }
        AppIntent::GeometryLoaded { geometry } => vec![AppCommand::LoadGeometry { geometry }],
        AppIntent::OptionsChanged { options } => {
            after_drag(state, AppCommand::ApplyOptions { options })
        }

        // Undo/Redo verändert die Nummerierung: offene Modi vorher beenden.
        AppIntent::UndoRequested => {
            if interaction_open(state) {
                vec![AppCommand::CancelInteraction, AppCommand::Undo]
            } else {
                vec![AppCommand::Undo]
            }
        }
        AppIntent::RedoRequested => {
            if interaction_open(state) {
                vec![AppCommand::CancelInteraction, AppCommand::Redo]
            } else {
                vec![AppCommand::Redo]
            }
        }

        AppIntent::PointerDown { pos, target } => vec![AppCommand::BeginPointer { pos, target }],
        AppIntent::PointerMove { pos } => vec![AppCommand::MovePointer { pos }],
        AppIntent::PointerUp { pos } => vec![AppCommand::EndPointer { pos }],
        AppIntent::Click { pos, target } => vec![AppCommand::HandleClick { pos, target }],
        AppIntent::DoubleClick { pos, target } => {
            vec![AppCommand::HandleDoubleClick { pos, target }]
        }
        AppIntent::CancelPressed => vec![AppCommand::CancelInteraction],
        AppIntent::Tick { now_ms } => vec![
            AppCommand::AdvanceClock { now_ms },
            AppCommand::RunDeferredTasks,
        ],

        AppIntent::SplitModeRequested => {
            vec![AppCommand::CancelInteraction, AppCommand::EnterSplitMode]
        }
        AppIntent::SelectModeRequested { mode } => vec![
            AppCommand::CancelInteraction,
            AppCommand::EnterSelectMode { mode },
        ],
        AppIntent::ShiftStartModeRequested => {
            vec![AppCommand::CancelInteraction, AppCommand::EnterShiftStartMode]
        }

        AppIntent::OverlapChosen { chosen } => {
            after_drag(state, AppCommand::ResolveOverlap { chosen })
        }
        AppIntent::SetActiveLineRequested { line } => {
            after_drag(state, AppCommand::SetActiveLine { line })
        }
        AppIntent::AppendLineRequested { points } => {
            after_drag(state, AppCommand::AppendLine { points })
        }
    }
}
