//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Nach allen Commands wird die Szene an den Render-Adapter geschickt,
    /// auch wenn ein Command fehlschlägt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));
        state.flush_render();
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::trace!("Command: {:?}", command);
        use super::handlers;

        match command {
            // === Datei-I/O & Optionen ===
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::LoadGeometry { geometry } => {
                handlers::file_io::load_geometry(state, geometry)
            }
            AppCommand::ApplyOptions { options } => {
                handlers::file_io::apply_options(state, options)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Gesten ===
            AppCommand::CancelInteraction => handlers::interaction::cancel(state)?,
            AppCommand::CancelDrag => handlers::interaction::cancel_drag(state)?,
            AppCommand::BeginPointer { pos, target } => {
                handlers::interaction::pointer_down(state, pos, target)?
            }
            AppCommand::MovePointer { pos } => handlers::interaction::pointer_move(state, pos)?,
            AppCommand::EndPointer { pos } => handlers::interaction::pointer_up(state, pos)?,
            AppCommand::HandleClick { pos, target } => {
                handlers::interaction::click(state, pos, target)?
            }
            AppCommand::HandleDoubleClick { pos, target } => {
                handlers::interaction::double_click(state, pos, target)?
            }
            AppCommand::AdvanceClock { now_ms } => {
                handlers::interaction::advance_clock(state, now_ms)?
            }
            AppCommand::RunDeferredTasks => handlers::interaction::run_deferred_tasks(state),

            // === Modi ===
            AppCommand::EnterSplitMode => handlers::interaction::enter_split_mode(state),
            AppCommand::EnterSelectMode { mode } => {
                handlers::interaction::enter_select_mode(state, mode)
            }
            AppCommand::EnterShiftStartMode => {
                handlers::interaction::enter_shift_start_mode(state)
            }

            // === Editing ===
            AppCommand::ResolveOverlap { chosen } => {
                handlers::editing::resolve_overlap(state, chosen)?
            }
            AppCommand::SetActiveLine { line } => handlers::editing::set_active_line(state, line)?,
            AppCommand::AppendLine { points } => handlers::editing::append_line(state, points)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
