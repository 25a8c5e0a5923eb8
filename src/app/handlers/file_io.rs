//! Handler für Datei-Operationen und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::TransectGeometry;
use crate::shared::EditorOptions;

/// Lädt eine Geometrie aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(state, &path)
}

/// Speichert die Geometrie unter dem übergebenen Pfad.
pub fn save(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::save_to_file(state, &path)
}

/// Übernimmt eine vom Host gelieferte Geometrie.
pub fn load_geometry(state: &mut AppState, geometry: TransectGeometry) {
    use_cases::file_io::load_geometry(state, geometry);
}

/// Übernimmt geänderte Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.apply_options(options);
    log::info!("Optionen übernommen");
}
