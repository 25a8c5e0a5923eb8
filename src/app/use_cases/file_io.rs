//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::TransectGeometry;
use std::sync::Arc;

/// Übernimmt eine neue Geometrie als Ausgangszustand.
///
/// Die History wird mit der Geometrie als Eintrag 0 neu gestartet,
/// der Interaktionszustand verworfen. Es werden keine Events gemeldet.
pub fn load_geometry(state: &mut AppState, geometry: TransectGeometry) {
    let geometry = Arc::new(geometry);

    state.interaction.clear_transient();
    state.interaction.drag_tail = false;
    state.interaction.deferred.clear();
    state.history.reset(Snapshot::new(geometry.clone(), None));
    state.set_geometry(geometry, None, None);
    state.last_error = None;

    log::info!(
        "Geometrie geladen: {} Linie(n), {} Segment(e), {} Gruppe(n)",
        state.geometry().line_count(),
        state.geometry().segment_count(),
        state.store.groups().len()
    );
}

/// Lädt eine GeoJSON-Datei in den AppState.
pub fn load_selected_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)?;
    let geometry = TransectGeometry::from_json(&json)?;
    log::info!("Datei gelesen: {}", path);
    load_geometry(state, geometry);
    Ok(())
}

/// Schreibt die aktuelle Geometrie als GeoJSON.
pub fn save_to_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    if !state.has_geometry() {
        anyhow::bail!("Keine Geometrie geladen");
    }
    let json = state.geometry().to_json()?;
    std::fs::write(path, json)?;
    log::info!(
        "Geometrie gespeichert: {} ({} Linie(n))",
        path,
        state.geometry().line_count()
    );
    Ok(())
}
