//! Zentrale Konfiguration für den Transekt-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Halbe Korridor-Breite (Einheiten der Geometrie-Operationen).
pub const CORRIDOR_HALF_WIDTH: f64 = 25.0;
/// Toleranz für die Overlap-Erkennung (0.0 = exakte Gleichheit).
pub const OVERLAP_TOLERANCE: f64 = 0.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Zeitfenster (ms), in dem ein zweiter Klick den Einzelklick verwirft.
pub const CLICK_TIMEOUT_MS: u64 = 500;
/// Maximale Anzahl History-Einträge.
pub const HISTORY_DEPTH: usize = 200;

// ── Punkt-Darstellung ───────────────────────────────────────────────

/// Punkt-Radius in Pixeln.
pub const POINT_RADIUS: f32 = 5.0;
/// Standard-Farbe von Punkten (RGBA: Weiß).
pub const POINT_COLOR_DEFAULT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Punkte der aktiven Linie (RGBA: Cyan).
pub const POINT_COLOR_ACTIVE: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe des bearbeiteten/gezogenen Punkts (RGBA: Magenta).
pub const POINT_COLOR_EDITING: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe nicht-benachbarter Overlap-Punkte (RGBA: Orange).
pub const POINT_COLOR_OVERLAP: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
/// Farbe des Transekt-Startpunkts (RGBA: Grün).
pub const POINT_COLOR_START: [f32; 4] = [0.2, 0.9, 0.2, 1.0];

// ── Segment-Darstellung ─────────────────────────────────────────────

/// Linienstärke von Segmenten in Pixeln.
pub const SEGMENT_WIDTH: f32 = 3.0;
/// Standard-Farbe von Segmenten (RGBA: Blau).
pub const SEGMENT_COLOR_DEFAULT: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
/// Farbe der Segmente der aktiven Linie (RGBA: Cyan).
pub const SEGMENT_COLOR_ACTIVE: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe des Auswahl-Ankers (RGBA: Gelb).
pub const SEGMENT_COLOR_SELECTED: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Farbe teilbarer Segmente im Split-Modus (RGBA: Rot).
pub const SEGMENT_COLOR_TARGET: [f32; 4] = [0.9, 0.1, 0.1, 1.0];

// ── Korridor-Darstellung ────────────────────────────────────────────

/// Füllfarbe der Korridore (RGBA: Blau).
pub const CORRIDOR_COLOR: [f32; 4] = [0.2, 0.4, 1.0, 1.0];
/// Deckkraft normaler Korridore.
pub const CORRIDOR_OPACITY: f32 = 0.15;
/// Deckkraft hervorgehobener Korridore.
pub const CORRIDOR_OPACITY_ACTIVE: f32 = 0.35;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `transect_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Halbe Korridor-Breite
    pub corridor_half_width: f64,
    /// Overlap-Toleranz (0.0 = exakt)
    #[serde(default)]
    pub overlap_tolerance: f64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Einzel-/Doppelklick-Zeitfenster in Millisekunden
    pub click_timeout_ms: u64,
    /// Maximale History-Tiefe
    pub history_depth: usize,
    /// Eingefügten Punkt direkt in den Bearbeitungsmodus versetzen
    #[serde(default)]
    pub edit_inserted_point: bool,

    // ── Punkte ──────────────────────────────────────────────────
    /// Punkt-Radius
    pub point_radius: f32,
    /// Standard-Farbe von Punkten
    pub point_color_default: [f32; 4],
    /// Farbe der Punkte der aktiven Linie
    pub point_color_active: [f32; 4],
    /// Farbe des bearbeiteten Punkts
    pub point_color_editing: [f32; 4],
    /// Farbe von Overlap-Punkten
    pub point_color_overlap: [f32; 4],
    /// Farbe des Startpunkts
    pub point_color_start: [f32; 4],

    // ── Segmente ────────────────────────────────────────────────
    /// Linienstärke
    pub segment_width: f32,
    /// Standard-Farbe
    pub segment_color_default: [f32; 4],
    /// Farbe der aktiven Linie
    pub segment_color_active: [f32; 4],
    /// Farbe des Auswahl-Ankers
    pub segment_color_selected: [f32; 4],
    /// Farbe im Split-Modus
    pub segment_color_target: [f32; 4],

    // ── Korridore ───────────────────────────────────────────────
    /// Füllfarbe
    pub corridor_color: [f32; 4],
    /// Deckkraft normal
    pub corridor_opacity: f32,
    /// Deckkraft hervorgehoben
    pub corridor_opacity_active: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            corridor_half_width: CORRIDOR_HALF_WIDTH,
            overlap_tolerance: OVERLAP_TOLERANCE,

            click_timeout_ms: CLICK_TIMEOUT_MS,
            history_depth: HISTORY_DEPTH,
            edit_inserted_point: false,

            point_radius: POINT_RADIUS,
            point_color_default: POINT_COLOR_DEFAULT,
            point_color_active: POINT_COLOR_ACTIVE,
            point_color_editing: POINT_COLOR_EDITING,
            point_color_overlap: POINT_COLOR_OVERLAP,
            point_color_start: POINT_COLOR_START,

            segment_width: SEGMENT_WIDTH,
            segment_color_default: SEGMENT_COLOR_DEFAULT,
            segment_color_active: SEGMENT_COLOR_ACTIVE,
            segment_color_selected: SEGMENT_COLOR_SELECTED,
            segment_color_target: SEGMENT_COLOR_TARGET,

            corridor_color: CORRIDOR_COLOR,
            corridor_opacity: CORRIDOR_OPACITY,
            corridor_opacity_active: CORRIDOR_OPACITY_ACTIVE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("transect-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("transect_editor.toml")
    }

    /// History-Tiefe, mindestens 1.
    pub fn effective_history_depth(&self) -> usize {
        self.history_depth.max(1)
    }
}
