//! Transect Editor: headless Replay-Host.
//!
//! Lädt Optionen, eine Geometrie (GeoJSON) und ein Gesten-Skript (JSON),
//! spielt das Skript über den Controller ab und schreibt die Ergebnis-Geometrie.
//!
//! Aufruf: `transect-editor <geometrie.json> <skript.json> [ausgabe.json]`

use anyhow::Context;
use glam::DVec2;
use serde::Deserialize;
use transect_editor::app::RenderAdapter;
use transect_editor::{
    AppController, AppIntent, AppState, EditEvent, EditorOptions, IdxTuple, RenderScene,
    SelectMode, ShapeHandle, ShapeKind, ShapeStyle,
};

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Transect Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = ReplayHost::run() {
        log::error!("Replay fehlgeschlagen: {:#}", e);
        std::process::exit(1);
    }
}

/// Zielform eines Skript-Schritts, positional adressiert.
#[derive(Debug, Clone, Copy, Deserialize)]
struct ScriptTarget {
    kind: ShapeKind,
    line: usize,
    index: usize,
}

/// Ein Schritt des Gesten-Skripts.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum ScriptStep {
    PointerDown {
        #[serde(default)]
        pos: Option<[f64; 2]>,
        #[serde(default)]
        target: Option<ScriptTarget>,
    },
    PointerMove {
        pos: [f64; 2],
    },
    PointerUp {
        pos: [f64; 2],
    },
    Click {
        #[serde(default)]
        pos: Option<[f64; 2]>,
        #[serde(default)]
        target: Option<ScriptTarget>,
    },
    DoubleClick {
        #[serde(default)]
        pos: Option<[f64; 2]>,
        #[serde(default)]
        target: Option<ScriptTarget>,
    },
    Cancel,
    Tick {
        now_ms: u64,
    },
    Undo,
    Redo,
    SplitMode,
    SelectSegments,
    SelectLine,
    ShiftStartMode,
    ChooseOverlap {
        line: usize,
        index: usize,
    },
    SetActiveLine {
        line: Option<usize>,
    },
    AppendLine {
        points: Vec<[f64; 2]>,
    },
    Save {
        path: String,
    },
}

/// Render-Adapter, der nur protokolliert.
#[derive(Default)]
struct LogRenderAdapter {
    live_updates: usize,
}

impl RenderAdapter for LogRenderAdapter {
    fn replace_scene(&mut self, scene: &RenderScene) {
        log::debug!(
            "Szene (Generation {}): {} Punkte, {} Segmente, {} Korridore ({} Live-Updates zuvor)",
            scene.generation,
            scene.points.len(),
            scene.segments.len(),
            scene.corridors.len(),
            self.live_updates
        );
        self.live_updates = 0;
    }

    fn update_point(&mut self, _handle: ShapeHandle, _position: DVec2, _style: ShapeStyle) {
        self.live_updates += 1;
    }

    fn update_segment(
        &mut self,
        _handle: ShapeHandle,
        _start: DVec2,
        _end: DVec2,
        _style: ShapeStyle,
    ) {
        self.live_updates += 1;
    }

    fn update_corridor(&mut self, _handle: ShapeHandle, _corners: &[DVec2; 4], _style: ShapeStyle) {
        self.live_updates += 1;
    }
}

struct ReplayHost {
    state: AppState,
    controller: AppController,
}

impl ReplayHost {
    fn run() -> anyhow::Result<()> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let (geometry_path, script_path) = match args.as_slice() {
            [geometry, script, ..] => (geometry.clone(), script.clone()),
            _ => anyhow::bail!("Aufruf: transect-editor <geometrie.json> <skript.json> [ausgabe.json]"),
        };
        let output_path = args.get(2).cloned();

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let script_json = std::fs::read_to_string(&script_path)
            .with_context(|| format!("Skript nicht lesbar: {}", script_path))?;
        let script: Vec<ScriptStep> = serde_json::from_str(&script_json)
            .with_context(|| format!("Skript ungültig: {}", script_path))?;

        let mut host = Self::new(options);
        host.dispatch(AppIntent::OpenGeometryRequested {
            path: geometry_path,
        })?;

        for (n, step) in script.into_iter().enumerate() {
            let intent = match host.intent_for(step) {
                Ok(intent) => intent,
                Err(e) => {
                    log::error!("Schritt {} übersprungen: {:#}", n + 1, e);
                    continue;
                }
            };
            if let Err(e) = host.dispatch(intent) {
                log::error!("Schritt {} fehlgeschlagen: {:#}", n + 1, e);
            }
            if let Some(err) = host.state.last_error.take() {
                log::warn!("Schritt {} abgelehnt: {}", n + 1, err);
            }
        }

        log::info!(
            "Replay beendet: {} Linie(n), Undo {} / Redo {}",
            host.state.geometry().line_count(),
            host.state.can_undo(),
            host.state.can_redo()
        );

        match output_path {
            Some(path) => host.dispatch(AppIntent::SaveGeometryRequested { path }),
            None => {
                println!("{}", host.state.geometry().to_json()?);
                Ok(())
            }
        }
    }

    fn new(options: EditorOptions) -> Self {
        let mut state = AppState::with_options(options);
        state.set_listener(Box::new(|events: &[EditEvent]| {
            let kinds: Vec<&str> = events.iter().map(EditEvent::kind).collect();
            log::info!("Änderung: {}", kinds.join(", "));
        }));
        state.set_render_adapter(Box::new(LogRenderAdapter::default()));
        Self {
            state,
            controller: AppController::new(),
        }
    }

    fn dispatch(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    /// Übersetzt einen Skript-Schritt in einen Intent der aktuellen Generation.
    fn intent_for(&self, step: ScriptStep) -> anyhow::Result<AppIntent> {
        let intent = match step {
            ScriptStep::PointerDown { pos, target } => {
                let (pos, target) = self.resolve(pos, target)?;
                AppIntent::PointerDown { pos, target }
            }
            ScriptStep::PointerMove { pos } => AppIntent::PointerMove {
                pos: DVec2::from_array(pos),
            },
            ScriptStep::PointerUp { pos } => AppIntent::PointerUp {
                pos: DVec2::from_array(pos),
            },
            ScriptStep::Click { pos, target } => {
                let (pos, target) = self.resolve(pos, target)?;
                AppIntent::Click { pos, target }
            }
            ScriptStep::DoubleClick { pos, target } => {
                let (pos, target) = self.resolve(pos, target)?;
                AppIntent::DoubleClick { pos, target }
            }
            ScriptStep::Cancel => AppIntent::CancelPressed,
            ScriptStep::Tick { now_ms } => AppIntent::Tick { now_ms },
            ScriptStep::Undo => AppIntent::UndoRequested,
            ScriptStep::Redo => AppIntent::RedoRequested,
            ScriptStep::SplitMode => AppIntent::SplitModeRequested,
            ScriptStep::SelectSegments => AppIntent::SelectModeRequested {
                mode: SelectMode::Segment,
            },
            ScriptStep::SelectLine => AppIntent::SelectModeRequested {
                mode: SelectMode::Line,
            },
            ScriptStep::ShiftStartMode => AppIntent::ShiftStartModeRequested,
            ScriptStep::ChooseOverlap { line, index } => AppIntent::OverlapChosen {
                chosen: IdxTuple::new(line, index),
            },
            ScriptStep::SetActiveLine { line } => AppIntent::SetActiveLineRequested { line },
            ScriptStep::AppendLine { points } => AppIntent::AppendLineRequested {
                points: points.into_iter().map(DVec2::from_array).collect(),
            },
            ScriptStep::Save { path } => AppIntent::SaveGeometryRequested { path },
        };
        Ok(intent)
    }

    /// Bestimmt Handle und Position eines Ziels.
    ///
    /// Ohne explizite Position wird der Punkt bzw. die Segmentmitte verwendet.
    fn resolve(
        &self,
        pos: Option<[f64; 2]>,
        target: Option<ScriptTarget>,
    ) -> anyhow::Result<(DVec2, Option<ShapeHandle>)> {
        let Some(target) = target else {
            return Ok((pos.map(DVec2::from_array).unwrap_or(DVec2::ZERO), None));
        };
        let idx = IdxTuple::new(target.line, target.index);
        let store = &self.state.store;
        let geometry = self.state.geometry();

        let (handle, anchor) = match target.kind {
            ShapeKind::Point => (store.point_handle(idx), geometry.point(idx)),
            ShapeKind::Segment => (
                store.segment_handle(idx),
                geometry.segment(idx).map(|(a, b)| (a + b) * 0.5),
            ),
            ShapeKind::Corridor => (
                store.corridor_handle(idx),
                geometry.segment(idx).map(|(a, b)| (a + b) * 0.5),
            ),
        };
        let (Some(handle), Some(anchor)) = (handle, anchor) else {
            anyhow::bail!("Ziel {:?} {} existiert nicht", target.kind, idx);
        };
        Ok((pos.map(DVec2::from_array).unwrap_or(anchor), Some(handle)))
    }
}
