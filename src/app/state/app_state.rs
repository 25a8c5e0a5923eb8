use crate::app::history::{EditHistory, Snapshot};
use crate::app::ports::{ChangeListener, OverlapChooser, RenderAdapter};
use crate::app::render_scene;
use crate::core::{
    CorridorBuilder, EditEvent, GeoOps, PlanarGeoOps, TransectGeometry, TransectStore,
    ValidationError,
};
use crate::shared::{EditorOptions, ModeSnapshot};
use std::collections::HashSet;
use std::sync::Arc;

use super::{InteractionMode, InteractionState};

/// Hauptzustand der Anwendung
///
/// Aufbaureihenfolge: `GeoOps` → `CorridorBuilder` → `TransectStore` →
/// `EditHistory` → `AppState`.
pub struct AppState {
    /// Normalisierte Geometrie samt abgeleiteter Strukturen
    pub store: TransectStore,
    /// Undo/Redo-History (Event-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Breiten, Zeitfenster, Farben)
    pub options: EditorOptions,
    /// Aktive Linie
    pub active_line: Option<usize>,
    /// Transienter Interaktionszustand
    pub interaction: InteractionState,
    /// Letzter abgelehnter Vorgang (für Host-Anzeige)
    pub last_error: Option<ValidationError>,
    scene_dirty: bool,
    listener: Option<Box<dyn ChangeListener>>,
    render: Option<Box<dyn RenderAdapter>>,
    chooser: Option<Box<dyn OverlapChooser>>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit ebener Geometrie.
    pub fn with_options(options: EditorOptions) -> Self {
        Self::with_geo_ops(options, Arc::new(PlanarGeoOps))
    }

    /// Erstellt einen leeren App-State mit eigenen Geometrie-Operationen.
    pub fn with_geo_ops(options: EditorOptions, geo: Arc<dyn GeoOps + Send + Sync>) -> Self {
        let corridors = CorridorBuilder::new(geo, options.corridor_half_width);
        let store = TransectStore::new(corridors, options.overlap_tolerance);
        let history = EditHistory::new_with_capacity(options.effective_history_depth());
        Self {
            store,
            history,
            options,
            active_line: None,
            interaction: InteractionState::new(),
            last_error: None,
            scene_dirty: false,
            listener: None,
            render: None,
            chooser: None,
        }
    }

    /// Registriert den (einzigen) Änderungs-Beobachter.
    pub fn set_listener(&mut self, listener: Box<dyn ChangeListener>) {
        self.listener = Some(listener);
    }

    /// Registriert den Render-Adapter und schickt sofort die aktuelle Szene.
    pub fn set_render_adapter(&mut self, adapter: Box<dyn RenderAdapter>) {
        self.render = Some(adapter);
        self.scene_dirty = true;
        self.flush_render();
    }

    /// Registriert eine synchrone Overlap-Auswahl.
    pub fn set_overlap_chooser(&mut self, chooser: Box<dyn OverlapChooser>) {
        self.chooser = Some(chooser);
    }

    /// Mutable Zugriff auf die Overlap-Auswahl (falls vorhanden).
    pub fn overlap_chooser_mut(&mut self) -> Option<&mut (dyn OverlapChooser + 'static)> {
        self.chooser.as_deref_mut()
    }

    /// Mutable Zugriff auf den Render-Adapter (falls vorhanden).
    pub fn render_adapter_mut(&mut self) -> Option<&mut (dyn RenderAdapter + 'static)> {
        self.render.as_deref_mut()
    }

    /// Gibt zurück, ob eine Geometrie geladen ist.
    pub fn has_geometry(&self) -> bool {
        !self.store.is_empty()
    }

    /// Aktuelle Geometrie.
    pub fn geometry(&self) -> &Arc<TransectGeometry> {
        self.store.geometry()
    }

    /// Setzt eine neue Geometrie.
    ///
    /// Mit Events wird zuerst ein History-Eintrag angelegt und dann neu
    /// aufgebaut; ohne Events (Undo/Redo, Laden) nur neu aufgebaut.
    pub fn set_geometry(
        &mut self,
        geometry: Arc<TransectGeometry>,
        active_line: Option<usize>,
        events: Option<Vec<EditEvent>>,
    ) {
        self.active_line = active_line;
        if let Some(events) = events {
            self.history
                .push(Snapshot::new(geometry.clone(), active_line), events);
        }
        self.store.rebuild(geometry);
        self.scene_dirty = true;
    }

    /// Übernimmt geänderte Optionen. Geometrie-relevante Werte lösen einen Rebuild aus.
    pub fn apply_options(&mut self, options: EditorOptions) {
        let rebuild = options.corridor_half_width != self.options.corridor_half_width
            || options.overlap_tolerance != self.options.overlap_tolerance;
        self.history.set_max_depth(options.effective_history_depth());
        self.options = options;
        if rebuild {
            let corridors = self
                .store
                .corridors()
                .with_half_width(self.options.corridor_half_width);
            self.store
                .reconfigure(corridors, self.options.overlap_tolerance);
        }
        self.scene_dirty = true;
    }

    /// Benachrichtigt den Beobachter über festgeschriebene Events.
    pub fn emit(&mut self, events: &[EditEvent]) {
        if events.is_empty() {
            return;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(events);
        }
    }

    /// Setzt den Interaktionsmodus.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.interaction.mode = mode;
        self.scene_dirty = true;
    }

    /// Markiert die Szene als neu aufzubauen.
    pub fn mark_scene_dirty(&mut self) {
        self.scene_dirty = true;
    }

    /// Schickt eine neue Szene an den Adapter, falls sich etwas geändert hat.
    pub fn flush_render(&mut self) {
        if !self.scene_dirty {
            return;
        }
        self.scene_dirty = false;
        if self.render.is_none() {
            return;
        }
        let scene = render_scene::build(self);
        if let Some(render) = self.render.as_mut() {
            render.replace_scene(&scene);
        }
    }

    /// Momentaufnahme des Modus für die Stil-Berechnung.
    pub fn mode_snapshot(&self) -> ModeSnapshot {
        let geometry = self.store.geometry();
        let overlap_points: HashSet<_> = self
            .store
            .overlaps()
            .nonadjacent()
            .keys()
            .flat_map(|&idx| std::iter::once(idx).chain(geometry.seam_partner(idx)))
            .collect();
        ModeSnapshot {
            mode: self.interaction.mode.kind(),
            active_line: self.active_line,
            focus_point: self.interaction.focus_point(),
            focus_segment: self.interaction.focus_segment(),
            overlap_points: Arc::new(overlap_points),
        }
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
