//! Transect Editor Library.
//! Editier-Engine für segmentierte Linien-Transekte, als Library exportiert
//! für Hosts, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ChangeListener, OverlapChooser,
    RenderAdapter, SelectMode,
};
pub use core::{
    EditError, EditEvent, IdxTuple, InvariantViolation, ShapeHandle, ShapeKind,
    TransectGeometry, ValidationError,
};
pub use core::{GeoOps, PlanarGeoOps, TransectStore};
pub use shared::{EditorOptions, RenderScene, ShapeStyle};
