//! Core-Domänentypen: Geometrie, Store, Overlap-Index, Events und
//! die reinen Editier-Operationen.

pub mod corridor;
pub mod edit;
pub mod error;
pub mod event;
pub mod geo_ops;
/// Normalisierte Transekt-Geometrie
///
/// - `LineString`: geordnete Punktfolge einer Linie
/// - `TransectGeometry`: geordnete Linien, Gruppen werden abgeleitet
pub mod geometry;
pub mod idx;
pub mod overlap;
pub mod store;

pub use corridor::{Corridor, CorridorBuilder};
pub use edit::{DragSession, DragTarget, EditOutcome};
pub use error::{EditError, InvariantViolation, ValidationError};
pub use event::{invert_all, EditEvent};
pub use geo_ops::{GeoOps, PlanarGeoOps};
pub use geometry::{GeometryParseError, LineString, TransectGeometry};
pub use idx::{IdxTuple, ShapeHandle, ShapeKind};
pub use overlap::OverlapIndex;
pub use store::{SegmentShape, TransectStore};
