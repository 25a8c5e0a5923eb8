//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Render-Adapter geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
pub mod style;

pub use options::EditorOptions;
pub use render_scene::{CorridorItem, PointItem, RenderScene, SegmentItem};
pub use style::{style_for, ModeKind, ModeSnapshot, ShapeStyle};
