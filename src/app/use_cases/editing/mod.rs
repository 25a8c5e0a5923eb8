//! Use-Case-Funktionen für das Editieren des Transekts.
//!
//! Aufgeteilt nach Operation:
//! - `commit` — Ergebnis festschreiben (History, Rebuild, Events)
//! - `overlap_gate` — Auswahl bei zusammenfallenden Punkten
//! - `points` — Punkt einfügen, entfernen, bearbeiten
//! - `split` — Segment teilen
//! - `merge` — Segmentbereich zusammenfassen
//! - `shift` — Startpunkt verlegen
//! - `drag` — Punkt-/Korridor-Drag
//! - `lines` — aktive Linie, Linie anhängen
mod commit;
mod drag;
mod lines;
mod merge;
mod overlap_gate;
mod points;
mod shift;
mod split;

pub use commit::{apply_outcome, Commit};
pub use drag::{begin_drag, cancel_drag, end_drag, update_drag};
pub use lines::{append_line, set_active_line};
pub use merge::merge_segments;
pub use overlap_gate::{request as request_gated, resolve_choice};
pub use points::{insert_point_at, remove_point, start_editing};
pub use shift::shift_start;
pub use split::split_segment_at;
