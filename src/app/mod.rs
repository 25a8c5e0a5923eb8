//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod ports;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Store, History, Interaktion).
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, HistoryEntry, Snapshot};
pub use ports::{ChangeListener, OverlapChooser, RenderAdapter};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, DeferredTask, DragState, InteractionMode, InteractionState, PendingAction,
    PendingChoice, PendingClick, SelectMode,
};
