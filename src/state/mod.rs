//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`editor` for the SVG text pipeline, `ui` for
//! presentation flags) so individual components can depend on small focused
//! models. Each is provided as an `RwSignal` context from the app root.

pub mod editor;
pub mod ui;
