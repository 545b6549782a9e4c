//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the converter's interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod editor_panel;
pub mod preview_panel;
pub mod upload_zone;
