//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure logic and browser/environment concerns from
//! page and component code to improve reuse and testability.

pub mod dark_mode;
pub mod svg;
