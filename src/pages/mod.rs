//! Page-level components.

pub mod converter;
