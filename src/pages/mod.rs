//! Page-level components.

pub mod studio;
