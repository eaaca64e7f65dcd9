//! Step definitions for kanban drag-and-drop behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
