//! Kanban board with drag-and-drop reordering.
//!
//! Tasks are grouped into status columns. A drag gesture reorders a column
//! live while the pointer moves and, on drop, either keeps that order or
//! moves the task into another column computed from the drag-start snapshot.
//! The result is folded back into the canonical task list, persisted in the
//! background and handed to the list owner. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Drag engine and board controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
