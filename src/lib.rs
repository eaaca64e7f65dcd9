//! Kanban drag: the drag-and-drop engine behind a status-column task board.
//!
//! This crate turns drag input events over a set of columns into a new,
//! consistent arrangement of tasks, keeps a parent-owned canonical task list
//! in sync, and persists changed tasks without blocking the visible update.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence, lookups and
//!   notification
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Column grouping, drag sessions, reorder and move resolution,
//!   and synchronization

pub mod board;
