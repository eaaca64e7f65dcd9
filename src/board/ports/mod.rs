//! Port contracts for the board.
//!
//! Ports define the collaborators the drag engine talks to without knowing
//! their implementation: task persistence, configuration lookups and the
//! consumer that owns the canonical task list.

pub mod lookup;
pub mod observer;
pub mod store;

pub use lookup::{ConfigLookup, ConfigLookupError, ConfigLookupResult};
pub use observer::TaskListObserver;
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
