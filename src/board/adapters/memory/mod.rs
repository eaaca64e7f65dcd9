//! In-memory adapters for every board port.

mod config_lookup;
mod observer;
mod task_store;

pub use config_lookup::InMemoryConfigLookup;
pub use observer::RecordingObserver;
pub use task_store::InMemoryTaskStore;
