//! Domain model for the kanban board.
//!
//! Tasks are partitioned into status columns, each holding an ordered
//! sequence ranked by `sort`. The domain has no knowledge of persistence or
//! of the input device producing drag events.

mod column;
mod column_map;
mod config;
mod error;
mod ids;
mod lookup;
mod task;

pub use column::{Column, ColumnSet};
pub use column_map::ColumnTaskMap;
pub use config::{BoardConfig, UnmappedStatusPolicy};
pub use error::BoardDomainError;
pub use ids::{ColumnId, GroupId, PriorityId, StatusId, TaskId};
pub use lookup::{ConfigCatalog, ConfigItem, ConfigKind, DEFAULT_FALLBACK_COLOR};
pub use task::{PersistedTaskData, Task};
