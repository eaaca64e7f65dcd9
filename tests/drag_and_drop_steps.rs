//! Behaviour tests for kanban drag and drop.

#[path = "drag_and_drop_steps/mod.rs"]
mod drag_and_drop_steps_defs;

use drag_and_drop_steps_defs::world::{DragWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Move a task into an empty column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_into_empty_column(world: DragWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Reorder a task to the top of its column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_task_to_top(world: DragWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Cancel a drag by releasing outside the board"
)]
#[tokio::test(flavor = "multi_thread")]
async fn cancel_drag_outside_board(world: DragWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/drag_and_drop.feature",
    name = "Tasks with an unknown status stay off the board"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_stays_off_board(world: DragWorld) {
    let _ = world;
}
