//! Given steps for drag-and-drop BDD scenarios.

use super::world::{DragWorld, list, seeded_task};
use rstest_bdd_macros::given;

#[given(r#"a board with columns "{columns}""#)]
fn board_with_columns(world: &mut DragWorld, columns: String) {
    world.column_ids = list(&columns);
}

#[given(r#"task "{task}" in column "{column}" with rank {rank:i64}"#)]
fn task_in_column(
    world: &mut DragWorld,
    task: String,
    column: String,
    rank: i64,
) -> Result<(), eyre::Report> {
    if world.board.is_some() {
        return Err(eyre::eyre!("tasks must be seeded before the board is shown"));
    }
    world.seed.push(seeded_task(&task, &column, rank)?);
    Ok(())
}
