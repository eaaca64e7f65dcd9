//! When steps for drag-and-drop BDD scenarios.

use super::world::{DragWorld, run_async};
use rstest_bdd_macros::when;

#[when("the board is shown")]
fn board_is_shown(world: &mut DragWorld) -> Result<(), eyre::Report> {
    world.board()?;
    Ok(())
}

#[when(r#"task "{task}" is dropped on "{target}""#)]
fn task_dropped_on(
    world: &mut DragWorld,
    task: String,
    target: String,
) -> Result<(), eyre::Report> {
    let board = world.board()?;
    board.on_drag_start(&task);
    board.on_drag_over(&task, Some(&target));
    let outcome = board.on_drag_end(&task, Some(&target));
    if outcome.tasks().is_none() {
        return Err(eyre::eyre!("drop of {task} on {target} was cancelled"));
    }
    world.last_report = Some(run_async(outcome.into_writes().wait()));
    Ok(())
}

#[when(r#"task "{task}" is dragged over "{target}" and released outside the board"#)]
fn task_released_outside(
    world: &mut DragWorld,
    task: String,
    target: String,
) -> Result<(), eyre::Report> {
    let board = world.board()?;
    board.on_drag_start(&task);
    board.on_drag_over(&task, Some(&target));
    let outcome = board.on_drag_end(&task, None);
    world.last_report = Some(run_async(outcome.into_writes().wait()));
    Ok(())
}
