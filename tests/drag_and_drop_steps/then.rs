//! Then steps for drag-and-drop BDD scenarios.

use super::world::{DragWorld, list, run_async};
use eyre::WrapErr;
use kanban_drag::board::{
    domain::{StatusId, Task, TaskId},
    ports::TaskStore,
};
use rstest_bdd_macros::then;

fn shown_column(world: &mut DragWorld, column: &str) -> Result<Vec<Task>, eyre::Report> {
    let id = StatusId::new(column).wrap_err("scenario column id")?;
    let board = world.board()?;
    board
        .live()
        .column(&id)
        .map(<[Task]>::to_vec)
        .ok_or_else(|| eyre::eyre!("column {column} is not on the board"))
}

#[then(r#"column "{column}" holds "{tasks}""#)]
fn column_holds(world: &mut DragWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let shown: Vec<String> = shown_column(world, &column)?
        .iter()
        .map(|task| task.id().to_string())
        .collect();
    let expected = list(&tasks);
    if shown != expected {
        return Err(eyre::eyre!(
            "column {column}: expected {expected:?}, found {shown:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column}" has ranks "{ranks}""#)]
fn column_has_ranks(
    world: &mut DragWorld,
    column: String,
    ranks: String,
) -> Result<(), eyre::Report> {
    let shown: Vec<i64> = shown_column(world, &column)?
        .iter()
        .map(Task::rank)
        .collect();
    let expected = list(&ranks)
        .iter()
        .map(|rank| rank.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("parse expected ranks")?;
    if shown != expected {
        return Err(eyre::eyre!(
            "column {column}: expected ranks {expected:?}, found {shown:?}"
        ));
    }
    Ok(())
}

#[then(r#"the latest task list shows "{task}" with status "{status}""#)]
fn latest_list_shows(world: &DragWorld, task: String, status: String) -> Result<(), eyre::Report> {
    let latest = world
        .observer
        .last()
        .ok_or_else(|| eyre::eyre!("task list owner was never notified"))?;
    let found = latest
        .iter()
        .find(|candidate| candidate.id().as_str() == task)
        .ok_or_else(|| eyre::eyre!("task {task} missing from the latest list"))?;
    if found.status().as_str() != status {
        return Err(eyre::eyre!(
            "task {task}: expected status {status}, found {}",
            found.status()
        ));
    }
    Ok(())
}

#[then(r#"the store holds "{task}" with status "{status}""#)]
fn store_holds(world: &DragWorld, task: String, status: String) -> Result<(), eyre::Report> {
    let id = TaskId::new(task.as_str()).wrap_err("scenario task id")?;
    let stored = run_async(world.store.get(&id))
        .wrap_err("read task from store")?
        .ok_or_else(|| eyre::eyre!("task {task} missing from store"))?;
    if stored.status().as_str() != status {
        return Err(eyre::eyre!(
            "stored task {task}: expected status {status}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("{count:usize} task records were written")]
fn records_written(world: &DragWorld, count: usize) -> Result<(), eyre::Report> {
    let written = world.store.write_count();
    if written != count {
        return Err(eyre::eyre!("expected {count} writes, found {written}"));
    }
    Ok(())
}

#[then("the task list owner was not notified")]
fn owner_not_notified(world: &DragWorld) -> Result<(), eyre::Report> {
    let notified = world.observer.count();
    if notified != 0 {
        return Err(eyre::eyre!("expected no notifications, found {notified}"));
    }
    Ok(())
}

#[then(r#"task "{task}" is not shown"#)]
fn task_not_shown(world: &mut DragWorld, task: String) -> Result<(), eyre::Report> {
    let board = world.board()?;
    if board.live().find_task(&task).is_some() {
        return Err(eyre::eyre!("task {task} should not be on the board"));
    }
    Ok(())
}
