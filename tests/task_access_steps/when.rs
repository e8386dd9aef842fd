//! When steps for task access BDD scenarios.

use super::world::{Outcome, TaskAccessWorld, run_async};
use rstest_bdd_macros::when;
use taskdesk::{
    error::ErrorKind,
    task::domain::{TaskCode, TaskPatch},
};

fn parse_code(code: &str) -> Result<TaskCode, ErrorKind> {
    TaskCode::new(code).map_err(|_| ErrorKind::TaskNotFound)
}

#[when(r#"employee "{employee_number}" lists tasks"#)]
fn lists_tasks(world: &mut TaskAccessWorld, employee_number: String) {
    let outcome = world.actor(&employee_number).and_then(|actor| {
        run_async(world.service.list(&actor))
            .map(Outcome::Tasks)
            .map_err(|err| err.kind())
    });
    world.last_outcome = Some(outcome);
}

#[when(r#"employee "{employee_number}" requests task "{code}""#)]
fn requests_task(world: &mut TaskAccessWorld, employee_number: String, code: String) {
    let outcome = world.actor(&employee_number).and_then(|actor| {
        let task_code = parse_code(&code)?;
        run_async(world.service.get(&actor, &task_code))
            .map(Outcome::Task)
            .map_err(|err| err.kind())
    });
    world.last_outcome = Some(outcome);
}

#[when(r#"employee "{employee_number}" changes the summary of task "{code}" to "{summary}""#)]
fn changes_summary(
    world: &mut TaskAccessWorld,
    employee_number: String,
    code: String,
    summary: String,
) {
    let outcome = world.actor(&employee_number).and_then(|actor| {
        let task_code = parse_code(&code)?;
        let patch = TaskPatch::new().with_summary(Some(summary));
        run_async(world.service.update(&actor, &task_code, patch))
            .map(Outcome::Task)
            .map_err(|err| err.kind())
    });
    world.last_outcome = Some(outcome);
}

#[when(r#"employee "{employee_number}" closes task "{code}""#)]
fn closes_task(world: &mut TaskAccessWorld, employee_number: String, code: String) {
    let outcome = world.actor(&employee_number).and_then(|actor| {
        let task_code = parse_code(&code)?;
        run_async(world.service.close(&actor, &task_code))
            .map(Outcome::Task)
            .map_err(|err| err.kind())
    });
    world.last_outcome = Some(outcome);
}

#[when(r#"employee "{employee_number}" removes task "{code}""#)]
fn removes_task(world: &mut TaskAccessWorld, employee_number: String, code: String) {
    let outcome = world.actor(&employee_number).and_then(|actor| {
        let task_code = parse_code(&code)?;
        run_async(world.service.remove(&actor, &task_code))
            .map(Outcome::Removed)
            .map_err(|err| err.kind())
    });
    world.last_outcome = Some(outcome);
}
