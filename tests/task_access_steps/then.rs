//! Then steps for task access BDD scenarios.

use super::world::{Outcome, TaskAccessWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskdesk::task::{
    domain::{REDACTION_PLACEHOLDER, Task, TaskCode},
    ports::TaskRepository,
};

fn listed_task<'a>(world: &'a TaskAccessWorld, code: &str) -> Result<&'a Task, eyre::Report> {
    let Ok(Outcome::Tasks(tasks)) = world.outcome()? else {
        return Err(eyre::eyre!("expected a successful listing"));
    };
    tasks
        .iter()
        .find(|task| task.code().as_str() == code)
        .ok_or_else(|| eyre::eyre!("task {code} missing from listing"))
}

#[then(r#"the returned task has summary "{summary}""#)]
fn returned_task_has_summary(world: &TaskAccessWorld, summary: String) -> Result<(), eyre::Report> {
    let Ok(Outcome::Task(task)) = world.outcome()? else {
        return Err(eyre::eyre!("expected a single task to be returned"));
    };
    if task.summary() != Some(summary.as_str()) {
        return Err(eyre::eyre!(
            "expected summary {summary:?}, found {:?}",
            task.summary()
        ));
    }
    Ok(())
}

#[then(r#"the listed task "{code}" shows the redaction placeholder"#)]
fn listed_task_is_redacted(world: &TaskAccessWorld, code: String) -> Result<(), eyre::Report> {
    let task = listed_task(world, &code)?;
    if task.summary() != Some(REDACTION_PLACEHOLDER) {
        return Err(eyre::eyre!(
            "expected task {code} to be redacted, found {:?}",
            task.summary()
        ));
    }
    Ok(())
}

#[then(r#"the listed task "{code}" has summary "{summary}""#)]
fn listed_task_has_summary(
    world: &TaskAccessWorld,
    code: String,
    summary: String,
) -> Result<(), eyre::Report> {
    let task = listed_task(world, &code)?;
    if task.summary() != Some(summary.as_str()) {
        return Err(eyre::eyre!(
            "expected summary {summary:?} for {code}, found {:?}",
            task.summary()
        ));
    }
    Ok(())
}

#[then(r#"the request fails with "{kind}""#)]
fn request_fails_with(world: &TaskAccessWorld, kind: String) -> Result<(), eyre::Report> {
    match world.outcome()? {
        Err(actual) if actual.as_str() == kind => Ok(()),
        Err(actual) => Err(eyre::eyre!("expected {kind}, got {actual}")),
        Ok(outcome) => Err(eyre::eyre!("expected {kind}, got success {outcome:?}")),
    }
}

#[then("the request succeeds")]
fn request_succeeds(world: &TaskAccessWorld) -> Result<(), eyre::Report> {
    match world.outcome()? {
        Ok(_) => Ok(()),
        Err(kind) => Err(eyre::eyre!("expected success, got {kind}")),
    }
}

#[then(r#"employee "{employee_number}" sees task "{code}" with summary "{summary}""#)]
fn employee_sees_summary(
    world: &TaskAccessWorld,
    employee_number: String,
    code: String,
    summary: String,
) -> Result<(), eyre::Report> {
    let actor = world
        .actor(&employee_number)
        .map_err(|kind| eyre::eyre!("cannot resolve actor: {kind}"))?;
    let task_code = TaskCode::new(code).wrap_err("parse task code")?;
    let task = run_async(world.service.get(&actor, &task_code))
        .map_err(|err| eyre::eyre!("fetch task: {err}"))?;
    if task.summary() != Some(summary.as_str()) {
        return Err(eyre::eyre!(
            "expected summary {summary:?}, found {:?}",
            task.summary()
        ));
    }
    Ok(())
}

#[then(r#"task "{code}" is still sensitive and open"#)]
fn task_still_sensitive_and_open(world: &TaskAccessWorld, code: String) -> Result<(), eyre::Report> {
    let task_code = TaskCode::new(code).wrap_err("parse task code")?;
    let stored = run_async(world.repository.find_by_code(&task_code))
        .wrap_err("load stored task")?
        .ok_or_else(|| eyre::eyre!("task {task_code} missing from store"))?;
    if !stored.has_sensitive_data() || stored.is_closed() {
        return Err(eyre::eyre!("expected an open sensitive task, found {stored:?}"));
    }
    Ok(())
}

#[then(r#"a closing notification for task "{code}" names "{name}""#)]
fn closing_notification_names(
    world: &TaskAccessWorld,
    code: String,
    name: String,
) -> Result<(), eyre::Report> {
    let events = world.publisher.published();
    let event = events
        .iter()
        .find(|event| event.code().as_str() == code)
        .ok_or_else(|| eyre::eyre!("no closing notification for {code}"))?;
    if event.closed_by_name() != name {
        return Err(eyre::eyre!(
            "expected notification by {name}, found {}",
            event.closed_by_name()
        ));
    }
    if !event.message().contains(&format!("Task {code} has been closed by {name}")) {
        return Err(eyre::eyre!("unexpected message {:?}", event.message()));
    }
    Ok(())
}
