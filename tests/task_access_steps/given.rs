//! Given steps for task access BDD scenarios.

use super::world::{TaskAccessWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::{
    identity::domain::{EmployeeNumber, User, UserId, UserRole, UserRoleId},
    task::domain::{Task, TaskCode},
};

#[given(r#"an employee "{employee_number}" named "{name}" with role "{role}""#)]
fn employee_with_role(
    world: &mut TaskAccessWorld,
    employee_number: String,
    name: String,
    role: String,
) -> Result<(), eyre::Report> {
    let user_role = world
        .roles
        .entry(role.clone())
        .or_insert_with(|| UserRole::new(UserRoleId::new(), role))
        .clone();
    world
        .directory
        .insert_role(user_role.clone())
        .wrap_err("store role")?;
    let user = User::new(
        UserId::new(),
        EmployeeNumber::new(employee_number).wrap_err("parse employee number")?,
        name,
        user_role.id(),
    );
    world.directory.insert_user(user).wrap_err("store user")?;
    Ok(())
}

fn seed_task(
    world: &TaskAccessWorld,
    employee_number: &str,
    code: String,
    summary: String,
    sensitive: bool,
) -> Result<(), eyre::Report> {
    let owner = world
        .actor(employee_number)
        .map_err(|kind| eyre::eyre!("cannot resolve task owner: {kind}"))?;
    let task = Task::new(
        TaskCode::new(code).wrap_err("parse task code")?,
        Some(summary),
        sensitive,
        None,
        owner.id(),
    );
    run_async(world.service.create(&owner, task))
        .map_err(|err| eyre::eyre!("seed task: {err}"))?;
    Ok(())
}

#[given(r#"employee "{employee_number}" owns task "{code}" with summary "{summary}""#)]
fn owns_task(
    world: &mut TaskAccessWorld,
    employee_number: String,
    code: String,
    summary: String,
) -> Result<(), eyre::Report> {
    seed_task(world, &employee_number, code, summary, false)
}

#[given(r#"employee "{employee_number}" owns sensitive task "{code}" with summary "{summary}""#)]
fn owns_sensitive_task(
    world: &mut TaskAccessWorld,
    employee_number: String,
    code: String,
    summary: String,
) -> Result<(), eyre::Report> {
    seed_task(world, &employee_number, code, summary, true)
}

#[given(r#"employee "{employee_number}" has closed task "{code}""#)]
fn has_closed_task(
    world: &mut TaskAccessWorld,
    employee_number: String,
    code: String,
) -> Result<(), eyre::Report> {
    let owner = world
        .actor(&employee_number)
        .map_err(|kind| eyre::eyre!("cannot resolve task owner: {kind}"))?;
    let task_code = TaskCode::new(code).wrap_err("parse task code")?;
    run_async(world.service.close(&owner, &task_code))
        .map_err(|err| eyre::eyre!("close task: {err}"))?;
    Ok(())
}
