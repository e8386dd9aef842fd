//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::{
    identity::domain::UserId,
    persistence::{PgPool, get_conn_with, run_blocking_with},
    task::{
        domain::{Task, TaskCode},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, TaskRepositoryError::persistence)?;
                f(&mut connection)
            },
            TaskRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::code.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_owner(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::user_id.eq(user_id.into_inner()))
                .order(tasks::code.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_code(&self, code: &TaskCode) -> TaskRepositoryResult<Option<Task>> {
        let lookup = String::from(code.clone());
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::code.eq(lookup))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn create(&self, task: &Task) -> TaskRepositoryResult<bool> {
        let new_row = NewTaskRow {
            code: String::from(task.code().clone()),
            summary: task.summary().map(str::to_owned),
            has_sensitive_data: task.has_sensitive_data(),
            user_id: task.user_id().into_inner(),
        };
        self.run_blocking(move |connection| {
            let inserted = diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection);
            match inserted {
                Ok(count) => Ok(count > 0),
                // A concurrent insert won the race between the service's
                // existence check and this write.
                Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                    Ok(false)
                }
                Err(err) => Err(TaskRepositoryError::persistence(err)),
            }
        })
        .await
    }

    async fn update(&self, code: &TaskCode, task: &Task) -> TaskRepositoryResult<bool> {
        let target = String::from(code.clone());
        let changes = TaskChangeset {
            summary: task.summary().map(str::to_owned),
            has_sensitive_data: task.has_sensitive_data(),
            closed_date: task.closed_date(),
        };
        self.run_blocking(move |connection| {
            let count = diesel::update(tasks::table.filter(tasks::code.eq(target)))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(count > 0)
        })
        .await
    }

    async fn delete(&self, code: &TaskCode) -> TaskRepositoryResult<bool> {
        let target = String::from(code.clone());
        self.run_blocking(move |connection| {
            let count = diesel::delete(tasks::table.filter(tasks::code.eq(target)))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(count > 0)
        })
        .await
    }
}

pub(crate) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        code: persisted_code,
        summary,
        has_sensitive_data,
        closed_date,
        user_id,
    } = row;

    let code = TaskCode::new(persisted_code).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::new(
        code,
        summary,
        has_sensitive_data,
        closed_date,
        UserId::from_uuid(user_id),
    ))
}
