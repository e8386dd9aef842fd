//! Shared helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::{
    api::{ApiReply, TaskApi, authenticate},
    identity::{
        adapters::memory::InMemoryIdentityRepository,
        domain::{
            EmployeeNumber, MANAGER_ROLE_DESCRIPTION, User, UserId, UserRole, UserRoleId,
        },
        services::IdentityResolutionService,
    },
    task::{
        adapters::{logging::TracingTaskEventPublisher, memory::InMemoryTaskRepository},
        services::TaskAccessService,
    },
};

/// Task handlers wired the way a process entry point would wire them.
pub type WiredApi = TaskApi<InMemoryTaskRepository, TracingTaskEventPublisher, DefaultClock>;

/// Identity service over the in-memory directory.
pub type WiredIdentity =
    IdentityResolutionService<InMemoryIdentityRepository, InMemoryIdentityRepository>;

/// Application handles shared by a test.
pub struct App {
    pub identity: WiredIdentity,
    pub tasks: WiredApi,
}

impl App {
    /// Resolves `employee_id` and fails the test if it is unknown.
    pub async fn actor(&self, employee_id: &str) -> User {
        match authenticate(&self.identity, Some(employee_id)).await {
            Ok(user) => user,
            Err(reply) => panic!("employee {employee_id} should resolve: {reply:?}"),
        }
    }
}

fn add_user(directory: &InMemoryIdentityRepository, number: &str, name: &str, role: &UserRole) {
    let employee_number = EmployeeNumber::new(number).expect("valid employee number");
    directory
        .insert_user(User::new(UserId::new(), employee_number, name, role.id()))
        .expect("user insert should succeed");
}

/// Provides an application with two developers (`341`, `342`) and a
/// manager (`900`).
#[fixture]
pub fn app() -> App {
    let directory = InMemoryIdentityRepository::new();
    let developer = UserRole::new(UserRoleId::new(), "Developer");
    let manager = UserRole::new(UserRoleId::new(), MANAGER_ROLE_DESCRIPTION);
    directory
        .insert_role(developer.clone())
        .expect("role insert should succeed");
    directory
        .insert_role(manager.clone())
        .expect("role insert should succeed");
    add_user(&directory, "341", "Ana Actor", &developer);
    add_user(&directory, "342", "Ben Other", &developer);
    add_user(&directory, "900", "Maria Manager", &manager);

    let directory = Arc::new(directory);
    let service = TaskAccessService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(TracingTaskEventPublisher::default()),
        Arc::new(DefaultClock),
    );
    App {
        identity: IdentityResolutionService::new(Arc::clone(&directory), directory),
        tasks: TaskApi::new(Arc::new(service)),
    }
}

/// Returns the reply's error as text, if it is a plain message.
#[must_use]
pub fn error_text(reply: &ApiReply) -> Option<&str> {
    reply.error().and_then(serde_json::Value::as_str)
}
