//! Resolution of the acting user from the request's employee identifier.

use super::ApiReply;
use crate::identity::{
    domain::{EmployeeNumber, User},
    ports::{UserRepository, UserRoleRepository},
    services::IdentityResolutionService,
};

/// Resolves the acting user for a request.
///
/// # Errors
///
/// Returns a `400` reply when `employee_id` is missing or blank, and the
/// mapped status of the identity error when resolution fails.
pub async fn authenticate<U, R>(
    identity: &IdentityResolutionService<U, R>,
    employee_id: Option<&str>,
) -> Result<User, ApiReply>
where
    U: UserRepository,
    R: UserRoleRepository,
{
    let employee_number = employee_id
        .map(EmployeeNumber::new)
        .and_then(Result::ok)
        .ok_or_else(|| ApiReply::bad_request(&"employeeId cannot be empty"))?;

    identity
        .resolve(&employee_number)
        .await
        .map_err(|err| ApiReply::from_error(err.kind(), err.to_string()))
}
