//! Employee Handlers
//!
//! Routes under `/api/companies/{company_id}/employees`. Every handler
//! resolves the owning company first and answers 404 if it is missing.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::application::dto::{CreateEmployeeRequest, EmployeeResponse};
use crate::domain::{Company, Employee, RepositoryManager};
use crate::presentation::http::extractors::{IdPath, JsonBody, Repository};
use crate::shared::error::AppError;
use crate::shared::validation::validate;

/// Location of a single employee.
pub fn employee_location(company_id: Uuid, id: Uuid) -> String {
    format!("/api/companies/{}/employees/{}", company_id, id)
}

async fn require_company(
    repository: &dyn RepositoryManager,
    company_id: Uuid,
) -> Result<Company, AppError> {
    match repository.company().get_company(company_id, false).await? {
        Some(company) => Ok(company),
        None => {
            tracing::info!("Company with id: {} doesn't exist in the database.", company_id);
            Err(AppError::NotFound(format!("Company with id: {} not found", company_id)))
        }
    }
}

/// Get all employees of a company
pub async fn get_employees_for_company(
    repository: Repository,
    IdPath(company_id): IdPath<Uuid>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    require_company(&*repository, company_id).await?;

    let employees = repository.employee().get_employees(company_id, false).await?;

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

/// Get one employee of a company
pub async fn get_employee_for_company(
    repository: Repository,
    IdPath((company_id, id)): IdPath<(Uuid, Uuid)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    require_company(&*repository, company_id).await?;

    let Some(employee) = repository.employee().get_employee(company_id, id, false).await? else {
        tracing::info!("Employee with id: {} doesn't exist in the database.", id);
        return Err(AppError::NotFound(format!("Employee with id: {} not found", id)));
    };

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Create an employee for a company
pub async fn create_employee_for_company(
    repository: Repository,
    IdPath(company_id): IdPath<Uuid>,
    JsonBody(body): JsonBody<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_company(&*repository, company_id).await?;

    let Some(request) = body else {
        tracing::error!("EmployeeForCreation object sent from the client is null.");
        return Err(AppError::BadRequest("EmployeeForCreation object is null".into()));
    };
    validate(&request)?;

    let mut employee = Employee::from(request);
    repository.employee().create_employee(company_id, &mut employee);
    repository.save().await?;

    let location = employee_location(company_id, employee.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EmployeeResponse::from(employee)),
    ))
}

/// Delete an employee of a company.
///
/// A missing employee answers 400, not 404; existing clients depend on it.
pub async fn delete_employee_for_company(
    repository: Repository,
    IdPath((company_id, id)): IdPath<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    require_company(&*repository, company_id).await?;

    let Some(employee) = repository.employee().get_employee(company_id, id, true).await? else {
        tracing::error!("Employee with id: {} doesn't exist in the database.", id);
        return Err(AppError::BadRequest(format!("Employee with id: {} not found", id)));
    };

    repository.employee().delete_employee(&employee);
    repository.save().await?;

    Ok(StatusCode::NO_CONTENT)
}
