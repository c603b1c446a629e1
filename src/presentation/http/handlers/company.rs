//! Company Handlers
//!
//! Routes under `/api/companies`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::application::dto::{CompanyResponse, CreateCompaniesRequest, CreateCompanyRequest};
use crate::domain::{Company, RepositoryManager};
use crate::presentation::http::extractors::{IdList, IdPath, JsonBody, Repository};
use crate::shared::error::AppError;
use crate::shared::validation::validate;

/// Location of a single company.
pub fn company_location(id: Uuid) -> String {
    format!("/api/companies/{}", id)
}

/// Location of a collection of companies.
pub fn company_collection_location(ids: &[Uuid]) -> String {
    format!("/api/companies/collection/{}", IdList::format(ids))
}

/// Get all companies ordered by name
pub async fn get_companies(repository: Repository) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let companies = repository.company().get_all_companies(false).await?;

    Ok(Json(companies.into_iter().map(CompanyResponse::from).collect()))
}

/// Get company by ID
pub async fn get_company(
    repository: Repository,
    IdPath(id): IdPath<Uuid>,
) -> Result<Json<CompanyResponse>, AppError> {
    let Some(company) = repository.company().get_company(id, false).await? else {
        tracing::info!("Company with id: {} doesn't exist in the database.", id);
        return Err(AppError::NotFound(format!("Company with id: {} not found", id)));
    };

    Ok(Json(CompanyResponse::from(company)))
}

/// Get the companies named by an id list; all or nothing
pub async fn get_company_collection(
    repository: Repository,
    IdList(ids): IdList,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let Some(ids) = ids else {
        tracing::error!("Parameter ids is null");
        return Err(AppError::BadRequest("Parameter ids is null".into()));
    };

    let companies = repository.company().get_by_ids(&ids, false).await?;
    if companies.len() != ids.len() {
        tracing::error!("Some ids are not valid in a collection");
        return Err(AppError::NotFound("Some ids are not valid in a collection".into()));
    }

    Ok(Json(companies.into_iter().map(CompanyResponse::from).collect()))
}

/// Create one company (JSON object) or several (JSON array)
pub async fn create_company(
    repository: Repository,
    JsonBody(body): JsonBody<CreateCompaniesRequest>,
) -> Result<Response, AppError> {
    match body {
        None => {
            tracing::error!("CompanyForCreation object sent from the client is null.");
            Err(AppError::BadRequest("CompanyForCreation object is null".into()))
        }
        Some(CreateCompaniesRequest::One(request)) => create_one(&*repository, request).await,
        Some(CreateCompaniesRequest::Many(requests)) => create_many(&*repository, requests).await,
    }
}

/// Create a batch of companies
pub async fn create_company_collection(
    repository: Repository,
    JsonBody(body): JsonBody<Vec<CreateCompanyRequest>>,
) -> Result<Response, AppError> {
    let Some(requests) = body else {
        tracing::error!("Company collection sent from the client is null.");
        return Err(AppError::BadRequest("Company collection is null".into()));
    };

    create_many(&*repository, requests).await
}

/// Delete a company together with its employees
pub async fn delete_company(
    repository: Repository,
    IdPath(id): IdPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let Some(company) = repository.company().get_company(id, true).await? else {
        tracing::info!("Company with id: {} doesn't exist in the database.", id);
        return Err(AppError::NotFound(format!("Company with id: {} not found", id)));
    };

    repository.company().delete_company(&company);
    repository.save().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Stage a company and any nested employees; the caller saves.
fn stage_company(repository: &dyn RepositoryManager, request: CreateCompanyRequest) -> Company {
    let (mut company, employees) = request.into_entities();
    repository.company().create_company(&mut company);

    for mut employee in employees {
        repository.employee().create_employee(company.id, &mut employee);
    }

    company
}

async fn create_one(
    repository: &dyn RepositoryManager,
    request: CreateCompanyRequest,
) -> Result<Response, AppError> {
    validate(&request)?;

    let company = stage_company(repository, request);
    repository.save().await?;

    let location = company_location(company.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CompanyResponse::from(company)),
    )
        .into_response())
}

async fn create_many(
    repository: &dyn RepositoryManager,
    requests: Vec<CreateCompanyRequest>,
) -> Result<Response, AppError> {
    for request in &requests {
        validate(request)?;
    }

    let companies: Vec<Company> = requests
        .into_iter()
        .map(|request| stage_company(repository, request))
        .collect();
    repository.save().await?;

    let ids: Vec<Uuid> = companies.iter().map(|c| c.id).collect();
    let location = company_collection_location(&ids);
    let body: Vec<CompanyResponse> = companies.into_iter().map(CompanyResponse::from).collect();

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(body)).into_response())
}
