//! Request DTOs
//!
//! Creation payloads for API request bodies. None of them carry an
//! identifier; IDs are assigned when the entity is staged for insert.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{Company, Employee};

/// Create company request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 60, message = "Name must be 1-60 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 60, message = "Address must be 1-60 characters"))]
    pub address: String,

    #[validate(length(min = 1, max = 60, message = "Country must be 1-60 characters"))]
    pub country: String,

    /// Employees created together with the company
    #[serde(default)]
    #[validate(nested)]
    pub employees: Vec<CreateEmployeeRequest>,
}

impl CreateCompanyRequest {
    /// Map into an unsaved company and its unsaved employees.
    pub fn into_entities(self) -> (Company, Vec<Employee>) {
        let company = Company::new(self.name, self.address, self.country);
        let employees = self.employees.into_iter().map(Employee::from).collect();
        (company, employees)
    }
}

/// Create employee request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 30, message = "Name must be 1-30 characters"))]
    pub name: String,

    #[validate(range(min = 0, message = "Age must not be negative"))]
    pub age: i32,

    #[validate(length(min = 1, max = 20, message = "Position must be 1-20 characters"))]
    pub position: String,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(request: CreateEmployeeRequest) -> Self {
        Employee::new(request.name, request.age, request.position)
    }
}

/// Body of `POST /api/companies`: a single company or a batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreateCompaniesRequest {
    Many(Vec<CreateCompanyRequest>),
    One(CreateCompanyRequest),
}
