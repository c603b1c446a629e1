//! PostgreSQL Data Store Tests
//!
//! Run against a live database with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.
//! Every test works on fresh identifiers and removes what it created.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use company_employees::domain::{Company, CompanyFilter, Employee, EmployeeFilter, RepositoryManager};
use company_employees::infrastructure::database::{
    run_migrations, Change, ChangeSet, DataStore, PgDataStore,
};
use company_employees::infrastructure::repositories::RepositoryManagerImpl;

use crate::common::{ADMIN_SOLUTIONS_ID, IT_SOLUTIONS_ID};

async fn store() -> PgDataStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to DATABASE_URL");
    run_migrations(&pool).await.expect("apply migrations");
    PgDataStore::new(pool)
}

fn company(name: &str) -> Company {
    let mut company = Company::new(name, "1 Main St", "US");
    company.id = Uuid::new_v4();
    company
}

fn employee_of(company_id: Uuid, name: &str) -> Employee {
    let mut employee = Employee::new(name, 30, "Developer");
    employee.id = Uuid::new_v4();
    employee.company_id = company_id;
    employee
}

async fn remove(store: &PgDataStore, company_id: Uuid) {
    let mut changes = ChangeSet::new();
    changes.push(Change::DeleteCompany(company_id));
    store.commit(changes).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn test_find_companies_by_id_set() {
    let store = store().await;

    let mut found = store
        .find_companies(&CompanyFilter::Ids(vec![
            IT_SOLUTIONS_ID,
            ADMIN_SOLUTIONS_ID,
            Uuid::new_v4(),
        ]))
        .await
        .unwrap();
    found.sort_by_key(|c| c.id);

    let mut expected = vec![IT_SOLUTIONS_ID, ADMIN_SOLUTIONS_ID];
    expected.sort();
    assert_eq!(found.into_iter().map(|c| c.id).collect::<Vec<_>>(), expected);
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn test_commit_company_with_employee() {
    let store = store().await;
    let acme = company("Acme");
    let ann = employee_of(acme.id, "Ann");

    let mut changes = ChangeSet::new();
    changes.push(Change::InsertCompany(acme.clone()));
    changes.push(Change::InsertEmployee(ann.clone()));
    store.commit(changes).await.unwrap();

    let found = store
        .find_employees(&EmployeeFilter::CompanyAndId {
            company_id: acme.id,
            id: ann.id,
        })
        .await
        .unwrap();
    assert_eq!(found, vec![ann]);

    remove(&store, acme.id).await;
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn test_failed_commit_rolls_back() {
    let store = store().await;
    let acme = company("Acme");
    let orphan = employee_of(Uuid::new_v4(), "Orphan");

    let mut changes = ChangeSet::new();
    changes.push(Change::InsertCompany(acme.clone()));
    changes.push(Change::InsertEmployee(orphan));

    assert!(store.commit(changes).await.is_err());
    assert!(store
        .find_companies(&CompanyFilter::Id(acme.id))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn test_delete_company_cascades_to_employees() {
    let store = store().await;
    let acme = company("Acme");

    let mut changes = ChangeSet::new();
    changes.push(Change::InsertCompany(acme.clone()));
    changes.push(Change::InsertEmployee(employee_of(acme.id, "Ann")));
    changes.push(Change::InsertEmployee(employee_of(acme.id, "Bob")));
    store.commit(changes).await.unwrap();

    remove(&store, acme.id).await;

    let left = store
        .find_employees(&EmployeeFilter::Company(acme.id))
        .await
        .unwrap();
    assert!(left.is_empty());
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn test_repository_manager_saves_through_postgres() {
    let store = store().await;
    let shared: Arc<dyn DataStore> = Arc::new(store.clone());
    let manager = RepositoryManagerImpl::new(shared.clone());

    let mut acme = Company::new("Acme", "1 Main St", "US");
    manager.company().create_company(&mut acme);
    let mut ann = Employee::new("Ann", 41, "Manager");
    manager.employee().create_employee(acme.id, &mut ann);
    manager.save().await.unwrap();

    let reader = RepositoryManagerImpl::new(shared);
    let employees = reader.employee().get_employees(acme.id, false).await.unwrap();
    assert_eq!(employees, vec![ann]);
    assert!(store.ping().await.is_ok());

    remove(&store, acme.id).await;
}
