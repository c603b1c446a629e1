//! Employee API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{
    assert_error, body_json, location, TestApp, ADMIN_SOLUTIONS_ID, IT_SOLUTIONS_ID,
    JANA_MCLEARY_ID, KANE_MILLER_ID, SAM_RAIDEN_ID,
};

fn employees_uri(company_id: Uuid) -> String {
    format!("/api/companies/{}/employees", company_id)
}

fn employee_uri(company_id: Uuid, id: Uuid) -> String {
    format!("/api/companies/{}/employees/{}", company_id, id)
}

#[tokio::test]
async fn test_get_employees_for_company() {
    let app = TestApp::new();

    let response = app.get(&employees_uri(IT_SOLUTIONS_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    // Jana McLeary sorts before Sam Raiden
    assert_eq!(
        ids,
        vec![JANA_MCLEARY_ID.to_string(), SAM_RAIDEN_ID.to_string()]
    );
}

#[tokio::test]
async fn test_employee_response_has_no_company_id() {
    let app = TestApp::new();

    let response = app.get(&employee_uri(ADMIN_SOLUTIONS_ID, KANE_MILLER_ID)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": KANE_MILLER_ID,
            "name": "Kane Miller",
            "age": 35,
            "position": "Administrator"
        })
    );
}

#[tokio::test]
async fn test_get_employee_of_another_company_is_not_found() {
    let app = TestApp::new();

    let response = app.get(&employee_uri(ADMIN_SOLUTIONS_ID, SAM_RAIDEN_ID)).await;
    assert_error(response, StatusCode::NOT_FOUND, 10001).await;
}

#[tokio::test]
async fn test_missing_company_is_not_found_for_every_employee_operation() {
    let app = TestApp::new();
    let company_id = Uuid::new_v4();

    let response = app.get(&employees_uri(company_id)).await;
    assert_error(response, StatusCode::NOT_FOUND, 10001).await;

    // Even an employee that exists elsewhere
    let response = app.get(&employee_uri(company_id, SAM_RAIDEN_ID)).await;
    assert_error(response, StatusCode::NOT_FOUND, 10001).await;

    let response = app
        .post_json(
            &employees_uri(company_id),
            r#"{"name":"Ann","age":41,"position":"Manager"}"#,
        )
        .await;
    assert_error(response, StatusCode::NOT_FOUND, 10001).await;

    // The company check runs before the null body check
    let response = app.post_json(&employees_uri(company_id), "null").await;
    assert_error(response, StatusCode::NOT_FOUND, 10001).await;

    let response = app.delete(&employee_uri(company_id, Uuid::new_v4())).await;
    assert_error(response, StatusCode::NOT_FOUND, 10001).await;

    assert_eq!(app.store.employee_count(), 3);
}

#[tokio::test]
async fn test_malformed_ids_are_bad_request() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/companies/{}/employees/xyz", IT_SOLUTIONS_ID))
        .await;
    assert_error(response, StatusCode::BAD_REQUEST, 10002).await;

    let response = app.get("/api/companies/xyz/employees").await;
    assert_error(response, StatusCode::BAD_REQUEST, 10002).await;

    let response = app
        .delete(&format!("/api/companies/{}/employees/xyz", IT_SOLUTIONS_ID))
        .await;
    assert_error(response, StatusCode::BAD_REQUEST, 10002).await;
    assert_eq!(app.store.employee_count(), 3);
}

#[tokio::test]
async fn test_create_employee_then_get_returns_same_fields() {
    let app = TestApp::new();

    let response = app
        .post_json(
            &employees_uri(ADMIN_SOLUTIONS_ID),
            r#"{"name":"Ann","age":41,"position":"Manager"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = location(&response);
    let created = body_json(response).await;
    let id = Uuid::parse_str(created["id"].as_str().unwrap()).unwrap();
    assert_eq!(location, employee_uri(ADMIN_SOLUTIONS_ID, id));

    let fetched = app.get(&location).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await, created);
    assert_eq!(app.store.employee_count(), 4);
}

#[tokio::test]
async fn test_create_employee_with_null_body_is_bad_request() {
    let app = TestApp::new();

    let response = app.post_json(&employees_uri(IT_SOLUTIONS_ID), "null").await;
    assert_error(response, StatusCode::BAD_REQUEST, 10002).await;
    assert_eq!(app.store.employee_count(), 3);
}

#[tokio::test]
async fn test_create_employee_failing_validation_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_json(
            &employees_uri(IT_SOLUTIONS_ID),
            r#"{"name":"Ann","age":-1,"position":"Manager"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 10007);
    assert_eq!(body["errors"][0]["field"], "age");
    assert_eq!(app.store.employee_count(), 3);
}

#[tokio::test]
async fn test_delete_employee() {
    let app = TestApp::new();

    let response = app.delete(&employee_uri(IT_SOLUTIONS_ID, SAM_RAIDEN_ID)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.store.employee_count(), 2);

    let response = app.get(&employee_uri(IT_SOLUTIONS_ID, SAM_RAIDEN_ID)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_employee_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .delete(&employee_uri(IT_SOLUTIONS_ID, Uuid::new_v4()))
        .await;
    assert_error(response, StatusCode::BAD_REQUEST, 10002).await;
    assert_eq!(app.store.company_count(), 2);
    assert_eq!(app.store.employee_count(), 3);
}

#[tokio::test]
async fn test_delete_employee_of_another_company_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .delete(&employee_uri(ADMIN_SOLUTIONS_ID, SAM_RAIDEN_ID))
        .await;
    assert_error(response, StatusCode::BAD_REQUEST, 10002).await;
    assert_eq!(app.store.employee_count(), 3);
}
