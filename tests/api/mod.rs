//! REST API endpoint tests

mod employee_tests;
mod health_tests;
mod postgres_tests;
