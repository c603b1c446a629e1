//! # Company Employees Library
//!
//! This crate provides a REST API over companies and the employees they own:
//! - RESTful HTTP API endpoints under `/api/companies`
//! - PostgreSQL for persistent storage (or an in-memory store for development)
//! - A repository manager that stages changes and commits them on `save`
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities and repository traits
//! - **Application Layer**: Transfer objects and entity mapping
//! - **Infrastructure Layer**: Data stores, repositories, metrics
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! company_employees/
//! +-- config/         Configuration management
//! +-- domain/         Entities, filters, and repository traits
//! +-- application/    DTOs and entity mapping
//! +-- infrastructure/ Database, repositories, and metrics
//! +-- presentation/   HTTP routes, handlers, and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Transfer objects
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
