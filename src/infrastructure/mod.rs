//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Data stores (PostgreSQL, in-memory) and the unit of work
//! - Repository implementations
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
