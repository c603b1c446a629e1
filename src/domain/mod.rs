//! # Domain Layer
//!
//! Core entities and the data access contracts the rest of the crate
//! programs against.
//!
//! ## Structure
//!
//! - **entities**: Company and Employee plus their repository traits
//! - **repository**: the `RepositoryManager` facade that commits staged changes
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts

pub mod entities;
pub mod repository;

// Re-export commonly used types
pub use entities::*;
pub use repository::RepositoryManager;
