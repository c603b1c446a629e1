//! Application Layer
//!
//! Data transfer objects exchanged at the API boundary and their mapping
//! to and from domain entities.

pub mod dto;
