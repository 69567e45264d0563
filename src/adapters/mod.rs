//! Adapters Layer - Concrete Implementations of the Ports
//!
//! - `persistence`: the two store backends (in-memory, file snapshot)
//! - `http`: the axum REST surface under `/api/v1`

pub mod http;
pub mod persistence;
