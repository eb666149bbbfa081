//! Domain layer for the calculator module
//!
//! Contains the computation model, input validation and the service that
//! ties them together.

pub mod error;
pub mod local_client;
pub mod model;
pub mod service;
pub mod validation;

pub use error::DomainError;
pub use model::Calculator;
pub use service::Service;
