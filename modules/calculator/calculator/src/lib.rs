//! Calculator Module
//!
//! A web calculator over two integer operands.
//!
//! ## Architecture
//!
//! - `domain/model.rs` - Computation model (the four operations)
//! - `domain/validation.rs` - Operand and operation validation
//! - `domain/service.rs` - Domain service used by every transport
//! - `api/rest/` - HTML form handlers, JSON API, Problem mapping, view rendering
//! - `module.rs` - Module wiring and route registration
//!
//! Other modules should depend on `calculator-sdk` and use the
//! `CalculatorClient` returned by [`CalculatorModule::client`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

pub mod config;
pub use config::CalculatorConfig;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
