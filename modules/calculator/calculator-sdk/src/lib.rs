//! Calculator SDK
//!
//! This crate provides the public contract of the calculator module:
//! - `CalculatorClient` trait
//! - Model types (`Operation`, `Operands`, `Calculation`)
//! - Error type (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Operands, Operation};
//!
//! let calculation = client.calculate(Operation::Divide, Operands::new(7, 2)).await?;
//! assert_eq!(calculation.result, 3);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::CalculatorClient;
pub use errors::CalculatorError;
pub use models::{Calculation, Operands, Operation, UnknownOperation};
