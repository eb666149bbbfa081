//! Calculator Server
//!
//! Host process for the calculator module: layered configuration, logging,
//! the HTTP middleware stack and graceful shutdown.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod logging;
pub mod server;
pub mod shutdown;

pub use config::{AppConfig, CliArgs};
