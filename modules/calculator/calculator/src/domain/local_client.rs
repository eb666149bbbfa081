//! Local client implementation for the calculator SDK trait.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{Calculation, CalculatorClient, CalculatorError, Operands, Operation};

use super::service::Service;

/// In-process `CalculatorClient` backed directly by the domain `Service`.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClient for CalculatorLocalClient {
    async fn calculate(
        &self,
        operation: Operation,
        operands: Operands,
    ) -> Result<Calculation, CalculatorError> {
        self.service
            .calculate(operation, operands)
            .map_err(CalculatorError::from)
    }
}
