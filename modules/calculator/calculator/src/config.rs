use serde::{Deserialize, Serialize};

/// Configuration for the calculator module.
///
/// Read from `modules.calculator.config`; every field has a default so the
/// section may be omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Title shown in the page header and `<title>` element.
    pub page_title: String,
    /// Mount the JSON API and its OpenAPI document next to the HTML form.
    pub expose_api: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            page_title: "Calculator".to_owned(),
            expose_api: true,
        }
    }
}
