//! View model and page rendering for the calculator form.

use calculator_sdk::{Calculation, Operation};

use crate::domain::DomainError;

/// Data handed to a `ViewRenderer`.
///
/// `result` and `error_message` are never both set: constructors are the
/// only way to build an outcome and each fills exactly one channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub num1: Option<i32>,
    pub num2: Option<i32>,
    pub result: Option<i64>,
    pub error_message: Option<String>,
}

impl ViewModel {
    /// Blank form.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_calculation(calc: &Calculation) -> Self {
        Self {
            num1: Some(calc.operands.num1),
            num2: Some(calc.operands.num2),
            result: Some(calc.result),
            error_message: None,
        }
    }

    /// Error outcome. Operands are echoed back when they were valid; the
    /// result channel stays empty.
    #[must_use]
    pub fn from_error(err: &DomainError, num1: Option<i32>, num2: Option<i32>) -> Self {
        Self {
            num1,
            num2,
            result: None,
            error_message: Some(err.user_message()),
        }
    }
}

/// Presentation collaborator that turns a view model into a page.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &ViewModel) -> String;
}

/// Renders the calculator page as a self-contained HTML document.
#[derive(Debug, Clone)]
pub struct HtmlViewRenderer {
    title: String,
}

impl HtmlViewRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for HtmlViewRenderer {
    fn default() -> Self {
        Self::new("Calculator")
    }
}

const STYLE: &str = "body{font-family:sans-serif;max-width:28rem;margin:3rem auto}\
input{display:block;margin:.25rem 0 1rem;padding:.4rem;width:100%}\
button{margin-right:.5rem;padding:.4rem .8rem}\
.result{margin-top:1.5rem;font-weight:bold}\
.error{margin-top:1.5rem;color:#b00020}";

impl ViewRenderer for HtmlViewRenderer {
    fn render(&self, view: &ViewModel) -> String {
        let title = escape_html(&self.title);
        let num1 = view.num1.map(|n| n.to_string()).unwrap_or_default();
        let num2 = view.num2.map(|n| n.to_string()).unwrap_or_default();

        let buttons: String = Operation::ALL
            .iter()
            .map(|op| {
                format!(
                    r#"<button type="submit" formaction="/calculator/{}">{}</button>"#,
                    op.as_str(),
                    op.label()
                )
            })
            .collect();

        let result = view
            .result
            .map(|result| format!(r#"<div class="result">Result: {result}</div>"#))
            .unwrap_or_default();
        let error = view
            .error_message
            .as_deref()
            .map(|message| {
                format!(
                    r#"<div class="error" role="alert">{}</div>"#,
                    escape_html(message)
                )
            })
            .unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLE}</style></head>\n\
<body>\n\
<h1>{title}</h1>\n\
<form method=\"post\" action=\"/calculator/add\">\n\
<label for=\"num1\">Number 1</label>\
<input type=\"number\" id=\"num1\" name=\"num1\" value=\"{num1}\" required>\n\
<label for=\"num2\">Number 2</label>\
<input type=\"number\" id=\"num2\" name=\"num2\" value=\"{num2}\" required>\n\
{buttons}\n\
</form>\n\
{result}{error}\n\
</body>\n\
</html>\n"
        )
    }
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
