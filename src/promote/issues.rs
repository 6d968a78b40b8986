//! Validation issues returned by a rejected promotion.
//!
//! The service reports either plain messages or structured check results. Structured
//! results come flat (`{method, description, link}`) or grouped by severity and check
//! name (`{"errors": {"V001": [{description, link}]}}`); both are flattened into
//! [`Issue`] records before rendering.

use serde_json::{Map, Value};
use std::io::Write;
use termcolor::{Buffer, ColorSpec, WriteColor};

/// Preamble of every rendered validation failure
pub const FAILURE_PREAMBLE: &str = "Promotion failed for the following reasons:\n\n";

/// One normalized validation issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Check or method that produced the issue, empty when unknown
    pub method: String,
    /// What is wrong
    pub description: String,
    /// Documentation link for the issue
    pub link: Option<String>,
}

/// Errors carried by a validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrors {
    /// Every entry was a plain string
    Messages(Vec<String>),
    /// Structured issues, already flattened
    Issues(Vec<Issue>),
}

/// How documentation links are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// No escape codes
    Plain,
    /// ANSI dimmed text
    Muted,
}

impl ValidationErrors {
    /// Classify a non-empty `errors` sequence
    pub fn from_values(errors: &[Value]) -> Self {
        if errors.iter().all(Value::is_string) {
            ValidationErrors::Messages(
                errors
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            ValidationErrors::Issues(flatten(errors))
        }
    }

    /// Human readable failure text, preamble included
    pub fn render(&self, style: LinkStyle) -> String {
        let lines: Vec<String> = match self {
            ValidationErrors::Messages(messages) => {
                messages.iter().map(|message| format!("* {message}")).collect()
            }
            ValidationErrors::Issues(issues) => {
                issues.iter().map(|issue| render_issue(issue, style)).collect()
            }
        };
        format!("{FAILURE_PREAMBLE}{}", lines.join("\n"))
    }
}

fn render_issue(issue: &Issue, style: LinkStyle) -> String {
    let bullet = if issue.method.is_empty() {
        format!("* {}", issue.description)
    } else {
        format!("* {}: {}", issue.method, issue.description)
    };

    match &issue.link {
        Some(link) => format!("{bullet}\n {}", styled_link(link, style)),
        None => bullet,
    }
}

fn styled_link(link: &str, style: LinkStyle) -> String {
    if style == LinkStyle::Plain {
        return link.to_string();
    }

    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_dimmed(true));
    let _ = write!(&mut buffer, "{link}");
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

/// Flatten structured issues into a uniform list
pub fn flatten(errors: &[Value]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for error in errors {
        flatten_value(error, None, &mut issues);
    }
    issues
}

fn flatten_value(value: &Value, method: Option<&str>, out: &mut Vec<Issue>) {
    match value {
        Value::String(text) => out.push(Issue {
            method: method.unwrap_or_default().to_string(),
            description: text.clone(),
            link: None,
        }),
        Value::Array(items) => {
            for item in items {
                flatten_value(item, method, out);
            }
        }
        Value::Object(map) if map.contains_key("description") => {
            out.push(issue_from_object(map, method));
        }
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_value(nested, Some(key.as_str()), out);
            }
        }
        other => out.push(Issue {
            method: method.unwrap_or_default().to_string(),
            description: other.to_string(),
            link: None,
        }),
    }
}

fn issue_from_object(map: &Map<String, Value>, method: Option<&str>) -> Issue {
    let text = |key: &str| map.get(key).and_then(Value::as_str);
    let description = match map.get("description") {
        Some(Value::String(description)) => description.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    Issue {
        method: text("method")
            .or_else(|| text("name"))
            .or(method)
            .unwrap_or_default()
            .to_string(),
        description,
        link: text("link").filter(|link| !link.is_empty()).map(str::to_string),
    }
}
