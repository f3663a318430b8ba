//! ==============================================================================
//! render.rs - results view model
//! ==============================================================================
//!
//! purpose:
//!     turns a decoded `QueryResult` into what the results area shows.
//!     the dashboard renders these values as text nodes, so nothing here
//!     produces markup and no escaping is needed.
//!
//! ==============================================================================

use serde_json::Value;

use crate::payload::{QueryResult, Record};

pub const NO_RESULTS: &str = "No results found.";
pub const CONFIGURED: &str = "✅ Rate limiting configured successfully";

/// fields tried, in order, for a card heading
pub const HEADING_KEYS: [&str; 2] = ["name", "title"];

const FALLBACK_HEADING: &str = "Result";

/// contents of the results area
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    #[default]
    Cleared,
    Placeholder(String),
    Text(String),
    Cards(Vec<Card>),
    Confirmation(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub heading: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// humanized key, without the trailing colon
    pub label: String,
    pub value: String,
}

impl ResultsView {
    pub fn is_cleared(&self) -> bool {
        matches!(self, ResultsView::Cleared)
    }
}

// ==============================================================================
// rendering
// ==============================================================================

pub fn render_results(result: QueryResult) -> ResultsView {
    match result {
        QueryResult::Empty => ResultsView::Placeholder(NO_RESULTS.to_string()),
        QueryResult::Text(text) => ResultsView::Text(text),
        QueryResult::Records(records) if records.is_empty() => {
            ResultsView::Placeholder(NO_RESULTS.to_string())
        }
        QueryResult::Records(records) => {
            ResultsView::Cards(records.iter().map(render_card).collect())
        }
    }
}

fn render_card(record: &Record) -> Card {
    let heading = HEADING_KEYS.iter().find_map(|key| {
        record
            .get(key)
            .and_then(heading_text)
            .map(|text| (*key, text))
    });

    let rows = record
        .fields
        .iter()
        .filter(|(key, _)| {
            heading
                .as_ref()
                .map_or(true, |(used, _)| *used != key.as_str())
        })
        .map(|(key, value)| Row {
            label: humanize_key(key),
            value: display_value(value),
        })
        .collect();

    Card {
        heading: heading
            .map(|(_, text)| text)
            .unwrap_or_else(|| FALLBACK_HEADING.to_string()),
        rows,
    }
}

/// a heading candidate counts only when it has something to show
fn heading_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(display_value(other)),
    }
}

/// arrays are joined with ", ", strings shown bare, everything else as json
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// `release_year` -> `Release Year`
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

// ==============================================================================
// tests
// ==============================================================================
