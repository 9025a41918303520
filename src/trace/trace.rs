use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::tree::tree_model::IdentifierModifier;

pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// First line of every traversal written to the trace file.
#[derive(Debug, Serialize)]
pub struct RunHeader {
    pub timestamp_ms: u128,

    /// Tree file or name the traversal ran over, if known
    pub source: Option<String>,

    /// Number of event lines that follow
    pub events: usize,
}

/// One composition decision made while propagating identifiers down a tree.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub depth: usize,

    /// "nested" or "root"
    pub mode: String,

    pub prefix: String,
    pub fragment: String,
    pub result: String,

    pub kind: Option<String>,
    pub label: Option<String>,
}

impl TraceEvent {
    pub fn now(depth: usize, modifier: &IdentifierModifier) -> Self {
        let (mode, fragment) = match modifier {
            IdentifierModifier::Nested(f) => ("nested", f.clone()),
            IdentifierModifier::Root(r) => ("root", r.clone()),
        };

        Self {
            timestamp_ms: now_ms(),
            depth,
            mode: mode.to_string(),
            prefix: String::new(),
            fragment,
            result: String::new(),
            kind: None,
            label: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl ToString) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_result(mut self, result: impl ToString) -> Self {
        self.result = result.to_string();
        self
    }

    pub fn with_node(mut self, kind: Option<&str>, label: Option<&str>) -> Self {
        self.kind = kind.map(str::to_string);
        self.label = label.map(str::to_string);
        self
    }
}
