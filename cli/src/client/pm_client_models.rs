use crate::core::formatter::TableRow;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRow {
    pub index: usize,
    pub method: String,
    pub url: String,
}

impl RequestRow {
    /// Numbers requests from 1 in the order they were resolved.
    pub fn numbered(requests: Vec<pmres_lib::ResolvedRequest>) -> Vec<Self> {
        requests
            .into_iter()
            .enumerate()
            .map(|(i, request)| RequestRow {
                index: i + 1,
                method: request.method,
                url: request.url,
            })
            .collect()
    }
}

impl TableRow for RequestRow {
    fn headers() -> &'static [&'static str] {
        &["Index", "Method", "URL"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.index.to_string(), self.method.clone(), self.url.clone()]
    }

    fn markdown_headers() -> &'static [&'static str] {
        &["S.No", "Method", "API URL"]
    }

    fn markdown_alignment() -> &'static [&'static str] {
        &[":----:", ":-------", ":--------"]
    }

    fn markdown_cells(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            format!("`{}`", self.method),
            self.url.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableRow {
    pub key: String,
    pub value: String,
}

impl TableRow for VariableRow {
    fn headers() -> &'static [&'static str] {
        &["Key", "Value"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.key.clone(), self.value.clone()]
    }

    fn markdown_alignment() -> &'static [&'static str] {
        &[":----", ":------"]
    }
}

/// Outcome of `resolve`: either the variable map was empty and nothing was
/// resolved, or the resolved requests in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    NoVariables,
    Resolved(Vec<RequestRow>),
}

pub struct ResolveConfig {
    pub collection_path: String,
    pub environment_path: String,
}
