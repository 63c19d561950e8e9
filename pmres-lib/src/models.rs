use serde::Serialize;

/// Default method reported for a request descriptor without a `method` field.
pub const UNKNOWN_METHOD: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRequest {
    pub method: String,
    pub url: String,
}

impl ResolvedRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }
}
