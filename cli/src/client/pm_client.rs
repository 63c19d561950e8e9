use super::loader::load_json_document;
use super::pm_client_models::{RequestRow, ResolveConfig, ResolveOutcome, VariableRow};
use crate::core::error::PmresError;
use crate::core::logger::Logger;
use crate::debug_log;
use pmres_lib::{
    build_variable_map, collection_items, unresolved_placeholders, walk, VariableMap, WalkReport,
};
use std::path::Path;

pub struct PmClient {
    config: ResolveConfig,
}

impl PmClient {
    pub fn new(config: ResolveConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<ResolveOutcome, PmresError> {
        let collection = load_json_document(Path::new(&self.config.collection_path))?;
        let environment = load_json_document(Path::new(&self.config.environment_path))?;

        let variables = build_variable_map(&environment);
        debug_log!("Loaded {} enabled variable(s)", variables.len());

        if variables.is_empty() {
            return Ok(ResolveOutcome::NoVariables);
        }

        let report = walk(collection_items(&collection), &variables);
        Self::log_report(&report);

        Ok(ResolveOutcome::Resolved(RequestRow::numbered(report.requests)))
    }

    pub fn list_variables(environment_path: &Path) -> Result<Vec<VariableRow>, PmresError> {
        let environment = load_json_document(environment_path)?;
        let variables = build_variable_map(&environment);
        debug_log!("Loaded {} enabled variable(s)", variables.len());

        Ok(variables
            .into_iter()
            .map(|(key, value)| VariableRow { key, value })
            .collect())
    }

    /// Lists requests with their raw URLs, placeholders untouched.
    pub fn list_requests(collection_path: &Path) -> Result<Vec<RequestRow>, PmresError> {
        let collection = load_json_document(collection_path)?;
        let report = walk(collection_items(&collection), &VariableMap::new());
        Self::log_report(&report);

        Ok(RequestRow::numbered(report.requests))
    }

    fn log_report(report: &WalkReport) {
        debug_log!(
            "Found {} request(s), skipped {} malformed request(s)",
            report.requests.len(),
            report.skipped
        );
        for (i, request) in report.requests.iter().enumerate() {
            let unresolved = unresolved_placeholders(&request.url);
            if !unresolved.is_empty() {
                Logger::debug(&format!(
                    "Request {} has unresolved placeholder(s): {}",
                    i + 1,
                    unresolved.join(", ")
                ));
            }
        }
    }
}
