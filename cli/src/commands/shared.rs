use crate::client::prompt_for_path;
use crate::commands::validators;
use crate::core::error::PmresError;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text, markdown or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CollectionArgs {
    #[arg(
        short = 'c',
        long = "collection",
        help = "Path to the Postman collection JSON file (prompted for when omitted)",
        value_parser = validators::validate_file_exists
    )]
    pub collection: Option<String>,
}

#[derive(Debug, Args)]
pub struct EnvironmentArgs {
    #[arg(
        short = 'e',
        long = "environment",
        alias = "env",
        help = "Path to the Postman environment JSON file (prompted for when omitted)",
        value_parser = validators::validate_file_exists
    )]
    pub environment: Option<String>,
}

/// Returns the path given on the command line, or asks for one on stderr.
pub fn path_or_prompt(given: Option<&str>, prompt: &str) -> Result<String, PmresError> {
    match given {
        Some(path) => Ok(path.to_string()),
        None => prompt_for_path(prompt, &mut std::io::stdin().lock(), &mut std::io::stderr()),
    }
}
