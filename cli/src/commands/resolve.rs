use crate::client::{PmClient, ResolveConfig, ResolveOutcome, COLLECTION_PROMPT, ENVIRONMENT_PROMPT};
use crate::commands::shared::{path_or_prompt, CollectionArgs, EnvironmentArgs, OutputArgs};
use crate::core::logger::Logger;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    #[command(flatten)]
    pub environment: EnvironmentArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_resolve(args: &ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ResolveConfig {
        collection_path: path_or_prompt(args.collection.collection.as_deref(), COLLECTION_PROMPT)?,
        environment_path: path_or_prompt(
            args.environment.environment.as_deref(),
            ENVIRONMENT_PROMPT,
        )?,
    };

    let rows = match PmClient::new(config).run()? {
        ResolveOutcome::NoVariables => {
            Logger::warn("No enabled variables found in the environment file.");
            return Ok(());
        }
        ResolveOutcome::Resolved(rows) => rows,
    };

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(
            &rows,
            "Resolved API Endpoints",
            "No API requests with URLs were found in the collection."
        )
    );

    Ok(())
}
