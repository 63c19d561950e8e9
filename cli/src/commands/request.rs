use crate::client::{PmClient, COLLECTION_PROMPT};
use crate::commands::shared::{path_or_prompt, CollectionArgs, OutputArgs};
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Debug, Args)]
#[command(about = "Inspect collection requests")]
pub struct RequestCommand {
    #[command(subcommand)]
    pub command: RequestSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum RequestSubcommand {
    #[command(about = "List requests with their raw, unresolved URLs")]
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = path_or_prompt(args.collection.collection.as_deref(), COLLECTION_PROMPT)?;
    let requests = PmClient::list_requests(Path::new(&path))?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(
            &requests,
            "API Requests",
            "No API requests with URLs were found in the collection."
        )
    );

    Ok(())
}
