use crate::client::{PmClient, ENVIRONMENT_PROMPT};
use crate::commands::shared::{path_or_prompt, EnvironmentArgs, OutputArgs};
use clap::{Args, Subcommand};

#[derive(Args)]
#[command(name = "env")]
#[command(about = "Inspect environment variables")]
pub struct EnvCommand {
    #[command(subcommand)]
    pub command: EnvSubcommand,
}

#[derive(Subcommand)]
pub enum EnvSubcommand {
    #[command(about = "List the enabled variables of an environment")]
    List(ListArgs),
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub environment: EnvironmentArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = path_or_prompt(args.environment.environment.as_deref(), ENVIRONMENT_PROMPT)?;
    let variables = PmClient::list_variables(std::path::Path::new(&path))?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(
            &variables,
            "Environment Variables",
            "No enabled variables found in the environment file."
        )
    );

    Ok(())
}
