use clap::Parser;

mod client;
mod commands;
mod core;

use commands::Commands;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "pmres")]
#[command(
    about = "Resolves {{variable}} placeholders in Postman collection URLs. Defaults to 'resolve' if no subcommand is provided."
)]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
#[command(name = "pmres")]
struct DefaultArgs {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,
    #[command(flatten)]
    resolve_args: commands::resolve::ResolveArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Args::try_parse() {
        Ok(Args {
            debug,
            command: Some(command),
        }) => {
            crate::core::logger::Logger::init(debug);
            execute_command(command)
        }
        Err(e)
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            e.print()?;
            Ok(())
        }
        Err(e) if names_subcommand(std::env::args().skip(1)) => e.exit(),
        _ => {
            let default_args = DefaultArgs::parse();
            crate::core::logger::Logger::init(default_args.debug);
            commands::resolve::execute_resolve(&default_args.resolve_args)
        }
    }
}

fn execute_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Resolve(resolve_args) => commands::resolve::execute_resolve(&resolve_args),
        Commands::Env(env_command) => match env_command.command {
            commands::env::EnvSubcommand::List(list_args) => {
                commands::env::execute_list(&list_args)
            }
        },
        Commands::Request(request_command) => match request_command.command {
            commands::request::RequestSubcommand::List(list_args) => {
                commands::request::execute_list(&list_args)
            }
        },
    }
}

/// True when the first argument after any leading global flags is a subcommand name.
fn names_subcommand(args: impl IntoIterator<Item = String>) -> bool {
    args.into_iter()
        .find(|arg| !matches!(arg.as_str(), "-d" | "--debug"))
        .is_some_and(|arg| matches!(arg.as_str(), "resolve" | "env" | "request" | "help"))
}
