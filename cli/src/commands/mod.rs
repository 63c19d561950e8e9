pub mod env;
pub mod request;
pub mod resolve;
pub mod shared;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Resolve request URLs against an environment")]
    Resolve(resolve::ResolveArgs),
    Env(env::EnvCommand),
    Request(request::RequestCommand),
}
