mod loader;
mod pm_client;
mod pm_client_models;
mod prompt;

pub use pm_client::PmClient;
pub use pm_client_models::{ResolveConfig, ResolveOutcome};
pub use prompt::{prompt_for_path, COLLECTION_PROMPT, ENVIRONMENT_PROMPT};
