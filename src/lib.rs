pub mod app;
pub mod command;
pub mod context;
pub mod copy;
pub mod enumerate;
pub mod errors;
pub mod logger;
pub mod selector;

pub use app::{run, AppConfig, RunOutcome};
pub use errors::ContextError;
