pub mod cli;
pub mod commands;
pub mod error;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod processor;
pub mod schema;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use error::DecodeError;
pub use filter::OnlyFilter;
pub use processor::SchemaProcessor;
pub use ui::{ConsoleUi, Phase, SilentUi, Ui};
