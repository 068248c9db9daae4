mod cli;
mod config;
mod decode;
mod error;
mod filter;


pub use cli::run as run_command;
pub use error::{FilterError, Outcome};
pub use filter::{filter_file, filter_text, ForbiddenSet};
