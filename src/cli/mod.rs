//! Command-line interface for vinyls.
//!
//! Running `vinyls --artist .. --album ..` searches the catalog and adds the
//! chosen album to the collection; subcommands inspect the collection and
//! manage the config file.

mod commands;
mod prompt;

pub use commands::{Cli, run_command};
pub use prompt::PromptChooser;
