//! CLI command definitions

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rememberit")]
#[command(about = "Personal note and reminder list", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new list
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add an entry stamped with the current time
    Add {
        /// Entry text; multiple words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        content: Vec<String>,
    },

    /// List entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Change the text and/or timestamp of an entry
    #[command(group(
        ArgGroup::new("changes")
            .required(true)
            .multiple(true)
            .args(["content", "at"])
    ))]
    Edit {
        /// Entry id (a unique prefix is enough)
        id: String,

        /// New entry text
        #[arg(short, long, allow_hyphen_values = true)]
        content: Option<String>,

        /// New timestamp (now, YYYY-MM-DDTHH:MM, YYYY-MM-DD HH:MM, ...)
        #[arg(short, long, value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id (a unique prefix is enough)
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all entries
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show quick-add suggestions (repeated entry texts)
    Suggest,

    /// Add a new entry from a numbered quick-add suggestion
    Quick {
        /// Suggestion number as shown by `suggest`
        position: usize,
    },

    /// Print the stored list as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the whole list with a JSON export
    Import {
        /// File to read (default: stdin, also with '-')
        file: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_joins_words() {
        let cli = Cli::try_parse_from(["rememberit", "add", "Buy", "milk"]).unwrap();
        match cli.command {
            Commands::Add { content } => assert_eq!(content.join(" "), "Buy milk"),
            other => panic!("Expected add, got {:?}", other),
        }
    }

    #[test]
    fn test_add_requires_content() {
        assert!(Cli::try_parse_from(["rememberit", "add"]).is_err());
    }

    #[test]
    fn test_edit_requires_a_change() {
        assert!(Cli::try_parse_from(["rememberit", "edit", "abc"]).is_err());
        assert!(Cli::try_parse_from(["rememberit", "edit", "abc", "--at", "now"]).is_ok());
        assert!(Cli::try_parse_from(["rememberit", "edit", "abc", "-c", "text"]).is_ok());
    }
}
