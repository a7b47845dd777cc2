use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "A small book catalog kept in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use (defaults to the configured catalog file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        genre: String,
        /// Publication year (an integer)
        #[arg(allow_hyphen_values = true)]
        year: String,
    },

    /// Find books by title (exact, ignoring case)
    #[command(alias = "f")]
    Find { title: String },

    /// Find books whose author contains the given text
    Author { fragment: String },

    /// Remove every book with the given title
    #[command(alias = "rm")]
    Remove { title: String },

    /// List every book
    #[command(alias = "ls")]
    List,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., catalog-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Run the sample session against the catalog file
    Demo,
}
