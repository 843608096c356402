use clap::{Parser, Subcommand};

/// Prints a fixed hello world greeting.
#[derive(Parser, Debug)]
#[command(name = "greeting", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the greeting.
    Hello,

    /// Verify the greeting matches the expected literal.
    Check {
        /// Literal the greeting must equal.
        #[arg(long, hide = true, default_value = "Hello world!")]
        expected: String,
    },

    /// Print the package name and version.
    Version,
}
