use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linked value expression CLI
#[derive(Parser)]
#[command(name = "linkval")]
#[command(version, about = "Expand linked value expressions", long_about = None)]
pub struct CliCommand {
    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand an expression against a context document
    Expand {
        /// The expression to expand
        #[arg(value_name = "EXPR")]
        expression: String,

        /// YAML or JSON document with the namespaces and scopes
        #[arg(long, value_name = "FILE")]
        context: PathBuf,

        /// Levels of placeholders to expand; 1 substitutes values verbatim, at most 64
        #[arg(long, default_value_t = 1)]
        max_depth: usize,

        /// Print the expansion result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the tokens of an expression
    Tokens {
        /// The expression to tokenize
        #[arg(value_name = "EXPR")]
        expression: String,

        /// Print the tokens as JSON
        #[arg(long)]
        json: bool,
    },
    /// Substitute template variables in a text
    Template {
        /// The template text
        #[arg(value_name = "TEXT")]
        text: String,

        /// YAML or JSON document with the variable definitions and values
        #[arg(long, value_name = "FILE")]
        variables: PathBuf,

        /// Only substitute placeholders in this namespace
        #[arg(long)]
        namespace: Option<String>,
    },
}
