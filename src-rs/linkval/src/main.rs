//! The `linkval` command-line tool

use std::path::Path;

use anstream::println;
use anyhow::{Context as _, Result};
use clap::Parser;
use linkval::{
    document::{self, ContextDocument, TemplateVariablesDocument},
    expand::ExpansionOptions,
    parser::Token,
    shared::error::Diagnostic,
    template::TemplateSubstitutionOptions,
};

use crate::command::{CliCommand, Commands};

mod command;
mod print_diagnostic;
mod stylesheet;

fn main() -> Result<()> {
    let cli = CliCommand::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Expand {
            expression,
            context,
            max_depth,
            json,
        } => expand(&expression, &context, max_depth, json),
        Commands::Tokens { expression, json } => tokens(&expression, json),
        Commands::Template {
            text,
            variables,
            namespace,
        } => template(&text, &variables, namespace),
    }
}

/// Initializes the tracing subscriber, honoring `RUST_LOG` if set
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

fn expand(expression: &str, context_path: &Path, max_depth: usize, json: bool) -> Result<()> {
    let document: ContextDocument = document::load(context_path)
        .with_context(|| format!("failed to load context from `{}`", context_path.display()))?;

    let registry = document.registry();
    let context = document.into_context(&registry);
    let options = ExpansionOptions::with_max_depth(max_depth);

    let result = linkval::expand::expand_with(expression, &context, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", result.text);

    for unresolved in &result.unresolved {
        let diagnostic =
            Diagnostic::from_error_with_source(unresolved, expression).with_label("expression");
        print_diagnostic::print(&diagnostic);
    }

    // Errors in the expression itself come first and can point into it.
    // The rest come from substituted values.
    let malformed = linkval::parser::scan(expression).malformed;
    for error in &malformed {
        let diagnostic =
            Diagnostic::from_error_with_source(error, expression).with_label("expression");
        print_diagnostic::print(&diagnostic);
    }
    for status in result.errors.iter().skip(malformed.len()) {
        print_diagnostic::print_status(status.message());
    }

    Ok(())
}

fn tokens(expression: &str, json: bool) -> Result<()> {
    let scan = linkval::parser::scan(expression);

    if json {
        println!("{}", serde_json::to_string_pretty(&scan.tokens)?);
        return Ok(());
    }

    for token in &scan.tokens {
        let span = token.span();
        let (kind, detail) = match token {
            Token::Literal(literal) => (
                "literal",
                format!("\"{}\"", literal.text().escape_debug()),
            ),
            Token::Placeholder(placeholder) => (
                "placeholder",
                format!("{} : {}", placeholder.namespace(), placeholder.key()),
            ),
        };
        println!(
            "{:>4}..{:<4} {:<11} {detail}",
            span.start().offset,
            span.end().offset,
            stylesheet::TOKEN_KIND.style(kind),
        );
    }

    for error in &scan.malformed {
        let diagnostic =
            Diagnostic::from_error_with_source(error, expression).with_label("expression");
        print_diagnostic::print(&diagnostic);
    }

    Ok(())
}

fn template(text: &str, variables_path: &Path, namespace: Option<String>) -> Result<()> {
    let document: TemplateVariablesDocument = document::load(variables_path).with_context(|| {
        format!(
            "failed to load template variables from `{}`",
            variables_path.display()
        )
    })?;

    let values = document.resolve();
    let options = TemplateSubstitutionOptions { namespace };
    let mut status = Vec::new();

    let output = linkval::template::substitute_with(text, &values, &options, &mut status);

    println!("{output}");
    for message in &status {
        print_diagnostic::print_status(message.message());
    }

    Ok(())
}
