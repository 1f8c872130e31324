//! lexfront CLI
//!
//! Reads a source file, tokenizes it and writes the token stream.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use lexfront::feedback::{render_diagnostics, render_stream, TokenReport};
use lexfront::frontend::lexer::tokenize_with_diagnostics;
use lexfront::utils::{load_source, JoinMode};

/// lexfront tokenizer
#[derive(Parser, Debug)]
#[command(name = "lexfront")]
#[command(version)]
#[command(about = "Lexical front end - turns source text into a token stream")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input source file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    options: TokenizeOptions,
}

#[derive(clap::Args, Debug, Clone)]
struct TokenizeOptions {
    /// Write the token stream to this file as well as stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// How source lines are joined before scanning
    #[arg(long, value_enum, default_value_t = JoinMode::Newline)]
    join: JoinMode,

    /// Do not echo the token stream or diagnostics
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `Type: <KIND>, Value: <lexeme>, Line: <L>, Column: <C>` per token
    Text,
    /// Structured JSON report
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a source file
    Tokenize {
        /// Input source file
        input: PathBuf,

        #[command(flatten)]
        options: TokenizeOptions,
    },
    /// Report lexical diagnostics without printing tokens
    Check {
        /// Input source file
        input: PathBuf,

        /// How source lines are joined before scanning
        #[arg(long, value_enum, default_value_t = JoinMode::Newline)]
        join: JoinMode,
    },
    /// Print version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Tokenize { input, options }) => tokenize_file(input, options),
        Some(Commands::Check { input, join }) => check_file(input, *join),
        Some(Commands::Version) => {
            println!("lexfront {}", env!("CARGO_PKG_VERSION"));
            println!("License: Apache-2.0");
            Ok(true)
        }
        None => match cli.input {
            Some(ref input) => tokenize_file(input, &cli.options),
            None => {
                eprintln!("Error: No input file specified");
                eprintln!("Usage: lexfront <FILE> or lexfront tokenize <FILE>");
                process::exit(2);
            }
        },
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

/// Tokenize a file and emit the stream, with diagnostics on stderr. Returns
/// Ok(true) on success; lexical diagnostics do not fail this command.
fn tokenize_file(input: &Path, options: &TokenizeOptions) -> Result<bool> {
    let source = load_source(input, options.join)
        .with_context(|| format!("reading {}", input.display()))?;

    let (tokens, diagnostics) = tokenize_with_diagnostics(&source);
    info!(
        "{}: {} tokens, {} diagnostics",
        input.display(),
        tokens.len(),
        diagnostics.len()
    );

    let rendered = match options.format {
        OutputFormat::Text => render_stream(&tokens),
        OutputFormat::Json => {
            let report = TokenReport::new(input.display().to_string(), &tokens, &diagnostics);
            let mut json = report.to_json()?;
            json.push('\n');
            json
        }
    };

    if let Some(ref output) = options.output {
        fs::write(output, &rendered)
            .with_context(|| format!("writing {}", output.display()))?;
        info!("wrote tokens to {}", output.display());
    }

    if !options.quiet {
        eprint!("{}", render_diagnostics(&diagnostics));
        if options.format == OutputFormat::Text {
            println!("Tokens:");
        }
        print!("{}", rendered);
    }

    Ok(true)
}

/// Scan a file and print its diagnostics. Returns Ok(false) if any were found.
fn check_file(input: &Path, join: JoinMode) -> Result<bool> {
    println!("Checking: {}", input.display());

    let source = load_source(input, join)
        .with_context(|| format!("reading {}", input.display()))?;
    let (_, diagnostics) = tokenize_with_diagnostics(&source);

    if diagnostics.is_empty() {
        println!("✅ No lexical problems found");
        return Ok(true);
    }

    for line in render_diagnostics(&diagnostics).lines() {
        println!("  {}", line);
    }
    println!("{} problem(s) found", diagnostics.len());
    Ok(false)
}
