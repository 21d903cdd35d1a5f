use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tabsheet::{lexer::lexer::tokenize, parser::parser::parse, render_error};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "tabsheet")]
#[command(about = "Checks that a tab-indented style sheet is well formed", long_about = None)]
struct Cli {
    /// Style sheet to validate
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the token stream before validating
    #[arg(long)]
    tokens: bool,

    /// Log lexer and parser progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read file '{}'", cli.file.display()))?;
    let file_name = cli.file.display().to_string();

    let start = Instant::now();
    let result = tokenize(&source).and_then(|tokens| {
        debug!("tokenized in {:?}", start.elapsed());

        if cli.tokens {
            for token in &tokens {
                println!("{}", token);
            }
            println!("\nTotal tokens: {}", tokens.len());
        }

        parse(tokens)
    });
    debug!("validated in {:?}", start.elapsed());

    match result {
        Ok(()) => {
            println!("Valid program");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("Program is not valid! More details about error:");
            println!("{}", error);
            print!("{}", render_error(&error, &source, &file_name));
            Ok(ExitCode::FAILURE)
        }
    }
}
