use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tokenizer::{
    lexer::lexer::{Lexer, LexerOptions},
    render_error,
};

#[derive(Parser)]
#[command(name = "tokenizer")]
#[command(version, about = "Tokenizes a source file and prints its tokens", long_about = None)]
struct Cli {
    /// The source file to tokenize
    input: PathBuf,

    /// Fail on characters that start no token instead of emitting Unknown tokens
    #[arg(long)]
    strict: bool,

    /// Only print a summary instead of every token
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.to_string_lossy().into_owned());

    let source = read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let start = Instant::now();
    let mut lexer = Lexer::new(LexerOptions { strict: cli.strict });

    let tokens = match lexer.tokenize(&source, &file_name) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return Ok(ExitCode::FAILURE);
        }
    };

    log::info!("Tokenized {} in {:?}", file_name, start.elapsed());

    if cli.check {
        println!("{}: {} tokens", file_name, tokens.len());
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }

    Ok(ExitCode::SUCCESS)
}
