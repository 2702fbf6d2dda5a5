use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use modelport_core::{
    parse_csharp, translate_csharp_to_typescript, CSharp, Language, Tokenizer, TypeScript,
};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Translate C# model declarations into TypeScript")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a C# model file into TypeScript declarations
    Translate(TranslateArgs),

    /// Parse a C# model file and print the model tree as JSON
    Ast(AstArgs),

    /// Dump the token stream of a source file, indented by brace depth
    Tokens(TokensArgs),
}

#[derive(Parser)]
struct TranslateArgs {
    /// Path to the C# source file
    file: PathBuf,

    /// Write the output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct AstArgs {
    /// Path to the C# source file
    file: PathBuf,
}

#[derive(Parser)]
struct TokensArgs {
    /// Path to the source file
    file: PathBuf,

    /// Language to tokenize the file as
    #[arg(short, long, value_enum, default_value = "csharp")]
    language: SourceLanguage,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum SourceLanguage {
    Csharp,
    Typescript,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Core(#[from] modelport_core::Error),
    #[error("failed to serialize model tree: {0}")]
    Json(#[from] serde_json::Error),
}

fn open(path: &Path) -> Result<File, CliError> {
    File::open(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

fn translate(args: &TranslateArgs) -> Result<(), CliError> {
    debug!(file = %args.file.display(), "translating model file");
    let typescript = translate_csharp_to_typescript(open(&args.file)?)?;

    match &args.output {
        Some(path) => fs::write(path, typescript).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?,
        None => print!("{}", typescript),
    }
    Ok(())
}

fn dump_ast(args: &AstArgs) -> Result<(), CliError> {
    let unit = parse_csharp(open(&args.file)?)?;
    println!("{}", serde_json::to_string_pretty(&unit)?);
    Ok(())
}

fn dump_tokens(args: &TokensArgs) -> Result<(), CliError> {
    let file = open(&args.file)?;
    match args.language {
        SourceLanguage::Csharp => print_token_stream(
            Tokenizer::new(CSharp, file),
            modelport_core::tokenizer::csharp::CSharpToken::OpenBrace,
            modelport_core::tokenizer::csharp::CSharpToken::CloseBrace,
        ),
        SourceLanguage::Typescript => print_token_stream(
            Tokenizer::new(TypeScript, file),
            modelport_core::tokenizer::typescript::TypeScriptToken::OpenBrace,
            modelport_core::tokenizer::typescript::TypeScriptToken::CloseBrace,
        ),
    }
}

fn print_token_stream<L, R>(
    tokenizer: Tokenizer<L, R>,
    open_brace: L::Kind,
    close_brace: L::Kind,
) -> Result<(), CliError>
where
    L: Language,
    R: Read,
{
    let mut depth = 0usize;
    for token in tokenizer {
        let token = token.map_err(modelport_core::Error::from)?;
        if token.kind() == open_brace {
            depth += 1;
            continue;
        }
        if token.kind() == close_brace {
            depth = depth.saturating_sub(1);
            continue;
        }
        match token.identifier() {
            Some(identifier) => {
                println!("{}{} {}", "    ".repeat(depth), token.kind(), identifier)
            }
            None => println!("{}{}", "    ".repeat(depth), token.kind()),
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Translate(args) => translate(args),
        Commands::Ast(args) => dump_ast(args),
        Commands::Tokens(args) => dump_tokens(args),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer())
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
