use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pdfcomma::core::session::SessionState;
use pdfcomma::normalize_decimals;
use pdfcomma::parser::PdfReader;
use pdfcomma::shell::{process_upload, render, ShellConfig};

#[derive(Parser, Debug)]
#[command(name = "pdfcomma")]
#[command(version, about = "Extract text from a PDF with decimal commas instead of decimal points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract the text of a PDF file and print it
    Extract {
        /// Input PDF file path
        input: PathBuf,

        /// Hide progress messages
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rewrite decimal points as commas in text read from stdin
    Normalize,

    /// Show information about a PDF file
    Info {
        /// Input PDF file path
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pdfcomma=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, quiet } => extract_single(ShellConfig::new(input, quiet)),
        Commands::Normalize => normalize_stdin(),
        Commands::Info { input } => show_info(input),
    }
}

fn extract_single(config: ShellConfig) -> Result<()> {
    let session = SessionState::new();
    let session = process_upload(&config, session, &mut io::stderr())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&session, &mut out)?;
    out.flush()?;
    Ok(())
}

fn normalize_stdin() -> Result<()> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(normalize_decimals(&text).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    let config = ShellConfig::new(input.clone(), true);
    config.validate()?;

    let reader = PdfReader::open(&input)
        .with_context(|| format!("Failed to open PDF: {}", input.display()))?;

    println!("PDF Information");
    println!("===============");
    println!("File: {}", input.display());
    println!("Pages: {}", reader.page_count());

    Ok(())
}
