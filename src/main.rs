//! folio - article formatter

use std::fs;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use folio::{parse_document, word_count};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Article formatter", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio render post.md post.html    Render dialect text to an HTML fragment
    folio render post.md              Render to stdout
    folio info post.md --json         Show word count and reading time as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a dialect file to an HTML fragment
    Render {
        /// Input file
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (stdout when omitted)
        #[arg(value_name = "OUTPUT")]
        output: Option<String>,
    },
    /// Show word count, reading time, and block count
    Info {
        /// Input file
        #[arg(value_name = "INPUT")]
        input: String,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render { input, output } => render(&input, output.as_deref()),
        Command::Info { input, json } => info(&input, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn render(input: &str, output: Option<&str>) -> folio::Result<()> {
    let source = fs::read_to_string(input)?;
    let html = folio::render_html(&source);

    match output {
        Some(path) => fs::write(path, html)?,
        None => println!("{html}"),
    }
    Ok(())
}

#[derive(Serialize)]
struct InfoReport {
    words: usize,
    reading_time_minutes: u32,
    blocks: usize,
}

fn info(input: &str, json: bool) -> folio::Result<()> {
    let source = fs::read_to_string(input)?;
    let doc = parse_document(&source);

    let report = InfoReport {
        words: word_count(&source),
        reading_time_minutes: folio::estimate_reading_time(&source),
        blocks: doc.block_count(),
    };

    if json {
        // Serialization of this struct cannot fail.
        println!("{}", serde_json::to_string_pretty(&report).expect("serialize report"));
    } else {
        println!("File: {input}");
        println!("Words: {}", report.words);
        println!("Reading time: {} min", report.reading_time_minutes);
        println!("Blocks: {}", report.blocks);
    }

    Ok(())
}
