//! `keli-show` CLI: render Keli runtime values from the command line.
//!
//! Input is JSON in the host representation: tagged variants are objects with
//! a `__tag` field and an optional `__carry` object.
//!
//! ## Usage
//!
//! ```sh
//! # Render one value (stdin → stdout)
//! echo '{"__tag":"Some","__carry":{"value":5}}' | keli-show render
//! # Some.value(5)
//!
//! # Render every line of an NDJSON file, escaping quotes inside strings
//! keli-show render --ndjson --escape -i trace.ndjson -o trace.txt
//!
//! # Print the shape of a value (primitive, text, sequence, variant, record)
//! keli-show shape -i value.json
//! ```
//!
//! Set `RUST_LOG=keli_show=debug` to see bridge decisions on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keli_show::{Renderer, TextQuoting};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "keli-show",
    version,
    about = "Render Keli runtime values as debug text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render host JSON values as show text
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Escape quotes, backslashes and control characters inside strings
        #[arg(long)]
        escape: bool,
        /// Treat the input as newline-delimited JSON, one value per line
        #[arg(long)]
        ndjson: bool,
    },
    /// Print the shape of a host JSON value
    Shape {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            escape,
            ndjson,
        } => {
            let json = read_input(input.as_deref())?;
            let quoting = if escape {
                TextQuoting::Escaped
            } else {
                TextQuoting::Verbatim
            };
            let renderer = Renderer::new().quoting(quoting);

            let lines = if ndjson {
                keli_show::show_lines(&json, &renderer).context("Failed to render NDJSON values")?
            } else {
                vec![keli_show::show_with(&json, &renderer).context("Failed to render JSON value")?]
            };
            debug!(count = lines.len(), ?quoting, "rendered values");

            let mut rendered = String::new();
            for line in &lines {
                rendered.push_str(line);
                rendered.push('\n');
            }
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Shape { input } => {
            let json = read_input(input.as_deref())?;
            let parsed: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse JSON")?;
            let value = keli_show::from_json(&parsed).context("Failed to read host value")?;
            println!("{}", value.shape());
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
