//! Command-line inspector for primitive encodings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use aleo_primitives::{Primitive, PrimitiveKind};

#[derive(Parser)]
#[command(author, version, about = "Encode and decode Aleo primitive types")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode hex-encoded bytes and print the value
    Decode {
        /// Primitive kind, e.g. `block_hash`, `field`, `g2_prepared`
        kind: PrimitiveKind,
        /// Canonical binary encoding as hex, optionally `0x`-prefixed
        hex: String,
    },
    /// Parse a text form and print its canonical encoding as hex
    Encode {
        /// Primitive kind, e.g. `address`, `scalar`
        kind: PrimitiveKind,
        /// Text form, e.g. `5field` or an `aleo1...` address
        text: String,
    },
    /// List every primitive kind with its encoded width
    Kinds,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { kind, hex } => decode(kind, &hex)?,
        Commands::Encode { kind, text } => encode(kind, &text)?,
        Commands::Kinds => list_kinds(),
    }

    Ok(())
}

fn decode(kind: PrimitiveKind, input: &str) -> Result<()> {
    let digits = input.trim().trim_start_matches("0x");
    let bytes = hex::decode(digits).context("input is not valid hex")?;
    info!(%kind, len = bytes.len(), "decoding");
    let value = Primitive::decode_exact(kind, &bytes)
        .with_context(|| format!("failed to decode {kind}"))?;
    match value.to_text() {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value:#?}"),
    }
    Ok(())
}

fn encode(kind: PrimitiveKind, text: &str) -> Result<()> {
    let value = Primitive::from_text(kind, text.trim())
        .with_context(|| format!("failed to parse {kind}"))?;
    println!("{}", hex::encode(value.encode()));
    Ok(())
}

fn list_kinds() {
    for kind in PrimitiveKind::ALL {
        let width = kind
            .width()
            .map(|width| width.to_string())
            .unwrap_or_else(|| "variable".to_string());
        let text = if kind.has_text() { "text" } else { "binary only" };
        println!("{:<16} {:>8}  {}", kind.name(), width, text);
    }
}
