//! Builds a DIDL argument from the command line and prints it.

use anyhow::{Context, Result};
use clap::Parser;
use didl_args::{
    build_argument, read_argument_text, render, ArgumentMode, OutputFormat, TextualPrincipalCodec,
};
use tracing_subscriber::EnvFilter;

/// Build the argument bytes of an install/upgrade call
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How TEXT is turned into an argument
    #[arg(short, long, env = "DIDL_ARGS_MODE", default_value_t = ArgumentMode::None)]
    mode: ArgumentMode,

    /// Print `\xx` escaped hex instead of plain hex
    #[arg(long, conflicts_with = "json")]
    escaped: bool,

    /// Decode the built argument and report its shape
    #[arg(long)]
    inspect: bool,

    /// Print a JSON object instead of bare hex
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Identifier, hex or blob text; `-` reads stdin
    text: Option<String>,
}

impl Args {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.escaped {
            OutputFormat::Escaped
        } else {
            OutputFormat::Hex
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let text = read_argument_text(args.text.as_deref(), std::io::stdin().lock())
        .context("reading argument text from stdin")?;

    let codec = TextualPrincipalCodec;
    let bytes = build_argument(args.mode, &text, &codec)
        .with_context(|| format!("building {} argument", args.mode))?;

    let rendered = render(args.mode, &bytes, args.format(), args.inspect, &codec)?;
    println!("{}", rendered.stdout);
    if let Some(note) = rendered.stderr {
        eprintln!("{note}");
    }
    Ok(())
}
