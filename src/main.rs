//! radio-convert: convert channel and contact tables between radio programming tools
//!
//! ```text
//! radio-convert list
//! radio-convert convert chirp-dm32 h8.csv xx.csv
//! radio-convert convert gd88-maverick gd88.csv \
//!     --template maverick_working_copy.csv --lookup talkgroups.CSV
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use radio_csv::{
    convert, find_converter, init_converters, list_converters, ConversionConfig, WriteMode,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

/// Exit code when the input file does not exist
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "radio-convert",
    version,
    about = "Convert radio programming CSV exports between vendor formats"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available converters
    List,

    /// Convert one table
    Convert(ConvertArgs),
}

#[derive(clap::Args, Debug)]
struct ConvertArgs {
    /// Converter id (see `radio-convert list`)
    converter: String,

    /// Input CSV file
    input: Option<PathBuf>,

    /// Output CSV file (defaults to the converter's usual file name)
    output: Option<PathBuf>,

    /// Talkgroup lookup file (Name, Radio ID)
    #[arg(long)]
    lookup: Option<PathBuf>,

    /// Existing destination working copy providing template rows
    #[arg(long)]
    template: Option<PathBuf>,

    /// Append to the output file, continuing its numbering
    #[arg(long, conflicts_with = "overwrite")]
    append: bool,

    /// Replace the output file
    #[arg(long)]
    overwrite: bool,

    /// First value of the row number column
    #[arg(long)]
    start_index: Option<u32>,

    /// Field delimiter
    #[arg(long)]
    delimiter: Option<char>,

    /// JSON configuration file; command line values take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConvertArgs {
    fn into_config(self) -> anyhow::Result<ConversionConfig> {
        let mut config = match &self.config {
            Some(path) => ConversionConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ConversionConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.lookup.is_some() {
            config.lookup = self.lookup;
        }
        if self.template.is_some() {
            config.template = self.template;
        }
        if self.append {
            config.mode = Some(WriteMode::Append);
        } else if self.overwrite {
            config.mode = Some(WriteMode::Overwrite);
        }
        if self.start_index.is_some() {
            config.start_index = self.start_index;
        }
        if self.delimiter.is_some() {
            config.delimiter = self.delimiter;
        }
        Ok(config)
    }
}

fn init_tracing() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    init_converters();

    let cli = Cli::parse();
    match cli.command {
        Command::List => {
            for info in list_converters() {
                println!("{:<20} {}", info.id, info.full_name());
                println!("{:<20} {}", "", info.description);
            }
            ExitCode::SUCCESS
        }
        Command::Convert(args) => run_convert(args),
    }
}

fn run_convert(args: ConvertArgs) -> ExitCode {
    let converter = match find_converter(&args.converter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run `radio-convert list` to see available converters.");
            return ExitCode::FAILURE;
        }
    };

    let config = match args.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if !config.input.as_os_str().is_empty() && !config.input.is_file() {
        eprintln!("Input file '{}' not found.", config.input.display());
        return ExitCode::from(EXIT_NOT_FOUND);
    }

    match convert(converter.as_ref(), &config) {
        Ok(report) => {
            println!("Wrote {} rows to '{}'", report.rows_written, report.output.display());
            if !report.warnings.is_empty() {
                println!("{} warnings (see log above)", report.warnings.len());
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is_not_found() => {
            eprintln!("{}", e);
            ExitCode::from(EXIT_NOT_FOUND)
        }
        Err(e) => {
            eprintln!("Error converting file: {}", e);
            ExitCode::FAILURE
        }
    }
}
