// Passport field extraction from OCR output

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{info, warn};

use passport_reader::models::{ExtractionReport, OcrOutput, DEFAULT_PLACEHOLDER};
use passport_reader::utils::PassportError;
use passport_reader::PassportParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Plain recognised text, one line per text line
    Text,
    /// JSON as produced by the OCR engine (text, confidence, lines, words)
    OcrJson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "passport-reader", version, about = "Extract passport fields from OCR text")]
struct Cli {
    /// OCR result file, or `-` for stdin
    input: String,

    #[arg(long, value_enum, default_value_t = InputFormat::Text)]
    input_format: InputFormat,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output_format: OutputFormat,

    /// Shown in place of fields that were not detected
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    placeholder: String,

    /// Write the JSON report to this file. A directory gets a generated file name.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn read_input(input: &str) -> Result<String, PassportError> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn load_ocr_output(cli: &Cli) -> Result<OcrOutput, PassportError> {
    let raw = read_input(&cli.input)?;
    match cli.input_format {
        InputFormat::Text => Ok(OcrOutput::from_text(raw)),
        InputFormat::OcrJson => OcrOutput::from_json(&raw),
    }
}

fn run(cli: Cli) -> Result<(), PassportError> {
    let ocr = load_ocr_output(&cli)?;
    let record = PassportParser::new().parse_ocr(&ocr);

    if record.is_empty() {
        warn!("No passport fields detected in {}", cli.input);
    }

    let report = ExtractionReport::new(&ocr, &record, &cli.placeholder);

    match cli.output_format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
    }

    if let Some(path) = cli.output {
        let path = if path.is_dir() {
            path.join(report.default_file_name())
        } else {
            path
        };
        report.write_to(&path)?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(err) = run(cli) {
        eprintln!("Error processing passport: {}", err);
        std::process::exit(1);
    }
}
