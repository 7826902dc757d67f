//! entity-table-gen - entities.json to a source mapping literal
//!
//! Writes the table to OUTPUT, then runs the formatter on it in place.
//! Logs go to stderr; `--json` prints the generation report to stdout.
//! Returns non-zero on input, data or output errors.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use entity_table_core::{
    formatter::{DEFAULT_FORMATTER, DEFAULT_FORMATTER_ARGS},
    init_logging, FormatterSpec, GenerateRequest, GeneratorError, TableGenerator, TableLayout,
};

#[derive(Parser)]
#[command(name = "entity-table-gen")]
#[command(about = "Generate the HTML named entity table from entities.json")]
struct Cli {
    /// Input file (WHATWG entities.json)
    input: PathBuf,

    /// Output file
    output: PathBuf,

    /// Formatter executable
    #[arg(long, env = "ENTITY_TABLE_FORMATTER", default_value = DEFAULT_FORMATTER)]
    formatter: String,

    /// Formatter argument, placed before the output path
    #[arg(
        long = "formatter-arg",
        allow_hyphen_values = true,
        default_values_t = DEFAULT_FORMATTER_ARGS.map(String::from)
    )]
    formatter_args: Vec<String>,

    /// Leave the output unformatted
    #[arg(long)]
    no_format: bool,

    /// Command named in an extra `To regenerate, run ...` doc line
    #[arg(long)]
    regen_hint: Option<String>,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), GeneratorError> {
    let formatter = FormatterSpec::from_user(&cli.formatter, cli.formatter_args)
        .map_err(|e| GeneratorError::FormatterConfig(e.to_string()))?;

    let layout = match &cli.regen_hint {
        Some(command) => TableLayout::default().with_regen_hint(command),
        None => TableLayout::default(),
    };

    let mut request = GenerateRequest::new(cli.input, cli.output);
    if cli.no_format {
        request = request.without_format();
    }

    let report = TableGenerator::new(layout, formatter).generate(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
