//! Generation Pipeline - Single Entry Point
//!
//! load -> filter -> escape -> render -> write -> format. Every step up to
//! the write is fatal on error; formatting is best-effort.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::entities::EntityTable;
use crate::formatter::{FormatOutcome, FormatterSpec};
use crate::hashing::digest_text;
use crate::render::{render_table, RenderedTable, TableLayout};
use crate::GENERATOR_VERSION;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Input error: {}: {reason}", .path.display())]
    InputError { path: PathBuf, reason: String },

    #[error("Data error: entity {entity}: {reason}")]
    DataError { entity: String, reason: String },

    #[error("Output error: {}: {source}", .path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Formatter configuration error: {0}")]
    FormatterConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Run the formatter after writing
    pub format: bool,
}

impl GenerateRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format: true,
        }
    }

    pub fn without_format(self) -> Self {
        Self { format: false, ..self }
    }
}

/// Summary of one run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub generator_version: String,
    pub entities_total: usize,
    pub entities_emitted: usize,
    pub entities_skipped: usize,
    /// SHA-256 of the text as written, before formatting
    pub sha256: String,
    pub formatter: FormatOutcome,
}

/// The generator - single entry point for table generation
pub struct TableGenerator {
    layout: TableLayout,
    formatter: FormatterSpec,
}

impl TableGenerator {
    pub fn new(layout: TableLayout, formatter: FormatterSpec) -> Self {
        Self { layout, formatter }
    }

    /// Render a table without touching the filesystem
    pub fn render(&self, table: &EntityTable) -> Result<RenderedTable, GeneratorError> {
        render_table(table, &self.layout)
    }

    /// Generate the output file from the request.
    ///
    /// Nothing is written unless every retained entity rendered.
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerationReport, GeneratorError> {
        let table = EntityTable::load_from_path(&request.input)?;
        debug!(input = %request.input.display(), entries = table.len(), "loaded entity table");

        let rendered = self.render(&table)?;
        write_output(&request.output, &rendered.text)?;

        let sha256 = digest_text(&rendered.text);
        info!(
            output = %request.output.display(),
            emitted = rendered.emitted,
            skipped = rendered.skipped(),
            sha256 = %sha256,
            "wrote entity table"
        );

        let formatter = if request.format {
            self.formatter.run(&request.output)
        } else {
            FormatOutcome::Skipped
        };

        Ok(GenerationReport {
            input: request.input.clone(),
            output: request.output.clone(),
            generator_version: GENERATOR_VERSION.to_string(),
            entities_total: rendered.total,
            entities_emitted: rendered.emitted,
            entities_skipped: rendered.skipped(),
            sha256,
            formatter,
        })
    }
}

impl Default for TableGenerator {
    fn default() -> Self {
        Self::new(TableLayout::default(), FormatterSpec::default())
    }
}

fn write_output(path: &Path, text: &str) -> Result<(), GeneratorError> {
    fs::write(path, text).map_err(|source| GeneratorError::OutputError {
        path: path.to_path_buf(),
        source,
    })
}
