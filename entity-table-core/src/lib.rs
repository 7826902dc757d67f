//! Entity Table Core - HTML Named Entity Table Generator
//!
//! Reads the WHATWG `entities.json` and emits a `Json` mapping literal of
//! entity name to characters.
//!
//! # Output Guarantees
//! 1. Only semicolon-terminated names are emitted
//! 2. Input order is output order
//! 3. Every value reads back to the original characters
//! 4. Same input, same bytes
//! 5. A failed formatter never invalidates a written table

pub mod entities;
pub mod escape;
pub mod render;
pub mod formatter;
pub mod hashing;
pub mod generator;
pub mod logging;

pub use entities::{emitted_key, EntityDescriptor, EntityTable, FilteredEntity};
pub use escape::escape_literal;
pub use render::{RenderedTable, TableLayout};
pub use formatter::{FormatOutcome, FormatterSpec};
pub use hashing::digest_text;
pub use generator::{GenerateRequest, GenerationReport, GeneratorError, TableGenerator};
pub use logging::init_logging;

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
