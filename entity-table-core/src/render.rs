//! Table Rendering - Mapping Literal Text

use crate::entities::EntityTable;
use crate::escape::escape_literal;
use crate::generator::GeneratorError;

pub const DEFAULT_DOC_LINES: [&str; 2] = [
    "A collection of named entities in HTML,",
    "generated from <https://html.spec.whatwg.org/entities.json>.",
];

/// Fixed text wrapped around the entity lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Documentation comment lines, without the `/// ` prefix
    pub doc_lines: Vec<String>,
    pub binding: String,
    pub type_name: String,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            doc_lines: DEFAULT_DOC_LINES.iter().map(|l| l.to_string()).collect(),
            binding: "html_named_entities".to_string(),
            type_name: "Json".to_string(),
        }
    }
}

impl TableLayout {
    /// Append a `To regenerate, run ...` doc line.
    pub fn with_regen_hint(mut self, command: &str) -> Self {
        self.doc_lines.push(format!("To regenerate, run `{}`.", command));
        self
    }

    pub fn preamble(&self) -> String {
        let mut buf = String::new();
        for line in &self.doc_lines {
            buf.push_str("/// ");
            buf.push_str(line);
            buf.push('\n');
        }
        buf.push_str(&format!("let {} : {} = {{\n", self.binding, self.type_name));
        buf
    }

    pub fn epilogue(&self) -> &'static str {
        "}\n"
    }
}

/// Rendered, unformatted table text plus entry counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub text: String,
    pub total: usize,
    pub emitted: usize,
}

impl RenderedTable {
    pub fn skipped(&self) -> usize {
        self.total - self.emitted
    }
}

/// `"key": "value",` for one retained entity
pub fn entity_line(key: &str, characters: &str) -> String {
    format!("\"{}\": \"{}\",\n", key, escape_literal(characters))
}

pub fn render_table(table: &EntityTable, layout: &TableLayout) -> Result<RenderedTable, GeneratorError> {
    let mut text = layout.preamble();
    let mut emitted = 0;

    for entity in table.retained() {
        let entity = entity?;
        text.push_str(&entity_line(entity.key, entity.characters));
        emitted += 1;
    }

    text.push_str(layout.epilogue());

    Ok(RenderedTable {
        text,
        total: table.len(),
        emitted,
    })
}
