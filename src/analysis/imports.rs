//! Default-import discovery using tree-sitter for JavaScript/TypeScript.
//!
//! This module parses source files and yields one [`ImportOccurrence`] per
//! default binding, which is the input of the default-export check.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree, TreeCursor};

use crate::check::{ImportOccurrence, SourceKind};

/// Errors that can occur during import analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse file: {path}")]
    ParseError { path: String },

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Tree-sitter language initialization failed")]
    LanguageInit,
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Get the tree-sitter grammar for a source kind.
pub fn tree_sitter_language(kind: SourceKind) -> Language {
    match kind {
        SourceKind::JavaScript | SourceKind::Jsx => tree_sitter_javascript::LANGUAGE.into(),
        SourceKind::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        SourceKind::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

fn parser_for(kind: SourceKind) -> AnalysisResult<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_language(kind))
        .map_err(|_| AnalysisError::LanguageInit)?;
    Ok(parser)
}

/// Analyzer for extracting default imports from source files.
pub struct ImportAnalyzer {
    js_parser: Parser,
    ts_parser: Parser,
    tsx_parser: Parser,
}

impl ImportAnalyzer {
    /// Create a new ImportAnalyzer.
    pub fn new() -> AnalysisResult<Self> {
        Ok(Self {
            js_parser: parser_for(SourceKind::JavaScript)?,
            ts_parser: parser_for(SourceKind::TypeScript)?,
            tsx_parser: parser_for(SourceKind::Tsx)?,
        })
    }

    /// Find all default imports in a file.
    pub fn default_imports(&mut self, path: &Path) -> AnalysisResult<Vec<ImportOccurrence>> {
        let kind = SourceKind::from_path(path).ok_or_else(|| {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            AnalysisError::UnsupportedFileType(ext.to_string())
        })?;

        let content = fs::read_to_string(path)?;
        self.default_imports_in_source(&content, kind, path)
    }

    /// Find all default imports in source text that lives at `path`.
    pub fn default_imports_in_source(
        &mut self,
        source: &str,
        kind: SourceKind,
        path: &Path,
    ) -> AnalysisResult<Vec<ImportOccurrence>> {
        let parser = match kind {
            SourceKind::JavaScript | SourceKind::Jsx => &mut self.js_parser,
            SourceKind::TypeScript => &mut self.ts_parser,
            SourceKind::Tsx => &mut self.tsx_parser,
        };

        let tree = parser.parse(source, None).ok_or_else(|| AnalysisError::ParseError {
            path: path.display().to_string(),
        })?;

        Ok(extract_default_imports(&tree, source, path))
    }
}

fn extract_default_imports(tree: &Tree, source: &str, path: &Path) -> Vec<ImportOccurrence> {
    let mut occurrences = Vec::new();
    let mut cursor = tree.root_node().walk();
    visit_node(&mut cursor, source, path, &mut occurrences);
    occurrences
}

/// Recursively visit nodes to find import statements.
fn visit_node(
    cursor: &mut TreeCursor,
    source: &str,
    path: &Path,
    occurrences: &mut Vec<ImportOccurrence>,
) {
    let node = cursor.node();

    if node.kind() == "import_statement" {
        if let Some(occurrence) = parse_default_import(&node, source, path) {
            occurrences.push(occurrence);
        }
        // Import statements never nest.
        return;
    }

    if cursor.goto_first_child() {
        loop {
            visit_node(cursor, source, path, occurrences);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

/// Parse the default binding of an ES6 import statement, if it has one.
fn parse_default_import(node: &Node, source: &str, path: &Path) -> Option<ImportOccurrence> {
    let mut specifier = None;
    let mut binding = None;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "string" => specifier = extract_string_value(&child, source),
            "import_clause" => binding = find_default_binding(&child),
            _ => {}
        }
    }

    let specifier = specifier.filter(|s| !s.is_empty())?;
    let binding = binding?;
    let local = node_text(&binding, source)?;
    let position = binding.start_position();

    Some(
        ImportOccurrence::new(local, specifier, path)
            .at(position.row + 1, position.column + 1),
    )
}

/// The default binding is a bare identifier directly under the import clause:
/// `import foo from 'module'` or `import foo, { bar } from 'module'`.
fn find_default_binding<'tree>(clause: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = clause.walk();
    let binding = clause
        .children(&mut cursor)
        .find(|child| child.kind() == "identifier");
    binding
}

/// Extract the text content of a node.
fn node_text<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    source.get(node.start_byte()..node.end_byte())
}

/// Extract string value (removes quotes).
fn extract_string_value(node: &Node, source: &str) -> Option<String> {
    let text = node_text(node, source)?;
    let trimmed = text
        .trim_start_matches(['"', '\'', '`'])
        .trim_end_matches(['"', '\'', '`']);
    Some(trimmed.to_string())
}
