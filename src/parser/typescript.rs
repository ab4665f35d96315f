use crate::define_parser;
use crate::parser::ParseError;
use tree_sitter::Node;

define_parser!(TS_PARSER, tree_sitter_typescript::LANGUAGE_TYPESCRIPT);

/// One import declaration's module specifier, with the byte span of the
/// specifier text inside its quotes. The span lets the rewriter splice a
/// replacement path without reprinting the whole statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub specifier: String,
    pub start: usize,
    pub end: usize,
}

/// Import and re-export declarations found in one source file.
#[derive(Debug, Default, Clone)]
pub struct SourceDeclarations {
    pub imports: Vec<ImportSpec>,
    /// Specifiers of `export ... from "x"` declarations.
    pub reexports: Vec<String>,
}

/// Parse TypeScript source and collect import/re-export declarations at any
/// nesting depth, in source order.
pub fn scan_declarations(source: &str) -> Result<SourceDeclarations, ParseError> {
    let tree = TS_PARSER
        .with(|parser| parser.borrow_mut().parse(source, None))
        .ok_or_else(|| ParseError::Parse("Failed to parse file".to_string()))?;

    let mut decls = SourceDeclarations::default();
    visit(tree.root_node(), source, &mut decls);
    Ok(decls)
}

fn visit(node: Node, source: &str, decls: &mut SourceDeclarations) {
    match node.kind() {
        "import_statement" => {
            if let Some(spec) = specifier_of(&node, source) {
                decls.imports.push(spec);
            }
        }
        "export_statement" => {
            // Only re-exports carry a source; plain exports are skipped.
            if let Some(spec) = specifier_of(&node, source) {
                decls.reexports.push(spec.specifier);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, decls);
    }
}

/// Extract the `source` string of an import/export statement, quotes
/// stripped, with the byte span of the text between the quotes.
fn specifier_of(node: &Node, source: &str) -> Option<ImportSpec> {
    let string_node = node.child_by_field_name("source")?;

    // The string node spans the quotes; the specifier is everything between.
    let start = string_node.start_byte() + 1;
    let end = string_node.end_byte().saturating_sub(1);
    if start > end || end > source.len() {
        return None;
    }

    Some(ImportSpec {
        specifier: source[start..end].to_string(),
        start,
        end,
    })
}
