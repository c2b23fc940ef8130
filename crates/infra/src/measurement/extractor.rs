use gostats_domain::{FileFacts, model::is_exported};
use gostats_ports::{MalformedSource, UnitExtractor};
use gostats_shared_kernel::{InfraResult, InfrastructureError};
use tree_sitter::{Language, Node, Parser};

use super::lines::{count_code_lines, count_newlines};

/// Go source extractor backed by the tree-sitter Go grammar.
///
/// A fresh [`Parser`] is built per file so the extractor can be shared across
/// worker threads.
#[derive(Clone)]
pub struct GoUnitExtractor {
    language: Language,
}

impl GoUnitExtractor {
    /// Fails when the grammar cannot be loaded into a parser.
    pub fn new() -> InfraResult<Self> {
        let language: Language = tree_sitter_go::LANGUAGE.into();
        Parser::new()
            .set_language(&language)
            .map_err(|e| InfrastructureError::ParserSetup { details: e.to_string() })?;
        Ok(Self { language })
    }

    fn parser(&self) -> Result<Parser, MalformedSource> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| MalformedSource::new(format!("grammar unavailable: {e}")))?;
        Ok(parser)
    }
}

impl UnitExtractor for GoUnitExtractor {
    fn extract(&self, name: &str, source: &[u8]) -> Result<FileFacts, MalformedSource> {
        let text = std::str::from_utf8(source)
            .map_err(|e| MalformedSource::new(format!("invalid UTF-8 after byte {}", e.valid_up_to())))?;

        let tree = self
            .parser()?
            .parse(text, None)
            .ok_or_else(|| MalformedSource::new("parser returned no tree"))?;
        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root).start_position();
            return Err(MalformedSource::new(format!(
                "syntax error at line {}, column {}",
                at.row + 1,
                at.column + 1
            )));
        }

        let decls = Declarations::collect(root, source);
        Ok(FileFacts::builder(name)
            .bytes(source.len())
            .lines(count_newlines(source))
            .code_lines(count_code_lines(text))
            .types(decls.types, decls.public_types)
            .functions(decls.functions, decls.public_functions)
            .methods(decls.methods, decls.public_methods)
            .global_variables(decls.global_variables)
            .consts(decls.consts)
            .imports(decls.imports)
            .build())
    }
}

/// Package-scope declaration counts of one file.
#[derive(Debug, Default, PartialEq, Eq)]
struct Declarations {
    types: usize,
    public_types: usize,
    functions: usize,
    public_functions: usize,
    methods: usize,
    public_methods: usize,
    global_variables: usize,
    consts: usize,
    imports: usize,
}

impl Declarations {
    fn collect(root: Node<'_>, src: &[u8]) -> Self {
        let mut decls = Self::default();
        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            match node.kind() {
                "import_declaration" => decls.imports += count_kind(node, "import_spec"),
                "function_declaration" => {
                    decls.functions += 1;
                    decls.public_functions += usize::from(name_is_exported(node, src));
                }
                "method_declaration" => {
                    decls.methods += 1;
                    decls.public_methods += usize::from(name_is_exported(node, src));
                }
                "type_declaration" => {
                    let mut inner = node.walk();
                    for spec in node.named_children(&mut inner) {
                        if matches!(spec.kind(), "type_spec" | "type_alias") {
                            decls.types += 1;
                            decls.public_types += usize::from(name_is_exported(spec, src));
                        }
                    }
                }
                "var_declaration" => decls.global_variables += count_spec_names(node, "var_spec"),
                "const_declaration" => decls.consts += count_spec_names(node, "const_spec"),
                _ => {}
            }
        }
        decls
    }
}

fn name_is_exported(node: Node<'_>, src: &[u8]) -> bool {
    node.child_by_field_name("name")
        .and_then(|n| n.utf8_text(src).ok())
        .is_some_and(is_exported)
}

/// Descendants of `kind`, not descending into matches.
fn count_kind(node: Node<'_>, kind: &str) -> usize {
    if node.kind() == kind {
        return 1;
    }
    let mut cursor = node.walk();
    node.named_children(&mut cursor).map(|child| count_kind(child, kind)).sum()
}

/// Declared names across every `spec` below `node` (`var a, b = 1, 2` is two).
fn count_spec_names(node: Node<'_>, spec: &str) -> usize {
    let mut cursor = node.walk();
    if node.kind() == spec {
        // the name list of a const_spec also yields its `,` tokens
        return node.children_by_field_name("name", &mut cursor).filter(|n| n.is_named()).count();
    }
    let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    children.into_iter().map(|child| count_spec_names(child, spec)).sum()
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
