//! C++ AST walk using tree-sitter: extracts top-level type declarations.

use crate::{Declaration, DeclarationKind};

/// Parse `source` and collect top-level class/struct/enum/union definitions.
///
/// Bodiless nodes (forward declarations) are skipped. The walk recurses
/// through namespaces, `extern "C"` blocks, templates and preprocessor
/// conditionals, but not into type bodies: nested types are members of their
/// enclosing type, not top-level declarations.
pub(crate) fn parse_cpp_declarations(
    parser: &mut tree_sitter::Parser,
    source: &str,
) -> Vec<Declaration> {
    let tree = match parser.parse(source, None) {
        Some(t) => t,
        None => return Vec::new(),
    };

    let mut decls = Vec::new();
    walk_cpp_node(tree.root_node(), source.as_bytes(), &mut decls);
    decls
}

fn walk_cpp_node(node: tree_sitter::Node, source: &[u8], decls: &mut Vec<Declaration>) {
    let kind = match node.kind() {
        "class_specifier" => Some(DeclarationKind::Class),
        "struct_specifier" => Some(DeclarationKind::Struct),
        "enum_specifier" => Some(DeclarationKind::Enum),
        "union_specifier" => Some(DeclarationKind::Union),
        _ => None,
    };

    if let Some(kind) = kind {
        // Name + body required: `class Foo;` is a forward declaration,
        // anonymous `struct { ... }` has nothing to match a query against.
        if let (Some(name_node), Some(_body)) = (
            node.child_by_field_name("name"),
            node.child_by_field_name("body"),
        ) {
            let name = node_text(name_node, source).to_string();
            decls.push(Declaration {
                name,
                kind,
                line_start: node.start_position().row as u32 + 1,
                line_end: node.end_position().row as u32 + 1,
                signature: first_line(node_text(node, source)),
            });
            return; // don't descend into the type body
        }
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            walk_cpp_node(child, source, decls);
        }
    }
}

fn node_text<'a>(node: tree_sitter::Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Vec<Declaration> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .unwrap();
        parse_cpp_declarations(&mut parser, source)
    }

    #[test]
    fn test_all_four_kinds() {
        let decls = parse(
            "class A {};\n\
             struct B { int x; };\n\
             enum C { RED, GREEN };\n\
             union D { int i; float f; };\n",
        );
        let kinds: Vec<_> = decls.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DeclarationKind::Class,
                DeclarationKind::Struct,
                DeclarationKind::Enum,
                DeclarationKind::Union
            ]
        );
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_forward_declaration_skipped() {
        let decls = parse("class Forward;\nclass Real {};\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "Real");
    }

    #[test]
    fn test_anonymous_struct_skipped() {
        let decls = parse("typedef struct { int x; } Anon;\n");
        assert!(decls.is_empty());
    }

    #[test]
    fn test_nested_type_not_extracted() {
        let decls = parse(
            "class Outer {\n\
             public:\n\
               class Inner {};\n\
             };\n",
        );
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "Outer");
    }

    #[test]
    fn test_namespace_traversed() {
        let decls = parse(
            "namespace ui {\n\
             namespace tests {\n\
             class PathFilter {};\n\
             }\n\
             }\n",
        );
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "PathFilter");
        assert_eq!(decls[0].line_start, 3);
    }

    #[test]
    fn test_template_class() {
        let decls = parse("template <typename T>\nclass Container { T value; };\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "Container");
        assert_eq!(decls[0].signature, "class Container { T value; };");
    }

    #[test]
    fn test_enum_class() {
        let decls = parse("enum class Color : int { Red, Green };\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "Color");
        assert_eq!(decls[0].kind, DeclarationKind::Enum);
    }

    #[test]
    fn test_extern_c_traversed() {
        let decls = parse("extern \"C\" {\nstruct CApi { int v; };\n}\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "CApi");
    }

    #[test]
    fn test_line_span_and_signature() {
        let decls = parse("// header\nclass CaseSensitiveness1 {\n  int field;\n};\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].line_start, 2);
        assert_eq!(decls[0].line_end, 4);
        assert_eq!(decls[0].signature, "class CaseSensitiveness1 {");
    }

    #[test]
    fn test_garbage_input_yields_empty_or_partial_never_panics() {
        // tree-sitter produces an ERROR tree for garbage; the walk must stay total
        let decls = parse("%%% not c++ at all @@@");
        assert!(decls.is_empty());
    }
}
