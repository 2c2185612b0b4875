//! Callable-unit extraction from the Go syntax tree.
//!
//! Enumerates every function declaration, method declaration, and function
//! literal in textual order, together with the declared names that are
//! eligible for the unused check under the active [`Flags`]:
//! - ordinary parameters (always, including variadic ones)
//! - method receivers (only with `include_receivers`)
//! - named return values (only with `include_named_returns`)
//!
//! The blank identifier `_` is never checkable.

use tree_sitter::Node;

use crate::flags::Flags;
use crate::parse::{line_of, ParsedFile};

/// Display name used for function literals not assigned to a variable.
pub const ANONYMOUS_UNIT: &str = "anonymous";

/// Role of a checkable name within its unit's signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Parameter,
    NamedReturn,
    Receiver,
}

/// One declared name eligible for the unused check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckableName {
    pub name: String,
    pub role: Role,
}

/// One function, method, or function literal.
///
/// `body` borrows from the file's syntax tree, so units only live as long
/// as the [`ParsedFile`] they came from.
#[derive(Debug, Clone)]
pub struct CallableUnit<'tree> {
    /// Function or method identifier; for literals, the variable the
    /// literal is assigned to, or [`ANONYMOUS_UNIT`].
    pub name: String,
    /// 1-based line of the unit's signature.
    pub line: usize,
    /// Declared names to check, in signature order: receiver, then
    /// parameters, then named returns.
    pub checkable: Vec<CheckableName>,
    pub body: Node<'tree>,
}

/// Whether a path names a Go test file.
pub fn is_test_file(path: &std::path::Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with("_test.go"))
}

/// Extract all callable units from a parsed file, in source order.
///
/// Test files yield no units unless `include_tests` is set. Declarations
/// without a body (assembly or externally linked functions) are skipped:
/// their parameters cannot be read anywhere, and flagging them would be
/// pure noise.
pub fn extract_units<'tree>(
    parsed: &'tree ParsedFile,
    flags: &Flags,
    is_test: bool,
) -> Vec<CallableUnit<'tree>> {
    if is_test && !flags.include_tests {
        return Vec::new();
    }

    let mut units = Vec::new();
    collect_units(parsed.root(), &parsed.source, flags, &mut units);
    units
}

/// Pre-order walk; pre-order visitation yields textual (and therefore
/// ascending-line) order, with outer units before the literals nested in
/// them.
fn collect_units<'tree>(
    node: Node<'tree>,
    source: &str,
    flags: &Flags,
    units: &mut Vec<CallableUnit<'tree>>,
) {
    match node.kind() {
        "function_declaration" | "method_declaration" | "func_literal" => {
            if let Some(unit) = build_unit(node, source, flags) {
                units.push(unit);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_units(child, source, flags, units);
    }
}

fn build_unit<'tree>(node: Node<'tree>, source: &str, flags: &Flags) -> Option<CallableUnit<'tree>> {
    let body = node.child_by_field_name("body")?;

    let name = match node.kind() {
        "func_literal" => {
            literal_name(node, source).unwrap_or_else(|| ANONYMOUS_UNIT.to_string())
        }
        _ => node_text(node.child_by_field_name("name")?, source),
    };

    let mut checkable = Vec::new();

    if node.kind() == "method_declaration" && flags.include_receivers {
        if let Some(receiver) = node.child_by_field_name("receiver") {
            push_parameter_names(receiver, source, Role::Receiver, &mut checkable);
        }
    }

    if let Some(parameters) = node.child_by_field_name("parameters") {
        push_parameter_names(parameters, source, Role::Parameter, &mut checkable);
    }

    if flags.include_named_returns {
        if let Some(result) = node.child_by_field_name("result") {
            // A bare result type has no names; only a parenthesized
            // parameter list can declare named returns.
            if result.kind() == "parameter_list" {
                push_parameter_names(result, source, Role::NamedReturn, &mut checkable);
            }
        }
    }

    Some(CallableUnit {
        name,
        line: line_of(node),
        checkable,
        body,
    })
}

/// Collect the declared identifiers of a `parameter_list`, in order.
///
/// Grouped declarations (`a, b int`) contribute one name per identifier.
fn push_parameter_names(
    list: Node<'_>,
    source: &str,
    role: Role,
    out: &mut Vec<CheckableName>,
) {
    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        match decl.kind() {
            "parameter_declaration" => {
                let mut names = decl.walk();
                for ident in decl.children_by_field_name("name", &mut names) {
                    push_checkable(ident, source, role, out);
                }
            }
            "variadic_parameter_declaration" => {
                if let Some(ident) = decl.child_by_field_name("name") {
                    push_checkable(ident, source, role, out);
                }
            }
            _ => {}
        }
    }
}

fn push_checkable(ident: Node<'_>, source: &str, role: Role, out: &mut Vec<CheckableName>) {
    let name = node_text(ident, source);
    if name != "_" {
        out.push(CheckableName { name, role });
    }
}

/// All names a unit declares, independent of policy flags.
///
/// The usage analyzer pushes these as a scope frame when it descends into
/// a nested unit: an inner declaration shadows an outer name whether or
/// not the inner name is itself checkable.
pub fn declared_names(node: Node<'_>, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    if let Some(receiver) = node.child_by_field_name("receiver") {
        collect_list_names(receiver, source, &mut names);
    }
    if let Some(parameters) = node.child_by_field_name("parameters") {
        collect_list_names(parameters, source, &mut names);
    }
    if let Some(result) = node.child_by_field_name("result") {
        if result.kind() == "parameter_list" {
            collect_list_names(result, source, &mut names);
        }
    }
    names
}

fn collect_list_names(list: Node<'_>, source: &str, out: &mut Vec<String>) {
    let mut scratch = Vec::new();
    push_parameter_names(list, source, Role::Parameter, &mut scratch);
    out.extend(scratch.into_iter().map(|c| c.name));
}

/// Resolve a function literal's display name from its assignment target.
///
/// Handles `x := func(...)`, `x = func(...)`, and `var x = func(...)`,
/// including multi-assignment by positional matching.
fn literal_name(node: Node<'_>, source: &str) -> Option<String> {
    let parent = node.parent()?;
    if parent.kind() != "expression_list" {
        return None;
    }
    let index = child_index(parent, node)?;
    let stmt = parent.parent()?;

    let target = match stmt.kind() {
        "short_var_declaration" | "assignment_statement" => {
            let left = stmt.child_by_field_name("left")?;
            left.named_child(index)?
        }
        "var_spec" => {
            let mut cursor = stmt.walk();
            let name = stmt.children_by_field_name("name", &mut cursor).nth(index);
            name?
        }
        _ => return None,
    };

    (target.kind() == "identifier").then(|| node_text(target, source))
}

/// Position of `node` among its parent's named children.
fn child_index(parent: Node<'_>, node: Node<'_>) -> Option<usize> {
    let mut cursor = parent.walk();
    let index = parent
        .named_children(&mut cursor)
        .position(|c| c.id() == node.id());
    index
}

fn node_text(node: Node<'_>, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}
