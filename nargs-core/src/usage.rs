//! Identifier-read analysis over a single callable unit's body.
//!
//! A checkable name counts as used only when the identifier's value is
//! observed somewhere in the body. Positions that never observe a value:
//! - plain-identifier targets of `=` assignments (pure writes)
//! - names introduced by `:=`, `var`, `const`, and `range` bindings
//! - type positions (the Go grammar emits `type_identifier`,
//!   `field_identifier`, and `package_identifier` for those, so a plain
//!   `identifier` filter excludes them structurally)
//!
//! Everything else is a read, including compound assignments (`x += 1`),
//! `x++`/`x--`, indexed or selector assignment targets (`x[i] = v` reads
//! `x`), and reads captured by nested function literals.
//!
//! Lexical scope is an explicit stack of name frames. The frame at the
//! bottom belongs to the unit under analysis; a frame is pushed for every
//! nested unit so that an inner declaration of the same spelling shadows
//! the outer name instead of marking it used.

use std::collections::HashSet;

use tree_sitter::Node;

use crate::extract::{declared_names, CallableUnit};

/// Names from `unit.checkable` that are never read in `unit.body`,
/// in declaration order.
///
/// Pure function of the unit: no I/O and no shared state, so results are
/// deterministic and units can be analyzed in parallel.
pub fn find_unused(unit: &CallableUnit<'_>, source: &str) -> Vec<String> {
    if unit.checkable.is_empty() {
        return Vec::new();
    }

    let own: HashSet<&str> = unit.checkable.iter().map(|c| c.name.as_str()).collect();
    let mut scopes: Vec<HashSet<String>> = Vec::new();
    let mut used: HashSet<String> = HashSet::new();

    walk(unit.body, source, &own, &mut scopes, &mut used);

    unit.checkable
        .iter()
        .filter(|c| !used.contains(&c.name))
        .map(|c| c.name.clone())
        .collect()
}

/// Recursive body walk.
///
/// `own` is the unit's checkable-name set (the bottom scope frame);
/// `scopes` holds one frame per nested unit currently entered. A read
/// resolves innermost-out and is recorded only when no nested frame owns
/// the name.
fn walk(
    node: Node<'_>,
    source: &str,
    own: &HashSet<&str>,
    scopes: &mut Vec<HashSet<String>>,
    used: &mut HashSet<String>,
) {
    match node.kind() {
        // Nested unit: its declared names shadow ours inside its body.
        // The parameter list itself is all declarations, never reads.
        "func_literal" | "function_declaration" | "method_declaration" => {
            let frame: HashSet<String> = declared_names(node, source).into_iter().collect();
            scopes.push(frame);
            if let Some(body) = node.child_by_field_name("body") {
                walk(body, source, own, scopes, used);
            }
            scopes.pop();
        }

        // x := expr — the left side declares, only the right side reads.
        "short_var_declaration" => {
            if let Some(right) = node.child_by_field_name("right") {
                walk(right, source, own, scopes, used);
            }
        }

        // Plain identifiers on the left of `=` are pure writes; compound
        // operators (`+=`, `&^=`, ...) read their targets. Non-identifier
        // targets like x[i] or x.f read the underlying value either way.
        "assignment_statement" => {
            let compound = node
                .child_by_field_name("operator")
                .and_then(|op| op.utf8_text(source.as_bytes()).ok())
                .is_some_and(|op| op != "=");
            if let Some(left) = node.child_by_field_name("left") {
                let mut cursor = left.walk();
                for target in left.named_children(&mut cursor) {
                    if compound || target.kind() != "identifier" {
                        walk(target, source, own, scopes, used);
                    }
                }
            }
            if let Some(right) = node.child_by_field_name("right") {
                walk(right, source, own, scopes, used);
            }
        }

        // var x T = expr / const x = expr — names declare, values and
        // types (array lengths can embed expressions) may read.
        "var_spec" | "const_spec" => {
            if let Some(ty) = node.child_by_field_name("type") {
                walk(ty, source, own, scopes, used);
            }
            if let Some(value) = node.child_by_field_name("value") {
                walk(value, source, own, scopes, used);
            }
        }

        // for k, v := range expr — bindings declare (or are written when
        // the clause uses `=` with non-identifier targets), expr reads.
        "range_clause" => {
            if let Some(left) = node.child_by_field_name("left") {
                let mut cursor = left.walk();
                for target in left.named_children(&mut cursor) {
                    if target.kind() != "identifier" {
                        walk(target, source, own, scopes, used);
                    }
                }
            }
            if let Some(right) = node.child_by_field_name("right") {
                walk(right, source, own, scopes, used);
            }
        }

        "identifier" => {
            if let Ok(name) = node.utf8_text(source.as_bytes()) {
                resolve_read(name, own, scopes, used);
            }
        }

        _ => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                walk(child, source, own, scopes, used);
            }
        }
    }
}

/// Attribute a read to the nearest enclosing declaration of `name`.
///
/// Only reads that fall through every nested frame belong to the unit
/// under analysis.
fn resolve_read(
    name: &str,
    own: &HashSet<&str>,
    scopes: &[HashSet<String>],
    used: &mut HashSet<String>,
) {
    for frame in scopes.iter().rev() {
        if frame.contains(name) {
            return;
        }
    }
    if own.contains(name) {
        used.insert(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_units;
    use crate::flags::Flags;
    use crate::parse::{parse_source, ParsedFile};
    use std::path::Path;

    fn parse(src: &str) -> ParsedFile {
        parse_source(Path::new("test.go"), src.to_string()).unwrap()
    }

    fn unused_for(parsed: &ParsedFile, flags: &Flags, unit_name: &str) -> Vec<String> {
        let units = extract_units(parsed, flags, false);
        let unit = units
            .iter()
            .find(|u| u.name == unit_name)
            .unwrap_or_else(|| panic!("no unit named {unit_name}"));
        find_unused(unit, &parsed.source)
    }

    #[test]
    fn test_unread_parameter_reported() {
        let parsed = parse("package main\n\nfunc f(a int, b int) int {\n\treturn a\n}\n");
        assert_eq!(unused_for(&parsed, &Flags::default(), "f"), vec!["b"]);
    }

    #[test]
    fn test_all_parameters_read() {
        let parsed = parse("package main\n\nfunc f(a int, b int) int {\n\treturn a + b\n}\n");
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_call_argument_counts_as_read() {
        let parsed =
            parse("package main\n\nfunc f(a int) {\n\tprintln(a)\n}\n");
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_pure_write_is_not_a_read() {
        let parsed = parse("package main\n\nfunc f(a int) {\n\ta = 1\n}\n");
        assert_eq!(unused_for(&parsed, &Flags::default(), "f"), vec!["a"]);
    }

    #[test]
    fn test_compound_assignment_is_a_read() {
        let parsed = parse("package main\n\nfunc f(a int) {\n\ta += 1\n}\n");
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_increment_is_a_read() {
        let parsed = parse("package main\n\nfunc f(a int) {\n\ta++\n}\n");
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_index_assignment_target_reads_base() {
        let parsed = parse("package main\n\nfunc f(xs []int) {\n\txs[0] = 1\n}\n");
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_condition_counts_as_read() {
        let parsed = parse(
            "package main\n\nfunc f(n int) int {\n\tif n > 0 {\n\t\treturn 1\n\t}\n\treturn 0\n}\n",
        );
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_range_expression_counts_as_read() {
        let parsed = parse(
            "package main\n\nfunc f(xs []int) int {\n\ttotal := 0\n\tfor _, v := range xs {\n\t\ttotal += v\n\t}\n\treturn total\n}\n",
        );
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_short_var_rhs_counts_as_read() {
        let parsed = parse("package main\n\nfunc f(a int) int {\n\tb := a\n\treturn b\n}\n");
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_capture_in_nested_closure_counts_as_read() {
        let parsed = parse(
            "package main\n\nfunc f(a int) func() int {\n\treturn func() int {\n\t\treturn a\n\t}\n}\n",
        );
        assert!(unused_for(&parsed, &Flags::default(), "f").is_empty());
    }

    #[test]
    fn test_shadowing_closure_parameter_does_not_use_outer() {
        let src = "package main\n\nfunc outer(x int) {\n\tinner := func(x int) int {\n\t\treturn x\n\t}\n\tinner(1)\n}\n";
        let parsed = parse(src);
        // The read of x inside inner belongs to inner's own parameter.
        assert_eq!(unused_for(&parsed, &Flags::default(), "outer"), vec!["x"]);
        assert!(unused_for(&parsed, &Flags::default(), "inner").is_empty());
    }

    #[test]
    fn test_shadowed_and_captured_names_in_same_unit() {
        // x is redeclared by the closure (outer x stays unused); y is
        // captured by the same closure (outer y becomes used).
        let src = concat!(
            "package main\n\n",
            "func outer(x int, y int) int {\n",
            "\tsum := func(x int) int {\n",
            "\t\treturn x + y\n",
            "\t}\n",
            "\treturn sum(1)\n",
            "}\n",
        );
        let parsed = parse(src);
        assert_eq!(unused_for(&parsed, &Flags::default(), "outer"), vec!["x"]);
        assert!(unused_for(&parsed, &Flags::default(), "sum").is_empty());
    }

    #[test]
    fn test_read_before_shadow_still_counts() {
        let src = "package main\n\nfunc outer(x int) {\n\tprintln(x)\n\tinner := func(x int) int {\n\t\treturn x\n\t}\n\tinner(1)\n}\n";
        let parsed = parse(src);
        assert!(unused_for(&parsed, &Flags::default(), "outer").is_empty());
    }

    #[test]
    fn test_doubly_nested_shadowing() {
        let src = concat!(
            "package main\n\n",
            "func outer(x int) {\n",
            "\tmid := func(x int) {\n",
            "\t\tdeep := func() int {\n",
            "\t\t\treturn x\n",
            "\t\t}\n",
            "\t\tdeep()\n",
            "\t}\n",
            "\tmid(1)\n",
            "}\n",
        );
        let parsed = parse(src);
        // x inside deep resolves to mid's parameter, not outer's.
        assert_eq!(unused_for(&parsed, &Flags::default(), "outer"), vec!["x"]);
        assert!(unused_for(&parsed, &Flags::default(), "mid").is_empty());
    }

    #[test]
    fn test_unused_receiver() {
        let src = "package main\n\ntype t struct{}\n\nfunc (r t) m(x int) int {\n\treturn x\n}\n";
        let parsed = parse(src);
        let flags = Flags {
            include_receivers: true,
            ..Flags::default()
        };
        assert_eq!(unused_for(&parsed, &flags, "m"), vec!["r"]);
    }

    #[test]
    fn test_used_receiver() {
        let src = "package main\n\ntype t struct{ n int }\n\nfunc (r t) m() int {\n\treturn r.n\n}\n";
        let parsed = parse(src);
        let flags = Flags {
            include_receivers: true,
            ..Flags::default()
        };
        assert!(unused_for(&parsed, &flags, "m").is_empty());
    }

    #[test]
    fn test_named_return_pure_write_is_unused() {
        let src = "package main\n\nfunc f(x int) (out int) {\n\tout = x\n\treturn\n}\n";
        let parsed = parse(src);
        let flags = Flags {
            include_named_returns: true,
            ..Flags::default()
        };
        assert_eq!(unused_for(&parsed, &flags, "f"), vec!["out"]);
    }

    #[test]
    fn test_named_return_read_is_used() {
        let src = "package main\n\nfunc f(x int) (out int) {\n\tout = x\n\treturn out + 1\n}\n";
        let parsed = parse(src);
        let flags = Flags {
            include_named_returns: true,
            ..Flags::default()
        };
        assert!(unused_for(&parsed, &flags, "f").is_empty());
    }

    #[test]
    fn test_result_order_mirrors_declaration_order() {
        let parsed = parse("package main\n\nfunc f(a int, b int, c int) {\n\tprintln(b)\n}\n");
        assert_eq!(unused_for(&parsed, &Flags::default(), "f"), vec!["a", "c"]);
    }

    #[test]
    fn test_selector_field_is_not_a_read_of_same_named_param() {
        // obj.n must not count as a read of parameter n.
        let src = "package main\n\ntype t struct{ n int }\n\nfunc f(n int, obj t) int {\n\treturn obj.n\n}\n";
        let parsed = parse(src);
        assert_eq!(unused_for(&parsed, &Flags::default(), "f"), vec!["n"]);
    }

    #[test]
    fn test_type_position_is_not_a_read() {
        // A type spelled like the parameter must not mark it used.
        let src = "package main\n\ntype v struct{}\n\nfunc f(v int) {\n\tvar x []v\n\t_ = x\n}\n";
        let parsed = parse(src);
        assert_eq!(unused_for(&parsed, &Flags::default(), "f"), vec!["v"]);
    }
}
