//! Structural metrics from a tree-sitter syntax tree.
//!
//! One iterative depth-first walk with an explicit stack. Each frame carries the loop
//! depth and conditional depth of its node, so nesting is tracked without recursion
//! and deeply nested submissions cannot overflow the call stack.

use smallvec::SmallVec;
use tree_sitter::{Node, Tree};

use crate::parsing::NodeKinds;

/// A function or method found in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    /// 1-based line of the definition.
    pub start_line: usize,
    /// Source lines spanned, inclusive of the first and last line.
    pub line_span: usize,
    /// Calls its own name somewhere in its body.
    pub recursive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralMetrics {
    pub function_count: u32,
    pub loop_count: u32,
    pub conditional_count: u32,
    pub exception_handler_count: u32,
    pub boolean_op_count: u32,
    pub max_loop_depth: u32,
    pub max_conditional_depth: u32,
    pub functions: Vec<FunctionInfo>,
    pub has_single_letter_identifier: bool,
}

impl StructuralMetrics {
    /// `1 + branches + handlers + Σ(boolean arity − 1)`, with loops counted as branches.
    /// Binary boolean nodes have arity 2, so each contributes one.
    pub fn cyclomatic_complexity(&self) -> u32 {
        1 + self.loop_count
            + self.conditional_count
            + self.exception_handler_count
            + self.boolean_op_count
    }

    pub fn has_recursion(&self) -> bool {
        self.functions.iter().any(|f| f.recursive)
    }
}

#[derive(Clone, Copy)]
struct Frame<'tree> {
    node: Node<'tree>,
    loop_depth: u32,
    cond_depth: u32,
}

const ANONYMOUS: &str = "<anonymous>";

pub fn measure(tree: &Tree, source: &str, kinds: &NodeKinds) -> StructuralMetrics {
    let src = source.as_bytes();
    let mut metrics = StructuralMetrics::default();
    let mut cursor = tree.walk();
    let mut stack: SmallVec<[Frame<'_>; 64]> = SmallVec::new();
    stack.push(Frame {
        node: tree.root_node(),
        loop_depth: 0,
        cond_depth: 0,
    });

    while let Some(Frame {
        node,
        mut loop_depth,
        mut cond_depth,
    }) = stack.pop()
    {
        let kind = node.kind();

        if kinds.is_function(kind) {
            metrics.function_count += 1;
            metrics.functions.push(function_info(node, src, kinds));
        } else if kinds.is_loop(kind) {
            metrics.loop_count += 1;
            loop_depth += 1;
            metrics.max_loop_depth = metrics.max_loop_depth.max(loop_depth);
        } else if kinds.is_branch(kind) {
            metrics.conditional_count += 1;
            if !is_else_if(node, kinds) {
                cond_depth += 1;
            }
            metrics.max_conditional_depth = metrics.max_conditional_depth.max(cond_depth);
        } else if kinds.is_chained_branch(kind) {
            metrics.conditional_count += 1;
        } else if kinds.is_handler(kind) {
            metrics.exception_handler_count += 1;
        } else if kinds.is_identifier(kind) {
            if !metrics.has_single_letter_identifier && is_single_letter(node, src) {
                metrics.has_single_letter_identifier = true;
            }
        }

        let operator = node.child_by_field_name("operator").map(|op| op.kind());
        if kinds.is_boolean_op(kind, operator) {
            metrics.boolean_op_count += 1;
        }

        // Reverse so the leftmost child is popped first and functions stay in source order.
        let children: SmallVec<[Node<'_>; 16]> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev().map(|child| Frame {
            node: child,
            loop_depth,
            cond_depth,
        }));
    }

    metrics
}

/// An `if` continuing an else-chain shares its parent's nesting level.
fn is_else_if(node: Node<'_>, kinds: &NodeKinds) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    if kinds.is_else_wrapper(parent.kind()) {
        return true;
    }
    kinds.is_branch(parent.kind()) && parent.child_by_field_name("alternative") == Some(node)
}

fn is_single_letter(node: Node<'_>, src: &[u8]) -> bool {
    node.utf8_text(src)
        .map(|text| {
            let text = text.trim_start_matches('$');
            text.len() == 1 && text.bytes().all(|b| b.is_ascii_lowercase())
        })
        .unwrap_or(false)
}

fn function_info(node: Node<'_>, src: &[u8], kinds: &NodeKinds) -> FunctionInfo {
    let name = function_name(node, src).unwrap_or(ANONYMOUS).to_string();
    let start = node.start_position().row;
    let end = node.end_position().row;
    let recursive = name != ANONYMOUS && calls_name(node, &name, src, kinds);
    FunctionInfo {
        start_line: start + 1,
        line_span: end.saturating_sub(start) + 1,
        recursive,
        name,
    }
}

/// Declared name, or the variable an anonymous function is bound to.
fn function_name<'a>(node: Node<'_>, src: &'a [u8]) -> Option<&'a str> {
    let name_node = node.child_by_field_name("name").or_else(|| {
        node.parent()
            .filter(|p| p.kind() == "variable_declarator")
            .and_then(|p| p.child_by_field_name("name"))
    })?;
    name_node.utf8_text(src).ok()
}

/// Final segment of a call target: `fib` in `fib(n)`, `self.fib(n)`, `this.fib(n)`.
fn callee_name<'a>(call: Node<'_>, src: &'a [u8]) -> Option<&'a str> {
    let target = ["function", "method", "name"]
        .iter()
        .find_map(|field| call.child_by_field_name(field))?;
    let leaf = ["property", "attribute", "field", "name"]
        .iter()
        .find_map(|field| target.child_by_field_name(field))
        .unwrap_or(target);
    leaf.utf8_text(src).ok()
}

fn calls_name(function: Node<'_>, name: &str, src: &[u8], kinds: &NodeKinds) -> bool {
    let mut cursor = function.walk();
    let mut stack: SmallVec<[Node<'_>; 32]> = function.children(&mut cursor).collect();
    while let Some(node) = stack.pop() {
        if kinds.is_call(node.kind()) && callee_name(node, src) == Some(name) {
            return true;
        }
        stack.extend(node.children(&mut cursor));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::parsing;

    fn measure_src(source: &str, language: Language) -> StructuralMetrics {
        let tree = parsing::parse(source, language).unwrap();
        measure(&tree, source, NodeKinds::for_language(language))
    }

    #[test]
    fn python_counts() {
        let src = "\
def classify(xs):
    total = 0
    for x in xs:
        if x > 0 and x < 10:
            total += 1
        elif x == 0:
            pass
    try:
        return total
    except ValueError:
        return -1
";
        let m = measure_src(src, Language::Python);
        assert_eq!(m.function_count, 1);
        assert_eq!(m.loop_count, 1);
        assert_eq!(m.conditional_count, 2);
        assert_eq!(m.exception_handler_count, 1);
        assert_eq!(m.boolean_op_count, 1);
        assert_eq!(m.max_loop_depth, 1);
        assert_eq!(m.max_conditional_depth, 1);
        // 1 + 1 loop + 2 conditionals + 1 handler + 1 boolean
        assert_eq!(m.cyclomatic_complexity(), 6);
        assert!(m.has_single_letter_identifier);
    }

    #[test]
    fn nested_loops_track_depth() {
        let src = "\
function pairs(items) {
  for (const a of items) {
    for (const b of items) {
      while (false) {}
    }
  }
  for (let k = 0; k < 3; k++) {}
}
";
        let m = measure_src(src, Language::JavaScript);
        assert_eq!(m.loop_count, 4);
        assert_eq!(m.max_loop_depth, 3);
    }

    #[test]
    fn else_if_chain_stays_flat() {
        let src = "\
function grade(score) {
  if (score > 90) { return 'a'; }
  else if (score > 80) { return 'b'; }
  else if (score > 70) { return 'c'; }
  return 'f';
}
";
        let m = measure_src(src, Language::JavaScript);
        assert_eq!(m.conditional_count, 3);
        assert_eq!(m.max_conditional_depth, 1);
    }

    #[test]
    fn only_short_circuit_operators_count() {
        let src = "function f(p, q) { return (p && q) || p + q > 1; }\n";
        let m = measure_src(src, Language::JavaScript);
        assert_eq!(m.boolean_op_count, 2);
    }

    #[test]
    fn detects_self_recursion() {
        let src = "\
def fib(num):
    if num < 2:
        return num
    return fib(num - 1) + fib(num - 2)
";
        let m = measure_src(src, Language::Python);
        assert!(m.has_recursion());
        assert_eq!(m.functions[0].name, "fib");
        assert_eq!(m.functions[0].line_span, 4);
        assert!(!m.has_single_letter_identifier);
    }

    #[test]
    fn arrow_function_takes_binding_name() {
        let src = "const countDown = (num) => num <= 0 ? 0 : countDown(num - 1);\n";
        let m = measure_src(src, Language::JavaScript);
        assert_eq!(m.functions[0].name, "countDown");
        assert!(m.functions[0].recursive);
    }

    #[test]
    fn rust_loops_and_ifs() {
        let src = "\
fn total(items: &[u32]) -> u32 {
    let mut sum = 0;
    for item in items {
        if *item > 2 || *item == 0 {
            sum += item;
        }
    }
    sum
}
";
        let m = measure_src(src, Language::Rust);
        assert_eq!(m.function_count, 1);
        assert_eq!(m.loop_count, 1);
        assert_eq!(m.conditional_count, 1);
        assert_eq!(m.boolean_op_count, 1);
    }
}
