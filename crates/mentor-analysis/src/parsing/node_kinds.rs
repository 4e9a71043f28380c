//! Per-language tree-sitter node kinds that the structural walk counts.

use crate::language::Language;

/// Node kinds for one grammar.
#[derive(Debug, Clone, Copy)]
pub struct NodeKinds {
    pub functions: &'static [&'static str],
    pub loops: &'static [&'static str],
    /// Conditionals that open a new nesting level.
    pub branches: &'static [&'static str],
    /// Conditionals that continue an existing chain (`elif`, `elsif`, ...).
    pub chained_branches: &'static [&'static str],
    /// Parent kinds whose `if` child is an `else if`.
    pub else_wrappers: &'static [&'static str],
    pub handlers: &'static [&'static str],
    pub boolean_ops: &'static [&'static str],
    /// Accepted operator tokens for `boolean_ops`; empty means any operator.
    pub boolean_operators: &'static [&'static str],
    pub calls: &'static [&'static str],
    pub identifiers: &'static [&'static str],
}

const SHORT_CIRCUIT: &[&str] = &["&&", "||"];

const PYTHON: NodeKinds = NodeKinds {
    functions: &["function_definition"],
    loops: &["for_statement", "while_statement"],
    branches: &["if_statement"],
    chained_branches: &["elif_clause"],
    else_wrappers: &[],
    handlers: &["except_clause"],
    boolean_ops: &["boolean_operator"],
    boolean_operators: &[],
    calls: &["call"],
    identifiers: &["identifier"],
};

const JAVASCRIPT: NodeKinds = NodeKinds {
    functions: &[
        "function_declaration",
        "function_expression",
        "generator_function_declaration",
        "arrow_function",
        "method_definition",
    ],
    loops: &[
        "for_statement",
        "for_in_statement",
        "while_statement",
        "do_statement",
    ],
    branches: &["if_statement"],
    chained_branches: &[],
    else_wrappers: &["else_clause"],
    handlers: &["catch_clause"],
    boolean_ops: &["binary_expression"],
    boolean_operators: SHORT_CIRCUIT,
    calls: &["call_expression"],
    identifiers: &["identifier"],
};

const JAVA: NodeKinds = NodeKinds {
    functions: &["method_declaration", "constructor_declaration"],
    loops: &[
        "for_statement",
        "enhanced_for_statement",
        "while_statement",
        "do_statement",
    ],
    branches: &["if_statement"],
    chained_branches: &[],
    else_wrappers: &[],
    handlers: &["catch_clause"],
    boolean_ops: &["binary_expression"],
    boolean_operators: SHORT_CIRCUIT,
    calls: &["method_invocation"],
    identifiers: &["identifier"],
};

const CSHARP: NodeKinds = NodeKinds {
    functions: &[
        "method_declaration",
        "constructor_declaration",
        "local_function_statement",
    ],
    loops: &[
        "for_statement",
        "foreach_statement",
        "while_statement",
        "do_statement",
    ],
    branches: &["if_statement"],
    chained_branches: &[],
    else_wrappers: &[],
    handlers: &["catch_clause"],
    boolean_ops: &["binary_expression"],
    boolean_operators: SHORT_CIRCUIT,
    calls: &["invocation_expression"],
    identifiers: &["identifier"],
};

const GO: NodeKinds = NodeKinds {
    functions: &["function_declaration", "method_declaration", "func_literal"],
    loops: &["for_statement"],
    branches: &["if_statement"],
    chained_branches: &[],
    else_wrappers: &[],
    handlers: &[],
    boolean_ops: &["binary_expression"],
    boolean_operators: SHORT_CIRCUIT,
    calls: &["call_expression"],
    identifiers: &["identifier"],
};

const RUST: NodeKinds = NodeKinds {
    functions: &["function_item"],
    loops: &["for_expression", "while_expression", "loop_expression"],
    branches: &["if_expression"],
    chained_branches: &[],
    else_wrappers: &["else_clause"],
    handlers: &[],
    boolean_ops: &["binary_expression"],
    boolean_operators: SHORT_CIRCUIT,
    calls: &["call_expression"],
    identifiers: &["identifier"],
};

const RUBY: NodeKinds = NodeKinds {
    functions: &["method", "singleton_method"],
    loops: &["for", "while", "until", "while_modifier", "until_modifier"],
    branches: &["if", "unless", "if_modifier", "unless_modifier"],
    chained_branches: &["elsif"],
    else_wrappers: &[],
    handlers: &["rescue"],
    boolean_ops: &["binary"],
    boolean_operators: &["&&", "||", "and", "or"],
    calls: &["call"],
    identifiers: &["identifier"],
};

const PHP: NodeKinds = NodeKinds {
    functions: &["function_definition", "method_declaration", "anonymous_function"],
    loops: &[
        "for_statement",
        "foreach_statement",
        "while_statement",
        "do_statement",
    ],
    branches: &["if_statement"],
    chained_branches: &["else_if_clause"],
    else_wrappers: &["else_clause"],
    handlers: &["catch_clause"],
    boolean_ops: &["binary_expression"],
    boolean_operators: &["&&", "||", "and", "or"],
    calls: &["function_call_expression", "member_call_expression"],
    identifiers: &["name"],
};

impl NodeKinds {
    pub fn for_language(language: Language) -> &'static NodeKinds {
        match language {
            Language::Python => &PYTHON,
            Language::JavaScript | Language::TypeScript | Language::Tsx => &JAVASCRIPT,
            Language::Java => &JAVA,
            Language::CSharp => &CSHARP,
            Language::Go => &GO,
            Language::Rust => &RUST,
            Language::Ruby => &RUBY,
            Language::Php => &PHP,
        }
    }

    pub fn is_function(&self, kind: &str) -> bool {
        self.functions.contains(&kind)
    }

    pub fn is_loop(&self, kind: &str) -> bool {
        self.loops.contains(&kind)
    }

    pub fn is_branch(&self, kind: &str) -> bool {
        self.branches.contains(&kind)
    }

    pub fn is_chained_branch(&self, kind: &str) -> bool {
        self.chained_branches.contains(&kind)
    }

    pub fn is_else_wrapper(&self, kind: &str) -> bool {
        self.else_wrappers.contains(&kind)
    }

    pub fn is_handler(&self, kind: &str) -> bool {
        self.handlers.contains(&kind)
    }

    pub fn is_call(&self, kind: &str) -> bool {
        self.calls.contains(&kind)
    }

    pub fn is_identifier(&self, kind: &str) -> bool {
        self.identifiers.contains(&kind)
    }

    /// Whether `node_kind` with operator token `operator` is a short-circuit boolean.
    pub fn is_boolean_op(&self, node_kind: &str, operator: Option<&str>) -> bool {
        if !self.boolean_ops.contains(&node_kind) {
            return false;
        }
        if self.boolean_operators.is_empty() {
            return true;
        }
        operator.is_some_and(|op| self.boolean_operators.contains(&op))
    }
}
