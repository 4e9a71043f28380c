//! Tree-sitter parsing with thread_local parser instances.

pub mod node_kinds;

use std::borrow::Cow;
use std::cell::RefCell;

use rustc_hash::FxHashMap;
use tree_sitter::{Node, Parser, Tree};

use crate::language::Language;

pub use node_kinds::NodeKinds;

/// Why the structural path could not be used. `Display` is the recorded issue text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralParseError {
    #[error("Syntax error: {count} malformed region(s), first at line {first_line}; used text-signature analysis")]
    Malformed { count: u32, first_line: usize },

    #[error("Syntax error: parser produced no tree; used text-signature analysis")]
    NoTree,

    #[error("Structural parser unavailable for {language}: {message}; used text-signature analysis")]
    GrammarUnavailable { language: Language, message: String },
}

thread_local! {
    static PARSERS: RefCell<FxHashMap<Language, Parser>> = RefCell::new(FxHashMap::default());
}

/// Blank out PHP open/close tags so the tag-less grammar sees plain statements.
/// Byte offsets and line numbers are preserved.
pub fn prepare_source(source: &str, language: Language) -> Cow<'_, str> {
    if language != Language::Php {
        return Cow::Borrowed(source);
    }
    let mut text = source.to_string();
    let leading = text.len() - text.trim_start().len();
    for tag in ["<?php", "<?"] {
        if text[leading..].starts_with(tag) {
            text.replace_range(leading..leading + tag.len(), &" ".repeat(tag.len()));
            break;
        }
    }
    let trimmed_end = text.trim_end().len();
    if text[..trimmed_end].ends_with("?>") {
        text.replace_range(trimmed_end - 2..trimmed_end, "  ");
    }
    Cow::Owned(text)
}

/// Parse `source`, rejecting trees that contain ERROR or MISSING nodes.
pub fn parse(source: &str, language: Language) -> Result<Tree, StructuralParseError> {
    let tree = PARSERS.with(|cell| {
        let mut parsers = cell.borrow_mut();
        if !parsers.contains_key(&language) {
            let mut parser = Parser::new();
            parser
                .set_language(&language.ts_language())
                .map_err(|e| StructuralParseError::GrammarUnavailable {
                    language,
                    message: e.to_string(),
                })?;
            parsers.insert(language, parser);
        }
        parsers
            .get_mut(&language)
            .and_then(|parser| parser.parse(source, None))
            .ok_or(StructuralParseError::NoTree)
    })?;

    let root = tree.root_node();
    if root.has_error() {
        let (count, first_row) = count_errors(root);
        return Err(StructuralParseError::Malformed {
            count: count.max(1),
            first_line: first_row.unwrap_or(root.start_position().row) + 1,
        });
    }
    Ok(tree)
}

/// Count ERROR and MISSING nodes; also returns the zero-based row of the first one.
pub fn count_errors(root: Node) -> (u32, Option<usize>) {
    let mut count = 0u32;
    let mut first_row: Option<usize> = None;
    let mut cursor = root.walk();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            count += 1;
            let row = node.start_position().row;
            first_row = Some(first_row.map_or(row, |r| r.min(row)));
        }
        if node.has_error() {
            stack.extend(node.children(&mut cursor));
        }
    }
    (count, first_row)
}
