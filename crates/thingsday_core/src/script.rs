//! AppleScript emission.
//!
//! # Responsibility
//! - Render move operations as automation commands.
//! - Wrap the command body in the fixed helpers/tell-block envelope.
//!
//! # Invariants
//! - Identical operations and preamble always render byte-identical text.
//! - The record name appears only as a trailing `--` comment; the engine
//!   never parses it back.

use crate::model::todo::MoveOperation;

const BODY_INDENT: &str = "\t";

/// Renders one move as a single automation command line.
pub fn render_move(operation: &MoveOperation) -> String {
    format!(
        "move my todoWithID(\"{}\") to list \"{}\" -- {}",
        operation.todo_id,
        operation.target.script_name(),
        operation.name
    )
}

/// Renders the complete script: helpers preamble, then the indented move
/// commands inside a `tell application "Things3"` block.
pub fn render_script(helpers: &str, operations: &[MoveOperation]) -> String {
    let body = operations
        .iter()
        .map(render_move)
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{helpers}\n\n-----\ntell application \"Things3\"\n{}\nend tell",
        indent(&body, BODY_INDENT)
    )
}

fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::indent;

    #[test]
    fn indent_prefixes_every_line_including_empty_ones() {
        assert_eq!(indent("a\n\nb", "\t"), "\ta\n\t\n\tb");
    }

    #[test]
    fn indent_of_empty_text_is_one_prefix() {
        assert_eq!(indent("", "\t"), "\t");
    }
}
