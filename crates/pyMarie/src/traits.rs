use std::fmt::Display;

const INDENT: &str = "    ";

/// Python-style rendering where nested blocks are indented by four spaces per level.
pub trait IndentedDisplay: Display {
    /// Renders the value `indent` levels deep.
    ///
    /// Block statements override this to push their bodies one level further.
    fn to_string_with_indent(&self, indent: usize) -> String {
        format!("{}{self}", INDENT.repeat(indent))
    }
}

/// Renders every item of a block at the same depth, one per line.
pub(crate) fn render_block<T: IndentedDisplay>(lines: &[T], indent: usize) -> String {
    lines
        .iter()
        .map(|line| line.to_string_with_indent(indent))
        .collect::<Vec<_>>()
        .join("\n")
}
