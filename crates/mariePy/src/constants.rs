/// Spaces added in front of every line emitted inside a `Skipcond` block.
pub const INDENT_WIDTH: usize = 4;

/// Name given to the machine's single register in lifted code.
pub const ACCUMULATOR: &str = "accumulator";
