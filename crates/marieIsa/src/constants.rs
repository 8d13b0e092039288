/// Smallest value a 16-bit MARIE word can hold as a signed decimal.
pub const WORD_MIN: i32 = i16::MIN as i32;

/// Largest value a 16-bit MARIE word can hold as a signed decimal.
pub const WORD_MAX: i32 = i16::MAX as i32;

/// Largest raw value accepted by a `HEX` directive.
pub const HEX_MAX: u32 = u16::MAX as u32;

/// Separator between a label and the rest of the line.
pub const LABEL_SEPARATOR: char = ',';

/// Start of a comment, running to the end of the line.
pub const COMMENT_MARKER: char = '/';
