use thiserror::Error;

/// Broad category of a translation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unexpected token, instruction or directive shape.
    Structural,
    /// A block was opened and never closed.
    UnterminatedBlock,
    /// Recognized shape that the translator does not handle.
    UnsupportedConstruct,
}

/// Error returned by both translation directions.
///
/// Displayed as `L<line> - <message>` when the source line is known, otherwise
/// as the bare message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("{}", located(.line, .message))]
    Structural { message: String, line: Option<usize> },
    #[error("{}", located(.line, .message))]
    UnterminatedBlock { message: String, line: Option<usize> },
    #[error("{}", located(.line, .message))]
    UnsupportedConstruct { message: String, line: Option<usize> },
}

fn located(line: &Option<usize>, message: &str) -> String {
    match line {
        Some(line) => format!("L{line} - {message}"),
        None => message.to_string(),
    }
}

impl TranslationError {
    pub fn structural(message: impl Into<String>, line: Option<usize>) -> Self {
        Self::Structural {
            message: message.into(),
            line,
        }
    }

    pub fn unterminated_block(message: impl Into<String>, line: Option<usize>) -> Self {
        Self::UnterminatedBlock {
            message: message.into(),
            line,
        }
    }

    pub fn unsupported(message: impl Into<String>, line: Option<usize>) -> Self {
        Self::UnsupportedConstruct {
            message: message.into(),
            line,
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Structural { .. } => ErrorKind::Structural,
            Self::UnterminatedBlock { .. } => ErrorKind::UnterminatedBlock,
            Self::UnsupportedConstruct { .. } => ErrorKind::UnsupportedConstruct,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Structural { message, .. }
            | Self::UnterminatedBlock { message, .. }
            | Self::UnsupportedConstruct { message, .. } => message,
        }
    }

    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Structural { line, .. }
            | Self::UnterminatedBlock { line, .. }
            | Self::UnsupportedConstruct { line, .. } => *line,
        }
    }

    /// Attaches a line number if the error does not carry one yet.
    #[must_use]
    pub fn at_line(mut self, source_line: usize) -> Self {
        match &mut self {
            Self::Structural { line, .. }
            | Self::UnterminatedBlock { line, .. }
            | Self::UnsupportedConstruct { line, .. } => {
                line.get_or_insert(source_line);
            }
        }
        self
    }
}

/// Result type shared by both translation directions.
pub type TranslationResult<T> = Result<T, TranslationError>;
