use std::fmt::{Display, Formatter};

use crate::Counter;

/// Jump target produced while lowering control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Exit of the `N`th `if`.
    EndIf(usize),
    /// Bound check of the `N`th `for`.
    ForStart(usize),
    /// Exit of the `N`th `for`.
    ForEnd(usize),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndIf(n) => write!(f, "EndIf{n}"),
            Self::ForStart(n) => write!(f, "ForStart{n}"),
            Self::ForEnd(n) => write!(f, "ForEnd{n}"),
        }
    }
}

/// Hands out labels, numbered from 1 per construct kind. Labels are never reused.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    ifs: Counter,
    loops: Counter,
}

impl LabelAllocator {
    pub const fn end_if(&mut self) -> Label {
        Label::EndIf(self.ifs.next())
    }

    /// Start and end labels of a new loop, sharing one number.
    pub const fn for_loop(&mut self) -> (Label, Label) {
        let n = self.loops.next();
        (Label::ForStart(n), Label::ForEnd(n))
    }
}
