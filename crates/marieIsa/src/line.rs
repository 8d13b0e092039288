use std::fmt::{Display, Formatter};

use crate::{directive::DataLine, instruction::Instruction};

/// One line of a MARIE program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AsmLine {
    /// `[L1, [L2, ...]] Instruction`
    Instruction {
        labels: Vec<String>,
        instruction: Instruction,
    },
    /// Labels with nothing after them: `L1,`
    Labels(Vec<String>),
    Data(DataLine),
    /// `/ text`
    Comment(String),
    Blank,
}

impl AsmLine {
    pub const fn instruction(instruction: Instruction) -> Self {
        Self::Instruction {
            labels: Vec::new(),
            instruction,
        }
    }

    pub const fn labeled(labels: Vec<String>, instruction: Instruction) -> Self {
        Self::Instruction {
            labels,
            instruction,
        }
    }
}

impl From<Instruction> for AsmLine {
    fn from(instruction: Instruction) -> Self {
        Self::instruction(instruction)
    }
}

impl From<DataLine> for AsmLine {
    fn from(data: DataLine) -> Self {
        Self::Data(data)
    }
}

impl Display for AsmLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instruction {
                labels,
                instruction,
            } => {
                for label in labels {
                    write!(f, "{label}, ")?;
                }
                write!(f, "{instruction}")
            }
            Self::Labels(labels) => write!(f, "{},", labels.join(", ")),
            Self::Data(data) => write!(f, "{data}"),
            Self::Comment(text) => write!(f, "/ {text}"),
            Self::Blank => Ok(()),
        }
    }
}
