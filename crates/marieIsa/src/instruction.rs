//! MARIE instruction definitions

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{condition::Condition, errors::IsaError};

/// Symbolic operand: a variable, constant or label name.
pub type Operand = String;

/// Instruction names understood by both translators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mnemonic {
    Load,
    Store,
    Add,
    Subt,
    Input,
    Output,
    Halt,
    Skipcond,
    Jump,
    Clear,
    JnS,
    JumpI,
}

impl Mnemonic {
    pub const ALL: [Self; 12] = [
        Self::Load,
        Self::Store,
        Self::Add,
        Self::Subt,
        Self::Input,
        Self::Output,
        Self::Halt,
        Self::Skipcond,
        Self::Jump,
        Self::Clear,
        Self::JnS,
        Self::JumpI,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Load => "Load",
            Self::Store => "Store",
            Self::Add => "Add",
            Self::Subt => "Subt",
            Self::Input => "Input",
            Self::Output => "Output",
            Self::Halt => "Halt",
            Self::Skipcond => "Skipcond",
            Self::Jump => "Jump",
            Self::Clear => "Clear",
            Self::JnS => "JnS",
            Self::JumpI => "JumpI",
        }
    }

    pub const fn takes_operand(&self) -> bool {
        !matches!(self, Self::Input | Self::Output | Self::Halt | Self::Clear)
    }
}

impl Display for Mnemonic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mnemonic {
    type Err = IsaError;

    /// MARIE mnemonics are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mnemonic| mnemonic.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| IsaError::UnknownMnemonic(s.to_string()))
    }
}

/// A single MARIE instruction with its operand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Instruction {
    /// AC ← M[X]
    Load(Operand),
    /// M[X] ← AC
    Store(Operand),
    /// AC ← AC + M[X]
    Add(Operand),
    /// AC ← AC − M[X]
    Subt(Operand),
    /// AC ← next input value
    Input,
    /// output AC
    Output,
    Halt,
    /// skip the next instruction when the condition holds on AC
    Skipcond(Condition),
    Jump(Operand),
    /// AC ← 0
    Clear,
    /// M[X] ← return address, jump to X + 1
    JnS(Operand),
    /// jump to the address stored in M[X]
    JumpI(Operand),
}

impl Instruction {
    /// Builds an instruction from its mnemonic and the raw operand text.
    pub fn decode(mnemonic: Mnemonic, operand: Option<&str>) -> Result<Self, IsaError> {
        let operand = match (mnemonic.takes_operand(), operand) {
            (true, Some(operand)) => operand.to_string(),
            (true, None) => return Err(IsaError::MissingOperand(mnemonic)),
            (false, Some(operand)) => {
                return Err(IsaError::UnexpectedOperand {
                    mnemonic,
                    operand: operand.to_string(),
                });
            }
            (false, None) => String::new(),
        };

        Ok(match mnemonic {
            Mnemonic::Load => Self::Load(operand),
            Mnemonic::Store => Self::Store(operand),
            Mnemonic::Add => Self::Add(operand),
            Mnemonic::Subt => Self::Subt(operand),
            Mnemonic::Input => Self::Input,
            Mnemonic::Output => Self::Output,
            Mnemonic::Halt => Self::Halt,
            Mnemonic::Skipcond => Self::Skipcond(operand.parse()?),
            Mnemonic::Jump => Self::Jump(operand),
            Mnemonic::Clear => Self::Clear,
            Mnemonic::JnS => Self::JnS(operand),
            Mnemonic::JumpI => Self::JumpI(operand),
        })
    }

    pub const fn mnemonic(&self) -> Mnemonic {
        match self {
            Self::Load(_) => Mnemonic::Load,
            Self::Store(_) => Mnemonic::Store,
            Self::Add(_) => Mnemonic::Add,
            Self::Subt(_) => Mnemonic::Subt,
            Self::Input => Mnemonic::Input,
            Self::Output => Mnemonic::Output,
            Self::Halt => Mnemonic::Halt,
            Self::Skipcond(_) => Mnemonic::Skipcond,
            Self::Jump(_) => Mnemonic::Jump,
            Self::Clear => Mnemonic::Clear,
            Self::JnS(_) => Mnemonic::JnS,
            Self::JumpI(_) => Mnemonic::JumpI,
        }
    }

    pub fn load(operand: impl Into<Operand>) -> Self {
        Self::Load(operand.into())
    }

    pub fn store(operand: impl Into<Operand>) -> Self {
        Self::Store(operand.into())
    }

    pub fn jump(target: impl Display) -> Self {
        Self::Jump(target.to_string())
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mnemonic = self.mnemonic();
        match self {
            Self::Load(operand)
            | Self::Store(operand)
            | Self::Add(operand)
            | Self::Subt(operand)
            | Self::Jump(operand)
            | Self::JnS(operand)
            | Self::JumpI(operand) => write!(f, "{mnemonic} {operand}"),
            Self::Skipcond(condition) => write!(f, "{mnemonic} {condition}"),
            Self::Input | Self::Output | Self::Halt | Self::Clear => write!(f, "{mnemonic}"),
        }
    }
}
