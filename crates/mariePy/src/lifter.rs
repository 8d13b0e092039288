use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use marie_isa::{AsmLine, DataLine, Directive, Instruction};
use tracing::{debug, trace};
use utils::TranslationResult;

use crate::{
    constants::{ACCUMULATOR, INDENT_WIDTH},
    reader::read_line,
};

/// Structured-language text recovered from a MARIE program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiftedProgram {
    pub lines: Vec<String>,
    /// Initial value of every `DEC`/`HEX` cell, in declaration order.
    pub bindings: IndexMap<String, i64>,
}

impl Display for LiftedProgram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Emission state for one run.
///
/// `Skipcond` opens a block and nothing ever closes it, so the indentation only grows.
#[derive(Debug, Default)]
struct Lifter {
    indent: usize,
    program: LiftedProgram,
}

impl Lifter {
    fn push(&mut self, text: impl Display) {
        let line = format!("{:indent$}{text}", "", indent = self.indent);
        self.program.lines.push(line);
    }

    fn lift_line(&mut self, line: &AsmLine) {
        match line {
            AsmLine::Blank => {}
            AsmLine::Comment(text) => self.push(format_args!("# {text}")),
            AsmLine::Labels(labels) => self.lift_labels(labels),
            AsmLine::Instruction {
                labels,
                instruction,
            } => {
                self.lift_labels(labels);
                self.lift_instruction(instruction);
            }
            AsmLine::Data(data) => self.lift_data(data),
        }
    }

    fn lift_labels(&mut self, labels: &[String]) {
        for label in labels {
            self.push(format_args!("{label}:"));
        }
    }

    fn lift_instruction(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Load(x) => self.push(format_args!("{ACCUMULATOR} = {x}")),
            Instruction::Store(x) => self.push(format_args!("{x} = {ACCUMULATOR}")),
            Instruction::Add(x) => self.push(format_args!("{ACCUMULATOR} += {x}")),
            Instruction::Subt(x) => self.push(format_args!("{ACCUMULATOR} -= {x}")),
            Instruction::Input => self.push(format_args!("{ACCUMULATOR} = int(input())")),
            Instruction::Output => self.push(format_args!("print({ACCUMULATOR})")),
            Instruction::Halt => self.push("# End of program"),
            Instruction::Jump(x) => self.push(format_args!("goto {x}")),
            Instruction::Clear => self.push(format_args!("{ACCUMULATOR} = 0")),
            Instruction::JnS(x) => {
                self.push(format_args!("# Call subroutine {x}"));
                self.push(format_args!("{x}()"));
            }
            // Not expressible as a statement; only the intent is recorded.
            Instruction::JumpI(x) => self.push(format_args!("# Indirect jump to {x}")),
            Instruction::Skipcond(condition) => {
                self.push(format_args!("if {ACCUMULATOR} {}:", condition.comparison()));
                self.indent += INDENT_WIDTH;
            }
        }
    }

    fn lift_data(&mut self, data: &DataLine) {
        let name = &data.name;
        match &data.directive {
            Directive::Dec(value) => self.push(format_args!("{name} = {value}")),
            Directive::Hex { digits, .. } => self.push(format_args!("{name} = 0x{digits}")),
        }
        self.program
            .bindings
            .insert(data.name.clone(), data.directive.value());
    }
}

/// Lifts MARIE source into structured-language lines plus the data bindings.
///
/// The first malformed line aborts the run with its 1-based line number.
pub fn lift(source: &str) -> TranslationResult<LiftedProgram> {
    let mut lifter = Lifter::default();
    for (index, text) in source.lines().enumerate() {
        let line = read_line(text, index + 1)?;
        trace!(line = index + 1, "{line}");
        lifter.lift_line(&line);
    }
    debug!(
        lines = lifter.program.lines.len(),
        bindings = lifter.program.bindings.len(),
        "lifted"
    );
    Ok(lifter.program)
}
