use std::mem;

use marie_isa::{AsmLine, Instruction};
use tracing::debug;
use utils::{TranslationError, TranslationResult};

use super::{
    label::{Label, LabelAllocator},
    multiplication::multiplication_subroutine,
    symbols::{ConstantPool, SymbolTable},
};
use crate::{constants::ONE, lang::Operand};

/// State of one lowering run. A fresh value is used per translation.
#[derive(Debug, Default)]
pub struct Compiler {
    instructions: Vec<AsmLine>,
    pub variables: SymbolTable,
    pub constants: ConstantPool,
    pub labels: LabelAllocator,
    /// Exit labels of the `if` blocks currently being lowered, innermost last.
    pub if_stack: Vec<Label>,
    pub uses_multiplication: bool,
}

impl Compiler {
    /// Appends `instruction`, carrying every label in `labels`.
    pub fn emit(&mut self, labels: Vec<Label>, instruction: Instruction) {
        let labels = labels.iter().map(ToString::to_string).collect();
        self.instructions.push(AsmLine::labeled(labels, instruction));
    }

    /// Cell addressed by `operand`; literals are moved into the constant pool.
    pub fn operand_name(&mut self, operand: &Operand) -> String {
        match operand {
            Operand::Var(var) => var.clone(),
            Operand::Literal(value) => self.constants.materialize(*value),
        }
    }

    pub fn instructions(&self) -> &[AsmLine] {
        &self.instructions
    }

    /// Renders the program. Labels still pending attach to `Halt`.
    pub fn finish(mut self, pending: Vec<Label>) -> TranslationResult<String> {
        if let Some(label) = self.if_stack.last() {
            let message = format!("Block exiting to {label} was never closed.");
            return Err(TranslationError::unterminated_block(message, None));
        }

        let code = self.code_section(pending);
        let variables: Vec<AsmLine> = self
            .variables
            .to_lines()
            .into_iter()
            .map(AsmLine::from)
            .collect();
        let subroutine = if self.uses_multiplication {
            multiplication_subroutine(!self.variables.contains(ONE))
        } else {
            Vec::new()
        };
        let constants: Vec<AsmLine> = self
            .constants
            .to_lines()
            .into_iter()
            .map(AsmLine::from)
            .collect();

        debug!(
            code = code.len(),
            variables = variables.len(),
            subroutine = subroutine.len(),
            constants = constants.len(),
            "section sizes"
        );

        Ok([code, variables, subroutine, constants]
            .iter()
            .filter(|section| !section.is_empty())
            .map(|section| render_section(section))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    fn code_section(&mut self, pending: Vec<Label>) -> Vec<AsmLine> {
        let mut code = mem::take(&mut self.instructions);
        if code.is_empty() && self.variables.is_empty() {
            return code;
        }
        if pending.is_empty() {
            if !code.is_empty() {
                code.push(AsmLine::Blank);
            }
            code.push(Instruction::Halt.into());
        } else {
            let labels = pending.iter().map(ToString::to_string).collect();
            code.push(AsmLine::labeled(labels, Instruction::Halt));
        }
        code
    }
}

fn render_section(lines: &[AsmLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
