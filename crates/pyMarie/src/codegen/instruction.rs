use marie_isa::{Condition, Instruction};
use tracing::debug;
use utils::{TranslationError, TranslationResult};

use super::{Compiler, Label};
use crate::{
    constants::{
        LOOP_BOUND_PREFIX, MULT_A, MULT_B, MULT_RESULT, MULT_RETURN, ONE, RESERVED_CELLS,
    },
    lang::{ArithOp, Expression, Line, Operand, Var},
};

/// Lowers a sequence of statements.
///
/// `pending` holds the labels that must land on the next emitted instruction;
/// the labels still waiting after the last statement are returned.
pub fn compile_lines(
    lines: &[Line],
    compiler: &mut Compiler,
    mut pending: Vec<Label>,
) -> TranslationResult<Vec<Label>> {
    for line in lines {
        pending = compile_line(line, compiler, pending)
            .map_err(|error| error.at_line(line.source_line()))?;
    }
    Ok(pending)
}

fn compile_line(
    line: &Line,
    compiler: &mut Compiler,
    mut pending: Vec<Label>,
) -> TranslationResult<Vec<Label>> {
    match line {
        Line::Assignment { var, value, .. } => {
            check_writable(var)?;
            Ok(compile_assignment(var, value, compiler, pending))
        }

        Line::Print { value, .. } => {
            let name = compiler.operand_name(value);
            compiler.emit(pending, Instruction::load(name));
            compiler.emit(Vec::new(), Instruction::Output);
            Ok(Vec::new())
        }

        Line::IfCondition {
            condition, body, ..
        } => {
            let left = compiler.operand_name(&condition.left);
            let right = compiler.operand_name(&condition.right);
            let exit = compiler.labels.end_if();
            debug!(label = %exit, "if block");
            compiler.if_stack.push(exit);

            compiler.emit(pending, Instruction::load(left));
            compiler.emit(Vec::new(), Instruction::Subt(right));
            compiler.emit(
                Vec::new(),
                Instruction::Skipcond(condition.op.skip_condition()),
            );
            compiler.emit(Vec::new(), Instruction::jump(exit));

            let mut after = compile_lines(body, compiler, Vec::new())?;
            let exit = compiler.if_stack.pop().ok_or_else(|| {
                TranslationError::unterminated_block("No open block to close.", None)
            })?;
            after.push(exit);
            Ok(after)
        }

        Line::ForLoop {
            iterator,
            start,
            end,
            body,
            ..
        } => {
            check_writable(iterator)?;
            let (loop_start, loop_end) = compiler.labels.for_loop();
            debug!(start = %loop_start, end = %loop_end, "for loop");
            let bound = format!("{LOOP_BOUND_PREFIX}{iterator}");

            pending.push(loop_start);
            compiler.emit(pending, Instruction::load(iterator.as_str()));
            compiler.emit(Vec::new(), Instruction::Subt(bound.clone()));
            compiler.emit(Vec::new(), Instruction::Skipcond(Condition::Negative));
            compiler.emit(Vec::new(), Instruction::jump(loop_end));

            let after_body = compile_lines(body, compiler, Vec::new())?;
            compiler.emit(after_body, Instruction::load(iterator.as_str()));
            compiler.emit(Vec::new(), Instruction::Add(ONE.to_string()));
            compiler.emit(Vec::new(), Instruction::store(iterator.as_str()));
            compiler.emit(Vec::new(), Instruction::jump(loop_start));

            compiler.variables.declare(iterator, *start, None);
            compiler.variables.declare(&bound, *end, None);
            compiler.variables.declare(ONE, 1, None);
            Ok(vec![loop_end])
        }
    }
}

/// Rejects writes to the cells the loop increment and the multiplication subroutine rely on.
fn check_writable(var: &Var) -> TranslationResult<()> {
    if RESERVED_CELLS.contains(&var.as_str()) {
        return Err(TranslationError::unsupported(
            format!("\"{var}\" is reserved and cannot be assigned."),
            None,
        ));
    }
    Ok(())
}

fn compile_assignment(
    var: &Var,
    value: &Expression,
    compiler: &mut Compiler,
    pending: Vec<Label>,
) -> Vec<Label> {
    match value {
        Expression::Value(Operand::Literal(literal)) => {
            compiler.variables.declare(var, *literal, None);
            // Nothing emitted: the labels still wait for an instruction.
            return pending;
        }
        Expression::Value(Operand::Var(source)) => {
            compiler.emit(pending, Instruction::load(source.as_str()));
            compiler.variables.declare(var, 0, Some(format!("{var} = {source}")));
        }
        Expression::Input => {
            compiler.emit(pending, Instruction::Input);
            compiler.variables.declare(var, 0, Some(format!("{var} = input()")));
        }
        Expression::Binary { left, op, right } => {
            let left = compiler.operand_name(left);
            let right = compiler.operand_name(right);
            compiler.emit(pending, Instruction::load(left.as_str()));
            match op {
                ArithOp::Add => compiler.emit(Vec::new(), Instruction::Add(right.clone())),
                ArithOp::Sub => compiler.emit(Vec::new(), Instruction::Subt(right.clone())),
                ArithOp::Mul => {
                    compiler.emit(Vec::new(), Instruction::store(MULT_A));
                    compiler.emit(Vec::new(), Instruction::load(right.as_str()));
                    compiler.emit(Vec::new(), Instruction::store(MULT_B));
                    compiler.emit(Vec::new(), Instruction::JnS(MULT_RETURN.to_string()));
                    compiler.emit(Vec::new(), Instruction::load(MULT_RESULT));
                    compiler.uses_multiplication = true;
                }
            }
            compiler
                .variables
                .declare(var, 0, Some(format!("{var} = {left} {op} {right}")));
        }
    }
    compiler.emit(Vec::new(), Instruction::store(var.as_str()));
    Vec::new()
}
