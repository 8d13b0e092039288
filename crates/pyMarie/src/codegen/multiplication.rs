use marie_isa::{AsmLine, Condition, DataLine, Directive, Instruction};

use crate::constants::{MULT_A, MULT_B, MULT_LOOP, MULT_RESULT, MULT_RETURN, ONE};

/// Shift-free multiplication by repeated addition.
///
/// Callers store the operands in `MultA`/`MultB` and enter with `JnS MultReturn`,
/// which leaves the return address in `MultReturn`. The product is accumulated
/// in `MultResult` while `MultB` counts down to zero; `JumpI MultReturn` returns.
/// `One` is only declared here when the program has not declared it already.
pub fn multiplication_subroutine(declare_one: bool) -> Vec<AsmLine> {
    let zero = |name: &str| AsmLine::Data(DataLine::new(name, Directive::Dec(0)));
    let exit_when_done = || {
        [
            Instruction::Skipcond(Condition::Zero),
            Instruction::jump(MULT_LOOP),
            Instruction::JumpI(MULT_RETURN.to_string()),
        ]
        .map(AsmLine::from)
    };

    let mut lines = vec![
        AsmLine::Comment("Multiplication subroutine".to_string()),
        zero(MULT_RETURN),
        Instruction::Clear.into(),
        Instruction::store(MULT_RESULT).into(),
        Instruction::load(MULT_B).into(),
    ];
    lines.extend(exit_when_done());
    lines.extend([
        AsmLine::labeled(vec![MULT_LOOP.to_string()], Instruction::load(MULT_RESULT)),
        Instruction::Add(MULT_A.to_string()).into(),
        Instruction::store(MULT_RESULT).into(),
        Instruction::load(MULT_B).into(),
        Instruction::Subt(ONE.to_string()).into(),
        Instruction::store(MULT_B).into(),
    ]);
    lines.extend(exit_when_done());
    lines.extend([zero(MULT_A), zero(MULT_B), zero(MULT_RESULT)]);
    if declare_one {
        lines.push(AsmLine::Data(DataLine::new(ONE, Directive::Dec(1))));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lines: &[AsmLine]) -> String {
        lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_subroutine_text() {
        let expected = "\
/ Multiplication subroutine
MultReturn, DEC 0
Clear
Store MultResult
Load MultB
Skipcond 400
Jump Mult
JumpI MultReturn
Mult, Load MultResult
Add MultA
Store MultResult
Load MultB
Subt One
Store MultB
Skipcond 400
Jump Mult
JumpI MultReturn
MultA, DEC 0
MultB, DEC 0
MultResult, DEC 0
One, DEC 1";
        assert_eq!(render(&multiplication_subroutine(true)), expected);
    }

    #[test]
    fn test_one_omitted_when_declared() {
        let lines = multiplication_subroutine(false);
        assert_eq!(
            lines.last().map(ToString::to_string).as_deref(),
            Some("MultResult, DEC 0")
        );
    }
}
