//! Splits one line of MARIE source into labels, an instruction or a data cell.

use marie_isa::{
    AsmLine, COMMENT_MARKER, DataLine, Directive, Instruction, IsaError, LABEL_SEPARATOR, Mnemonic,
};
use utils::{TranslationError, TranslationResult};

/// Attaches the source line to an instruction-set error.
pub fn isa_error(line: usize) -> impl FnOnce(IsaError) -> TranslationError {
    move |error| {
        if error.is_unsupported() {
            TranslationError::unsupported(error.to_string(), Some(line))
        } else {
            TranslationError::structural(error.to_string(), Some(line))
        }
    }
}

/// Reads the `line`th (1-based) line of a program.
///
/// Everything before the last comma is a label; what follows is a mnemonic and
/// an optional operand. Comments after code are dropped.
pub fn read_line(text: &str, line: usize) -> TranslationResult<AsmLine> {
    let (code, comment) = match text.split_once(COMMENT_MARKER) {
        Some((code, comment)) => (code.trim(), Some(comment.trim())),
        None => (text.trim(), None),
    };
    if code.is_empty() {
        return Ok(comment.map_or(AsmLine::Blank, |comment| {
            AsmLine::Comment(comment.to_string())
        }));
    }

    let mut fields: Vec<&str> = code.split(LABEL_SEPARATOR).map(str::trim).collect();
    let body = fields.pop().unwrap_or_default();
    if fields.iter().any(|label| label.is_empty() || label.contains(char::is_whitespace)) {
        return Err(TranslationError::structural(
            format!("Invalid label in \"{code}\"."),
            Some(line),
        ));
    }
    let labels: Vec<String> = fields.into_iter().map(str::to_string).collect();

    let words: Vec<&str> = body.split_whitespace().collect();
    let (keyword, operand) = match words.as_slice() {
        [] => return Ok(AsmLine::Labels(labels)),
        [keyword] => (*keyword, None),
        [keyword, operand] => (*keyword, Some(*operand)),
        _ => {
            return Err(TranslationError::structural(
                format!("Unexpected text after \"{} {}\".", words[0], words[1]),
                Some(line),
            ));
        }
    };

    match keyword.parse::<Mnemonic>() {
        Ok(mnemonic) => {
            let instruction = Instruction::decode(mnemonic, operand).map_err(isa_error(line))?;
            Ok(AsmLine::labeled(labels, instruction))
        }
        Err(unknown) => read_data(keyword, operand, labels, line)
            .unwrap_or_else(|| Err(isa_error(line)(unknown))),
    }
}

/// `name, DEC v` / `name, HEX v`; `None` when `keyword` is not a directive.
fn read_data(
    keyword: &str,
    operand: Option<&str>,
    labels: Vec<String>,
    line: usize,
) -> Option<TranslationResult<AsmLine>> {
    let directive = Directive::decode(keyword, operand.unwrap_or_default())?;
    Some(data_line(directive, labels, line))
}

fn data_line(
    directive: Result<Directive, IsaError>,
    labels: Vec<String>,
    line: usize,
) -> TranslationResult<AsmLine> {
    let directive = directive.map_err(isa_error(line))?;
    let [name]: [String; 1] = labels.try_into().map_err(|_| {
        TranslationError::structural("Invalid variable or constant definition.", Some(line))
    })?;
    Ok(AsmLine::Data(DataLine::new(name, directive)))
}

#[cfg(test)]
mod tests {
    use marie_isa::Condition;
    use utils::ErrorKind;

    use super::*;

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(read_line("   ", 1).unwrap(), AsmLine::Blank);
        assert_eq!(
            read_line("  / Multiplication subroutine", 1).unwrap(),
            AsmLine::Comment("Multiplication subroutine".to_string())
        );
    }

    #[test]
    fn test_labels_and_instruction() {
        assert_eq!(
            read_line("EndIf2, EndIf1, load x / trailing", 1).unwrap(),
            AsmLine::labeled(
                vec!["EndIf2".to_string(), "EndIf1".to_string()],
                Instruction::load("x")
            )
        );
        assert_eq!(
            read_line("Skipcond 400", 1).unwrap(),
            AsmLine::instruction(Instruction::Skipcond(Condition::Zero))
        );
        assert_eq!(
            read_line("EndIf1,", 1).unwrap(),
            AsmLine::Labels(vec!["EndIf1".to_string()])
        );
    }

    #[test]
    fn test_data_lines() {
        assert_eq!(
            read_line("x, DEC -5 / x = 5", 1).unwrap(),
            AsmLine::Data(DataLine::new("x", Directive::Dec(-5)))
        );
        assert_eq!(
            read_line("Mask, hex ff", 1).unwrap(),
            AsmLine::Data(DataLine::new("Mask", Directive::hex(0xFF, "ff")))
        );

        let error = read_line("DEC 5", 7).unwrap_err();
        assert_eq!(error.to_string(), "L7 - Invalid variable or constant definition.");
    }

    #[test]
    fn test_error_kinds() {
        let error = read_line("Skipcond 123", 3).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnsupportedConstruct);
        assert_eq!(error.line(), Some(3));

        assert_eq!(read_line("Load", 1).unwrap_err().kind(), ErrorKind::Structural);
        assert_eq!(read_line("Halt now", 1).unwrap_err().kind(), ErrorKind::Structural);
        assert_eq!(read_line("Mul x", 1).unwrap_err().kind(), ErrorKind::Structural);
        assert_eq!(
            read_line("x, DEC 99999", 1).unwrap_err().kind(),
            ErrorKind::UnsupportedConstruct
        );
        assert_eq!(read_line("x, DEC five", 1).unwrap_err().kind(), ErrorKind::Structural);
        assert_eq!(read_line(", Load x", 1).unwrap_err().kind(), ErrorKind::Structural);
        assert_eq!(read_line("Load x y", 1).unwrap_err().kind(), ErrorKind::Structural);
    }
}
