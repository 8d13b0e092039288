use indexmap::IndexMap;
use marie_bridge::{ErrorKind, Token, TokenKind, high_to_low, init_tracing, lift, low_to_high};
use proptest::prelude::*;

/// Whitespace tokenizer for straight-line programs; parentheses need no spacing.
fn tokenize(source: &str) -> Vec<Token> {
    source
        .lines()
        .enumerate()
        .flat_map(|(index, text)| {
            text.replace('(', " ( ")
                .replace(')', " ) ")
                .split_whitespace()
                .map(|word| {
                    let kind = match word {
                        "print" | "input" | "int" => TokenKind::Builtin,
                        "(" | ")" => TokenKind::Punctuation,
                        "=" | "+" | "-" | "*" => TokenKind::Operator,
                        _ if word.chars().all(|c| c.is_ascii_digit()) => TokenKind::Number,
                        _ => TokenKind::Identifier,
                    };
                    Token::new(kind, word, index + 1, 0)
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Assignments and prints of the lifted text, in order.
fn effects(lifted: &[String]) -> Vec<String> {
    lifted
        .iter()
        .filter(|line| line.ends_with(" = accumulator") || line.as_str() == "print(accumulator)")
        .cloned()
        .collect()
}

#[test]
fn test_straight_line_round_trip() {
    init_tracing();
    let source = "a = 4\nb = input()\nc = a + b\nprint(c)\nd = c - 1\nprint(d)\n";
    let assembly = high_to_low(&tokenize(source)).unwrap();
    let lifted = lift(&assembly).unwrap();

    assert_eq!(
        effects(&lifted.lines),
        [
            "b = accumulator",
            "c = accumulator",
            "print(accumulator)",
            "d = accumulator",
            "print(accumulator)",
        ]
    );
    assert_eq!(
        lifted.bindings.iter().map(|(k, v)| (k.as_str(), *v)).collect::<Vec<_>>(),
        [("a", 4), ("b", 0), ("c", 0), ("d", 0), ("Const1", 1)]
    );
}

#[test]
fn test_multiplication_round_trip_keeps_call() {
    let assembly = high_to_low(&tokenize("x = 6\ny = x * 7\nprint(y)\n")).unwrap();
    let lifted = low_to_high(&assembly).unwrap();
    let call = "# Call subroutine MultReturn\nMultReturn()\naccumulator = MultResult";
    assert!(lifted.contains(call));
    assert!(lifted.contains("# Indirect jump to MultReturn"));
    assert!(lifted.ends_with("Const7 = 7"));
}

#[test]
fn test_errors_surface_from_both_directions() {
    let error = high_to_low(&tokenize("x = a % b\n")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Structural);
    let error = low_to_high("Skipcond 100").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnsupportedConstruct);
}

#[derive(Debug, Clone)]
enum Statement {
    Literal(&'static str, i32),
    Sum(&'static str, &'static str, &'static str),
    Print(&'static str),
}

fn name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["a", "b", "c", "d"])
}

fn statement() -> impl Strategy<Value = Statement> {
    prop_oneof![
        (name(), 0..1000i32).prop_map(|(n, v)| Statement::Literal(n, v)),
        (name(), name(), name()).prop_map(|(r, x, y)| Statement::Sum(r, x, y)),
        name().prop_map(Statement::Print),
    ]
}

proptest! {
    #[test]
    fn test_weak_round_trip(program in prop::collection::vec(statement(), 1..12)) {
        let mut source = String::new();
        let mut expected_effects = Vec::new();
        let mut expected_bindings: IndexMap<&str, i64> = IndexMap::new();
        for statement in &program {
            match statement {
                Statement::Literal(n, v) => {
                    source.push_str(&format!("{n} = {v}\n"));
                    expected_bindings.insert(*n, i64::from(*v));
                }
                Statement::Sum(r, x, y) => {
                    source.push_str(&format!("{r} = {x} + {y}\n"));
                    expected_effects.push(format!("{r} = accumulator"));
                    expected_bindings.insert(*r, 0);
                }
                Statement::Print(n) => {
                    source.push_str(&format!("print({n})\n"));
                    expected_effects.push("print(accumulator)".to_string());
                }
            }
        }

        let assembly = high_to_low(&tokenize(&source)).unwrap();
        let lifted = lift(&assembly).unwrap();
        prop_assert_eq!(effects(&lifted.lines), expected_effects);
        let bindings: Vec<(&str, i64)> =
            lifted.bindings.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let expected: Vec<(&str, i64)> = expected_bindings.into_iter().collect();
        prop_assert_eq!(bindings, expected);
    }
}
