use std::fs;

use splitcalc::{
    Outcome,
    ast::{Operator, SplitTree},
    calculate, calculate_with,
    error::{CalcError, CalculationError, ValidationError},
    interpreter::{
        evaluator::{decompose, evaluate, evaluate_str},
        expression::{Expression, SupportedCharacters},
        scanner::{next_chain, next_operator_position, next_split},
    },
    session::{Response, Session},
    util::num::{DEFAULT_PRECISION, format_general, lenient_f64},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for block in extract_calc_blocks(&content) {
            for line in block.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                let (input, expected) = line.rsplit_once("=>")
                                            .unwrap_or_else(|| panic!("No '=>' in {path:?}: {line}"));
                let actual = answer(input);
                assert_eq!(actual,
                           expected.trim(),
                           "Example '{}' in {:?} answered {actual}",
                           input.trim(),
                           path);
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn answer(input: &str) -> String {
    match calculate(input) {
        Ok(Outcome::Quit) => "quit".to_string(),
        Ok(Outcome::Value(value)) => format_general(value, DEFAULT_PRECISION),
        Err(CalcError::Validation(_)) => "invalid".to_string(),
        Err(CalcError::Calculation(_)) => "illegal".to_string(),
    }
}

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(Outcome::Value(value)) => assert_eq!(value, expected, "{src}"),
        other => panic!("{src} gave {other:?}, expected {expected}"),
    }
}

fn assert_illegal(src: &str, expected: CalculationError) {
    assert_eq!(calculate(src), Err(CalcError::Calculation(expected)), "{src}");
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_value("42", 42.0);
    assert_value("3.25", 3.25);
    assert_value(".5", 0.5);
    assert_value("7.", 7.0);
    assert_value("007", 7.0);
    assert_value("0", 0.0);
}

#[test]
fn single_operator_expressions() {
    assert_value("6+3", 9.0);
    assert_value("6-3", 3.0);
    assert_value("6*3", 18.0);
    assert_value("6/3", 2.0);
    assert_value("1.5*4", 6.0);
    assert_value("3-6", -3.0);
    assert_value("0/5", 0.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 2 +\t3 ", 5.0);
    assert_value("1 2 + 3", 15.0);
    assert_value("1\x0B+\x0C2\r\n", 3.0);
}

#[test]
fn unicode_spaces_are_not_whitespace() {
    assert_eq!(Expression::new("1\u{a0}+2").as_str(), "1\u{a0}+2");
    assert_eq!(calculate("1\u{a0}+2"),
               Err(CalcError::Validation(ValidationError::InvalidCharacter { character: '\u{a0}',
                                                                              position:  1, })));
    assert_eq!(calculate("1\u{2003}+2").unwrap_err(),
               CalcError::Validation(ValidationError::InvalidCharacter { character: '\u{2003}',
                                                                          position:  1, }));
}

#[test]
fn all_four_operators_split_tree() {
    let tree = decompose("2+3*4-5/5");

    let leaf = |s: &str| Box::new(SplitTree::Leaf(s.to_string()));
    let expected = SplitTree::Split {
        left:  leaf("2"),
        op:    Operator::Add,
        right: Box::new(SplitTree::Split {
            left:  Box::new(SplitTree::Split { left: leaf("3"), op: Operator::Mul, right: leaf("4") }),
            op:    Operator::Sub,
            right: Box::new(SplitTree::Split { left: leaf("5"), op: Operator::Div, right: leaf("5") }),
        }),
    };

    assert_eq!(tree, expected);
    assert_eq!(tree.split_count(), 4);
    assert_value("2+3*4-5/5", 13.0);
}

#[test]
fn scanner_prefers_operator_kind_over_position() {
    assert_eq!(next_operator_position("2*3+4+5"), Some(3));
    assert_eq!(next_operator_position("8/2-1"), Some(3));
    assert_eq!(next_operator_position("8/2*1"), Some(3));
    assert_eq!(next_operator_position("8*+9"), Some(2));
    assert_eq!(next_operator_position("123.5"), None);
    assert_eq!(next_operator_position(""), None);

    let split = next_split("10-3+2").unwrap();
    assert_eq!((split.left, split.op, split.right), ("10-3", Operator::Add, "2"));
}

#[test]
fn repeated_operators_group_to_the_right() {
    assert_value("10-3+2", 9.0);
    // 10 + (3 - (2 - 5))
    assert_value("10+3-2-5", 16.0);
    // (10 - (3 - 2)), not ((10 - 3) - 2)
    assert_value("10-3-2", 9.0);
    assert_value("8/4/2", 4.0);
    assert_value("2*3-4*5", -14.0);
    assert_eq!(decompose("10-3-2").to_string(), "(10 - (3 - 2))");
    assert_eq!(decompose("10+3-2-5").to_string(), "(10 + (3 - (2 - 5)))");
}

#[test]
fn long_chains_do_not_exhaust_the_stack() {
    let ones = |op: &str, n: usize| vec!["1"; n].join(op);

    assert_value(&ones("+", 100_000), 100_000.0);
    assert_value(&ones("*", 100_000), 1.0);
    assert_value(&ones("/", 100_000), 1.0);
    // 1 - (1 - (1 - ...)) alternates between 1 and 0.
    assert_value(&ones("-", 100_001), 1.0);
    assert_value(&ones("-", 100_000), 0.0);

    let mixed = vec!["2*3-4/2"; 50_000].join("+");
    assert_value(&mixed, 200_000.0);

    let mut dangling = ones("+", 100_000);
    dangling.push('+');
    assert_illegal(&dangling, CalculationError::MissingOperand { operator: '+' });
}

#[test]
fn explain_skips_trees_of_long_expressions() {
    let session = Session::new().with_explain(true);
    let line = vec!["1"; 5_000].join("+");

    match session.respond(&line) {
        Response::Value { result, tree, .. } => {
            assert_eq!(result, "5000");
            assert!(tree.is_none());
        },
        other => panic!("{line} gave {other:?}"),
    }
}

#[test]
fn chains_list_every_operand_of_the_chosen_operator() {
    let chain = next_chain("1+2*3+4-5").unwrap();
    assert_eq!(chain.op, Operator::Add);
    assert_eq!(chain.operands, vec!["1", "2*3", "4-5"]);
    assert_eq!(next_chain("+").unwrap().operands, vec!["", ""]);
}

#[test]
fn division_by_zero_is_illegal() {
    assert_illegal("5/0", CalculationError::DivisionByZero);
    assert_illegal("5/0.0", CalculationError::DivisionByZero);
    assert_illegal("5/.", CalculationError::DivisionByZero);
    assert_illegal("1+5/0", CalculationError::DivisionByZero);
    assert_illegal("1-4/0", CalculationError::DivisionByZero);
    assert_illegal("0/0", CalculationError::DivisionByZero);
}

#[test]
fn missing_operands_are_illegal() {
    assert_illegal("8*+9", CalculationError::MissingOperand { operator: '*' });
    assert_illegal("+5", CalculationError::MissingOperand { operator: '+' });
    assert_illegal("5-", CalculationError::MissingOperand { operator: '-' });
    assert_illegal("*", CalculationError::MissingOperand { operator: '*' });
    assert_illegal("2//2", CalculationError::MissingOperand { operator: '/' });
    assert_eq!(decompose("8*+9").to_string(), "((8 * _) + 9)");
}

#[test]
fn first_error_in_evaluation_order_wins() {
    assert_illegal("5/0+8*", CalculationError::DivisionByZero);
    assert_illegal("8*+5/0", CalculationError::MissingOperand { operator: '*' });
    assert_illegal("1/0-", CalculationError::MissingOperand { operator: '-' });
}

#[test]
fn quit_requests_short_circuit() {
    assert_eq!(calculate("q"), Ok(Outcome::Quit));
    assert_eq!(calculate("Q"), Ok(Outcome::Quit));
    assert_eq!(calculate("  q  "), Ok(Outcome::Quit));
    assert_eq!(calculate("1+quit"), Ok(Outcome::Quit));
    assert_eq!(calculate("abcq"), Ok(Outcome::Quit));
    assert_eq!(calculate("5/0 Q"), Ok(Outcome::Quit));
    assert!(!Expression::new("1+1").is_quit_request());
}

#[test]
fn validation_failures() {
    let allowed = SupportedCharacters::default();

    assert_eq!(Expression::new("").is_valid(&allowed), Err(ValidationError::EmptyInput));
    assert_eq!(Expression::new(" \t ").is_valid(&allowed), Err(ValidationError::EmptyInput));
    assert_eq!(Expression::new("2+a").is_valid(&allowed),
               Err(ValidationError::InvalidCharacter { character: 'a',
                                                       position:  2, }));
    assert_eq!(Expression::new("2 + a + b").is_valid(&allowed),
               Err(ValidationError::InvalidCharacter { character: 'a',
                                                       position:  2, }));
    assert_eq!(calculate("2^3"),
               Err(CalcError::Validation(ValidationError::InvalidCharacter { character: '^',
                                                                              position:  1, })));
    assert_eq!(allowed.iter().count(), 16);
}

#[test]
fn validation_respects_custom_alphabet() {
    let allowed: SupportedCharacters = "0123456789+".chars().collect();

    assert_eq!(calculate_with("1+2", &allowed), Ok(Outcome::Value(3.0)));
    assert_eq!(calculate_with("3-2", &allowed).unwrap_err(),
               CalcError::Validation(ValidationError::InvalidCharacter { character: '-',
                                                                          position:  1, }));
}

#[test]
fn lenient_leaves_are_a_known_gap() {
    // Malformed numbers are not reported; the numeric prefix is used.
    assert_value("3..4+1", 4.0);
    assert_value("1.2.3*2", 2.4);
    assert_value(".", 0.0);
    assert_eq!(lenient_f64("12abc"), 12.0);
    assert_eq!(lenient_f64("abc"), 0.0);
    assert_eq!(lenient_f64("  -2.5e3x"), -2500.0);
    assert_eq!(lenient_f64("1e+"), 1.0);
    assert!(lenient_f64("INF").is_infinite());
    assert!(lenient_f64("nan").is_nan());
}

#[test]
fn evaluation_tolerates_unvalidated_text() {
    assert_eq!(evaluate_str("é+1"), Ok(1.0));
    assert_eq!(evaluate_str("x*2"), Ok(0.0));
}

#[test]
fn evaluation_is_repeatable() {
    let expression = Expression::new("34+5*12-311/8");
    let first = evaluate(&expression);

    for _ in 0..3 {
        assert_eq!(evaluate(&expression), first);
    }
    assert_eq!(first, Ok(55.125));

    assert!(evaluate(&Expression::new("1/0")).is_err());
    assert_eq!(evaluate(&Expression::new("1/1")), Ok(1.0));
}

#[test]
fn results_are_formatted_like_printf_g() {
    assert_eq!(format_general(13.0, 6), "13");
    assert_eq!(format_general(-14.0, 6), "-14");
    assert_eq!(format_general(2.5, 6), "2.5");
    assert_eq!(format_general(10.0 / 3.0, 6), "3.33333");
    assert_eq!(format_general(10.0 / 3.0, 3), "3.33");
    assert_eq!(format_general(123_456.0, 6), "123456");
    assert_eq!(format_general(1_234_567.0, 6), "1.23457e+06");
    assert_eq!(format_general(0.000_012_5, 6), "1.25e-05");
    assert_eq!(format_general(1e100, 6), "1e+100");
    assert_eq!(format_general(0.0, 6), "0");
    assert_eq!(format_general(f64::INFINITY, 6), "inf");
}

#[test]
fn session_echoes_input_with_result() {
    let session = Session::new();

    assert_eq!(session.respond("1 + 1").to_string(), "1 + 1=2");
    assert_eq!(session.respond("10/3").to_string(), "10/3=3.33333");
    assert_eq!(Session::new().with_precision(3).respond("10/3").to_string(), "10/3=3.33");
    assert!(session.respond("Q").is_quit());
    assert_eq!(session.respond("Q").to_string(), "");
}

#[test]
fn session_reports_diagnostics() {
    let session = Session::new();

    let rejected = session.respond("2+a");
    assert!(!rejected.is_success());
    assert_eq!(rejected.to_string(), "\nError: a is not valid input.\nInvalid input. Please try again.");

    assert_eq!(session.respond("   ").to_string(),
               "\nError: You did not enter an input.\nInvalid input. Please try again.");

    assert_eq!(session.respond("5/0").to_string(),
               "\nError: Dividing by zero is not allowed.\nIllegal calculation. Please try again.");

    let illegal = session.respond("8*+9");
    assert_eq!(illegal, Response::Illegal(CalculationError::MissingOperand { operator: '*' }));
    assert_eq!(illegal.to_string(),
               "\nError: Missing operand.\nIllegal calculation. Please try again.");
}

#[test]
fn session_explains_splits() {
    let session = Session::new().with_explain(true);

    assert_eq!(session.respond("2 + 3*4").to_string(), "2 + 3*4=14\nsplit: (2 + (3 * 4))");
    assert_eq!(session.respond("7").to_string(), "7=7\nsplit: 7");
    assert!(decompose("7").is_leaf());
    assert!(!decompose("7*1").is_leaf());
}

#[test]
fn session_uses_its_alphabet() {
    let session = Session::new().with_allowed("0123456789*".chars().collect());

    assert_eq!(session.respond("6*7").to_string(), "6*7=42");
    assert_eq!(session.respond("6+7"),
               Response::Rejected(ValidationError::InvalidCharacter { character: '+',
                                                                      position:  1, }));
}

#[test]
fn banner_lists_operators_and_quit_keys() {
    let banner = Session::banner();

    assert!(banner.contains("This calculator supports the following operations: + - * /"));
    assert!(banner.ends_with("To quit at any time, enter q or Q."));
}
