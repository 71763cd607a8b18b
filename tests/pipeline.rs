use arith_repl::{
    evaluate, tokenize, EvalError, ParseError, Parser, Program, RuntimeVal, Token, TokenKind,
    MAX_DEPTH,
};

fn parse(src: &str) -> Program {
    Parser::new()
        .produce_ast(src)
        .unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

fn run(src: &str) -> Result<RuntimeVal, EvalError> {
    evaluate(&parse(src))
}

fn assert_number(src: &str, expected: f64) {
    match run(src) {
        Ok(RuntimeVal::Number(n)) => assert_eq!(n, expected, "evaluating {src:?}"),
        other => panic!("Expected {expected} from {src:?}, got {other:?}"),
    }
}

fn assert_null(src: &str) {
    match run(src) {
        Ok(RuntimeVal::Null) => {}
        other => panic!("Expected null from {src:?}, got {other:?}"),
    }
}

fn assert_parse_failure(src: &str) {
    if Parser::new().produce_ast(src).is_ok() {
        panic!("Parsing {src:?} succeeded but was expected to fail")
    }
}

#[test]
fn digit_strings_lex_to_one_number() {
    for src in ["0", "7", "42", "0012", "123456789012345678901234567890"] {
        assert_eq!(
            tokenize(src),
            vec![Token::new(src, TokenKind::Number), Token::end_of_file()]
        );
    }
}

#[test]
fn end_of_file_is_last_and_unique() {
    for src in ["", "1 + 2", "let x = (null)", "@#!", "EndOfFile", "((", "a\tb\nc"] {
        let tokens = tokenize(src);
        assert_eq!(tokens.last(), Some(&Token::end_of_file()), "lexing {src:?}");
        let eofs = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::EndOfFile)
            .count();
        assert_eq!(eofs, 1, "lexing {src:?}");
    }
}

#[test]
fn left_associative_subtraction() {
    assert_eq!(parse("10 - 2 - 3").to_string(), "(- (- 10 2) 3)");
    assert_number("10 - 2 - 3", 5.0);
    assert_number("100 / 10 / 5", 2.0);
}

#[test]
fn precedence() {
    assert_number("2 + 3 * 4", 14.0);
    assert_number("2 * 3 + 4", 10.0);
    assert_number("20 - 10 % 4", 18.0);
}

#[test]
fn grouping_overrides_precedence() {
    assert_number("(2 + 3) * 4", 20.0);
    assert_number("2 * (3 + 4) * (1 + 1)", 28.0);
}

#[test]
fn null_propagation() {
    assert_null("null + 5");
    assert_null("5 - null");
    assert_null("(1 + 2) * null");
}

#[test]
fn deterministic() {
    let src = "1 + (2 * 3) % 4 - null";
    assert_eq!(tokenize(src), tokenize(src));
    assert_eq!(parse(src), parse(src));
}

#[test]
fn whitespace_invariance() {
    assert_eq!(tokenize("1+2"), tokenize(" 1 + 2 "));
    assert_eq!(tokenize("(1*2)"), tokenize("\t( 1\n*\n2 )\n"));
    assert!(tokenize(" 1 + 2 ")
        .iter()
        .all(|t| !t.value.chars().any(char::is_whitespace)));
}

#[test]
fn blank_input() {
    for src in ["", " ", "\n\t  \n"] {
        assert_eq!(tokenize(src), vec![Token::end_of_file()]);
        let program = parse(src);
        assert!(program.body.is_empty());
        assert_null(src);
    }
}

#[test]
fn malformed_input_fails_to_parse() {
    assert_parse_failure(")");
    assert_parse_failure("1 +");
    assert_parse_failure("(1 + 2");
    assert_parse_failure("* 3");
    assert_parse_failure("let x = 1");
    assert_parse_failure("x = 1");
}

#[test]
fn parse_errors_point_at_the_token() {
    let src = "1 +\n  * 2";
    let err = Parser::new().produce_ast(src).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken(..)));
    assert_eq!(err.get_source_start(src), (2, 3));
}

#[test]
fn identifiers_parse_but_do_not_evaluate() {
    let program = parse("answer");
    assert!(matches!(run("answer"), Err(EvalError::UnsupportedNode(_))));
    assert_eq!(program.to_string(), "answer");
}

#[test]
fn unrecognised_characters_are_dropped() {
    // `.` and `^` vanish, leaving two juxtaposed statements
    assert_eq!(parse("1.5").to_string(), "1\n5");
    assert_number("1.5", 5.0);
    assert_number("2 ^ 3", 3.0);
}

#[test]
fn deep_input_is_a_parse_error() {
    let long_chain = vec!["1"; 20_000].join("+");
    let err = Parser::new().produce_ast(&long_chain).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep(_)), "got {err:?}");

    let nested = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let err = Parser::new().produce_ast(&nested).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep(_)), "got {err:?}");
    assert_eq!(
        err.to_string(),
        format!("Expression at position [{MAX_DEPTH}:{}] nests deeper than {MAX_DEPTH} levels", MAX_DEPTH + 1)
    );
}

#[test]
fn deepest_accepted_chain_evaluates() {
    let chain = vec!["1"; MAX_DEPTH].join("+");
    assert_number(&chain, MAX_DEPTH as f64);
}
