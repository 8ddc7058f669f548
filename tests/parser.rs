use rpncalc::{
    ast::{BinaryOperator, Expr, ForLoop},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::core::{MAX_NESTING, parse_line},
    },
};

fn parse(src: &str) -> Expr {
    let tokens = tokenize(src, 1).unwrap();
    parse_line(&tokens).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

fn parse_err(src: &str) -> ParseError {
    let tokens = tokenize(src, 1).unwrap();
    parse_line(&tokens).expect_err("input should not parse")
}

fn num(value: f64) -> Box<Expr> {
    Box::new(Expr::Number(value))
}

#[test]
fn bare_number_line() {
    assert_eq!(parse("12.5"), Expr::Number(12.5));
    assert_eq!(parse("-3"), Expr::Number(-3.0));
}

#[test]
fn binary_group_preserves_operand_order() {
    assert_eq!(parse("(7 2 -)"),
               Expr::binary(BinaryOperator::Sub, Expr::Number(7.0), Expr::Number(2.0)));
}

#[test]
fn nested_binary_groups() {
    let expected = Expr::binary(BinaryOperator::Mul,
                                Expr::binary(BinaryOperator::Add,
                                             Expr::Number(1.0),
                                             Expr::Number(2.0)),
                                Expr::binary(BinaryOperator::Pow,
                                             Expr::Number(3.0),
                                             Expr::Number(2.0)));
    assert_eq!(parse("((1 2 +) (3 2 ^) *)"), expected);
}

#[test]
fn memory_and_history_commands() {
    assert_eq!(parse("(MEM)"), Expr::MemAccess);
    assert_eq!(parse("(5 MEM)"), Expr::MemStore { value: num(5.0) });
    assert_eq!(parse("(2 RES)"), Expr::ResAccess { index: num(2.0) });
    assert_eq!(parse("((1 1 +) MEM)"),
               Expr::MemStore { value: Box::new(Expr::binary(BinaryOperator::Add,
                                                             Expr::Number(1.0),
                                                             Expr::Number(1.0))) });
    assert_eq!(parse("((MEM) 1 +)"),
               Expr::binary(BinaryOperator::Add, Expr::MemAccess, Expr::Number(1.0)));
}

#[test]
fn conditional_with_and_without_else() {
    assert_eq!(parse("(SE 0 ENTAO 1 SENAO 2)"),
               Expr::If { condition:   num(0.0),
                          then_branch: num(1.0),
                          else_branch: Some(num(2.0)), });
    assert_eq!(parse("(SE (1 1 -) ENTAO (MEM))"),
               Expr::If { condition:   Box::new(Expr::binary(BinaryOperator::Sub,
                                                             Expr::Number(1.0),
                                                             Expr::Number(1.0))),
                          then_branch: Box::new(Expr::MemAccess),
                          else_branch: None, });
}

#[test]
fn loop_with_and_without_step() {
    assert_eq!(parse("(PARA 1 DE 1 ATE 3 PASSO 1 (1 1 +))"),
               Expr::For(ForLoop { var:   num(1.0),
                                   start: num(1.0),
                                   end:   num(3.0),
                                   step:  Some(num(1.0)),
                                   body:  Box::new(Expr::binary(BinaryOperator::Add,
                                                                Expr::Number(1.0),
                                                                Expr::Number(1.0))), }));
    assert_eq!(parse("(PARA 0 DE 5 ATE 1 (MEM))"),
               Expr::For(ForLoop { var:   num(0.0),
                                   start: num(5.0),
                                   end:   num(1.0),
                                   step:  None,
                                   body:  Box::new(Expr::MemAccess), }));
}

#[test]
fn control_flow_nests_inside_operands() {
    let expr = parse("((SE 1 ENTAO 2) (PARA 1 DE 1 ATE 2 3) +)");
    assert!(matches!(expr,
                     Expr::BinaryOp { op: BinaryOperator::Add, ref left, ref right }
                     if matches!(**left, Expr::If { .. }) && matches!(**right, Expr::For(_))));
}

#[test]
fn dot_in_operator_position() {
    assert_eq!(parse_err("(1 2 .)"),
               ParseError::UnexpectedToken { expected: "an operator (+ - * | / % ^)".to_string(),
                                             found:    ".".to_string(),
                                             line:     1,
                                             column:   6, });
}

#[test]
fn keyword_in_operator_position() {
    assert!(matches!(parse_err("(1 2 SENAO)"),
                     ParseError::UnexpectedToken { ref found, column: 6, .. } if found == "SENAO"));
}

#[test]
fn missing_closing_paren() {
    assert!(matches!(parse_err("(1 2 +"),
                     ParseError::UnexpectedToken { ref found, .. } if found == "end of line"));
    assert!(matches!(parse_err("(SE 1 ENTAO 2"),
                     ParseError::UnexpectedToken { ref found, .. } if found == "end of line"));
}

#[test]
fn mem_access_takes_no_operands() {
    assert!(matches!(parse_err("(MEM 1 +)"),
                     ParseError::UnexpectedToken { ref found, column: 6, .. } if found == "1"));
}

#[test]
fn loop_header_requires_literals() {
    assert!(matches!(parse_err("(PARA 1 DE (1 1 +) ATE 3 1)"),
                     ParseError::UnexpectedToken { ref expected, ref found, .. }
                     if expected == "a number" && found == "("));
    assert!(matches!(parse_err("(PARA 1 ATE 3 1)"),
                     ParseError::UnexpectedToken { ref expected, .. } if expected == "'DE'"));
}

#[test]
fn empty_group_and_empty_line() {
    assert!(matches!(parse_err("()"),
                     ParseError::UnexpectedToken { ref found, column: 2, .. } if found == ")"));
    assert!(matches!(parse_err(""),
                     ParseError::UnexpectedToken { ref found, .. } if found == "end of line"));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(parse_err("(1 2 +) 3"),
               ParseError::UnexpectedTrailingTokens { found:  "3".to_string(),
                                                      line:   1,
                                                      column: 9, });
    assert!(matches!(parse_err("4 5"), ParseError::UnexpectedTrailingTokens { .. }));
}

fn nested_sum(depth: usize) -> String {
    (0..depth).fold("1".to_string(), |inner, _| format!("({inner} 1 +)"))
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let expr = parse(&nested_sum(MAX_NESTING));
    assert_eq!(expr.to_string(), nested_sum(MAX_NESTING));
}

#[test]
fn nesting_past_the_limit_is_rejected() {
    assert_eq!(parse_err(&nested_sum(MAX_NESTING + 1)),
               ParseError::NestingTooDeep { limit:  MAX_NESTING,
                                            line:   1,
                                            column: MAX_NESTING + 1, });

    let unclosed = format!("{}1", "(".repeat(5000));
    assert!(matches!(parse_err(&unclosed),
                     ParseError::NestingTooDeep { column: 257, .. }));
}

fn balanced_sum(depth: u32) -> String {
    if depth == 0 {
        "1".to_string()
    } else {
        let half = balanced_sum(depth - 1);
        format!("({half} {half} +)")
    }
}

#[test]
fn only_depth_counts_toward_the_limit() {
    // 511 groups, nested 9 deep.
    let source = balanced_sum(9);
    assert_eq!(source.matches('(').count(), 511);
    assert_eq!(parse(&source).to_string(), source);
}

#[test]
fn display_round_trips() {
    for src in ["(1 2 +)",
                "((MEM) -2.5 *)",
                "(3 MEM)",
                "(0 RES)",
                "(SE (1 0 -) ENTAO 1 SENAO (2 RES))",
                "(SE 1 ENTAO 1)",
                "(PARA 1 DE 10 ATE 1 PASSO -3 ((MEM) 1 +))",
                "(PARA 1 DE 1 ATE 2 (MEM))"]
    {
        let expr = parse(src);
        assert_eq!(expr.to_string(), src);
        assert_eq!(parse(&expr.to_string()), expr);
    }
}

#[test]
fn tree_dump() {
    assert_eq!(parse("(SE (MEM) ENTAO (4 MEM))").tree(),
               "Root: If\n  Condition: MemAccess\n  Then: MemStore\n    Value: Number (4)\n");
}
