use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Keyword, Spanned, Token},
        parser::{
            command::{finish_mem_store, finish_res_access},
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a group that starts with a term.
///
/// After the first term a single token of lookahead decides the production:
///
/// ```text
///     group := "(" term "MEM" ")"
///            | "(" term "RES" ")"
///            | "(" term term OPERATOR ")"
/// ```
///
/// `left` is the first term and `right` the second, so `(7 2 -)` is `7 - 2`.
///
/// # Errors
/// - `UnexpectedToken` if a term is missing, the operator slot holds anything
///   but one of the seven operators, or the closing `)` is missing.
pub fn parse_operation<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LParen, "'('")?;
    let left = parse_expression(tokens)?;

    match tokens.peek().map(|spanned| &spanned.token) {
        Some(Token::Keyword(Keyword::Mem)) => return finish_mem_store(tokens, left),
        Some(Token::Keyword(Keyword::Res)) => return finish_res_access(tokens, left),
        _ => {},
    }

    let right = parse_expression(tokens)?;
    let op = parse_operator(tokens)?;
    expect(tokens, &Token::RParen, "')'")?;

    Ok(Expr::binary(op, left, right))
}

/// Parses the operator that closes a binary group.
fn parse_operator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<BinaryOperator>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some(Spanned { token: Token::Operator(op),
                       .. }) => Ok(*op),
        other => Err(unexpected(other, "an operator (+ - * | / % ^)")),
    }
}
