use std::iter::Peekable;

use crate::{
    ast::{Expr, ForLoop},
    interpreter::{
        lexer::{Keyword, Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{accept_keyword, expect, expect_keyword, parse_number},
        },
    },
};

/// Parses a conditional with an optional `SENAO` branch.
///
/// Syntax:
/// ```text
///     (SE <condition> ENTAO <expression> [SENAO <expression>])
/// ```
/// Each part is a full expression, so conditionals and loops may nest.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening `(`.
///
/// # Returns
/// An `Expr::If` node.
///
/// # Errors
/// - `UnexpectedToken` if `SE`, `ENTAO` or the closing `)` are missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LParen, "'('")?;
    expect_keyword(tokens, Keyword::Se)?;
    let condition = parse_expression(tokens)?;
    expect_keyword(tokens, Keyword::Entao)?;
    let then_branch = parse_expression(tokens)?;

    let else_branch = if accept_keyword(tokens, Keyword::Senao) {
        Some(Box::new(parse_expression(tokens)?))
    } else {
        None
    };

    expect(tokens, &Token::RParen, "'SENAO' or ')'")?;

    Ok(Expr::If { condition: Box::new(condition),
                  then_branch: Box::new(then_branch),
                  else_branch })
}

/// Parses a bounded loop.
///
/// Syntax:
/// ```text
///     (PARA <NUMBER> DE <NUMBER> ATE <NUMBER> [PASSO <NUMBER>] <expression>)
/// ```
/// The loop variable, bounds and step must be numeric literals; the body is a
/// full expression.
///
/// # Errors
/// - `UnexpectedToken` if a keyword is missing, a header slot is not a number
///   literal, or the closing `)` is missing.
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::LParen, "'('")?;
    expect_keyword(tokens, Keyword::Para)?;
    let var = parse_number(tokens)?;
    expect_keyword(tokens, Keyword::De)?;
    let start = parse_number(tokens)?;
    expect_keyword(tokens, Keyword::Ate)?;
    let end = parse_number(tokens)?;

    let step = if accept_keyword(tokens, Keyword::Passo) {
        Some(Box::new(parse_number(tokens)?))
    } else {
        None
    };

    let body = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')' after the loop body")?;

    Ok(Expr::For(ForLoop { var: Box::new(var),
                           start: Box::new(start),
                           end: Box::new(end),
                           step,
                           body: Box::new(body) }))
}
