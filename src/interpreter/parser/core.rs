use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Spanned, Token},
        parser::{
            binary::parse_operation,
            command::parse_mem_access,
            control::{parse_for, parse_if},
            utils::{check_nesting, expect_end_of_line, parse_number, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting accepted on one line.
pub const MAX_NESTING: usize = 256;

/// Parses the tokens of one line into a single expression tree.
///
/// The whole line must be consumed: anything between the end of the
/// expression and the end-of-line sentinel is reported as trailing tokens.
/// Lines nesting parentheses deeper than [`MAX_NESTING`] are rejected before
/// any production runs.
///
/// Grammar: `line := expression EOL`
///
/// # Parameters
/// - `tokens`: Tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root node of the line.
///
/// # Example
/// ```
/// use rpncalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_line},
/// };
///
/// let tokens = tokenize("(7 2 /)", 1).unwrap();
/// let expr = parse_line(&tokens).unwrap();
///
/// assert_eq!(expr,
///            Expr::binary(BinaryOperator::IntDiv, Expr::Number(7.0), Expr::Number(2.0)));
/// ```
pub fn parse_line(tokens: &[Spanned]) -> ParseResult<Expr> {
    check_nesting(tokens)?;
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;
    expect_end_of_line(&mut iter)?;
    Ok(expr)
}

/// Parses an expression: a parenthesized group or a numeric literal.
///
/// Grammar: `expression := group | NUMBER`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    match tokens.peek().map(|spanned| &spanned.token) {
        Some(Token::LParen) => parse_group(tokens),
        Some(Token::Number(_)) => parse_number(tokens),
        _ => Err(unexpected(tokens.peek().copied(), "'(' or a number")),
    }
}

/// Chooses the production for a group starting at `(`.
///
/// This is the only place that looks two tokens ahead: the token after `(`
/// selects between a conditional, a loop, a memory read and everything that
/// starts with a term (binary groups, memory stores and history lookups).
fn parse_group<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();

    match lookahead.peek().map(|spanned| &spanned.token) {
        Some(Token::Keyword(Keyword::Se)) => parse_if(tokens),
        Some(Token::Keyword(Keyword::Para)) => parse_for(tokens),
        Some(Token::Keyword(Keyword::Mem)) => parse_mem_access(tokens),
        _ => parse_operation(tokens),
    }
}
