use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Spanned, Token},
        parser::core::{MAX_NESTING, ParseResult},
    },
};

/// Builds the error for finding `found` where `expected` was required.
///
/// A missing token (the iterator ran past the sentinel) is reported as the end
/// of the line at position zero.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&Spanned>,
                                                 expected: &str)
                                                 -> ParseError {
    match found {
        Some(spanned) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                       found:    spanned.token.to_string(),
                                                       line:     spanned.line,
                                                       column:   spanned.column, },
        None => ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    Token::EndOfLine.to_string(),
                                              line:     0,
                                              column:   0, },
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Errors
/// Returns `UnexpectedToken` naming `description` otherwise.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> ParseResult<&'a Spanned>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some(spanned) if &spanned.token == expected => Ok(spanned),
        other => Err(unexpected(other, description)),
    }
}

/// Consumes the next token if it is the keyword `keyword`.
pub(in crate::interpreter::parser) fn expect_keyword<'a, I>(tokens: &mut Peekable<I>,
                                                            keyword: Keyword)
                                                            -> ParseResult<&'a Spanned>
    where I: Iterator<Item = &'a Spanned>
{
    expect(tokens,
           &Token::Keyword(keyword),
           &format!("'{}'", keyword.as_str()))
}

/// Consumes the next token if it is the given keyword, without failing.
pub(in crate::interpreter::parser) fn accept_keyword<'a, I>(tokens: &mut Peekable<I>,
                                                            keyword: Keyword)
                                                            -> bool
    where I: Iterator<Item = &'a Spanned>
{
    tokens.next_if(|spanned| spanned.token == Token::Keyword(keyword))
          .is_some()
}

/// Parses a numeric literal into an `Expr::Number`.
///
/// # Errors
/// Returns `UnexpectedToken` if the next token is not a number.
pub(in crate::interpreter::parser) fn parse_number<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some(Spanned { token: Token::Number(literal),
                       .. }) => Ok(Expr::Number(literal.value)),
        other => Err(unexpected(other, "a number")),
    }
}

/// Checks that nothing but the end-of-line sentinel is left.
pub(in crate::interpreter::parser) fn expect_end_of_line<'a, I>(tokens: &mut Peekable<I>)
                                                                -> ParseResult<()>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        None
        | Some(Spanned { token: Token::EndOfLine,
                         .. }) => Ok(()),
        Some(spanned) => {
            Err(ParseError::UnexpectedTrailingTokens { found:  spanned.token.to_string(),
                                                       line:   spanned.line,
                                                       column: spanned.column, })
        },
    }
}

/// Rejects lines whose parentheses nest deeper than [`MAX_NESTING`].
///
/// Every production that recurses consumes an unclosed `(`, so this bound
/// also limits the depth of the parser and of the evaluated tree.
pub(in crate::interpreter::parser) fn check_nesting(tokens: &[Spanned]) -> ParseResult<()> {
    let mut depth = 0usize;

    for spanned in tokens {
        match spanned.token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            _ => continue,
        }
        if depth > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING,
                                                    line:   spanned.line,
                                                    column: spanned.column, });
        }
    }
    Ok(())
}
