use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Keyword, Spanned, Token},
        parser::{
            core::ParseResult,
            utils::{expect, expect_keyword},
        },
    },
};

/// Parses `(MEM)`, which reads the memory register.
pub fn parse_mem_access<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    expect(tokens, &Token::LParen, "'('")?;
    expect_keyword(tokens, Keyword::Mem)?;
    expect(tokens, &Token::RParen, "')' after 'MEM'")?;
    Ok(Expr::MemAccess)
}

/// Finishes `(V MEM)` once `(` and the stored term have been consumed.
pub(in crate::interpreter::parser) fn finish_mem_store<'a, I>(tokens: &mut Peekable<I>,
                                                              value: Expr)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    expect_keyword(tokens, Keyword::Mem)?;
    expect(tokens, &Token::RParen, "')' after 'MEM'")?;
    Ok(Expr::MemStore { value: Box::new(value) })
}

/// Finishes `(N RES)` once `(` and the index term have been consumed.
pub(in crate::interpreter::parser) fn finish_res_access<'a, I>(tokens: &mut Peekable<I>,
                                                               index: Expr)
                                                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    expect_keyword(tokens, Keyword::Res)?;
    expect(tokens, &Token::RParen, "')' after 'RES'")?;
    Ok(Expr::ResAccess { index: Box::new(index) })
}
