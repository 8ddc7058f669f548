use std::fmt;

use logos::Logos;

use crate::{ast::BinaryOperator, error::LexError};

/// A numeric literal together with its source spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    /// The parsed value.
    pub value: f64,
    /// The literal exactly as written, sign included.
    pub raw:   String,
}

/// The nine reserved words of the language.
///
/// Keywords are case-insensitive in source and always reported upper-cased.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Keyword {
    /// `MEM`
    Mem,
    /// `RES`
    Res,
    /// `SE` (if)
    Se,
    /// `ENTAO` (then)
    Entao,
    /// `SENAO` (else)
    Senao,
    /// `PARA` (for)
    Para,
    /// `DE` (from)
    De,
    /// `ATE` (to)
    Ate,
    /// `PASSO` (step)
    Passo,
}

impl Keyword {
    const ALL: [Self; 9] = [Self::Mem,
                            Self::Res,
                            Self::Se,
                            Self::Entao,
                            Self::Senao,
                            Self::Para,
                            Self::De,
                            Self::Ate,
                            Self::Passo];

    /// Returns the upper-case spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mem => "MEM",
            Self::Res => "RES",
            Self::Se => "SE",
            Self::Entao => "ENTAO",
            Self::Senao => "SENAO",
            Self::Para => "PARA",
            Self::De => "DE",
            Self::Ate => "ATE",
            Self::Passo => "PASSO",
        }
    }

    /// Looks up a keyword, ignoring ASCII case.
    ///
    /// ## Example
    /// ```
    /// use rpncalc::interpreter::lexer::Keyword;
    ///
    /// assert_eq!(Keyword::from_word("senao"), Some(Keyword::Senao));
    /// assert_eq!(Keyword::from_word("X"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter()
                 .find(|keyword| keyword.as_str().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reasons reported by the generated lexer.
///
/// Unrecognized input maps to the default variant; [`tokenize`] turns these
/// into positioned [`LexError`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFault {
    /// A character outside the language alphabet.
    #[default]
    UnexpectedCharacter,
    /// A digit run with a dangling or repeated decimal point.
    MalformedNumber,
    /// A word that is not a keyword.
    UnknownKeyword,
}

/// Represents a lexical token of one source line.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-3` or `2.75`.
    ///
    /// The pattern is deliberately wider than the grammar so that `1.` and
    /// `1.2.3` are rejected as one malformed literal.
    #[regex(r"-?[0-9]+(\.[0-9]*)*", parse_number)]
    Number(NumberLiteral),
    /// One of `+ - * | / % ^`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("|", |_| BinaryOperator::RealDiv)]
    #[token("/", |_| BinaryOperator::IntDiv)]
    #[token("%", |_| BinaryOperator::Mod)]
    #[token("^", |_| BinaryOperator::Pow)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Reserved words such as `MEM` or `SENAO`.
    #[regex(r"[A-Za-z][A-Za-z0-9]*", parse_keyword)]
    Keyword(Keyword),
    /// A decimal point not attached to a digit run.
    #[token(".")]
    Dot,
    /// Sentinel appended after the last real token of a line.
    EndOfLine,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(literal) => f.write_str(&literal.raw),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Keyword(keyword) => write!(f, "{keyword}"),
            Self::Dot => f.write_str("."),
            Self::EndOfLine => f.write_str("end of line"),
        }
    }
}

/// A token with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token.
    pub token:  Token,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Ok(NumberLiteral)`: for `digits` or `digits.digits`, optionally signed.
/// - `Err(LexFault::MalformedNumber)`: for a trailing or repeated `.`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<NumberLiteral, LexFault> {
    let raw = lex.slice();
    let well_formed = match raw.split_once('.') {
        None => true,
        Some((_, fraction)) => {
            !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit())
        },
    };
    if !well_formed {
        return Err(LexFault::MalformedNumber);
    }

    raw.parse()
       .map(|value| NumberLiteral { value,
                                    raw: raw.to_string() })
       .map_err(|_| LexFault::MalformedNumber)
}

/// Maps the current word slice to a keyword.
fn parse_keyword(lex: &logos::Lexer<Token>) -> Result<Keyword, LexFault> {
    Keyword::from_word(lex.slice()).ok_or(LexFault::UnknownKeyword)
}

/// Returns the 1-based character column of a byte offset within `source`.
fn column_at(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}

/// Splits one source line into tokens.
///
/// Whitespace separates tokens and is never emitted. The returned sequence
/// always ends with a [`Token::EndOfLine`] sentinel.
///
/// # Parameters
/// - `source`: The text of a single line.
/// - `line`: The 1-based line number, recorded in every token and error.
///
/// # Errors
/// Returns a [`LexError`] for the first unrecognized character, malformed
/// number or unknown keyword.
///
/// # Example
/// ```
/// use rpncalc::{
///     ast::BinaryOperator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("(3 -4 -)", 1).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.token.to_string()).collect();
///
/// assert_eq!(kinds, ["(", "3", "-4", "-", ")", "end of line"]);
/// assert_eq!(tokens[3].token, Token::Operator(BinaryOperator::Sub));
/// assert_eq!(tokens[3].column, 7);
/// ```
pub fn tokenize(source: &str, line: usize) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = column_at(source, lexer.span().start);
        match token {
            Ok(token) => tokens.push(Spanned { token,
                                               line,
                                               column }),
            Err(fault) => {
                let text = lexer.slice();
                return Err(match fault {
                               LexFault::UnexpectedCharacter => {
                                   LexError::UnexpectedCharacter { character:
                                                                       text.chars()
                                                                           .next()
                                                                           .unwrap_or('\u{fffd}'),
                                                                   line,
                                                                   column }
                               },
                               LexFault::MalformedNumber => {
                                   LexError::MalformedNumber { text: text.to_string(),
                                                               line,
                                                               column }
                               },
                               LexFault::UnknownKeyword => {
                                   LexError::UnknownKeyword { word: text.to_ascii_uppercase(),
                                                              line,
                                                              column }
                               },
                           });
            },
        }
    }

    tokens.push(Spanned { token: Token::EndOfLine,
                          line,
                          column: source.chars().count() + 1 });
    Ok(tokens)
}
