//! Tokenizer.
//!
//! Whitespace, commas and `;` comments separate tokens and are dropped.
//! Everything else is punctuation, a string literal, or a bare word; bare
//! words (numbers, keywords, symbols) are classified by the reader.

use logos::Logos;

use crate::error::ReadError;

/// Token kinds recognized by the scanner.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\x0C,]+|;[^\n]*)")]
pub enum TokenKind {
    /// `~@`
    #[token("~@")]
    SpliceUnquote,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[token("'")]
    Quote,
    #[token("`")]
    Backtick,
    #[token("~")]
    Tilde,
    #[token("^")]
    Caret,
    #[token("@")]
    At,

    /// A double-quoted string. At end of input the closing quote may be
    /// missing, and a final lone backslash stays part of the token.
    #[regex(r#""([^"\\]|\\(.|\n))*\\?"?"#)]
    Str,

    /// Any other run of non-delimiter characters.
    #[regex(r#"[^ \t\r\n\x0C,;()\[\]{}'"`~^@][^ \t\r\n\x0C,;()\[\]{}'"`]*"#)]
    Word,
}

/// A token and the source text it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// Byte offset of the first character.
    pub offset: usize,
}

/// Split `source` into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ReadError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let kind = kind.map_err(|()| ReadError::InvalidToken {
            text: lexer.slice().to_string(),
            offset: span.start,
        })?;
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            offset: span.start,
        });
    }
    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
