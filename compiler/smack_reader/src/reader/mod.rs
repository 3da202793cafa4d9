//! Recursive-descent reader over the token stream.

use smack_ir::{MapValue, Value};
use smack_stack::ensure_sufficient_stack;

use crate::error::ReadError;
use crate::escape::cook_string;
use crate::lexer::{tokenize, Token, TokenKind};

/// Read the first form in `source`. Text after it is ignored.
pub fn read(source: &str) -> Result<Value, ReadError> {
    let mut reader = Reader::new(tokenize(source)?);
    if reader.at_end() {
        return Err(ReadError::Empty);
    }
    reader.read_form()
}

/// Read every form in `source`, in order.
pub fn read_all(source: &str) -> Result<Vec<Value>, ReadError> {
    let mut reader = Reader::new(tokenize(source)?);
    let mut forms = Vec::new();
    while !reader.at_end() {
        forms.push(reader.read_form()?);
    }
    Ok(forms)
}

struct Reader<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Reader<'src> {
    fn new(tokens: Vec<Token<'src>>) -> Self {
        Reader { tokens, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn read_form(&mut self) -> Result<Value, ReadError> {
        ensure_sufficient_stack(|| self.read_form_inner())
    }

    fn read_form_inner(&mut self) -> Result<Value, ReadError> {
        let Some(token) = self.advance() else {
            return Err(ReadError::UnexpectedEof {
                expected: "a form".to_string(),
            });
        };

        match token.kind {
            TokenKind::LParen => Ok(Value::list(self.read_until(TokenKind::RParen, ')')?)),
            TokenKind::LBracket => Ok(Value::vector(self.read_until(TokenKind::RBracket, ']')?)),
            TokenKind::LBrace => Ok(Value::Map(MapValue::literal(
                self.read_until(TokenKind::RBrace, '}')?,
            ))),
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                Err(ReadError::UnexpectedDelimiter {
                    found: token.text.chars().next().unwrap_or(')'),
                    offset: token.offset,
                })
            }
            TokenKind::Quote => self.wrap("quote"),
            TokenKind::Backtick => self.wrap("quasiquote"),
            TokenKind::Tilde => self.wrap("unquote"),
            TokenKind::SpliceUnquote => self.wrap("splice-unquote"),
            TokenKind::At => self.wrap("deref"),
            TokenKind::Caret => {
                // ^meta target => (with-meta target meta)
                let meta = self.read_form()?;
                let target = self.read_form()?;
                Ok(Value::list(vec![Value::symbol("with-meta"), target, meta]))
            }
            TokenKind::Str => Ok(Value::string(cook_string(token.text))),
            TokenKind::Word => Ok(classify_word(token.text)),
        }
    }

    /// Read forms until the `close` token, consuming it.
    fn read_until(&mut self, close: TokenKind, close_char: char) -> Result<Vec<Value>, ReadError> {
        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return Err(ReadError::UnexpectedEof {
                        expected: format!("`{close_char}`"),
                    })
                }
                Some(token) if token.kind == close => {
                    self.pos += 1;
                    return Ok(items);
                }
                Some(_) => items.push(self.read_form()?),
            }
        }
    }

    /// `'x` and friends: `(name x)`.
    fn wrap(&mut self, name: &str) -> Result<Value, ReadError> {
        let form = self.read_form()?;
        Ok(Value::list(vec![Value::symbol(name), form]))
    }
}

/// Classify a bare word: keyword atom, number, literal, or symbol.
fn classify_word(text: &str) -> Value {
    if let Some(name) = text.strip_prefix(':') {
        return Value::atom(name);
    }
    if let Some(n) = parse_number(text) {
        return Value::number(n);
    }
    match text {
        "true" => Value::boolean(true),
        "false" => Value::boolean(false),
        "nil" => Value::nil(),
        _ => Value::symbol(text),
    }
}

/// Decimal floats only. Words such as `inf` or `nan` stay symbols.
fn parse_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits = unsigned.strip_prefix('.').unwrap_or(unsigned);
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests;
