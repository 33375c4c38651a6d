use crate::foundation::{
    error::{RectError, RectResult},
    span::Span,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Ident(String),
    /// Number with an optional unit suffix (`2cm`, `50%`, `3`).
    Numeric(f64, String),
    Str(String),

    LParen,
    RParen,
    Comma,
    Colon,
    Plus,
    Minus,

    Eof,
}

impl TokenKind {
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::Ident(s) => format!("identifier `{s}`"),
            TokenKind::Numeric(v, unit) => format!("`{v}{unit}`"),
            TokenKind::Str(_) => "string".to_owned(),
            TokenKind::LParen => "`(`".to_owned(),
            TokenKind::RParen => "`)`".to_owned(),
            TokenKind::Comma => "`,`".to_owned(),
            TokenKind::Colon => "`:`".to_owned(),
            TokenKind::Plus => "`+`".to_owned(),
            TokenKind::Minus => "`-`".to_owned(),
            TokenKind::Eof => "end of input".to_owned(),
        }
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// On-demand lexer for code inside a call's parentheses.
///
/// The markup scanner hands over at `#name(`, and takes back over at
/// [`Lexer::cursor`] once the closing parenthesis has been consumed.
#[derive(Debug, Clone)]
pub(crate) struct Lexer<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub(crate) fn new(src: &'s str, pos: usize) -> Self {
        Self { src, pos }
    }

    pub(crate) fn cursor(&self) -> usize {
        self.pos
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_trivia(&mut self) {
        loop {
            let rest = &self.src[self.pos..];
            if rest.starts_with("//") {
                self.pos += rest.find('\n').unwrap_or(rest.len());
                continue;
            }
            match self.peek_char() {
                Some(c) if c.is_whitespace() => self.pos += c.len_utf8(),
                _ => break,
            }
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    pub(crate) fn next_token(&mut self) -> RectResult<Token> {
        self.skip_trivia();
        let start = self.pos;
        let Some(c) = self.peek_char() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: Span::new(start, start),
            });
        };

        let bytes = self.src.as_bytes();
        let kind = if c.is_ascii_digit()
            || (c == '.' && bytes.get(start + 1).is_some_and(u8::is_ascii_digit))
        {
            self.eat_while(|c| c.is_ascii_digit());
            if self.peek_char() == Some('.')
                && bytes.get(self.pos + 1).is_some_and(u8::is_ascii_digit)
            {
                self.pos += 1;
                self.eat_while(|c| c.is_ascii_digit());
            }
            let number_end = self.pos;
            let value: f64 = self.src[start..number_end]
                .parse()
                .map_err(|_| RectError::syntax("invalid number", Span::new(start, number_end)))?;
            if self.peek_char() == Some('%') {
                self.pos += 1;
            } else {
                self.eat_while(|c| c.is_ascii_alphabetic());
            }
            TokenKind::Numeric(value, self.src[number_end..self.pos].to_owned())
        } else if is_ident_start(c) {
            self.eat_while(is_ident_continue);
            TokenKind::Ident(self.src[start..self.pos].to_owned())
        } else if c == '"' {
            self.pos += 1;
            let mut out = String::new();
            loop {
                let Some(ch) = self.peek_char() else {
                    return Err(RectError::syntax(
                        "unclosed string",
                        Span::new(start, self.pos),
                    ));
                };
                self.pos += ch.len_utf8();
                match ch {
                    '"' => break,
                    '\\' => {
                        let Some(esc) = self.peek_char() else {
                            continue;
                        };
                        self.pos += esc.len_utf8();
                        match esc {
                            'n' => out.push('\n'),
                            't' => out.push('\t'),
                            other => out.push(other),
                        }
                    }
                    other => out.push(other),
                }
            }
            TokenKind::Str(out)
        } else {
            self.pos += c.len_utf8();
            match c {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                ',' => TokenKind::Comma,
                ':' => TokenKind::Colon,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                _ => {
                    return Err(RectError::syntax(
                        format!("unexpected character '{c}'"),
                        Span::new(start, self.pos),
                    ));
                }
            }
        };

        Ok(Token {
            kind,
            span: Span::new(start, self.pos),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/lexer.rs"]
mod tests;
