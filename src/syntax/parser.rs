use std::collections::VecDeque;

use crate::foundation::{
    error::{RectError, RectResult},
    span::{Span, Spanned},
};
use crate::syntax::{
    ast::{Arg, DictEntry, Expr},
    lexer::{Lexer, Token, TokenKind},
};

/// Recursive-descent parser for argument lists.
///
/// Grammar:
///
/// ```text
/// args    := '(' (arg (',' arg)* ','?)? ')'
/// arg     := ident ':' expr | expr
/// expr    := unary ('+' unary)*
/// unary   := '-' unary | primary
/// primary := numeric | string | ident | ident '(' args ')' | '(' inner ')'
/// inner   := ':' | entry (',' entry)* ','? | expr | <empty>
/// entry   := (ident | string) ':' expr
/// ```
pub(crate) struct Parser<'s> {
    lexer: Lexer<'s>,
    lookahead: VecDeque<Token>,
}

impl<'s> Parser<'s> {
    pub(crate) fn new(src: &'s str, pos: usize) -> Self {
        Self {
            lexer: Lexer::new(src, pos),
            lookahead: VecDeque::new(),
        }
    }

    /// Byte offset right after the last consumed token.
    ///
    /// Only meaningful when nothing has been peeked past it.
    pub(crate) fn cursor(&self) -> usize {
        debug_assert!(self.lookahead.is_empty());
        self.lexer.cursor()
    }

    fn peek_nth(&mut self, n: usize) -> RectResult<&Token> {
        while self.lookahead.len() <= n {
            let t = self.lexer.next_token()?;
            self.lookahead.push_back(t);
        }
        Ok(&self.lookahead[n])
    }

    fn peek(&mut self) -> RectResult<&TokenKind> {
        Ok(&self.peek_nth(0)?.kind)
    }

    fn bump(&mut self) -> RectResult<Token> {
        self.peek_nth(0)?;
        self.lookahead
            .pop_front()
            .ok_or_else(|| RectError::syntax("unexpected end of input", Span::detached()))
    }

    fn expect(&mut self, kind: TokenKind) -> RectResult<Token> {
        let t = self.bump()?;
        if t.kind == kind {
            Ok(t)
        } else {
            Err(RectError::syntax(
                format!("expected {}, found {}", kind.describe(), t.kind.describe()),
                t.span,
            ))
        }
    }

    fn consume(&mut self, kind: TokenKind) -> RectResult<bool> {
        if *self.peek()? == kind {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Parse `( .. )` and return the arguments plus the span of the list.
    pub(crate) fn parse_args(&mut self) -> RectResult<(Vec<Arg>, Span)> {
        let open = self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        loop {
            if *self.peek()? == TokenKind::RParen {
                let close = self.bump()?;
                return Ok((args, open.span.join(close.span)));
            }

            let named = matches!(self.peek()?, TokenKind::Ident(_))
                && self.peek_nth(1)?.kind == TokenKind::Colon;
            let name = if named {
                let t = self.bump()?;
                self.bump()?;
                match t.kind {
                    TokenKind::Ident(name) => Some(Spanned::new(name, t.span)),
                    _ => None,
                }
            } else {
                None
            };
            let value = self.parse_expr()?;
            args.push(Arg { name, value });

            if !self.consume(TokenKind::Comma)? && *self.peek()? != TokenKind::RParen {
                let t = self.bump()?;
                return Err(RectError::syntax(
                    format!("expected `,` or `)`, found {}", t.kind.describe()),
                    t.span,
                ));
            }
        }
    }

    pub(crate) fn parse_expr(&mut self) -> RectResult<Spanned<Expr>> {
        let mut e = self.parse_unary()?;
        while self.consume(TokenKind::Plus)? {
            let r = self.parse_unary()?;
            let span = e.span.join(r.span);
            e = Spanned::new(Expr::Add(Box::new(e), Box::new(r)), span);
        }
        Ok(e)
    }

    fn parse_unary(&mut self) -> RectResult<Spanned<Expr>> {
        if *self.peek()? == TokenKind::Minus {
            let minus = self.bump()?;
            let e = self.parse_unary()?;
            let span = minus.span.join(e.span);
            return Ok(Spanned::new(Expr::Neg(Box::new(e)), span));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> RectResult<Spanned<Expr>> {
        if *self.peek()? == TokenKind::LParen {
            return self.parse_parenthesized();
        }

        let t = self.bump()?;
        match t.kind {
            TokenKind::Numeric(v, unit) => Ok(Spanned::new(Expr::Numeric(v, unit), t.span)),
            TokenKind::Str(s) => Ok(Spanned::new(Expr::Str(s), t.span)),
            TokenKind::Ident(name) => {
                if *self.peek()? == TokenKind::LParen {
                    let (args, args_span) = self.parse_args()?;
                    Ok(Spanned::new(
                        Expr::Call {
                            callee: Spanned::new(name, t.span),
                            args,
                        },
                        t.span.join(args_span),
                    ))
                } else {
                    Ok(Spanned::new(Expr::Ident(name), t.span))
                }
            }
            other => Err(RectError::syntax(
                format!("expected expression, found {}", other.describe()),
                t.span,
            )),
        }
    }

    fn parse_parenthesized(&mut self) -> RectResult<Spanned<Expr>> {
        let open = self.expect(TokenKind::LParen)?;

        // `()` and `(:)` are both the empty dictionary.
        if *self.peek()? == TokenKind::RParen {
            let close = self.bump()?;
            return Ok(Spanned::new(Expr::Dict(vec![]), open.span.join(close.span)));
        }
        if *self.peek()? == TokenKind::Colon {
            self.bump()?;
            let close = self.expect(TokenKind::RParen)?;
            return Ok(Spanned::new(Expr::Dict(vec![]), open.span.join(close.span)));
        }

        let is_dict = matches!(self.peek()?, TokenKind::Ident(_) | TokenKind::Str(_))
            && self.peek_nth(1)?.kind == TokenKind::Colon;
        if !is_dict {
            let inner = self.parse_expr()?;
            if *self.peek()? == TokenKind::Comma {
                let t = self.bump()?;
                return Err(RectError::syntax(
                    "expected a dictionary, arrays are not supported",
                    t.span,
                ));
            }
            let close = self.expect(TokenKind::RParen)?;
            return Ok(Spanned::new(inner.v, open.span.join(close.span)));
        }

        let mut entries = Vec::new();
        loop {
            if *self.peek()? == TokenKind::RParen {
                let close = self.bump()?;
                return Ok(Spanned::new(
                    Expr::Dict(entries),
                    open.span.join(close.span),
                ));
            }

            let key_tok = self.bump()?;
            let key = match key_tok.kind {
                TokenKind::Ident(k) | TokenKind::Str(k) => Spanned::new(k, key_tok.span),
                other => {
                    return Err(RectError::syntax(
                        format!("expected dictionary key, found {}", other.describe()),
                        key_tok.span,
                    ));
                }
            };
            self.expect(TokenKind::Colon)?;
            let value = self.parse_expr()?;
            entries.push(DictEntry { key, value });

            if !self.consume(TokenKind::Comma)? && *self.peek()? != TokenKind::RParen {
                let t = self.bump()?;
                return Err(RectError::syntax(
                    format!("expected `,` or `)`, found {}", t.kind.describe()),
                    t.span,
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/parser.rs"]
mod tests;
