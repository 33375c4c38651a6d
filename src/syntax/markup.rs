use crate::foundation::{
    error::{RectError, RectResult},
    span::{Span, Spanned},
};
use crate::syntax::{
    ast::{Node, RectCall, SetRule},
    lexer::{is_ident_continue, is_ident_start},
    parser::Parser,
};

/// Parse a document made of `#rect(..)[..]` calls, `#set rect(..)` rules,
/// `#[ .. ]` scopes and `//` line comments, separated by whitespace.
pub(crate) fn parse_document(src: &str) -> RectResult<Vec<Node>> {
    let mut scanner = Scanner { src, pos: 0 };
    // Open scopes with the offset of their `#[`; the root has none.
    let mut stack: Vec<(Vec<Node>, Option<usize>)> = vec![(Vec::new(), None)];

    loop {
        scanner.skip_trivia();
        let start = scanner.pos;
        let Some(c) = scanner.peek() else { break };

        match c {
            '#' if scanner.rest().starts_with("#[") => {
                scanner.pos += 2;
                stack.push((Vec::new(), Some(start)));
            }
            '#' => {
                scanner.pos += 1;
                let node = scanner.parse_command(start)?;
                if let Some((nodes, _)) = stack.last_mut() {
                    nodes.push(node);
                }
            }
            ']' => {
                scanner.pos += 1;
                if stack.len() < 2 {
                    return Err(RectError::syntax(
                        "unmatched `]`",
                        Span::new(start, scanner.pos),
                    ));
                }
                if let Some((nodes, _)) = stack.pop()
                    && let Some((parent, _)) = stack.last_mut()
                {
                    parent.push(Node::Scope(nodes));
                }
            }
            _ => {
                let end = scanner.rest().find(char::is_whitespace).unwrap_or(scanner.rest().len());
                return Err(RectError::syntax(
                    "unexpected text, content must be the body of a rect",
                    Span::new(start, start + end),
                ));
            }
        }
    }

    if let Some(&(_, Some(open))) = stack.last() {
        return Err(RectError::syntax(
            "unclosed scope",
            Span::new(open, open + 2),
        ));
    }
    Ok(stack.pop().map(|(nodes, _)| nodes).unwrap_or_default())
}

/// Parse a single `rect(..)[..]` call; a leading `#` is optional.
pub(crate) fn parse_rect_call(src: &str) -> RectResult<RectCall> {
    let mut scanner = Scanner { src, pos: 0 };
    scanner.skip_trivia();
    let start = scanner.pos;
    if scanner.peek() == Some('#') {
        scanner.pos += 1;
    }
    let name = scanner.ident()?;
    if name.v != "rect" {
        return Err(RectError::syntax(
            format!("expected `rect`, found `{}`", name.v),
            name.span,
        ));
    }
    let call = scanner.parse_call_rest(start)?;
    scanner.skip_trivia();
    if scanner.pos < src.len() {
        return Err(RectError::syntax(
            "unexpected text after call",
            Span::new(scanner.pos, src.len()),
        ));
    }
    Ok(call)
}

struct Scanner<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Scanner<'s> {
    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_trivia(&mut self) {
        loop {
            let rest = self.rest();
            if rest.starts_with("//") {
                self.pos += rest.find('\n').unwrap_or(rest.len());
                continue;
            }
            match self.peek() {
                Some(c) if c.is_whitespace() => self.pos += c.len_utf8(),
                _ => break,
            }
        }
    }

    fn ident(&mut self) -> RectResult<Spanned<String>> {
        let start = self.pos;
        match self.peek() {
            Some(c) if is_ident_start(c) => {}
            _ => {
                return Err(RectError::syntax(
                    "expected identifier",
                    Span::new(start, start),
                ));
            }
        }
        let len = self
            .rest()
            .find(|c: char| !is_ident_continue(c))
            .unwrap_or(self.rest().len());
        self.pos += len;
        Ok(Spanned::new(
            self.src[start..self.pos].to_owned(),
            Span::new(start, self.pos),
        ))
    }

    /// After a `#`: `set rect(..)` or `rect(..)[..]`.
    fn parse_command(&mut self, start: usize) -> RectResult<Node> {
        let name = self.ident()?;
        match name.v.as_str() {
            "set" => {
                self.skip_trivia();
                let target = self.ident()?;
                if target.v != "rect" {
                    return Err(RectError::syntax(
                        format!("set rules only apply to `rect`, not `{}`", target.v),
                        target.span,
                    ));
                }
                let mut parser = Parser::new(self.src, self.pos);
                let (args, args_span) = parser.parse_args()?;
                self.pos = parser.cursor();
                Ok(Node::Set(SetRule {
                    args,
                    span: Span::new(start, args_span.end),
                }))
            }
            "rect" => Ok(Node::Rect(self.parse_call_rest(start)?)),
            other => Err(RectError::syntax(
                format!("unknown function `{other}`"),
                name.span,
            )),
        }
    }

    /// Argument list (optional when a body follows) and body of a call
    /// whose name has been consumed.
    fn parse_call_rest(&mut self, start: usize) -> RectResult<RectCall> {
        let mut args = Vec::new();
        let mut end = self.pos;
        if self.peek() == Some('(') {
            let mut parser = Parser::new(self.src, self.pos);
            let (parsed, args_span) = parser.parse_args()?;
            self.pos = parser.cursor();
            args = parsed;
            end = args_span.end;
        } else if self.peek() != Some('[') {
            return Err(RectError::syntax(
                "expected `(` or `[` after `rect`",
                Span::new(self.pos, self.pos),
            ));
        }

        let mut body = None;
        if self.peek() == Some('[') {
            let text = self.body()?;
            end = self.pos;
            body = Some(text);
        }

        Ok(RectCall {
            args,
            body,
            span: Span::new(start, end),
        })
    }

    /// `[..]` with balanced brackets; `\[` and `\]` are literal.
    fn body(&mut self) -> RectResult<Spanned<String>> {
        let open = self.pos;
        self.pos += 1;
        let inner_start = self.pos;
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            let Some(c) = self.peek() else {
                return Err(RectError::syntax(
                    "unclosed body",
                    Span::new(open, open + 1),
                ));
            };
            self.pos += c.len_utf8();
            match c {
                '\\' => {
                    if let Some(next) = self.peek() {
                        self.pos += next.len_utf8();
                        text.push(next);
                    }
                }
                '[' => {
                    depth += 1;
                    text.push(c);
                }
                ']' if depth == 0 => {
                    return Ok(Spanned::new(text, Span::new(inner_start, self.pos - 1)));
                }
                ']' => {
                    depth -= 1;
                    text.push(c);
                }
                other => text.push(other),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/markup.rs"]
mod tests;
