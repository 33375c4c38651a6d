use crate::eval::args::rect_args;
use crate::foundation::{
    error::{RectError, RectResult},
    span::Span,
};
use crate::model::spec::{RectSpec, RectStyle};
use crate::style::chain::StyleChain;
use crate::syntax::{
    ast::{Node, RectCall},
    markup::{parse_document, parse_rect_call},
};

#[derive(Clone, Debug)]
/// A rect call after argument casting and style inheritance.
pub struct EvaluatedRect {
    /// Effective parameters: the call's own, filled in from enclosing set rules.
    pub spec: RectSpec,
    /// Span of the call in the source.
    pub span: Span,
}

/// Evaluate every rect call in `src`, in document order.
///
/// `root` acts as the outermost set rule. Set rules in the document apply to
/// the calls after them in the same scope (including nested scopes) and are
/// dropped when that scope closes.
#[tracing::instrument(skip(src, root), fields(len = src.len()))]
pub fn eval_document(src: &str, root: &RectStyle) -> RectResult<Vec<EvaluatedRect>> {
    let nodes = parse_document(src)?;
    let chain = StyleChain::new(root);
    let mut out = Vec::new();
    eval_nodes(&nodes, chain, &mut out)?;
    tracing::debug!(rects = out.len(), "evaluated document");
    Ok(out)
}

/// Evaluate a single `rect(..)[..]` call without any inherited style.
pub fn eval_rect(src: &str) -> RectResult<RectSpec> {
    let call = parse_rect_call(src)?;
    call_spec(&call)
}

fn eval_nodes(
    nodes: &[Node],
    chain: StyleChain<'_>,
    out: &mut Vec<EvaluatedRect>,
) -> RectResult<()> {
    for (idx, node) in nodes.iter().enumerate() {
        match node {
            Node::Set(rule) => {
                let (style, _) = rect_args(&rule.args, false)?;
                let inner = chain.chain(&style);
                return eval_nodes(&nodes[idx + 1..], inner, out);
            }
            Node::Rect(call) => {
                let spec = call_spec(call)?;
                out.push(EvaluatedRect {
                    spec: chain.materialize_spec(&spec),
                    span: call.span,
                });
            }
            Node::Scope(children) => eval_nodes(children, chain, out)?,
        }
    }
    Ok(())
}

fn call_spec(call: &RectCall) -> RectResult<RectSpec> {
    let (style, positional) = rect_args(&call.args, true)?;
    let body = match (positional, &call.body) {
        (Some(p), Some(b)) => {
            return Err(RectError::syntax(
                "body given both as argument and in brackets",
                p.span.join(b.span),
            ));
        }
        (Some(p), None) => Some(p.v),
        (None, Some(b)) => Some(b.v.clone()),
        (None, None) => None,
    };
    Ok(RectSpec { style, body })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/document.rs"]
mod tests;
