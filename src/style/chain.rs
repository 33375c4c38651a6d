use crate::model::spec::{RectSpec, RectStyle};

/// Scoped set rules, innermost first.
///
/// A chain borrows its links, so a rule's lifetime is exactly the lexical
/// region that can see it: push a rule with [`StyleChain::chain`], use the
/// returned chain for the rest of the scope, and drop it on exit.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleChain<'a> {
    head: Option<&'a RectStyle>,
    tail: Option<&'a StyleChain<'a>>,
}

impl<'a> StyleChain<'a> {
    /// Chain with a single (outermost) rule.
    pub fn new(root: &'a RectStyle) -> Self {
        Self {
            head: Some(root),
            tail: None,
        }
    }

    /// Push `style` as the innermost rule.
    pub fn chain(&'a self, style: &'a RectStyle) -> StyleChain<'a> {
        StyleChain {
            head: Some(style),
            tail: Some(self),
        }
    }

    fn links(&self) -> impl Iterator<Item = &'a RectStyle> {
        let mut cursor = Some(*self);
        std::iter::from_fn(move || {
            loop {
                let link = cursor?;
                cursor = link.tail.copied();
                if let Some(head) = link.head {
                    return Some(head);
                }
            }
        })
    }

    /// Innermost value of a parameter.
    pub fn get<T>(&self, field: impl Fn(&'a RectStyle) -> Option<T>) -> Option<T> {
        self.links().find_map(field)
    }

    /// Fill every parameter `explicit` leaves unset with the innermost
    /// inherited value. Parameters are taken whole; a mapping given in the
    /// call does not merge with an inherited mapping.
    pub fn materialize(&self, explicit: &RectStyle) -> RectStyle {
        RectStyle {
            width: explicit.width.or_else(|| self.get(|s| s.width)),
            height: explicit.height.or_else(|| self.get(|s| s.height)),
            fill: explicit.fill.or_else(|| self.get(|s| s.fill)),
            stroke: explicit
                .stroke
                .clone()
                .or_else(|| self.get(|s| s.stroke.clone())),
            radius: explicit
                .radius
                .clone()
                .or_else(|| self.get(|s| s.radius.clone())),
            inset: explicit
                .inset
                .clone()
                .or_else(|| self.get(|s| s.inset.clone())),
            outset: explicit
                .outset
                .clone()
                .or_else(|| self.get(|s| s.outset.clone())),
        }
    }

    /// [`Self::materialize`] for a whole spec; the body is never inherited.
    pub fn materialize_spec(&self, spec: &RectSpec) -> RectSpec {
        RectSpec {
            style: self.materialize(&spec.style),
            body: spec.body.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/chain.rs"]
mod tests;
