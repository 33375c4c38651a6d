use rayon::prelude::*;

use crate::{
    config::LayoutConfig,
    eval::document::eval_document,
    foundation::error::RectResult,
    layout::{
        flow::{Page, flow},
        measure::Measure,
        rect::resolve_rect,
    },
};

/// Parse, evaluate and lay out a document.
///
/// `config.defaults` is the outermost set rule. Boxes are resolved in
/// parallel against the page region and stacked in document order.
#[tracing::instrument(skip(src, config, measure), fields(len = src.len()))]
pub fn compile(src: &str, config: &LayoutConfig, measure: &dyn Measure) -> RectResult<Page> {
    config.validate()?;
    let rects = eval_document(src, &config.defaults)?;
    let region = config.region();

    let resolved = rects
        .par_iter()
        .map(|r| resolve_rect(&r.spec, region, measure).map(|b| (b, r.span)))
        .collect::<RectResult<Vec<_>>>()?;

    let page = flow(
        resolved,
        config.page_width_pt,
        config.page_height_pt,
        config.margin_pt,
        config.gap_pt,
    );
    tracing::debug!(boxes = page.boxes.len(), height = page.height, "compiled page");
    Ok(page)
}
