//! rectbox lays out and paints decorated rectangles.
//!
//! A rectangle has a size (explicit or driven by its body), an inset between
//! its edge and its body, an outset that grows the painted area without
//! affecting layout, per-corner elliptical radii, a fill and per-edge strokes.
//! [`resolve_rect`] turns a [`RectSpec`] into a [`ResolvedBox`]: final
//! geometry plus a list of [`PaintOp`]s a renderer can execute directly.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `#set rect(..)` rules and `#rect(..)[body]` calls, with byte spans
//! 2. **Evaluate**: arguments cast into a [`RectSpec`]; set rules inherited via [`StyleChain`]
//! 3. **Resolve**: `RectSpec + Region + Measure -> ResolvedBox`
//! 4. **Flow**: resolved boxes stacked on a [`Page`]
//! 5. **Render**: `Page -> FrameRGBA` (CPU backend, premultiplied RGBA8)
//!
//! Steps 1–4 are pure; [`compile`] runs them in one call.
//!
//! ```
//! use rectbox::{LayoutConfig, MonoMeasure, compile};
//!
//! let src = "#set rect(fill: red)\n#rect(width: 2cm, inset: 5pt)[hello]";
//! let page = compile(src, &LayoutConfig::default(), &MonoMeasure::default()).unwrap();
//! assert_eq!(page.boxes.len(), 1);
//! ```
#![forbid(unsafe_code)]

mod config;
mod eval;
mod foundation;
mod layout;
mod model;
mod paint;
mod pipeline;
mod render;
mod style;
mod syntax;

pub use config::LayoutConfig;
pub use eval::document::{EvaluatedRect, eval_document, eval_rect};
pub use foundation::color::{Color, Rgba8Premul};
pub use foundation::core::{
    Affine, Axes, BezPath, Corner, Corners, Point, Rect, Region, Side, Sides, Size, Vec2,
};
pub use foundation::error::{RectError, RectResult};
pub use foundation::span::{Source, Span, Spanned};
pub use foundation::units::{Length, Ratio, Rel, Sizing};
pub use layout::flow::{Page, PlacedBox, flow};
pub use layout::measure::{FontMeasure, Measure, MonoMeasure};
pub use layout::rect::{BodyFrame, ResolvedBox, resolve_all, resolve_rect};
pub use model::dsl::RectBuilder;
pub use model::sides::{CornersValue, MAPPING_KEYS, SidesValue};
pub use model::spec::{RectSpec, RectStyle};
pub use model::stroke::{DEFAULT_STROKE_THICKNESS_PT, PartialStroke, Stroke};
pub use paint::ops::{LineCap, PaintOp, emit};
pub use paint::shape::RoundedBox;
pub use pipeline::compile;
pub use render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend, render_page,
};
pub use render::cpu::CpuBackend;
pub use style::chain::StyleChain;
