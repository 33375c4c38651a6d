use super::*;
use crate::{config::LayoutConfig, layout::measure::MonoMeasure, pipeline::compile};

fn config() -> LayoutConfig {
    LayoutConfig {
        page_width_pt: 60.0,
        margin_pt: 10.0,
        ..LayoutConfig::default()
    }
}

fn render(src: &str) -> FrameRGBA {
    let config = config();
    let page = compile(src, &config, &MonoMeasure::default()).unwrap();
    let mut backend = CpuBackend::new(RenderSettings::from(&config));
    backend.render_page(&page).unwrap()
}

#[test]
fn fill_covers_the_box_only() {
    let f = render("#rect(width: 20pt, height: 20pt, fill: rgb(255, 0, 0))");
    assert_eq!((f.width, f.height), (60, 40));
    assert!(f.premultiplied);
    assert_eq!(f.pixel(20, 20), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(2, 2), Some([255, 255, 255, 255]));
    assert_eq!(f.pixel(35, 20), Some([255, 255, 255, 255]));
}

#[test]
fn stroke_is_centered_on_the_edge() {
    let f = render("#rect(width: 20pt, height: 20pt, stroke: 4pt + rgb(0, 0, 255))");
    assert_eq!(f.pixel(10, 20), Some([0, 0, 255, 255]));
    assert_eq!(f.pixel(20, 20), Some([255, 255, 255, 255]));
}

#[test]
fn per_edge_strokes_with_fill_render() {
    let f = render(
        "#rect(width: 20pt, height: 20pt, fill: rgb(255, 0, 0), stroke: (left: 4pt + rgb(0, 0, 255)))",
    );
    assert_eq!(f.pixel(10, 20), Some([0, 0, 255, 255]));
    assert_eq!(f.pixel(25, 20), Some([255, 0, 0, 255]));
}

#[test]
fn scale_multiplies_surface_size() {
    let config = LayoutConfig {
        px_per_pt: 2.0,
        ..config()
    };
    let page = compile("#rect(width: 20pt, height: 20pt)", &config, &MonoMeasure::default()).unwrap();
    let f = CpuBackend::new(RenderSettings::from(&config))
        .render_page(&page)
        .unwrap();
    assert_eq!((f.width, f.height), (120, 80));
}

#[test]
fn oversized_surface_is_a_render_error() {
    let page = Page {
        width: 70_000.0,
        height: 10.0,
        boxes: Vec::new(),
    };
    let err = CpuBackend::new(RenderSettings::default())
        .render_page(&page)
        .unwrap_err();
    assert!(matches!(err, RectError::Render(_)));
}
