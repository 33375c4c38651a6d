use super::*;
use crate::foundation::{color::Color, units::Length};
use crate::model::sides::SidesValue;

#[test]
fn empty_json_is_the_default() {
    let config = LayoutConfig::from_json("{}").unwrap();
    assert_eq!(config, LayoutConfig::default());
    assert_eq!(config.page_width_pt, 595.28);
    assert_eq!(config.background_rgba8, [255, 255, 255, 255]);
}

#[test]
fn defaults_parse_as_a_style() {
    let config = LayoutConfig::from_json(
        r#"{ "margin_pt": 5, "defaults": { "fill": { "r": 1, "g": 2, "b": 3, "a": 255 }, "inset": { "uniform": { "abs": 4 } } } }"#,
    )
    .unwrap();
    assert_eq!(config.margin_pt, 5.0);
    assert_eq!(config.defaults.fill, Some(Some(Color::rgb(1, 2, 3))));
    assert_eq!(
        config.defaults.inset,
        Some(SidesValue::Uniform(Length::pt(4.0).into()))
    );
}

#[test]
fn region_is_the_page_inside_margins() {
    let config = LayoutConfig {
        page_width_pt: 100.0,
        page_height_pt: Some(80.0),
        margin_pt: 10.0,
        ..LayoutConfig::default()
    };
    assert_eq!(config.region(), Region::new(80.0, Some(60.0)));
}

#[test]
fn validation_rejects_bad_numbers() {
    let bad = [
        LayoutConfig {
            gap_pt: -1.0,
            ..LayoutConfig::default()
        },
        LayoutConfig {
            px_per_pt: 0.0,
            ..LayoutConfig::default()
        },
        LayoutConfig {
            page_height_pt: Some(f64::INFINITY),
            ..LayoutConfig::default()
        },
        LayoutConfig {
            page_width_pt: 30.0,
            margin_pt: 20.0,
            ..LayoutConfig::default()
        },
    ];
    for config in bad {
        assert!(
            matches!(config.validate(), Err(RectError::Validation(_))),
            "{config:?}"
        );
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        LayoutConfig::from_json("{ \"margin_pt\": \"wide\" }"),
        Err(RectError::Serde(_))
    ));
}

#[test]
fn load_reports_missing_files() {
    let err = LayoutConfig::load(std::path::Path::new("/nonexistent/rectbox.json")).unwrap_err();
    assert!(err.to_string().contains("failed to open config"));
}
