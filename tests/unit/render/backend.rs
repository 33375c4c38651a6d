use super::*;

fn frame(data: Vec<u8>, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data,
        premultiplied,
    }
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let f = frame(vec![64, 0, 128, 128, 10, 20, 30, 0], true);
    assert_eq!(f.to_straight_rgba8(), vec![128, 0, 255, 128, 0, 0, 0, 0]);
}

#[test]
fn straight_frames_pass_through() {
    let f = frame(vec![64, 0, 128, 128, 10, 20, 30, 0], false);
    assert_eq!(f.to_straight_rgba8(), f.data);
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = frame(vec![1, 2, 3, 4, 5, 6, 7, 8], true);
    assert_eq!(f.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn settings_follow_config() {
    let config = LayoutConfig {
        px_per_pt: 2.0,
        background_rgba8: [1, 2, 3, 255],
        ..LayoutConfig::default()
    };
    let s = RenderSettings::from(&config);
    assert_eq!(s.px_per_pt, 2.0);
    assert_eq!(s.clear_rgba, Some([1, 2, 3, 255]));
}

#[test]
fn invalid_scale_is_rejected() {
    let settings = RenderSettings {
        clear_rgba: None,
        px_per_pt: 0.0,
    };
    assert!(create_backend(BackendKind::Cpu, &settings).is_err());
}
