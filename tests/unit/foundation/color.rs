use super::*;

#[test]
fn named_palette_lookup() {
    assert_eq!(Color::named("purple"), Some(Color::rgb(0xb1, 0x0d, 0xc9)));
    assert_eq!(Color::named("black"), Some(Color::BLACK));
    assert_eq!(Color::named("cake"), None);
}

#[test]
fn hex_forms_parse() {
    assert_eq!(Color::from_hex("#f00"), Some(Color::rgb(255, 0, 0)));
    assert_eq!(Color::from_hex("#f008"), Some(Color::rgba(255, 0, 0, 0x88)));
    assert_eq!(Color::from_hex("00ff00"), Some(Color::rgb(0, 255, 0)));
    assert_eq!(
        Color::from_hex("#0000ff80"),
        Some(Color::rgba(0, 0, 255, 0x80))
    );
    assert_eq!(Color::from_hex("#12345"), None);
    assert_eq!(Color::from_hex("#zzz"), None);
}

#[test]
fn premultiply_rounds() {
    let p = Color::rgba(255, 128, 0, 128).to_premul();
    assert_eq!((p.r, p.g, p.b, p.a), (128, 64, 0, 128));
    assert_eq!(Color::rgba(10, 20, 30, 0).to_premul(), Rgba8Premul::transparent());
}

#[test]
fn display_omits_opaque_alpha() {
    assert_eq!(Color::rgb(0xb1, 0x0d, 0xc9).to_string(), "#b10dc9");
    assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
}
