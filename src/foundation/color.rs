use std::fmt;

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("gray", [0xaa, 0xaa, 0xaa]),
    ("silver", [0xdd, 0xdd, 0xdd]),
    ("white", [0xff, 0xff, 0xff]),
    ("navy", [0x00, 0x1f, 0x3f]),
    ("blue", [0x00, 0x74, 0xd9]),
    ("aqua", [0x7f, 0xdb, 0xff]),
    ("teal", [0x39, 0xcc, 0xcc]),
    ("eastern", [0x23, 0x9d, 0xad]),
    ("purple", [0xb1, 0x0d, 0xc9]),
    ("fuchsia", [0xf0, 0x12, 0xbe]),
    ("maroon", [0x85, 0x14, 0x4b]),
    ("red", [0xff, 0x41, 0x36]),
    ("orange", [0xff, 0x85, 0x1b]),
    ("yellow", [0xff, 0xdc, 0x00]),
    ("olive", [0x3d, 0x99, 0x70]),
    ("green", [0x2e, 0xcc, 0x40]),
    ("lime", [0x01, 0xff, 0x70]),
];

impl Color {
    /// Opaque black, the default stroke paint.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from channels with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray level.
    pub const fn luma(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Look up a palette color by name.
    pub fn named(name: &str) -> Option<Self> {
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, [r, g, b])| Self::rgb(r, g, b))
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Premultiply for compositing.
    pub fn to_premul(self) -> Rgba8Premul {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Rgba8Premul {
            r: premul(self.r, self.a),
            g: premul(self.g, self.a),
            b: premul(self.b, self.a),
            a: self.a,
        }
    }

    /// Channels as an array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
