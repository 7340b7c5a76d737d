use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8Premul;

/// Straight-alpha color with normalized channels, as written in deck files.
///
/// Accepts `"#RRGGBB"`, `"#RRGGBBAA"`, `{r,g,b[,a]}`, `{h,s,l[,a]}` (hue in
/// degrees) and `[r,g,b[,a]]`. Serializes back to a hex string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        let a = to_u8(self.a);
        Rgba8Premul::from_straight_rgba(to_u8(self.r), to_u8(self.g), to_u8(self.b), a)
    }

    pub fn to_hex(self) -> String {
        let (r, g, b, a) = (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Rgba {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "opaque")]
                a: f64,
            },
            Hsla {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "opaque")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn opaque() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Rgba { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Hsla { h, s, l, a } => Ok(hsla(h, s, l, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must be [r,g,b] or [r,g,b,a]",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
        return Err(format!(
            "invalid color \"{s}\": expected #RRGGBB or #RRGGBBAA"
        ));
    }

    let channel = |i: usize| -> Result<f64, String> {
        let pair = &digits[i..i + 2];
        u8::from_str_radix(pair, 16)
            .map(|v| f64::from(v) / 255.0)
            .map_err(|_| format!("invalid hex byte \"{pair}\" in color \"{s}\""))
    };

    let a = if digits.len() == 8 { channel(6)? } else { 1.0 };
    Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
}

fn hsla(h: f64, s: f64, l: f64, a: f64) -> Color {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Color::rgba(l, l, l, a);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f64| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    Color::rgba(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0), a)
}
