use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses a color name or hex literal.
    ///
    /// Accepts single-letter base colors, `tab:` palette names, common CSS
    /// names (case-insensitive) and `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse(value: &str) -> ChartResult<Self> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| {
                ChartError::Schema(format!("invalid hex color '{value}'"))
            });
        }

        // Single letters are case-sensitive shorthands.
        if let Some(color) = lookup(BASE_COLORS, trimmed) {
            return Ok(color);
        }
        let lowered = trimmed.to_ascii_lowercase();
        lookup(TAB_COLORS, &lowered)
            .or_else(|| lookup(NAMED_COLORS, &lowered))
            .ok_or_else(|| ChartError::Schema(format!("unknown color '{value}'")))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn lookup(table: &[(&str, u32)], name: &str) -> Option<Color> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, rgb)| from_rgb24(rgb))
}

fn from_rgb24(rgb: u32) -> Color {
    let channel = |shift: u32| f64::from((rgb >> shift) & 0xff) / 255.0;
    Color::rgb(channel(16), channel(8), channel(0))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let pair = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
    let unit = |value: u8| f64::from(value) / 255.0;

    match hex.len() {
        3 => Some(Color::rgb(
            unit(digit(0)? * 17),
            unit(digit(1)? * 17),
            unit(digit(2)? * 17),
        )),
        6 => Some(Color::rgb(unit(pair(0)?), unit(pair(2)?), unit(pair(4)?))),
        8 => Some(Color::rgba(
            unit(pair(0)?),
            unit(pair(2)?),
            unit(pair(4)?),
            unit(pair(6)?),
        )),
        _ => None,
    }
}

const BASE_COLORS: &[(&str, u32)] = &[
    ("b", 0x0000ff),
    ("g", 0x008000),
    ("r", 0xff0000),
    ("c", 0x00bfbf),
    ("m", 0xbf00bf),
    ("y", 0xbfbf00),
    ("k", 0x000000),
    ("w", 0xffffff),
];

const TAB_COLORS: &[(&str, u32)] = &[
    ("tab:blue", 0x1f77b4),
    ("tab:orange", 0xff7f0e),
    ("tab:green", 0x2ca02c),
    ("tab:red", 0xd62728),
    ("tab:purple", 0x9467bd),
    ("tab:brown", 0x8c564b),
    ("tab:pink", 0xe377c2),
    ("tab:gray", 0x7f7f7f),
    ("tab:grey", 0x7f7f7f),
    ("tab:olive", 0xbcbd22),
    ("tab:cyan", 0x17becf),
];

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("cyan", 0x00ffff),
    ("aqua", 0x00ffff),
    ("magenta", 0xff00ff),
    ("fuchsia", 0xff00ff),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("pink", 0xffc0cb),
    ("brown", 0xa52a2a),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("lightgray", 0xd3d3d3),
    ("lightgrey", 0xd3d3d3),
    ("darkgray", 0xa9a9a9),
    ("darkgrey", 0xa9a9a9),
    ("silver", 0xc0c0c0),
    ("navy", 0x000080),
    ("teal", 0x008080),
    ("olive", 0x808000),
    ("maroon", 0x800000),
    ("lime", 0x00ff00),
    ("gold", 0xffd700),
    ("indigo", 0x4b0082),
    ("violet", 0xee82ee),
    ("orchid", 0xda70d6),
    ("salmon", 0xfa8072),
    ("coral", 0xff7f50),
    ("crimson", 0xdc143c),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("skyblue", 0x87ceeb),
    ("lightblue", 0xadd8e6),
    ("darkblue", 0x00008b),
    ("lightgreen", 0x90ee90),
    ("darkgreen", 0x006400),
    ("darkred", 0x8b0000),
    ("darkorange", 0xff8c00),
    ("khaki", 0xf0e68c),
    ("beige", 0xf5f5dc),
    ("tan", 0xd2b48c),
    ("chocolate", 0xd2691e),
];
