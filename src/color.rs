use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure decoding a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// An sRGB triple with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical `#rrggbb` form, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS function syntax, e.g. `rgb(255, 0, 0)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Weighted luminance `0.299R + 0.587G + 0.114B`, normalized to [0, 1].
    pub fn brightness(self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    pub fn to_ratatui_color(self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

/// Decode `#rrggbb`, `rrggbb` or the `#rgb` shorthand (any case).
pub fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidColorFormat(input.to_string());
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

// ---------------------------------------------------------------------------
// HslColor
// ---------------------------------------------------------------------------

/// A color in the HSL space.
///
/// - `h`: hue in degrees, 0.0..360.0
/// - `s`: saturation as a percentage, 0.0..100.0
/// - `l`: lightness as a percentage, 0.0..100.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    /// Hue wraps modulo 360; saturation and lightness are clamped.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Round every component to the nearest integer.
    pub fn rounded(self) -> Self {
        Self {
            h: self.h.round(),
            s: self.s.round(),
            l: self.l.round(),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let channel = |t: f64| (hue_to_channel(p, q, t) * 255.0).round() as u8;

        Rgb::new(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self::new(sector * 60.0, s * 100.0, l * 100.0)
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        parse_hex(hex).map(Self::from_rgb)
    }

    /// CSS function syntax with integer components, e.g. `hsl(0, 100%, 50%)`.
    pub fn to_css(self) -> String {
        let r = self.rounded();
        format!("hsl({}, {}%, {}%)", r.h, r.s, r.l)
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

// ---------------------------------------------------------------------------
// Naming & brightness
// ---------------------------------------------------------------------------

/// Upper (exclusive) hue bound of each bucket. Hues at or past the last bound
/// are "Pink", except the red range wrapping back around at 345.
const HUE_BUCKETS: [(f64, &str); 11] = [
    (15.0, "Red"),
    (45.0, "Orange"),
    (75.0, "Yellow"),
    (105.0, "Yellow Green"),
    (135.0, "Green"),
    (165.0, "Blue Green"),
    (195.0, "Cyan"),
    (225.0, "Blue"),
    (255.0, "Blue Violet"),
    (285.0, "Violet"),
    (315.0, "Purple"),
];

const RED_WRAP: f64 = 345.0;

/// Coarse human label for an HSL triple.
pub fn name_for_hsl(hsl: HslColor) -> &'static str {
    if hsl.s < 10.0 {
        return if hsl.l > 90.0 {
            "White"
        } else if hsl.l < 10.0 {
            "Black"
        } else {
            "Gray"
        };
    }

    if hsl.h >= RED_WRAP {
        return "Red";
    }

    HUE_BUCKETS
        .iter()
        .find(|(limit, _)| hsl.h < *limit)
        .map(|(_, name)| *name)
        .unwrap_or("Pink")
}

/// Name a hex color by its integer-rounded HSL components.
pub fn name_color(hex: &str) -> Result<&'static str, ColorError> {
    HslColor::from_hex(hex).map(|hsl| name_for_hsl(hsl.rounded()))
}

pub fn classify_brightness(hex: &str) -> Result<f64, ColorError> {
    parse_hex(hex).map(Rgb::brightness)
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A decorated color value. Identity is the `hex` field alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub name: String,
    pub brightness: f64,
}

impl Color {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsl = HslColor::from_rgb(rgb).rounded();
        Self {
            hex: rgb.to_hex(),
            rgb: rgb.to_css(),
            hsl: hsl.to_css(),
            name: name_for_hsl(hsl).to_string(),
            brightness: rgb.brightness(),
        }
    }

    pub fn from_hsl(hsl: HslColor) -> Self {
        Self::from_rgb(hsl.to_rgb())
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        parse_hex(hex).map(Self::from_rgb)
    }

    /// Whether dark text reads better than light text on top of this color.
    pub fn is_light(&self) -> bool {
        self.brightness > 0.5
    }

    pub fn to_ratatui_color(&self) -> ratatui::style::Color {
        parse_hex(&self.hex)
            .map(Rgb::to_ratatui_color)
            .unwrap_or(ratatui::style::Color::Reset)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.hex == other.hex
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hex.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(h: f64, s: f64, l: f64) -> HslColor {
        HslColor { h, s, l }
    }

    #[test]
    fn brightness_extremes() {
        assert_eq!(classify_brightness("#ffffff").unwrap(), 1.0);
        assert_eq!(classify_brightness("#000000").unwrap(), 0.0);
    }

    #[test]
    fn brightness_weights_channels() {
        let red = classify_brightness("#ff0000").unwrap();
        assert!((red - 0.299).abs() < 1e-9);
        let green = classify_brightness("#00ff00").unwrap();
        assert!((green - 0.587).abs() < 1e-9);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["", "#", "#ff", "#fffff", "#gggggg", "zzzzzz", "#ff00ff00", "+fffff", "#ffé"] {
            assert_eq!(
                classify_brightness(bad),
                Err(ColorError::InvalidColorFormat(bad.to_string())),
                "{bad}"
            );
        }
        assert!(name_color("nope").is_err());
        assert!(Color::from_hex("#12345").is_err());
    }

    #[test]
    fn parse_accepts_shorthand_and_case() {
        assert_eq!(parse_hex("#FFF").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(parse_hex("AbCdEf").unwrap(), Rgb::new(0xab, 0xcd, 0xef));
        assert_eq!(Color::from_hex("#F00").unwrap().hex, "#ff0000");
    }

    #[test]
    fn red_wraps_across_zero() {
        assert_eq!(name_for_hsl(hsl(345.0, 50.0, 50.0)), "Red");
        assert_eq!(name_for_hsl(hsl(344.99, 50.0, 50.0)), "Pink");
        assert_eq!(name_for_hsl(hsl(0.0, 50.0, 50.0)), "Red");
        assert_eq!(name_for_hsl(hsl(14.99, 50.0, 50.0)), "Red");
    }

    #[test]
    fn hue_buckets_are_half_open_on_the_low_end() {
        let cases = [
            (15.0, "Orange"),
            (44.9, "Orange"),
            (45.0, "Yellow"),
            (75.0, "Yellow Green"),
            (105.0, "Green"),
            (135.0, "Blue Green"),
            (165.0, "Cyan"),
            (195.0, "Blue"),
            (225.0, "Blue Violet"),
            (255.0, "Violet"),
            (285.0, "Purple"),
            (315.0, "Pink"),
        ];
        for (h, expected) in cases {
            assert_eq!(name_for_hsl(hsl(h, 80.0, 50.0)), expected, "hue {h}");
        }
    }

    #[test]
    fn low_saturation_ignores_hue() {
        for h in [0.0, 120.0, 350.0] {
            assert_eq!(name_for_hsl(hsl(h, 9.0, 95.0)), "White");
            assert_eq!(name_for_hsl(hsl(h, 9.0, 5.0)), "Black");
            assert_eq!(name_for_hsl(hsl(h, 9.0, 50.0)), "Gray");
        }
    }

    #[test]
    fn name_color_from_hex() {
        assert_eq!(name_color("#ff0000").unwrap(), "Red");
        assert_eq!(name_color("#0000ff").unwrap(), "Blue Violet");
        assert_eq!(name_color("#ffffff").unwrap(), "White");
        assert_eq!(name_color("#808080").unwrap(), "Gray");
    }

    #[test]
    fn color_from_hsl_decorates_every_field() {
        let c = Color::from_hsl(HslColor::new(0.0, 100.0, 50.0));
        assert_eq!(c.hex, "#ff0000");
        assert_eq!(c.rgb, "rgb(255, 0, 0)");
        assert_eq!(c.hsl, "hsl(0, 100%, 50%)");
        assert_eq!(c.name, "Red");
        assert!((c.brightness - 0.299).abs() < 1e-9);
        assert!(!c.is_light());
    }

    #[test]
    fn hsl_rgb_conversions() {
        assert_eq!(HslColor::new(120.0, 100.0, 50.0).to_rgb().to_hex(), "#00ff00");
        assert_eq!(HslColor::new(0.0, 0.0, 50.0).to_rgb(), Rgb::new(128, 128, 128));

        let back = HslColor::from_hex("#0000ff").unwrap();
        assert!((back.h - 240.0).abs() < 1e-9);
        assert!((back.s - 100.0).abs() < 1e-9);
        assert!((back.l - 50.0).abs() < 1e-9);
    }

    #[test]
    fn hsl_new_wraps_and_clamps() {
        let c = HslColor::new(-30.0, 150.0, -10.0);
        assert!((c.h - 330.0).abs() < 1e-9);
        assert_eq!(c.s, 100.0);
        assert_eq!(c.l, 0.0);
    }

    #[test]
    fn equality_is_by_hex_only() {
        let a = Color::from_hex("#112233").unwrap();
        let mut b = a.clone();
        b.name = "Renamed".into();
        b.brightness = 0.9;
        assert_eq!(a, b);
        assert_ne!(a, Color::from_hex("#112234").unwrap());
    }

    #[test]
    fn hashing_follows_hex() {
        let a = Color::from_hex("#112233").unwrap();
        let mut b = a.clone();
        b.name = "Renamed".into();
        let set: std::collections::HashSet<Color> = [a, b, Color::from_hex("#445566").unwrap()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_all_fields() {
        let c = Color::from_hex("#00ff00").unwrap();
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["hex"], "#00ff00");
        assert_eq!(v["rgb"], "rgb(0, 255, 0)");
        assert_eq!(v["hsl"], "hsl(120, 100%, 50%)");
        assert_eq!(v["name"], "Green");
        let back: Color = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
    }
}
