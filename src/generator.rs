use rand::Rng;

use crate::color::{Color, HslColor};

/// Rule relating the hues of every color in one palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyScheme {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
}

impl HarmonyScheme {
    pub const ALL: [HarmonyScheme; 5] = [
        HarmonyScheme::Monochromatic,
        HarmonyScheme::Analogous,
        HarmonyScheme::Complementary,
        HarmonyScheme::Triadic,
        HarmonyScheme::Tetradic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HarmonyScheme::Monochromatic => "monochromatic",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::Tetradic => "tetradic",
        }
    }
}

/// Saturation bounds applied to every swatch, whatever the scheme.
pub const SATURATION_BOUNDS: (f64, f64) = (50.0, 95.0);
/// Lightness bounds applied to every swatch, whatever the scheme.
pub const LIGHTNESS_BOUNDS: (f64, f64) = (20.0, 80.0);

/// The HSL value of swatch `index` in a palette built on `base_hue`.
///
/// `default_saturation` is the per-swatch random draw used by every scheme
/// except monochromatic, which derives saturation from the index.
pub fn swatch(scheme: HarmonyScheme, base_hue: f64, index: usize, default_saturation: f64) -> HslColor {
    let i = index as f64;
    let default_lightness = 30.0 + 15.0 * i;

    let (hue, saturation, lightness) = match scheme {
        HarmonyScheme::Monochromatic => (base_hue, 60.0 + 8.0 * i, 25.0 + 15.0 * i),
        HarmonyScheme::Analogous => (base_hue + 30.0 * i, default_saturation, default_lightness),
        HarmonyScheme::Complementary => {
            let offset = if index % 2 == 0 { 0.0 } else { 180.0 };
            (base_hue + offset, default_saturation, default_lightness)
        }
        HarmonyScheme::Triadic => (base_hue + 120.0 * i, default_saturation, default_lightness),
        HarmonyScheme::Tetradic => (base_hue + 90.0 * i, default_saturation, default_lightness),
    };

    HslColor::new(
        hue.rem_euclid(360.0),
        saturation.clamp(SATURATION_BOUNDS.0, SATURATION_BOUNDS.1),
        lightness.clamp(LIGHTNESS_BOUNDS.0, LIGHTNESS_BOUNDS.1),
    )
}

/// The undecorated outcome of one generation: the shared draws plus the
/// swatches they produced, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct PalettePlan {
    pub scheme: HarmonyScheme,
    pub base_hue: f64,
    pub swatches: Vec<HslColor>,
}

impl PalettePlan {
    pub fn into_colors(self) -> Vec<Color> {
        self.swatches.into_iter().map(Color::from_hsl).collect()
    }
}

/// Draw a base hue and one scheme, then lay out `count` swatches.
pub fn plan_palette<R: Rng + ?Sized>(rng: &mut R, count: usize) -> PalettePlan {
    let base_hue = rng.gen_range(0..360) as f64;
    let scheme = HarmonyScheme::ALL[rng.gen_range(0..HarmonyScheme::ALL.len())];

    let swatches = (0..count)
        .map(|i| {
            let default_saturation = rng.gen_range(70..90) as f64;
            swatch(scheme, base_hue, i, default_saturation)
        })
        .collect();

    PalettePlan {
        scheme,
        base_hue,
        swatches,
    }
}

/// Generate `count` colors sharing one harmony scheme. `count == 0` yields an
/// empty palette.
pub fn generate_harmonious_palette<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Color> {
    plan_palette(rng, count).into_colors()
}

/// A single vivid color: saturation 60..100, lightness 25..75.
pub fn generate_random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let hue = rng.gen_range(0..360) as f64;
    let saturation = rng.gen_range(60..100) as f64;
    let lightness = rng.gen_range(25..75) as f64;
    Color::from_hsl(HslColor::new(hue, saturation, lightness))
}
