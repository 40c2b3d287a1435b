use serde::{Deserialize, Deserializer, Serialize};

use crate::color::Color;

/// Text renderings a palette can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Hex,
    Css,
    Scss,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Hex,
        ExportFormat::Css,
        ExportFormat::Scss,
        ExportFormat::Json,
    ];

    /// Resolve a selector value. Names are matched exactly; anything else,
    /// including other casings, falls back to `Hex`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "css" => ExportFormat::Css,
            "scss" => ExportFormat::Scss,
            "json" => ExportFormat::Json,
            _ => ExportFormat::Hex,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Hex => "hex",
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Hex => "HEX",
            ExportFormat::Css => "CSS",
            ExportFormat::Scss => "SCSS",
            ExportFormat::Json => "JSON",
        }
    }

    /// The next format in selector order, wrapping.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn render(self, palette: &[Color]) -> String {
        match self {
            ExportFormat::Css => variable_lines(palette, "--color-"),
            ExportFormat::Scss => variable_lines(palette, "$color-"),
            ExportFormat::Json => render_json(palette),
            ExportFormat::Hex => palette
                .iter()
                .map(|c| c.hex.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Unknown names in a config file read as `Hex` instead of failing the load.
impl<'de> Deserialize<'de> for ExportFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Render `palette` in the format named by `format` (unknown names render as
/// a comma-separated hex list).
pub fn export_palette(palette: &[Color], format: &str) -> String {
    ExportFormat::from_name(format).render(palette)
}

fn variable_lines(palette: &[Color], prefix: &str) -> String {
    palette
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}{}: {};", prefix, i + 1, c.hex))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct ExportedColor<'a> {
    hex: &'a str,
    rgb: &'a str,
    hsl: &'a str,
}

fn render_json(palette: &[Color]) -> String {
    let entries: Vec<ExportedColor> = palette
        .iter()
        .map(|c| ExportedColor {
            hex: &c.hex,
            rgb: &c.rgb,
            hsl: &c.hsl,
        })
        .collect();
    // Serializing borrowed strings into a Vec cannot fail.
    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
}
