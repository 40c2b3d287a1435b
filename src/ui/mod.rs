mod card;
mod help;
mod palette;

use ratatui::style::Color;

const ACCENT: Color = Color::Rgb(187, 154, 247);
const DIM: Color = Color::Rgb(120, 120, 140);

pub use help::render_help;
pub use palette::render_palette_screen;
