use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};
use unicode_width::UnicodeWidthStr;

use crate::app::ColorFieldKind;
use crate::color::Color;

use super::{ACCENT, DIM};

const DARK_TEXT: TermColor = TermColor::Rgb(17, 24, 39);
const LIKED: TermColor = TermColor::Rgb(239, 68, 68);

/// Rows below the swatch: name plus one row per copyable field.
const INFO_ROWS: u16 = 1 + ColorFieldKind::ALL.len() as u16;

/// One color of the palette: a swatch with a contrast-aware badge, then the
/// color's name and values.
pub struct ColorCard<'a> {
    pub color: &'a Color,
    pub selected: bool,
    pub liked: bool,
    /// Label of the field just copied from this card, if any.
    pub copied: Option<&'a str>,
}

impl Widget for ColorCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected { ACCENT } else { DIM };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let swatch = self.color.to_ratatui_color();
        let text = if self.color.is_light() { DARK_TEXT } else { TermColor::White };
        let swatch_height = inner.height.saturating_sub(INFO_ROWS).max(1);

        for y in inner.y..inner.y + swatch_height {
            for x in inner.x..inner.right() {
                buf[(x, y)].set_style(Style::default().bg(swatch));
            }
        }

        // Badge row: hex on the left, heart on the right.
        let badge = Line::from(Span::styled(
            format!(" {} ", self.color.hex.to_uppercase()),
            Style::default().fg(text).bg(swatch).add_modifier(Modifier::BOLD),
        ));
        buf.set_line(inner.x, inner.y, &badge, inner.width);
        if self.liked && inner.width > 2 {
            let heart = Span::styled("\u{2665}", Style::default().fg(LIKED).bg(swatch));
            buf.set_span(inner.right() - 2, inner.y, &heart, 1);
        }

        if let Some(label) = self.copied {
            if swatch_height > 1 {
                let mark = Line::from(Span::styled(
                    format!(" \u{2713} {} copied", label),
                    Style::default().fg(text).bg(swatch),
                ));
                buf.set_line(inner.x, inner.y + 1, &mark, inner.width);
            }
        }

        let mut y = inner.y + swatch_height;
        let bottom = inner.y + inner.height;

        if y < bottom {
            let name = centered(&self.color.name, inner.width as usize);
            let line = Line::from(Span::styled(
                name,
                Style::default().fg(TermColor::White).add_modifier(Modifier::BOLD),
            ));
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }

        for field in ColorFieldKind::ALL {
            if y >= bottom {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!(" {:<4}", field.label()), Style::default().fg(DIM)),
                Span::styled(field.value(self.color).to_string(), Style::default().fg(TermColor::Gray)),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }
    }
}

fn centered(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
