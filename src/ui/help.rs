use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, DisplayMode};

use super::{ACCENT, DIM};

pub fn render_help(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = area.width.saturating_sub(6).clamp(40, 80);
    let height = area.height.saturating_sub(4).clamp(12, 26);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let popup = Rect::new(x, y, width.min(area.width), height.min(area.height));

    f.render_widget(Clear, popup);

    let mode = match app.display_mode {
        DisplayMode::Current => "current palette",
        DisplayMode::Favorites => "favorites",
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Commands", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  (showing: {})", mode), Style::default().fg(DIM)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Palette", Style::default().fg(ACCENT))),
        Line::from("  g/Space: generate  |  s: save  |  e: export  |  x: clear"),
        Line::from("  c/+ and -: color count  |  o: export format"),
        Line::from(""),
        Line::from(Span::styled("Cards", Style::default().fg(ACCENT))),
        Line::from("  h/l or arrows: select  |  f: like/unlike"),
        Line::from("  Enter/y: copy HEX  |  R: copy RGB  |  H: copy HSL"),
        Line::from("  Tab: current palette / favorites"),
        Line::from(""),
        Line::from(Span::styled("Saved Palettes", Style::default().fg(ACCENT))),
        Line::from("  p: focus history  |  j/k: move  |  Enter: load"),
        Line::from("  d: delete  |  D: clear all  |  1-9, 0: load by position"),
        Line::from(""),
        Line::from(Span::styled("Global", Style::default().fg(ACCENT))),
        Line::from("  Backspace: dismiss messages  |  ?: toggle help"),
        Line::from("  q/Esc: quit  |  Ctrl+C: quit"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Style::default().fg(DIM))),
    ];

    let max_body_lines = popup.height.saturating_sub(2) as usize;
    if lines.len() > max_body_lines {
        lines.truncate(max_body_lines);
    }

    let block = Block::default()
        .title(Span::styled(" Help ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(paragraph, popup);
}
