use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{App, DisplayMode, Focus};
use crate::notify::NoticeKind;
use crate::ui::card::ColorCard;

use super::{ACCENT, DIM};

const SUCCESS: Color = Color::Rgb(130, 200, 130);
const CARD_MIN_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 11;
/// Saved palettes listed at once; the rest are summarized.
const HISTORY_VISIBLE: usize = 3;

pub fn render_palette_screen(f: &mut Frame, app: &App) {
    let size = f.area();
    let show_history = app.display_mode == DisplayMode::Current && !app.saved_palettes().is_empty();
    let history_height = if show_history {
        app.saved_palettes().len().min(HISTORY_VISIBLE) as u16 + 3
    } else {
        0
    };

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),              // title
            Constraint::Length(3),              // controls + tabs
            Constraint::Min(5),                 // cards
            Constraint::Length(history_height), // saved palettes
            Constraint::Length(1),              // status bar
        ])
        .split(size);

    render_header(f, outer[0]);
    render_controls(f, app, outer[1]);
    render_cards(f, app, outer[2]);
    if show_history {
        render_history(f, app, outer[3]);
    }
    render_bottom_bar(f, app, outer[4]);

    if let Some(msg) = app.notifications.get(NoticeKind::Copy) {
        render_toast(f, msg, size);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" palette", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(".studio", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled("  harmonious colors, one keypress away", Style::default().fg(DIM)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

fn render_controls(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(40)])
        .split(area);

    let generate = if app.is_generating() {
        Span::styled(" \u{21bb} Generating... ", Style::default().fg(DIM))
    } else {
        Span::styled(
            " [g] Generate New Palette ",
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };
    let controls = Paragraph::new(Line::from(vec![
        generate,
        Span::styled("  Colors: ", Style::default().fg(DIM)),
        Span::styled(app.settings.palette_count.to_string(), Style::default().fg(ACCENT)),
        Span::styled("  Format: ", Style::default().fg(DIM)),
        Span::styled(app.settings.export_format.label(), Style::default().fg(ACCENT)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(controls, chunks[0]);

    let tab = |label: String, active: bool| {
        if active {
            Span::styled(label, Style::default().fg(Color::Black).bg(Color::White))
        } else {
            Span::styled(label, Style::default().fg(Color::Gray))
        }
    };
    let tabs = Paragraph::new(Line::from(vec![
        tab(" Current Palette ".to_string(), app.display_mode == DisplayMode::Current),
        Span::raw(" "),
        tab(
            format!(" \u{2665} Favorites ({}) ", app.liked_colors().len()),
            app.display_mode == DisplayMode::Favorites,
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(tabs, chunks[1]);
}

fn render_cards(f: &mut Frame, app: &App, area: Rect) {
    let colors = app.display_colors();

    if colors.is_empty() {
        let message = match app.display_mode {
            DisplayMode::Favorites => "  No favorite colors yet! Like some colors to see them here.",
            DisplayMode::Current if app.is_generating() => "  Mixing colors...",
            DisplayMode::Current => "  Press 'g' to create beautiful colors!",
        };
        f.render_widget(Paragraph::new(Span::styled(message, Style::default().fg(DIM))), area);
        return;
    }

    let columns = (area.width / CARD_MIN_WIDTH).clamp(1, colors.len() as u16);
    let rows_visible = (area.height / CARD_HEIGHT).max(1);
    let selected_row = app.selected as u16 / columns;
    let first_row = selected_row.saturating_sub(rows_visible - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows_visible).map(|_| Constraint::Length(CARD_HEIGHT)))
        .split(area);

    let copied = app.notifications.get(NoticeKind::CopyFeedback);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let row = first_row as usize + row_offset;
        let start = row * columns as usize;
        if start >= colors.len() {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = start + col;
            let Some(color) = colors.get(index) else {
                break;
            };
            f.render_widget(
                ColorCard {
                    color,
                    selected: app.focus == Focus::Cards && index == app.selected,
                    liked: app.is_liked(color),
                    copied: copied.filter(|_| app.copied_card == Some(index)),
                },
                *cell,
            );
        }
    }
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let saved = app.saved_palettes();
    let focused = app.focus == Focus::History;
    let first = app.history_cursor.saturating_sub(HISTORY_VISIBLE - 1);

    let mut lines: Vec<Line> = saved
        .iter()
        .enumerate()
        .skip(first)
        .take(HISTORY_VISIBLE)
        .map(|(i, palette)| {
            let is_cursor = focused && i == app.history_cursor;
            let mut spans = vec![Span::styled(
                format!(" {} {:>2}. ", if is_cursor { ">" } else { " " }, i + 1),
                Style::default().fg(if is_cursor { ACCENT } else { DIM }),
            )];
            for color in palette {
                spans.push(Span::styled("   ", Style::default().bg(color.to_ratatui_color())));
                spans.push(Span::raw(" "));
            }
            if is_cursor {
                spans.push(Span::styled(" Enter to load, d to delete", Style::default().fg(DIM)));
            }
            Line::from(spans)
        })
        .collect();

    if saved.len() > HISTORY_VISIBLE {
        lines.push(Line::from(Span::styled(
            format!("   +{} more palettes saved", saved.len() - HISTORY_VISIBLE),
            Style::default().fg(DIM),
        )));
    }

    let border = if focused { ACCENT } else { DIM };
    let block = Block::default()
        .title(Span::styled(" Saved Palettes ", Style::default().fg(ACCENT)))
        .title_bottom(Span::styled(" D: clear all ", Style::default().fg(DIM)))
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(border));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(msg) = app.notifications.get(NoticeKind::General) {
        spans.push(Span::styled(format!(" {} ", msg), Style::default().fg(SUCCESS)));
    } else {
        let has_palette = !app.palette().is_empty();
        let palette_hints = [("s", "save"), ("e", "export"), ("x", "clear")];
        let hints = [("g", "generate")]
            .into_iter()
            .chain(palette_hints.into_iter().filter(|_| has_palette))
            .chain([
                ("f", "like"),
                ("y/R/H", "copy"),
                ("Tab", "favorites"),
                ("p", "history"),
                ("c", "count"),
                ("o", "format"),
                ("?", "help"),
                ("q", "quit"),
            ]);
        for (key, desc) in hints {
            spans.push(Span::styled(format!(" {} ", key), Style::default().fg(ACCENT)));
            spans.push(Span::styled(format!("{} ", desc), Style::default().fg(DIM)));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_toast(f: &mut Frame, message: &str, area: Rect) {
    let width = (message.len() as u16 + 8).min(area.width);
    let height = 3u16.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height + 2);
    let popup = Rect::new(x, y, width, height);

    f.render_widget(Clear, popup);
    let toast = Paragraph::new(Line::from(vec![
        Span::styled(" \u{2713} ", Style::default().fg(SUCCESS)),
        Span::styled(message, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SUCCESS)),
    );
    f.render_widget(toast, popup);
}
