mod app;
mod cli;
mod clipboard;
mod color;
mod config;
mod export;
mod generator;
mod notify;
mod store;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use app::{App, ColorFieldKind, Focus};
use cli::{Cli, Commands, FavoritesAction, HistoryAction};
use clipboard::{MemoryClipboard, SystemClipboard};
use config::Settings;
use export::ExportFormat;
use notify::NoticeKind;
use store::JsonFileStore;

fn main() {
    let cli = Cli::parse();

    let mut settings = config::load_settings();
    if let Some(count) = cli.count {
        settings.palette_count = count as usize;
    }
    if let Some(ref format) = cli.format {
        settings.export_format = ExportFormat::from_name(&format.trim().to_ascii_lowercase());
    }
    if let Some(delay) = cli.delay_ms {
        settings.generation_delay_ms = delay;
    }
    let settings = settings.normalized();
    let data_dir = store::resolve_data_dir(settings.data_dir.as_deref());

    match cli.command {
        None => {
            init_tracing(Some(&data_dir));
            run_tui(settings, &data_dir, cli.seed);
        }
        Some(cmd) => {
            init_tracing(None);
            dispatch_command(cmd, settings, &data_dir, cli.seed);
        }
    }
}

/// Log to `<data dir>/palette-studio.log` while the TUI owns the screen,
/// otherwise to stderr. Filtered by `RUST_LOG`, default `info`.
fn init_tracing(log_dir: Option<&Path>) {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_dir {
        Some(dir) => {
            let file = fs::create_dir_all(dir).and_then(|_| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(dir.join("palette-studio.log"))
            });
            // Without a log file the TUI stays silent rather than writing over the screen.
            if let Ok(file) = file {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter())
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .try_init();
        }
    }
}

fn headless_app(settings: Settings, data_dir: &Path, seed: Option<u64>) -> App {
    App::new(
        settings,
        Box::new(JsonFileStore::new(data_dir)),
        Box::new(MemoryClipboard::new()),
        seed,
    )
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn inspect(hex: &str) -> Result<(), color::ColorError> {
    let name = color::name_color(hex)?;
    let brightness = color::classify_brightness(hex)?;
    let decorated = color::Color::from_hex(hex)?;
    println!("{}", decorated.hex);
    println!("  name        {}", name);
    println!("  rgb         {}", decorated.rgb);
    println!("  hsl         {}", decorated.hsl);
    println!(
        "  brightness  {:.3} ({} text reads best)",
        brightness,
        if decorated.is_light() { "dark" } else { "light" }
    );
    Ok(())
}

fn dispatch_command(cmd: Commands, settings: Settings, data_dir: &Path, seed: Option<u64>) {
    let format = settings.export_format;
    match cmd {
        Commands::Generate => {
            let mut rng = seeded_rng(seed);
            let palette = generator::generate_harmonious_palette(&mut rng, settings.palette_count);
            println!("{}", export::export_palette(&palette, format.name()));
        }
        Commands::Inspect { hex } => {
            let hex = hex.unwrap_or_else(|| generator::generate_random_color(&mut seeded_rng(seed)).hex);
            if let Err(e) = inspect(&hex) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::History { action } => {
            let mut app = headless_app(settings, data_dir, seed);
            match action {
                HistoryAction::List => {
                    let saved = app.saved_palettes();
                    if saved.is_empty() {
                        println!("No saved palettes yet. Save one from the TUI with 's'.");
                        return;
                    }
                    for (i, palette) in saved.iter().enumerate() {
                        println!("  {:>2}. {}", i + 1, ExportFormat::Hex.render(palette));
                    }
                }
                HistoryAction::Show { position } => {
                    match position.checked_sub(1).and_then(|i| app.saved_palettes().get(i)) {
                        Some(palette) => println!("{}", format.render(palette)),
                        None => {
                            eprintln!(
                                "Error: no saved palette at position {} ({} saved)",
                                position,
                                app.saved_palettes().len()
                            );
                            std::process::exit(1);
                        }
                    }
                }
                HistoryAction::Clear => {
                    let count = app.saved_palettes().len();
                    app.clear_saved();
                    println!("Cleared {} saved palette(s)", count);
                }
            }
        }
        Commands::Favorites { action } => match action {
            FavoritesAction::List => {
                let app = headless_app(settings, data_dir, seed);
                let liked = app.liked_colors();
                if liked.is_empty() {
                    println!("No favorite colors yet. Like one from the TUI with 'f'.");
                    return;
                }
                for color in liked {
                    println!("  {}  {:<14} {}", color.hex, color.name, color.rgb);
                }
            }
        },
    }
}

fn run_tui(settings: Settings, data_dir: &Path, seed: Option<u64>) {
    enable_raw_mode().expect("Failed to enable raw mode");
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).expect("Failed to enter alternate screen");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).expect("Failed to create terminal");

    let mut app = App::new(
        settings,
        Box::new(JsonFileStore::new(data_dir)),
        Box::new(SystemClipboard::new()),
        seed,
    );
    app.generate();

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().expect("Failed to disable raw mode");
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .expect("Failed to leave alternate screen");

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), io::Error> {
    loop {
        app.poll_background();

        terminal.draw(|f| {
            ui::render_palette_screen(f, app);
            if app.show_help {
                ui::render_help(f, app);
            }
        })?;

        // Poll with a timeout so finished generations and expiring
        // notifications show up without a keypress.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    app.should_quit = true;
                } else if app.show_help {
                    app.show_help = false;
                } else {
                    handle_input(app, key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            if app.focus == Focus::History {
                app.toggle_focus();
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        // The trigger is disabled while a generation is pending.
        KeyCode::Char('g') | KeyCode::Char(' ') => {
            if !app.is_generating() {
                app.generate();
            }
        }
        KeyCode::Char('s') => app.save_current(),
        KeyCode::Char('e') => app.export_current(),
        KeyCode::Char('x') => app.clear_palette(),
        KeyCode::Char('f') => app.toggle_selected_favorite(),
        KeyCode::Tab => app.toggle_display_mode(),
        KeyCode::Char('p') | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char('c') | KeyCode::Char('+') => {
            app.cycle_count(true);
            persist_selectors(app);
        }
        KeyCode::Char('-') => {
            app.cycle_count(false);
            persist_selectors(app);
        }
        KeyCode::Char('o') => {
            app.cycle_format();
            persist_selectors(app);
        }
        KeyCode::Char('y') => {
            app.copy_selected(ColorFieldKind::Hex);
        }
        KeyCode::Char('R') => {
            app.copy_selected(ColorFieldKind::Rgb);
        }
        KeyCode::Char('H') => {
            app.copy_selected(ColorFieldKind::Hsl);
        }
        KeyCode::Char('D') => app.clear_saved(),
        KeyCode::Backspace => {
            app.notifications.dismiss(NoticeKind::General);
            app.notifications.dismiss(NoticeKind::Copy);
        }
        KeyCode::Char(c @ '0'..='9') => {
            let position = if c == '0' { 10 } else { c as usize - '0' as usize };
            app.load_saved(position - 1);
        }
        KeyCode::Enter => match app.focus {
            Focus::Cards => {
                app.copy_selected(ColorFieldKind::Hex);
            }
            Focus::History => {
                app.load_saved(app.history_cursor);
            }
        },
        KeyCode::Char('d') if app.focus == Focus::History => app.delete_saved(app.history_cursor),
        KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Right | KeyCode::Down => app.select_next(),
        KeyCode::Char('h') | KeyCode::Char('k') | KeyCode::Left | KeyCode::Up => app.select_prev(),
        _ => {}
    }
}

/// Remember the count and format selectors without writing CLI overrides
/// back to the config file.
fn persist_selectors(app: &App) {
    let mut on_disk = config::load_settings();
    on_disk.palette_count = app.settings.palette_count;
    on_disk.export_format = app.settings.export_format;
    if let Err(e) = config::save_settings(&on_disk) {
        warn!(error = %e, "failed to save settings");
    }
}
