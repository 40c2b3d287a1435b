use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::clipboard::Clipboard;
use crate::color::Color;
use crate::config::{self, Settings};
use crate::generator;
use crate::notify::{NoticeKind, Notifications};
use crate::store::{self, KeyValueStore, LIKED_COLORS_KEY, SAVED_PALETTES_KEY};

/// Saved-palette history keeps at most this many entries.
pub const MAX_SAVED_PALETTES: usize = 10;

pub type Palette = Vec<Color>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Current,
    Favorites,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Current => DisplayMode::Favorites,
            DisplayMode::Favorites => DisplayMode::Current,
        }
    }
}

/// Which rendering of a color a copy action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFieldKind {
    Hex,
    Rgb,
    Hsl,
}

impl ColorFieldKind {
    pub const ALL: [ColorFieldKind; 3] = [ColorFieldKind::Hex, ColorFieldKind::Rgb, ColorFieldKind::Hsl];

    pub fn label(self) -> &'static str {
        match self {
            ColorFieldKind::Hex => "HEX",
            ColorFieldKind::Rgb => "RGB",
            ColorFieldKind::Hsl => "HSL",
        }
    }

    pub fn value(self, color: &Color) -> &str {
        match self {
            ColorFieldKind::Hex => &color.hex,
            ColorFieldKind::Rgb => &color.rgb,
            ColorFieldKind::Hsl => &color.hsl,
        }
    }
}

/// Which panel the selection keys move through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Cards,
    History,
}

pub enum BgMessage {
    PaletteGenerated { generation: u64, palette: Palette },
}

/// Owner of the palette, history and favorites. Every mutation goes through
/// one of the methods below and replaces whole collections.
pub struct App {
    palette: Palette,
    is_generating: bool,
    saved_palettes: Vec<Palette>,
    liked_colors: Vec<Color>,
    pub display_mode: DisplayMode,
    pub notifications: Notifications,
    pub settings: Settings,
    pub focus: Focus,
    pub selected: usize,
    pub history_cursor: usize,
    pub copied_card: Option<usize>,
    pub show_help: bool,
    pub should_quit: bool,
    latest_generation: u64,
    rng: StdRng,
    store: Box<dyn KeyValueStore>,
    clipboard: Box<dyn Clipboard>,
    bg_rx: mpsc::Receiver<BgMessage>,
    bg_tx: mpsc::Sender<BgMessage>,
}

impl App {
    /// Build the controller, reading persisted history and favorites once.
    /// `seed` makes every generation reproducible.
    pub fn new(
        settings: Settings,
        store: Box<dyn KeyValueStore>,
        clipboard: Box<dyn Clipboard>,
        seed: Option<u64>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();

        let mut saved_palettes: Vec<Palette> = store::load_or_default(&*store, SAVED_PALETTES_KEY);
        saved_palettes.truncate(MAX_SAVED_PALETTES);

        let mut liked_colors: Vec<Color> = store::load_or_default(&*store, LIKED_COLORS_KEY);
        dedup_by_hex(&mut liked_colors);

        info!(
            saved = saved_palettes.len(),
            liked = liked_colors.len(),
            "loaded persisted collections"
        );

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            palette: Vec::new(),
            is_generating: false,
            saved_palettes,
            liked_colors,
            display_mode: DisplayMode::Current,
            notifications: Notifications::new(),
            settings,
            focus: Focus::Cards,
            selected: 0,
            history_cursor: 0,
            copied_card: None,
            show_help: false,
            should_quit: false,
            latest_generation: 0,
            rng,
            store,
            clipboard,
            bg_rx: rx,
            bg_tx: tx,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn saved_palettes(&self) -> &[Palette] {
        &self.saved_palettes
    }

    pub fn liked_colors(&self) -> &[Color] {
        &self.liked_colors
    }

    /// The cards currently on screen.
    pub fn display_colors(&self) -> &[Color] {
        match self.display_mode {
            DisplayMode::Current => &self.palette,
            DisplayMode::Favorites => &self.liked_colors,
        }
    }

    pub fn selected_color(&self) -> Option<&Color> {
        self.display_colors().get(self.selected)
    }

    pub fn is_liked(&self, color: &Color) -> bool {
        self.liked_colors.iter().any(|c| c.hex == color.hex)
    }

    // -----------------------------------------------------------------------
    // Generation
    // -----------------------------------------------------------------------

    /// Start a generation with the configured count. The result lands after
    /// the pacing delay via `poll_background`. Callers disable the trigger
    /// while `is_generating()` is true; should two requests overlap anyway,
    /// only the newest result is applied.
    pub fn generate(&mut self) {
        self.latest_generation += 1;
        self.is_generating = true;

        let generation = self.latest_generation;
        let seed: u64 = self.rng.gen();
        let count = self.settings.palette_count;
        let delay = self.settings.generation_delay();
        let tx = self.bg_tx.clone();

        info!(generation, count, "generating palette");
        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let plan = generator::plan_palette(&mut StdRng::seed_from_u64(seed), count);
            debug!(generation, scheme = plan.scheme.label(), base_hue = plan.base_hue, "palette planned");
            let _ = tx.send(BgMessage::PaletteGenerated {
                generation,
                palette: plan.into_colors(),
            });
        });
    }

    /// Apply finished background work and expire notifications.
    pub fn poll_background(&mut self) {
        while let Ok(msg) = self.bg_rx.try_recv() {
            self.handle_message(msg);
        }
        self.expire_notifications(Instant::now());
    }

    fn handle_message(&mut self, msg: BgMessage) {
        match msg {
            BgMessage::PaletteGenerated { generation, palette } => {
                if generation != self.latest_generation {
                    debug!(generation, latest = self.latest_generation, "dropping stale palette");
                    return;
                }
                self.set_palette(palette);
                self.is_generating = false;
            }
        }
    }

    pub fn expire_notifications(&mut self, now: Instant) {
        self.notifications.expire(now);
        if self.notifications.get(NoticeKind::CopyFeedback).is_none() {
            self.copied_card = None;
        }
    }

    fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        if self.display_mode == DisplayMode::Current {
            self.clamp_selection();
        }
    }

    // -----------------------------------------------------------------------
    // Palette actions
    // -----------------------------------------------------------------------

    pub fn save_current(&mut self) {
        if self.palette.is_empty() {
            return;
        }
        let mut saved = Vec::with_capacity(MAX_SAVED_PALETTES);
        saved.push(self.palette.clone());
        saved.extend(self.saved_palettes.iter().take(MAX_SAVED_PALETTES - 1).cloned());
        self.saved_palettes = saved;
        self.persist_saved();
        info!(saved = self.saved_palettes.len(), "palette saved");
        self.notify("Palette saved!");
    }

    /// Show a saved palette. History is left untouched.
    pub fn load_saved(&mut self, index: usize) -> bool {
        let Some(saved) = self.saved_palettes.get(index).cloned() else {
            return false;
        };
        self.set_palette(saved);
        true
    }

    pub fn delete_saved(&mut self, index: usize) {
        if index >= self.saved_palettes.len() {
            return;
        }
        self.saved_palettes = self
            .saved_palettes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.clone())
            .collect();
        self.history_cursor = self.history_cursor.min(self.saved_palettes.len().saturating_sub(1));
        self.persist_saved();
        self.notify("Palette deleted!");
    }

    pub fn clear_saved(&mut self) {
        self.saved_palettes = Vec::new();
        self.history_cursor = 0;
        self.persist_saved();
        self.notify("All saved palettes cleared!");
    }

    /// Render the palette in the selected format and put it on the clipboard.
    pub fn export_current(&mut self) {
        if self.palette.is_empty() {
            return;
        }
        let format = self.settings.export_format;
        let text = format.render(&self.palette);
        if self.clipboard.copy(&text) {
            info!(format = format.name(), "palette exported");
            self.notify(format!("Palette exported as {}!", format.label()));
        } else {
            warn!(format = format.name(), "export could not reach the clipboard");
        }
    }

    pub fn clear_palette(&mut self) {
        self.set_palette(Vec::new());
        self.notify("Palette cleared!");
    }

    // -----------------------------------------------------------------------
    // Favorites
    // -----------------------------------------------------------------------

    /// Like `color`, or unlike it when a color with the same hex is liked.
    pub fn toggle_favorite(&mut self, color: &Color) {
        if self.is_liked(color) {
            self.liked_colors = self
                .liked_colors
                .iter()
                .filter(|c| c.hex != color.hex)
                .cloned()
                .collect();
            self.notify("Color removed from favorites");
        } else {
            let mut liked = Vec::with_capacity(self.liked_colors.len() + 1);
            liked.push(color.clone());
            liked.extend(self.liked_colors.iter().cloned());
            self.liked_colors = liked;
            self.notify("Color added to favorites");
        }
        if self.display_mode == DisplayMode::Favorites {
            self.clamp_selection();
        }
        self.persist_liked();
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(color) = self.selected_color().cloned() {
            self.toggle_favorite(&color);
        }
    }

    // -----------------------------------------------------------------------
    // View state
    // -----------------------------------------------------------------------

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggle();
        self.selected = 0;
        self.focus = Focus::Cards;
    }

    /// Copy one field of a displayed card. Feedback only follows a write the
    /// clipboard accepted.
    pub fn copy_field(&mut self, index: usize, field: ColorFieldKind) -> bool {
        let Some(value) = self.display_colors().get(index).map(|c| field.value(c).to_string()) else {
            return false;
        };
        if !self.clipboard.copy(&value) {
            warn!(field = field.label(), "copy could not reach the clipboard");
            return false;
        }
        let now = Instant::now();
        let ttl = self.settings.notification_ttl();
        let feedback_ttl = self.settings.copy_feedback_ttl();
        self.notifications
            .push(NoticeKind::Copy, format!("{} copied!", field.label()), ttl, now);
        self.notifications
            .push(NoticeKind::CopyFeedback, field.label(), feedback_ttl, now);
        self.copied_card = Some(index);
        true
    }

    pub fn copy_selected(&mut self, field: ColorFieldKind) -> bool {
        self.copy_field(self.selected, field)
    }

    pub fn cycle_count(&mut self, forward: bool) {
        self.settings.palette_count = if forward {
            config::next_count(self.settings.palette_count)
        } else {
            config::prev_count(self.settings.palette_count)
        };
    }

    pub fn cycle_format(&mut self) {
        self.settings.export_format = self.settings.export_format.next();
    }

    pub fn select_next(&mut self) {
        match self.focus {
            Focus::Cards => {
                let len = self.display_colors().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            Focus::History => {
                if !self.saved_palettes.is_empty() {
                    self.history_cursor = (self.history_cursor + 1).min(self.saved_palettes.len() - 1);
                }
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.focus {
            Focus::Cards => self.selected = self.selected.saturating_sub(1),
            Focus::History => self.history_cursor = self.history_cursor.saturating_sub(1),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Cards if !self.saved_palettes.is_empty() => Focus::History,
            _ => Focus::Cards,
        };
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.display_colors().len().saturating_sub(1));
    }

    // -----------------------------------------------------------------------
    // Side effects
    // -----------------------------------------------------------------------

    fn notify(&mut self, message: impl Into<String>) {
        let ttl = self.settings.notification_ttl();
        self.notifications
            .push(NoticeKind::General, message, ttl, Instant::now());
    }

    fn persist_saved(&mut self) {
        if let Err(e) = store::persist(&mut *self.store, SAVED_PALETTES_KEY, &self.saved_palettes) {
            warn!(error = %e, "failed to persist saved palettes");
        }
    }

    fn persist_liked(&mut self) {
        if let Err(e) = store::persist(&mut *self.store, LIKED_COLORS_KEY, &self.liked_colors) {
            warn!(error = %e, "failed to persist liked colors");
        }
    }
}

/// Keep the first occurrence of each hex.
fn dedup_by_hex(colors: &mut Vec<Color>) {
    let mut seen = std::collections::HashSet::new();
    colors.retain(|c| seen.insert(c.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::export::ExportFormat;
    use crate::store::{MemoryStore, StoreError};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.borrow().read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().write(key, value)
        }
    }

    #[derive(Clone)]
    struct SharedClipboard(Rc<RefCell<MemoryClipboard>>);

    impl Clipboard for SharedClipboard {
        fn copy(&mut self, text: &str) -> bool {
            self.0.borrow_mut().copy(text)
        }
    }

    fn instant_settings() -> Settings {
        Settings {
            generation_delay_ms: 0,
            ..Settings::default()
        }
    }

    fn app_with(store: SharedStore, clipboard: MemoryClipboard) -> (App, SharedClipboard) {
        let clipboard = SharedClipboard(Rc::new(RefCell::new(clipboard)));
        let app = App::new(
            instant_settings(),
            Box::new(store),
            Box::new(clipboard.clone()),
            Some(7),
        );
        (app, clipboard)
    }

    fn app() -> App {
        app_with(SharedStore::default(), MemoryClipboard::new()).0
    }

    fn palette(hexes: &[&str]) -> Palette {
        hexes.iter().map(|h| Color::from_hex(h).unwrap()).collect()
    }

    fn wait_for_generation(app: &mut App) {
        for _ in 0..400 {
            app.poll_background();
            if !app.is_generating() {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("generation did not finish");
    }

    #[test]
    fn generate_replaces_palette_with_configured_count() {
        let mut app = app();
        app.settings.palette_count = 3;
        app.generate();
        assert!(app.is_generating());
        wait_for_generation(&mut app);
        assert_eq!(app.palette().len(), 3);
    }

    #[test]
    fn generation_waits_for_the_pacing_delay() {
        let mut app = app();
        app.settings.generation_delay_ms = 500;
        app.generate();
        app.poll_background();
        assert!(app.is_generating());
        assert!(app.palette().is_empty());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let expected = {
            let mut rng = StdRng::seed_from_u64(7);
            let seed: u64 = rng.gen();
            generator::generate_harmonious_palette(&mut StdRng::seed_from_u64(seed), 5)
        };
        let mut app = app();
        app.generate();
        wait_for_generation(&mut app);
        assert_eq!(app.palette(), expected.as_slice());
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut app = app();
        app.latest_generation = 2;
        app.is_generating = true;

        app.bg_tx
            .send(BgMessage::PaletteGenerated {
                generation: 1,
                palette: palette(&["#111111"]),
            })
            .unwrap();
        app.poll_background();
        assert!(app.palette().is_empty());
        assert!(app.is_generating());

        app.bg_tx
            .send(BgMessage::PaletteGenerated {
                generation: 2,
                palette: palette(&["#222222"]),
            })
            .unwrap();
        app.poll_background();
        assert_eq!(app.palette()[0].hex, "#222222");
        assert!(!app.is_generating());
    }

    #[test]
    fn saving_empty_palette_is_a_no_op() {
        let mut app = app();
        app.save_current();
        assert!(app.saved_palettes().is_empty());
        assert!(app.notifications.get(NoticeKind::General).is_none());
    }

    #[test]
    fn history_keeps_ten_most_recent_first() {
        let mut app = app();
        for i in 0..11u8 {
            app.set_palette(palette(&[&format!("#0000{:02x}", i)]));
            app.save_current();
        }
        assert_eq!(app.saved_palettes().len(), 10);
        for (pos, saved) in app.saved_palettes().iter().enumerate() {
            assert_eq!(saved[0].hex, format!("#0000{:02x}", 10 - pos));
        }
        assert_eq!(app.notifications.get(NoticeKind::General), Some("Palette saved!"));
    }

    #[test]
    fn saved_entry_is_a_snapshot() {
        let mut app = app();
        app.set_palette(palette(&["#123456"]));
        app.save_current();
        app.clear_palette();
        assert!(app.palette().is_empty());
        assert_eq!(app.saved_palettes()[0][0].hex, "#123456");
        assert_eq!(app.notifications.get(NoticeKind::General), Some("Palette cleared!"));
    }

    #[test]
    fn load_keeps_history_and_delete_keeps_current() {
        let mut app = app();
        app.set_palette(palette(&["#aa0000", "#00aa00"]));
        app.save_current();
        app.set_palette(palette(&["#0000aa"]));
        app.save_current();

        assert!(app.load_saved(1));
        assert_eq!(app.palette()[0].hex, "#aa0000");
        assert_eq!(app.saved_palettes().len(), 2);

        app.delete_saved(1);
        assert_eq!(app.saved_palettes().len(), 1);
        assert_eq!(app.palette().len(), 2);
        assert_eq!(app.palette()[0].hex, "#aa0000");
        assert_eq!(app.notifications.get(NoticeKind::General), Some("Palette deleted!"));

        app.clear_saved();
        assert!(app.saved_palettes().is_empty());
        assert_eq!(app.palette().len(), 2);
        assert!(!app.load_saved(0));
    }

    #[test]
    fn delete_out_of_range_is_ignored() {
        let mut app = app();
        app.set_palette(palette(&["#aa0000"]));
        app.save_current();
        app.delete_saved(5);
        assert_eq!(app.saved_palettes().len(), 1);
    }

    #[test]
    fn liking_twice_toggles_off() {
        let mut app = app();
        let color = Color::from_hex("#336699").unwrap();
        app.toggle_favorite(&color);
        assert!(app.is_liked(&color));
        assert_eq!(app.notifications.get(NoticeKind::General), Some("Color added to favorites"));

        app.toggle_favorite(&color);
        assert!(!app.is_liked(&color));
        assert!(app.liked_colors().is_empty());
        assert_eq!(
            app.notifications.get(NoticeKind::General),
            Some("Color removed from favorites")
        );
    }

    #[test]
    fn favorites_match_on_hex_not_identity() {
        let mut app = app();
        let a = Color::from_hex("#336699").unwrap();
        let mut b = a.clone();
        b.name = "Something else".into();
        app.toggle_favorite(&a);
        app.toggle_favorite(&Color::from_hex("#000000").unwrap());
        app.toggle_favorite(&b);
        assert_eq!(app.liked_colors().len(), 1);
        assert_eq!(app.liked_colors()[0].hex, "#000000");
    }

    #[test]
    fn favorites_never_hold_duplicate_hex() {
        let mut app = app();
        let hexes = ["#010101", "#020202", "#010101", "#030303", "#020202", "#010101"];
        for hex in hexes {
            app.toggle_favorite(&Color::from_hex(hex).unwrap());
            let mut seen = std::collections::HashSet::new();
            assert!(app.liked_colors().iter().all(|c| seen.insert(c.hex.clone())));
        }
        let liked: Vec<&str> = app.liked_colors().iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(liked, ["#010101", "#030303"]);
    }

    #[test]
    fn collections_persist_and_reload() {
        let store = SharedStore::default();
        {
            let (mut app, _) = app_with(store.clone(), MemoryClipboard::new());
            app.set_palette(palette(&["#abcdef"]));
            app.save_current();
            app.toggle_favorite(&Color::from_hex("#fedcba").unwrap());
        }
        let (app, _) = app_with(store, MemoryClipboard::new());
        assert_eq!(app.saved_palettes().len(), 1);
        assert_eq!(app.saved_palettes()[0][0].hex, "#abcdef");
        assert_eq!(app.liked_colors()[0].hex, "#fedcba");
    }

    #[test]
    fn corrupt_persisted_state_starts_empty() {
        let store = SharedStore::default();
        store.0.borrow_mut().write(SAVED_PALETTES_KEY, "oops").unwrap();
        store.0.borrow_mut().write(LIKED_COLORS_KEY, "[1, 2]").unwrap();
        let (app, _) = app_with(store, MemoryClipboard::new());
        assert!(app.saved_palettes().is_empty());
        assert!(app.liked_colors().is_empty());
    }

    #[test]
    fn loaded_favorites_are_deduplicated() {
        let store = SharedStore::default();
        let dup = vec![
            Color::from_hex("#101010").unwrap(),
            Color::from_hex("#202020").unwrap(),
            Color::from_hex("#101010").unwrap(),
        ];
        store::persist(&mut store.clone(), LIKED_COLORS_KEY, &dup).unwrap();
        let (app, _) = app_with(store, MemoryClipboard::new());
        assert_eq!(app.liked_colors().len(), 2);
    }

    #[test]
    fn export_uses_selected_format() {
        let (mut app, clipboard) = app_with(SharedStore::default(), MemoryClipboard::new());
        app.set_palette(palette(&["#ff0000"]));
        app.settings.export_format = ExportFormat::Css;
        app.export_current();
        assert_eq!(clipboard.0.borrow().contents.as_deref(), Some("--color-1: #ff0000;"));
        assert_eq!(
            app.notifications.get(NoticeKind::General),
            Some("Palette exported as CSS!")
        );
    }

    #[test]
    fn export_of_empty_palette_is_a_no_op() {
        let (mut app, clipboard) = app_with(SharedStore::default(), MemoryClipboard::new());
        app.export_current();
        assert!(clipboard.0.borrow().contents.is_none());
        assert!(app.notifications.get(NoticeKind::General).is_none());
    }

    #[test]
    fn clipboard_failure_skips_notifications() {
        let (mut app, _) = app_with(SharedStore::default(), MemoryClipboard::unavailable());
        app.set_palette(palette(&["#ff0000"]));
        app.export_current();
        assert!(!app.copy_field(0, ColorFieldKind::Hex));
        assert!(app.notifications.is_empty());
        assert_eq!(app.copied_card, None);
    }

    #[test]
    fn copy_field_sets_toast_and_card_feedback() {
        let (mut app, clipboard) = app_with(SharedStore::default(), MemoryClipboard::new());
        app.set_palette(palette(&["#ff0000", "#00ff00"]));
        assert!(app.copy_field(1, ColorFieldKind::Rgb));
        assert_eq!(clipboard.0.borrow().contents.as_deref(), Some("rgb(0, 255, 0)"));
        assert_eq!(app.notifications.get(NoticeKind::Copy), Some("RGB copied!"));
        assert_eq!(app.copied_card, Some(1));

        let now = Instant::now();
        app.expire_notifications(now + Duration::from_millis(1600));
        assert_eq!(app.copied_card, None);
        assert!(app.notifications.get(NoticeKind::Copy).is_some());
        app.expire_notifications(now + Duration::from_millis(3100));
        assert!(app.notifications.get(NoticeKind::Copy).is_none());

        assert!(!app.copy_field(9, ColorFieldKind::Hex));
    }

    #[test]
    fn display_mode_toggle_leaves_data_alone() {
        let mut app = app();
        app.set_palette(palette(&["#ff0000", "#00ff00"]));
        app.toggle_favorite(&Color::from_hex("#0000ff").unwrap());

        assert_eq!(app.display_colors().len(), 2);
        app.toggle_display_mode();
        assert_eq!(app.display_mode, DisplayMode::Favorites);
        assert_eq!(app.display_colors().len(), 1);
        app.toggle_display_mode();
        assert_eq!(app.display_mode, DisplayMode::Current);
        assert_eq!(app.display_colors().len(), 2);
        assert_eq!(app.liked_colors().len(), 1);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app();
        app.set_palette(palette(&["#ff0000", "#00ff00", "#0000ff"]));
        for _ in 0..5 {
            app.select_next();
        }
        assert_eq!(app.selected, 2);
        app.set_palette(palette(&["#ff0000"]));
        assert_eq!(app.selected, 0);
        app.select_prev();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn count_and_format_selectors_cycle() {
        let mut app = app();
        app.cycle_count(true);
        assert_eq!(app.settings.palette_count, 10);
        app.cycle_count(true);
        assert_eq!(app.settings.palette_count, 1);
        app.cycle_count(false);
        assert_eq!(app.settings.palette_count, 10);
        app.cycle_format();
        assert_eq!(app.settings.export_format, ExportFormat::Css);
    }
}
