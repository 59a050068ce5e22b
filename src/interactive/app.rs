//! TUI application state and logic

use crate::core::{BoardConfig, BoardError};
use crate::game::{ColorGame, GameConfig, TileKind};
use crate::maps::DEFAULT_MAPS;
use crate::wordlists::RandomWords;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Settings that stay fixed across games in one session
#[derive(Debug, Clone)]
pub struct PlaySettings {
    /// Fixed color count, or `None` to draw one per game
    pub color_count: Option<usize>,
    pub max_attempts: usize,
}

/// Application state
pub struct App {
    pub game: ColorGame<StdRng>,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    settings: PlaySettings,
    words: Vec<String>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub maps_found: usize,
    pub maps_eliminated: usize,
}

fn build_game(
    settings: &PlaySettings,
    words: &[String],
    rng: &mut StdRng,
) -> Result<ColorGame<StdRng>, BoardError> {
    let board = settings
        .color_count
        .map_or_else(|| BoardConfig::with_random_color_count(rng), BoardConfig::new)
        .max_attempts(settings.max_attempts);
    let mut source = RandomWords::new(words.to_vec(), StdRng::from_rng(rng))?;
    ColorGame::new(
        &GameConfig::new(board),
        DEFAULT_MAPS,
        &mut source,
        StdRng::from_rng(rng),
    )
}

impl App {
    /// Start a session with its first game
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the first game cannot be generated.
    pub fn new(
        settings: PlaySettings,
        words: Vec<String>,
        mut rng: StdRng,
    ) -> Result<Self, BoardError> {
        let game = build_game(&settings, &words, &mut rng)?;

        let mut app = Self {
            game,
            cursor: 0,
            messages: Vec::new(),
            stats: Statistics {
                total_games: 1,
                ..Statistics::default()
            },
            should_quit: false,
            settings,
            words,
            rng,
        };
        app.add_message(
            "Welcome! Flip the map named under FIND. Any other map you flip is eliminated.",
            MessageStyle::Info,
        );
        app.add_message(
            "Dots show which colors a hidden tile's letters belong to.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn new_game(&mut self) {
        match build_game(&self.settings, &self.words, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.cursor = 0;
                self.stats.total_games += 1;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
                info!("new game with {} colors", self.game.board().colors().len());
            }
            Err(err) => self.add_message(
                &format!("Could not start a game: {err}"),
                MessageStyle::Error,
            ),
        }
    }

    /// Move the cursor one tile, stopping at the grid edges
    pub fn move_cursor(&mut self, direction: Move) {
        let (cols, _) = self.game.grid();
        let len = self.game.tiles().len();
        if len == 0 || cols == 0 {
            return;
        }

        let (row, col) = (self.cursor / cols, self.cursor % cols);
        let next = match direction {
            Move::Up if row > 0 => self.cursor - cols,
            Move::Down => self.cursor + cols,
            Move::Left if col > 0 => self.cursor - 1,
            Move::Right if col + 1 < cols => self.cursor + 1,
            _ => self.cursor,
        };
        if next < len {
            self.cursor = next;
        }
    }

    /// Flip the tile under the cursor
    pub fn reveal_selected(&mut self) {
        let Some(outcome) = self.game.reveal(self.cursor) else {
            self.add_message("That tile is already flipped.", MessageStyle::Error);
            return;
        };

        let word = self.game.tiles()[outcome.index].word.clone();
        match (outcome.kind, outcome.eliminated) {
            (TileKind::Map, true) => {
                self.stats.maps_eliminated += 1;
                self.add_message(&format!("{word} is eliminated!"), MessageStyle::Error);
            }
            (TileKind::Map, false) => {
                self.stats.maps_found += 1;
                self.add_message(&format!("Found {word}!"), MessageStyle::Success);
            }
            (TileKind::Helper, _) if outcome.newly_revealed.is_empty() => {
                self.add_message(&format!("{word}: no new letters"), MessageStyle::Info);
            }
            (TileKind::Helper, _) => {
                self.add_message(
                    &format!("{word}: revealed {}", outcome.newly_revealed),
                    MessageStyle::Info,
                );
            }
        }

        if self.game.is_finished() {
            self.add_message(
                "Every map is face up! Press 'n' for new game or 'q' to quit.",
                MessageStyle::Success,
            );
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Move::Up),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Move::Down),
                KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Move::Left),
                KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Move::Right),
                KeyCode::Enter | KeyCode::Char(' ') => app.reveal_selected(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
