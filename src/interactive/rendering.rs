//! TUI rendering with ratatui
//!
//! Tile grid, color legend and the FIND prompt.

use super::app::{App, MessageStyle};
use crate::core::{ColorLetterBoard, Rgb};
use crate::game::Tile;
use crate::output::formatters::letter_display;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const fn tui_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Tile grid
            Constraint::Percentage(35), // Prompt, colors, messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("COLOR TILES - Find the Map")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Word with every letter drawn in the color that owns it
fn word_line<'a>(word: &'a str, board: &ColorLetterBoard, style: Style) -> Line<'a> {
    let spans: Vec<Span> = word
        .chars()
        .map(|c| {
            let letter_style = board
                .owner_of(c)
                .map_or(style, |owner| style.fg(tui_color(owner.rgb())));
            Span::styled(c.to_string(), letter_style)
        })
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

/// One dot per color owning a letter of the hidden word
fn dots_line(tile: &Tile, board: &ColorLetterBoard) -> Line<'static> {
    let spans: Vec<Span> = tile
        .colors
        .iter()
        .filter_map(|&i| board.colors().get(i))
        .map(|color| Span::styled("● ", Style::default().fg(tui_color(color.rgb()))))
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

fn render_tile(f: &mut Frame, app: &App, index: usize, area: Rect) {
    let tile = &app.game.tiles()[index];
    let board = app.game.board();

    let (content, border) = if !tile.revealed {
        (vec![Line::from(""), dots_line(tile, board)], Color::Gray)
    } else if tile.eliminated {
        let style = Style::default().add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
        (
            vec![Line::from(""), word_line(&tile.word, board, style)],
            Color::Red,
        )
    } else if tile.is_found() {
        let style = Style::default().add_modifier(Modifier::BOLD);
        (
            vec![Line::from(""), word_line(&tile.word, board, style)],
            Color::Green,
        )
    } else {
        (
            vec![Line::from(""), word_line(&tile.word, board, Style::default())],
            Color::DarkGray,
        )
    };

    let (border_type, border) = if index == app.cursor {
        (BorderType::Double, Color::Yellow)
    } else {
        (BorderType::Rounded, border)
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .style(Style::default().fg(border)),
    );
    f.render_widget(paragraph, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let (cols, rows) = app.game.grid();
    if cols == 0 || rows == 0 {
        return;
    }

    let block = Block::default()
        .title(" Tiles ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * cols + col;
            if index < app.game.tiles().len() {
                render_tile(f, app, index, *cell);
            }
        }
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let color_rows = app.game.board().colors().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),          // Prompt
            Constraint::Length(color_rows), // Colors
            Constraint::Length(3),          // Progress
            Constraint::Min(3),             // Messages
        ])
        .split(area);

    render_prompt(f, app, chunks[0]);
    render_colors(f, app, chunks[1]);
    render_progress(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let content = match app.game.target() {
        Some(target) => vec![
            Line::from(vec![Span::raw("FIND: "), Span::styled(target.to_string(), highlight)]),
            Line::from(format!(
                "Next: {}",
                app.game.next_target().unwrap_or("-")
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Every map is face up!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Prompt ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_colors(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .board()
        .colors()
        .iter()
        .map(|color| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(tui_color(color.rgb()))),
                Span::raw(letter_display(color)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let revealed = app.game.revealed_letters().len();
    let percent = (revealed * 100 / 26) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{revealed}/26 letters revealed"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let games = Paragraph::new(format!("Games: {}", app.stats.total_games))
        .alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let maps = Paragraph::new(format!(
        "Found: {} | Eliminated: {}",
        app.stats.maps_found, app.stats.maps_eliminated
    ))
    .alignment(Alignment::Center);
    f.render_widget(maps, chunks[1]);

    let help_text = if app.game.is_finished() {
        "q: Quit | n: New Game"
    } else {
        "Arrows/hjkl: Move | Enter/Space: Flip | n: New Game | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
