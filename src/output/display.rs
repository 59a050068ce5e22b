//! Display functions for command results

use super::formatters::share_bar;
use crate::commands::{DraftResult, PaletteResult, SurveyStatistics};
use crate::core::Color;
use crate::game::{GridTile, MapGrid};
use crate::maps::ordinal;
use colored::{ColoredString, Colorize};
use rand::Rng;

fn swatch(color: &Color, text: &str) -> ColoredString {
    let rgb = color.rgb();
    text.truecolor(rgb.r, rgb.g, rgb.b).bold()
}

/// Print a generated board
pub fn print_palette(result: &PaletteResult) {
    let board = &result.board;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} colors ",
        "PALETTE:".bright_cyan().bold(),
        board.colors().len().to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, color) in board.colors().iter().enumerate() {
        let letters: Vec<String> = color.assigned().iter().map(String::from).collect();
        println!(
            "  {} {:>2}. {}  hue {:.3}  {}",
            swatch(color, "██"),
            i + 1,
            color.rgb(),
            color.hue(),
            swatch(color, &letters.join(" ").to_uppercase())
        );
    }

    println!();
    println!("   Separation:  {:.6}", board.separation());
    println!("   Attempts:    {}", board.attempts());
    println!("   Time taken:  {:.2}ms", result.duration.as_secs_f64() * 1000.0);
}

/// Print the maps drawn by a draft
pub fn print_draft(result: &DraftResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "MAP DRAFT".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    let total: u64 = result.weights.iter().map(|(_, w)| w).sum();
    for (name, weight) in &result.weights {
        let pct = if total > 0 {
            *weight as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        println!("   {name:<10} {weight:>6}  ({pct:5.1}%)");
    }
    println!();

    if result.picks.is_empty() {
        println!("{}", "No maps could be drawn.".red().bold());
        return;
    }
    for (i, map) in result.picks.iter().enumerate() {
        println!(
            "The {} map being played is: {}",
            ordinal(i + 1),
            map.bright_yellow().bold()
        );
    }
}

/// Print survey statistics
pub fn print_survey(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Generation:".bright_cyan().bold());
    println!("   Games:            {}", stats.games);
    if stats.failures > 0 {
        println!(
            "   Failed:           {}",
            stats.failures.to_string().red().bold()
        );
    }
    println!(
        "   Mean attempts:    {}",
        format!("{:.1}", stats.mean_attempts).bright_yellow().bold()
    );
    println!("   Max attempts:     {}", stats.max_attempts);
    println!(
        "   All-color tiles:  [{}] {:.1}%",
        share_bar(stats.mean_all_colors_share, 30).green(),
        stats.mean_all_colors_share * 100.0
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n{}", "Color counts:".bright_cyan().bold());
    let mut counts: Vec<(&usize, &usize)> = stats.color_counts.iter().collect();
    counts.sort_unstable();
    let max_count = counts.iter().map(|(_, n)| **n).max().unwrap_or(1);
    for (colors, games) in counts {
        let bar_len = games * 40 / max_count.max(1);
        let separation = stats.separations.get(colors).copied().unwrap_or_default();
        println!(
            "   {colors}: {}{} {games:5}  (separation {separation:.4})",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
    }
}

/// Text of a grid cell, `?` while face down
fn tile_text(tile: &GridTile, cell: usize) -> String {
    let name = if tile.revealed { tile.name.as_str() } else { "?" };
    format!("{name:<cell$}")
}

/// Row and column hint of a face-up tile, blank while face down
fn hint_text(tile: &GridTile, cell: usize) -> String {
    let hint = if tile.revealed {
        format!("r{} c{}", tile.row_shared, tile.col_shared)
    } else {
        String::new()
    };
    format!("{hint:<cell$}")
}

/// The names of the maps currently marked ELIMINATING
fn eliminating_text<R: Rng>(grid: &MapGrid<R>) -> String {
    let names = grid.eliminating_names();
    if names.is_empty() {
        "ELIMINATING: -".to_string()
    } else {
        format!("ELIMINATING: {}", names.join(", "))
    }
}

/// One line per row of names followed by one line of hints
fn grid_lines(tiles: &[GridTile], width: usize, cell: usize) -> Vec<(Vec<String>, Vec<String>)> {
    tiles
        .chunks(width.max(1))
        .map(|row| {
            let names = row.iter().map(|t| tile_text(t, cell)).collect();
            let hints = row.iter().map(|t| hint_text(t, cell)).collect();
            (names, hints)
        })
        .collect()
}

/// Print the map grid with hints
pub fn print_grid<R: Rng>(grid: &MapGrid<R>) {
    let cell = grid
        .tiles()
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(0)
        .max(8);

    println!();
    let rows = grid.tiles().chunks(grid.width().max(1));
    for (row, (tiles, (names, hints))) in rows
        .zip(grid_lines(grid.tiles(), grid.width(), cell))
        .enumerate()
    {
        let names: Vec<String> = tiles
            .iter()
            .zip(names)
            .map(|(tile, text)| {
                if tile.cancelled {
                    text.red().strikethrough().to_string()
                } else if tile.is_map && tile.revealed {
                    text.green().bold().to_string()
                } else if tile.revealed {
                    text.bright_black().to_string()
                } else {
                    text.bright_yellow().to_string()
                }
            })
            .collect();

        println!("  {:>2} | {}", row + 1, names.join(" | "));
        println!("     | {}", hints.join(" | ").bright_black());
    }

    println!("\n  {}", eliminating_text(grid).bright_red().bold());
}

/// Sidebar rows for every tile, face down or not: name and shared counts
fn shared_rows<R: Rng>(grid: &MapGrid<R>) -> Vec<(&str, String)> {
    grid.tiles()
        .iter()
        .zip(grid.shared_matrix())
        .map(|(tile, counts)| {
            let row: Vec<String> = counts
                .iter()
                .map(|n| n.map_or_else(|| " -".to_string(), |n| format!("{n:>2}")))
                .collect();
            (tile.name.as_str(), row.join(" "))
        })
        .collect()
}

/// Print pairwise shared-letter counts between every pair of tiles
pub fn print_shared_matrix<R: Rng>(grid: &MapGrid<R>) {
    println!("\n{}", "Shared letters".bright_cyan().bold());
    for (name, counts) in shared_rows(grid) {
        println!("  {name:<10} {counts}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::RandomLetters;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tile(name: &str, revealed: bool) -> GridTile {
        GridTile {
            name: name.to_string(),
            is_map: !revealed,
            revealed,
            cancelled: false,
            row_shared: 7,
            col_shared: 8,
        }
    }

    #[test]
    fn face_down_tiles_hide_name_and_hints() {
        let hidden = tile("Inferno", false);
        assert_eq!(tile_text(&hidden, 8), "?       ");
        assert_eq!(hint_text(&hidden, 8), " ".repeat(8));
    }

    #[test]
    fn face_up_tiles_show_name_and_hints() {
        let shown = tile("qwer", true);
        assert_eq!(tile_text(&shown, 8), "qwer    ");
        assert_eq!(hint_text(&shown, 8), "r7 c8   ");
    }

    #[test]
    fn grid_rows_only_hint_face_up_tiles() {
        let tiles = [tile("Nuke", false), tile("abcd", true), tile("Train", false)];
        let lines = grid_lines(&tiles, 2, 8);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].1, vec![" ".repeat(8), "r7 c8   ".to_string()]);
        assert_eq!(lines[1].0, vec!["?       ".to_string()]);
        assert!(lines[1].1[0].trim().is_empty());
    }

    #[test]
    fn eliminating_line_names_the_maps() {
        let mut helpers = RandomLetters::new(StdRng::seed_from_u64(2));
        let maps = ["Nuke", "Train", "Cache"];
        let grid = MapGrid::new(&maps, 3, 3, 2, &mut helpers, StdRng::seed_from_u64(1));

        let text = eliminating_text(&grid);
        let names = grid.eliminating_names();
        assert_eq!(names.len(), 2);
        for name in names {
            assert!(text.contains(name), "{text}");
        }
    }

    #[test]
    fn eliminating_line_when_no_maps_remain() {
        let mut helpers = RandomLetters::new(StdRng::seed_from_u64(3));
        let mut grid = MapGrid::new(&["Nuke"], 1, 2, 1, &mut helpers, StdRng::seed_from_u64(4));
        let index = grid.tiles().iter().position(|t| t.is_map).unwrap();
        grid.reveal(index);
        assert_eq!(eliminating_text(&grid), "ELIMINATING: -");
    }

    #[test]
    fn sidebar_lists_hidden_maps_too() {
        let mut helpers = RandomLetters::new(StdRng::seed_from_u64(5));
        let grid = MapGrid::new(
            &["Mirage", "Dust II"],
            2,
            2,
            1,
            &mut helpers,
            StdRng::seed_from_u64(6),
        );

        let rows = shared_rows(&grid);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().any(|(name, _)| *name == "Mirage"));
        assert!(rows.iter().any(|(name, _)| *name == "Dust II"));
        for (i, (_, counts)) in rows.iter().enumerate() {
            assert_eq!(counts.split_whitespace().count(), 4);
            assert_eq!(counts.split_whitespace().nth(i), Some("-"));
        }
    }
}
