//! Line-oriented map grid game
//!
//! Text-based game loop without the TUI

use crate::game::MapGrid;
use crate::output::{print_grid, print_shared_matrix};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCommand {
    Flip(usize),
    Matrix,
    Help,
    Quit,
}

/// Parse one line of input against a grid `width` tiles wide with tile `names`
///
/// Accepts `row col` (1-based), a tile name (case-insensitive), `matrix`,
/// `help` or `quit`. Returns `None` for anything else.
#[must_use]
pub fn parse_command(input: &str, width: usize, names: &[&str]) -> Option<GridCommand> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Some(GridCommand::Quit),
        "matrix" | "m" => return Some(GridCommand::Matrix),
        "help" | "h" | "?" => return Some(GridCommand::Help),
        _ => {}
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if let [row, col] = parts.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        if row == 0 || col == 0 || col > width {
            return None;
        }
        return (row - 1)
            .checked_mul(width)
            .and_then(|start| start.checked_add(col - 1))
            .filter(|&index| index < names.len())
            .map(GridCommand::Flip);
    }

    names
        .iter()
        .position(|name| name.eq_ignore_ascii_case(input))
        .map(GridCommand::Flip)
}

/// Run the map grid game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_grid<R: Rng>(grid: &mut MapGrid<R>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Map Grid - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        print_grid(grid);

        if grid.is_finished() {
            let kept: Vec<&str> = grid
                .tiles()
                .iter()
                .filter(|t| t.is_map && !t.cancelled)
                .map(|t| t.name.as_str())
                .collect();
            println!("\n{}", "Every map is face up!".green().bold());
            println!("Maps still in play: {}\n", kept.join(", "));
            return Ok(());
        }

        let input = get_user_input("Flip (row col or name)")?;
        let names: Vec<&str> = grid.tiles().iter().map(|t| t.name.as_str()).collect();

        match parse_command(&input, grid.width(), &names) {
            Some(GridCommand::Quit) => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            Some(GridCommand::Matrix) => print_shared_matrix(grid),
            Some(GridCommand::Help) => print_help(),
            Some(GridCommand::Flip(index)) => {
                let name = grid.tiles()[index].name.clone();
                if grid.reveal(index) {
                    if grid.tiles()[index].cancelled {
                        println!("{} {}", name.red().bold(), "is cancelled!".red());
                    } else {
                        println!("Flipped {}", name.bright_yellow().bold());
                    }
                } else {
                    println!("That tile is already face up.");
                }
            }
            None => println!("Unknown tile or command. Type 'help' for usage."),
        }
    }
}

fn print_help() {
    println!("Find the maps hidden in the grid. Hints show how many letters each");
    println!("tile shares with its row (r) and column (c). Flipping a map marked");
    println!("ELIMINATING cancels it.\n");
    println!("Commands: 'row col' or a map name to flip, 'matrix' for shared letters,");
    println!("'help', 'quit'\n");
}

fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["Nuke", "qwer", "Dust II", "Train", "zxcv"];

    #[test]
    fn parses_row_and_column() {
        assert_eq!(parse_command("1 1", 2, NAMES), Some(GridCommand::Flip(0)));
        assert_eq!(parse_command("2 2", 2, NAMES), Some(GridCommand::Flip(3)));
        assert_eq!(parse_command(" 3 1 ", 2, NAMES), Some(GridCommand::Flip(4)));
    }

    #[test]
    fn rejects_out_of_grid_positions() {
        assert_eq!(parse_command("3 2", 2, NAMES), None);
        assert_eq!(parse_command("1 3", 2, NAMES), None);
        assert_eq!(parse_command("0 1", 2, NAMES), None);
    }

    #[test]
    fn huge_positions_are_rejected() {
        let row = usize::MAX.to_string();
        assert_eq!(parse_command(&format!("{row} 1"), 4, &["a"]), None);
        assert_eq!(parse_command(&format!("1 {row}"), usize::MAX, &["a"]), None);
    }

    #[test]
    fn parses_names_ignoring_case() {
        assert_eq!(parse_command("dust ii", 2, NAMES), Some(GridCommand::Flip(2)));
        assert_eq!(parse_command("TRAIN", 2, NAMES), Some(GridCommand::Flip(3)));
        assert_eq!(parse_command("Mirage", 2, NAMES), None);
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("quit", 2, NAMES), Some(GridCommand::Quit));
        assert_eq!(parse_command("M", 2, NAMES), Some(GridCommand::Matrix));
        assert_eq!(parse_command("?", 2, NAMES), Some(GridCommand::Help));
    }
}
