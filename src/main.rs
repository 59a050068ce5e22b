//! Color Tiles - CLI
//!
//! Color tile game in a TUI, plus a text map grid, a weighted map draft and
//! board generation tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use color_tiles::{
    commands::{DraftConfig, SurveyConfig, generate_palette, run_draft, run_grid, run_survey},
    core::BoardConfig,
    game::MapGrid,
    maps::{DEFAULT_MAPS, MapPool},
    output::{print_draft, print_palette, print_survey},
    wordlists::{HELPER_WORDS, RandomLetters, loader::words_from_slice},
};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(
    name = "color_tiles",
    about = "Color tile deduction and map elimination games for picking competitive maps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors (default: random 4-8 per game)
    #[arg(short, long, global = true)]
    colors: Option<usize>,

    /// Seed for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Hue draws allowed before board generation gives up
    #[arg(long, global = true, default_value = "100000")]
    max_attempts: usize,

    /// Helper words: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive color tile game (default)
    Play,

    /// Map grid game in plain text
    Grid {
        /// Random helper strings mixed in with the maps
        #[arg(long, default_value = "9")]
        helpers: usize,

        /// Tiles per row
        #[arg(long, default_value = "4")]
        width: usize,

        /// Maps marked ELIMINATING at a time
        #[arg(short = 'e', long, default_value = "4")]
        eliminating: usize,
    },

    /// Draw maps from the weighted pool
    Draft {
        /// Number of maps to draw
        #[arg(short = 'n', long, default_value = "4")]
        count: usize,

        /// Halve a map's weight (repeatable)
        #[arg(long, value_name = "MAP")]
        halve: Vec<String>,

        /// Double a map's weight (repeatable)
        #[arg(long, value_name = "MAP")]
        double: Vec<String>,

        /// Drop a map from the pool (repeatable)
        #[arg(long, value_name = "MAP")]
        remove: Vec<String>,
    },

    /// Generate one board and print its colors and letters
    Palette,

    /// Generate many games and report generation statistics
    Survey {
        /// Number of games to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Load helper words based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    use color_tiles::wordlists::loader::load_from_file;

    let words = match wordlist {
        "embedded" => words_from_slice(HELPER_WORDS),
        path => load_from_file(path).with_context(|| format!("reading word list '{path}'"))?,
    };
    if words.is_empty() {
        anyhow::bail!("word list '{wordlist}' has no words");
    }
    info!("loaded {} helper words from {wordlist}", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let mut cli = Cli::parse();

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, rng),
        Commands::Grid {
            helpers,
            width,
            eliminating,
        } => run_grid_command(helpers, width, eliminating, rng),
        Commands::Draft {
            count,
            halve,
            double,
            remove,
        } => {
            let config = DraftConfig {
                count,
                halve,
                double,
                remove,
            };
            let result =
                run_draft(MapPool::default(), &config, &mut rng).context("adjusting map weights")?;
            print_draft(&result);
            Ok(())
        }
        Commands::Palette => {
            let config = board_config(&cli, &mut rng);
            let result = generate_palette(&config, &mut rng).context("generating board")?;
            print_palette(&result);
            Ok(())
        }
        Commands::Survey { count } => {
            let words = load_words(&cli.wordlist)?;
            let config = SurveyConfig {
                color_count: cli.colors,
                max_attempts: cli.max_attempts,
                ..SurveyConfig::new(count, cli.seed.unwrap_or_else(|| rng.random()))
            };
            println!("Generating {count} games...");
            let stats = run_survey(&config, &words);
            print_survey(&stats);
            Ok(())
        }
    }
}

fn board_config<R: Rng>(cli: &Cli, rng: &mut R) -> BoardConfig {
    cli.colors
        .map_or_else(|| BoardConfig::with_random_color_count(rng), BoardConfig::new)
        .max_attempts(cli.max_attempts)
}

fn run_grid_command(
    helpers: usize,
    width: usize,
    eliminating: usize,
    mut rng: StdRng,
) -> Result<()> {
    let mut letters = RandomLetters::new(StdRng::from_rng(&mut rng));
    let mut grid = MapGrid::new(DEFAULT_MAPS, helpers, width, eliminating, &mut letters, rng);
    run_grid(&mut grid).context("running map grid")
}

fn run_play_command(cli: &Cli, rng: StdRng) -> Result<()> {
    use color_tiles::interactive::{App, PlaySettings, run_tui};

    let words = load_words(&cli.wordlist)?;
    let settings = PlaySettings {
        color_count: cli.colors,
        max_attempts: cli.max_attempts,
    };
    let app = App::new(settings, words, rng).context("starting game")?;
    run_tui(app)
}
