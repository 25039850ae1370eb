use std::path::PathBuf;

use clap::Parser;
use dominoes::{DrawRule, TieBreak};
use judge::{play_game, MatchScore, Narrator, Recorder, TableConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays games of dominoes where every player picks random moves
#[derive(Parser)]
struct Args {
    /// Names of the players, in seating order [default: Alice Bob]
    players: Vec<String>,

    /// Path to a JSON file with table settings. Other arguments take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Which tile to play when several fit: "first" or "random" [default: random]
    #[arg(short, long)]
    tie_break: Option<TieBreak>,

    /// Pass the turn after drawing a tile, instead of drawing until a tile fits
    #[arg(long, default_value_t = false)]
    pass_after_draw: bool,

    /// How many tiles each player is dealt [default: 7]
    #[arg(long)]
    hand_size: Option<usize>,

    /// Don't print the games, only the end result
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Draw boards with Unicode domino characters
    #[arg(short, long, default_value_t = false)]
    unicode: bool,

    /// Record the games' events as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let from_file = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };
    let table = from_file.merge(TableConfig {
        players: args.players,
        tie_break: args.tie_break,
        draw_rule: args.pass_after_draw.then_some(DrawRule::PassAfterDraw),
        hand_size: args.hand_size,
    });
    let names = table.player_names();
    let config = table.game_config();
    debug!(?names, ?config);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };
    let mut narrator = if args.quiet {
        None
    } else {
        Some(Narrator::new(&names, args.unicode, std::io::stdout().lock()))
    };

    let mut match_score = MatchScore::new(names.len());
    for game_idx in 0..args.num_games {
        let outcome = play_game(&mut rng, &names, &config, &mut narrator, &mut recorder)?;
        match outcome.winner() {
            Some(player_idx) => debug!(winner = names[player_idx].as_str(), game_idx),
            None => debug!(game_idx, "Stalemate"),
        }
        match_score.record(outcome);
    }

    eprintln!("{}", match_score.summary(&names));
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
