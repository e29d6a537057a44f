mod display;

use aram_pick::api::models::ChampSelectSession;
use aram_pick::config::{parse_clip_bound, Config};
use aram_pick::analysis::win_rate::{load_raw_win_rates, WinRateNormalizer};
use aram_pick::{AppError, ChampionCatalog, Evaluator, RoleWeightTable, Roster};
use clap::Parser;
use display::output::{display_error, display_evaluation, display_info, display_success};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aram_pick", version)]
#[command(about = "Rank ARAM bench rerolls by team fit and win rate", long_about = None)]
struct Args {
    /// Roster file ({"team": [...], "bench": [...], "player": [id]})
    input: PathBuf,

    /// Treat the input as a saved champion select session document
    #[arg(long)]
    session: bool,

    /// Player PUUID used to find your pick in a session (default: local cell)
    #[arg(long)]
    puuid: Option<String>,

    /// Directory holding champion_ratings.json, role_weights.json and win_rates.csv
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Clip normalized scores to [-N, N] (default: unclipped)
    #[arg(long)]
    clip: Option<String>,

    /// Number of bench champions to display (default: all)
    #[arg(short, long)]
    top_n: Option<usize>,

    /// Print the evaluation as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log normalization details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration; flags win over the environment
    let mut config = Config::from_env()?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(clip) = args.clip.as_deref() {
        config.clip = parse_clip_bound(clip)?;
    }
    if args.puuid.is_some() {
        config.player_puuid = args.puuid;
    }

    let quiet = args.json;
    if !quiet {
        display_info(&format!("Loading data from {}", config.data_dir.display()));
    }

    // Miscalibrated role weights abort here
    let weights = RoleWeightTable::load(&config.role_weights_path())?;
    let catalog = ChampionCatalog::load(&config.catalog_path())?;
    let raw_win_rates = load_raw_win_rates(&config.win_rates_path())?;
    let win_rates = WinRateNormalizer.normalize(&raw_win_rates);

    if !quiet {
        display_success(&format!(
            "{} champions, {} win rates, {} roles",
            catalog.len(),
            win_rates.len(),
            weights.roles().count()
        ));
    }

    // The evaluator applies the clip policy to both normalization passes
    let roster = read_roster(&args.input, args.session, config.player_puuid.as_deref())?;
    let pool = Evaluator::new(&catalog, &weights, &win_rates)
        .with_clip(config.clip)
        .evaluate(&roster)?;

    if args.json {
        let json = serde_json::to_string_pretty(&pool.to_report())
            .map_err(|e| AppError::JsonError(format!("Failed to serialize report: {}", e)))?;
        println!("{}", json);
    } else {
        display_evaluation(&pool, args.top_n);
    }

    Ok(())
}

fn read_roster(path: &Path, session: bool, puuid: Option<&str>) -> Result<Roster, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::FileError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    if session {
        Ok(ChampSelectSession::from_json_str(&content)?.to_roster(puuid))
    } else {
        Roster::from_json_str(&content)
    }
}
