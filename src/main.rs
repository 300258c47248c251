use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

use league_office::config::{self, Config};
use league_office::draft::{self, DraftEngine, KeeperAssignments, TracingObserver};
use league_office::output;
use league_office::tiers;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a mock draft and write the draft board
    Draft {
        /// Player list CSV (overrides draft.player_list)
        #[arg(short, long)]
        players: Option<PathBuf>,

        /// Draft board CSV to write (overrides draft.output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Grade managers over the quarter and write the tier list
    Tiers {
        /// Manager data CSV (overrides tiers.input)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Tier list CSV to write (overrides tiers.output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the tier list as tab-separated values
        #[arg(long)]
        tsv: bool,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "league-office")]
#[command(about = "Mock drafts and quarterly manager tier lists for a fantasy football league", long_about = None)]
#[command(version, arg_required_else_help = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/league-office/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    league_office::logging::init(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = cli.command {
        if let Err(e) = config::init::run_init_wizard(config_path) {
            error!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate league config at startup
    if let Err(errors) = config::validate_config(&config) {
        error!("Config errors:");
        for e in errors {
            error!("  - {}", e);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let start_time = Instant::now();
    let result = match cli.command {
        Commands::Draft { players, output } => run_draft(&config, players, output),
        Commands::Tiers { input, output, tsv } => run_tiers(&config, input, output, tsv),
        Commands::Init => Ok(()),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(EXIT_INPUT);
    }

    if cli.verbose {
        info!("Finished in {:?}", start_time.elapsed());
    }
    std::process::exit(EXIT_SUCCESS);
}

fn run_draft(
    config: &Config,
    players: Option<PathBuf>,
    output: Option<PathBuf>,
) -> league_office::Result<()> {
    let draft = &config.draft;
    let players_path = players.unwrap_or_else(|| draft.player_list.clone());
    let output_path = output.unwrap_or_else(|| draft.output.clone());

    let players = draft::load_player_list(&players_path, &draft.player_column)?;
    let keepers = KeeperAssignments::from_config(&draft.keepers);
    info!(
        "{} players available, {} keepers across {} teams",
        players.len(),
        keepers.len(),
        draft.team_count
    );

    let engine = DraftEngine::new(draft.settings(), keepers, players);
    let results = engine.simulate(&mut TracingObserver);

    draft::write_draft_results(&output_path, &results)?;
    info!(
        "Draft simulation completed. Full Draft Results @ {}",
        output_path.display()
    );

    let use_colors = output::should_use_colors();
    println!("{}", output::format_draft_board(&results, use_colors));
    println!();
    println!("{}", output::format_my_team(&results));

    Ok(())
}

fn run_tiers(
    config: &Config,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    tsv: bool,
) -> league_office::Result<()> {
    let input_path = input.unwrap_or_else(|| config.tiers.input.clone());
    let output_path = output.unwrap_or_else(|| config.tiers.output.clone());

    info!(" -- STARTING -- ");
    let managers = tiers::load_managers(&input_path)?;
    let tier_list = tiers::build_tier_list(&managers, &mut tiers::TracingTierObserver);
    tiers::write_tier_list(&output_path, &tier_list)?;
    info!(" -- FINISHED -- ");

    if tsv {
        println!("{}", output::format_tier_tsv(&tier_list));
    } else {
        println!(
            "{}",
            output::format_tier_table(&tier_list, output::should_use_colors())
        );
    }

    Ok(())
}
