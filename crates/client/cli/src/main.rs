//! Headless wizard duel simulator.
//!
//! This binary is the composition root that assembles:
//! 1. Content (spells, wizards, rules) via `ContentFactory`
//! 2. Runtime (combat + AI) via `DuelRuntime::builder`
//! 3. Input (terminal or AI) for the player's side
//!
//! # Examples
//!
//! ```bash
//! # AI vs AI, reproducible
//! duel fight --player apprentice --enemy lich_lord --seed 42
//!
//! # Play the duel yourself on hard difficulty
//! duel fight --interactive --difficulty hard
//!
//! # Show the roster
//! duel list
//! ```
mod clock;
mod config;
mod input;
mod presentation;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use duel_content::ContentFactory;
use duel_core::{CombatLog, Difficulty, DuelConfig, Wizard};
use duel_runtime::{AiProvider, AiStrategy, DuelRuntime, DuelSummary, RuntimeConfig};
use serde::Serialize;

use clock::SystemClock;
use config::CliConfig;
use input::TerminalProvider;

/// Wizard duel simulator
#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Turn-based wizard duels in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory with spells.ron, wizards.ron and duel.toml
    /// (overrides DUEL_DATA_DIR; defaults to the bundled content)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run one duel
    Fight(FightArgs),

    /// List the wizards and spells in the content directory
    List,
}

#[derive(Parser)]
struct FightArgs {
    /// Roster id of the player's wizard
    #[arg(short, long, default_value = "apprentice")]
    player: String,

    /// Roster id of the opponent
    #[arg(short, long, default_value = "lich_lord")]
    enemy: String,

    /// easy, normal or hard
    #[arg(short, long, default_value = "normal")]
    difficulty: Difficulty,

    /// RNG seed (overrides DUEL_SEED; random when unset)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Turn limit (overrides DUEL_MAX_TURNS)
    #[arg(long, value_name = "TURNS")]
    max_turns: Option<u32>,

    /// Play the player's side from the terminal
    #[arg(short, long)]
    interactive: bool,

    /// Strategy for the player's side when not interactive
    #[arg(long, default_value = "balanced", value_name = "STRATEGY")]
    player_strategy: AiStrategy,

    /// Force the opponent's strategy instead of deriving it from the roster
    #[arg(long, value_name = "STRATEGY")]
    enemy_strategy: Option<AiStrategy>,

    /// Write the summary and full combat log as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Only print the final result
    #[arg(short, long)]
    quiet: bool,
}

/// JSON report written by `fight --json`.
#[derive(Serialize)]
struct DuelReport<'a> {
    seed: u64,
    player: &'a str,
    enemy: &'a str,
    difficulty: Difficulty,
    summary: &'a DuelSummary,
    log: &'a CombatLog,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let factory = match cli.data_dir.or_else(|| config.data_dir.clone()) {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };

    match cli.command {
        Command::Fight(args) => fight(&factory, &config, args),
        Command::List => list(&factory),
    }
}

/// Operational logs go to stderr so they never mix with duel output.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fight(factory: &ContentFactory, config: &CliConfig, args: FightArgs) -> Result<()> {
    let rules = factory.load_config()?;
    let catalog = factory.load_spells()?;
    let wizards = factory.load_wizards(&catalog)?;
    let player = find_wizard(&wizards, &args.player)?;
    let enemy = find_wizard(&wizards, &args.enemy)?;
    let (player_name, enemy_name) = (player.name.clone(), enemy.name.clone());

    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    let runtime_config = RuntimeConfig {
        duel: rules,
        max_turns: args
            .max_turns
            .or(config.max_turns)
            .unwrap_or(RuntimeConfig::DEFAULT_MAX_TURNS),
    };
    tracing::info!(
        seed,
        player = %player_name,
        enemy = %enemy_name,
        difficulty = %args.difficulty,
        "starting duel"
    );

    let mut builder = DuelRuntime::builder()
        .config(runtime_config)
        .difficulty(args.difficulty)
        .seed(seed)
        .clock(SystemClock);
    builder = if args.interactive {
        builder.player_provider(TerminalProvider::stdio())
    } else {
        builder.player_provider(AiProvider::new(args.player_strategy))
    };
    if let Some(strategy) = args.enemy_strategy {
        builder = builder.enemy_provider(AiProvider::new(strategy));
    }
    let mut runtime = builder.build(player, enemy)?;

    let echo = args.interactive || !args.quiet;
    let mut shown = 0;
    loop {
        if echo {
            for entry in runtime.log_since(shown) {
                println!("{}", presentation::entry_line(entry));
            }
        }
        shown = runtime.state().log.len();
        if runtime.is_finished() {
            break;
        }
        runtime.step()?;
    }

    let summary = runtime.summary();
    println!(
        "{}",
        presentation::summary_line(&summary, &player_name, &enemy_name)
    );

    if let Some(path) = args.json {
        let report = DuelReport {
            seed,
            player: &args.player,
            enemy: &args.enemy,
            difficulty: args.difficulty,
            summary: &summary,
            log: &runtime.state().log,
        };
        let file = File::create(&path)
            .with_context(|| format!("Failed to create report {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)?;
        tracing::info!(path = %path.display(), "wrote duel report");
    }
    Ok(())
}

fn list(factory: &ContentFactory) -> Result<()> {
    let rules: DuelConfig = factory.load_config()?;
    let catalog = factory.load_spells()?;
    let wizards = factory.load_wizards(&catalog)?;

    println!("wizards ({}):", wizards.len());
    for wizard in &wizards {
        println!(
            "  {}",
            presentation::wizard_row(wizard, rules.fallback_deck_size)
        );
    }
    println!("spells ({}):", catalog.len());
    for spell in catalog.iter() {
        println!("  {:<16} {}", spell.id.as_str(), presentation::spell_line(spell));
    }
    Ok(())
}

fn find_wizard(wizards: &[Wizard], id: &str) -> Result<Wizard> {
    wizards
        .iter()
        .find(|wizard| wizard.id == id)
        .cloned()
        .with_context(|| {
            let known: Vec<_> = wizards.iter().map(|wizard| wizard.id.as_str()).collect();
            format!("Unknown wizard `{id}` (known: {})", known.join(", "))
        })
}
