use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use merchants::core::MerchantsConfig;
use merchants::sim::{play_game, GreedyPolicy, Policy, RandomPolicy};
use merchants::GameRng;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Random,
    Greedy,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate Merchants games and print JSON summaries", long_about = None)]
struct Args {
    /// Number of players (2-6)
    #[arg(long, default_value_t = 3)]
    players: usize,

    /// Seed of the first game; later games use consecutive seeds
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Stop a game after this many actions
    #[arg(long, default_value_t = 10_000)]
    max_actions: usize,

    /// Cube exchanges allowed per turn (unlimited if omitted)
    #[arg(long)]
    exchange_limit: Option<u32>,

    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    policy: PolicyKind,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = MerchantsConfig::new(args.players);
    if let Some(limit) = args.exchange_limit {
        config = config.with_exchange_limit(limit);
    }
    config.validate()?;

    let mut wins = vec![0u64; args.players];
    for seed in args.seed..args.seed + args.games {
        let mut policy: Box<dyn Policy> = match args.policy {
            PolicyKind::Random => Box::new(RandomPolicy::new(GameRng::new(seed).for_context("policy"))),
            PolicyKind::Greedy => Box::new(GreedyPolicy),
        };
        let summary = play_game(config.clone(), seed, args.max_actions, policy.as_mut())?;
        wins[summary.winner as usize] += 1;
        println!("{}", serde_json::to_string(&summary)?);
    }

    info!("Wins by seat over {} game(s): {:?}", args.games, wins);
    Ok(())
}
