use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rpsls::core::{GameRng, MatchConfig, Move, SelectorConfig};
use rpsls::game::{ConsoleUi, Session};
use rpsls::selector::AdaptiveSelector;
use rpsls::sim::{simulate, SimConfig};
use rpsls::strategy::{CyclingStrategy, FixedStrategy, MoveStrategy, UniformStrategy};

#[derive(Parser)]
#[command(name = "rpsls", version, about = "Rock, Paper, Scissors, Lizard, Spock against an adaptive computer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the computer (default)
    Play(PlayArgs),
    /// Pit the adaptive selector against a bot and print the tally
    Simulate(SimulateArgs),
}

#[derive(Args, Clone)]
struct SelectorArgs {
    /// Random seed (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Round wins needed to take a match
    #[arg(long, default_value_t = MatchConfig::default().winning_score)]
    winning_score: u32,

    /// Starting weight for every move
    #[arg(long, default_value_t = SelectorConfig::default().initial_weight)]
    initial_weight: u32,

    /// Outcomes a history sequence needs before it adjusts weights
    #[arg(long, default_value_t = SelectorConfig::default().min_samples)]
    min_samples: usize,

    /// Clear history once more than this many rounds are recorded
    #[arg(long, default_value_t = SelectorConfig::default().reset_threshold)]
    reset_threshold: u32,
}

#[derive(Args, Clone, Default)]
struct PlayArgs {
    #[command(flatten)]
    selector: SelectorArgs,
}

#[derive(Args, Clone)]
struct SimulateArgs {
    #[command(flatten)]
    selector: SelectorArgs,

    /// Strategy the adaptive selector plays against
    #[arg(long, value_enum, default_value_t = Opponent::Rock)]
    opponent: Opponent,

    /// Matches to play
    #[arg(long, default_value_t = 100)]
    matches: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum Opponent {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
    Uniform,
    Cycle,
}

impl Default for SelectorArgs {
    fn default() -> Self {
        let config = SelectorConfig::default();
        Self {
            seed: None,
            winning_score: MatchConfig::default().winning_score,
            initial_weight: config.initial_weight,
            min_samples: config.min_samples,
            reset_threshold: config.reset_threshold,
        }
    }
}

impl SelectorArgs {
    fn rng(&self) -> GameRng {
        self.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy)
    }

    fn selector(&self, rng: GameRng) -> anyhow::Result<AdaptiveSelector> {
        let config = SelectorConfig::default()
            .with_initial_weight(self.initial_weight)
            .with_min_samples(self.min_samples)
            .with_reset_threshold(self.reset_threshold);
        AdaptiveSelector::new(config, rng).context("building adaptive selector")
    }
}

fn opponent(kind: Opponent, rng: GameRng) -> Box<dyn MoveStrategy> {
    match kind {
        Opponent::Rock => Box::new(FixedStrategy(Move::Rock)),
        Opponent::Paper => Box::new(FixedStrategy(Move::Paper)),
        Opponent::Scissors => Box::new(FixedStrategy(Move::Scissors)),
        Opponent::Lizard => Box::new(FixedStrategy(Move::Lizard)),
        Opponent::Spock => Box::new(FixedStrategy(Move::Spock)),
        Opponent::Uniform => Box::new(UniformStrategy::new(rng)),
        Opponent::Cycle => Box::new(CyclingStrategy::all_moves()),
    }
}

fn play(args: PlayArgs) -> anyhow::Result<()> {
    let rng = args.selector.rng();
    log::info!("playing with seed {}", rng.seed());
    let selector = args.selector.selector(rng)?;
    let config = MatchConfig::default().with_winning_score(args.selector.winning_score);

    let mut session = Session::new(ConsoleUi::new(), selector, config).context("starting session")?;
    let summary = session.run().context("console session failed")?;
    log::info!(
        "session over: {} matches, human {} / computer {}",
        summary.matches,
        summary.match_wins.human,
        summary.match_wins.computer
    );
    Ok(())
}

fn run_simulation(args: SimulateArgs) -> anyhow::Result<()> {
    let mut rng = args.selector.rng();
    let bot_rng = rng.fork();
    let mut selector = args.selector.selector(rng)?;
    let mut bot = opponent(args.opponent, bot_rng);

    let config = SimConfig::default()
        .with_matches(args.matches)
        .with_winning_score(args.selector.winning_score);
    let report = simulate(&mut selector, &mut bot, &config).context("simulation failed")?;

    println!("adaptive vs {}", bot.name());
    println!(
        "matches: {} (adaptive {}, {} {}, abandoned {})",
        report.matches,
        report.a_match_wins,
        bot.name(),
        report.b_match_wins,
        report.abandoned
    );
    println!(
        "rounds:  {} (adaptive {}, {} {}, ties {})",
        report.rounds(),
        report.a_round_wins,
        bot.name(),
        report.b_round_wins,
        report.ties
    );
    println!("weights: {}", selector.weights());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().command {
        Some(Command::Simulate(args)) => run_simulation(args),
        Some(Command::Play(args)) => play(args),
        None => play(PlayArgs::default()),
    }
}
