//! royale-guess - text front end for the guessing game
//!
//! Usage: royale-guess [--config <file>] [--seed <n>] [--leaderboard <file>]
//!
//! Commands:
//!   ask <attribute> <op> <value>   - Ask a yes/no question (e.g. `ask elixir <= 4`)
//!   guess <card name>              - Guess the secret card
//!   hint                           - Reveal something about the secret
//!   cards                          - List remaining candidates
//!   status                         - Show progress
//!   show                           - Put every card back in play (same secret)
//!   new                            - New game with a new secret
//!   leaders                        - Show the leaderboard
//!   quit                           - Exit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use royale_guess::cards::{Attribute, CardCatalog};
use royale_guess::query::Operator;
use royale_guess::session::{GameSession, GuessOutcome};
use royale_guess::{GameRng, GuessConfig, Leaderboard, Query};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = "guess> ";

/// Options taken from the command line.
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    leaderboard: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = iter.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-s" | "--seed" => {
                let seed = iter.next().context("--seed requires a number")?;
                parsed.seed = Some(seed.parse().with_context(|| format!("bad seed '{seed}'"))?);
            }
            "-l" | "--leaderboard" => {
                let path = iter.next().context("--leaderboard requires a path")?;
                parsed.leaderboard = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("royale-guess v{VERSION} - guess the secret card");
                println!();
                println!("Usage: royale-guess [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <file>        Load settings from a JSON file");
                println!("  -s, --seed <n>             Fix the random seed");
                println!("  -l, --leaderboard <file>   Leaderboard file (default leaderboard.json)");
                println!("  -h, --help                 Show this help message");
                std::process::exit(0);
            }
            other => bail!("unknown option '{other}' (try --help)"),
        }
    }
    Ok(parsed)
}

fn print_help() {
    println!("Commands:");
    println!("  ask <attribute> <op> <value>   e.g. ask elixir <= 4, ask rarity = epic");
    println!("  guess <card name>              e.g. guess hog rider");
    println!("  hint | cards | status | show | new | leaders | help | quit");
    println!();
    let attributes: Vec<_> = Attribute::QUESTIONABLE.iter().map(|a| a.key()).collect();
    let operators: Vec<_> = Operator::ALL.iter().map(|o| o.symbol()).collect();
    println!("Attributes: {} (and name)", attributes.join(", "));
    println!("Operators:  {}", operators.join(" "));
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_leaders(board: &Leaderboard) {
    println!("{:<5} {:<16} {:>6} {:>10} {:>6}", "Rank", "Name", "Score", "Best Time", "Games");
    for (i, entry) in board.ranked().iter().enumerate() {
        println!(
            "{:<5} {:<16} {:>6} {:>9.1}s {:>6}",
            format!("#{}", i + 1),
            entry.name,
            entry.score,
            entry.best_time,
            entry.games
        );
    }
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let mut config = match &args.config {
        Some(path) => GuessConfig::from_json_file(path)?,
        None => GuessConfig::new(),
    };
    if let Some(seed) = args.seed {
        config = config.with_rng_seed(seed);
    }
    if let Some(path) = args.leaderboard {
        config = config.with_leaderboard_path(path);
    }

    let catalog = Arc::new(CardCatalog::standard());
    let mut board = Leaderboard::open(&config)?;
    if let Some(err) = board.load_error() {
        eprintln!("Warning: {err}");
    }
    let mut session = GameSession::new(catalog, GameRng::from_optional_seed(config.rng_seed));

    println!("Clash Royale - Guess Who? A secret card has been chosen.");
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        match command.to_lowercase().as_str() {
            "" => {}
            "ask" => match rest.parse::<Query>() {
                Ok(query) => match session.pose_query(&query) {
                    Ok(outcome) => {
                        if let Some(err) = &outcome.parse_error {
                            println!("Invalid value: {err}. Answering no.");
                        }
                        println!("{}", outcome.query);
                        println!("{}", if outcome.answer { "YES" } else { "NO" });
                        println!("Eliminated {} card(s). {}", outcome.eliminated.len(), session.status());
                    }
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("{err}"),
            },
            "guess" => match session.guess_by_name(rest) {
                Ok(GuessOutcome::Win {
                    card,
                    elapsed_seconds,
                    score,
                }) => {
                    println!("Correct! The secret card was {}.", session.catalog()[card].name);
                    println!("Time: {elapsed_seconds} seconds | Score: {score} points");

                    if board.qualifies(score) {
                        print!("New high score! Enter your name: ");
                        io::stdout().flush()?;
                        let name = read_line(&mut input)?.unwrap_or_default();
                        let outcome = board.merge(&name, score, elapsed_seconds);
                        if let Some(err) = outcome.persist_error {
                            eprintln!("Warning: {err}");
                        } else if !outcome.saved {
                            eprintln!("Warning: leaderboard not saved; the file could not be read at startup");
                        }
                        print_leaders(&board);
                    }
                    println!("Type 'new' to play again.");
                }
                Ok(GuessOutcome::Miss { card, .. }) => {
                    println!("{} is not the secret card. Keep trying!", session.catalog()[card].name);
                    println!("{}", session.status());
                }
                Err(err) => println!("{err}"),
            },
            "hint" => println!("{}", session.hint()),
            "cards" => {
                let names: Vec<_> = session.candidate_cards().map(|c| c.name.as_str()).collect();
                println!("{}", names.join(", "));
            }
            "status" => println!("{} | Time: {:.1}s", session.status(), session.elapsed_seconds()),
            "show" => match session.restore_candidates() {
                Ok(()) => println!("All cards are back in play! Good luck!"),
                Err(err) => println!("{err}"),
            },
            "new" => {
                session.reset();
                println!("New secret card selected! Can you guess it?");
            }
            "leaders" => print_leaders(&board),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }

    Ok(())
}
