//! WordPop - CLI
//!
//! Play Wordle-style games in the terminal, inspect daily picks, replay and
//! score guesses, and drive the JSON API without a server.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use wordpop::{
    api::Host,
    commands::{
        EvaluateConfig, PlayOptions, SimulateConfig, daily_report, evaluate_game, parse_date,
        run_play, run_simulation, send_request, validate_words,
    },
    config::GameConfig,
    corpus::{CorpusSources, Wordlist, WordCorpus},
    logging,
    output::{print_daily, print_evaluation, print_response, print_simulation, print_validation},
    selection::{GameMode, WordSelector},
    stats::JsonFileStore,
    wordlists::{CategoryLibrary, CategorySource},
};

#[derive(Parser)]
#[command(
    name = "wordpop",
    about = "Wordle-style word game with daily, challenge, category, timed and blind modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess list: 'all' (default), 'answers', or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: Wordlist,

    /// Extra answer words, one per line
    #[arg(long, global = true)]
    custom_words: Option<PathBuf>,

    /// Word frequency ranks, `WORD,RANK` or `WORD RANK` per line
    #[arg(long, global = true)]
    frequency: Option<PathBuf>,

    /// Filter settings JSON
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Directory of `<category>.txt` word files
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    /// Results file (default: platform data dir)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// random, daily, daily-challenge or category
        #[arg(short, long, default_value = "random")]
        mode: GameMode,

        /// Category name for category mode
        #[arg(short, long)]
        category: Option<String>,

        /// Race the clock for bonus points
        #[arg(short, long)]
        timed: bool,

        /// Hide keyboard hints until the game ends
        #[arg(short, long)]
        blind: bool,
    },

    /// Show the daily words for a date
    Daily {
        /// YYYY-MM-DD (default: today, UTC)
        date: Option<String>,
    },

    /// Replay guesses against a known target
    Evaluate {
        /// The target word
        target: String,

        /// Guesses in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Score as a timed game
        #[arg(short, long)]
        timed: bool,

        /// Seconds the game took, for timed scoring
        #[arg(short, long, default_value = "0")]
        elapsed: u64,
    },

    /// Check words against the dictionary and answer filters
    Validate {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Simulate games with a simple consistent-guess player
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// RNG seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Fixed opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Score as timed games
        #[arg(short, long)]
        timed: bool,
    },

    /// Send one request to the JSON API
    Request {
        /// GET or POST
        method: String,

        /// Path with optional query, e.g. /word?mode=daily
        target: String,

        /// JSON body for POST
        #[arg(short, long)]
        body: Option<String>,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    logging::init(cli.verbose);

    let sources = CorpusSources {
        wordlist: cli.wordlist.clone(),
        custom_words: cli.custom_words.clone(),
        frequency: cli.frequency.clone(),
        settings: cli.settings.clone(),
    };
    let corpus = sources.load().context("Failed to load word lists")?;
    log::info!(
        "Loaded {} answers, {} guesses",
        corpus.answer_pool().len(),
        corpus.guess_count()
    );

    let config = GameConfig::default();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play {
        mode: GameMode::Random,
        category: None,
        timed: false,
        blind: false,
    });

    match command {
        Commands::Play {
            mode,
            category,
            timed,
            blind,
        } => {
            let options = PlayOptions {
                mode,
                category,
                timed,
                blind,
            };
            let mut selector = category_selector(cli.categories, &config);
            let mut store = open_store(cli.stats_file)?;
            run_play(&corpus, &mut selector, &mut store, &options, &config)
        }
        Commands::Daily { date } => {
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => Utc::now().date_naive(),
            };
            print_daily(&daily_report(date, &corpus)?);
            Ok(())
        }
        Commands::Evaluate {
            target,
            guesses,
            timed,
            elapsed,
        } => {
            let config = EvaluateConfig {
                target,
                guesses,
                timed,
                elapsed_secs: elapsed,
            };
            print_evaluation(&evaluate_game(&config, &corpus, Utc::now())?);
            Ok(())
        }
        Commands::Validate { words } => {
            print_validation(&validate_words(&words, &corpus));
            Ok(())
        }
        Commands::Simulate {
            count,
            seed,
            first_word,
            timed,
        } => {
            let config = SimulateConfig {
                games: count,
                seed,
                first_guess: first_word,
                timed,
            };
            print_simulation(&run_simulation(&config, &corpus)?);
            Ok(())
        }
        Commands::Request {
            method,
            target,
            body,
        } => run_request_command(corpus, &cli, &config, &method, &target, body),
    }
}

fn category_selector(categories: Option<PathBuf>, config: &GameConfig) -> WordSelector {
    let source = categories.map_or(CategorySource::BuiltIn, CategorySource::Directory);
    WordSelector::new(CategoryLibrary::new(source, config.category_ttl))
}

fn open_store(path: Option<PathBuf>) -> Result<JsonFileStore> {
    let store = match path {
        Some(path) => JsonFileStore::open(path),
        None => JsonFileStore::open_default(),
    }
    .context("Failed to open results file")?;
    log::info!("Results file: {}", store.path().display());
    Ok(store)
}

fn run_request_command(
    corpus: WordCorpus,
    cli: &Cli,
    config: &GameConfig,
    method: &str,
    target: &str,
    body: Option<String>,
) -> Result<()> {
    let store = open_store(cli.stats_file.clone())?;
    let mut host = Host::new(
        corpus,
        category_selector(cli.categories.clone(), config),
        store,
    );
    let response = send_request(&mut host, method, target, body)?;
    print_response(&response);
    Ok(())
}
