//! Command-line interface for moodlex
//! Scores sentences from the command line or a batch file, or runs the batch HTTP service.
//!
//! Usage:
//!   moodlex score `<text>`... [--explain] [--format `<format>`]  - Score sentences given as arguments
//!   moodlex batch `<path>` [--format `<format>`]                 - Score a JSON batch file (`-` for stdin)
//!   moodlex serve [--host `<host>`] [--port `<port>`]            - Run the HTTP service
//!   moodlex lexicon                                         - Print the lexicon tables
//!
//! Every subcommand accepts `--config <path>` to layer a TOML file over the built-in defaults.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use moodlex::config::{Loader, MoodlexConfig};
use moodlex::sentiment::batch;
use moodlex::sentiment::{BatchResponse, Scorer, Verdict};
use moodlex::{MoodlexError, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("moodlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lexicon-based sentiment tagging: happy, sad or neutral")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .subcommand(
            Command::new("score")
                .about("Score sentences given as arguments")
                .arg(
                    Arg::new("text")
                        .help("Sentences to score")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .short('e')
                        .help("Show the deciding stage and the tally")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (text, json, yaml)")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("batch")
                .about("Score a JSON batch: {\"sentences\": [...]} or a bare array")
                .arg(
                    Arg::new("path")
                        .help("Path to the batch file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (json, yaml)")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the batch sentiment HTTP service")
                .arg(Arg::new("host").long("host").help("Address to bind"))
                .arg(
                    Arg::new("port")
                        .long("port")
                        .short('p')
                        .help("Port to bind")
                        .value_parser(value_parser!(u16)),
                ),
        )
        .subcommand(Command::new("lexicon").about("Print the lexicon tables"))
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_tracing(&config.logging.filter);

    let outcome = match matches.subcommand() {
        Some(("score", score_matches)) => handle_score_command(&config, score_matches),
        Some(("batch", batch_matches)) => handle_batch_command(&config, batch_matches),
        Some(("serve", _)) => handle_serve_command(config),
        Some(("lexicon", _)) => {
            handle_lexicon_command(&config);
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<MoodlexConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let mut loader = loader.with_env();

    if let Some(("serve", serve_matches)) = matches.subcommand() {
        if let Some(host) = serve_matches.get_one::<String>("host") {
            loader = loader.set_override("server.host", host.as_str())?;
        }
        if let Some(port) = serve_matches.get_one::<u16>("port") {
            loader = loader.set_override("server.port", i64::from(*port))?;
        }
    }

    Ok(loader.build()?)
}

/// Logs go to stderr so stdout stays machine-readable; `RUST_LOG` wins over the config
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Serialize)]
struct ExplainedSentence<'a> {
    sentence: &'a str,
    #[serde(flatten)]
    verdict: Verdict,
}

/// Handle the score command
fn handle_score_command(config: &MoodlexConfig, matches: &ArgMatches) -> Result<()> {
    let scorer = config.scorer();
    let texts: Vec<String> = matches
        .get_many::<String>("text")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let explain = matches.get_flag("explain");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    match (format, explain) {
        ("text", false) => {
            for text in &texts {
                println!("{}\t{}", scorer.score(text), text);
            }
        }
        ("text", true) => {
            for text in &texts {
                let verdict = scorer.explain(text);
                println!(
                    "{}\t{}\tpos={:.2} neg={:.2}\t{}",
                    verdict.label, verdict.stage, verdict.tally.positive, verdict.tally.negative, text
                );
            }
        }
        (_, true) => {
            let explained: Vec<_> = texts
                .iter()
                .map(|text| ExplainedSentence {
                    sentence: text,
                    verdict: scorer.explain(text),
                })
                .collect();
            print!("{}", render(&explained, format)?);
        }
        (_, false) => {
            let response = BatchResponse {
                results: batch::score_sentences(&scorer, texts),
            };
            print!("{}", render(&response, format)?);
        }
    }

    Ok(())
}

/// Handle the batch command
fn handle_batch_command(config: &MoodlexConfig, matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json");

    let source = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    let items = match serde_json::from_str::<Value>(&source)? {
        Value::Array(items) => items,
        body => batch::parse_request(body)?,
    };
    tracing::debug!(items = items.len(), path, "scoring batch file");

    let response = batch::score_items(&config.scorer(), &items);
    print!("{}", render(&response, format)?);
    Ok(())
}

/// Handle the serve command
fn handle_serve_command(config: MoodlexConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(moodlex::server::serve(&config))
}

/// Handle the lexicon command
fn handle_lexicon_command(config: &MoodlexConfig) {
    let scorer: Scorer = config.scorer();
    let lexicon = scorer.lexicon();

    println!("Positive words:\n  {}\n", lexicon.positive_words().join(" "));
    println!("Negative words:\n  {}\n", lexicon.negative_words().join(" "));
    println!("Negation words:\n  {}\n", lexicon.negation_words().join(" "));

    println!("Emoji:");
    for (glyph, mood) in lexicon.emoji_table() {
        println!("  {}  {:?}", glyph, mood);
    }

    println!("\nShort utterances:");
    for (word, mood) in lexicon.short_utterance_table() {
        println!("  {:<6} {:?}", word, mood);
    }
}

fn render<T: Serialize + ?Sized>(value: &T, format: &str) -> Result<String> {
    match format {
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
        "yaml" => Ok(serde_yaml::to_string(value)?),
        other => Err(MoodlexError::UnsupportedFormat(other.to_string())),
    }
}
