use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use writing_coach::remote::{self, RemoteReply};
use writing_coach::{analyze_with, FeedbackResponse, RemoteError, RuleSet};

#[derive(Parser)]
#[command(
    name = "writing-coach",
    about = "Friendly grammar, vocabulary and structure feedback for young writers",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Print flattened feedback items instead of the categorized response
    #[arg(long)]
    items: bool,

    /// Seed for suggestion and praise picks
    #[arg(long)]
    seed: Option<u64>,

    /// Saved reply from the remote feedback service; falls back to offline
    /// feedback when it can't be read or parsed
    #[arg(long, value_name = "FILE")]
    remote_reply: Option<PathBuf>,

    /// Treat the remote reply as prose rather than JSON
    #[arg(long, requires = "remote_reply")]
    plain_reply: bool,
}

fn read_remote_reply(path: &Path, plain: bool) -> Result<RemoteReply, RemoteError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| RemoteError::Unavailable(format!("{}: {e}", path.display())))?;
    if plain {
        remote::parse_text(&raw).map(RemoteReply::Text)
    } else {
        remote::parse_structured(&raw).map(RemoteReply::Structured)
    }
}

fn report(cli: &Cli, text: &str, rng: &mut StdRng) -> Result<String> {
    let json = if let Some(path) = &cli.remote_reply {
        let reply = read_remote_reply(path, cli.plain_reply);
        let source = remote::resolve_with(text, reply, RuleSet::standard(), rng);
        serde_json::to_string_pretty(&source.items())?
    } else {
        let feedback: FeedbackResponse = analyze_with(text, RuleSet::standard(), rng);
        if cli.items {
            serde_json::to_string_pretty(&feedback.to_items())?
        } else {
            serde_json::to_string_pretty(&feedback)?
        }
    };
    Ok(json)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        println!("{}", report(&cli, &input, &mut rng)?);
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Error reading {}", path.display()))?;
            println!("{}", report(&cli, &text, &mut rng)?);
        }
    }

    Ok(())
}
