mod score;

use clap::{Parser, Subcommand};
use sentiscore_core::Aggregation;
use sentiscore_sentiment::SentimentAnalyzer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sentiscore")]
#[command(about = "Lexicon-based sentiment scoring for English text")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score text given as arguments, or read from stdin when none are given
    Score {
        text: Vec<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Sum token scores instead of averaging them
        #[arg(long)]
        sum: bool,
    },
    /// Show every pipeline stage for the given text
    Inspect {
        text: Vec<String>,

        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let mut config = sentiscore_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Score { text, json, sum }) => {
            if sum {
                config.aggregation = Aggregation::Sum;
            }
            let analyzer = SentimentAnalyzer::from_config(&config)?;
            let input = score::read_input(&text, std::io::stdin().lock())?;
            println!("{}", score::render_score(&analyzer, &input, json)?);
        }
        Some(Commands::Inspect { text, json }) => {
            let analyzer = SentimentAnalyzer::from_config(&config)?;
            let input = score::read_input(&text, std::io::stdin().lock())?;
            println!("{}", score::render_inspect(&analyzer, &input, json)?);
        }
        None => println!("sentiscore ready; try `sentiscore score \"This is great!\"`"),
    }

    Ok(())
}
