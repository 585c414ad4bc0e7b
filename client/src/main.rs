use clap::{Parser, Subcommand};
use survivor_client::board::render_board;
use survivor_client::{ClientConfig, LeaderboardClient};
use survivor_common::validation::validate_limit;
use survivor_common::ScoreSubmission;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Office Survivor leaderboard client")]
struct Cli {
    #[command(flatten)]
    config: ClientConfig,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the top of the board
    Top {
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },
    /// Submit a finished run
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        score: i64,
        /// Survival time in seconds
        #[arg(long, allow_negative_numbers = true)]
        time: f64,
        #[arg(long)]
        character: Option<String>,
    },
}

#[ntex::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let client = LeaderboardClient::new(cli.config);

    match cli.command {
        Command::Top { limit } => {
            let limit = validate_limit(Some(limit))?;
            let entries = client.fetch_leaderboard(limit).await;
            print!("{}", render_board(&entries));
        }
        Command::Submit {
            name,
            score,
            time,
            character,
        } => {
            let run = ScoreSubmission::new(name, score, time, character);
            let result = client.submit_score(&run).await?;
            println!("Score submitted: entry #{} ranked {}", result.id, result.rank);
        }
    }
    Ok(())
}
