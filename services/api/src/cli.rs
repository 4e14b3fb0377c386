use crate::demo::{run_catalog_listing, run_demo, run_score_report, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "AI Readiness Scoring",
    about = "Score AI readiness assessments and serve the scoring API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a response file (JSON object or question_key,answer_text CSV)
    Score(ScoreArgs),
    /// Print the question catalog grouped by dimension
    Catalog,
    /// Walk through a sample submission, its scores, and advisory context
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score_report(args),
        Command::Catalog => run_catalog_listing(),
        Command::Demo(args) => run_demo(args),
    }
}
