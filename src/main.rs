mod api;
mod error;
mod project_url;
mod status_field;
mod update_status;

use clap::Parser;
use update_status::{update_item_status, UpdateStatusOpts};

/// Update the Status field of an item on a Github Projects (next) board.
#[derive(Parser, Debug)]
struct Args {
    /// URL of the project board, eg https://github.com/orgs/my-org/projects/7.
    #[arg(long)]
    project_url: String,
    /// Github access token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,
    /// Node ID of the project item to move.
    #[arg(long)]
    item_id: String,
    /// Name of the status to move the item to.
    #[arg(long)]
    status: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Init the logging.
    tracing_subscriber::fmt()
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::ENTER)
        .init();

    let args = Args::parse();

    update_item_status(UpdateStatusOpts {
        token: &args.github_token,
        project_url: &args.project_url,
        item_id: &args.item_id,
        status: &args.status,
    }).await?;

    Ok(())
}
