use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

use app::App;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - portfolio content management console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the authenticated admin console
    Admin,
    /// List published blog posts, or show one by id
    Blog {
        /// Post id to show in full
        id: Option<String>,
    },
    /// List portfolio projects
    Projects,
    /// Send a message through the contact form
    Contact,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App::new()?;

    match cli.command {
        Commands::Admin => commands::admin::run(&app).await?,
        Commands::Blog { id } => commands::blog::run(&app, id.as_deref()).await,
        Commands::Projects => commands::projects::run(&app).await,
        Commands::Contact => commands::contact::run(&app).await?,
    }

    Ok(())
}
