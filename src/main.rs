//! Jamkeeper CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jamkeeper::cli::{Cli, Commands};
use jamkeeper::domain::models::Config;
use jamkeeper::infrastructure::config::ConfigLoader;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    // Config errors surface again inside the command; for tracing setup the
    // defaults are good enough.
    let config = ConfigLoader::load().unwrap_or_default();
    init_tracing(&config);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force } => jamkeeper::cli::commands::init::execute(force, cli.json).await,
        Commands::Team(command) => jamkeeper::cli::commands::team::execute(command, cli.json).await,
        Commands::Member(command) => {
            jamkeeper::cli::commands::member::execute(command, cli.json).await
        }
        Commands::Setup { action } => jamkeeper::cli::commands::setup::execute(action, cli.json).await,
        Commands::Report => jamkeeper::cli::commands::report::execute(cli.json).await,
        Commands::Announce { message, channels } => {
            jamkeeper::cli::commands::announce::execute(message, channels, cli.json).await
        }
        Commands::Poll { channel, question, options } => {
            jamkeeper::cli::commands::poll::execute(channel, question, options, cli.json).await
        }
        Commands::Remind { channel, message, minutes, mention } => {
            jamkeeper::cli::commands::remind::execute(channel, message, minutes, mention, cli.json)
                .await
        }
    };

    if let Err(err) = result {
        jamkeeper::cli::handle_error(err, cli.json);
    }
}
