use clap::{Parser, Subcommand};

use pickupwatch_core::catalog::{display_name, storage_label, CANDIDATE_LOCATIONS, WATCHED_PARTS};
use pickupwatch_fulfillment::FulfillmentClient;
use pickupwatch_notify::Notifier;
use pickupwatch_sweep::run_sweep;

#[derive(Debug, Parser)]
#[command(name = "pickupwatch")]
#[command(about = "iPhone pickup-availability watcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one availability sweep and print the JSON summary.
    Sweep,
    /// Print the watched variants and candidate cities.
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sweep => sweep().await,
        Commands::Catalog => {
            catalog();
            Ok(())
        }
    }
}

async fn sweep() -> anyhow::Result<()> {
    let config = pickupwatch_core::load_app_config_from_env()?;

    let resolver = FulfillmentClient::new(
        &config.fulfillment_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.inter_request_delay_ms,
    )?;
    let notifier = Notifier::new(
        &config.pushover_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let outcome = run_sweep(
        &resolver,
        &notifier,
        &CANDIDATE_LOCATIONS,
        &WATCHED_PARTS,
        |key| std::env::var(key),
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn catalog() {
    println!("watched variants:");
    for part in WATCHED_PARTS {
        println!("  {part}  {} ({})", display_name(part), storage_label(part));
    }
    println!("candidate cities (priority order):");
    for location in CANDIDATE_LOCATIONS {
        println!("  {location}");
    }
}
