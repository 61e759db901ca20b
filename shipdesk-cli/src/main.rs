mod args;
mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use shipdesk_export::app_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let out_dir = cli.out_dir.unwrap_or_else(|| config.export.out_dir.clone());

    match cli.command {
        Commands::Manifest {
            carrier,
            input,
            shipment_type,
            ship_date,
        } => {
            let path = commands::manifest(&config, &out_dir, carrier.into(), &input, &shipment_type, ship_date)?;
            tracing::info!("Wrote {}", path.display());
        }
        Commands::Settlement {
            input,
            commission,
            mark_paid,
        } => {
            let path = commands::settlement(&config, &out_dir, &input, &commission, mark_paid)?;
            tracing::info!("Wrote {}", path.display());
        }
        Commands::Customers { input } => {
            let path = commands::customers(&config, &out_dir, &input)?;
            tracing::info!("Wrote {}", path.display());
        }
        Commands::Tags(args) => {
            let requests = commands::plan_tags(&args)?;
            commands::print_requests(&requests)?;
        }
    }

    Ok(())
}
