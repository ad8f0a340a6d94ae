mod config;
mod platform;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LoggingConfig};
use crate::platform::Platform;

/// Storefront server - domain services and the orchestrating gateway.
#[derive(Parser)]
#[command(name = "storefront-server")]
#[command(about = "Storefront server - domain services and the orchestrating gateway")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the platform and wait for shutdown
    Run,
    /// Validate configuration and exit
    Check,
    /// Seed demo data and drive the gateway workflows once
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
        }
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging, cli.verbose);

    tracing::info!("Storefront server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
        Commands::Demo => run_demo(config).await,
    }
}

fn init_logging(cfg: &LoggingConfig, verbose: u8) {
    let level = match verbose {
        0 => cfg.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    println!("Configuration is valid");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let _platform = Platform::wire(&config);
    tracing::info!("Services wired; gateway ready");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    Ok(())
}

/// Seed a user with addresses and an in-flight order, then drive each
/// gateway workflow once, including the cascading deletion.
async fn run_demo(config: AppConfig) -> Result<()> {
    let platform = Platform::wire(&config);
    let cancel = CancellationToken::new();

    let user = platform
        .users
        .create_user(
            &cancel,
            users_sdk::NewUser {
                email: "demo@example.com".to_owned(),
                display_name: "Demo User".to_owned(),
            },
        )
        .await?;
    tracing::info!(user_id = %user.id, "Seeded user");

    for street in ["1 Demo Way", "2 Demo Way"] {
        platform
            .addresses
            .create_address(
                &cancel,
                addresses_sdk::NewAddress {
                    user_id: user.id,
                    street: street.to_owned(),
                    city: "Demoville".to_owned(),
                    postal_code: "00001".to_owned(),
                },
            )
            .await?;
    }

    let product = platform
        .products
        .create_product(
            &cancel,
            products_sdk::NewProduct {
                name: "Demo Widget".to_owned(),
                price_cents: 1299,
            },
        )
        .await?;

    let order = platform
        .gateway
        .place_order(
            &cancel,
            &user.id.to_string(),
            &product.id.to_string(),
            2,
        )
        .await?;
    tracing::info!(order_id = %order.id, "Placed order through the gateway");

    let overview = platform
        .gateway
        .user_overview(&cancel, &user.id.to_string())
        .await?;
    println!(
        "Overview: {} <{}> - {} address(es), {} in-flight order(s)",
        overview.user.display_name,
        overview.user.email,
        overview.addresses.len(),
        overview.in_flight_orders.len()
    );

    let report = platform
        .gateway
        .delete_user_cascade(&cancel, &user.id.to_string())
        .await?;
    println!(
        "Deleted user {} in {} step(s)",
        report.user_id,
        report.steps.len()
    );
    for step in &report.steps {
        println!(
            "  {} {}{}",
            step.step,
            step.target.map(|id| id.to_string()).unwrap_or_default(),
            if step.already_absent {
                " (already absent)"
            } else {
                ""
            }
        );
    }

    // The structured failure path, for show: the user is gone now.
    match platform.users.get_user(&cancel, user.id).await {
        Err(error) => {
            let info = error.error_info();
            println!("Follow-up lookup failed as expected: {} ({})", info.message, info.code);
        }
        Ok(_) => anyhow::bail!("user should be gone after the cascade"),
    }

    Ok(())
}
