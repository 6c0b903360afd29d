mod appsettings;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use calrelay_models::settings::Settings;
use calrelay_relay::RelayRoutes;
use calrelay_telegram::{HttpRelayClient, RelayClient, TelegramInteractionInterface, teloxide::Bot};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "Relays chat commands to local calendar and music executables")]
struct Cli {
    #[command(subcommand)]
    component: Component,
}

#[derive(Subcommand, Debug)]
enum Component {
    /// Run the Telegram bot front-end.
    Bot,
    /// Run the HTTP relay that invokes the executables.
    Relay,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let settings = match appsettings::load() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Failed to load settings: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.component {
        Component::Bot => run_bot(settings).await,
        Component::Relay => run_relay(settings).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&filters)
        .init();
}

async fn run_bot(settings: Settings) -> anyhow::Result<()> {
    let token = appsettings::bot_token(&settings.telegram).inspect_err(|_| {
        appsettings::print_token_help();
    })?;

    let relay: Arc<dyn RelayClient> = Arc::new(
        HttpRelayClient::new(&settings.relay_client).context("Failed to build relay client")?,
    );
    log::info!("Relaying commands to {}", settings.relay_client.base_url);

    TelegramInteractionInterface::start(Bot::new(token), relay).await;
    Ok(())
}

async fn run_relay(settings: Settings) -> anyhow::Result<()> {
    let routes = RelayRoutes::from_settings(&settings.executables);
    log::info!(
        "Reminder executable: {} ({}s), song search executable: {} ({}s)",
        settings.executables.reminder.path.display(),
        settings.executables.reminder.timeout_secs,
        settings.executables.search_song.path.display(),
        settings.executables.search_song.timeout_secs,
    );

    calrelay_relay::serve(settings.server.bind_address, routes, shutdown_signal())
        .await
        .context("Relay service failed")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received shutdown signal. Shutting down gracefully..."),
        Err(err) => {
            log::error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    }
}
