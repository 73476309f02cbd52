use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use hotel_core::Config;
use llm_client::{LlmProvider, OllamaClient};
use reception::{Receptionist, TranscriptStore};
use room_store::SqliteRoomStore;
use web_service::ServerSettings;

mod logging;
mod repl;

use logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "frontdesk")]
#[command(about = "AI hotel receptionist")]
#[command(version)]
struct Cli {
    /// Data directory (defaults to ~/.frontdesk)
    #[arg(long, env = "HOTEL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// Ollama base URL
    #[arg(long, env = "OLLAMA_BASE_URL")]
    ollama_url: Option<String>,

    /// Model name
    #[arg(long, env = "OLLAMA_MODEL")]
    model: Option<String>,

    /// Answer with the data layer's wording, without the LLM rewrite
    #[arg(long, default_value = "false")]
    no_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the web application
    Serve {
        /// Server port
        #[arg(long, env = "APP_PORT")]
        port: Option<u16>,

        /// Seed CSV imported before serving (replaces existing rooms)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Talk to the receptionist in the terminal
    Chat {
        /// Seed CSV imported before chatting (replaces existing rooms)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Load a rooms seed CSV (replaces existing rooms)
    Import {
        /// CSV with id,type,price,availability columns
        file: PathBuf,
    },
    /// Print the room overview
    Rooms,
    /// Cancel a reserved booking and free its room
    Cancel {
        /// Booking reference
        booking_id: Uuid,
    },
    /// Check a booking in
    CheckIn {
        /// Booking reference
        booking_id: Uuid,
    },
    /// Check a booking out
    CheckOut {
        /// Booking reference
        booking_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = Config::load(cli.data_dir.clone());
    if let Some(url) = cli.ollama_url.clone() {
        config.ollama_base_url = url;
    }
    if let Some(model) = cli.model.clone() {
        config.ollama_model = model;
    }
    if cli.no_llm {
        config.llm_enabled = false;
    }

    hotel_core::paths::ensure_data_dir(&config.data_dir)?;
    let store = SqliteRoomStore::new(config.database_path());
    store.init().await?;

    match cli.command {
        Commands::Serve { port, seed } => {
            if let Some(seed) = seed {
                let count = store.import_csv(&seed).await?;
                log::info!("seeded {count} rooms from {}", seed.display());
            }
            let port = port.unwrap_or(config.port);

            let transcripts = TranscriptStore::new(config.transcripts_dir());
            transcripts.init().await?;

            log::info!("LLM configuration:");
            log::info!("  Base URL: {}", config.ollama_base_url);
            log::info!("  Model: {}", config.ollama_model);
            log::info!("  Enabled: {}", config.llm_enabled);

            web_service::run(ServerSettings {
                port,
                store,
                llm: build_llm(&config),
                transcripts: Some(transcripts),
            })
            .await?;
        }
        Commands::Chat { seed } => {
            if let Some(seed) = seed {
                store.import_csv(&seed).await?;
            }
            let transcripts = TranscriptStore::new(config.transcripts_dir());
            transcripts.init().await?;

            let mut receptionist = Receptionist::new(store).with_transcripts(transcripts);
            if let Some(llm) = build_llm(&config) {
                receptionist = receptionist.with_llm(llm);
            }
            repl::run(receptionist).await?;
        }
        Commands::Import { file } => {
            let count = store.import_csv(&file).await?;
            println!("Imported {count} rooms from {}", file.display());
        }
        Commands::Rooms => {
            let overview = store.room_overview().await?;
            if overview.is_empty() {
                println!("No rooms available. Load a seed file with `frontdesk import`.");
            }
            for row in overview {
                println!(
                    "{:<8} ${:<8.2} {} available  (sleeps {})  {}",
                    row.room_type.to_string(),
                    row.price,
                    row.available_rooms,
                    row.max_occupancy,
                    row.features
                );
            }
        }
        Commands::Cancel { booking_id } => {
            let booking = store.cancel_booking(booking_id).await?;
            println!(
                "Cancelled booking {} (room {} is available again).",
                booking.id, booking.room_id
            );
        }
        Commands::CheckIn { booking_id } => {
            let booking = store.check_in(booking_id).await?;
            println!(
                "Checked in booking {} (room {}, {}).",
                booking.id, booking.room_id, booking.room_type
            );
        }
        Commands::CheckOut { booking_id } => {
            let booking = store.check_out(booking_id).await?;
            println!(
                "Checked out booking {} (room {} is available again).",
                booking.id, booking.room_id
            );
        }
    }

    Ok(())
}

fn build_llm(config: &Config) -> Option<Arc<dyn LlmProvider>> {
    if !config.llm_enabled {
        log::info!("LLM rewrite disabled; using data-layer wording");
        return None;
    }
    let client = OllamaClient::with_timeout(Duration::from_secs(config.request_timeout_secs))
        .with_base_url(config.ollama_base_url.clone())
        .with_model(config.ollama_model.clone());
    Some(Arc::new(client))
}
