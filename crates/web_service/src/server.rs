use std::collections::HashMap;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use llm_client::LlmProvider;
use reception::{Receptionist, TranscriptStore};
use room_store::SqliteRoomStore;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::controllers::{room_controller, session_controller, system_controller};

pub struct ServerSettings {
    pub port: u16,
    pub store: SqliteRoomStore,
    pub llm: Option<Arc<dyn LlmProvider>>,
    pub transcripts: Option<TranscriptStore>,
}

/// Shared state: the store plus the live chat sessions.
pub struct AppState {
    store: SqliteRoomStore,
    llm: Option<Arc<dyn LlmProvider>>,
    transcripts: Option<TranscriptStore>,
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<Receptionist>>>>,
}

impl AppState {
    pub fn new(
        store: SqliteRoomStore,
        llm: Option<Arc<dyn LlmProvider>>,
        transcripts: Option<TranscriptStore>,
    ) -> Self {
        Self {
            store,
            llm,
            transcripts,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &SqliteRoomStore {
        &self.store
    }

    /// Start a conversation and return its id and opening line.
    pub async fn create_session(&self) -> (Uuid, String) {
        let mut receptionist = Receptionist::new(self.store.clone());
        if let Some(llm) = &self.llm {
            receptionist = receptionist.with_llm(llm.clone());
        }
        if let Some(transcripts) = &self.transcripts {
            receptionist = receptionist.with_transcripts(transcripts.clone());
        }

        let greeting = receptionist.greet().await;
        let session_id = receptionist.session_id();
        self.sessions
            .write()
            .await
            .insert(session_id, Arc::new(Mutex::new(receptionist)));

        log::info!("created chat session {session_id}");
        (session_id, greeting)
    }

    pub async fn session(&self, session_id: Uuid) -> Option<Arc<Mutex<Receptionist>>> {
        self.sessions.read().await.get(&session_id).cloned()
    }
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(session_controller::config)
            .configure(room_controller::config)
            .configure(system_controller::config),
    )
    .route("/", web::get().to(system_controller::index));
}

/// Run the web service until the server shuts down.
pub async fn run(settings: ServerSettings) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(
        settings.store,
        settings.llm,
        settings.transcripts,
    ));
    let port = settings.port;

    log::info!("starting web service on http://127.0.0.1:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
