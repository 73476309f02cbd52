use std::sync::Arc;

use hotel_core::Message;
use llm_client::LlmProvider;
use room_store::SqliteRoomStore;
use uuid::Uuid;

use crate::engine::{EngineReply, HotelEngine, ReplyKind};
use crate::prompt;
use crate::transcript::TranscriptStore;

pub const GREETING: &str =
    "Welcome to our hotel! I'm your AI receptionist. How may I assist you today?";
pub const FAREWELL: &str = "Thank you for choosing our hotel. Have a great day!";

/// One conversation: the engine plus the LLM rewrite and the transcript.
pub struct Receptionist {
    session_id: Uuid,
    engine: HotelEngine,
    llm: Option<Arc<dyn LlmProvider>>,
    history: Vec<Message>,
    transcripts: Option<TranscriptStore>,
}

impl Receptionist {
    pub fn new(store: SqliteRoomStore) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            engine: HotelEngine::new(store),
            llm: None,
            history: Vec::new(),
            transcripts: None,
        }
    }

    /// Attach a model. Without one, replies use the engine's own wording.
    pub fn with_llm(mut self, llm: Arc<dyn LlmProvider>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn with_transcripts(mut self, transcripts: TranscriptStore) -> Self {
        self.transcripts = Some(transcripts);
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn engine(&self) -> &HotelEngine {
        &self.engine
    }

    /// Words that end a conversation.
    pub fn is_farewell(input: &str) -> bool {
        matches!(
            input.trim().to_lowercase().as_str(),
            "exit" | "bye" | "goodbye"
        )
    }

    /// Open the conversation with the standing greeting.
    pub async fn greet(&mut self) -> String {
        self.record(Message::receptionist(GREETING)).await;
        GREETING.to_string()
    }

    /// Handle one guest line. Never fails: data-layer errors become an
    /// apology so the conversation can continue.
    pub async fn reply(&mut self, input: &str) -> EngineReply {
        self.record(Message::guest(input)).await;

        let mut reply = match self.engine.handle(input).await {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("engine error for session {}: {e}", self.session_id);
                EngineReply {
                    kind: ReplyKind::Error,
                    message: format!("I apologize, but I encountered an error: {e}"),
                }
            }
        };

        if self.should_naturalize(reply.kind) {
            reply.message = self.naturalize(input, &reply.message).await;
        }

        self.record(Message::receptionist(reply.message.clone()))
            .await;
        reply
    }

    /// Booking-control wording is load-bearing (it carries the yes/no
    /// contract and the booking reference), so only informational replies
    /// go through the model.
    fn should_naturalize(&self, kind: ReplyKind) -> bool {
        self.llm.is_some() && matches!(kind, ReplyKind::Info | ReplyKind::Error)
    }

    async fn naturalize(&self, user_query: &str, hotel_data: &str) -> String {
        let Some(llm) = &self.llm else {
            return hotel_data.to_string();
        };

        match llm.generate(&prompt::build_prompt(user_query, hotel_data)).await {
            Ok(text) => {
                let trimmed = prompt::trim_words(&text, prompt::MAX_REPLY_WORDS);
                if trimmed.is_empty() {
                    hotel_data.to_string()
                } else {
                    trimmed
                }
            }
            Err(e) => {
                // fall back to the data layer's own wording
                log::error!("llm error for session {}: {e}", self.session_id);
                hotel_data.to_string()
            }
        }
    }

    async fn record(&mut self, message: Message) {
        if let Some(transcripts) = &self.transcripts {
            if let Err(e) = transcripts.append(self.session_id, &message).await {
                log::warn!("failed to persist transcript line: {e}");
            }
        }
        self.history.push(message);
    }
}
