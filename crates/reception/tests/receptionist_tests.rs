use std::sync::Arc;

use async_trait::async_trait;
use hotel_core::Role;
use llm_client::{LlmError, LlmProvider, LlmResult};
use reception::{Receptionist, ReplyKind, TranscriptStore, GREETING};
use room_store::SqliteRoomStore;

/// Scripted provider: always answers with the same text.
struct FixedProvider {
    text: String,
}

#[async_trait]
impl LlmProvider for FixedProvider {
    async fn generate(&self, _prompt: &str) -> LlmResult<String> {
        Ok(self.text.clone())
    }
}

/// Provider that always fails, to exercise the fallback path.
struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    async fn generate(&self, _prompt: &str) -> LlmResult<String> {
        Err(LlmError::Api("scripted failure".to_string()))
    }
}

async fn seeded_store(dir: &tempfile::TempDir) -> SqliteRoomStore {
    let store = SqliteRoomStore::new(dir.path().join("hotel.db"));
    store.init().await.unwrap();
    let seed_path = dir.path().join("rooms.csv");
    std::fs::write(
        &seed_path,
        "id,type,price,availability\n1,Single,100.00,Available\n2,Suite,300.00,Available\n",
    )
    .unwrap();
    store.import_csv(&seed_path).await.unwrap();
    store
}

#[tokio::test]
async fn informational_replies_are_naturalized() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let mut receptionist = Receptionist::new(store).with_llm(Arc::new(FixedProvider {
        text: "We'd be delighted to host you; a Single is $100 a night.".to_string(),
    }));

    let reply = receptionist.reply("any single rooms free?").await;
    assert_eq!(reply.kind, ReplyKind::Info);
    assert_eq!(
        reply.message,
        "We'd be delighted to host you; a Single is $100 a night."
    );
}

#[tokio::test]
async fn long_model_replies_are_trimmed_to_fifty_words() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let mut receptionist = Receptionist::new(store).with_llm(Arc::new(FixedProvider {
        text: "welcome ".repeat(120),
    }));

    let reply = receptionist.reply("any rooms free?").await;
    assert_eq!(reply.message.split_whitespace().count(), 50);
}

#[tokio::test]
async fn llm_failure_falls_back_to_the_data_answer() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let mut receptionist = Receptionist::new(store).with_llm(Arc::new(FailingProvider));

    let reply = receptionist.reply("any single rooms free?").await;
    assert_eq!(
        reply.message,
        "Yes, we have 1 Single room(s) available at $100.00 per night."
    );
}

#[tokio::test]
async fn booking_control_wording_bypasses_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let mut receptionist = Receptionist::new(store).with_llm(Arc::new(FixedProvider {
        text: "completely rewritten".to_string(),
    }));

    let proposal = receptionist.reply("book a suite").await;
    assert_eq!(proposal.kind, ReplyKind::BookingProposed);
    assert!(
        proposal.message.contains("(yes/no)"),
        "the confirm contract must survive: {}",
        proposal.message
    );

    let confirmation = receptionist.reply("yes").await;
    assert_eq!(confirmation.kind, ReplyKind::BookingConfirmed);
    assert!(confirmation.message.contains("booking reference"));
}

#[tokio::test]
async fn without_a_model_replies_use_engine_wording() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let mut receptionist = Receptionist::new(store);
    let reply = receptionist.reply("any single rooms free?").await;
    assert_eq!(
        reply.message,
        "Yes, we have 1 Single room(s) available at $100.00 per night."
    );
}

#[tokio::test]
async fn history_records_both_sides() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    let mut receptionist = Receptionist::new(store);
    let greeting = receptionist.greet().await;
    assert_eq!(greeting, GREETING);

    receptionist.reply("hello").await;

    let history = receptionist.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].role, Role::Receptionist);
    assert_eq!(history[1].role, Role::Guest);
    assert_eq!(history[1].text, "hello");
    assert_eq!(history[2].role, Role::Receptionist);
}

#[tokio::test]
async fn transcripts_survive_the_conversation() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;
    let transcripts = TranscriptStore::new(dir.path().join("transcripts"));
    transcripts.init().await.unwrap();

    let mut receptionist = Receptionist::new(store).with_transcripts(transcripts.clone());
    receptionist.greet().await;
    receptionist.reply("any suite free?").await;
    let session_id = receptionist.session_id();
    drop(receptionist);

    let persisted = transcripts.load(session_id).await.unwrap();
    assert_eq!(persisted.len(), 3);
    assert_eq!(persisted[1].text, "any suite free?");
}

#[tokio::test]
async fn farewell_words() {
    assert!(Receptionist::is_farewell("exit"));
    assert!(Receptionist::is_farewell(" Goodbye "));
    assert!(!Receptionist::is_farewell("goodbye for now"));
}
