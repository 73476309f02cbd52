use std::path::{Path, PathBuf};

use hotel_core::Message;
use tokio::fs;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use uuid::Uuid;

/// Append-only JSONL transcripts, one file per chat session.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    base_path: PathBuf,
}

impl TranscriptStore {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub async fn init(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.base_path).await
    }

    pub async fn append(&self, session_id: Uuid, message: &Message) -> std::io::Result<()> {
        let json = serde_json::to_string(message)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.transcript_path(session_id))
            .await?;
        file.write_all(json.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await
    }

    pub async fn load(&self, session_id: Uuid) -> std::io::Result<Vec<Message>> {
        let path = self.transcript_path(session_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(path).await?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();
        let mut messages = Vec::new();

        while let Some(line) = lines.next_line().await? {
            match serde_json::from_str(&line) {
                Ok(message) => messages.push(message),
                // a torn write at the tail should not lose the whole transcript
                Err(e) => log::warn!("skipping malformed transcript line: {e}"),
            }
        }

        Ok(messages)
    }

    fn transcript_path(&self, session_id: Uuid) -> PathBuf {
        self.base_path.join(format!("{session_id}.jsonl"))
    }
}
