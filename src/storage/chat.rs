//! Chat transcript storage
//!
//! The transcript lives in a single JSON blob under the `kiko_chat` key. There is
//! no versioning: whatever was last saved is what gets loaded.

use crate::storage::{get_data_dir, StorageError};
use crate::types::message::{ChatData, ChatMessage};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Storage key of the transcript blob
pub const CHAT_STORAGE_KEY: &str = "kiko_chat";

/// File-backed key-value slot holding the chat transcript
pub struct ChatStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl ChatStore {
    /// Open the store inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", CHAT_STORAGE_KEY)),
            lock: Mutex::new(()),
        }
    }

    /// Open the store in the application data directory
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(get_data_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the transcript
    ///
    /// Returns `None` when nothing is stored or the blob can't be read.
    pub fn load_chat_data(&self) -> Option<ChatData> {
        let _guard = self.guard();
        self.load_logged()
    }

    /// Save the transcript, replacing any previous one
    pub fn save_chat_data(&self, chat_data: &ChatData) {
        let _guard = self.guard();
        self.save_logged(chat_data);
    }

    /// Append a message to the stored transcript
    ///
    /// Does nothing when no transcript exists. Returns whether the message was stored.
    pub fn add_message(&self, message: ChatMessage) -> bool {
        self.add_messages(vec![message])
    }

    /// Append several messages in one read-modify-write cycle
    pub fn add_messages(&self, messages: Vec<ChatMessage>) -> bool {
        let _guard = self.guard();
        match self.load_logged() {
            Some(mut chat_data) => {
                chat_data.messages.extend(messages);
                self.save_logged(&chat_data)
            }
            None => false,
        }
    }

    /// Start a new transcript from the homepage idea input
    ///
    /// Blank ideas are ignored. Any previous transcript is replaced.
    pub fn start_chat(&self, idea: &str) -> Option<ChatData> {
        let idea = idea.trim();
        if idea.is_empty() {
            return None;
        }

        let chat_data = ChatData::from_idea(idea);
        let _guard = self.guard();
        self.save_logged(&chat_data).then_some(chat_data)
    }

    /// Remove the stored transcript
    ///
    /// Returns false only when the blob exists but couldn't be removed.
    pub fn clear_chat_data(&self) -> bool {
        let _guard = self.guard();
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Cleared chat data");
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => {
                tracing::error!("Error clearing chat data: {}", e);
                false
            }
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load_logged(&self) -> Option<ChatData> {
        match self.load_internal() {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Error loading chat data: {}", e);
                None
            }
        }
    }

    fn save_logged(&self, chat_data: &ChatData) -> bool {
        match self.save_internal(chat_data) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error saving chat data: {}", e);
                false
            }
        }
    }

    fn load_internal(&self) -> Result<Option<ChatData>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if json.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save_internal(&self, chat_data: &ChatData) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(chat_data)?;
        fs::write(&self.path, json)?;
        tracing::debug!(messages = chat_data.messages.len(), "Saved chat data");
        Ok(())
    }
}

/// Build the canned assistant acknowledgement for a user message
pub fn generate_assistant_reply(user_message: &str) -> ChatMessage {
    ChatMessage::assistant(format!(
        "Cool, I'll add this detail to your moodboard! \"{}\"",
        user_message
    ))
}
